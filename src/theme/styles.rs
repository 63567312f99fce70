//! Global CSS styles for SrefHub.
//!
//! Dark gallery aesthetic: media first, chrome recedes. Grid track sizes
//! for the masonry layout come from `GridMetrics` as an inline style on the
//! container; only the column template lives here.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID (Backgrounds) */
  --void-black: #0a0a0a;
  --void-lighter: #111415;
  --void-border: #1f2326;

  /* CYAN (Links, Input, Active) */
  --cyan: #00d4aa;
  --cyan-glow: rgba(0, 212, 170, 0.3);

  /* GOLD (Titles, Highlights) */
  --gold: #d4af37;
  --gold-glow: rgba(212, 175, 55, 0.3);

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* SEMANTIC */
  --danger: #ff3366;
  --success: #7cb87c;
  --info: #5f8fff;
  --like: #ff5c8a;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;
  --font-sans: 'Inter', system-ui, sans-serif;

  --text-xs: 0.75rem;
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-3xl: 3rem;

  --radius: 10px;
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;

  /* Masonry */
  --column-min: 260px;
  --column-gap: 16px;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-sans);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

a { color: var(--cyan); text-decoration: none; }

/* === Typography === */
.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 400;
  color: var(--gold);
  text-shadow: 0 0 30px var(--gold-glow);
  letter-spacing: 0.05em;
}

.section-title,
.section-header {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 400;
  color: var(--gold);
  margin: 1.5rem 0 0.75rem;
}

.subtitle, .empty-text { color: var(--text-muted); font-size: var(--text-sm); }
.body-text { color: var(--text-secondary); line-height: 1.7; }
.form-error { color: var(--danger); font-size: var(--text-sm); }

/* === Navigation === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 10;
  background: rgba(10, 10, 10, 0.92);
  backdrop-filter: blur(8px);
  border-bottom: 1px solid var(--void-border);
}

.nav-header-inner {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 2rem;
  max-width: 1400px;
  margin: 0 auto;
  padding: 0.75rem 1.5rem;
}

.app-title {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  color: var(--gold);
}

.nav-links { display: flex; gap: 1.25rem; }

.nav-link {
  color: var(--text-secondary);
  font-size: var(--text-sm);
  padding: 0.25rem 0;
  border-bottom: 2px solid transparent;
  transition: color var(--transition-fast);
}

.nav-link:hover { color: var(--text-primary); }
.nav-link.active { color: var(--cyan); border-bottom-color: var(--cyan); }

.nav-session { display: flex; align-items: center; gap: 0.75rem; }
.session-user { font-family: var(--font-mono); font-size: var(--text-xs); color: var(--text-muted); }

/* === Buttons === */
.btn-primary, .btn-secondary, .btn-danger, .btn-ghost, .btn-chip, .close-btn {
  font: inherit;
  font-size: var(--text-sm);
  cursor: pointer;
  border-radius: 6px;
  transition: all var(--transition-fast);
}

.btn-primary {
  background: var(--cyan);
  color: var(--void-black);
  border: 1px solid var(--cyan);
  padding: 0.5rem 1.1rem;
  font-weight: 600;
}

.btn-primary:hover:not(:disabled) { box-shadow: 0 0 16px var(--cyan-glow); }

.btn-secondary {
  background: transparent;
  color: var(--text-primary);
  border: 1px solid var(--void-border);
  padding: 0.5rem 1.1rem;
}

.btn-secondary:hover:not(:disabled) { border-color: var(--cyan); }

.btn-danger {
  background: transparent;
  color: var(--danger);
  border: 1px solid var(--danger);
  padding: 0.4rem 0.9rem;
}

.btn-ghost {
  background: none;
  border: none;
  color: var(--text-secondary);
  padding: 0.4rem 0.6rem;
}

.btn-ghost:hover { color: var(--cyan); }

.btn-chip {
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  color: var(--text-secondary);
  border-radius: 999px;
  padding: 0.2rem 0.7rem;
  font-size: var(--text-xs);
}

.btn-chip.active { color: var(--like); border-color: var(--like); }
.btn-large { padding: 0.75rem 1.75rem; font-size: var(--text-base); }

button:disabled { opacity: 0.45; cursor: not-allowed; }

.close-btn {
  background: none;
  border: none;
  color: var(--text-muted);
  padding: 0 0.25rem;
  font-size: var(--text-lg);
}

/* === Inputs === */
.form-field { display: flex; flex-direction: column; gap: 0.35rem; margin: 0.75rem 0; }
.input-label { font-size: var(--text-sm); color: var(--text-secondary); }
.input-hint { color: var(--text-muted); margin-left: 0.5rem; font-size: var(--text-xs); }

.input-field {
  font: inherit;
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: 6px;
  color: var(--text-primary);
  padding: 0.55rem 0.8rem;
}

.input-field:focus {
  outline: none;
  border-color: var(--cyan);
  box-shadow: 0 0 0 3px var(--cyan-glow);
}

.input-field.textarea { min-height: 6rem; resize: vertical; }
.search-input-wrapper { display: flex; align-items: center; gap: 0.4rem; }
.search-icon { font-size: var(--text-sm); opacity: 0.6; }
.search-input { min-width: 240px; }

/* === Filters === */
.filter-bar {
  display: flex;
  flex-wrap: wrap;
  align-items: center;
  gap: 0.75rem 1.5rem;
  margin: 1rem 0 1.5rem;
}

.filter-pills { display: flex; flex-wrap: wrap; gap: 0.4rem; }

.pill {
  font: inherit;
  font-size: var(--text-xs);
  background: transparent;
  color: var(--text-secondary);
  border: 1px solid var(--void-border);
  border-radius: 999px;
  padding: 0.3rem 0.85rem;
  cursor: pointer;
}

.pill.selected { color: var(--void-black); background: var(--cyan); border-color: var(--cyan); }

/* === Pages === */
.page { max-width: 1400px; margin: 0 auto; padding: 1.5rem; }
.page-header { margin-bottom: 0.5rem; }

.landing { max-width: 960px; margin: 0 auto; padding: 5rem 1.5rem; text-align: center; }
.tagline { color: var(--text-secondary); font-size: var(--text-lg); margin-top: 0.75rem; }
.landing-actions { display: flex; gap: 1rem; justify-content: center; margin-top: 2.5rem; }
.feature-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin-top: 4rem; text-align: left; }

.startup-error { max-width: 640px; margin: 6rem auto; text-align: center; }

/* === Masonry Grid === */
.masonry-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(var(--column-min), 1fr));
  column-gap: var(--column-gap);
  align-items: start;
}

.masonry-card {
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: var(--radius);
  overflow: hidden;
  display: flex;
  flex-direction: column;
  opacity: 0.6;
  transition: opacity var(--transition-normal), border-color var(--transition-fast);
}

.masonry-card.revealed { opacity: 1; }
.masonry-card:hover { border-color: rgba(0, 212, 170, 0.4); }

.masonry-media { position: relative; width: 100%; }
.media-img, .media-video { display: block; width: 100%; height: auto; }

.media-placeholder, .media-error {
  width: 100%;
  aspect-ratio: 3 / 4;
  background: linear-gradient(135deg, #15191b, #0d0f10);
  display: flex;
  align-items: center;
  justify-content: center;
}

.media-error { color: var(--text-muted); font-size: var(--text-xs); }

.card-body { padding: 0.75rem 0.9rem 0.9rem; display: flex; flex-direction: column; gap: 0.45rem; }
.card-title-row { display: flex; align-items: center; justify-content: space-between; gap: 0.5rem; }
.card-title { font-size: var(--text-sm); font-weight: 600; color: var(--text-primary); }

.card-prompt {
  font-size: var(--text-xs);
  color: var(--text-secondary);
  display: -webkit-box;
  -webkit-line-clamp: 3;
  -webkit-box-orient: vertical;
  overflow: hidden;
}

.model-badge, .difficulty-badge, .category {
  font-family: var(--font-mono);
  font-size: 0.65rem;
  text-transform: uppercase;
  letter-spacing: 0.05em;
  color: var(--gold);
  border: 1px solid var(--gold-glow);
  border-radius: 4px;
  padding: 0.05rem 0.4rem;
  align-self: flex-start;
}

.tag-row { display: flex; flex-wrap: wrap; gap: 0.3rem; }

.tag {
  font: inherit;
  font-size: var(--text-xs);
  background: none;
  border: none;
  color: var(--cyan);
  cursor: pointer;
}

.card-actions { display: flex; flex-wrap: wrap; align-items: center; gap: 0.4rem; }
.card-meta { display: flex; justify-content: space-between; font-size: var(--text-xs); color: var(--text-muted); }
.card-counts { font-size: var(--text-xs); color: var(--text-muted); }

.sref-row { display: flex; align-items: center; justify-content: space-between; }
.sref-code { font-family: var(--font-mono); font-size: var(--text-xs); color: var(--gold); }

/* === Infinite Scroll === */
.scroll-sentinel { min-height: 1px; padding: 2rem 0; }

.list-status {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.75rem;
  color: var(--text-muted);
  font-size: var(--text-sm);
}

.list-status.error { color: var(--danger); }

.loading-spinner {
  width: 18px;
  height: 18px;
  border: 2px solid var(--void-border);
  border-top-color: var(--cyan);
  border-radius: 50%;
  animation: spin 0.8s linear infinite;
}

@keyframes spin { to { transform: rotate(360deg); } }

/* === Dashboard === */
.stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(130px, 1fr)); gap: 0.75rem; }

.stat-box {
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: var(--radius);
  padding: 1rem;
  text-align: center;
}

.stat-value { font-size: var(--text-xl); color: var(--cyan); font-family: var(--font-mono); }
.stat-label { font-size: var(--text-xs); color: var(--text-muted); text-transform: uppercase; }

.tab-bar { display: flex; gap: 0.25rem; border-bottom: 1px solid var(--void-border); margin: 2rem 0 1rem; }

.tab {
  font: inherit;
  background: none;
  border: none;
  border-bottom: 2px solid transparent;
  color: var(--text-secondary);
  padding: 0.6rem 1rem;
  cursor: pointer;
}

.tab.active { color: var(--cyan); border-bottom-color: var(--cyan); }

.post-row, .prompt-card, .user-row {
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-radius: var(--radius);
  padding: 0.75rem 1rem;
  margin-bottom: 0.5rem;
}

.prompt-card { flex-direction: column; align-items: stretch; }
.post-row.editing { border-color: var(--cyan); }
.post-row-main { display: flex; flex-direction: column; gap: 0.2rem; }
.prompt-content { font-family: var(--font-mono); font-size: var(--text-xs); color: var(--text-secondary); white-space: pre-wrap; }

.edit-panel { border: 1px solid var(--cyan); border-radius: var(--radius); padding: 1rem; margin: 1rem 0; }
.form-actions { display: flex; gap: 0.5rem; margin-top: 0.75rem; }

.network-columns { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
.user-row-main { display: flex; flex-direction: column; flex: 1; }
.user-bio { font-size: var(--text-xs); color: var(--text-muted); }

.avatar {
  width: 36px;
  height: 36px;
  border-radius: 50%;
  background: var(--void-border);
  color: var(--gold);
  display: flex;
  align-items: center;
  justify-content: center;
}

.pager { display: flex; align-items: center; justify-content: center; gap: 1rem; margin: 1.5rem 0; }
.pager-summary { font-size: var(--text-sm); color: var(--text-muted); }

.empty-state { text-align: center; padding: 4rem 1rem; }

/* === Login / Admin === */
.login-card { max-width: 440px; margin: 4rem auto; display: flex; flex-direction: column; gap: 0.5rem; }
.admin-section { margin: 1.5rem 0; max-width: 720px; }
.import-preview { margin-top: 1rem; padding: 1rem; border: 1px dashed var(--void-border); border-radius: var(--radius); }
.import-fields { font-family: var(--font-mono); font-size: var(--text-xs); color: var(--text-muted); }

/* === Toasts === */
.toast-stack {
  position: fixed;
  right: 1.25rem;
  bottom: 1.25rem;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  z-index: 100;
}

.toast {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  min-width: 260px;
  max-width: 420px;
  background: var(--void-lighter);
  border: 1px solid var(--void-border);
  border-left: 3px solid var(--info);
  border-radius: 6px;
  padding: 0.6rem 0.8rem;
  font-size: var(--text-sm);
  box-shadow: 0 8px 24px rgba(0, 0, 0, 0.5);
}

.toast-success { border-left-color: var(--success); }
.toast-error { border-left-color: var(--danger); }
.toast-message { flex: 1; }
"#;
