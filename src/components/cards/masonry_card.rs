//! Masonry Card
//!
//! Grid cell that stays a fixed-height placeholder until it scrolls near
//! the viewport, then fetches its media, measures the natural size and
//! claims enough grid rows to fit without cropping.

use dioxus::prelude::*;
use srefhub_core::layout::span_style;
use srefhub_core::{LazyCard, MediaItem, MediaType};

use crate::context::use_app;
use crate::hooks::observe_visibility;

/// Lazy media cell in a masonry grid.
///
/// The caller owns `card` so it can also drive the card's toggles.
///
/// # Examples
///
/// ```rust,ignore
/// let card = use_signal(|| LazyCard::new(config.grid));
/// rsx! {
///     MasonryCard {
///         dom_id: "gallery-g1",
///         card,
///         media_url: item.preview_url().to_string(),
///         alt: item.title.clone(),
///         div { class: "card-footer", "{item.title}" }
///     }
/// }
/// ```
#[component]
pub fn MasonryCard(
    /// Unique DOM id the visibility observer attaches to
    dom_id: String,
    /// Reveal/span/toggle state owned by the caller
    card: Signal<LazyCard>,
    /// Image or video URL (absolute or API-relative)
    media_url: String,
    #[props(default)] media_type: MediaType,
    alt: String,
    /// Footer content under the media
    children: Element,
) -> Element {
    let ctx = use_app();
    let api = ctx.api.clone();
    let margin = ctx.config.reveal_margin_px;
    let resolved_url = ctx.api.media_url(&media_url);

    let mut card = card;
    let mut media: Signal<Option<MediaItem>> = use_signal(|| None);
    let mut requested = use_signal(|| false);
    let mut failed = use_signal(|| false);

    // Fetch once after the first reveal; videos stream straight from the URL
    use_effect(move || {
        if !card.read().is_revealed() || media_type == MediaType::Video || *requested.peek() {
            return;
        }
        requested.set(true);
        if media_url.is_empty() {
            failed.set(true);
            return;
        }

        let api = api.clone();
        let url = media_url.clone();
        spawn(async move {
            let loaded = match api.fetch_media(&url).await {
                Ok(bytes) => MediaItem::from_bytes(url.clone(), &bytes),
                Err(e) => Err(e),
            };
            match loaded {
                Ok(item) => {
                    let natural = item.natural;
                    if let Some(span) = card.write().span.on_image_load(natural.width, natural.height) {
                        tracing::trace!(url = %url, span, "Card span measured");
                    }
                    media.set(Some(item));
                }
                Err(e) => {
                    // Broken media keeps the fallback span
                    tracing::warn!(url = %url, error = %e, "Media failed to load");
                    failed.set(true);
                }
            }
        });
    });

    let revealed = card.read().is_revealed();
    let style = span_style(card.read().grid_span());
    let observed_id = dom_id.clone();

    rsx! {
        article {
            id: "{dom_id}",
            class: if revealed { "masonry-card revealed" } else { "masonry-card" },
            style: "{style}",
            onmounted: move |_| {
                observe_visibility(observed_id.clone(), margin, true, move |visible| {
                    if !card.peek().is_revealed() {
                        card.write().reveal.observe(visible);
                    }
                });
            },
            onresize: move |evt: Event<ResizeData>| {
                if let Ok(size) = evt.data().get_border_box_size() {
                    // Only write when the tracker actually changes
                    let mut span = card.peek().span.clone();
                    span.on_resize(size.width);
                    if span != card.peek().span {
                        card.write().span = span;
                    }
                }
            },

            div { class: "masonry-media",
                if !revealed {
                    div { class: "media-placeholder" }
                } else if media_type == MediaType::Video {
                    video {
                        class: "media-video",
                        src: "{resolved_url}",
                        muted: true,
                        autoplay: true,
                        r#loop: true,
                        playsinline: true,
                    }
                } else if let Some(item) = media() {
                    img { class: "media-img", src: "{item.data_uri}", alt: "{alt}" }
                } else if failed() {
                    div { class: "media-error", "Image unavailable" }
                } else {
                    div { class: "media-placeholder loading",
                        div { class: "loading-spinner" }
                    }
                }
            }

            {children}
        }
    }
}
