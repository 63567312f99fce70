//! Masonry layout - grid row spans from image aspect ratio.
//!
//! The card grid uses fixed-height implicit rows (`grid-auto-rows`) and each
//! card claims `grid-row-end: span N`. N is derived from the image's natural
//! size scaled to the rendered column width:
//!
//! ```text
//! rendered_height = round(natural_height / natural_width * column_width)
//! span            = ceil((rendered_height + row_gap) / row_height)
//! ```
//!
//! Until natural dimensions are known a card holds [`FALLBACK_SPAN`] rows so
//! the grid does not jump while images stream in.

use serde::{Deserialize, Serialize};

/// Rows held by a card before its image has loaded (38 × 8px ≈ 300px)
pub const FALLBACK_SPAN: u32 = 38;

/// Height of one implicit grid row in pixels
pub const DEFAULT_ROW_HEIGHT_PX: f64 = 8.0;

/// Row gap between implicit grid rows in pixels
pub const DEFAULT_ROW_GAP_PX: f64 = 0.0;

/// Fixed track sizes of the masonry grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridMetrics {
    pub row_height_px: f64,
    pub row_gap_px: f64,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            row_height_px: DEFAULT_ROW_HEIGHT_PX,
            row_gap_px: DEFAULT_ROW_GAP_PX,
        }
    }
}

impl GridMetrics {
    /// Inline style for the grid container matching these metrics
    pub fn container_style(&self) -> String {
        format!(
            "grid-auto-rows: {}px; row-gap: {}px;",
            self.row_height_px, self.row_gap_px
        )
    }
}

/// Intrinsic pixel size of a loaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NaturalSize {
    pub width: u32,
    pub height: u32,
}

impl NaturalSize {
    /// Returns `None` for zero-sized images (broken or not yet decoded).
    pub fn new(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            None
        } else {
            Some(Self { width, height })
        }
    }

    /// Height of the image when drawn `column_width` pixels wide
    pub fn rendered_height(&self, column_width: f64) -> f64 {
        (self.height as f64 / self.width as f64 * column_width).round()
    }
}

/// Inline style a card applies to claim its rows
pub fn span_style(span: u32) -> String {
    format!("grid-row-end: span {};", span)
}

/// Number of grid rows an image occupies at the given column width.
///
/// Returns `None` when the column has no usable width (collapsed during
/// layout) or the metrics cannot divide, so callers keep their previous span.
pub fn compute_span(natural: NaturalSize, column_width: f64, metrics: &GridMetrics) -> Option<u32> {
    if !column_width.is_finite() || column_width <= 0.0 {
        return None;
    }
    if !metrics.row_height_px.is_finite() || metrics.row_height_px <= 0.0 {
        return None;
    }

    let rendered = natural.rendered_height(column_width);
    let rows = ((rendered + metrics.row_gap_px.max(0.0)) / metrics.row_height_px).ceil();

    Some((rows as u32).max(1))
}

/// Per-card span state.
///
/// Caches the natural size and last column width so either trigger (image
/// load or container resize) can recompute with the other's latest value.
#[derive(Debug, Clone, PartialEq)]
pub struct SpanTracker {
    metrics: GridMetrics,
    natural: Option<NaturalSize>,
    column_width: Option<f64>,
    span: u32,
}

impl SpanTracker {
    pub fn new(metrics: GridMetrics) -> Self {
        Self {
            metrics,
            natural: None,
            column_width: None,
            span: FALLBACK_SPAN,
        }
    }

    /// Current span in rows
    pub fn span(&self) -> u32 {
        self.span
    }

    pub fn natural(&self) -> Option<NaturalSize> {
        self.natural
    }

    pub fn column_width(&self) -> Option<f64> {
        self.column_width
    }

    /// Whether the span still reflects the placeholder
    pub fn is_fallback(&self) -> bool {
        self.natural.is_none()
    }

    /// Image finished loading with its intrinsic size.
    ///
    /// Returns the new span if it changed. Zero dimensions keep the
    /// current span.
    pub fn on_image_load(&mut self, width: u32, height: u32) -> Option<u32> {
        let natural = NaturalSize::new(width, height)?;
        self.natural = Some(natural);
        self.recompute()
    }

    /// Container reported a new column width.
    ///
    /// Returns the new span if it changed. Non-positive widths are ignored
    /// and not cached.
    pub fn on_resize(&mut self, column_width: f64) -> Option<u32> {
        if !column_width.is_finite() || column_width <= 0.0 {
            return None;
        }
        self.column_width = Some(column_width);
        self.recompute()
    }

    fn recompute(&mut self) -> Option<u32> {
        let natural = self.natural?;
        let width = self.column_width?;
        let next = compute_span(natural, width, &self.metrics)?;

        if next == self.span {
            None
        } else {
            self.span = next;
            Some(next)
        }
    }
}

impl Default for SpanTracker {
    fn default() -> Self {
        Self::new(GridMetrics::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(w: u32, h: u32) -> NaturalSize {
        NaturalSize::new(w, h).unwrap()
    }

    #[test]
    fn test_square_image() {
        // 250px column, square image -> 250px tall -> ceil(250 / 8) = 32
        let span = compute_span(size(1024, 1024), 250.0, &GridMetrics::default());
        assert_eq!(span, Some(32));
    }

    #[test]
    fn test_gap_is_added_before_dividing() {
        let metrics = GridMetrics {
            row_height_px: 10.0,
            row_gap_px: 16.0,
        };
        // 2:3 portrait at 200px -> 300px, (300 + 16) / 10 = 31.6 -> 32
        assert_eq!(compute_span(size(2, 3), 200.0, &metrics), Some(32));
    }

    #[test]
    fn test_zero_column_width_is_skipped() {
        let metrics = GridMetrics::default();
        assert_eq!(compute_span(size(16, 9), 0.0, &metrics), None);
        assert_eq!(compute_span(size(16, 9), -4.0, &metrics), None);
        assert_eq!(compute_span(size(16, 9), f64::NAN, &metrics), None);
    }

    #[test]
    fn test_tiny_image_spans_at_least_one_row() {
        assert_eq!(compute_span(size(4000, 1), 100.0, &GridMetrics::default()), Some(1));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(NaturalSize::new(0, 10).is_none());
        assert!(NaturalSize::new(10, 0).is_none());
    }

    #[test]
    fn test_tracker_starts_at_fallback() {
        let mut tracker = SpanTracker::default();
        assert_eq!(tracker.span(), FALLBACK_SPAN);

        // Resizes before the image loads only cache the width
        assert_eq!(tracker.on_resize(320.0), None);
        assert_eq!(tracker.span(), FALLBACK_SPAN);
        assert!(tracker.is_fallback());
    }

    #[test]
    fn test_tracker_load_then_resize() {
        let mut tracker = SpanTracker::default();
        tracker.on_resize(240.0);

        // 3:4 portrait at 240px -> 320px -> 40 rows
        assert_eq!(tracker.on_image_load(768, 1024), Some(40));
        assert_eq!(tracker.span(), 40);

        // Narrower column, cached natural size reused: 180px -> 240px -> 30 rows
        assert_eq!(tracker.on_resize(180.0), Some(30));

        // Same width again: no state update
        assert_eq!(tracker.on_resize(180.0), None);
    }

    #[test]
    fn test_tracker_ignores_collapsed_column() {
        let mut tracker = SpanTracker::default();
        tracker.on_resize(200.0);
        tracker.on_image_load(100, 100);
        let before = tracker.span();

        assert_eq!(tracker.on_resize(0.0), None);
        assert_eq!(tracker.span(), before);
        assert_eq!(tracker.column_width(), Some(200.0));
    }

    #[test]
    fn test_tracker_broken_image_keeps_fallback() {
        let mut tracker = SpanTracker::default();
        tracker.on_resize(200.0);
        assert_eq!(tracker.on_image_load(0, 0), None);
        assert_eq!(tracker.span(), FALLBACK_SPAN);
    }

    #[test]
    fn test_styles() {
        assert_eq!(span_style(12), "grid-row-end: span 12;");
        assert_eq!(
            GridMetrics::default().container_style(),
            "grid-auto-rows: 8px; row-gap: 0px;"
        );
    }
}
