/// Source of glyph ink measurements.
pub trait GlyphMetrics {
    /// Height of the tight ink bounds of `text` rendered at `size` logical pixels.
    ///
    /// Empty strings measure as `0.0`.
    fn text_height(&self, text: &str, size: f32) -> f32;
}

/// Approximates ink height as a fixed fraction of the font size.
///
/// Lining digits share one height (the cap height), so a single ratio is
/// exact for numerals in most UI faces.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FixedMetrics {
    pub cap_height_ratio: f32,
}

impl FixedMetrics {
    /// Cap height of common bold sans-serif UI faces.
    pub const DEFAULT_CAP_HEIGHT: f32 = 0.711;

    #[inline]
    pub const fn new(cap_height_ratio: f32) -> Self {
        Self { cap_height_ratio }
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAP_HEIGHT)
    }
}

impl GlyphMetrics for FixedMetrics {
    fn text_height(&self, text: &str, size: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        (size * self.cap_height_ratio).max(0.0)
    }
}
