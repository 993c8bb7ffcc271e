use std::fmt;

use super::GlyphMetrics;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The system is owned by the host and
/// borrowed whenever layout needs real glyph bounds.
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    ///
    /// Returns the `FontId` that identifies the font in draw commands.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {id:?}");
        Ok(id)
    }

    fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Height of the union of the ink boxes of every glyph in `text`.
    ///
    /// Measured from the highest glyph top to the lowest glyph bottom relative
    /// to the shared baseline, so "12" and "7" report their true extents.
    /// Returns `0.0` for an unknown font or empty text.
    #[must_use]
    pub fn ink_height(&self, text: &str, id: FontId, size: f32) -> f32 {
        let Some(font) = self.get(id) else {
            return 0.0;
        };

        let mut top = f32::MIN;
        let mut bottom = f32::MAX;
        for ch in text.chars() {
            let m = font.metrics(ch, size);
            if m.height == 0 {
                continue;
            }
            bottom = bottom.min(m.ymin as f32);
            top = top.max(m.ymin as f32 + m.height as f32);
        }

        if top < bottom { 0.0 } else { top - bottom }
    }

    /// Borrows one font as a [`GlyphMetrics`] source.
    pub fn metrics_for(&self, id: FontId) -> FaceMetrics<'_> {
        FaceMetrics { fonts: self, id }
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// A single face of a [`FontSystem`], usable wherever [`GlyphMetrics`] is expected.
#[derive(Copy, Clone)]
pub struct FaceMetrics<'a> {
    fonts: &'a FontSystem,
    id: FontId,
}

impl FaceMetrics<'_> {
    #[inline]
    pub fn font(&self) -> FontId {
        self.id
    }
}

impl GlyphMetrics for FaceMetrics<'_> {
    fn text_height(&self, text: &str, size: f32) -> f32 {
        self.fonts.ink_height(text, self.id, size)
    }
}
