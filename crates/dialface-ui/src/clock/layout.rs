//! Size-dependent geometry of the clock face.
//!
//! Everything here depends only on the surface size (and glyph metrics), so it
//! is computed once per resize and reused by every frame until the next one.

use std::f32::consts::{FRAC_PI_2, TAU};

use dialface_engine::coords::{Vec2, Viewport};
use dialface_engine::text::GlyphMetrics;

/// Number of numerals (and hour marks) on the face.
pub const NUMERAL_COUNT: usize = 12;
/// Numeral font size as a fraction of the face size.
pub const NUMERAL_TEXT_RATIO: f32 = 0.111;
/// Face circle and numeral ring radius as a fraction of the face radius.
pub const FACE_RATIO: f32 = 0.9;

/// Cached layout of one surface size.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Measurements {
    pub center: Vec2,
    /// Side of the largest centered square, `min(width, height)`.
    pub face_size: f32,
    pub face_radius: f32,
    /// Font size the numerals were measured at.
    pub numeral_size: f32,
    /// Baseline-center anchor of numerals 1..=12, in that order.
    pub numeral_positions: Vec<Vec2>,
}

impl Measurements {
    /// Placeholder used until the first surface size is known.
    pub fn placeholder() -> Self {
        Self::default()
    }

    /// True once a real size has been laid out.
    #[inline]
    pub fn is_laid_out(&self) -> bool {
        !self.numeral_positions.is_empty()
    }

    /// Radius of the filled face circle.
    #[inline]
    pub fn face_circle_radius(&self) -> f32 {
        self.face_radius * FACE_RATIO
    }

    /// Anchor of numeral `n` (1..=12).
    #[inline]
    pub fn numeral_position(&self, n: usize) -> Option<Vec2> {
        n.checked_sub(1).and_then(|i| self.numeral_positions.get(i)).copied()
    }

    /// Same layout shifted by `offset`, for surfaces not anchored at the origin.
    pub fn translated(&self, offset: Vec2) -> Measurements {
        Measurements {
            center: self.center + offset,
            numeral_positions: self.numeral_positions.iter().map(|p| *p + offset).collect(),
            ..*self
        }
    }
}

/// Derives the layout of a `viewport`-sized surface.
///
/// Zero or negative extents produce a zero-sized face at `(w/2, h/2)` with
/// all twelve numerals collapsed onto the center; nothing fails.
pub fn recompute(viewport: Viewport, metrics: &dyn GlyphMetrics) -> Measurements {
    let center = Vec2::new(viewport.width / 2.0, viewport.height / 2.0);
    let face_size = viewport.min_side();
    let face_radius = face_size / 2.0;
    let numeral_size = NUMERAL_TEXT_RATIO * face_size;
    let ring_radius = face_radius * FACE_RATIO;

    let step = TAU / NUMERAL_COUNT as f32;
    let numeral_positions = (1..=NUMERAL_COUNT)
        .map(|n| {
            let label = n.to_string();
            let glyph_height = metrics.text_height(&label, numeral_size);
            // Pull the glyph inward by its own height so it sits inside the
            // ring, then drop it half a height so the baseline anchor centers
            // the ink on the ring point.
            let reach = ring_radius - glyph_height;
            let angle = step * n as f32 - FRAC_PI_2;
            Vec2::new(
                center.x + reach * angle.cos(),
                center.y + reach * angle.sin() + glyph_height / 2.0,
            )
        })
        .collect();

    Measurements { center, face_size, face_radius, numeral_size, numeral_positions }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dialface_engine::text::FixedMetrics;

    fn layout(w: f32, h: f32) -> Measurements {
        recompute(Viewport::new(w, h), &FixedMetrics::default())
    }

    // ── center and face ───────────────────────────────────────────────────

    #[test]
    fn face_uses_shorter_side() {
        for (w, h) in [(500.0, 300.0), (300.0, 500.0), (640.0, 640.0), (1.0, 1000.0)] {
            let m = layout(w, h);
            assert_eq!(m.face_size, f32::min(w, h));
            assert_eq!(m.face_radius, f32::min(w, h) / 2.0);
            assert_eq!(m.center, Vec2::new(w / 2.0, h / 2.0));
        }
    }

    #[test]
    fn face_circle_is_ninety_percent_of_radius() {
        let m = layout(500.0, 300.0);
        assert!((m.face_circle_radius() - 135.0).abs() < 1e-3);
    }

    #[test]
    fn numeral_size_tracks_face() {
        let m = layout(1000.0, 1000.0);
        assert!((m.numeral_size - 111.0).abs() < 1e-3);
    }

    // ── numerals ──────────────────────────────────────────────────────────

    #[test]
    fn always_twelve_numerals() {
        for (w, h) in [(500.0, 300.0), (0.0, 0.0), (-20.0, 40.0), (1.0, 1.0)] {
            assert_eq!(layout(w, h).numeral_positions.len(), NUMERAL_COUNT);
        }
    }

    #[test]
    fn twelve_is_topmost_on_square_surface() {
        let m = layout(400.0, 400.0);
        let twelve = m.numeral_position(12).unwrap();
        for n in 1..=11 {
            assert!(twelve.y < m.numeral_position(n).unwrap().y, "numeral {n}");
        }
        assert!((twelve.x - 200.0).abs() < 1e-3);
    }

    #[test]
    fn three_and_nine_are_mirrored() {
        let m = layout(400.0, 400.0);
        let three = m.numeral_position(3).unwrap();
        let nine = m.numeral_position(9).unwrap();
        assert!((three.x - 200.0 + (nine.x - 200.0)).abs() < 1e-3);
        assert!((three.y - nine.y).abs() < 1e-3);
        assert!(three.x > nine.x);
    }

    #[test]
    fn glyph_height_pulls_numerals_inward_and_down() {
        // Ring radius 180, glyph height 0.5 * 44.4 = 22.2.
        let m = recompute(Viewport::new(400.0, 400.0), &FixedMetrics::new(0.5));
        let three = m.numeral_position(3).unwrap();
        let glyph = 0.5 * NUMERAL_TEXT_RATIO * 400.0;
        assert!((three.x - (200.0 + 180.0 - glyph)).abs() < 1e-2, "{three:?}");
        assert!((three.y - (200.0 + glyph / 2.0)).abs() < 1e-2, "{three:?}");
    }

    #[test]
    fn numeral_index_is_one_based() {
        let m = layout(100.0, 100.0);
        assert!(m.numeral_position(0).is_none());
        assert!(m.numeral_position(13).is_none());
        assert!(m.numeral_position(1).is_some());
    }

    #[test]
    fn translation_shifts_every_point() {
        let m = layout(200.0, 100.0);
        let t = m.translated(Vec2::new(10.0, 20.0));
        assert_eq!(t.center, Vec2::new(110.0, 70.0));
        assert_eq!(t.face_radius, m.face_radius);
        assert_eq!(t.numeral_positions[0], m.numeral_positions[0] + Vec2::new(10.0, 20.0));
    }

    // ── degenerate sizes ──────────────────────────────────────────────────

    #[test]
    fn zero_size_collapses_onto_center() {
        let m = layout(0.0, 300.0);
        assert_eq!(m.face_size, 0.0);
        assert_eq!(m.face_radius, 0.0);
        for p in &m.numeral_positions {
            assert_eq!(*p, Vec2::new(0.0, 150.0));
        }
    }

    #[test]
    fn placeholder_is_not_laid_out() {
        assert!(!Measurements::placeholder().is_laid_out());
        assert!(layout(10.0, 10.0).is_laid_out());
    }
}
