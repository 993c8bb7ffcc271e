/// Surface size in logical pixels.
///
/// The host reports this whenever the drawing surface is created or resized.
/// Zero or negative extents are representable; consumers degrade to empty
/// geometry instead of failing.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Length of the shorter side, clamped to zero.
    #[inline]
    pub fn min_side(self) -> f32 {
        self.width.min(self.height).max(0.0)
    }
}
