use dialface_engine::coords::Vec2;

/// Layout constraints passed down from a host or parent during measure.
///
/// A widget may return any size in `[min, max]`. Per axis the constraints
/// express the three classic sizing modes:
/// - `min == max`: exact size
/// - finite `max`: at most `max`
/// - infinite `max`: unspecified, the widget picks its desired size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: widget must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: widget can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// No constraint: widget can take any positive size.
    #[inline]
    pub fn unbounded() -> Self {
        Self { min: Vec2::zero(), max: Vec2::new(f32::INFINITY, f32::INFINITY) }
    }

    /// Explicit range: widget can be any size in `[min, max]`.
    #[inline]
    pub fn between(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// True if both axes allow exactly one size.
    #[inline]
    pub fn is_tight(self) -> bool {
        self.min == self.max
    }
}
