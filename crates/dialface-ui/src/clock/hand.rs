//! Hand geometry.
//!
//! Each hand is a rectangle defined in an unrotated frame (pointing along +X
//! from just behind the pivot) plus a rotation about the face center. At
//! phase zero the rotation is -90°, which turns +X into "up", towards the 12.

use dialface_engine::coords::{Rect, Vec2};
use dialface_engine::scene::ShapeRef;

use super::layout::Measurements;

pub const MILLIS_PER_MINUTE: i64 = 60_000;
pub const MILLIS_PER_HOUR: i64 = 60 * MILLIS_PER_MINUTE;
/// One turn of the hour hand on a 12-hour face.
pub const MILLIS_PER_HALF_DAY: i64 = 12 * MILLIS_PER_HOUR;

const DEGREES_IN_CIRCLE: f64 = 360.0;
const DEGREES_START_OFFSET: f64 = 90.0;

/// The three hands, in paint order (later hands occlude earlier ones).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HandKind {
    Hour,
    Minute,
    Second,
}

impl HandKind {
    pub const PAINT_ORDER: [HandKind; 3] = [HandKind::Hour, HandKind::Minute, HandKind::Second];

    pub const fn spec(self) -> HandSpec {
        match self {
            HandKind::Second => HandSpec {
                offset_ratio: 0.055,
                width_ratio: 0.480,
                height_ratio: 0.015,
                cycle_millis: MILLIS_PER_MINUTE,
            },
            HandKind::Minute => HandSpec {
                offset_ratio: 0.026,
                width_ratio: 0.416,
                height_ratio: 0.052,
                cycle_millis: MILLIS_PER_HOUR,
            },
            HandKind::Hour => HandSpec {
                offset_ratio: 0.026,
                width_ratio: 0.255,
                height_ratio: 0.052,
                cycle_millis: MILLIS_PER_HALF_DAY,
            },
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HandKind::Hour => "hour",
            HandKind::Minute => "minute",
            HandKind::Second => "second",
        }
    }
}

/// Shape ratios (relative to the face size) and cycle length of a hand.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandSpec {
    /// How far the hand extends behind the pivot.
    pub offset_ratio: f32,
    pub width_ratio: f32,
    pub height_ratio: f32,
    /// Time for one full turn.
    pub cycle_millis: i64,
}

/// How a hand is painted.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum HandStyle {
    /// Solid rectangle in the hand color.
    Rect,
    /// Host asset stretched over the hand rectangle and tinted with the hand color.
    Asset(ShapeRef),
}

/// Per-hand paint styles.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct HandStyles {
    pub hour: HandStyle,
    pub minute: HandStyle,
    pub second: HandStyle,
}

impl HandStyles {
    /// Every hand as a plain rectangle.
    pub const fn rects() -> Self {
        Self { hour: HandStyle::Rect, minute: HandStyle::Rect, second: HandStyle::Rect }
    }

    #[inline]
    pub fn get(&self, kind: HandKind) -> HandStyle {
        match kind {
            HandKind::Hour => self.hour,
            HandKind::Minute => self.minute,
            HandKind::Second => self.second,
        }
    }

    #[inline]
    pub fn set(&mut self, kind: HandKind, style: HandStyle) {
        match kind {
            HandKind::Hour => self.hour = style,
            HandKind::Minute => self.minute = style,
            HandKind::Second => self.second = style,
        }
    }
}

impl Default for HandStyles {
    fn default() -> Self {
        Self {
            hour: HandStyle::Asset(ShapeRef::HOUR_HAND),
            minute: HandStyle::Asset(ShapeRef::MINUTE_HAND),
            second: HandStyle::Rect,
        }
    }
}

/// Unrotated hand rectangle plus the rotation to apply about the face center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HandGeometry {
    pub rect: Rect,
    pub rotation_degrees: f32,
}

impl HandGeometry {
    /// Far end of the hand on screen, after rotation about `pivot`.
    pub fn tip(&self, pivot: Vec2) -> Vec2 {
        Vec2::new(self.rect.right(), self.rect.center().y).rotated_about(pivot, self.rotation_degrees)
    }
}

/// Position of `instant` within a cycle, always in `[0, cycle_millis)`.
///
/// Instants before the epoch wrap forward, so -1 ms is the last millisecond
/// of the previous cycle.
#[inline]
pub fn phase(instant: i64, cycle_millis: i64) -> i64 {
    instant.rem_euclid(cycle_millis)
}

/// Computes the rectangle and rotation of a hand at `instant`.
///
/// A face size of zero yields a zero-sized rectangle at the center.
pub fn compute_hand(spec: &HandSpec, m: &Measurements, instant: i64) -> HandGeometry {
    let phase = phase(instant, spec.cycle_millis);
    // Multiply before dividing: both operands are exact in f64, so quarter
    // and twelfth turns come out exact.
    let rotation = phase as f64 * DEGREES_IN_CIRCLE / spec.cycle_millis as f64 - DEGREES_START_OFFSET;

    let width = m.face_size * spec.width_ratio;
    let height = m.face_size * spec.height_ratio;
    let offset = m.face_size * spec.offset_ratio;

    let left = m.center.x - offset;
    let rect = Rect::from_ltrb(left, m.center.y - height / 2.0, left + width, m.center.y + height / 2.0);

    HandGeometry { rect, rotation_degrees: rotation as f32 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::layout::recompute;
    use dialface_engine::coords::Viewport;
    use dialface_engine::text::FixedMetrics;

    fn layout(w: f32, h: f32) -> Measurements {
        recompute(Viewport::new(w, h), &FixedMetrics::default())
    }

    fn rotation(kind: HandKind, instant: i64) -> f32 {
        compute_hand(&kind.spec(), &layout(500.0, 500.0), instant).rotation_degrees
    }

    // ── rotation ──────────────────────────────────────────────────────────

    #[test]
    fn epoch_points_every_hand_at_twelve() {
        for kind in HandKind::PAINT_ORDER {
            assert_eq!(rotation(kind, 0), -90.0, "{}", kind.name());
        }
    }

    #[test]
    fn half_minute_points_second_hand_at_six() {
        assert_eq!(rotation(HandKind::Second, 30_000), 90.0);
    }

    #[test]
    fn one_hour_on_wide_surface() {
        let m = layout(500.0, 300.0);
        let minute = compute_hand(&HandKind::Minute.spec(), &m, 3_600_000);
        let hour = compute_hand(&HandKind::Hour.spec(), &m, 3_600_000);
        assert_eq!(minute.rotation_degrees, -90.0);
        assert_eq!(hour.rotation_degrees, -60.0);
    }

    #[test]
    fn quarter_hour_points_minute_hand_at_three() {
        assert_eq!(rotation(HandKind::Minute, 15 * MILLIS_PER_MINUTE), 0.0);
    }

    #[test]
    fn rotation_stays_in_range_for_large_instants() {
        // 2024-01-01T00:00:00Z, exactly on a cycle boundary for every hand.
        let instant = 1_704_067_200_000;
        for kind in HandKind::PAINT_ORDER {
            let r = rotation(kind, instant);
            assert!((-90.0..270.0).contains(&r), "{} -> {r}", kind.name());
        }
        assert_eq!(rotation(HandKind::Hour, instant), -90.0);
    }

    // ── phase ─────────────────────────────────────────────────────────────

    #[test]
    fn phase_of_negative_instant_wraps_forward() {
        assert_eq!(phase(-1, MILLIS_PER_MINUTE), 59_999);
        assert_eq!(phase(-MILLIS_PER_MINUTE, MILLIS_PER_MINUTE), 0);
        // -15 s is a quarter turn short of twelve: pointing at nine.
        assert_eq!(rotation(HandKind::Second, -15_000), 180.0);
    }

    // ── rectangle ─────────────────────────────────────────────────────────

    #[test]
    fn rect_is_centered_vertically_and_offset_behind_pivot() {
        let m = layout(400.0, 400.0);
        let g = compute_hand(&HandKind::Second.spec(), &m, 0);
        assert!((g.rect.center().y - 200.0).abs() < 1e-3);
        assert!((g.rect.left() - (200.0 - 400.0 * 0.055)).abs() < 1e-3);
        assert!((g.rect.size.x - 400.0 * 0.480).abs() < 1e-3);
        assert!((g.rect.size.y - 400.0 * 0.015).abs() < 1e-3);
    }

    #[test]
    fn tip_at_epoch_is_straight_above_center() {
        let m = layout(400.0, 400.0);
        let g = compute_hand(&HandKind::Minute.spec(), &m, 0);
        let tip = g.tip(m.center);
        assert!((tip.x - 200.0).abs() < 1e-3, "{tip:?}");
        assert!(tip.y < 200.0);
    }

    #[test]
    fn zero_face_gives_empty_rect_at_center() {
        let m = layout(0.0, 300.0);
        let g = compute_hand(&HandKind::Hour.spec(), &m, 12_345);
        assert!(g.rect.is_empty());
        assert_eq!(g.rect.origin, m.center);
    }

    // ── styles ────────────────────────────────────────────────────────────

    #[test]
    fn default_styles_use_assets_for_hour_and_minute() {
        let s = HandStyles::default();
        assert_eq!(s.get(HandKind::Hour), HandStyle::Asset(ShapeRef::HOUR_HAND));
        assert_eq!(s.get(HandKind::Second), HandStyle::Rect);
        let mut r = HandStyles::rects();
        r.set(HandKind::Minute, HandStyle::Asset(ShapeRef(42)));
        assert_eq!(r.minute, HandStyle::Asset(ShapeRef(42)));
    }
}
