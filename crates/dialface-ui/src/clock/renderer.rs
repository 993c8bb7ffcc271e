//! Frame assembly.
//!
//! Paint order is fixed: background asset, face circle, numerals, then the
//! hour, minute and second hands. Each layer may cover the previous one, and
//! later hands cover earlier ones at the pivot.

use dialface_engine::coords::Rect;
use dialface_engine::scene::{DrawCmd, DrawList};
use dialface_engine::text::FontId;
use dialface_engine::time::TimeSource;

use crate::painter::Painter;

use super::error::LayoutError;
use super::hand::{compute_hand, HandKind, HandStyle, HandStyles};
use super::layout::{Measurements, NUMERAL_COUNT};
use super::pause::PauseState;
use super::theme::Theme;

/// Everything a frame depends on besides the instant.
#[derive(Debug, Clone, Copy)]
pub struct FrameInputs<'a> {
    pub theme: &'a Theme,
    pub hand_styles: &'a HandStyles,
    pub measurements: &'a Measurements,
    pub font: Option<FontId>,
}

/// Draw commands of one redraw, in paint order.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    instant: i64,
    commands: Vec<DrawCmd>,
}

impl RenderFrame {
    /// The instant all three hands were computed for.
    #[inline]
    pub fn instant(&self) -> i64 {
        self.instant
    }

    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// Records one clock frame at `instant` into `painter`.
///
/// The numeral layout is validated before anything is recorded, so an error
/// leaves the painter untouched.
pub fn paint_clock(
    painter: &mut Painter,
    inputs: FrameInputs<'_>,
    instant: i64,
) -> Result<(), LayoutError> {
    let FrameInputs { theme, hand_styles, measurements: m, font } = inputs;

    let found = m.numeral_positions.len();
    if found != NUMERAL_COUNT {
        return Err(LayoutError { found });
    }

    painter.asset(theme.shape, Rect::centered_square(m.center, m.face_radius));
    painter.fill_circle(m.center, m.face_circle_radius(), theme.face_color.to_color());

    let text_color = theme.text_color.to_color();
    for (i, pos) in m.numeral_positions.iter().enumerate() {
        painter.centered_text((i + 1).to_string(), font, m.numeral_size, text_color, *pos);
    }

    for kind in HandKind::PAINT_ORDER {
        let hand = compute_hand(&kind.spec(), m, instant);
        let color = theme.hand_color(kind).to_color();
        match hand_styles.get(kind) {
            HandStyle::Rect => {
                painter.fill_rotated_rect(hand.rect, color, hand.rotation_degrees, m.center);
            }
            HandStyle::Asset(asset) => {
                painter.tinted_asset(asset, hand.rect, color, hand.rotation_degrees, m.center);
            }
        }
        log::trace!("{} hand at {:.2}°", kind.name(), hand.rotation_degrees);
    }

    Ok(())
}

/// Produces the frame for the current pause state.
///
/// The time source is read at most once, so all hands agree within the frame.
pub fn render_frame<C: TimeSource + ?Sized>(
    inputs: FrameInputs<'_>,
    pause: &PauseState,
    clock: &C,
) -> Result<RenderFrame, LayoutError> {
    let instant = pause.current_instant(clock);
    let mut list = DrawList::new();
    paint_clock(&mut Painter::new(&mut list), inputs, instant)?;
    Ok(RenderFrame { instant, commands: list.into_paint_order() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::layout::recompute;
    use crate::clock::theme::Argb;
    use dialface_engine::coords::{Vec2, Viewport};
    use dialface_engine::paint::Color;
    use dialface_engine::scene::ShapeRef;
    use dialface_engine::text::FixedMetrics;
    use dialface_engine::time::ManualClock;

    fn layout(w: f32, h: f32) -> Measurements {
        recompute(Viewport::new(w, h), &FixedMetrics::default())
    }

    fn frame(theme: &Theme, styles: &HandStyles, m: &Measurements, instant: i64) -> RenderFrame {
        let inputs = FrameInputs { theme, hand_styles: styles, measurements: m, font: None };
        render_frame(inputs, &PauseState::paused_at(instant), &ManualClock::default()).unwrap()
    }

    fn hand_rotations(f: &RenderFrame) -> Vec<f32> {
        f.commands()[14..]
            .iter()
            .map(|cmd| match cmd {
                DrawCmd::Rect(r) => r.rotation.unwrap().degrees,
                DrawCmd::Asset(a) => a.rotation.unwrap().degrees,
                other => panic!("unexpected hand command {other:?}"),
            })
            .collect()
    }

    // ── paint order ───────────────────────────────────────────────────────

    #[test]
    fn layers_paint_in_fixed_order() {
        let m = layout(500.0, 300.0);
        let f = frame(&Theme::default(), &HandStyles::default(), &m, 0);
        let kinds: Vec<_> = f.commands().iter().map(DrawCmd::kind).collect();

        assert_eq!(f.len(), 1 + 1 + 12 + 3);
        assert_eq!(kinds[0], "asset");
        assert_eq!(kinds[1], "circle");
        assert!(kinds[2..14].iter().all(|k| *k == "text"));
        assert_eq!(&kinds[14..], &["asset", "asset", "rect"]);
    }

    #[test]
    fn background_is_bounded_by_face_square() {
        let m = layout(500.0, 300.0);
        let f = frame(&Theme::default(), &HandStyles::default(), &m, 0);
        let DrawCmd::Asset(bg) = &f.commands()[0] else { panic!("background must be an asset") };
        assert_eq!(bg.asset, ShapeRef::CLOCK_FACE);
        assert_eq!(bg.bounds, Rect::new(100.0, 0.0, 300.0, 300.0));
        assert_eq!(bg.tint, None);
    }

    #[test]
    fn face_circle_uses_face_color() {
        let theme = Theme { face_color: Argb(0xFF00_00FF), ..Theme::default() };
        let m = layout(400.0, 400.0);
        let f = frame(&theme, &HandStyles::default(), &m, 0);
        let DrawCmd::Circle(c) = &f.commands()[1] else { panic!("expected face circle") };
        assert_eq!(c.center, Vec2::new(200.0, 200.0));
        assert!((c.radius - 180.0).abs() < 1e-3);
        assert_eq!(c.color, Color::from_premul(0.0, 0.0, 1.0, 1.0));
    }

    #[test]
    fn numerals_run_one_to_twelve_at_layout_positions() {
        let theme = Theme { text_color: Argb::GRAY, ..Theme::default() };
        let m = layout(400.0, 400.0);
        let f = frame(&theme, &HandStyles::default(), &m, 0);
        for (i, cmd) in f.commands()[2..14].iter().enumerate() {
            let DrawCmd::Text(t) = cmd else { panic!("expected numeral") };
            assert_eq!(t.text, (i + 1).to_string());
            assert_eq!(t.anchor, m.numeral_positions[i]);
            assert_eq!(t.color, Argb::GRAY.to_color());
            assert_eq!(t.size, m.numeral_size);
        }
    }

    // ── hands ─────────────────────────────────────────────────────────────

    #[test]
    fn hands_rotate_about_center_with_their_colors() {
        let m = layout(500.0, 300.0);
        let theme = Theme::default();
        let f = frame(&theme, &HandStyles::default(), &m, 3_600_000);
        assert_eq!(hand_rotations(&f), vec![-60.0, -90.0, -90.0]);

        let DrawCmd::Asset(hour) = &f.commands()[14] else { panic!("hour hand") };
        assert_eq!(hour.asset, ShapeRef::HOUR_HAND);
        assert_eq!(hour.tint, Some(theme.hour_hand_color.to_color()));
        assert_eq!(hour.rotation.unwrap().pivot, m.center);

        let DrawCmd::Rect(second) = &f.commands()[16] else { panic!("second hand") };
        assert_eq!(second.color, theme.second_hand_color.to_color());
    }

    #[test]
    fn rect_styles_draw_plain_rectangles() {
        let m = layout(300.0, 300.0);
        let f = frame(&Theme::default(), &HandStyles::rects(), &m, 0);
        assert!(f.commands()[14..].iter().all(|c| matches!(c, DrawCmd::Rect(_))));
    }

    #[test]
    fn frame_reports_the_instant_it_drew() {
        let m = layout(300.0, 300.0);
        let f = frame(&Theme::default(), &HandStyles::default(), &m, 30_000);
        assert_eq!(f.instant(), 30_000);
        assert_eq!(hand_rotations(&f)[2], 90.0);
    }

    #[test]
    fn running_frame_reads_live_clock() {
        let m = layout(300.0, 300.0);
        let theme = Theme::default();
        let styles = HandStyles::default();
        let inputs = FrameInputs { theme: &theme, hand_styles: &styles, measurements: &m, font: None };
        let clock = ManualClock::new(15_000);
        let f = render_frame(inputs, &PauseState::running(), &clock).unwrap();
        assert_eq!(f.instant(), 15_000);
        assert_eq!(hand_rotations(&f)[2], 0.0);
    }

    // ── invariants ────────────────────────────────────────────────────────

    #[test]
    fn wrong_numeral_count_aborts_without_output() {
        let mut m = layout(300.0, 300.0);
        m.numeral_positions.pop();
        let theme = Theme::default();
        let styles = HandStyles::default();
        let inputs = FrameInputs { theme: &theme, hand_styles: &styles, measurements: &m, font: None };

        let mut list = DrawList::new();
        let err = paint_clock(&mut Painter::new(&mut list), inputs, 0).unwrap_err();
        assert_eq!(err, LayoutError { found: 11 });
        assert!(list.is_empty());
    }

    #[test]
    fn placeholder_layout_is_rejected() {
        let m = Measurements::placeholder();
        let theme = Theme::default();
        let styles = HandStyles::default();
        let inputs = FrameInputs { theme: &theme, hand_styles: &styles, measurements: &m, font: None };
        let err = render_frame(inputs, &PauseState::running(), &ManualClock::default()).unwrap_err();
        assert_eq!(err.found, 0);
    }

    #[test]
    fn degenerate_surface_still_renders() {
        let m = layout(0.0, 0.0);
        let f = frame(&Theme::default(), &HandStyles::default(), &m, 0);
        assert_eq!(f.len(), 17);
        let DrawCmd::Circle(c) = &f.commands()[1] else { panic!("expected face circle") };
        assert_eq!(c.radius, 0.0);
    }
}
