use dialface_engine::coords::{Rect, Vec2, Viewport};
use dialface_engine::text::{FixedMetrics, FontId, GlyphMetrics};
use dialface_engine::time::{SystemClock, TimeSource};

use crate::constraints::Constraints;
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;
use crate::widget::Widget;

use super::config::ClockConfig;
use super::error::LayoutError;
use super::hand::{HandKind, HandStyle, HandStyles};
use super::layout::{recompute, Measurements};
use super::pause::{PauseState, PauseTransition};
use super::renderer::{paint_clock, render_frame, FrameInputs, RenderFrame};
use super::schedule::{RedrawReason, RedrawScheduler};
use super::snapshot::ClockSnapshot;
use super::theme::{Theme, ThemePatch};

/// Analog clock widget.
///
/// The host reports the surface size through [`set_size`](Self::set_size),
/// polls [`take_redraw`](Self::take_redraw) on each display refresh and calls
/// [`render`](Self::render) (or paints it as a [`Widget`]) when a frame is due.
///
/// # Example
/// ```rust,ignore
/// let mut clock = ClockView::new(ClockConfig::default().shape(ShapeRef::CLOCK_FACE_ALT));
/// clock.set_size(500.0, 300.0);
/// while clock.take_redraw().is_some() {
///     let frame = clock.render()?.expect("size is known");
///     submit(frame.commands());
/// }
/// ```
pub struct ClockView<C: TimeSource = SystemClock, M: GlyphMetrics = FixedMetrics> {
    theme: Theme,
    hand_styles: HandStyles,
    pause: PauseState,
    measurements: Measurements,
    viewport: Option<Viewport>,
    font: Option<FontId>,
    scheduler: RedrawScheduler,
    clock: C,
    metrics: M,
    on_pause_change: Option<Box<dyn FnMut(bool)>>,
}

impl ClockView {
    /// Clock on wall-clock time with fixed cap-height metrics.
    pub fn new(config: ClockConfig) -> Self {
        Self::with_parts(config, SystemClock, FixedMetrics::default())
    }
}

impl<C: TimeSource, M: GlyphMetrics> ClockView<C, M> {
    pub fn with_parts(config: ClockConfig, clock: C, metrics: M) -> Self {
        Self {
            theme: config.theme,
            hand_styles: config.hand_styles,
            pause: PauseState::running(),
            measurements: Measurements::placeholder(),
            viewport: None,
            font: None,
            scheduler: RedrawScheduler::new(),
            clock,
            metrics,
            on_pause_change: None,
        }
    }

    /// Font used for the numerals. `None` lets the text renderer pick.
    pub fn font(mut self, font: Option<FontId>) -> Self { self.font = font; self }

    /// Called with the new paused flag after every toggle.
    pub fn on_pause_change(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_pause_change = Some(Box::new(f));
        self
    }

    // ── host operations ───────────────────────────────────────────────────

    /// Records a new surface size and recomputes the layout.
    ///
    /// Returns `false` (and does nothing) if the size is unchanged.
    pub fn set_size(&mut self, width: f32, height: f32) -> bool {
        let viewport = Viewport::new(width, height);
        if self.viewport == Some(viewport) {
            return false;
        }
        self.viewport = Some(viewport);
        self.relayout(viewport);
        self.scheduler.request(RedrawReason::Resize);
        true
    }

    /// Flips between running and paused.
    ///
    /// Pausing freezes the current instant and lets the redraw loop lapse after
    /// the next frame; resuming relayouts and requests a redraw.
    pub fn toggled_pause(&mut self) -> PauseTransition {
        let now = self.clock.now_millis();
        let (next, transition) = self.pause.toggled(now);
        self.pause = next;

        match transition {
            PauseTransition::Paused { at } => log::debug!("clock paused at {at}"),
            PauseTransition::Resumed => {
                log::debug!("clock resumed");
                if let Some(viewport) = self.viewport {
                    self.relayout(viewport);
                }
                self.scheduler.request(RedrawReason::Resume);
            }
        }

        if let Some(f) = &mut self.on_pause_change {
            f(self.pause.is_paused());
        }
        transition
    }

    /// Applies the set fields of `patch`. Returns `true` if anything changed.
    pub fn set_theme(&mut self, patch: &ThemePatch) -> bool {
        let changed = self.theme.apply(patch);
        if changed {
            log::debug!("clock theme changed: {patch:?}");
            self.scheduler.request(RedrawReason::Theme);
        }
        changed
    }

    pub fn set_hand_style(&mut self, kind: HandKind, style: HandStyle) {
        if self.hand_styles.get(kind) != style {
            self.hand_styles.set(kind, style);
            self.scheduler.request(RedrawReason::Theme);
        }
    }

    // ── state ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[inline]
    pub fn hand_styles(&self) -> &HandStyles {
        &self.hand_styles
    }

    #[inline]
    pub fn pause_state(&self) -> PauseState {
        self.pause
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    #[inline]
    pub fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    #[inline]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// The instant the next frame would show.
    pub fn current_instant(&self) -> i64 {
        self.pause.current_instant(&self.clock)
    }

    // ── redraw loop ───────────────────────────────────────────────────────

    #[inline]
    pub fn needs_redraw(&self) -> bool {
        self.scheduler.is_pending()
    }

    /// Consumes the pending redraw request, if any.
    pub fn take_redraw(&mut self) -> Option<RedrawReason> {
        self.scheduler.take()
    }

    /// Produces one frame in surface coordinates.
    ///
    /// Returns `Ok(None)` until the first [`set_size`](Self::set_size). A
    /// frame satisfies every pending request; while running, the next one is
    /// scheduled right away.
    pub fn render(&mut self) -> Result<Option<RenderFrame>, LayoutError> {
        if self.viewport.is_none() {
            return Ok(None);
        }
        let inputs = FrameInputs {
            theme: &self.theme,
            hand_styles: &self.hand_styles,
            measurements: &self.measurements,
            font: self.font,
        };
        match render_frame(inputs, &self.pause, &self.clock) {
            Ok(frame) => {
                self.finish_frame();
                Ok(Some(frame))
            }
            Err(e) => {
                log::error!("clock frame aborted: {e}");
                Err(e)
            }
        }
    }

    // ── saved state ───────────────────────────────────────────────────────

    pub fn snapshot(&self) -> ClockSnapshot {
        ClockSnapshot::capture(&self.theme, &self.pause)
    }

    /// Re-applies a saved theme and pause state, keeping the frozen instant.
    pub fn restore(&mut self, snapshot: &ClockSnapshot) {
        self.theme = snapshot.theme();
        self.pause = snapshot.pause_state();
        log::debug!("clock restored (paused: {})", self.pause.is_paused());
        self.scheduler.request(RedrawReason::Restore);
    }

    // ── internals ─────────────────────────────────────────────────────────

    fn relayout(&mut self, viewport: Viewport) {
        self.measurements = recompute(viewport, &self.metrics);
        log::debug!(
            "clock layout {}x{}: face {:.1}px",
            viewport.width,
            viewport.height,
            self.measurements.face_size
        );
    }

    fn finish_frame(&mut self) {
        self.scheduler.cancel();
        self.scheduler.after_frame(self.pause.is_paused());
    }
}

impl<C: TimeSource, M: GlyphMetrics> Widget for ClockView<C, M> {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain(Vec2::new(DESIRED_SIZE, DESIRED_SIZE))
    }

    fn paint(&mut self, painter: &mut Painter, rect: Rect) {
        self.set_size(rect.size.x, rect.size.y);
        let measurements = self.measurements.translated(rect.origin);
        let instant = self.pause.current_instant(&self.clock);
        let inputs = FrameInputs {
            theme: &self.theme,
            hand_styles: &self.hand_styles,
            measurements: &measurements,
            font: self.font,
        };
        match paint_clock(painter, inputs, instant) {
            Ok(()) => self.finish_frame(),
            Err(e) => log::error!("clock frame aborted: {e}"),
        }
    }

    fn on_event(&mut self, event: &UiEvent, rect: Rect) -> EventResult {
        if let UiEvent::Click { pos } = event {
            if rect.contains(*pos) {
                self.toggled_pause();
                return EventResult::Consumed;
            }
        }
        EventResult::Ignored
    }
}

/// Preferred side length when the parent leaves the size open.
pub const DESIRED_SIZE: f32 = 500.0;
