use dialface_engine::coords::{Rect, Vec2};

use crate::constraints::Constraints;
use crate::event::{EventResult, UiEvent};
use crate::painter::Painter;

/// The contract between a host and a drawable component.
///
/// The host asks for a size, assigns a rect, and then calls `paint` whenever
/// it decides to redraw. Painting records commands; it never touches pixels.
pub trait Widget {
    /// Compute the size this widget wants given the available space.
    ///
    /// Must be deterministic: calling `measure` twice with the same arguments
    /// must return the same result.
    fn measure(&self, constraints: Constraints) -> Vec2;

    /// Record this widget's draw commands into `painter` within `rect`.
    ///
    /// Takes `&mut self` because widgets may refresh caches derived from
    /// `rect` (a resize) before drawing.
    fn paint(&mut self, painter: &mut Painter, rect: Rect);

    /// Route an input event. Return [`EventResult::Consumed`] to stop propagation.
    ///
    /// The default implementation does nothing and returns `Ignored`.
    fn on_event(&mut self, _event: &UiEvent, _rect: Rect) -> EventResult {
        EventResult::Ignored
    }
}
