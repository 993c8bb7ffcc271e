//! Dialface UI: widget layer and analog clock on top of `dialface-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use dialface_ui::prelude::*;
//!
//! let mut clock = ClockView::new(ClockConfig::default());
//! clock.set_size(500.0, 300.0);
//!
//! // On every display refresh:
//! if clock.take_redraw().is_some() {
//!     if let Some(frame) = clock.render()? {
//!         // Pass frame.commands() to your renderer.
//!     }
//! }
//! ```
//!
//! `ClockView` is also a [`Widget`](widget::Widget), so a host with its own
//! widget tree can measure, paint and route clicks to it directly.

pub mod clock;
pub mod constraints;
pub mod event;
pub mod painter;
pub mod widget;

/// Everything a host needs to embed a clock.
pub mod prelude {
    pub use crate::clock::{
        Argb, ClockConfig, ClockSnapshot, ClockView, HandKind, HandStyle, PauseTransition,
        RedrawReason, RenderFrame, ThemePatch,
    };
    pub use crate::constraints::Constraints;
    pub use crate::event::{EventResult, UiEvent};
    pub use crate::painter::Painter;
    pub use crate::widget::Widget;

    // Re-export the engine primitives everyone needs.
    pub use dialface_engine::coords::{Rect, Vec2, Viewport};
    pub use dialface_engine::paint::Color;
    pub use dialface_engine::scene::{DrawCmd, ShapeRef};
    pub use dialface_engine::text::FontId;
}
