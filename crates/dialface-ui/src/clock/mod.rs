//! The analog clock: layout, hand geometry, pause state, redraw scheduling
//! and the [`ClockView`] widget that ties them together.

pub mod config;
pub mod error;
pub mod hand;
pub mod layout;
pub mod pause;
pub mod renderer;
pub mod schedule;
pub mod snapshot;
pub mod theme;
pub mod view;

pub use config::ClockConfig;
pub use error::{ConfigError, LayoutError, SnapshotError};
pub use hand::{HandKind, HandStyle, HandStyles};
pub use layout::Measurements;
pub use pause::{PauseState, PauseTransition};
pub use renderer::RenderFrame;
pub use schedule::{RedrawReason, RedrawScheduler};
pub use snapshot::ClockSnapshot;
pub use theme::{Argb, Theme, ThemePatch};
pub use view::ClockView;
