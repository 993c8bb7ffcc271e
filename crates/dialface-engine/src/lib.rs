//! dialface engine crate.
//!
//! Renderer-agnostic building blocks for clock faces: geometry, colors, the
//! draw command stream hosts consume, glyph measurement and time sources.
//! Nothing here knows about windows or GPUs; hosts translate [`scene`]
//! commands into their own drawing API.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod text;
pub mod time;
