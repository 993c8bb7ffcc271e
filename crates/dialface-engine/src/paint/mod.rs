//! Paint model shared between the widget layer and host renderers.
//!
//! Only solid fills exist. Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
