pub(crate) mod asset;
pub(crate) mod circle;
pub(crate) mod rect;
pub(crate) mod text;

pub use asset::{AssetCmd, ShapeRef};
pub use circle::CircleCmd;
pub use rect::RectCmd;
pub use text::TextCmd;

use crate::coords::Vec2;

/// Rotation applied to a shape at paint time.
///
/// The shape's geometry is stored unrotated; the host renderer rotates it by
/// `degrees` (clockwise on screen) about `pivot`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
    pub pivot: Vec2,
}

impl Rotation {
    #[inline]
    pub const fn new(degrees: f32, pivot: Vec2) -> Self {
        Self { degrees, pivot }
    }
}
