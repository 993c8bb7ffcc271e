use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Rotation;

/// Solid rectangle draw payload, optionally rotated about a pivot.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
    pub rotation: Option<Rotation>,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, color: Color, rotation: Option<Rotation>) -> Self {
        Self { rect, color, rotation }
    }
}

impl DrawList {
    /// Records a solid axis-aligned rectangle.
    #[inline]
    pub fn push_solid_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push(z, DrawCmd::Rect(RectCmd::new(rect, color, None)));
    }

    /// Records a solid rectangle rotated about `rotation.pivot`.
    #[inline]
    pub fn push_rotated_rect(&mut self, z: ZIndex, rect: Rect, color: Color, rotation: Rotation) {
        self.push(z, DrawCmd::Rect(RectCmd::new(rect, color, Some(rotation))));
    }
}
