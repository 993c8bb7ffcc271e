use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Rotation;

/// Opaque reference to a host-owned image or vector asset.
///
/// The scene never interprets the asset; hosts map ids to their own resources.
/// The constants name the assets every host is expected to provide.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct ShapeRef(pub u32);

impl ShapeRef {
    /// Default clock-face background.
    pub const CLOCK_FACE: ShapeRef = ShapeRef(1);
    /// Alternate clock-face background.
    pub const CLOCK_FACE_ALT: ShapeRef = ShapeRef(2);
    /// Minute hand glyph.
    pub const MINUTE_HAND: ShapeRef = ShapeRef(3);
    /// Hour hand glyph.
    pub const HOUR_HAND: ShapeRef = ShapeRef(4);

    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

impl Default for ShapeRef {
    fn default() -> Self {
        ShapeRef::CLOCK_FACE
    }
}

/// Asset draw payload: the asset is stretched to `bounds`.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetCmd {
    pub asset: ShapeRef,
    pub bounds: Rect,
    /// Replaces the asset's own colors when set.
    pub tint: Option<Color>,
    pub rotation: Option<Rotation>,
}

impl DrawList {
    /// Records an asset stretched to `bounds`.
    #[inline]
    pub fn push_asset(&mut self, z: ZIndex, asset: ShapeRef, bounds: Rect) {
        self.push(z, DrawCmd::Asset(AssetCmd { asset, bounds, tint: None, rotation: None }));
    }

    /// Records a tinted asset rotated about `rotation.pivot`.
    #[inline]
    pub fn push_tinted_asset(
        &mut self,
        z: ZIndex,
        asset: ShapeRef,
        bounds: Rect,
        tint: Color,
        rotation: Rotation,
    ) {
        self.push(z, DrawCmd::Asset(AssetCmd {
            asset,
            bounds,
            tint: Some(tint),
            rotation: Some(rotation),
        }));
    }
}
