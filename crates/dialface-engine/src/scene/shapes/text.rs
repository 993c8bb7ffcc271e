use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::FontId;

/// Text draw payload.
///
/// The string is horizontally centered on `anchor.x` and sits on the baseline
/// `anchor.y`.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    /// `None` selects the host's default (bold) face.
    pub font: Option<FontId>,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    pub anchor: Vec2,
}

impl DrawList {
    /// Records a centered text draw command.
    pub fn push_centered_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: Option<FontId>,
        size: f32,
        color: Color,
        anchor: Vec2,
    ) {
        self.push(z, DrawCmd::Text(TextCmd {
            text: text.into(),
            font,
            size,
            color,
            anchor,
        }));
    }
}
