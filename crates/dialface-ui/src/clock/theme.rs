use dialface_engine::paint::Color;
use dialface_engine::scene::ShapeRef;

use super::hand::HandKind;

/// Opaque packed `0xAARRGGBB` color.
///
/// Kept packed (rather than as a float [`Color`]) so saved state reproduces
/// the exact value the host configured.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Argb(pub u32);

impl Argb {
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const GRAY: Argb = Argb(0xFF88_8888);

    #[inline]
    pub const fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Argb(u32::from_be_bytes([a, r, g, b]))
    }

    #[inline]
    pub const fn alpha(self) -> u8 {
        self.0.to_be_bytes()[0]
    }

    #[inline]
    pub fn to_color(self) -> Color {
        Color::from_argb(self.0)
    }
}

/// Colors and background asset of a clock face.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Theme {
    pub text_color: Argb,
    pub face_color: Argb,
    pub second_hand_color: Argb,
    pub minute_hand_color: Argb,
    pub hour_hand_color: Argb,
    pub shape: ShapeRef,
}

impl Theme {
    pub const DEFAULT_SECOND_HAND: Argb = Argb(0xFFE5_3935);
    pub const DEFAULT_MINUTE_HAND: Argb = Argb(0xFF37_474F);
    pub const DEFAULT_HOUR_HAND: Argb = Argb(0xFF26_3238);

    #[inline]
    pub fn hand_color(&self, kind: HandKind) -> Argb {
        match kind {
            HandKind::Hour => self.hour_hand_color,
            HandKind::Minute => self.minute_hand_color,
            HandKind::Second => self.second_hand_color,
        }
    }

    /// Merges every field set in `patch`. Returns `true` if anything changed.
    pub fn apply(&mut self, patch: &ThemePatch) -> bool {
        let before = *self;
        if let Some(v) = patch.text_color {
            self.text_color = v;
        }
        if let Some(v) = patch.face_color {
            self.face_color = v;
        }
        if let Some(v) = patch.second_hand_color {
            self.second_hand_color = v;
        }
        if let Some(v) = patch.minute_hand_color {
            self.minute_hand_color = v;
        }
        if let Some(v) = patch.hour_hand_color {
            self.hour_hand_color = v;
        }
        if let Some(v) = patch.shape {
            self.shape = v;
        }
        *self != before
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_color: Argb::BLACK,
            face_color: Argb::WHITE,
            second_hand_color: Self::DEFAULT_SECOND_HAND,
            minute_hand_color: Self::DEFAULT_MINUTE_HAND,
            hour_hand_color: Self::DEFAULT_HOUR_HAND,
            shape: ShapeRef::CLOCK_FACE,
        }
    }
}

/// Partial theme update; unset fields keep their current value.
///
/// # Example
/// ```rust,ignore
/// view.set_theme(ThemePatch::new().face_color(Argb(0xFFFFE0B2)).shape(ShapeRef::CLOCK_FACE_ALT));
/// ```
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct ThemePatch {
    pub text_color: Option<Argb>,
    pub face_color: Option<Argb>,
    pub second_hand_color: Option<Argb>,
    pub minute_hand_color: Option<Argb>,
    pub hour_hand_color: Option<Argb>,
    pub shape: Option<ShapeRef>,
}

impl ThemePatch {
    pub fn new() -> Self { Self::default() }

    pub fn text_color(mut self, v: Argb) -> Self { self.text_color = Some(v); self }
    pub fn face_color(mut self, v: Argb) -> Self { self.face_color = Some(v); self }
    pub fn second_hand_color(mut self, v: Argb) -> Self { self.second_hand_color = Some(v); self }
    pub fn minute_hand_color(mut self, v: Argb) -> Self { self.minute_hand_color = Some(v); self }
    pub fn hour_hand_color(mut self, v: Argb) -> Self { self.hour_hand_color = Some(v); self }
    pub fn shape(mut self, v: ShapeRef) -> Self { self.shape = Some(v); self }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
