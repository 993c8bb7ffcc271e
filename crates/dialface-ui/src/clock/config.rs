//! Construction-time configuration of a clock.

use dialface_engine::scene::ShapeRef;

use super::error::ConfigError;
use super::hand::{HandKind, HandStyle, HandStyles};
use super::theme::{Argb, Theme};

/// Initial theme and hand styles of a [`ClockView`](super::view::ClockView).
///
/// ```rust,ignore
/// let config = ClockConfig::default()
///     .face_color(Argb::from_rgba(0xFF, 0xE0, 0xB2, 0xFF))
///     .shape(ShapeRef::CLOCK_FACE_ALT);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClockConfig {
    pub theme: Theme,
    pub hand_styles: HandStyles,
}

impl ClockConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text_color(mut self, c: Argb) -> Self { self.theme.text_color = c; self }
    pub fn face_color(mut self, c: Argb) -> Self { self.theme.face_color = c; self }
    pub fn second_hand_color(mut self, c: Argb) -> Self { self.theme.second_hand_color = c; self }
    pub fn minute_hand_color(mut self, c: Argb) -> Self { self.theme.minute_hand_color = c; self }
    pub fn hour_hand_color(mut self, c: Argb) -> Self { self.theme.hour_hand_color = c; self }
    pub fn shape(mut self, s: ShapeRef) -> Self { self.theme.shape = s; self }

    pub fn hand_style(mut self, kind: HandKind, style: HandStyle) -> Self {
        self.hand_styles.set(kind, style);
        self
    }

    /// Builds a config from `name = value` attribute pairs, as a host layout
    /// file would supply them. Unset attributes keep their defaults.
    ///
    /// Recognised names: `text_color`, `face_color`, `second_hand_color`,
    /// `minute_hand_color`, `hour_hand_color` (all `#rrggbb` or `#rrggbbaa`)
    /// and `shape` (`face`, `face_alt` or a numeric asset id).
    pub fn from_attrs<I, K, V>(attrs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut config = Self::default();
        for (name, value) in attrs {
            let (name, value) = (name.as_ref(), value.as_ref().trim());
            let theme = &mut config.theme;
            match name {
                "text_color" => theme.text_color = parse_color(name, value)?,
                "face_color" => theme.face_color = parse_color(name, value)?,
                "second_hand_color" => theme.second_hand_color = parse_color(name, value)?,
                "minute_hand_color" => theme.minute_hand_color = parse_color(name, value)?,
                "hour_hand_color" => theme.hour_hand_color = parse_color(name, value)?,
                "shape" => theme.shape = parse_shape(name, value)?,
                _ => return Err(ConfigError::new(name, "unknown attribute")),
            }
        }
        Ok(config)
    }
}

/// Parses `#rrggbb` or `#rrggbbaa` into packed ARGB.
pub fn parse_color(attribute: &str, value: &str) -> Result<Argb, ConfigError> {
    let Some(hex) = value.strip_prefix('#') else {
        return Err(ConfigError::new(attribute, format!("color must start with '#', got {value:?}")));
    };
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) || !matches!(hex.len(), 6 | 8) {
        return Err(ConfigError::new(
            attribute,
            format!("color must be #rrggbb or #rrggbbaa, got {value:?}"),
        ));
    }

    let byte = |i: usize| {
        u8::from_str_radix(&hex[i..i + 2], 16)
            .map_err(|e| ConfigError::new(attribute, e.to_string()))
    };
    let a = if hex.len() == 8 { byte(6)? } else { 0xFF };
    Ok(Argb::from_rgba(byte(0)?, byte(2)?, byte(4)?, a))
}

/// Parses a background shape: `face`, `face_alt` or a numeric asset id.
pub fn parse_shape(attribute: &str, value: &str) -> Result<ShapeRef, ConfigError> {
    match value {
        "face" => Ok(ShapeRef::CLOCK_FACE),
        "face_alt" => Ok(ShapeRef::CLOCK_FACE_ALT),
        other => other
            .parse::<u32>()
            .map(ShapeRef)
            .map_err(|_| ConfigError::new(attribute, format!("unknown shape {other:?}"))),
    }
}
