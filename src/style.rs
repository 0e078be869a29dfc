use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// An RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct Color {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Color {
    pub(crate) const DARK_RED: Color = Color::new(0x8b, 0x00, 0x00);
    pub(crate) const DARK_GRAY: Color = Color::new(0xa9, 0xa9, 0xa9);
    /// Used for the terminal status line.
    pub(crate) const STATUS_GRAY: Color = Color::new(0x66, 0x66, 0x66);

    pub(crate) const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `factor`, clamped to `[0, 1]`.
    pub(crate) fn dimmed(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        let scale = |c: u8| (c as f32 * factor).round() as u8;
        Self::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// The color as `#rrggbb`.
    pub(crate) fn as_hex(&self) -> String {
        format!("#{}", hex::encode([self.r, self.g, self.b]))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "darkred" => return Ok(Self::DARK_RED),
            "darkgray" | "darkgrey" => return Ok(Self::DARK_GRAY),
            _ => {}
        }
        let digits = input.strip_prefix('#').unwrap_or(input);
        if digits.len() != 6 {
            return Err(ColorParseError::Length(input.to_string()));
        }
        let mut rgb = [0u8; 3];
        hex::decode_to_slice(digits, &mut rgb).map_err(|e| ColorParseError::Hex(input.to_string(), e))?;
        Ok(Self::new(rgb[0], rgb[1], rgb[2]))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let input = String::deserialize(deserializer)?;
        input.parse().map_err(serde::de::Error::custom)
    }
}

impl From<Color> for crossterm::style::Color {
    fn from(color: Color) -> Self {
        crossterm::style::Color::Rgb { r: color.r, g: color.g, b: color.b }
    }
}

#[derive(thiserror::Error, Debug)]
pub(crate) enum ColorParseError {
    #[error("color '{0}' must have exactly 6 hex digits")]
    Length(String),

    #[error("invalid hex color '{0}': {1}")]
    Hex(String, hex::FromHexError),
}
