//! # Color Value Type
//!
//! An immutable 8-bit RGB triple. Every constructor validates its input, so
//! a `Color` in hand always holds three channels in `[0, 255]`.
//!
//! ## Construction
//!
//! Each input shape has its own named constructor with a single failure
//! mode:
//!
//! | Input | Constructor |
//! |---|---|
//! | `u8` channels | [`Color::rgb`] (infallible) |
//! | integer channels | [`Color::from_rgb`] |
//! | integer slice | [`Color::from_channels`] |
//! | `"#RRGGBB"` | [`Color::from_hex`] |
//! | `"rgb(r,g,b)"` | [`Color::from_text`] |
//! | symbolic name | [`Color::from_name`] |
//!
//! A copy is a plain `Copy`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;

/// An RGB color. Equality is exact channel equality.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from integer channels, rejecting anything outside
    /// `[0, 255]`.
    pub fn from_rgb(r: i64, g: i64, b: i64) -> Result<Self, ColorError> {
        let channel = |v: i64| -> Result<u8, ColorError> {
            u8::try_from(v).map_err(|_| {
                ColorError::InvalidColor(format!(
                    "channel {v} outside 0-255 in ({r}, {g}, {b})"
                ))
            })
        };
        Ok(Self::rgb(channel(r)?, channel(g)?, channel(b)?))
    }

    /// Build a color from a channel slice, which must hold exactly three
    /// in-range values.
    pub fn from_channels(channels: &[i64]) -> Result<Self, ColorError> {
        match *channels {
            [r, g, b] => Self::from_rgb(r, g, b),
            _ => Err(ColorError::InvalidColor(format!(
                "expected 3 channels, got {}",
                channels.len()
            ))),
        }
    }

    #[inline]
    pub fn red(self) -> u8 {
        self.r
    }

    #[inline]
    pub fn green(self) -> u8 {
        self.g
    }

    #[inline]
    pub fn blue(self) -> u8 {
        self.b
    }

    #[must_use]
    #[inline]
    pub fn to_rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Perceptual brightness on a 0-255 scale: `0.299 R + 0.587 G + 0.114 B`.
    ///
    /// Channels are weighted as stored; no gamma decoding is applied.
    #[must_use]
    pub fn luminance(self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }

    #[must_use]
    pub fn invert(self) -> Self {
        Self::rgb(255 - self.r, 255 - self.g, 255 - self.b)
    }

    /// Upper-case `#RRGGBB` encoding.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<Color> for [u8; 3] {
    fn from(c: Color) -> Self {
        [c.r, c.g, c.b]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

// Serialized as `#RRGGBB`; any supported text encoding is accepted back.
impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb_accepts_bounds() {
        let c = Color::from_rgb(0, 128, 255).unwrap();
        assert_eq!(c.to_rgb(), (0, 128, 255));
    }

    #[test]
    fn test_from_rgb_rejects_out_of_range() {
        assert!(matches!(
            Color::from_rgb(256, 0, 0),
            Err(ColorError::InvalidColor(_))
        ));
        assert!(matches!(
            Color::from_rgb(0, -1, 0),
            Err(ColorError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_from_channels_arity() {
        assert!(Color::from_channels(&[1, 2, 3]).is_ok());
        assert!(matches!(
            Color::from_channels(&[1, 2]),
            Err(ColorError::InvalidColor(_))
        ));
        assert!(matches!(
            Color::from_channels(&[1, 2, 3, 4]),
            Err(ColorError::InvalidColor(_))
        ));
    }

    #[test]
    fn test_luminance_weights() {
        assert_eq!(Color::BLACK.luminance(), 0.0);
        assert!((Color::WHITE.luminance() - 255.0).abs() < 1e-9);
        assert!((Color::rgb(255, 0, 0).luminance() - 76.245).abs() < 1e-9);
    }

    #[test]
    fn test_invert() {
        assert_eq!(Color::rgb(0, 100, 255).invert(), Color::rgb(255, 155, 0));
        assert_eq!(Color::BLACK.invert(), Color::WHITE);
    }

    #[test]
    fn test_to_hex_is_upper_case() {
        assert_eq!(Color::rgb(171, 205, 239).to_hex(), "#ABCDEF");
        assert_eq!(Color::rgb(1, 2, 3).to_hex(), "#010203");
    }

    #[test]
    fn test_display_is_rgb_function() {
        assert_eq!(Color::rgb(20, 56, 198).to_string(), "rgb(20,56,198)");
    }

    #[test]
    fn test_serde_uses_hex() {
        let json = serde_json::to_string(&Color::rgb(255, 0, 16)).unwrap();
        assert_eq!(json, "\"#FF0010\"");
        let back: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Color::rgb(255, 0, 16));
        let named: Color = serde_json::from_str("\"seagreen\"").unwrap();
        assert_eq!(named, Color::rgb(46, 139, 87));
    }

    #[test]
    fn test_serde_rejects_garbage() {
        assert!(serde_json::from_str::<Color>("\"not a color\"").is_err());
    }
}
