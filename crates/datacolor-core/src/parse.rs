//! # Color Text Encodings
//!
//! Parsers for the three textual color forms:
//!
//! - `#RRGGBB`: two hex digits per channel, case-insensitive.
//! - `rgb(R,G,B)`: decimal integers, whitespace allowed around the
//!   numbers, commas, and parentheses.
//! - symbolic names: resolved against a [`ColorNames`] table.
//!
//! Surrounding whitespace is trimmed for every form.

use crate::color::Color;
use crate::error::ColorError;
use crate::names::{ColorNames, CssColorNames};

fn invalid(input: &str, reason: &str) -> ColorError {
    ColorError::InvalidColor(format!("{input:?}: {reason}"))
}

fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let nibble = |c: u8| -> Option<u8> {
        match c {
            b'0'..=b'9' => Some(c - b'0'),
            b'a'..=b'f' => Some(c - b'a' + 10),
            b'A'..=b'F' => Some(c - b'A' + 10),
            _ => None,
        }
    };
    Some(nibble(hi)? << 4 | nibble(lo)?)
}

/// Parse a single `rgb()` channel: ASCII digits only, value 0-255.
fn rgb_channel(raw: &str, input: &str) -> Result<u8, ColorError> {
    let digits = raw.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(input, "rgb() channels must be decimal integers"));
    }
    digits
        .parse::<u32>()
        .ok()
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(|| invalid(input, "rgb() channel outside 0-255"))
}

impl Color {
    /// Parse `#RRGGBB`.
    pub fn from_hex(s: &str) -> Result<Self, ColorError> {
        let body = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| invalid(s, "hex colors start with '#'"))?;
        let bytes = body.as_bytes();
        if bytes.len() != 6 {
            return Err(invalid(s, "hex colors have exactly six digits"));
        }
        let pair = |i: usize| hex_pair(bytes[i], bytes[i + 1]).ok_or_else(|| invalid(s, "bad hex digit"));
        Ok(Self::rgb(pair(0)?, pair(2)?, pair(4)?))
    }

    /// Parse `rgb(R,G,B)`.
    pub fn from_text(s: &str) -> Result<Self, ColorError> {
        let lower = s.trim().to_ascii_lowercase();
        let args = lower
            .strip_prefix("rgb")
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('('))
            .and_then(|rest| rest.trim_end().strip_suffix(')'))
            .ok_or_else(|| invalid(s, "expected rgb(r,g,b)"))?;

        let parts: Vec<&str> = args.split(',').collect();
        if parts.len() != 3 {
            return Err(invalid(s, "rgb() takes exactly three channels"));
        }
        Ok(Self::rgb(
            rgb_channel(parts[0], s)?,
            rgb_channel(parts[1], s)?,
            rgb_channel(parts[2], s)?,
        ))
    }

    /// Resolve a symbolic name. Case-insensitive, surrounding whitespace
    /// trimmed.
    pub fn from_name(name: &str, table: &impl ColorNames) -> Result<Self, ColorError> {
        table
            .lookup(name)
            .ok_or_else(|| invalid(name, "unknown color name"))
    }

    /// Parse any supported encoding, resolving names against the built-in
    /// CSS table.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let trimmed = s.trim();
        if trimmed.starts_with('#') {
            Self::from_hex(trimmed)
        } else if trimmed
            .get(..3)
            .is_some_and(|p| p.eq_ignore_ascii_case("rgb"))
        {
            Self::from_text(trimmed)
        } else {
            Self::from_name(trimmed, &CssColorNames)
        }
    }
}

impl core::str::FromStr for Color {
    type Err = ColorError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl TryFrom<&str> for Color {
    type Error = ColorError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Color::parse(value)
    }
}
