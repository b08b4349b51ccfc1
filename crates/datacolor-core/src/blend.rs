//! # Blend Methods
//!
//! Pairwise channel arithmetic that combines a *base* color with a *blend*
//! color, and the left-to-right reducer [`Color::blend`] that folds a list
//! of colors with one of those primitives.
//!
//! | Method | Channel formula |
//! |---|---|
//! | `lerp` | `trunc(base + (blend - base) * alpha)` |
//! | `additive` | `min(255, base + blend)` |
//! | `subtractive` | `max(0, base - blend)` |
//! | `difference` | `abs(base - blend)` |
//! | `multiplicative` | `(base * blend) / 255` |
//! | `overlay` | `base <= 127 ? (2 * base * blend) / 255 : 255 - (2 * (255 - base) * (255 - blend)) / 255` |
//!
//! Integer divisions truncate. Every result is clamped to `[0, 255]`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::Color;
use crate::error::ColorError;

/// Interpolation weight used when `lerp` acts as a list reducer.
pub const REDUCER_ALPHA: f64 = 0.5;

/// The closed set of supported blend algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BlendMethod {
    /// Linear interpolation at [`REDUCER_ALPHA`].
    #[default]
    Lerp,
    Additive,
    Subtractive,
    Difference,
    Multiplicative,
    Overlay,
}

impl BlendMethod {
    /// All variants, in declaration order.
    pub fn all() -> &'static [BlendMethod] {
        &[
            Self::Lerp,
            Self::Additive,
            Self::Subtractive,
            Self::Difference,
            Self::Multiplicative,
            Self::Overlay,
        ]
    }

    /// Canonical identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lerp => "lerp",
            Self::Additive => "additive",
            Self::Subtractive => "subtractive",
            Self::Difference => "difference",
            Self::Multiplicative => "multiplicative",
            Self::Overlay => "overlay",
        }
    }

    /// Combine two colors with this method.
    #[must_use]
    pub fn apply(self, base: Color, blend: Color) -> Color {
        match self {
            Self::Lerp => base.lerp(blend, REDUCER_ALPHA),
            Self::Additive => base.additive(blend),
            Self::Subtractive => base.subtractive(blend),
            Self::Difference => base.difference(blend),
            Self::Multiplicative => base.multiply(blend),
            Self::Overlay => base.overlay(blend),
        }
    }
}

impl fmt::Display for BlendMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlendMethod {
    type Err = ColorError;

    /// Accepts the canonical identifiers, case-insensitively, plus the
    /// long-form aliases `linear interpolation` and `alpha` for `lerp`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        match wanted.as_str() {
            "lerp" | "linear interpolation" | "alpha" => Ok(Self::Lerp),
            "additive" => Ok(Self::Additive),
            "subtractive" => Ok(Self::Subtractive),
            "difference" => Ok(Self::Difference),
            "multiplicative" => Ok(Self::Multiplicative),
            "overlay" => Ok(Self::Overlay),
            _ => Err(ColorError::UnknownBlendMethod(s.to_string())),
        }
    }
}

impl Serialize for BlendMethod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BlendMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[inline]
fn clamp_channel(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

/// Apply an integer channel function to all three channels.
#[inline]
fn per_channel(base: Color, blend: Color, f: impl Fn(i32, i32) -> i32) -> Color {
    let ch = |a: u8, b: u8| clamp_channel(f(i32::from(a), i32::from(b)));
    Color::rgb(
        ch(base.red(), blend.red()),
        ch(base.green(), blend.green()),
        ch(base.blue(), blend.blue()),
    )
}

impl Color {
    /// Linear interpolation toward `other`. `alpha` is clamped to `[0, 1]`
    /// (NaN counts as 0); each channel is truncated toward zero.
    #[must_use]
    pub fn lerp(self, other: Color, alpha: f64) -> Color {
        let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
        let ch = |a: u8, b: u8| -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * alpha).trunc().clamp(0.0, 255.0) as u8
        };
        Color::rgb(
            ch(self.red(), other.red()),
            ch(self.green(), other.green()),
            ch(self.blue(), other.blue()),
        )
    }

    #[must_use]
    pub fn additive(self, other: Color) -> Color {
        per_channel(self, other, |a, b| (a + b).min(255))
    }

    #[must_use]
    pub fn subtractive(self, other: Color) -> Color {
        per_channel(self, other, |a, b| (a - b).max(0))
    }

    #[must_use]
    pub fn difference(self, other: Color) -> Color {
        per_channel(self, other, |a, b| (a - b).abs())
    }

    #[must_use]
    pub fn multiply(self, other: Color) -> Color {
        per_channel(self, other, |a, b| (a * b) / 255)
    }

    #[must_use]
    pub fn overlay(self, other: Color) -> Color {
        per_channel(self, other, |a, b| {
            if a <= 127 {
                (2 * a * b) / 255
            } else {
                255 - (2 * (255 - a) * (255 - b)) / 255
            }
        })
    }

    /// Fold `colors` left to right with `method`.
    ///
    /// A single color is returned unchanged. An empty slice is
    /// [`ColorError::EmptyInput`].
    pub fn blend(colors: &[Color], method: BlendMethod) -> Result<Color, ColorError> {
        let (&first, rest) = colors.split_first().ok_or(ColorError::EmptyInput)?;
        Ok(rest.iter().fold(first, |acc, &c| method.apply(acc, c)))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn color() -> impl Strategy<Value = Color> {
        any::<[u8; 3]>().prop_map(Color::from)
    }

    proptest! {
        /// Lerp output always lies between its endpoints, channel by channel.
        #[test]
        fn lerp_stays_between_endpoints(a in color(), b in color(), alpha in 0.0f64..=1.0) {
            let out = a.lerp(b, alpha);
            let within = |x: u8, y: u8, v: u8| x.min(y) <= v && v <= x.max(y);
            prop_assert!(within(a.red(), b.red(), out.red()));
            prop_assert!(within(a.green(), b.green(), out.green()));
            prop_assert!(within(a.blue(), b.blue(), out.blue()));
        }

        /// Difference is symmetric; subtractive never exceeds difference.
        #[test]
        fn difference_symmetric(a in color(), b in color()) {
            prop_assert_eq!(a.difference(b), b.difference(a));
            let s = a.subtractive(b);
            let d = a.difference(b);
            prop_assert!(s.red() <= d.red() && s.green() <= d.green() && s.blue() <= d.blue());
        }

        /// Blending a list never panics for any method.
        #[test]
        fn blend_never_panics(colors in prop::collection::vec(color(), 1..6), idx in 0usize..6) {
            let method = BlendMethod::all()[idx];
            prop_assert!(Color::blend(&colors, method).is_ok());
        }
    }
}
