//! # Config Points
//!
//! A config point anchors one determiner value to one color inside a
//! dimension. Points are immutable; a dimension orders them by determiner.

use std::cmp::Ordering;

use serde::Serialize;

use datacolor_core::Color;

use crate::error::GradientError;

/// An immutable `(determiner, color)` anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConfigPoint {
    determiner: f64,
    color: Color,
}

impl ConfigPoint {
    /// Create an anchor. The determiner must be finite.
    pub fn new(determiner: f64, color: Color) -> Result<Self, GradientError> {
        if !determiner.is_finite() {
            return Err(GradientError::InvalidDeterminer(determiner));
        }
        // normalize -0.0 so equal determiners are indistinguishable
        let determiner = if determiner == 0.0 { 0.0 } else { determiner };
        Ok(Self { determiner, color })
    }

    #[inline]
    pub fn determiner(&self) -> f64 {
        self.determiner
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Ordering by determiner alone.
    pub fn cmp_determiner(&self, other: &Self) -> Ordering {
        self.determiner.total_cmp(&other.determiner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_finite() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                ConfigPoint::new(bad, Color::BLACK),
                Err(GradientError::InvalidDeterminer(_))
            ));
        }
    }

    #[test]
    fn test_negative_zero_normalized() {
        let p = ConfigPoint::new(-0.0, Color::BLACK).unwrap();
        assert!(p.determiner().is_sign_positive());
    }

    #[test]
    fn test_cmp_determiner_ignores_color() {
        let a = ConfigPoint::new(1.0, Color::WHITE).unwrap();
        let b = ConfigPoint::new(2.0, Color::BLACK).unwrap();
        assert_eq!(a.cmp_determiner(&b), Ordering::Less);
        assert_eq!(b.cmp_determiner(&a), Ordering::Greater);
        let c = ConfigPoint::new(1.0, Color::BLACK).unwrap();
        assert_eq!(a.cmp_determiner(&c), Ordering::Equal);
        assert_ne!(a, c);
    }
}
