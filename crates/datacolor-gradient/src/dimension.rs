//! # Dimension
//!
//! One axis of the dataspace. A dimension turns a single determiner into a
//! single color by interpolating between its two nearest anchors.
//!
//! ## Evaluation
//!
//! ```text
//! determiner ──clamp──▶ [min, max] ──curve──▶ remapped ──bracket──▶ [p_j, p_j+1] ──lerp──▶ Color
//! ```
//!
//! The curve exponent `e` biases the position before the bracket search:
//! with `t = clamped - min`, the remapped value is
//! `min + t^e * range^(1 - e)`, evaluated as `min + range * (t / range)^e`
//! so the top anchor (and for `e > 0` the bottom one) maps onto itself
//! exactly. `e > 1` compresses the low end, `e < 1` compresses the high
//! end, and `e = 1` is linear.
//!
//! ## Invariants
//!
//! - Points are sorted ascending by determiner with no duplicates.
//! - `min`, `max` and `range` always describe the current points.
//! - Points are only ever added, so a ready dimension stays ready.

use std::fmt;

use serde::{Deserialize, Serialize};

use datacolor_core::Color;

use crate::error::GradientError;
use crate::point::ConfigPoint;

/// Owner-assigned identifier of a dimension within one factory.
///
/// Identifiers are minted per factory in insertion order, so independent
/// factories never share or disturb each other's counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DimensionId(pub u32);

impl fmt::Display for DimensionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dimension:{}", self.0)
    }
}

/// Derived extent of a non-empty dimension.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    min: f64,
    max: f64,
    range: f64,
}

/// An ordered set of anchors plus an interpolation exponent.
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    id: DimensionId,
    exponent: f64,
    points: Vec<ConfigPoint>,
    bounds: Option<Bounds>,
}

impl Dimension {
    /// Create an empty dimension.
    ///
    /// # Errors
    ///
    /// `InvalidConfigPoint` if `exponent` is negative, NaN, or infinite.
    pub fn new(exponent: f64) -> Result<Self, GradientError> {
        if !exponent.is_finite() || exponent < 0.0 {
            return Err(GradientError::InvalidConfigPoint(format!(
                "interpolation exponent must be a finite number >= 0, got {exponent}"
            )));
        }
        Ok(Self {
            id: DimensionId::default(),
            exponent,
            points: Vec::new(),
            bounds: None,
        })
    }

    pub(crate) fn with_id(mut self, id: DimensionId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> DimensionId {
        self.id
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Anchors in ascending determiner order.
    pub fn points(&self) -> &[ConfigPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// A dimension is ready once it holds at least one anchor.
    pub fn is_ready(&self) -> bool {
        !self.points.is_empty()
    }

    pub fn min(&self) -> Option<f64> {
        self.bounds.map(|b| b.min)
    }

    pub fn max(&self) -> Option<f64> {
        self.bounds.map(|b| b.max)
    }

    pub fn range(&self) -> Option<f64> {
        self.bounds.map(|b| b.range)
    }

    /// Add an anchor, keeping points sorted.
    ///
    /// # Errors
    ///
    /// - `InvalidDeterminer` if `determiner` is not finite.
    /// - `InvalidConfigPoint` if an anchor with an equal determiner exists.
    ///
    /// On error the dimension is unchanged.
    pub fn add_config(&mut self, determiner: f64, color: Color) -> Result<(), GradientError> {
        let point = ConfigPoint::new(determiner, color)?;
        if self.points.iter().any(|p| p.determiner() == point.determiner()) {
            return Err(GradientError::InvalidConfigPoint(format!(
                "{} already has a config point at determiner {determiner}",
                self.id
            )));
        }

        let at = self
            .points
            .partition_point(|p| p.determiner() < point.determiner());
        self.points.insert(at, point);
        self.refresh_bounds();

        tracing::debug!(
            dimension = %self.id,
            determiner,
            color = %color.to_hex(),
            points = self.points.len(),
            "config point added"
        );
        Ok(())
    }

    fn refresh_bounds(&mut self) {
        self.bounds = match (self.points.first(), self.points.last()) {
            (Some(lo), Some(hi)) => Some(Bounds {
                min: lo.determiner(),
                max: hi.determiner(),
                range: hi.determiner() - lo.determiner(),
            }),
            _ => None,
        };
    }

    /// Position after clamping and applying the curve exponent.
    ///
    /// Returns `None` for an empty dimension.
    pub fn remap(&self, determiner: f64) -> Option<f64> {
        let Bounds { min, max, range } = self.bounds?;
        let clamped = determiner.clamp(min, max);
        if self.exponent == 1.0 || range == 0.0 {
            return Some(clamped);
        }
        // 1^e == 1 exactly; 0^e == 0 for e > 0
        let frac = ((clamped - min) / range).powf(self.exponent);
        if frac >= 1.0 {
            return Some(max);
        }
        Some((min + frac * range).clamp(min, max))
    }

    /// Evaluate the gradient at `determiner`.
    ///
    /// A single-anchor dimension returns its color for any input.
    ///
    /// # Errors
    ///
    /// - `NotReady` for an empty dimension.
    /// - `InvalidDeterminer` for NaN (with two or more anchors).
    /// - `DegenerateGradient` if the bracketing anchors share a determiner.
    pub fn get_color(&self, determiner: f64) -> Result<Color, GradientError> {
        match self.points.as_slice() {
            [] => {
                return Err(GradientError::NotReady { ready: 0, total: 1 });
            }
            [only] => return Ok(only.color()),
            _ => {}
        }
        if determiner.is_nan() {
            return Err(GradientError::InvalidDeterminer(determiner));
        }
        let remapped = self
            .remap(determiner)
            .ok_or(GradientError::NotReady { ready: 0, total: 1 })?;

        let (lo, hi) = self.bracket(remapped);
        let span = hi.determiner() - lo.determiner();
        if span == 0.0 {
            return Err(GradientError::DegenerateGradient {
                determiner: lo.determiner(),
            });
        }

        let fraction = (remapped - lo.determiner()) / span;
        Ok(lo.color().lerp(hi.color(), fraction))
    }

    /// First adjacent pair whose upper anchor is at or above `value`.
    /// Requires at least two points.
    fn bracket(&self, value: f64) -> (&ConfigPoint, &ConfigPoint) {
        let last = self.points.len() - 1;
        let j = (0..last)
            .find(|&j| value <= self.points[j + 1].determiner())
            .unwrap_or(last - 1);
        (&self.points[j], &self.points[j + 1])
    }

    /// Insert a point without duplicate checking. Lets tests reach the
    /// degenerate-bracket guard, which `add_config` makes unreachable.
    #[cfg(test)]
    fn push_unchecked(&mut self, point: ConfigPoint) {
        self.points.push(point);
        self.points.sort_by(ConfigPoint::cmp_determiner);
        self.refresh_bounds();
    }
}
