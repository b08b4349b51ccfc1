//! # Gradient Errors
//!
//! Every error is raised synchronously by the operation that detects it.
//! Mutations that fail leave the dimension or factory exactly as it was.

use thiserror::Error;

use datacolor_core::{CanonicalizationError, ColorError};

use crate::dimension::DimensionId;

/// Error raised while configuring or querying a color factory.
#[derive(Error, Debug)]
pub enum GradientError {
    /// A config point (or dimension exponent) would violate a dimension
    /// invariant: duplicate determiner, negative or non-finite exponent.
    #[error("invalid config point: {0}")]
    InvalidConfigPoint(String),

    /// A determiner that must be a finite number was not.
    #[error("invalid determiner: {0}")]
    InvalidDeterminer(f64),

    /// Query tuple length does not match the number of dimensions.
    #[error("expected {expected} determiners (one per dimension), got {actual}")]
    DimensionArityMismatch {
        /// Number of configured dimensions.
        expected: usize,
        /// Length of the query tuple.
        actual: usize,
    },

    /// Query attempted before every dimension has a config point.
    #[error("factory not ready: {ready} of {total} dimensions configured")]
    NotReady {
        /// Dimensions with at least one config point.
        ready: usize,
        /// Total dimensions.
        total: usize,
    },

    /// Adjacent anchors of the bracket compare equal.
    #[error("degenerate gradient: adjacent anchors share determiner {determiner}")]
    DegenerateGradient {
        /// The shared determiner.
        determiner: f64,
    },

    /// No dimension with this identifier exists in the factory.
    #[error("unknown dimension: {0}")]
    UnknownDimension(DimensionId),

    /// Color construction or blending failed.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// Snapshot canonicalization failed.
    #[error("canonicalization error: {0}")]
    Canonicalization(#[from] CanonicalizationError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_message() {
        let err = GradientError::DimensionArityMismatch {
            expected: 2,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "expected 2 determiners (one per dimension), got 3"
        );
    }

    #[test]
    fn test_color_error_is_transparent() {
        let err: GradientError = ColorError::EmptyInput.into();
        assert_eq!(err.to_string(), ColorError::EmptyInput.to_string());
    }
}
