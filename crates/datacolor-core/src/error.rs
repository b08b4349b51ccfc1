//! # Error Types
//!
//! Errors raised by the color value type, its text encodings, the blend
//! primitives, canonical serialization, and fingerprint parsing. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Every error is reported synchronously by the operation that detects it.
//! - Messages carry the offending input so a caller can surface it verbatim.

use thiserror::Error;

/// Error raised while constructing, parsing, or blending colors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ColorError {
    /// A channel was out of range, the tuple arity was wrong, the text
    /// matched no supported grammar, or a name was not in the table.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A blend identifier outside the supported set.
    #[error("unknown blend method: {0:?}")]
    UnknownBlendMethod(String),

    /// Blending was requested over an empty list of colors.
    #[error("cannot blend an empty list of colors")]
    EmptyInput,
}

/// Error during canonical serialization.
#[derive(Error, Debug)]
pub enum CanonicalizationError {
    /// Float values are not permitted in canonical representations.
    /// Real numbers must be rendered as decimal strings first.
    #[error("float values are not permitted in canonical representations; render {0} as a string")]
    FloatRejected(f64),

    /// JSON serialization failed.
    #[error("serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

/// Error parsing a textual fingerprint.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// Wrong length or a non-hex character after the optional prefix.
    #[error("invalid digest {0:?}: expected 64 hex chars, optionally prefixed with \"sha256:\"")]
    InvalidDigest(String),
}
