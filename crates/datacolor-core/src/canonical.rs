//! # Canonical Serialization
//!
//! `CanonicalBytes` is the only input accepted by the digest functions in
//! [`crate::digest`]. Its private inner field means the only way to get
//! one is [`CanonicalBytes::new`], which serializes through RFC 8785 (JSON
//! Canonicalization Scheme): sorted keys, compact separators, one byte
//! sequence per logical value.
//!
//! ## Float rejection
//!
//! Floats have round-trip and formatting edge cases that make two equal
//! configurations hash differently across platforms. Callers render real
//! numbers with [`canonical_real`] before canonicalizing, and any float that
//! slips through is rejected with [`CanonicalizationError::FloatRejected`].

use serde::Serialize;
use serde_json::Value;

use crate::error::CanonicalizationError;

/// Bytes produced exclusively by JCS canonicalization of a float-free value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Construct canonical bytes from any serializable value.
    ///
    /// # Errors
    ///
    /// `FloatRejected` if the value contains a non-integer number;
    /// `SerializationFailed` if serialization fails.
    pub fn new(obj: &impl Serialize) -> Result<Self, CanonicalizationError> {
        let value = serde_json::to_value(obj)?;
        ensure_no_floats(&value)?;
        Ok(Self(serde_jcs::to_vec(&value)?))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The canonical form as text. JCS output is always UTF-8.
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Render a real number as its shortest round-trip decimal string.
///
/// `-0.0` renders as `"0"` so that values that compare equal render equal.
pub fn canonical_real(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    let s = format!("{x:?}");
    match s.strip_suffix(".0") {
        Some(int) => int.to_string(),
        None => s,
    }
}

/// Fail on the first non-integer number found, depth first.
fn ensure_no_floats(value: &Value) -> Result<(), CanonicalizationError> {
    match value {
        Value::Number(n) if n.is_f64() => Err(CanonicalizationError::FloatRejected(
            n.as_f64().unwrap_or(f64::NAN),
        )),
        Value::Array(items) => items.iter().try_for_each(ensure_no_floats),
        Value::Object(map) => map.values().try_for_each(ensure_no_floats),
        _ => Ok(()),
    }
}
