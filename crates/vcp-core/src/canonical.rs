//! # Canonical Encoding — JCS Byte Production
//!
//! `CanonicalBytes` is the sole construction path for bytes that are signed
//! or verified anywhere in the workspace.
//!
//! ## Security Invariant
//!
//! The inner buffer is private. The only way to obtain `CanonicalBytes` is
//! `CanonicalBytes::new()`, which runs the coercion pass and then RFC 8785
//! (JSON Canonicalization Scheme) serialization. Signers and verifiers both
//! accept `&CanonicalBytes`, so a signature can never be produced over one
//! encoding and checked against another.
//!
//! ## Encoding Rules
//!
//! 1. **Reject floats.** Non-integer numbers have implementation-dependent
//!    textual forms. Integers and strings only.
//! 2. **UTC timestamps.** Datetimes reach the encoder already normalized by
//!    [`Timestamp`](crate::Timestamp): `YYYY-MM-DDTHH:MM:SSZ`.
//! 3. **Binary as hex.** Byte fields serialize as lowercase hex strings
//!    (see [`crate::hex`]).
//! 4. **Sorted keys, compact separators, UTF-8** via `serde_jcs`.

use serde::Serialize;
use serde_json::Value;

use crate::error::EncodingError;

/// Bytes produced exclusively by JCS canonicalization.
///
/// # Invariants
///
/// - The only constructor is `CanonicalBytes::new()`.
/// - Object keys are sorted, separators are compact, output is UTF-8.
/// - No float numbers appear in the output.
///
/// Two structurally equal documents always produce identical bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalBytes(Vec<u8>);

impl CanonicalBytes {
    /// Canonicalize any serializable document.
    ///
    /// # Errors
    ///
    /// Returns `EncodingError::FloatRejected` if the value contains a
    /// non-integer number, `EncodingError::Serialization` if the value
    /// cannot be represented as JSON.
    pub fn new(obj: &impl Serialize) -> Result<Self, EncodingError> {
        let value = serde_json::to_value(obj)?;
        Self::from_value(value)
    }

    /// Canonicalize an already-built JSON value.
    pub fn from_value(value: Value) -> Result<Self, EncodingError> {
        let coerced = coerce_json_value(value)?;
        let bytes = serialize_canonical(&coerced)?;
        Ok(Self(bytes))
    }

    /// Access the canonical bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume and return the owned byte buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Returns the length of the canonical byte sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the canonical byte sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for CanonicalBytes {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Recursively validate a JSON value against the encoding rules.
///
/// `null`, `bool`, `string` and integer numbers pass through. Any number
/// that is only representable as `f64` is rejected.
fn coerce_json_value(value: Value) -> Result<Value, EncodingError> {
    match value {
        Value::Null | Value::Bool(_) | Value::String(_) => Ok(value),
        Value::Number(ref n) => {
            if n.is_f64() {
                return Err(EncodingError::FloatRejected(n.as_f64().unwrap_or(f64::NAN)));
            }
            Ok(value)
        }
        Value::Object(map) => {
            let mut coerced = serde_json::Map::new();
            for (k, v) in map {
                coerced.insert(k, coerce_json_value(v)?);
            }
            Ok(Value::Object(coerced))
        }
        Value::Array(arr) => {
            let coerced: Result<Vec<_>, _> = arr.into_iter().map(coerce_json_value).collect();
            Ok(Value::Array(coerced?))
        }
    }
}

fn serialize_canonical(value: &Value) -> Result<Vec<u8>, EncodingError> {
    let s = serde_jcs::to_string(value)?;
    Ok(s.into_bytes())
}
