//! # Cryptographic Error Types

use thiserror::Error;

use vcp_core::HexError;

/// Errors from key handling and random generation.
///
/// A signature that does not verify is *not* an error here: verification
/// returns `false` for that case.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// The OS random source failed while generating a key pair.
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// The OS random source failed while generating a nonce.
    #[error("secure random source unavailable: {0}")]
    RandomSource(String),

    /// Requested nonce length is below the minimum.
    #[error("nonce length must be at least {min} bytes, got {requested}")]
    NonceTooShort {
        /// Smallest accepted length.
        min: usize,
        /// Length that was asked for.
        requested: usize,
    },

    /// Bytes that are not a valid Ed25519 public key.
    #[error("invalid Ed25519 public key: {0}")]
    InvalidPublicKey(String),

    /// Hex decoding of a key or signature failed.
    #[error("hex decode error: {0}")]
    HexDecode(#[from] HexError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonce_too_short_display() {
        let err = CryptoError::NonceTooShort {
            min: 12,
            requested: 4,
        };
        let msg = format!("{err}");
        assert!(msg.contains("12"));
        assert!(msg.contains('4'));
    }

    #[test]
    fn hex_error_converts() {
        let err = CryptoError::from(HexError::OddLength(3));
        assert!(format!("{err}").contains("even length"));
    }
}
