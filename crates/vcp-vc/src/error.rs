//! # Credential Error Types
//!
//! Two kinds of failure share one enum. Operational failures (encoding,
//! key generation, random source) abort the operation that hit them.
//! Verification rejections are the expected negative outcome of checking
//! untrusted input; [`VcError::is_rejection`] tells them apart.

use thiserror::Error;

use vcp_core::EncodingError;
use vcp_crypto::{CryptoError, Ed25519PublicKey};

/// Errors from issuance, presentation and verification.
#[derive(Error, Debug)]
pub enum VcError {
    /// A document could not be canonicalized.
    #[error("encoding failed: {0}")]
    Encoding(#[from] EncodingError),

    /// The random source failed while creating an actor's key pair.
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    /// The random source failed while creating a nonce.
    #[error("random source failed: {0}")]
    RandomSource(String),

    /// A verifier was configured with a nonce shorter than the minimum.
    #[error("nonce length must be at least {min} bytes, got {requested}")]
    NonceTooShort {
        /// Smallest accepted length.
        min: usize,
        /// Length that was asked for.
        requested: usize,
    },

    /// Malformed key material handed to the crate.
    #[error("crypto error: {0}")]
    Crypto(CryptoError),

    /// The presentation was signed by someone other than the credential
    /// subject.
    #[error("presentation prover {prover} is not the credential subject {subject}")]
    BindingMismatch {
        /// Subject id recorded in the credential.
        subject: Ed25519PublicKey,
        /// Key that signed the presentation.
        prover: Ed25519PublicKey,
    },

    /// The issuer's proof does not cover the credential as presented.
    #[error("invalid credential signature")]
    InvalidCredentialSignature,

    /// The subject's proof does not cover the presentation as received.
    #[error("invalid presentation signature")]
    InvalidPresentationSignature,
}

impl VcError {
    /// True for verification outcomes on untrusted input, false for
    /// operational failures.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::BindingMismatch { .. }
                | Self::InvalidCredentialSignature
                | Self::InvalidPresentationSignature
        )
    }
}

impl From<CryptoError> for VcError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::KeyGeneration(msg) => Self::KeyGeneration(msg),
            CryptoError::RandomSource(msg) => Self::RandomSource(msg),
            CryptoError::NonceTooShort { min, requested } => {
                Self::NonceTooShort { min, requested }
            }
            other @ (CryptoError::InvalidPublicKey(_) | CryptoError::HexDecode(_)) => {
                Self::Crypto(other)
            }
        }
    }
}
