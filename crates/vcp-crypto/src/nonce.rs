//! # Challenge Nonces
//!
//! A verifier hands out a fresh nonce per presentation request; the subject
//! signs it into the presentation. Nonces are drawn from the OS CSPRNG only.
//! A predictable nonce would let an old presentation be replayed, so a
//! failing random source is reported as an error and never papered over.

use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};

use vcp_core::hex;

use crate::error::CryptoError;

/// Smallest nonce length accepted, in bytes.
pub const MIN_NONCE_LEN: usize = 12;

/// Nonce length used when none is configured.
pub const DEFAULT_NONCE_LEN: usize = 12;

/// Random challenge bytes. Serialized as lowercase hex.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Nonce(#[serde(with = "vcp_core::hex::vec")] Vec<u8>);

impl Nonce {
    /// Draw `len` bytes from the operating system CSPRNG.
    ///
    /// # Errors
    ///
    /// `CryptoError::NonceTooShort` if `len < MIN_NONCE_LEN`,
    /// `CryptoError::RandomSource` if the OS source fails.
    pub fn generate(len: usize) -> Result<Self, CryptoError> {
        Self::generate_from(&mut rand::rngs::OsRng, len)
    }

    /// Draw `len` bytes from the given cryptographic RNG.
    pub fn generate_from<R: RngCore + CryptoRng>(
        rng: &mut R,
        len: usize,
    ) -> Result<Self, CryptoError> {
        check_len(len)?;
        let mut bytes = vec![0u8; len];
        rng.try_fill_bytes(&mut bytes)
            .map_err(|e| CryptoError::RandomSource(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Wrap bytes received from elsewhere (e.g. a nonce agreed out of band).
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// The raw nonce bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Mutable access to the raw bytes.
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        &mut self.0
    }

    /// Nonce length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for a zero-length nonce.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex rendering.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

/// Reject nonce lengths below [`MIN_NONCE_LEN`].
pub fn check_len(len: usize) -> Result<(), CryptoError> {
    if len < MIN_NONCE_LEN {
        return Err(CryptoError::NonceTooShort {
            min: MIN_NONCE_LEN,
            requested: len,
        });
    }
    Ok(())
}

impl std::fmt::Debug for Nonce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Nonce({})", self.to_hex())
    }
}

impl std::fmt::Display for Nonce {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}
