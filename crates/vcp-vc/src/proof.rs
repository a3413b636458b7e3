//! # Proofs
//!
//! A proof is a detached signature over the canonical bytes of its sibling
//! unsigned payload. It never covers itself: the payload is canonicalized,
//! signed, and only then is the proof attached next to it.
//!
//! The `created` timestamp is informational. Verification never reads it,
//! so two proofs over the same bytes by the same key differ only there.

use serde::{Deserialize, Serialize};

use vcp_core::{CanonicalBytes, Timestamp};
use vcp_crypto::{ed25519, Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};

/// The signature suite of a proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProofType {
    /// Ed25519 signature over JCS-canonicalized JSON.
    Ed25519Signature2018,
}

impl std::fmt::Display for ProofType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ed25519Signature2018 => f.write_str("Ed25519Signature2018"),
        }
    }
}

/// A signature with the metadata needed to check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Proof {
    /// Signature suite.
    #[serde(rename = "type")]
    pub proof_type: ProofType,

    /// When the proof was made (UTC, seconds).
    pub created: Timestamp,

    /// Public key of the signer.
    pub creator: Ed25519PublicKey,

    /// Signature over the sibling payload's canonical bytes.
    pub signature: Ed25519Signature,
}

impl Proof {
    /// Sign canonical bytes with `keys`, stamped with the current time.
    pub fn sign(keys: &Ed25519KeyPair, data: &CanonicalBytes) -> Self {
        Self::sign_at(keys, data, Timestamp::now())
    }

    /// Sign canonical bytes with an explicit creation time.
    pub fn sign_at(keys: &Ed25519KeyPair, data: &CanonicalBytes, created: Timestamp) -> Self {
        Self {
            proof_type: ProofType::Ed25519Signature2018,
            created,
            creator: keys.public_key(),
            signature: keys.sign(data),
        }
    }

    /// Check the signature against `data` using the recorded `creator` key.
    ///
    /// Returns `false` on any mismatch; never errors.
    pub fn verify(&self, data: &CanonicalBytes) -> bool {
        self.verify_with_key(data, &self.creator)
    }

    /// Check the signature against `data` using an externally known key.
    pub fn verify_with_key(&self, data: &CanonicalBytes, key: &Ed25519PublicKey) -> bool {
        match self.proof_type {
            ProofType::Ed25519Signature2018 => ed25519::verify(data, &self.signature, key),
        }
    }
}
