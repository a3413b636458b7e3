//! # vcp-crypto — Cryptographic Primitives
//!
//! - **Ed25519** key pairs, signing over [`CanonicalBytes`](vcp_core::CanonicalBytes)
//!   and verification.
//! - **Nonces** drawn from the operating system CSPRNG for presentation
//!   challenges.
//!
//! ## Crate Policy
//!
//! - Depends only on `vcp-core` internally.
//! - Private key material never leaves [`Ed25519KeyPair`]: no `Serialize`,
//!   no accessor, redacted `Debug`.
//! - Every random draw is fallible and reported, never silently retried.
//! - No mocking of cryptographic operations in tests.

pub mod ed25519;
pub mod error;
pub mod nonce;

pub use ed25519::{Ed25519KeyPair, Ed25519PublicKey, Ed25519Signature};
pub use error::CryptoError;
pub use nonce::{Nonce, DEFAULT_NONCE_LEN, MIN_NONCE_LEN};
