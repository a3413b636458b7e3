//! # vcp-core — Foundational Types for the Credential Exchange
//!
//! Every signed document in the workspace (credentials, presentations) is
//! turned into bytes through this crate. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **`CanonicalBytes` newtype.** All signing and verification input flows
//!    through `CanonicalBytes::new()`. Signing and verifying therefore share a
//!    single encoder and cannot drift apart.
//!
//! 2. **UTC-only timestamps.** `Timestamp` is UTC with a `Z` suffix and
//!    seconds precision, so the same instant always encodes to the same bytes.
//!
//! 3. **Hex for binary fields.** Raw key, signature and nonce bytes travel as
//!    lowercase hex strings inside JSON documents.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `vcp-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod canonical;
pub mod digest;
pub mod error;
pub mod hex;
pub mod temporal;

pub use canonical::CanonicalBytes;
pub use digest::{sha256_digest, ContentDigest};
pub use error::{EncodingError, HexError, TimestampError};
pub use temporal::Timestamp;
