//! # vcp-vc — Verifiable Credentials and Presentations
//!
//! An [`Issuer`] attests a [`Claim`] about a subject by signing it into a
//! [`Credential`]. The [`Subject`] named by the credential later proves
//! possession by wrapping it, together with a verifier-issued [`Nonce`],
//! into a signed [`Presentation`]. The [`Verifier`] checks the identity
//! binding and both signatures.
//!
//! ```text
//! Issuer + Claim + subject id ──► Credential
//! Subject + Credential + Nonce ──► Presentation ──► Verifier ──► accept / reject
//! ```
//!
//! ## Security Invariants
//!
//! - Every signed document is split into an unsigned payload and a
//!   [`Proof`]. The proof signs the canonical bytes of the payload only.
//! - Signing and verification both go through
//!   [`CanonicalBytes`](vcp_core::CanonicalBytes); there is no second
//!   encoding path.
//! - A presentation verifies only if its signer is the credential subject,
//!   the issuer's signature covers the credential payload as presented, and
//!   the subject's signature covers the credential and the nonce.
//!
//! ## Trust Model
//!
//! The verifier checks the issuer signature against the key recorded in the
//! credential proof. Whether that key belongs to an issuer worth trusting is
//! decided outside this crate, as is tracking which nonces were handed out.

pub mod claim;
pub mod context;
pub mod credential;
pub mod error;
pub mod issuer;
pub mod presentation;
pub mod proof;
pub mod subject;
pub mod verifier;

pub use claim::{Claim, GraduationClaim};
pub use context::DocumentContext;
pub use credential::{Credential, CredentialSubject, IssuerRef, UnsignedCredential};
pub use error::VcError;
pub use issuer::Issuer;
pub use presentation::{Presentation, UnsignedPresentation};
pub use proof::{Proof, ProofType};
pub use subject::Subject;
pub use verifier::Verifier;

pub use vcp_crypto::{Ed25519PublicKey, Nonce, DEFAULT_NONCE_LEN, MIN_NONCE_LEN};
