//! # Issuer Role
//!
//! Owns a key pair and signs claims about subjects into credentials.

use vcp_core::Timestamp;
use vcp_crypto::{Ed25519KeyPair, Ed25519PublicKey};

use crate::claim::Claim;
use crate::context::{credential_types, DocumentContext};
use crate::credential::{Credential, CredentialSubject, IssuerRef, UnsignedCredential};
use crate::error::VcError;
use crate::proof::Proof;

/// A credential issuer.
///
/// Immutable after construction; signing borrows `&self`, so one issuer can
/// serve concurrent callers.
#[derive(Debug)]
pub struct Issuer {
    keys: Ed25519KeyPair,
    id: String,
    name: String,
    context: DocumentContext,
}

impl Issuer {
    /// Create an issuer with a fresh key pair and the default context.
    ///
    /// # Errors
    ///
    /// `VcError::KeyGeneration` if the OS random source fails.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self, VcError> {
        Self::with_context(id, name, DocumentContext::default())
    }

    /// Create an issuer with a fresh key pair and explicit context URIs.
    pub fn with_context(
        id: impl Into<String>,
        name: impl Into<String>,
        context: DocumentContext,
    ) -> Result<Self, VcError> {
        let keys = Ed25519KeyPair::generate()?;
        Ok(Self::from_keypair(keys, id, name, context))
    }

    /// Create an issuer around an existing key pair.
    pub fn from_keypair(
        keys: Ed25519KeyPair,
        id: impl Into<String>,
        name: impl Into<String>,
        context: DocumentContext,
    ) -> Self {
        Self {
            keys,
            id: id.into(),
            name: name.into(),
            context,
        }
    }

    /// Issuer URI.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable issuer name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The key verifiers must trust for this issuer.
    pub fn public_key(&self) -> Ed25519PublicKey {
        self.keys.public_key()
    }

    /// The issuer reference embedded in credentials.
    pub fn reference(&self) -> IssuerRef {
        IssuerRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }

    /// Sign `claim` about the subject identified by `subject_id`.
    ///
    /// # Errors
    ///
    /// `VcError::Encoding` if the credential payload cannot be canonicalized.
    pub fn sign_credential(
        &self,
        claim: &Claim,
        subject_id: &Ed25519PublicKey,
    ) -> Result<Credential, VcError> {
        let unsigned_payload = UnsignedCredential {
            context: self.context.to_vec(),
            types: credential_types(claim),
            issuer: self.reference(),
            issuance_date: Timestamp::now(),
            credential_subject: CredentialSubject {
                id: *subject_id,
                claim: claim.clone(),
            },
        };

        let canonical = unsigned_payload.signing_input()?;
        let proof = Proof::sign(&self.keys, &canonical);

        tracing::debug!(
            issuer = %self.id,
            subject = %subject_id,
            claim_type = claim.type_tag(),
            bytes = canonical.len(),
            "issued credential"
        );

        Ok(Credential {
            unsigned_payload,
            proof,
        })
    }
}
