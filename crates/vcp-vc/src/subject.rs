//! # Subject Role
//!
//! The subject's public key is its identity. It holds credentials issued to
//! that identity and proves possession by signing presentations.

use vcp_crypto::{Ed25519KeyPair, Ed25519PublicKey, Nonce};

use crate::context::{presentation_types, DocumentContext};
use crate::credential::Credential;
use crate::error::VcError;
use crate::presentation::{Presentation, UnsignedPresentation};
use crate::proof::Proof;

/// A credential subject (holder).
#[derive(Debug)]
pub struct Subject {
    keys: Ed25519KeyPair,
    context: DocumentContext,
}

impl Subject {
    /// Create a subject with a fresh key pair and the default context.
    ///
    /// # Errors
    ///
    /// `VcError::KeyGeneration` if the OS random source fails.
    pub fn new() -> Result<Self, VcError> {
        Self::with_context(DocumentContext::default())
    }

    /// Create a subject with a fresh key pair and explicit context URIs.
    pub fn with_context(context: DocumentContext) -> Result<Self, VcError> {
        let keys = Ed25519KeyPair::generate()?;
        Ok(Self::from_keypair(keys, context))
    }

    /// Create a subject around an existing key pair.
    pub fn from_keypair(keys: Ed25519KeyPair, context: DocumentContext) -> Self {
        Self { keys, context }
    }

    /// The subject identity: its public key.
    pub fn id(&self) -> Ed25519PublicKey {
        self.keys.public_key()
    }

    /// Wrap `credential` and `nonce` into a signed presentation.
    ///
    /// The credential should have been issued to [`Subject::id`]; if it was
    /// not, the presentation is still produced but will fail the verifier's
    /// binding check.
    ///
    /// # Errors
    ///
    /// `VcError::Encoding` if the presentation payload cannot be
    /// canonicalized.
    pub fn sign_presentation(
        &self,
        credential: &Credential,
        nonce: &Nonce,
    ) -> Result<Presentation, VcError> {
        let me = self.id();
        if credential.subject_id() != &me {
            tracing::debug!(
                subject = %me,
                credential_subject = %credential.subject_id(),
                "presenting a credential issued to another identity"
            );
        }

        let unsigned_payload = UnsignedPresentation {
            context: self.context.to_vec(),
            types: presentation_types(),
            credential: credential.clone(),
            nonce: nonce.clone(),
        };

        let canonical = unsigned_payload.signing_input()?;
        let proof = Proof::sign(&self.keys, &canonical);

        tracing::debug!(subject = %me, nonce = %nonce, "signed presentation");

        Ok(Presentation {
            unsigned_payload,
            proof,
        })
    }
}
