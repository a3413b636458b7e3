//! # Presentations
//!
//! A presentation is the subject's signed wrapper around a credential and a
//! verifier-issued nonce. The subject's proof covers the whole credential
//! (including the issuer's proof) and the nonce, so neither can be swapped
//! after signing.

use serde::{Deserialize, Serialize};

use vcp_core::{sha256_digest, CanonicalBytes, ContentDigest, EncodingError};
use vcp_crypto::{Ed25519PublicKey, Nonce};

use crate::credential::Credential;
use crate::proof::Proof;

/// The signed-over part of a presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsignedPresentation {
    /// Context URIs.
    pub context: Vec<String>,
    /// Always `["VerifiablePresentation"]` for documents built here.
    #[serde(rename = "type")]
    pub types: Vec<String>,
    /// The credential being presented, including its issuer proof.
    pub credential: Credential,
    /// Challenge bytes from the verifier.
    pub nonce: Nonce,
}

impl UnsignedPresentation {
    /// The canonical bytes the subject signs and the verifier re-derives.
    pub fn signing_input(&self) -> Result<CanonicalBytes, EncodingError> {
        CanonicalBytes::new(self)
    }
}

/// A signed presentation, ready to hand to a verifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    /// The signed-over fields.
    #[serde(flatten)]
    pub unsigned_payload: UnsignedPresentation,
    /// The subject's proof over `unsigned_payload`.
    pub proof: Proof,
}

impl Presentation {
    /// Canonical bytes of the unsigned payload, for logging or transport.
    pub fn export(&self) -> Result<CanonicalBytes, EncodingError> {
        self.unsigned_payload.signing_input()
    }

    /// SHA-256 of the exported payload.
    pub fn digest(&self) -> Result<ContentDigest, EncodingError> {
        Ok(sha256_digest(&self.export()?))
    }

    /// The embedded credential.
    pub fn credential(&self) -> &Credential {
        &self.unsigned_payload.credential
    }

    /// The challenge this presentation answers.
    pub fn nonce(&self) -> &Nonce {
        &self.unsigned_payload.nonce
    }

    /// The key that signed this presentation.
    pub fn prover(&self) -> &Ed25519PublicKey {
        &self.proof.creator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::{Claim, GraduationClaim};
    use crate::context::{credential_types, presentation_types, DocumentContext};
    use crate::credential::{CredentialSubject, IssuerRef, UnsignedCredential};
    use vcp_core::Timestamp;
    use vcp_crypto::Ed25519KeyPair;

    fn presentation() -> (Presentation, Ed25519KeyPair) {
        let issuer = Ed25519KeyPair::from_seed(&[1u8; 32]);
        let holder = Ed25519KeyPair::from_seed(&[2u8; 32]);
        let claim = Claim::from(GraduationClaim::new(30, "Cambridge", "MSc"));
        let cred_payload = UnsignedCredential {
            context: DocumentContext::default().to_vec(),
            types: credential_types(&claim),
            issuer: IssuerRef {
                id: "urn:issuer".into(),
                name: "Issuer".into(),
            },
            issuance_date: Timestamp::parse("2026-02-01T09:00:00Z").unwrap(),
            credential_subject: CredentialSubject {
                id: holder.public_key(),
                claim,
            },
        };
        let credential = Credential {
            proof: Proof::sign(&issuer, &cred_payload.signing_input().unwrap()),
            unsigned_payload: cred_payload,
        };
        let unsigned_payload = UnsignedPresentation {
            context: DocumentContext::default().to_vec(),
            types: presentation_types(),
            credential,
            nonce: Nonce::from_bytes(vec![7u8; 12]),
        };
        let proof = Proof::sign(&holder, &unsigned_payload.signing_input().unwrap());
        (
            Presentation {
                unsigned_payload,
                proof,
            },
            holder,
        )
    }

    #[test]
    fn export_covers_nested_credential_proof() {
        let (p, _) = presentation();
        let exported: serde_json::Value =
            serde_json::from_slice(p.export().unwrap().as_bytes()).unwrap();
        assert!(exported.get("proof").is_none());
        assert!(exported["credential"]["proof"]["signature"].is_string());
        assert_eq!(exported["nonce"], "07".repeat(12));
    }

    #[test]
    fn accessors() {
        let (p, holder) = presentation();
        assert_eq!(p.prover(), &holder.public_key());
        assert_eq!(p.credential().subject_id(), &holder.public_key());
        assert_eq!(p.nonce().len(), 12);
    }

    #[test]
    fn json_transport_roundtrip() {
        let (p, _) = presentation();
        let json = serde_json::to_string(&p).unwrap();
        let back: Presentation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert_eq!(back.export().unwrap(), p.export().unwrap());
    }

    #[test]
    fn swapped_nonce_changes_digest() {
        let (p, _) = presentation();
        let mut q = p.clone();
        q.unsigned_payload.nonce.as_mut_bytes()[0] ^= 0xff;
        assert_ne!(p.digest().unwrap(), q.digest().unwrap());
    }
}
