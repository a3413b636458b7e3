//! # Credentials
//!
//! A credential is an issuer-signed statement binding a [`Claim`] to a
//! subject identity. It is modelled as two explicit parts: the
//! [`UnsignedCredential`] payload and the issuer's [`Proof`] over the
//! payload's canonical bytes.
//!
//! On the wire the payload fields sit next to `proof` in one JSON object:
//!
//! ```json
//! {
//!   "context": ["https://www.w3.org/2018/credentials/v1"],
//!   "type": ["GraduationCredential", "VerifiableCredential"],
//!   "issuer": {"id": "...", "name": "..."},
//!   "issuanceDate": "2026-01-15T12:00:00Z",
//!   "credentialSubject": {"id": "<hex public key>", "claim": {...}},
//!   "proof": {"type": "Ed25519Signature2018", "created": "...", "creator": "...", "signature": "..."}
//! }
//! ```

use serde::{Deserialize, Serialize};

use vcp_core::{sha256_digest, CanonicalBytes, ContentDigest, EncodingError, Timestamp};
use vcp_crypto::Ed25519PublicKey;

use crate::claim::Claim;
use crate::proof::Proof;

/// The issuer as recorded inside a credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IssuerRef {
    /// Issuer URI.
    pub id: String,
    /// Human-readable issuer name.
    pub name: String,
}

/// Who the credential is about, and what is claimed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CredentialSubject {
    /// The subject's public key bytes. This is the subject's identity.
    pub id: Ed25519PublicKey,
    /// The attested claim.
    pub claim: Claim,
}

/// The signed-over part of a credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnsignedCredential {
    /// Context URIs.
    pub context: Vec<String>,
    /// Claim type tag followed by `VerifiableCredential`.
    #[serde(rename = "type")]
    pub types: Vec<String>,
    /// Issuing party.
    pub issuer: IssuerRef,
    /// Issuance time (UTC, seconds).
    pub issuance_date: Timestamp,
    /// Subject identity and claim.
    pub credential_subject: CredentialSubject,
}

impl UnsignedCredential {
    /// The canonical bytes the issuer signs and the verifier re-derives.
    pub fn signing_input(&self) -> Result<CanonicalBytes, EncodingError> {
        CanonicalBytes::new(self)
    }
}

/// An issued credential: payload plus issuer proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// The signed-over fields.
    #[serde(flatten)]
    pub unsigned_payload: UnsignedCredential,
    /// The issuer's proof over `unsigned_payload`.
    pub proof: Proof,
}

impl Credential {
    /// Canonical bytes of the unsigned payload, for logging or transport.
    pub fn export(&self) -> Result<CanonicalBytes, EncodingError> {
        self.unsigned_payload.signing_input()
    }

    /// SHA-256 of the exported payload.
    pub fn digest(&self) -> Result<ContentDigest, EncodingError> {
        Ok(sha256_digest(&self.export()?))
    }

    /// The subject this credential was issued to.
    pub fn subject_id(&self) -> &Ed25519PublicKey {
        &self.unsigned_payload.credential_subject.id
    }

    /// The claim carried by this credential.
    pub fn claim(&self) -> &Claim {
        &self.unsigned_payload.credential_subject.claim
    }

    /// The key recorded as the issuer's signer.
    pub fn issuer_key(&self) -> &Ed25519PublicKey {
        &self.proof.creator
    }

    /// Check the issuer proof against the payload using the recorded key.
    ///
    /// `Ok(false)` for a bad signature; `Err` only if the payload cannot be
    /// encoded.
    pub fn verify_signature(&self) -> Result<bool, EncodingError> {
        Ok(self.proof.verify(&self.export()?))
    }

    /// Check the issuer proof against an independently known issuer key.
    pub fn verify_signature_with_key(
        &self,
        issuer_key: &Ed25519PublicKey,
    ) -> Result<bool, EncodingError> {
        Ok(self.proof.verify_with_key(&self.export()?, issuer_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::GraduationClaim;
    use crate::context::{credential_types, DocumentContext};
    use vcp_crypto::Ed25519KeyPair;

    fn sample(issuer: &Ed25519KeyPair, subject: Ed25519PublicKey) -> Credential {
        let claim = Claim::from(GraduationClaim::new(24, "Oxford", "BSc"));
        let unsigned_payload = UnsignedCredential {
            context: DocumentContext::default().to_vec(),
            types: credential_types(&claim),
            issuer: IssuerRef {
                id: "https://u.example/issuers/1".into(),
                name: "U".into(),
            },
            issuance_date: Timestamp::parse("2026-01-15T12:00:00Z").unwrap(),
            credential_subject: CredentialSubject {
                id: subject,
                claim,
            },
        };
        let proof = Proof::sign(issuer, &unsigned_payload.signing_input().unwrap());
        Credential {
            unsigned_payload,
            proof,
        }
    }

    #[test]
    fn export_excludes_proof() {
        let issuer = Ed25519KeyPair::from_seed(&[1u8; 32]);
        let cred = sample(&issuer, Ed25519PublicKey([9u8; 32]));
        let exported: serde_json::Value =
            serde_json::from_slice(cred.export().unwrap().as_bytes()).unwrap();
        assert!(exported.get("proof").is_none());
        assert_eq!(exported["issuanceDate"], "2026-01-15T12:00:00Z");
        assert_eq!(exported["credentialSubject"]["claim"]["age"], 24);
    }

    #[test]
    fn wire_format_flattens_payload() {
        let issuer = Ed25519KeyPair::from_seed(&[1u8; 32]);
        let cred = sample(&issuer, Ed25519PublicKey([9u8; 32]));
        let val = serde_json::to_value(&cred).unwrap();
        assert!(val.get("unsigned_payload").is_none());
        assert_eq!(val["type"][1], "VerifiableCredential");
        assert_eq!(val["credentialSubject"]["id"], "09".repeat(32));
        assert_eq!(val["proof"]["creator"], issuer.public_key().to_hex());
    }

    #[test]
    fn json_transport_preserves_signature() {
        let issuer = Ed25519KeyPair::from_seed(&[1u8; 32]);
        let cred = sample(&issuer, Ed25519PublicKey([9u8; 32]));
        let json = serde_json::to_string_pretty(&cred).unwrap();
        let back: Credential = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cred);
        assert!(back.verify_signature().unwrap());
    }

    #[test]
    fn verify_signature_with_wrong_key() {
        let issuer = Ed25519KeyPair::from_seed(&[1u8; 32]);
        let impostor = Ed25519KeyPair::from_seed(&[2u8; 32]);
        let cred = sample(&issuer, Ed25519PublicKey([9u8; 32]));
        assert!(cred
            .verify_signature_with_key(&issuer.public_key())
            .unwrap());
        assert!(!cred
            .verify_signature_with_key(&impostor.public_key())
            .unwrap());
    }

    #[test]
    fn tampered_issuer_name_breaks_signature() {
        let issuer = Ed25519KeyPair::from_seed(&[1u8; 32]);
        let mut cred = sample(&issuer, Ed25519PublicKey([9u8; 32]));
        cred.unsigned_payload.issuer.name = "Not U".into();
        assert!(!cred.verify_signature().unwrap());
    }

    #[test]
    fn digest_tracks_payload() {
        let issuer = Ed25519KeyPair::from_seed(&[1u8; 32]);
        let cred = sample(&issuer, Ed25519PublicKey([9u8; 32]));
        let mut other = cred.clone();
        other.unsigned_payload.context.push("https://extra.example".into());
        assert_eq!(cred.digest().unwrap(), cred.digest().unwrap());
        assert_ne!(cred.digest().unwrap(), other.digest().unwrap());
    }
}
