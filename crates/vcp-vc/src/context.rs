//! # Document Context and Type Tags
//!
//! The JSON-LD context URIs stamped on issued documents are configuration,
//! passed into the Issuer and Subject constructors. Type tags are derived by
//! pure functions from the document being built.

use serde::{Deserialize, Serialize};

use crate::claim::Claim;

/// W3C Verifiable Credentials Data Model v1 context.
pub const W3C_CREDENTIALS_V1: &str = "https://www.w3.org/2018/credentials/v1";

/// Context URIs written into the `context` field of issued documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentContext(Vec<String>);

impl DocumentContext {
    /// Build a context from explicit URIs.
    pub fn new<I, S>(uris: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(uris.into_iter().map(Into::into).collect())
    }

    /// The context URIs, in order.
    pub fn uris(&self) -> &[String] {
        &self.0
    }

    /// Owned copy for embedding in a document.
    pub fn to_vec(&self) -> Vec<String> {
        self.0.clone()
    }
}

impl Default for DocumentContext {
    fn default() -> Self {
        Self(vec![W3C_CREDENTIALS_V1.to_string()])
    }
}

/// Type tags for a credential carrying `claim`: the claim's own tag
/// followed by `VerifiableCredential`.
pub fn credential_types(claim: &Claim) -> Vec<String> {
    vec![claim.type_tag().to_string(), "VerifiableCredential".to_string()]
}

/// Type tags for a presentation.
pub fn presentation_types() -> Vec<String> {
    vec!["VerifiablePresentation".to_string()]
}
