//! # Demo Configuration
//!
//! `vcp demo` reads an optional YAML file describing the issuer, the claim
//! to issue, the document context and the challenge length. Every key is
//! optional; missing keys fall back to the built-in Oxford graduate example.
//!
//! ```yaml
//! issuer:
//!   id: https://oxford.com/issuers/1
//!   name: The Marvelous University of Oxford
//! claim:
//!   age: 24
//!   universityName: Oxford
//!   degree: Bachelor of Science
//! context:
//!   - https://www.w3.org/2018/credentials/v1
//! nonce_len: 12
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use vcp_vc::context::W3C_CREDENTIALS_V1;
use vcp_vc::{DocumentContext, GraduationClaim};

/// Identity of the demo issuer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IssuerConfig {
    /// Issuer URI.
    pub id: String,
    /// Issuer display name.
    pub name: String,
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            id: "https://oxford.com/issuers/1".to_string(),
            name: "The Marvelous University of Oxford".to_string(),
        }
    }
}

/// Full demo configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Who issues the credential.
    pub issuer: IssuerConfig,
    /// What is claimed about the subject.
    pub claim: GraduationClaim,
    /// Context URIs stamped on every document.
    pub context: Vec<String>,
    /// Challenge length in bytes.
    pub nonce_len: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            issuer: IssuerConfig::default(),
            claim: GraduationClaim::new(24, "Oxford", "Bachelor of Science"),
            context: vec![W3C_CREDENTIALS_V1.to_string()],
            nonce_len: vcp_vc::DEFAULT_NONCE_LEN,
        }
    }
}

impl DemoConfig {
    /// Load from a YAML file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded demo config");
        Ok(config)
    }

    /// The configured context as a library value.
    pub fn document_context(&self) -> DocumentContext {
        DocumentContext::new(self.context.iter().cloned())
    }
}
