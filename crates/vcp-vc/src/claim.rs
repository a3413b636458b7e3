//! # Claims
//!
//! The facts an issuer attests about a subject. Claim kinds form a closed
//! set; each variant carries its own semantic type tag, so the tag is a pure
//! function of the claim's shape.
//!
//! How issuer and subject agree on the content of a claim is outside this
//! crate. Once embedded in a credential a claim is never modified.

use serde::{Deserialize, Serialize};

/// A claim about a subject.
///
/// Serialized without an enum wrapper: the variant's fields appear directly
/// under `credentialSubject.claim`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Claim {
    /// A completed university degree.
    Graduation(GraduationClaim),
}

impl Claim {
    /// The semantic type tag contributed to the credential `type` list.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Graduation(_) => "GraduationCredential",
        }
    }
}

/// Graduation from a university.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GraduationClaim {
    /// Age of the graduate in years.
    pub age: u32,
    /// Awarding institution.
    pub university_name: String,
    /// Degree awarded.
    pub degree: String,
}

impl GraduationClaim {
    /// Build a graduation claim.
    pub fn new(age: u32, university_name: impl Into<String>, degree: impl Into<String>) -> Self {
        Self {
            age,
            university_name: university_name.into(),
            degree: degree.into(),
        }
    }
}

impl From<GraduationClaim> for Claim {
    fn from(claim: GraduationClaim) -> Self {
        Self::Graduation(claim)
    }
}
