//! # vcp-cli — Command-Line Driver for the Credential Exchange
//!
//! Provides the `vcp` binary, an external caller of the `vcp-vc` core.
//!
//! ## Subcommands
//!
//! - `vcp demo`: create an issuer, a subject and a verifier; issue the
//!   configured claim, answer a fresh challenge, verify the result, and
//!   print every document along the way.
//! - `vcp verify`: verify a presentation JSON document from disk.
//!
//! ```bash
//! vcp demo --config demo.yaml --out ./artifacts
//! vcp verify ./artifacts/presentation.json
//! ```
//!
//! Documents go to stdout; logs go to stderr.

pub mod config;
pub mod demo;
pub mod output;
pub mod verify;
