//! # Verify Subcommand
//!
//! Reads a presentation JSON document and runs the three-stage check.
//!
//! The core verifier is stateless. When the caller still holds the
//! challenge it issued, `--expect-nonce` compares it against the
//! presentation's nonce after the signatures pass, which is how a stale or
//! replayed presentation is caught.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use vcp_core::hex;
use vcp_vc::{Presentation, Verifier};

/// Arguments for `vcp verify`.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Presentation JSON file.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Hex-encoded challenge the presentation must answer.
    #[arg(long, value_name = "HEX")]
    pub expect_nonce: Option<String>,
}

/// Execute `vcp verify`, printing to stdout.
pub fn run_verify(args: &VerifyArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    run_verify_to(args, &mut stdout.lock())
}

/// Execute `vcp verify`, printing to `out`. Returns the process exit code.
pub fn run_verify_to<W: Write>(args: &VerifyArgs, out: &mut W) -> Result<u8> {
    let expected = args
        .expect_nonce
        .as_deref()
        .map(hex::decode)
        .transpose()
        .context("--expect-nonce is not valid hex")?;

    let raw = std::fs::read(&args.file)
        .with_context(|| format!("failed to read {}", args.file.display()))?;
    let presentation: Presentation = serde_json::from_slice(&raw)
        .with_context(|| format!("{} is not a presentation document", args.file.display()))?;
    tracing::debug!(digest = %presentation.digest()?, "loaded presentation");

    match Verifier::new().verify_presentation(&presentation) {
        Ok(()) => {}
        Err(e) if e.is_rejection() => {
            writeln!(out, "FAIL: {e}")?;
            return Ok(1);
        }
        Err(e) => return Err(e).context("verification could not run"),
    }

    if let Some(expected) = expected {
        if presentation.nonce().as_bytes() != expected.as_slice() {
            tracing::warn!(
                got = %presentation.nonce(),
                expected = %hex::encode(&expected),
                "presentation answers a different challenge"
            );
            writeln!(out, "FAIL: presentation nonce does not match the expected challenge")?;
            return Ok(1);
        }
    }

    writeln!(out, "OK: presentation verified")?;
    writeln!(out, "  Subject: {}", presentation.prover())?;
    writeln!(out, "  Issuer:  {}", presentation.credential().issuer_key())?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcp_vc::{Claim, GraduationClaim, Issuer, Subject};

    fn write_presentation(dir: &std::path::Path) -> (PathBuf, Presentation) {
        let issuer = Issuer::new("urn:u", "U").unwrap();
        let subject = Subject::new().unwrap();
        let claim = Claim::from(GraduationClaim::new(24, "Oxford", "BSc"));
        let cred = issuer.sign_credential(&claim, &subject.id()).unwrap();
        let nonce = Verifier::new().make_nonce().unwrap();
        let p = subject.sign_presentation(&cred, &nonce).unwrap();
        let path = dir.join("presentation.json");
        std::fs::write(&path, serde_json::to_vec_pretty(&p).unwrap()).unwrap();
        (path, p)
    }

    fn run(args: &VerifyArgs) -> (u8, String) {
        let mut buf = Vec::new();
        let code = run_verify_to(args, &mut buf).unwrap();
        (code, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn valid_presentation_passes() {
        let dir = tempfile::tempdir().unwrap();
        let (file, p) = write_presentation(dir.path());
        let (code, text) = run(&VerifyArgs {
            file,
            expect_nonce: Some(p.nonce().to_hex()),
        });
        assert_eq!(code, 0);
        assert!(text.starts_with("OK: presentation verified"));
        assert!(text.contains(&p.prover().to_hex()));
    }

    #[test]
    fn wrong_challenge_fails() {
        let dir = tempfile::tempdir().unwrap();
        let (file, _) = write_presentation(dir.path());
        let (code, text) = run(&VerifyArgs {
            file,
            expect_nonce: Some("00".repeat(12)),
        });
        assert_eq!(code, 1);
        assert!(text.contains("does not match the expected challenge"));
    }

    #[test]
    fn tampered_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let (file, _) = write_presentation(dir.path());
        let mut doc: serde_json::Value =
            serde_json::from_slice(&std::fs::read(&file).unwrap()).unwrap();
        doc["credential"]["credentialSubject"]["claim"]["degree"] = "PhD".into();
        std::fs::write(&file, serde_json::to_vec(&doc).unwrap()).unwrap();

        let (code, text) = run(&VerifyArgs {
            file,
            expect_nonce: None,
        });
        assert_eq!(code, 1);
        assert_eq!(text.trim(), "FAIL: invalid credential signature");
    }

    #[test]
    fn not_a_presentation_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("junk.json");
        std::fs::write(&file, br#"{"hello": "world"}"#).unwrap();
        let args = VerifyArgs {
            file,
            expect_nonce: None,
        };
        assert!(run_verify_to(&args, &mut Vec::new()).is_err());
    }

    #[test]
    fn bad_expected_nonce_hex_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let (file, _) = write_presentation(dir.path());
        let args = VerifyArgs {
            file,
            expect_nonce: Some("xyz".into()),
        };
        let err = run_verify_to(&args, &mut Vec::new()).unwrap_err();
        assert!(format!("{err:#}").contains("--expect-nonce"));
    }
}
