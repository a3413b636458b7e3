//! # Demo Subcommand
//!
//! Runs the whole exchange in one process:
//!
//! 1. create the issuer, the subject and the verifier;
//! 2. the issuer signs the configured claim about the subject;
//! 3. the verifier issues a challenge, the subject answers it with a
//!    presentation, and the verifier checks the presentation.
//!
//! Each document is printed as it is produced. With `--out`, the credential
//! and presentation are also written as JSON files that `vcp verify` reads.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use vcp_vc::{Claim, Credential, Issuer, Presentation, Subject, Verifier};

use crate::config::DemoConfig;
use crate::output::nice_print;

/// Arguments for `vcp demo`.
#[derive(Args, Debug, Default)]
pub struct DemoArgs {
    /// YAML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the issuer URI.
    #[arg(long)]
    pub issuer_id: Option<String>,

    /// Override the issuer display name.
    #[arg(long)]
    pub issuer_name: Option<String>,

    /// Override the challenge length in bytes (minimum 12).
    #[arg(long)]
    pub nonce_len: Option<usize>,

    /// Directory to write `credential.json` and `presentation.json` into.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Do not print documents; only report the verification result.
    #[arg(long, short)]
    pub quiet: bool,
}

/// Execute `vcp demo`, printing to stdout.
pub fn run_demo(args: &DemoArgs) -> Result<u8> {
    let stdout = std::io::stdout();
    run_demo_to(args, &mut stdout.lock())
}

/// Execute `vcp demo`, printing to `out`. Returns the process exit code.
pub fn run_demo_to<W: Write>(args: &DemoArgs, out: &mut W) -> Result<u8> {
    let mut config = DemoConfig::load(args.config.as_deref())?;
    if let Some(id) = &args.issuer_id {
        config.issuer.id.clone_from(id);
    }
    if let Some(name) = &args.issuer_name {
        config.issuer.name.clone_from(name);
    }
    if let Some(len) = args.nonce_len {
        config.nonce_len = len;
    }

    // Actors.
    let context = config.document_context();
    let issuer = Issuer::with_context(&config.issuer.id, &config.issuer.name, context.clone())
        .context("failed to create issuer")?;
    let subject = Subject::with_context(context).context("failed to create subject")?;
    let verifier = Verifier::with_nonce_len(config.nonce_len).context("invalid verifier config")?;
    tracing::info!(
        issuer = %issuer.id(),
        issuer_key = %issuer.public_key(),
        subject = %subject.id(),
        "actors created"
    );

    // Issuance.
    let claim = Claim::from(config.claim.clone());
    show(out, args.quiet, "Claim", &claim)?;
    let credential = issuer
        .sign_credential(&claim, &subject.id())
        .context("issuer couldn't sign credential")?;
    tracing::info!(digest = %credential.digest()?, "credential issued");
    show(out, args.quiet, "Credential", &credential)?;

    // Presentation.
    let nonce = verifier.make_nonce().context("failed to create challenge")?;
    let presentation = subject
        .sign_presentation(&credential, &nonce)
        .context("subject couldn't sign presentation")?;
    tracing::info!(digest = %presentation.digest()?, nonce = %nonce, "presentation signed");
    show(out, args.quiet, "Presentation", &presentation)?;

    if let Some(dir) = &args.out {
        write_artifacts(dir, &credential, &presentation)?;
    }

    // Verification.
    match verifier.verify_presentation(&presentation) {
        Ok(()) => {
            writeln!(out, "\n!!! Verification succeeded !!!")?;
            Ok(0)
        }
        Err(e) if e.is_rejection() => {
            writeln!(out, "\nVerification failed: {e}")?;
            Ok(1)
        }
        Err(e) => Err(e).context("verification could not run"),
    }
}

fn show<W: Write, T: Serialize>(out: &mut W, quiet: bool, name: &str, value: &T) -> Result<()> {
    if quiet {
        return Ok(());
    }
    nice_print(out, name, value)
}

fn write_artifacts(dir: &Path, credential: &Credential, presentation: &Presentation) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))?;
    for (file, body) in [
        ("credential.json", serde_json::to_vec_pretty(credential)?),
        ("presentation.json", serde_json::to_vec_pretty(presentation)?),
    ] {
        let path = dir.join(file);
        std::fs::write(&path, body)
            .with_context(|| format!("failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "wrote document");
    }
    Ok(())
}
