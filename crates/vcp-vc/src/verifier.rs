//! # Verifier Role
//!
//! Issues challenge nonces and checks presentations.
//!
//! ## Verification Order
//!
//! [`Verifier::verify_presentation`] runs three checks and stops at the
//! first failure:
//!
//! 1. **Binding**: the presentation signer is the credential subject.
//! 2. **Credential signature**: the issuer proof covers the credential
//!    payload as presented.
//! 3. **Presentation signature**: the subject proof covers the credential
//!    and nonce as received.
//!
//! All three must hold for acceptance. The order only decides which error
//! is reported when several would fail.
//!
//! The verifier keeps no record of the nonces it has issued. Matching a
//! presentation's nonce to an outstanding challenge, and refusing reuse, is
//! the caller's job.

use rand::{CryptoRng, RngCore};

use vcp_crypto::{nonce, Nonce, DEFAULT_NONCE_LEN};

use crate::error::VcError;
use crate::presentation::Presentation;

/// A stateless presentation verifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verifier {
    nonce_len: usize,
}

impl Default for Verifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Verifier {
    /// A verifier issuing [`DEFAULT_NONCE_LEN`]-byte nonces.
    pub fn new() -> Self {
        Self {
            nonce_len: DEFAULT_NONCE_LEN,
        }
    }

    /// A verifier issuing nonces of `nonce_len` bytes.
    ///
    /// # Errors
    ///
    /// `VcError::NonceTooShort` below [`vcp_crypto::MIN_NONCE_LEN`].
    pub fn with_nonce_len(nonce_len: usize) -> Result<Self, VcError> {
        nonce::check_len(nonce_len)?;
        Ok(Self { nonce_len })
    }

    /// Configured nonce length in bytes.
    pub fn nonce_len(&self) -> usize {
        self.nonce_len
    }

    /// Generate a fresh challenge from the OS CSPRNG.
    ///
    /// # Errors
    ///
    /// `VcError::RandomSource` if the random source fails. Never retried.
    pub fn make_nonce(&self) -> Result<Nonce, VcError> {
        self.make_nonce_from(&mut rand::rngs::OsRng)
    }

    /// Generate a fresh challenge from the given cryptographic RNG.
    pub fn make_nonce_from<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Result<Nonce, VcError> {
        Ok(Nonce::generate_from(rng, self.nonce_len)?)
    }

    /// Check a presentation. `Ok(())` means accepted.
    ///
    /// # Errors
    ///
    /// - `VcError::BindingMismatch`: signer is not the credential subject.
    /// - `VcError::InvalidCredentialSignature`: issuer proof does not verify.
    /// - `VcError::InvalidPresentationSignature`: subject proof does not verify.
    /// - `VcError::Encoding`: a payload could not be canonicalized.
    pub fn verify_presentation(&self, presentation: &Presentation) -> Result<(), VcError> {
        let result = check(presentation);
        match &result {
            Ok(()) => tracing::debug!(
                prover = %presentation.prover(),
                nonce = %presentation.nonce(),
                "presentation accepted"
            ),
            Err(e) if e.is_rejection() => tracing::warn!(
                prover = %presentation.prover(),
                nonce = %presentation.nonce(),
                "presentation rejected: {e}"
            ),
            Err(e) => tracing::error!("presentation verification failed: {e}"),
        }
        result
    }
}

fn check(presentation: &Presentation) -> Result<(), VcError> {
    let credential = presentation.credential();

    let subject = credential.subject_id();
    let prover = presentation.prover();
    if subject != prover {
        return Err(VcError::BindingMismatch {
            subject: *subject,
            prover: *prover,
        });
    }

    if !credential.verify_signature()? {
        return Err(VcError::InvalidCredentialSignature);
    }

    let signed = presentation.export()?;
    if !presentation.proof.verify(&signed) {
        return Err(VcError::InvalidPresentationSignature);
    }

    Ok(())
}
