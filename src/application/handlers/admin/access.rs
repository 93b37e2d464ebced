//! Administrative access gate.
//!
//! One static shared secret, compared in constant time. Absence of a
//! secret means "not yet attempted" and is reported distinctly from a
//! wrong secret so the surface can stay silent instead of showing an
//! error.

use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;
use thiserror::Error;

/// Admin gate failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AdminError {
    /// No secret was supplied with the request.
    #[error("Admin secret not provided")]
    SecretRequired,

    /// The supplied secret does not match.
    #[error("Admin secret is incorrect")]
    SecretInvalid,
}

/// Verifies a supplied admin secret against the configured one.
pub fn verify_secret(expected: &Secret<String>, provided: Option<&str>) -> Result<(), AdminError> {
    let provided = provided.ok_or(AdminError::SecretRequired)?;
    if provided.is_empty() {
        return Err(AdminError::SecretRequired);
    }

    let matches: bool = expected
        .expose_secret()
        .as_bytes()
        .ct_eq(provided.as_bytes())
        .into();

    if matches {
        Ok(())
    } else {
        tracing::warn!("admin access denied: wrong secret");
        Err(AdminError::SecretInvalid)
    }
}
