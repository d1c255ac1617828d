//! Password hashing, verification and placeholder credentials.
//!
//! Real passwords are stored as Argon2id PHC strings. Placeholders are
//! 64 hex characters of randomness: they never parse as a PHC string,
//! so no password can ever verify against them.

use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use rand::Rng;
use rlr_core::error::RlrError;
use rlr_core::models::service_account::CredentialState;

use crate::error::AuthError;

/// Prefix every Argon2 PHC string starts with.
pub const PHC_MARKER: &str = "$argon2";

fn peppered<'a>(password: &'a str, pepper: Option<&str>, buf: &'a mut String) -> &'a [u8] {
    match pepper {
        Some(p) => {
            *buf = format!("{p}{password}");
            buf.as_bytes()
        }
        None => password.as_bytes(),
    }
}

/// Hash a password with Argon2id using OWASP-recommended parameters
/// (memory: 19 MiB, iterations: 2, parallelism: 1).
///
/// If a pepper is provided, it is prepended to the password before
/// hashing. The salt is randomly generated for each call.
pub fn hash_password(password: &str, pepper: Option<&str>) -> Result<String, AuthError> {
    let params = argon2::Params::new(19456, 2, 1, None)
        .map_err(|e| RlrError::Crypto(format!("argon2 params error: {e}")))?;
    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);

    let mut buf = String::new();
    let input = peppered(password, pepper, &mut buf);

    let salt = SaltString::generate(&mut argon2::password_hash::rand_core::OsRng);
    let hash = argon2
        .hash_password(input, &salt)
        .map_err(|e| RlrError::Crypto(format!("password hash error: {e}")))?;

    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored credential.
///
/// Returns `Ok(false)` on mismatch and for placeholder credentials.
/// Fails only if a stored PHC string is malformed.
pub fn verify_password(
    password: &str,
    hash: &str,
    pepper: Option<&str>,
) -> Result<bool, AuthError> {
    if credential_state(hash) == CredentialState::Placeholder {
        return Ok(false);
    }

    let parsed_hash = argon2::PasswordHash::new(hash)
        .map_err(|e| RlrError::Crypto(format!("invalid hash format: {e}")))?;

    let mut buf = String::new();
    let input = peppered(password, pepper, &mut buf);

    match Argon2::default().verify_password(input, &parsed_hash) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(RlrError::Crypto(format!("verify error: {e}")).into()),
    }
}

/// Generate a fresh placeholder credential (32 random bytes, hex).
pub fn generate_placeholder() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rng.random();
    hex::encode(bytes)
}

/// Classify a stored credential by its shape.
pub fn credential_state(password_hash: &str) -> CredentialState {
    if password_hash.starts_with(PHC_MARKER) {
        CredentialState::Claimed
    } else {
        CredentialState::Placeholder
    }
}

/// Enforce the minimum password length, counted in characters.
pub fn check_length(password: &str, min_length: usize) -> Result<(), AuthError> {
    if password.chars().count() < min_length {
        return Err(AuthError::PasswordTooShort { min_length });
    }
    Ok(())
}
