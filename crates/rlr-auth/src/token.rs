//! Setup token generation and comparison.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use subtle::ConstantTimeEq;

/// Source of setup tokens.
pub trait TokenGenerator: Send + Sync {
    /// Produce a new opaque, unguessable token.
    fn generate(&self) -> String;
}

/// Default generator backed by the thread-local CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTokenGenerator;

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&self) -> String {
        generate_setup_token()
    }
}

/// Generate a cryptographically random setup token
/// (32 bytes → base64url-encoded, no padding).
pub fn generate_setup_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 32] = rand::Rng::random(&mut rng);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Compare a supplied token with the stored one in constant time.
///
/// An empty stored token matches nothing, including an empty supplied
/// token. Only the lengths may leak through timing.
pub fn tokens_match(stored: &str, supplied: &str) -> bool {
    if stored.is_empty() {
        return false;
    }
    bool::from(stored.as_bytes().ct_eq(supplied.as_bytes()))
}
