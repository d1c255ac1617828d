//! Bootstrap protocol configuration.

/// Configuration for the credential bootstrap protocol.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Minimum password length, counted in characters (default: 8).
    pub min_password_length: usize,
    /// Optional pepper prepended to passwords before Argon2id hashing
    /// and verification.
    pub pepper: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            min_password_length: 8,
            pepper: None,
        }
    }
}
