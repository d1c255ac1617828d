//! API service account domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::permission::API_USER_GROUP;

/// Fixed account name the service account id is derived from.
pub const API_USER_ACCOUNT_NAME: &str = "oxsrequestlogger_api_user";

/// Login name (e-mail) of the service account.
pub const API_USER_EMAIL: &str = "requestlogger-api@oxid-esales.com";

/// Deterministic id of the service account.
///
/// Derived from [`API_USER_ACCOUNT_NAME`] so that provisioning the
/// account is idempotent across runs and machines.
pub fn api_user_id() -> Uuid {
    Uuid::new_v5(&Uuid::NAMESPACE_OID, API_USER_ACCOUNT_NAME.as_bytes())
}

/// Whether the stored credential is a real password hash.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CredentialState {
    /// Random placeholder; no login is possible.
    Placeholder,
    /// A password has been claimed with a setup token.
    Claimed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceAccount {
    pub id: Uuid,
    pub username: String,
    /// Argon2id PHC hash, or a placeholder that never verifies.
    pub password_hash: String,
    pub groups: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionServiceAccount {
    pub id: Uuid,
    pub username: String,
    /// Initial placeholder credential.
    pub placeholder: String,
    pub groups: Vec<String>,
}

impl ProvisionServiceAccount {
    /// The well-known API user with the given placeholder credential.
    pub fn api_user(placeholder: String) -> Self {
        Self {
            id: api_user_id(),
            username: API_USER_EMAIL.into(),
            placeholder,
            groups: vec![API_USER_GROUP.into()],
        }
    }
}
