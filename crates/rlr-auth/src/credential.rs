//! Credential state of the API service account.

use rlr_core::models::service_account::CredentialState;
use rlr_core::repository::ServiceAccountRepository;
use tracing::warn;

use crate::password;

/// Read-only view on whether the service account still carries a
/// placeholder credential.
pub struct CredentialTracker<'a, A: ServiceAccountRepository> {
    accounts: &'a A,
}

impl<'a, A: ServiceAccountRepository> CredentialTracker<'a, A> {
    pub fn new(accounts: &'a A) -> Self {
        Self { accounts }
    }

    /// State of the account with the given login name.
    ///
    /// A missing or unreadable account reports
    /// [`CredentialState::Placeholder`]; whatever loads the account next
    /// fails explicitly.
    pub async fn state(&self, username: &str) -> CredentialState {
        match self.accounts.get_by_username(username).await {
            Ok(account) => password::credential_state(&account.password_hash),
            Err(e) if e.is_not_found() => CredentialState::Placeholder,
            Err(e) => {
                warn!(error = %e, "Service account unreadable, assuming placeholder credential");
                CredentialState::Placeholder
            }
        }
    }

    pub async fn is_placeholder(&self, username: &str) -> bool {
        self.state(username).await == CredentialState::Placeholder
    }
}
