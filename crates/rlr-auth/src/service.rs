//! Bootstrap service: setup token issuance, administrator reset and
//! password claim for the API service account.
//!
//! The pair (setup token, credential) moves through these states:
//!
//! | State         | Token | Credential  |
//! |---------------|-------|-------------|
//! | Uninitialized | none  | placeholder |
//! | Pending       | live  | placeholder |
//! | Claimed       | none  | real hash   |
//! | Reset-Pending | live  | placeholder |
//!
//! [`on_activate`](BootstrapService::on_activate) moves Uninitialized to
//! Pending, [`reset_password`](BootstrapService::reset_password) moves
//! Claimed or Pending to Reset-Pending, and
//! [`claim_password`](BootstrapService::claim_password) moves either
//! pending state to Claimed.

use rlr_core::error::RlrError;
use rlr_core::models::service_account::{API_USER_EMAIL, CredentialState, ServiceAccount};
use rlr_core::repository::{ModuleSettingRepository, ServiceAccountRepository};
use tracing::{debug, error, info};

use crate::config::AuthConfig;
use crate::credential::CredentialTracker;
use crate::error::AuthError;
use crate::password;
use crate::store::SetupTokenStore;
use crate::token::{self, RandomTokenGenerator, TokenGenerator};

/// Bootstrap protocol controller.
///
/// Generic over repository implementations so that the protocol has
/// no dependency on the database crate.
pub struct BootstrapService<S, A, G = RandomTokenGenerator>
where
    S: ModuleSettingRepository,
    A: ServiceAccountRepository,
    G: TokenGenerator,
{
    tokens: SetupTokenStore<S>,
    accounts: A,
    generator: G,
    config: AuthConfig,
}

impl<S, A> BootstrapService<S, A>
where
    S: ModuleSettingRepository,
    A: ServiceAccountRepository,
{
    pub fn new(settings: S, accounts: A, config: AuthConfig) -> Self {
        Self::with_generator(settings, accounts, RandomTokenGenerator, config)
    }
}

impl<S, A, G> BootstrapService<S, A, G>
where
    S: ModuleSettingRepository,
    A: ServiceAccountRepository,
    G: TokenGenerator,
{
    pub fn with_generator(settings: S, accounts: A, generator: G, config: AuthConfig) -> Self {
        Self {
            tokens: SetupTokenStore::new(settings),
            accounts,
            generator,
            config,
        }
    }

    /// Module lifecycle hook: issue a setup token unless one is pending.
    ///
    /// Never fails. A token that was already handed to the operator is
    /// kept, so repeated activation does not invalidate it.
    pub async fn on_activate(&self) {
        if !self.tokens.get().await.is_empty() {
            debug!("Setup token already pending, keeping it");
            return;
        }

        let token = self.generator.generate();
        match self.tokens.set(token).await {
            Ok(()) => info!("Issued initial setup token"),
            Err(e) => error!(error = %e, "Failed to persist initial setup token"),
        }
    }

    /// Revoke the service account's password and issue a new setup
    /// token, superseding any pending one.
    ///
    /// Safe to repeat: every call writes a fresh placeholder and returns
    /// a fresh token.
    pub async fn reset_password(&self) -> Result<String, AuthError> {
        let account = self.load_api_user().await?;

        self.accounts
            .update_password_hash(account.id, password::generate_placeholder())
            .await?;

        let token = self.generator.generate();
        self.tokens.set(token.clone()).await?;

        info!(account_id = %account.id, "API user password reset, new setup token issued");
        Ok(token)
    }

    /// Exchange a valid setup token for a new password.
    ///
    /// Checks run in a fixed order: token, password length, credential
    /// state. The token is cleared before the password is written, so
    /// it is consumed even if a concurrent claim with the same token is
    /// still in flight.
    pub async fn claim_password(&self, token: &str, new_password: &str) -> Result<bool, AuthError> {
        let stored = self.tokens.get().await;
        if !token::tokens_match(&stored, token) {
            return Err(AuthError::InvalidToken);
        }

        password::check_length(new_password, self.config.min_password_length)?;

        if !CredentialTracker::new(&self.accounts)
            .is_placeholder(API_USER_EMAIL)
            .await
        {
            return Err(AuthError::PasswordAlreadySet);
        }

        self.tokens.clear().await?;

        let account = self.load_api_user().await?;
        let hash = password::hash_password(new_password, self.config.pepper.as_deref())?;
        self.accounts.update_password_hash(account.id, hash).await?;

        info!(account_id = %account.id, "API user password claimed");
        Ok(true)
    }

    /// The pending setup token, if any.
    pub async fn pending_token(&self) -> Option<String> {
        Some(self.tokens.get().await).filter(|t| !t.is_empty())
    }

    /// Credential state of the service account.
    pub async fn credential_state(&self) -> CredentialState {
        CredentialTracker::new(&self.accounts)
            .state(API_USER_EMAIL)
            .await
    }

    async fn load_api_user(&self) -> Result<ServiceAccount, AuthError> {
        match self.accounts.get_by_username(API_USER_EMAIL).await {
            Ok(account) => Ok(account),
            Err(RlrError::NotFound { .. }) => Err(AuthError::UserNotFound),
            Err(e) => Err(e.into()),
        }
    }
}
