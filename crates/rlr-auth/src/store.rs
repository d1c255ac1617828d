//! Durable slot for the pending setup token.

use rlr_core::error::RlrResult;
use rlr_core::models::module::{REMOTE_MODULE_ID, SETUP_TOKEN_SETTING};
use rlr_core::repository::ModuleSettingRepository;
use tracing::warn;

/// Reads and writes the setup token through the module settings of
/// the remote module. Nothing is cached.
pub struct SetupTokenStore<S: ModuleSettingRepository> {
    settings: S,
}

impl<S: ModuleSettingRepository> SetupTokenStore<S> {
    pub fn new(settings: S) -> Self {
        Self { settings }
    }

    /// Current token, or an empty string if none is pending.
    ///
    /// Read failures are reported as "no token" so callers cannot tell
    /// an unreadable store from one that never held a token.
    pub async fn get(&self) -> String {
        match self
            .settings
            .get_string(REMOTE_MODULE_ID, SETUP_TOKEN_SETTING)
            .await
        {
            Ok(token) => token,
            Err(e) if e.is_not_found() => String::new(),
            Err(e) => {
                warn!(error = %e, "Setup token unreadable, treating as absent");
                String::new()
            }
        }
    }

    /// Overwrite the stored token.
    pub async fn set(&self, token: String) -> RlrResult<()> {
        self.settings
            .save_string(REMOTE_MODULE_ID, SETUP_TOKEN_SETTING, token)
            .await
    }

    /// Invalidate any pending token.
    pub async fn clear(&self) -> RlrResult<()> {
        self.set(String::new()).await
    }
}
