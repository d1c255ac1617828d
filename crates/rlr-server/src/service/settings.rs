//! Request logger settings exposed over the API.
//!
//! Settings that were never saved read as their empty default. Every
//! setter returns the value read back from storage.

use rlr_core::error::RlrResult;
use rlr_core::models::module::REQUEST_LOGGER_MODULE_ID;
use rlr_core::models::setting::{
    self, LOG_ADMIN, LOG_FRONTEND, LOG_LEVEL, MANAGED_SETTINGS, REDACT, REDACT_ALL_VALUES,
    Setting, SettingType,
};
use rlr_core::repository::ModuleSettingRepository;
use tracing::info;

use crate::error::ServerError;

#[derive(Clone)]
pub struct SettingsService<R: ModuleSettingRepository> {
    repo: R,
}

fn or_default<T: Default>(result: RlrResult<T>) -> RlrResult<T> {
    match result {
        Err(e) if e.is_not_found() => Ok(T::default()),
        other => other,
    }
}

impl<R: ModuleSettingRepository> SettingsService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn setting_types(&self) -> Vec<SettingType> {
        MANAGED_SETTINGS
            .iter()
            .map(|(name, kind)| SettingType {
                name: (*name).to_string(),
                kind: *kind,
            })
            .collect()
    }

    pub async fn log_level(&self) -> RlrResult<Setting> {
        self.string(LOG_LEVEL).await
    }

    pub async fn set_log_level(&self, value: String) -> RlrResult<Setting> {
        self.repo
            .save_string(REQUEST_LOGGER_MODULE_ID, LOG_LEVEL, value)
            .await?;
        info!(setting = LOG_LEVEL, "Setting changed");
        self.log_level().await
    }

    pub async fn log_frontend(&self) -> RlrResult<Setting> {
        self.boolean(LOG_FRONTEND).await
    }

    pub async fn set_log_frontend(&self, value: bool) -> RlrResult<Setting> {
        self.save_boolean(LOG_FRONTEND, value).await
    }

    pub async fn log_admin(&self) -> RlrResult<Setting> {
        self.boolean(LOG_ADMIN).await
    }

    pub async fn set_log_admin(&self, value: bool) -> RlrResult<Setting> {
        self.save_boolean(LOG_ADMIN, value).await
    }

    pub async fn redact(&self) -> RlrResult<Setting> {
        let value = or_default(
            self.repo
                .get_collection(REQUEST_LOGGER_MODULE_ID, REDACT)
                .await,
        )?;
        Ok(Setting::Collection {
            name: REDACT.into(),
            value,
        })
    }

    /// Replace the redaction list with a JSON-encoded string array.
    pub async fn set_redact(&self, raw: &str) -> Result<Setting, ServerError> {
        let items = setting::parse_collection(raw).ok_or(ServerError::InvalidCollection)?;
        self.repo
            .save_collection(REQUEST_LOGGER_MODULE_ID, REDACT, items)
            .await?;
        info!(setting = REDACT, "Setting changed");
        Ok(self.redact().await?)
    }

    pub async fn redact_all_values(&self) -> RlrResult<Setting> {
        self.boolean(REDACT_ALL_VALUES).await
    }

    pub async fn set_redact_all_values(&self, value: bool) -> RlrResult<Setting> {
        self.save_boolean(REDACT_ALL_VALUES, value).await
    }

    async fn string(&self, name: &str) -> RlrResult<Setting> {
        let value = or_default(self.repo.get_string(REQUEST_LOGGER_MODULE_ID, name).await)?;
        Ok(Setting::String {
            name: name.into(),
            value,
        })
    }

    async fn boolean(&self, name: &str) -> RlrResult<Setting> {
        let value = or_default(self.repo.get_bool(REQUEST_LOGGER_MODULE_ID, name).await)?;
        Ok(Setting::Boolean {
            name: name.into(),
            value,
        })
    }

    async fn save_boolean(&self, name: &str, value: bool) -> RlrResult<Setting> {
        self.repo
            .save_bool(REQUEST_LOGGER_MODULE_ID, name, value)
            .await?;
        info!(setting = name, value, "Setting changed");
        self.boolean(name).await
    }
}
