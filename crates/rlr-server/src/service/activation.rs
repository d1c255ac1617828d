//! Activation state of the request logger module.

use rlr_core::models::module::REQUEST_LOGGER_MODULE_ID;
use rlr_core::repository::ModuleActivationRepository;
use tracing::{error, info, warn};

use crate::error::ServerError;

#[derive(Clone)]
pub struct ActivationService<R: ModuleActivationRepository> {
    repo: R,
}

impl<R: ModuleActivationRepository> ActivationService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Whether the request logger is active. Unreadable state reads as
    /// inactive.
    pub async fn is_active(&self) -> bool {
        match self.repo.is_active(REQUEST_LOGGER_MODULE_ID).await {
            Ok(active) => active,
            Err(e) => {
                warn!(
                    error = %e,
                    module_id = REQUEST_LOGGER_MODULE_ID,
                    "Activation state unreadable"
                );
                false
            }
        }
    }

    pub async fn activate(&self) -> Result<bool, ServerError> {
        match self.repo.set_active(REQUEST_LOGGER_MODULE_ID, true).await {
            Ok(active) => {
                info!(module_id = REQUEST_LOGGER_MODULE_ID, "Module activated");
                Ok(active)
            }
            Err(e) => {
                error!(
                    error = %e,
                    module_id = REQUEST_LOGGER_MODULE_ID,
                    "Module activation failed"
                );
                Err(ServerError::ModuleActivation(e))
            }
        }
    }

    /// Returns `true` once the module is inactive.
    pub async fn deactivate(&self) -> Result<bool, ServerError> {
        match self.repo.set_active(REQUEST_LOGGER_MODULE_ID, false).await {
            Ok(active) => {
                info!(module_id = REQUEST_LOGGER_MODULE_ID, "Module deactivated");
                Ok(!active)
            }
            Err(e) => {
                error!(
                    error = %e,
                    module_id = REQUEST_LOGGER_MODULE_ID,
                    "Module deactivation failed"
                );
                Err(ServerError::ModuleDeactivation(e))
            }
        }
    }
}
