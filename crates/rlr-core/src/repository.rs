//! Repository trait definitions for the host platform's storage.
//!
//! All repository operations are async. Module settings are scoped by
//! module id; the service account is a single well-known record.

use uuid::Uuid;

use crate::error::RlrResult;
use crate::models::service_account::{ProvisionServiceAccount, ServiceAccount};

// ---------------------------------------------------------------------------
// Module settings
// ---------------------------------------------------------------------------

/// Durable per-module key/value settings.
///
/// Reads of a setting that was never saved fail with
/// [`RlrError::NotFound`](crate::RlrError::NotFound). Every call is
/// authoritative; implementations must not cache.
pub trait ModuleSettingRepository: Send + Sync {
    fn get_string(
        &self,
        module_id: &str,
        name: &str,
    ) -> impl Future<Output = RlrResult<String>> + Send;
    fn save_string(
        &self,
        module_id: &str,
        name: &str,
        value: String,
    ) -> impl Future<Output = RlrResult<()>> + Send;
    fn get_bool(&self, module_id: &str, name: &str) -> impl Future<Output = RlrResult<bool>> + Send;
    fn save_bool(
        &self,
        module_id: &str,
        name: &str,
        value: bool,
    ) -> impl Future<Output = RlrResult<()>> + Send;
    fn get_collection(
        &self,
        module_id: &str,
        name: &str,
    ) -> impl Future<Output = RlrResult<Vec<String>>> + Send;
    fn save_collection(
        &self,
        module_id: &str,
        name: &str,
        value: Vec<String>,
    ) -> impl Future<Output = RlrResult<()>> + Send;
}

// ---------------------------------------------------------------------------
// Service account
// ---------------------------------------------------------------------------

pub trait ServiceAccountRepository: Send + Sync {
    /// Create the account unless a record with the same id exists.
    /// Returns the stored account either way.
    fn provision(
        &self,
        input: ProvisionServiceAccount,
    ) -> impl Future<Output = RlrResult<ServiceAccount>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = RlrResult<ServiceAccount>> + Send;
    fn get_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = RlrResult<ServiceAccount>> + Send;
    /// Overwrite the stored credential with a single parameterized
    /// update.
    fn update_password_hash(
        &self,
        id: Uuid,
        password_hash: String,
    ) -> impl Future<Output = RlrResult<()>> + Send;
}

// ---------------------------------------------------------------------------
// Module activation
// ---------------------------------------------------------------------------

pub trait ModuleActivationRepository: Send + Sync {
    /// Modules that were never activated report `false`.
    fn is_active(&self, module_id: &str) -> impl Future<Output = RlrResult<bool>> + Send;
    /// Returns whether the module is active after the call.
    fn set_active(
        &self,
        module_id: &str,
        active: bool,
    ) -> impl Future<Output = RlrResult<bool>> + Send;
}
