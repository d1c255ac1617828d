//! Shared application state.

use std::sync::Arc;

use axum::http::HeaderMap;
use rlr_auth::{BootstrapService, password};
use rlr_core::models::module::REMOTE_MODULE_ID;
use rlr_core::models::service_account::{CredentialState, ProvisionServiceAccount, api_user_id};
use rlr_core::repository::{ModuleActivationRepository, ServiceAccountRepository};
use rlr_db::repository::{
    SurrealModuleActivationRepository, SurrealModuleSettingRepository,
    SurrealServiceAccountRepository,
};
use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;
use tracing::{info, warn};

use crate::caller::{Authenticator, Caller};
use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::graphql::{self, RlrSchema};
use crate::service::{ActivationService, SettingsService};

pub type SettingRepo = SurrealModuleSettingRepository<Any>;
pub type AccountRepo = SurrealServiceAccountRepository<Any>;
pub type ActivationRepo = SurrealModuleActivationRepository<Any>;

/// Services reachable from resolvers and handlers.
pub struct Services {
    pub bootstrap: BootstrapService<SettingRepo, AccountRepo>,
    pub settings: SettingsService<SettingRepo>,
    pub activation: ActivationService<ActivationRepo>,
    pub accounts: AccountRepo,
    modules: ActivationRepo,
    db: Surreal<Any>,
    pepper: Option<String>,
}

/// Progress through install, migrate, activate, hand out token, claim.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SetupStatus {
    pub migration_executed: bool,
    pub module_activated: bool,
    pub token_pending: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_token: Option<String>,
    pub setup_complete: bool,
}

impl Services {
    pub fn new(db: Surreal<Any>, config: &ServerConfig) -> Self {
        let settings = SurrealModuleSettingRepository::new(db.clone());
        let accounts = SurrealServiceAccountRepository::new(db.clone());
        let modules = SurrealModuleActivationRepository::new(db.clone());

        Self {
            bootstrap: BootstrapService::new(
                settings.clone(),
                accounts.clone(),
                config.auth.clone(),
            ),
            settings: SettingsService::new(settings),
            activation: ActivationService::new(modules.clone()),
            accounts,
            modules,
            db,
            pepper: config.auth.pepper.clone(),
        }
    }

    /// Module lifecycle: make sure the API user exists, mark this module
    /// active and run the activation hook.
    pub async fn install(&self) -> Result<(), ServerError> {
        let account = self
            .accounts
            .provision(ProvisionServiceAccount::api_user(
                password::generate_placeholder(),
            ))
            .await?;
        info!(account_id = %account.id, "API user present");

        self.modules.set_active(REMOTE_MODULE_ID, true).await?;
        self.bootstrap.on_activate().await;
        Ok(())
    }

    pub async fn setup_status(&self) -> SetupStatus {
        let schema_current = match rlr_db::schema_version(&self.db).await {
            Ok(version) => version >= rlr_db::latest_version(),
            Err(e) => {
                warn!(error = %e, "Schema version unreadable");
                false
            }
        };
        let migration_executed =
            schema_current && self.accounts.get_by_id(api_user_id()).await.is_ok();

        let module_activated = self
            .modules
            .is_active(REMOTE_MODULE_ID)
            .await
            .unwrap_or(false);

        let setup_token = self.bootstrap.pending_token().await;
        let claimed = self.bootstrap.credential_state().await == CredentialState::Claimed;

        SetupStatus {
            migration_executed,
            module_activated,
            token_pending: setup_token.is_some(),
            setup_complete: migration_executed && module_activated && claimed,
            setup_token,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    services: Arc<Services>,
    schema: RlrSchema,
    admin_api_key: Option<Arc<str>>,
}

impl AppState {
    pub fn new(db: Surreal<Any>, config: &ServerConfig) -> Self {
        let services = Arc::new(Services::new(db, config));
        Self {
            schema: graphql::build_schema(services.clone()),
            services,
            admin_api_key: config.admin_api_key.as_deref().map(Arc::from),
        }
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn schema(&self) -> &RlrSchema {
        &self.schema
    }

    pub async fn identify(&self, headers: &HeaderMap) -> Caller {
        Authenticator {
            accounts: &self.services.accounts,
            admin_api_key: self.admin_api_key.as_deref(),
            pepper: self.services.pepper.as_deref(),
        }
        .identify(headers)
        .await
    }
}
