#![allow(dead_code)]

use rlr_db::{DbConfig, DbManager};
use rlr_server::{AppState, ServerConfig};

pub const ADMIN_KEY: &str = "test-admin-key";

/// Fresh in-memory store with migrations applied. With `install`, the
/// API user is provisioned and the activation hook has run.
pub async fn app_state(install: bool) -> AppState {
    let config = ServerConfig {
        admin_api_key: Some(ADMIN_KEY.into()),
        db: DbConfig {
            url: "mem://".into(),
            ..DbConfig::default()
        },
        ..ServerConfig::default()
    };

    let db = DbManager::connect(&config.db).await.unwrap();
    rlr_db::run_migrations(db.client()).await.unwrap();

    let state = AppState::new(db.client().clone(), &config);
    if install {
        state.services().install().await.unwrap();
    }
    state
}

pub async fn pending_token(state: &AppState) -> String {
    state
        .services()
        .bootstrap
        .pending_token()
        .await
        .expect("setup token pending")
}
