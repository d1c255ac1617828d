//! SurrealDB implementation of [`ModuleActivationRepository`].

use rlr_core::error::RlrResult;
use rlr_core::repository::ModuleActivationRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;

use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct ActivationRow {
    active: bool,
}

/// SurrealDB implementation of the module activation repository.
#[derive(Clone)]
pub struct SurrealModuleActivationRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealModuleActivationRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> ModuleActivationRepository for SurrealModuleActivationRepository<C> {
    async fn is_active(&self, module_id: &str) -> RlrResult<bool> {
        let mut result = self
            .db
            .query("SELECT active FROM type::record('module_activation', $module_id)")
            .bind(("module_id", module_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<ActivationRow> = result.take(0).map_err(DbError::from)?;
        Ok(rows.first().is_some_and(|r| r.active))
    }

    async fn set_active(&self, module_id: &str, active: bool) -> RlrResult<bool> {
        let result = self
            .db
            .query(
                "UPSERT type::record('module_activation', $module_id) SET \
                 module_id = $module_id, \
                 active = $active, \
                 updated_at = time::now()",
            )
            .bind(("module_id", module_id.to_string()))
            .bind(("active", active))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<ActivationRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "module_activation".into(),
            id: module_id.to_string(),
        })?;

        info!(module_id, active = row.active, "Module activation state changed");
        Ok(row.active)
    }
}
