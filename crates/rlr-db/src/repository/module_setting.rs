//! SurrealDB implementation of [`ModuleSettingRepository`].
//!
//! One record per `(module_id, name)` pair. The value lives in the
//! column matching its kind; saving under a different kind clears the
//! other columns.

use rlr_core::error::RlrResult;
use rlr_core::repository::ModuleSettingRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;

use crate::error::DbError;

#[derive(Debug, SurrealValue)]
struct SettingRow {
    kind: String,
    string_value: Option<String>,
    bool_value: Option<bool>,
    collection_value: Option<Vec<String>>,
}

fn record_key(module_id: &str, name: &str) -> String {
    format!("{module_id}/{name}")
}

/// SurrealDB implementation of the module settings repository.
#[derive(Clone)]
pub struct SurrealModuleSettingRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealModuleSettingRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    async fn load(&self, module_id: &str, name: &str) -> Result<SettingRow, DbError> {
        let key = record_key(module_id, name);
        let mut result = self
            .db
            .query("SELECT * FROM type::record('module_setting', $key)")
            .bind(("key", key.clone()))
            .await?;

        let rows: Vec<SettingRow> = result.take(0)?;
        rows.into_iter().next().ok_or(DbError::NotFound {
            entity: "module_setting".into(),
            id: key,
        })
    }

    async fn store(
        &self,
        module_id: &str,
        name: &str,
        kind: &'static str,
        string_value: Option<String>,
        bool_value: Option<bool>,
        collection_value: Option<Vec<String>>,
    ) -> Result<(), DbError> {
        self.db
            .query(
                "UPSERT type::record('module_setting', $key) SET \
                 module_id = $module_id, \
                 name = $name, \
                 kind = $kind, \
                 string_value = $string_value, \
                 bool_value = $bool_value, \
                 collection_value = $collection_value, \
                 updated_at = time::now()",
            )
            .bind(("key", record_key(module_id, name)))
            .bind(("module_id", module_id.to_string()))
            .bind(("name", name.to_string()))
            .bind(("kind", kind.to_string()))
            .bind(("string_value", string_value))
            .bind(("bool_value", bool_value))
            .bind(("collection_value", collection_value))
            .await?
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        Ok(())
    }
}

fn kind_mismatch(name: &str, expected: &str, row: &SettingRow) -> DbError {
    DbError::Decode(format!(
        "setting '{name}' is stored as '{}', not '{expected}'",
        row.kind
    ))
}

impl<C: Connection> ModuleSettingRepository for SurrealModuleSettingRepository<C> {
    async fn get_string(&self, module_id: &str, name: &str) -> RlrResult<String> {
        let row = self.load(module_id, name).await?;
        match row.string_value {
            Some(value) => Ok(value),
            None => Err(kind_mismatch(name, "str", &row).into()),
        }
    }

    async fn save_string(&self, module_id: &str, name: &str, value: String) -> RlrResult<()> {
        self.store(module_id, name, "str", Some(value), None, None)
            .await?;
        Ok(())
    }

    async fn get_bool(&self, module_id: &str, name: &str) -> RlrResult<bool> {
        let row = self.load(module_id, name).await?;
        match row.bool_value {
            Some(value) => Ok(value),
            None => Err(kind_mismatch(name, "bool", &row).into()),
        }
    }

    async fn save_bool(&self, module_id: &str, name: &str, value: bool) -> RlrResult<()> {
        self.store(module_id, name, "bool", None, Some(value), None)
            .await?;
        Ok(())
    }

    async fn get_collection(&self, module_id: &str, name: &str) -> RlrResult<Vec<String>> {
        let row = self.load(module_id, name).await?;
        match row.collection_value {
            Some(value) => Ok(value),
            None => Err(kind_mismatch(name, "arr", &row).into()),
        }
    }

    async fn save_collection(
        &self,
        module_id: &str,
        name: &str,
        value: Vec<String>,
    ) -> RlrResult<()> {
        self.store(module_id, name, "arr", None, None, Some(value))
            .await?;
        Ok(())
    }
}
