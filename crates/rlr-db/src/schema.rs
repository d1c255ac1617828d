//! Schema definitions and migration runner for SurrealDB.
//!
//! All table definitions use SCHEMAFULL mode for data integrity.
//! UUIDs are stored as strings.

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;

use crate::error::DbError;

// -----------------------------------------------------------------------
// Migration tracking
// -----------------------------------------------------------------------

const MIGRATION_TABLE_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration \
    COLUMNS version UNIQUE;
";

#[derive(Debug, SurrealValue)]
struct MigrationRecord {
    version: u32,
    #[allow(dead_code)]
    name: String,
}

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "initial_schema",
    sql: SCHEMA_V1,
}];

// -----------------------------------------------------------------------
// Schema v1: initial table definitions
// -----------------------------------------------------------------------

const SCHEMA_V1: &str = "\
-- =======================================================================
-- Module settings (record id: '<module_id>/<name>')
-- =======================================================================
DEFINE TABLE module_setting SCHEMAFULL;
DEFINE FIELD module_id ON TABLE module_setting TYPE string;
DEFINE FIELD name ON TABLE module_setting TYPE string;
DEFINE FIELD kind ON TABLE module_setting TYPE string \
    ASSERT $value IN ['str', 'bool', 'arr'];
DEFINE FIELD string_value ON TABLE module_setting TYPE option<string>;
DEFINE FIELD bool_value ON TABLE module_setting TYPE option<bool>;
DEFINE FIELD collection_value ON TABLE module_setting \
    TYPE option<array<string>>;
DEFINE FIELD updated_at ON TABLE module_setting TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_module_setting_module_name ON TABLE module_setting \
    COLUMNS module_id, name UNIQUE;

-- =======================================================================
-- API service account (record id: deterministic UUID v5)
-- =======================================================================
DEFINE TABLE service_account SCHEMAFULL;
DEFINE FIELD username ON TABLE service_account TYPE string;
DEFINE FIELD password_hash ON TABLE service_account TYPE string;
DEFINE FIELD groups ON TABLE service_account TYPE array<string> \
    DEFAULT [];
DEFINE FIELD created_at ON TABLE service_account TYPE datetime \
    DEFAULT time::now();
DEFINE FIELD updated_at ON TABLE service_account TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX idx_service_account_username ON TABLE service_account \
    COLUMNS username UNIQUE;

-- =======================================================================
-- Module activation state (record id: module id)
-- =======================================================================
DEFINE TABLE module_activation SCHEMAFULL;
DEFINE FIELD module_id ON TABLE module_activation TYPE string;
DEFINE FIELD active ON TABLE module_activation TYPE bool DEFAULT false;
DEFINE FIELD updated_at ON TABLE module_activation TYPE datetime \
    DEFAULT time::now();
";

/// Highest migration version recorded in `_migration`, or `0` when the
/// tracking table is empty.
pub async fn schema_version<C: Connection>(db: &Surreal<C>) -> Result<u32, DbError> {
    db.query(MIGRATION_TABLE_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(e.to_string()))?;

    let mut result = db
        .query("SELECT version, name FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let records: Vec<MigrationRecord> = result.take(0)?;
    Ok(records.first().map(|m| m.version).unwrap_or(0))
}

/// Bring the schema up to the latest version.
///
/// Migrations already recorded in `_migration` are skipped, so calling
/// this on every startup is safe. Returns the versions applied by this
/// call.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<Vec<u32>, DbError> {
    let current = schema_version(db).await?;
    let mut applied = Vec::new();

    for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
        info!(
            version = migration.version,
            name = migration.name,
            "Applying migration"
        );

        db.query(migration.sql).await?.check().map_err(|e| {
            DbError::Migration(format!(
                "v{} '{}' failed: {e}",
                migration.version, migration.name
            ))
        })?;

        db.query("CREATE _migration SET version = $version, name = $name")
            .bind(("version", migration.version))
            .bind(("name", migration.name.to_string()))
            .await?
            .check()
            .map_err(|e| {
                DbError::Migration(format!("recording v{} failed: {e}", migration.version))
            })?;

        applied.push(migration.version);
    }

    if applied.is_empty() {
        info!(version = current, "Schema is up to date");
    } else {
        info!(applied = ?applied, "Migrations applied");
    }

    Ok(applied)
}

/// Latest schema version known to this build.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map(|m| m.version).unwrap_or(0)
}
