//! SurrealDB implementation of [`ServiceAccountRepository`].

use chrono::{DateTime, Utc};
use rlr_core::error::{RlrError, RlrResult};
use rlr_core::models::service_account::{ProvisionServiceAccount, ServiceAccount};
use rlr_core::repository::ServiceAccountRepository;
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;
use uuid::Uuid;

use crate::error::DbError;

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct ServiceAccountRow {
    username: String,
    password_hash: String,
    groups: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct ServiceAccountRowWithId {
    record_id: String,
    username: String,
    password_hash: String,
    groups: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ServiceAccountRow {
    fn into_service_account(self, id: Uuid) -> ServiceAccount {
        ServiceAccount {
            id,
            username: self.username,
            password_hash: self.password_hash,
            groups: self.groups,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl ServiceAccountRowWithId {
    fn try_into_service_account(self) -> Result<ServiceAccount, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Decode(format!("invalid UUID: {e}")))?;
        Ok(ServiceAccount {
            id,
            username: self.username,
            password_hash: self.password_hash,
            groups: self.groups,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// SurrealDB implementation of the service account repository.
#[derive(Clone)]
pub struct SurrealServiceAccountRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealServiceAccountRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }

    async fn create(&self, input: ProvisionServiceAccount) -> Result<ServiceAccount, DbError> {
        let id_str = input.id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('service_account', $id) SET \
                 username = $username, \
                 password_hash = $password_hash, \
                 groups = $groups",
            )
            .bind(("id", id_str.clone()))
            .bind(("username", input.username))
            .bind(("password_hash", input.placeholder))
            .bind(("groups", input.groups))
            .await?;

        let mut result = result.check().map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<ServiceAccountRow> = result.take(0)?;
        let row = rows.into_iter().next().ok_or(DbError::NotFound {
            entity: "service_account".into(),
            id: id_str,
        })?;

        Ok(row.into_service_account(input.id))
    }
}

impl<C: Connection> ServiceAccountRepository for SurrealServiceAccountRepository<C> {
    async fn provision(&self, input: ProvisionServiceAccount) -> RlrResult<ServiceAccount> {
        let id = input.id;
        match self.get_by_id(id).await {
            Ok(existing) => return Ok(existing),
            Err(RlrError::NotFound { .. }) => {}
            Err(e) => return Err(e),
        }

        match self.create(input).await {
            Ok(account) => {
                info!(account_id = %id, "Provisioned API service account");
                Ok(account)
            }
            // Lost a race against a concurrent provision; the record is there now.
            Err(DbError::Query(_)) => self.get_by_id(id).await,
            Err(e) => Err(e.into()),
        }
    }

    async fn get_by_id(&self, id: Uuid) -> RlrResult<ServiceAccount> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('service_account', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<ServiceAccountRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "service_account".into(),
            id: id_str,
        })?;

        Ok(row.into_service_account(id))
    }

    async fn get_by_username(&self, username: &str) -> RlrResult<ServiceAccount> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM service_account \
                 WHERE username = $username",
            )
            .bind(("username", username.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<ServiceAccountRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "service_account".into(),
            id: format!("username={username}"),
        })?;

        Ok(row.try_into_service_account()?)
    }

    async fn update_password_hash(&self, id: Uuid, password_hash: String) -> RlrResult<()> {
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "UPDATE type::record('service_account', $id) SET \
                 password_hash = $password_hash, \
                 updated_at = time::now()",
            )
            .bind(("id", id_str.clone()))
            .bind(("password_hash", password_hash))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<ServiceAccountRow> = result.take(0).map_err(DbError::from)?;
        if rows.is_empty() {
            return Err(DbError::NotFound {
                entity: "service_account".into(),
                id: id_str,
            }
            .into());
        }

        Ok(())
    }
}
