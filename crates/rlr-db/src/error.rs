//! Database-specific error types and conversions.

use rlr_core::error::RlrError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Query failed: {0}")]
    Query(String),

    #[error("Invalid stored value: {0}")]
    Decode(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },
}

impl From<DbError> for RlrError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => RlrError::NotFound { entity, id },
            other => RlrError::Database(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_its_kind() {
        let err: RlrError = DbError::NotFound {
            entity: "service_account".into(),
            id: "x".into(),
        }
        .into();
        assert!(err.is_not_found());
    }

    #[test]
    fn other_errors_become_database_errors() {
        let err: RlrError = DbError::Query("boom".into()).into();
        assert!(matches!(err, RlrError::Database(msg) if msg.contains("boom")));
    }
}
