//! Integration tests for schema initialization using in-memory SurrealDB.

use surrealdb::Surreal;
use surrealdb::engine::local::Mem;

#[tokio::test]
async fn schema_migration_applies_successfully() {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();

    let applied = rlr_db::run_migrations(&db).await.unwrap();
    assert_eq!(applied, vec![1]);

    let mut result = db.query("INFO FOR DB").await.unwrap();
    let info: Option<surrealdb_types::Value> = result.take(0).unwrap();
    let info = info.expect("INFO FOR DB should return a value");
    let info_str = format!("{:?}", info);

    assert!(
        info_str.contains("module_setting"),
        "missing module_setting table"
    );
    assert!(
        info_str.contains("service_account"),
        "missing service_account table"
    );
    assert!(
        info_str.contains("module_activation"),
        "missing module_activation table"
    );
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();

    rlr_db::run_migrations(&db).await.unwrap();
    let second = rlr_db::run_migrations(&db).await.unwrap();

    assert!(second.is_empty());
    assert_eq!(
        rlr_db::schema_version(&db).await.unwrap(),
        rlr_db::latest_version()
    );
}

#[tokio::test]
async fn fresh_database_reports_version_zero() {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();

    assert_eq!(rlr_db::schema_version(&db).await.unwrap(), 0);
}
