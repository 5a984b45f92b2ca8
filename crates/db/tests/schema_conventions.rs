use sqlx::PgPool;

/// Every table created by the migrations exists, including the ones no
/// repository touches yet.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_tables_exist(pool: PgPool) {
    let tables: Vec<(String,)> = sqlx::query_as(
        "SELECT table_name::TEXT
         FROM information_schema.tables
         WHERE table_schema = 'public'
           AND table_type = 'BASE TABLE'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let names: Vec<&str> = tables.iter().map(|(t,)| t.as_str()).collect();
    assert_eq!(names, ["customers", "order_items", "orders", "products"]);
}

/// All `id` columns must be uuid.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pks_are_uuid(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name::TEXT, data_type::TEXT
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert!(!rows.is_empty());
    for (table, data_type) in &rows {
        assert_eq!(data_type, "uuid", "Table {table}.id should be uuid, got {data_type}");
    }
}

/// Unique business keys are enforced by constraints following the `uq_`
/// naming convention the API layer relies on to report conflicts.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unique_constraints_use_uq_prefix(pool: PgPool) {
    let rows: Vec<(String,)> = sqlx::query_as(
        "SELECT constraint_name::TEXT
         FROM information_schema.table_constraints
         WHERE table_schema = 'public'
           AND constraint_type = 'UNIQUE'
         ORDER BY constraint_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let names: Vec<&str> = rows.iter().map(|(c,)| c.as_str()).collect();
    assert_eq!(names, ["uq_customers_email", "uq_products_sku"]);
}

/// Running the migrations a second time is a no-op.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_migrations_are_idempotent(pool: PgPool) {
    catalog_db::run_migrations(&pool).await.unwrap();
    catalog_db::health_check(&pool).await.unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_no_pending_migrations_after_migrate(pool: PgPool) {
    assert_eq!(catalog_db::pending_migrations(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = false)]
async fn test_pending_migrations_on_fresh_database(pool: PgPool) {
    assert!(catalog_db::pending_migrations(&pool).await.is_err());

    catalog_db::run_migrations(&pool).await.unwrap();
    assert_eq!(catalog_db::pending_migrations(&pool).await.unwrap(), 0);

    sqlx::query("DELETE FROM _sqlx_migrations WHERE version = $1")
        .bind(catalog_db::MIGRATOR.iter().last().unwrap().version)
        .execute(&pool)
        .await
        .unwrap();
    assert_eq!(catalog_db::pending_migrations(&pool).await.unwrap(), 1);
}
