#![cfg(test)]
use configs::DatabaseConfig;
use models::db::connect;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tokio::sync::OnceCell;

// Ensure the table exists only once across the entire test process
static TABLE_READY: OnceCell<()> = OnceCell::const_new();

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS canteen_menu (\
    id BIGINT AUTO_INCREMENT PRIMARY KEY,\
    item_name VARCHAR(255) NOT NULL,\
    category VARCHAR(255) NOT NULL,\
    price DOUBLE NOT NULL)";

/// Connection for DB-backed tests, built from the environment
/// (`DATABASE_URL` or the discrete `DB_*` variables).
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let mut cfg = DatabaseConfig::default();
    cfg.normalize_from_env();
    cfg.validate()?;
    let db = connect(&cfg).await?;

    TABLE_READY
        .get_or_try_init(|| async {
            db.execute(Statement::from_string(
                db.get_database_backend(),
                CREATE_TABLE.to_string(),
            ))
            .await
            .map(|_| ())
        })
        .await?;

    Ok(db)
}
