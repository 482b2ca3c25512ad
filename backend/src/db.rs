use anyhow::Result;
use sqlx::{migrate::MigrateDatabase, Row, Sqlite, SqlitePool};
use std::sync::Arc;

// The database URL for the production database
const DATABASE_URL: &str = "sqlite:savesense.db";

/// DbConnection manages database operations for users and their ledgers.
///
/// Ledgers are stored wholesale: one JSON document per user, replaced on
/// every save. That matches the sync adapter's complete-overwrite semantics
/// and keeps concurrent saves last-write-wins.
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            Sqlite::create_database(url).await?
        }

        let pool = SqlitePool::connect(url).await?;
        Self::setup_schema(&pool).await?;

        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize the standard database
    pub async fn init() -> Result<Self> {
        Self::new(DATABASE_URL).await
    }

    /// Initialize an in-memory database with a unique name, for tests
    pub async fn init_test() -> Result<Self> {
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                unique_id TEXT PRIMARY KEY,
                full_name TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS savings (
                user_id TEXT PRIMARY KEY,
                ledger TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Record a user id and the name it was registered under.
    /// Re-registering the same id overwrites the name.
    pub async fn register_user(&self, unique_id: &str, full_name: &str) -> Result<()> {
        sqlx::query("INSERT OR REPLACE INTO users (unique_id, full_name) VALUES (?, ?)")
            .bind(unique_id)
            .bind(full_name)
            .execute(&*self.pool)
            .await?;
        Ok(())
    }

    /// Name registered for a user id, if any.
    pub async fn get_user_name(&self, unique_id: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT full_name FROM users WHERE unique_id = ?")
            .bind(unique_id)
            .fetch_optional(&*self.pool)
            .await?;

        Ok(row.map(|r| r.get("full_name")))
    }

    /// Store a user's complete ledger document, replacing any previous one.
    pub async fn put_ledger(&self, user_id: &str, ledger_json: &str) -> Result<()> {
        sqlx::query("INSERT OR REPLACE INTO savings (user_id, ledger) VALUES (?, ?)")
            .bind(user_id)
            .bind(ledger_json)
            .execute(&*self.pool)
            .await?;
        Ok(())
    }

    /// Retrieve a user's ledger document, if one was ever saved.
    pub async fn get_ledger(&self, user_id: &str) -> Result<Option<String>> {
        let row = sqlx::query("SELECT ledger FROM savings WHERE user_id = ?")
            .bind(user_id)
            .fetch_optional(&*self.pool)
            .await?;

        Ok(row.map(|r| r.get("ledger")))
    }
}
