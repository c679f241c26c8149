use async_trait::async_trait;
use mockdesk_core::{error::MockError, shellexpand, traits::KvStore};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

/// Key/value backend persisted in a SQLite `kv` table.
#[derive(Clone)]
pub struct SqliteBackend {
    pool: SqlitePool,
}

impl SqliteBackend {
    /// Open (or create) the database at `db_path`, running migrations on first use.
    pub async fn open(db_path: &str) -> Result<Self, MockError> {
        let db_path = shellexpand(db_path);

        // Ensure parent directory exists.
        if let Some(parent) = std::path::Path::new(&db_path).parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| MockError::Storage(format!("failed to create data dir: {e}")))?;
        }

        let opts = SqliteConnectOptions::from_str(&format!("sqlite:{db_path}"))
            .map_err(|e| MockError::Storage(format!("invalid db path: {e}")))?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal);

        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(opts)
            .await
            .map_err(|e| MockError::Storage(format!("failed to connect to sqlite: {e}")))?;

        Self::run_migrations(&pool).await?;

        info!("sqlite store initialized at {db_path}");

        Ok(Self { pool })
    }

    /// Private in-memory database, used by tests.
    pub async fn open_in_memory() -> Result<Self, MockError> {
        let opts = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| MockError::Storage(format!("invalid db path: {e}")))?
            .create_if_missing(true);
        // A second connection would see a different in-memory database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(opts)
            .await
            .map_err(|e| MockError::Storage(format!("failed to connect to sqlite: {e}")))?;
        Self::run_migrations(&pool).await?;
        Ok(Self { pool })
    }

    /// Run SQL migrations, tracking which have already been applied.
    async fn run_migrations(pool: &SqlitePool) -> Result<(), MockError> {
        sqlx::raw_sql(
            "CREATE TABLE IF NOT EXISTS _migrations (
                name TEXT PRIMARY KEY,
                applied_at TEXT NOT NULL DEFAULT (datetime('now'))
            );",
        )
        .execute(pool)
        .await
        .map_err(|e| MockError::Storage(format!("failed to create migrations table: {e}")))?;

        let migrations: &[(&str, &str)] =
            &[("001_kv", include_str!("../../migrations/001_kv.sql"))];

        for (name, sql) in migrations {
            let applied: Option<(String,)> =
                sqlx::query_as("SELECT name FROM _migrations WHERE name = ?")
                    .bind(name)
                    .fetch_optional(pool)
                    .await
                    .map_err(|e| {
                        MockError::Storage(format!("failed to check migration {name}: {e}"))
                    })?;

            if applied.is_some() {
                continue;
            }

            sqlx::raw_sql(sql)
                .execute(pool)
                .await
                .map_err(|e| MockError::Storage(format!("migration {name} failed: {e}")))?;

            sqlx::query("INSERT INTO _migrations (name) VALUES (?)")
                .bind(name)
                .execute(pool)
                .await
                .map_err(|e| {
                    MockError::Storage(format!("failed to record migration {name}: {e}"))
                })?;
        }
        Ok(())
    }
}

#[async_trait]
impl KvStore for SqliteBackend {
    fn name(&self) -> &str {
        "sqlite"
    }

    async fn get_raw(&self, key: &str) -> Result<Option<String>, MockError> {
        let row: Option<(String,)> = sqlx::query_as("SELECT value FROM kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| MockError::Storage(format!("read {key} failed: {e}")))?;
        Ok(row.map(|(value,)| value))
    }

    async fn set_raw(&self, key: &str, value: String) -> Result<(), MockError> {
        sqlx::query(
            "INSERT INTO kv (key, value, updated_at) VALUES (?, ?, datetime('now')) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| MockError::Storage(format!("write {key} failed: {e}")))?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), MockError> {
        sqlx::query("DELETE FROM kv WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await
            .map_err(|e| MockError::Storage(format!("delete {key} failed: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_round_trip() {
        let kv = SqliteBackend::open_in_memory().await.unwrap();
        assert_eq!(kv.get_raw("shadcn_admin_tasks").await.unwrap(), None);

        kv.set_raw("shadcn_admin_tasks", "[]".to_string())
            .await
            .unwrap();
        kv.set_raw("shadcn_admin_tasks", "[{\"id\":1}]".to_string())
            .await
            .unwrap();
        assert_eq!(
            kv.get_raw("shadcn_admin_tasks").await.unwrap().as_deref(),
            Some("[{\"id\":1}]")
        );

        kv.remove("shadcn_admin_tasks").await.unwrap();
        kv.remove("shadcn_admin_tasks").await.unwrap();
        assert_eq!(kv.get_raw("shadcn_admin_tasks").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_file_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/store.db");
        let path = path.to_str().unwrap();

        {
            let kv = SqliteBackend::open(path).await.unwrap();
            kv.set_raw("shadcn_admin_apps", "[]".to_string())
                .await
                .unwrap();
        }

        let kv = SqliteBackend::open(path).await.unwrap();
        assert_eq!(
            kv.get_raw("shadcn_admin_apps").await.unwrap().as_deref(),
            Some("[]")
        );
    }
}
