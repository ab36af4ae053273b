use std::str::FromStr;
use std::time::Duration;

use log::{debug, info, warn};
use sqlx::any::{AnyConnectOptions, AnyKind, AnyPoolOptions, AnyRow};
use sqlx::Row;

use super::schema::Statements;
use super::*;
use crate::config::Config;

/// Owns the `scores` table. Records only ever get appended through here.
pub struct ScoreStore {
    pool: DatabasePool,
    statements: Statements,
}

impl ScoreStore {
    /// Opens a connection pool to the database named in `config`.
    /// A missing SQLite file is created.
    pub async fn connect(config: &Config) -> StoreResult<Self> {
        let mut options = AnyConnectOptions::from_str(&config.database_url)
            .map_err(|source| StoreError::Connect { source })?;
        let kind = options.kind();

        if let Some(sqlite) = options.as_sqlite_mut() {
            *sqlite = sqlite.clone().create_if_missing(true);
        }

        let mut pool_options = AnyPoolOptions::new().max_connections(config.max_connections);
        if kind == AnyKind::Sqlite && is_in_memory(&config.database_url) {
            // Every connection would get a database of its own, and closing the last one drops it
            if config.max_connections > 1 {
                warn!("An in-memory SQLite database is limited to a single connection");
            }
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(|source| StoreError::Connect { source })?;

        info!("Connected to a {:?} database", kind);
        Ok(Self {
            pool,
            statements: Statements::for_kind(kind),
        })
    }

    /// Creates the `scores` table and its `token` index unless they already exist.
    pub async fn init_schema(&self) -> StoreResult<()> {
        sqlx::query(self.statements.create_table)
            .execute(&self.pool)
            .await?;

        if let Some(create_index) = self.statements.create_index {
            sqlx::query(create_index).execute(&self.pool).await?;
        }

        info!("Score table is ready");
        Ok(())
    }

    /// Stores a new score under `token`. The database assigns the id.
    pub async fn append(&self, token: &str, name: &str, score: GameScore) -> StoreResult<()> {
        sqlx::query(&self.statements.insert)
            .bind(token)
            .bind(name)
            .bind(score)
            .execute(&self.pool)
            .await?;

        debug!("Stored score {} for {:?} under token {:?}", score, name, token);
        Ok(())
    }

    /// Fetches every record stored under `token`, oldest first.
    pub async fn list_records(&self, token: &str) -> StoreResult<Vec<ScoreRecord>> {
        let rows = sqlx::query(&self.statements.select_by_token)
            .bind(token)
            .fetch_all(&self.pool)
            .await?;

        let records: Vec<ScoreRecord> = rows
            .iter()
            .map(record_from_row)
            .collect::<Result<_, _>>()?;
        Ok(records)
    }

    /// Fetches the scores stored under `token` in the order they were added.
    /// An unknown token simply has no scores.
    pub async fn list_by_token(&self, token: &str) -> StoreResult<Vec<ScoreEntry>> {
        let records = self.list_records(token).await?;
        Ok(records.into_iter().map(ScoreEntry::from).collect())
    }

    /// Waits for every pooled connection to close.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn record_from_row(row: &AnyRow) -> Result<ScoreRecord, sqlx::Error> {
    Ok(ScoreRecord {
        id: row.try_get("id")?,
        token: row.try_get("token")?,
        name: row.try_get("name")?,
        score: row.try_get("score")?,
    })
}

fn is_in_memory(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}
