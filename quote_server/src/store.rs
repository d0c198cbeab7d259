//! SQLite-backed persistence for quote records.
//!
//! One append-only table, `cotacoes`, with no key or uniqueness constraint: every
//! request adds a row even when the quote did not change. Writes and reads are each
//! bounded by a caller-supplied deadline.
use std::str::FromStr;
use std::time::Duration;

use log::info;
use quote_common::{QuoteError, Result, with_deadline};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::model::QuoteRecord;

/// Database name that selects a private in-memory database.
pub const MEMORY_DATABASE: &str = ":memory:";

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS cotacoes (
        code TEXT,
        codein TEXT,
        name TEXT,
        high REAL,
        low REAL,
        varBid REAL,
        pctChange REAL,
        bid REAL,
        ask REAL,
        timestamp INTEGER,
        create_date DATETIME
    );
"#;

const INSERT_QUOTE: &str = r#"
    INSERT INTO cotacoes (code, codein, name, high, low, varBid, pctChange, bid, ask, timestamp, create_date)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
"#;

const SELECT_QUOTES: &str = r#"
    SELECT code, codein, name, high, low, varBid, pctChange, bid, ask, timestamp,
           CAST(create_date AS TEXT) AS create_date
    FROM cotacoes
    ORDER BY rowid
"#;

/// Handle to the quote database, created once at startup and shared by requests.
pub struct QuoteStore {
    pool: SqlitePool,
}

impl QuoteStore {
    /// Open `database` (a file path, or `:memory:`) and create the table if needed.
    ///
    /// An in-memory database lives inside a single connection, so the pool is pinned
    /// to exactly one connection that never expires.
    pub async fn connect(database: &str) -> Result<Self> {
        let in_memory = database == MEMORY_DATABASE;
        let options = if in_memory {
            SqliteConnectOptions::from_str("sqlite::memory:").map_err(storage_error)?
        } else {
            SqliteConnectOptions::new()
                .filename(database)
                .create_if_missing(true)
        };
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(4)
        };
        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(storage_error)?;

        sqlx::query(CREATE_TABLE)
            .execute(&pool)
            .await
            .map_err(storage_error)?;
        info!("Quote table ready in {}", database);

        Ok(Self { pool })
    }

    /// Append `record` as a new row, failing with `Timeout` after `timeout`.
    pub async fn persist(&self, record: &QuoteRecord, timeout: Duration) -> Result<()> {
        with_deadline(timeout, "store insert", async {
            sqlx::query(INSERT_QUOTE)
                .bind(&record.code)
                .bind(&record.codein)
                .bind(&record.name)
                .bind(record.high)
                .bind(record.low)
                .bind(record.var_bid)
                .bind(record.pct_change)
                .bind(record.bid)
                .bind(record.ask)
                .bind(record.timestamp)
                .bind(&record.create_date)
                .execute(&self.pool)
                .await
                .map_err(storage_error)?;
            Ok(())
        })
        .await
    }

    /// Read back every stored row in insertion order.
    pub async fn fetch_all(&self, timeout: Duration) -> Result<Vec<QuoteRecord>> {
        with_deadline(timeout, "store read-back", async {
            sqlx::query_as::<_, QuoteRecord>(SELECT_QUOTES)
                .fetch_all(&self.pool)
                .await
                .map_err(storage_error)
        })
        .await
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn storage_error(err: sqlx::Error) -> QuoteError {
    QuoteError::Storage(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::{Connection, SqliteConnection};

    const GENEROUS: Duration = Duration::from_secs(5);

    fn record(bid: f64) -> QuoteRecord {
        QuoteRecord {
            code: "USD".into(),
            codein: "BRL".into(),
            name: "Dólar Americano/Real Brasileiro".into(),
            high: 5.1,
            low: 4.9,
            var_bid: 0.01,
            pct_change: 0.2,
            bid,
            ask: bid + 0.001,
            timestamp: 1_700_000_000,
            create_date: "2023-11-14 19:13:20".into(),
        }
    }

    #[tokio::test]
    async fn in_memory_rows_survive_across_calls_and_allow_duplicates() {
        let store = QuoteStore::connect(MEMORY_DATABASE).await.unwrap();
        store.persist(&record(5.0), GENEROUS).await.unwrap();
        store.persist(&record(5.0), GENEROUS).await.unwrap();
        store.persist(&record(5.2), GENEROUS).await.unwrap();

        let rows = store.fetch_all(GENEROUS).await.unwrap();
        assert_eq!(rows, vec![record(5.0), record(5.0), record(5.2)]);
    }

    #[tokio::test]
    async fn reopening_a_file_database_keeps_existing_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.db");
        let path = path.to_str().unwrap();

        let store = QuoteStore::connect(path).await.unwrap();
        store.persist(&record(5.0), GENEROUS).await.unwrap();
        store.close().await;

        let reopened = QuoteStore::connect(path).await.unwrap();
        assert_eq!(reopened.fetch_all(GENEROUS).await.unwrap(), vec![record(5.0)]);
    }

    #[tokio::test]
    async fn insert_blocked_by_a_writer_times_out() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.db");
        let store = QuoteStore::connect(path.to_str().unwrap()).await.unwrap();

        let mut locker = SqliteConnection::connect(&format!("sqlite://{}", path.display()))
            .await
            .unwrap();
        sqlx::query("BEGIN EXCLUSIVE").execute(&mut locker).await.unwrap();

        let result = store.persist(&record(5.0), Duration::from_millis(10)).await;
        assert!(matches!(result, Err(QuoteError::Timeout(_))), "{result:?}");

        sqlx::query("ROLLBACK").execute(&mut locker).await.unwrap();
    }
}
