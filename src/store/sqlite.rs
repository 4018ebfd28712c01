//! SQLite booking store
//!
//! Durable backing. The schema is applied on every start and tolerates an
//! existing table.

use super::ScheduleStore;
use crate::config::redact_url;
use crate::error::StoreError;
use crate::models::Booking;
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

/// Database connection pool for booking operations
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (creating if missing) the database and apply the schema
    ///
    /// # Arguments
    /// * `db_url` - `sqlite:` URL or bare file path; other schemes are refused
    /// * `max_connections` - pool size
    ///
    /// # Returns
    /// * `Ok(SqliteStore)` if successful
    /// * `Err(StoreError)` if connection or migration failed
    pub async fn new(db_url: &str, max_connections: u32) -> Result<Self, StoreError> {
        if !db_url.starts_with("sqlite:") && db_url.contains("://") {
            return Err(StoreError::UnsupportedUrl(redact_url(db_url)));
        }

        // SQLite connection string format: sqlite://path/to/db.db
        let connection_string = if db_url.starts_with("sqlite:") {
            db_url.to_string()
        } else {
            format!("sqlite:{}", db_url)
        };
        let in_memory = connection_string.contains(":memory:");

        if !in_memory {
            ensure_parent_dir(&connection_string)?;
        }

        let options = SqliteConnectOptions::from_str(&connection_string)
            .map_err(StoreError::Connection)?
            .create_if_missing(true);

        // A private in-memory database lives and dies with its one connection
        let pool_options = if in_memory {
            SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(max_connections)
        };

        let pool = pool_options
            .connect_with(options)
            .await
            .map_err(StoreError::Connection)?;

        info!("Connected to SQLite database at: {}", redact_url(db_url));

        let store = Self { pool };
        store.run_migrations().await?;

        Ok(store)
    }

    /// Run database migrations
    async fn run_migrations(&self) -> Result<(), StoreError> {
        info!("Running database migrations...");

        let migration_sql = include_str!("../../migrations/001_create_bookings.sql");

        for statement in migration_statements(migration_sql) {
            sqlx::query(&statement)
                .execute(&self.pool)
                .await
                .map_err(StoreError::Migration)?;
        }

        info!("Database migrations completed successfully");
        Ok(())
    }

    #[cfg(test)]
    fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Strip `--` comments and split a migration file into statements
fn migration_statements(sql: &str) -> Vec<String> {
    let mut cleaned_sql = String::new();
    for line in sql.lines() {
        let without_comments = match line.find("--") {
            Some(comment_pos) => &line[..comment_pos],
            None => line,
        };
        let trimmed = without_comments.trim();
        if trimmed.is_empty() {
            continue;
        }
        cleaned_sql.push_str(trimmed);
        cleaned_sql.push(' ');
    }

    cleaned_sql
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn ensure_parent_dir(connection_string: &str) -> Result<(), StoreError> {
    let path = connection_string
        .trim_start_matches("sqlite:")
        .trim_start_matches("//");
    let path = path.split('?').next().unwrap_or(path);

    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Connection(sqlx::Error::Io(e)))?;
        }
    }
    Ok(())
}

#[async_trait]
impl ScheduleStore for SqliteStore {
    fn kind(&self) -> &'static str {
        "sqlite"
    }

    fn is_durable(&self) -> bool {
        true
    }

    async fn booked_slots(&self, date: &str) -> Result<Vec<String>, StoreError> {
        sqlx::query_scalar::<_, String>("SELECT slot FROM bookings WHERE booking_date = ?")
            .bind(date)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::Query)
    }

    async fn insert(&self, booking: &Booking) -> Result<(), StoreError> {
        let created_at = chrono::Utc::now().timestamp();
        sqlx::query(
            "INSERT INTO bookings (client_name, client_phone, booking_date, slot, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&booking.client_name)
        .bind(&booking.client_phone)
        .bind(&booking.date)
        .bind(&booking.slot)
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => StoreError::SlotTaken {
                date: booking.date.clone(),
                slot: booking.slot.clone(),
            },
            other => StoreError::Query(other),
        })?;

        debug!("Stored booking {} {}", booking.date, booking.slot);
        Ok(())
    }

    async fn list_for_date(&self, date: &str) -> Result<Vec<Booking>, StoreError> {
        sqlx::query_as::<_, Booking>(
            "SELECT client_name, client_phone, booking_date AS date, slot FROM bookings WHERE booking_date = ? ORDER BY slot ASC",
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(StoreError::Query)
    }
}
