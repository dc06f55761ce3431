//! SQLite-based storage implementation

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{NewSignup, Signup, SignupStats, SignupStore, StoreResult};
use crate::error::WaitlistError;

/// Current schema version
const SCHEMA_VERSION: i32 = 1;

/// SQLite-backed signup store
pub struct SqliteSignupStore {
    conn: Mutex<Connection>,
}

impl SqliteSignupStore {
    /// Open or create a SQLite database at the given path
    pub fn open(path: &str) -> Result<Self, WaitlistError> {
        let conn = Connection::open(path).map_err(|e| WaitlistError::Store(e.to_string()))?;

        Self::migrate(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run database migrations
    fn migrate(conn: &Connection) -> Result<(), WaitlistError> {
        let current_version = Self::get_schema_version(conn)?;

        if current_version < SCHEMA_VERSION {
            tracing::info!(
                current = current_version,
                target = SCHEMA_VERSION,
                "Running database migrations"
            );

            if current_version < 1 {
                Self::migrate_v1(conn)?;
            }

            conn.execute(
                "INSERT OR REPLACE INTO schema_version (version) VALUES (?1)",
                params![SCHEMA_VERSION],
            )
            .map_err(|e| WaitlistError::Store(e.to_string()))?;

            tracing::info!("Database migrations complete");
        }

        Ok(())
    }

    /// Get current schema version (0 if no schema exists)
    fn get_schema_version(conn: &Connection) -> Result<i32, WaitlistError> {
        let table_exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
                [],
                |row| row.get(0),
            )
            .map_err(|e| WaitlistError::Store(e.to_string()))?;

        if !table_exists {
            return Ok(0);
        }

        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| {
            row.get::<_, Option<i32>>(0).map(|v| v.unwrap_or(0))
        })
        .map_err(|e| WaitlistError::Store(e.to_string()))
    }

    /// Migration to version 1: initial schema
    fn migrate_v1(conn: &Connection) -> Result<(), WaitlistError> {
        conn.execute_batch(
            r#"
            -- Schema version tracking
            CREATE TABLE IF NOT EXISTS schema_version (
                version INTEGER PRIMARY KEY
            );

            -- Waitlist signups; email is the natural key, stored lowercase
            CREATE TABLE IF NOT EXISTS early_access_signups (
                email TEXT PRIMARY KEY,
                confirmation_token TEXT NOT NULL,
                confirmed INTEGER NOT NULL DEFAULT 0,
                confirmed_at TEXT,
                created_at TEXT NOT NULL,
                source TEXT,
                user_agent TEXT,
                ip_address TEXT
            );
            "#,
        )
        .map_err(|e| WaitlistError::Store(e.to_string()))?;

        Ok(())
    }

    fn signup_from_row(row: &Row<'_>) -> rusqlite::Result<Signup> {
        let email: String = row.get(0)?;
        let confirmation_token: String = row.get(1)?;
        let confirmed: i32 = row.get(2)?;
        let confirmed_at: Option<String> = row.get(3)?;
        let created_at: String = row.get(4)?;
        let source: Option<String> = row.get(5)?;
        let user_agent: Option<String> = row.get(6)?;
        let ip_address: Option<String> = row.get(7)?;

        Ok(Signup {
            email,
            confirmation_token,
            confirmed: confirmed != 0,
            confirmed_at: confirmed_at.and_then(|s| {
                DateTime::parse_from_rfc3339(&s)
                    .map(|dt| dt.with_timezone(&Utc))
                    .ok()
            }),
            created_at: DateTime::parse_from_rfc3339(&created_at)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now()),
            source,
            user_agent,
            ip_address,
        })
    }
}

impl SignupStore for SqliteSignupStore {
    fn create(&self, new: NewSignup) -> StoreResult<Signup> {
        let conn = self.conn.lock().unwrap();
        let created_at = Utc::now();

        conn.execute(
            "INSERT INTO early_access_signups
             (email, confirmation_token, confirmed, created_at, source, user_agent, ip_address)
             VALUES (?1, ?2, 0, ?3, ?4, ?5, ?6)",
            params![
                new.email,
                new.confirmation_token,
                created_at.to_rfc3339(),
                new.source,
                new.user_agent,
                new.ip_address,
            ],
        )
        .map_err(|e| {
            if let rusqlite::Error::SqliteFailure(ref err, _) = e {
                if err.code == rusqlite::ErrorCode::ConstraintViolation {
                    return WaitlistError::DuplicateSignup;
                }
            }
            WaitlistError::Store(e.to_string())
        })?;

        Ok(Signup {
            email: new.email,
            confirmation_token: new.confirmation_token,
            confirmed: false,
            confirmed_at: None,
            created_at,
            source: new.source,
            user_agent: new.user_agent,
            ip_address: new.ip_address,
        })
    }

    fn find_by_email(&self, email: &str) -> StoreResult<Option<Signup>> {
        let normalized = email.to_lowercase();
        let conn = self.conn.lock().unwrap();

        conn.query_row(
            "SELECT email, confirmation_token, confirmed, confirmed_at, created_at,
                    source, user_agent, ip_address
             FROM early_access_signups WHERE email = ?1",
            params![normalized],
            Self::signup_from_row,
        )
        .optional()
        .map_err(|e| WaitlistError::Store(e.to_string()))
    }

    fn confirm(&self, email: &str, token: &str) -> StoreResult<()> {
        let normalized = email.to_lowercase();
        let conn = self.conn.lock().unwrap();
        let now = Utc::now().to_rfc3339();

        // Single conditional update; the confirmed = 0 guard makes the token
        // single-use even under concurrent requests.
        let rows_affected = conn
            .execute(
                "UPDATE early_access_signups
                 SET confirmed = 1, confirmed_at = ?1
                 WHERE email = ?2 AND confirmation_token = ?3 AND confirmed = 0",
                params![now, normalized, token],
            )
            .map_err(|e| WaitlistError::Store(e.to_string()))?;

        if rows_affected == 0 {
            return Err(WaitlistError::InvalidConfirmation);
        }

        Ok(())
    }

    fn stats(&self) -> StoreResult<SignupStats> {
        let conn = self.conn.lock().unwrap();
        let cutoff = (Utc::now() - chrono::Duration::hours(24)).to_rfc3339();

        let (total, confirmed): (i64, i64) = conn
            .query_row(
                "SELECT COUNT(*), COALESCE(SUM(confirmed), 0) FROM early_access_signups",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .map_err(|e| WaitlistError::Store(e.to_string()))?;

        let recent: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM early_access_signups WHERE created_at >= ?1",
                params![cutoff],
                |row| row.get(0),
            )
            .map_err(|e| WaitlistError::Store(e.to_string()))?;

        Ok(SignupStats {
            total: total as u64,
            confirmed: confirmed as u64,
            recent: recent as u64,
        })
    }
}
