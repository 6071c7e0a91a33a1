use chrono::NaiveDateTime;
use chrono_tz::Tz;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::Row;

use crate::error::BotError;
use crate::types::{Reminder, UserPreference, REMIND_AT_FORMAT};

/// SQLite-backed store for reminders and user timezone preferences.
///
/// The pool is capped at a single connection, so every operation is
/// serialized: a create from a conversation handler and a scan-then-delete
/// from the scheduler can never interleave mid-statement.
pub struct ReminderStore {
    pool: SqlitePool,
}

impl ReminderStore {
    pub async fn connect(url: &str) -> Result<Self, BotError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(url)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS reminders (
                id INTEGER PRIMARY KEY,
                user_id INTEGER,
                reminder_text TEXT,
                remind_at TEXT,
                tz TEXT
            )",
        )
        .execute(&pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                user_id INTEGER PRIMARY KEY,
                timezone TEXT DEFAULT 'UTC'
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub async fn create_reminder(
        &self,
        user_id: i64,
        text: &str,
        remind_at: NaiveDateTime,
        tz: Tz,
    ) -> Result<i64, BotError> {
        let result = sqlx::query(
            "INSERT INTO reminders (user_id, reminder_text, remind_at, tz) VALUES (?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(text)
        .bind(remind_at.format(REMIND_AT_FORMAT).to_string())
        .bind(tz.name())
        .execute(&self.pool)
        .await?;
        Ok(result.last_insert_rowid())
    }

    pub async fn list_by_user(&self, user_id: i64) -> Result<Vec<Reminder>, BotError> {
        let reminders = sqlx::query_as::<_, Reminder>(
            "SELECT id, user_id, reminder_text, remind_at, tz FROM reminders WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(reminders)
    }

    pub async fn list_all(&self) -> Result<Vec<Reminder>, BotError> {
        let reminders = sqlx::query_as::<_, Reminder>(
            "SELECT id, user_id, reminder_text, remind_at, tz FROM reminders",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(reminders)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), BotError> {
        sqlx::query("DELETE FROM reminders WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Bulk-deletes reminders whose stored local `remind_at` predates the
    /// cutoff. The comparison is on the naive local string, ignoring `tz`.
    pub async fn delete_older_than(&self, cutoff: NaiveDateTime) -> Result<u64, BotError> {
        let result = sqlx::query("DELETE FROM reminders WHERE remind_at < ?")
            .bind(cutoff.format(REMIND_AT_FORMAT).to_string())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// The user's configured timezone, defaulting to UTC when none is set or
    /// a stored name is no longer a known zone.
    pub async fn get_timezone(&self, user_id: i64) -> Result<Tz, BotError> {
        let pref = sqlx::query_as::<_, UserPreference>(
            "SELECT user_id, timezone FROM users WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(pref) = pref else {
            return Ok(Tz::UTC);
        };
        Ok(pref.timezone.parse().unwrap_or_else(|_| {
            log::warn!(
                "Stored timezone {:?} for user {} is not a known zone, using UTC",
                pref.timezone,
                user_id
            );
            Tz::UTC
        }))
    }

    pub async fn upsert_timezone(&self, user_id: i64, tz: Tz) -> Result<(), BotError> {
        sqlx::query("REPLACE INTO users (user_id, timezone) VALUES (?, ?)")
            .bind(user_id)
            .bind(tz.name())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Every user who has at least one reminder right now. Users who only
    /// set a timezone and never created a reminder are not included.
    pub async fn list_distinct_user_ids(&self) -> Result<Vec<i64>, BotError> {
        let rows = sqlx::query("SELECT DISTINCT user_id FROM reminders")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(|row| row.get::<i64, _>(0)).collect())
    }
}
