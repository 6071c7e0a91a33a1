use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

mod conversation;
pub use conversation::*;

/// Format users type date/times in: `2024-01-01 10:00`.
pub const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";
/// Format `remind_at` is persisted in: local ISO-8601, no offset.
pub const REMIND_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reminder {
    pub id: i64,
    pub user_id: i64,
    pub reminder_text: String,
    pub remind_at: String,
    pub tz: String,
}

impl Reminder {
    /// The UTC instant this reminder fires at: `remind_at` interpreted as
    /// local time in `tz`. Ambiguous local times (DST fold) map to the
    /// earliest instant; nonexistent local times and unparseable rows yield
    /// `None` and are left to the stale-pruning pass.
    pub fn due_at(&self) -> Option<DateTime<Utc>> {
        let tz: Tz = self.tz.parse().ok()?;
        let local = NaiveDateTime::parse_from_str(&self.remind_at, REMIND_AT_FORMAT).ok()?;
        match tz.from_local_datetime(&local) {
            LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
            LocalResult::None => None,
        }
    }

    /// Renders `remind_at` the same way the user typed it.
    pub fn local_display(&self) -> String {
        NaiveDateTime::parse_from_str(&self.remind_at, REMIND_AT_FORMAT)
            .map(|dt| dt.format(DATETIME_INPUT_FORMAT).to_string())
            .unwrap_or_else(|_| self.remind_at.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserPreference {
    pub user_id: i64,
    pub timezone: String,
}
