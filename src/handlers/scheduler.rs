use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::sync::Arc;
use tokio::time::{interval, Duration};

use crate::error::BotError;
use crate::notifier::Notifier;
use crate::state::BotState;
use crate::store::ReminderStore;

const TICK_SECS: u64 = 30;
const STALE_AFTER_DAYS: i64 = 7;

/// One scheduler pass. Delivers every reminder that is due at `now` and
/// deletes it regardless of the delivery outcome, so a reminder gets at most
/// one delivery attempt. A failed send is logged and discarded; it never
/// stops the rest of the batch. Finally prunes rows whose local `remind_at`
/// is more than seven days old, which is where undeliverable rows end up.
pub async fn run_tick(
    store: &ReminderStore,
    notifier: &dyn Notifier,
    now: DateTime<Utc>,
) -> Result<(), BotError> {
    for reminder in store.list_all().await? {
        let Some(due) = reminder.due_at() else {
            continue;
        };
        if now >= due {
            let message = format!("⏰ Reminder: *{}*", reminder.reminder_text);
            if let Err(e) = notifier.notify(reminder.user_id, &message, true).await {
                log::error!(
                    "Failed to deliver reminder {} to user {}: {}",
                    reminder.id,
                    reminder.user_id,
                    e
                );
            }
            store.delete_by_id(reminder.id).await?;
        }
    }

    let cutoff = (now - ChronoDuration::days(STALE_AFTER_DAYS)).naive_utc();
    let pruned = store.delete_older_than(cutoff).await?;
    if pruned > 0 {
        log::info!("Pruned {} stale reminders", pruned);
    }
    Ok(())
}

/// Periodic due-reminder loop, spawned from `main`. Tick errors are logged
/// and the loop keeps running.
pub async fn start_reminder_scheduler(state: Arc<BotState>, notifier: Arc<dyn Notifier>) {
    let mut ticker = interval(Duration::from_secs(TICK_SECS));
    loop {
        ticker.tick().await;
        if let Err(e) = run_tick(&state.store, notifier.as_ref(), Utc::now()).await {
            log::error!("Scheduler tick failed: {}", e);
        }
    }
}
