use crate::error::BotError;
use crate::notifier::Notifier;
use crate::state::BotState;

/// Fans one message out to every user who has ever created a reminder.
///
/// Returns the reply to show the requester: `None` for non-admin callers
/// (silent no-op), a prompt when the text is empty, and a completion notice
/// otherwise. Per-recipient delivery failures are logged and skipped.
pub async fn broadcast(
    state: &BotState,
    notifier: &dyn Notifier,
    requester_id: i64,
    text: &str,
) -> Result<Option<String>, BotError> {
    if requester_id != state.admin_id {
        return Ok(None);
    }
    let text = text.trim();
    if text.is_empty() {
        return Ok(Some(
            "Enter the broadcast text after /broadcast".to_string(),
        ));
    }

    for user_id in state.store.list_distinct_user_ids().await? {
        if let Err(e) = notifier.notify(user_id, text, false).await {
            log::warn!("Failed to deliver broadcast to user {}: {}", user_id, e);
        }
    }
    Ok(Some("Broadcast finished.".to_string()))
}
