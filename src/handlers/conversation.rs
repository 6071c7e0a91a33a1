use chrono::NaiveDateTime;
use chrono_tz::Tz;
use std::error::Error;
use std::sync::Arc;
use teloxide::prelude::*;

use crate::error::BotError;
use crate::state::BotState;
use crate::types::{ConversationState, DATETIME_INPUT_FORMAT};

/// Starts the create-reminder flow and returns the prompt to send.
pub async fn begin_reminder_flow(state: &BotState, user_id: i64) -> String {
    state
        .set_conversation(user_id, ConversationState::AwaitingReminderDateTime)
        .await;
    "Enter the reminder date and time as YYYY-MM-DD HH:MM".to_string()
}

/// Starts the timezone-settings flow and returns the prompt to send.
pub async fn begin_timezone_flow(state: &BotState, user_id: i64) -> String {
    state
        .set_conversation(user_id, ConversationState::AwaitingTimezone)
        .await;
    "Enter your timezone (e.g. Europe/Moscow)".to_string()
}

pub async fn reminder_list_text(state: &BotState, user_id: i64) -> Result<String, BotError> {
    let reminders = state.store.list_by_user(user_id).await?;
    if reminders.is_empty() {
        return Ok("You have no active reminders.".to_string());
    }
    let mut msg = String::from("Your reminders:\n");
    for reminder in &reminders {
        msg.push_str(&format!(
            "\n🕒 {} — {}",
            reminder.local_display(),
            reminder.reminder_text
        ));
    }
    Ok(msg)
}

/// Applies one inbound free-text message against the sender's current
/// conversation state and returns the reply to send, if any. Malformed input
/// never advances the state; it only re-prompts. Free text from an idle user
/// is ignored.
pub async fn advance_conversation(
    state: &BotState,
    user_id: i64,
    text: &str,
) -> Result<Option<String>, BotError> {
    match state.conversation(user_id).await {
        ConversationState::Idle => Ok(None),
        ConversationState::AwaitingReminderDateTime => {
            match NaiveDateTime::parse_from_str(text.trim(), DATETIME_INPUT_FORMAT) {
                Ok(remind_at) => {
                    let tz = state.store.get_timezone(user_id).await?;
                    state
                        .set_conversation(
                            user_id,
                            ConversationState::AwaitingReminderText { remind_at, tz },
                        )
                        .await;
                    Ok(Some("Now enter the reminder text".to_string()))
                }
                Err(_) => Ok(Some(
                    "Invalid date format. Try again: YYYY-MM-DD HH:MM".to_string(),
                )),
            }
        }
        ConversationState::AwaitingReminderText { remind_at, tz } => {
            state
                .store
                .create_reminder(user_id, text, remind_at, tz)
                .await?;
            state
                .set_conversation(user_id, ConversationState::Idle)
                .await;
            Ok(Some("Reminder saved!".to_string()))
        }
        ConversationState::AwaitingTimezone => match text.trim().parse::<Tz>() {
            Ok(tz) => {
                state.store.upsert_timezone(user_id, tz).await?;
                state
                    .set_conversation(user_id, ConversationState::Idle)
                    .await;
                Ok(Some("Timezone updated!".to_string()))
            }
            Err(_) => Ok(Some(
                "Unknown timezone. Try again (e.g. Europe/Moscow)".to_string(),
            )),
        },
    }
}

pub async fn message_handler(
    bot: Bot,
    msg: Message,
    state: Arc<BotState>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    if let Some(reply) = advance_conversation(&state, msg.chat.id.0, text).await? {
        bot.send_message(msg.chat.id, reply).await?;
    }
    Ok(())
}
