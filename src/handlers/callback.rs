use std::error::Error;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;

use crate::handlers::{begin_reminder_flow, begin_timezone_flow, reminder_list_text};
use crate::state::BotState;

pub async fn callback_handler(
    bot: Bot,
    query: CallbackQuery,
    state: Arc<BotState>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    if let Some(data) = query.data.as_deref() {
        let user_id = query.from.id.0 as i64;
        let chat_id = ChatId(user_id);
        match data {
            "add_reminder" => {
                let prompt = begin_reminder_flow(&state, user_id).await;
                bot.send_message(chat_id, prompt).await?;
            }
            "list_reminders" => {
                let listing = reminder_list_text(&state, user_id).await?;
                bot.send_message(chat_id, listing).await?;
            }
            "settings" => {
                let prompt = begin_timezone_flow(&state, user_id).await;
                bot.send_message(chat_id, prompt).await?;
            }
            // Placeholder button, only acknowledged below.
            "buy_subscription" => {}
            _ => {}
        }
    }
    bot.answer_callback_query(query.id).await?;
    Ok(())
}
