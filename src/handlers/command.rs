use std::error::Error;
use std::sync::Arc;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::commands::Command;
use crate::handlers::{
    begin_reminder_flow, begin_timezone_flow, broadcast, reminder_list_text,
};
use crate::keyboard::main_menu;
use crate::notifier::TelegramNotifier;
use crate::state::BotState;

const WELCOME_TEXT: &str = "Welcome to the reminder bot! 🚀✨\n\n\
Save important tasks and events here, and I'll ping you right on time.\n\n\
📌 How it works:\n\
Add a reminder with /new (or the button below).\n\
Enter the date and time, then the text.\n\
Get a notification at the right moment!\n\n\
You can also:\n\
🔹 View your reminders with /list\n\
🔹 Set your timezone with /settings\n\n\
Start now and never forget a thing! 😉";

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<BotState>,
) -> Result<(), Box<dyn Error + Send + Sync>> {
    let user_id = msg.chat.id.0;
    match cmd {
        Command::Start => {
            bot.send_message(msg.chat.id, WELCOME_TEXT)
                .reply_markup(main_menu())
                .await?;
        }
        Command::New => {
            let prompt = begin_reminder_flow(&state, user_id).await;
            bot.send_message(msg.chat.id, prompt).await?;
        }
        Command::List => {
            let listing = reminder_list_text(&state, user_id).await?;
            bot.send_message(msg.chat.id, listing).await?;
        }
        Command::Settings => {
            let prompt = begin_timezone_flow(&state, user_id).await;
            bot.send_message(msg.chat.id, prompt).await?;
        }
        Command::Broadcast(text) => {
            let notifier = TelegramNotifier::new(bot.clone());
            if let Some(reply) = broadcast(&state, &notifier, user_id, &text).await? {
                bot.send_message(msg.chat.id, reply).await?;
            }
        }
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
    }
    Ok(())
}
