use std::env;
use std::error::Error;
use std::sync::Arc;
use teloxide::prelude::*;

use crate::commands::Command;
use crate::error::BotError;
use crate::handlers::{callback_handler, command_handler, message_handler, start_reminder_scheduler};
use crate::notifier::{Notifier, TelegramNotifier};
use crate::state::BotState;
use crate::store::ReminderStore;

mod types;
mod commands;
mod handlers;
mod error;
mod state;
mod store;
mod notifier;
mod keyboard;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    pretty_env_logger::init();
    log::info!("Starting reminder bot...");

    // Initialize bot with token from environment
    let bot = Bot::from_env();

    let admin_id: i64 = env::var("ADMIN_ID")
        .map_err(|_| BotError::Config("ADMIN_ID is not set".to_string()))?
        .parse()
        .map_err(|_| BotError::Config("ADMIN_ID must be a numeric user id".to_string()))?;

    // Store unavailability at startup is fatal.
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:reminders.db?mode=rwc".to_string());
    let store = ReminderStore::connect(&database_url).await?;
    log::info!("Connected to reminder store at {}", database_url);

    let state = Arc::new(BotState::new(store, admin_id));

    // Spawn the due-reminder scheduler
    let scheduler_state = state.clone();
    let scheduler_notifier: Arc<dyn Notifier> = Arc::new(TelegramNotifier::new(bot.clone()));
    tokio::spawn(async move {
        start_reminder_scheduler(scheduler_state, scheduler_notifier).await;
    });

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(command_handler),
        )
        .branch(Update::filter_message().endpoint(message_handler))
        .branch(Update::filter_callback_query().endpoint(callback_handler));

    log::info!("Starting command dispatching...");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![state])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
