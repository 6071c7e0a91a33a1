use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Start the bot and show the menu")]
    Start,
    #[command(description = "Add a new reminder")]
    New,
    #[command(description = "List your reminders")]
    List,
    #[command(description = "Set your timezone")]
    Settings,
    #[command(description = "Message every reminder user (admin only)")]
    Broadcast(String),
    #[command(description = "Show help message")]
    Help,
}
