use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

pub fn main_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![InlineKeyboardButton::callback(
            "📝 Add reminder",
            "add_reminder",
        )],
        vec![InlineKeyboardButton::callback(
            "📋 My reminders",
            "list_reminders",
        )],
        vec![InlineKeyboardButton::callback("⚙️ Settings", "settings")],
        vec![InlineKeyboardButton::callback(
            "✒️ Buy subscription",
            "buy_subscription",
        )],
    ])
}
