use async_trait::async_trait;
use std::error::Error;
use teloxide::prelude::*;
use teloxide::types::ParseMode;

/// Outbound message delivery seam. The scheduler tick and the broadcast loop
/// go through this trait so per-recipient failures can be caught and
/// discarded by the caller, and so tests can record deliveries.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(
        &self,
        user_id: i64,
        text: &str,
        markdown: bool,
    ) -> Result<(), Box<dyn Error + Send + Sync>>;
}

pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(
        &self,
        user_id: i64,
        text: &str,
        markdown: bool,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        let mut request = self.bot.send_message(ChatId(user_id), text);
        if markdown {
            request = request.parse_mode(ParseMode::Markdown);
        }
        request.await?;
        Ok(())
    }
}
