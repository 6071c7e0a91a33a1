use std::fmt;

#[derive(Debug)]
pub enum BotError {
    Db(sqlx::Error),
    Config(String),
}

impl std::error::Error for BotError {}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BotError::Db(e) => write!(f, "Database error: {}", e),
            BotError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl From<sqlx::Error> for BotError {
    fn from(err: sqlx::Error) -> Self {
        BotError::Db(err)
    }
}
