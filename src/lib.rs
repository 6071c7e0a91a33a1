mod types;
mod commands;
mod handlers;
mod error;
mod state;
mod store;
mod notifier;
mod keyboard;

pub use types::*;
pub use commands::*;
pub use handlers::*;
pub use error::*;
pub use state::*;
pub use store::*;
pub use notifier::*;
pub use keyboard::*;
