mod broadcast;
mod callback;
mod command;
mod conversation;
mod scheduler;

pub use broadcast::*;
pub use callback::*;
pub use command::*;
pub use conversation::*;
pub use scheduler::*;
