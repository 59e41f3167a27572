//! Component state machines, free of DOM and network calls.

mod chat;
mod file_intake;

pub use chat::{ChatController, ChatEntry, Role};
pub use file_intake::FileIntakeController;
