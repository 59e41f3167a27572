mod chat_panel;
mod file_intake;

pub use chat_panel::ChatPanel;
pub use file_intake::FileIntake;
