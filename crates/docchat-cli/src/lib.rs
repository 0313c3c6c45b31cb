//! CLI interface for DocChat

mod session;
mod ui;

pub use session::{ChatSession, SessionCommand};
pub use ui::{Input, clear_screen, display_banner, read_input};

// Re-export core types
pub use docchat_core::{Error, Result};
