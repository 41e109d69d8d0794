//! Cross-frontend primitives for presenting the game.
//!
//! Houses the frontend trait, shared UI configuration and the panel snapshot
//! that both the CLI and future graphical clients render from.
pub mod config;
pub mod frontend;
pub mod view_model;

pub use config::FrontendConfig;
pub use frontend::Frontend;
pub use runtime::{MessageEntry, MessageLevel, MessageLog};
pub use view_model::{LogLine, PanelSnapshot};
