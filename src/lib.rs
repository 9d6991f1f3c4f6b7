//! sway-setup library
//!
//! Core of the interactive FreeBSD Sway setup menu: the four setup actions,
//! the bounded command runner they use, and the terminal UI around them.

pub mod actions;
pub mod app;
pub mod cli;
pub mod command_runner;
pub mod command_traits;
pub mod commands;
pub mod components;
pub mod config;
pub mod error;
pub mod process_guard;
pub mod theme;
pub mod ui;

// Re-export main types for convenience
pub use actions::{ActionContext, SetupAction, StatusKind, StatusMessage, dispatch};
pub use app::{App, AppState, KeyOutcome};
pub use command_runner::CommandRunner;
pub use command_traits::CommandArgs;
pub use config::SetupConfig;
pub use error::{ActionError, CommandError, SwaySetupError};
pub use process_guard::{ChildRegistry, CommandProcessGroup, ProcessGuard};
pub use theme::Theme;
