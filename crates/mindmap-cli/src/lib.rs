//! Mind map front end library exports.
//!
//! # Modules
//!
//! - `cli`: Command-line argument parsing with clap
//! - `session`: Generation state shared by every front end
//! - `shell`: Line-driven interactive form
//! - `commands`: Command implementations (generate, keywords, shell)

pub mod cli;
pub mod commands;
pub mod session;
pub mod shell;

pub use cli::{Cli, Commands, InputArgs};
pub use commands::{handle_generate, handle_keywords, handle_shell, load_settings, GenerateOptions};
pub use session::Session;
pub use shell::{Shell, ShellCommand};
