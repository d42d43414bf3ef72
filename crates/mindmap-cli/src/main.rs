//! Mind Map Generator
//!
//! Turns a block of text into a star-shaped mind map of its key nouns.
//!
//! # Usage
//!
//! ```bash
//! mindmap generate --title AI --text "Machine learning uses data." [--export]
//! mindmap keywords --file notes.txt
//! mindmap shell
//! ```
//!
//! # Configuration
//!
//! Configuration is loaded in order (later sources override earlier):
//! 1. Built-in defaults
//! 2. Config file (~/.config/mind-map/config.toml)
//! 3. Environment variables (MINDMAP_*)
//! 4. CLI flags

use anyhow::Result;
use clap::Parser;

use mindmap_cli::{handle_generate, handle_keywords, handle_shell, Cli, Commands, GenerateOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config.as_deref();
    let log_level = cli.log_level.as_deref();

    match cli.command {
        Commands::Generate {
            title,
            input,
            export,
            format,
            output_dir,
        } => {
            handle_generate(
                config,
                log_level,
                GenerateOptions {
                    title,
                    input,
                    export,
                    format,
                    output_dir,
                },
            )?;
        }
        Commands::Keywords { input } => {
            handle_keywords(config, log_level, input)?;
        }
        Commands::Shell => {
            handle_shell(config, log_level)?;
        }
    }

    Ok(())
}
