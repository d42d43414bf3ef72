//! CLI argument parsing for the mind map generator.
//!
//! CLI flags override every other configuration source.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use mindmap_types::ExportFormat;

/// Mind Map Generator
///
/// Extracts the key nouns from a block of text and lays them out as a
/// star-shaped mind map around a title.
#[derive(Parser, Debug)]
#[command(name = "mindmap")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default ~/.config/mind-map/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Where the body text comes from. Standard input when neither is given.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Body text
    #[arg(short, long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Read body text from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

/// Generator commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a mind map and print its keywords and layout
    Generate {
        /// Central topic (blank uses the configured default title)
        #[arg(long, default_value = "")]
        title: String,

        #[command(flatten)]
        input: InputArgs,

        /// Write the mind map to a file
        #[arg(short, long)]
        export: bool,

        /// Export format (svg, json)
        #[arg(long)]
        format: Option<ExportFormat>,

        /// Override output directory
        #[arg(short, long)]
        output_dir: Option<String>,
    },

    /// Print the ranked keywords only
    Keywords {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Interactive line-driven session
    Shell,
}
