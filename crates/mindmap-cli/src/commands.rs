//! Command implementations for the mind map front end.
//!
//! Handles:
//! - generate: Extract keywords, build and print the map, optionally export
//! - keywords: Print ranked keywords only
//! - shell: Interactive form over stdin/stdout

use std::fs;
use std::io::{self, Read, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use mindmap_keywords::{RankedKeyword, RuleTokenizer, Tokenizer};
use mindmap_types::{ExportFormat, MindMapError, Settings};

use crate::cli::InputArgs;
use crate::session::Session;
use crate::shell::{write_map, Shell};

/// Flags of the `generate` command.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub title: String,
    pub input: InputArgs,
    pub export: bool,
    pub format: Option<ExportFormat>,
    pub output_dir: Option<String>,
}

/// Load configuration and apply CLI overrides (highest precedence).
pub fn load_settings(config_path: Option<&str>, log_level: Option<&str>) -> Result<Settings> {
    let mut settings = Settings::load(config_path).context("Failed to load configuration")?;
    if let Some(level) = log_level {
        settings.log_level = level.to_string();
    }
    Ok(settings)
}

/// Install the global subscriber. Logs go to stderr so stdout carries results.
fn init_tracing(settings: &Settings) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&settings.log_level)),
        )
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;
    Ok(())
}

/// Settings, logging and the tokenizer: everything every command needs.
fn start(config_path: Option<&str>, log_level: Option<&str>) -> Result<Session> {
    let settings = load_settings(config_path, log_level)?;
    init_tracing(&settings)?;

    debug!(?settings, "Configuration loaded");
    let tokenizer = RuleTokenizer::from_settings(&settings.tokenizer)
        .context("Failed to initialize tokenizer")?;
    let tokenizer: Arc<dyn Tokenizer> = Arc::new(tokenizer);
    Ok(Session::from_settings(&settings, tokenizer))
}

/// Body text from `--text`, `--file`, or standard input.
fn read_input(input: &InputArgs) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }
    if let Some(path) = &input.file {
        return fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read standard input")?;
    Ok(text)
}

fn write_keywords<W: Write>(output: &mut W, keywords: &[RankedKeyword]) -> io::Result<()> {
    for keyword in keywords {
        writeln!(output, "{}\t{}", keyword.keyword, keyword.count)?;
    }
    Ok(())
}

/// Run the `generate` command.
pub fn handle_generate(
    config_path: Option<&str>,
    log_level: Option<&str>,
    options: GenerateOptions,
) -> Result<()> {
    let mut session = start(config_path, log_level)?;
    if let Some(dir) = &options.output_dir {
        session.set_output_dir(dir);
    }

    let text = read_input(&options.input)?;
    let mut stdout = io::stdout().lock();

    let map = session.generate(&options.title, &text)?;
    write_map(&mut stdout, map)?;

    if options.export {
        let path = session.export(options.format)?;
        writeln!(stdout, "Mind map saved to {}", path.display())?;
    }
    Ok(())
}

/// Run the `keywords` command.
pub fn handle_keywords(
    config_path: Option<&str>,
    log_level: Option<&str>,
    input: InputArgs,
) -> Result<()> {
    let session = start(config_path, log_level)?;
    let text = read_input(&input)?;

    let keywords = session.keywords(&text)?;
    if keywords.is_empty() {
        return Err(MindMapError::NoKeywordsFound.into());
    }
    write_keywords(&mut io::stdout().lock(), &keywords)?;
    Ok(())
}

/// Run the interactive shell on stdin/stdout.
pub fn handle_shell(config_path: Option<&str>, log_level: Option<&str>) -> Result<()> {
    let session = start(config_path, log_level)?;
    info!(output_dir = %session.output_dir().display(), "Starting shell");

    let mut shell = Shell::new(session);
    shell
        .run(io::stdin().lock(), &mut io::stdout().lock())
        .context("Shell I/O failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_read_input_prefers_text() {
        let input = InputArgs {
            text: Some("inline text".to_string()),
            file: None,
        };
        assert_eq!(read_input(&input).unwrap(), "inline text");
    }

    #[test]
    fn test_read_input_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("notes.txt");
        fs::write(&path, "Rust ownership rules").unwrap();

        let input = InputArgs {
            text: None,
            file: Some(path),
        };
        assert_eq!(read_input(&input).unwrap(), "Rust ownership rules");
    }

    #[test]
    fn test_read_input_missing_file() {
        let input = InputArgs {
            text: None,
            file: Some(PathBuf::from("/nonexistent/notes.txt")),
        };
        let err = read_input(&input).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }

    #[test]
    fn test_write_keywords() {
        let mut out = Vec::new();
        write_keywords(
            &mut out,
            &[RankedKeyword::new("Data", 4), RankedKeyword::new("Science", 1)],
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Data\t4\nScience\t1\n");
    }

    #[test]
    fn test_load_settings_log_level_override() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_level = \"warn\"\n").unwrap();

        let settings = load_settings(path.to_str(), Some("trace")).unwrap();
        assert_eq!(settings.log_level, "trace");
    }

    #[test]
    fn test_load_settings_missing_file_fails() {
        assert!(load_settings(Some("/nonexistent/mindmap.toml"), None).is_err());
    }
}
