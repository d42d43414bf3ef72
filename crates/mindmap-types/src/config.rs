//! Configuration loading for mind-map.
//!
//! Layered config: defaults -> config file -> env vars -> CLI flags.
//! The default config file lives at `~/.config/mind-map/config.toml`
//! (platform equivalent via `directories`).

use config::{Config, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::MindMapError;

/// Title used when the user leaves the title blank.
pub const DEFAULT_TITLE: &str = "Mind Map";

/// Keyword extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionSettings {
    /// Maximum number of keywords kept per extraction
    #[serde(default = "default_max_keywords")]
    pub max_keywords: usize,

    /// Minimum surface-form length in characters
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,
}

fn default_max_keywords() -> usize {
    15
}

fn default_min_chars() -> usize {
    3
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        Self {
            max_keywords: default_max_keywords(),
            min_chars: default_min_chars(),
        }
    }
}

/// Force-directed layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Seed for the initial random placement
    #[serde(default = "default_layout_seed")]
    pub seed: u64,

    /// Optimal distance between nodes
    #[serde(default = "default_k")]
    pub k: f64,

    /// Maximum number of simulation steps
    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// Max absolute coordinate after rescaling
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_layout_seed() -> u64 {
    42
}

fn default_k() -> f64 {
    1.3
}

fn default_iterations() -> usize {
    50
}

fn default_scale() -> f64 {
    1.0
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            seed: default_layout_seed(),
            k: default_k(),
            iterations: default_iterations(),
            scale: default_scale(),
        }
    }
}

/// Tokenizer model settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenizerSettings {
    /// Extra lexicon file (`word<TAB>TAG` per line) loaded at startup.
    /// A configured but unreadable file is fatal.
    #[serde(default)]
    pub lexicon_path: Option<String>,
}

/// Export file format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Vector drawing of the mind map
    #[default]
    Svg,
    /// Graph, layout and keywords as JSON
    Json,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Json => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(ExportFormat::Svg),
            "json" => Ok(ExportFormat::Json),
            other => Err(format!("unknown export format '{other}' (expected svg or json)")),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderSettings {
    /// Format used when export does not name one
    #[serde(default)]
    pub format: ExportFormat,

    /// Seed for leaf color assignment
    #[serde(default = "default_color_seed")]
    pub color_seed: u64,

    /// Canvas width in pixels
    #[serde(default = "default_width")]
    pub width: u32,

    /// Canvas height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_color_seed() -> u64 {
    42
}

fn default_width() -> u32 {
    1400
}

fn default_height() -> u32 {
    1200
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            color_seed: default_color_seed(),
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Hub label used for a blank title
    #[serde(default = "default_title")]
    pub default_title: String,

    /// Directory export files are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    #[serde(default)]
    pub extraction: ExtractionSettings,

    #[serde(default)]
    pub layout: LayoutSettings,

    #[serde(default)]
    pub tokenizer: TokenizerSettings,

    #[serde(default)]
    pub render: RenderSettings,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            default_title: default_title(),
            output_dir: default_output_dir(),
            extraction: ExtractionSettings::default(),
            layout: LayoutSettings::default(),
            tokenizer: TokenizerSettings::default(),
            render: RenderSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings with layered precedence:
    /// 1. Built-in defaults
    /// 2. Config file (~/.config/mind-map/config.toml)
    /// 3. CLI-specified config file (optional)
    /// 4. Environment variables (MINDMAP_*, nested keys joined with `__`)
    ///
    /// CLI flags should be applied by the caller after this returns.
    pub fn load(cli_config_path: Option<&str>) -> Result<Self, MindMapError> {
        let config_dir = ProjectDirs::from("", "", "mind-map")
            .map(|p| p.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));

        let default_config_path = config_dir.join("config");

        let mut builder = Config::builder()
            // 1. Built-in defaults
            .set_default("log_level", default_log_level())
            .map_err(|e| MindMapError::Config(e.to_string()))?
            .set_default("default_title", default_title())
            .map_err(|e| MindMapError::Config(e.to_string()))?
            .set_default("output_dir", default_output_dir())
            .map_err(|e| MindMapError::Config(e.to_string()))?
            .set_default("extraction.max_keywords", default_max_keywords() as i64)
            .map_err(|e| MindMapError::Config(e.to_string()))?
            .set_default("layout.seed", default_layout_seed() as i64)
            .map_err(|e| MindMapError::Config(e.to_string()))?
            .set_default("layout.k", default_k())
            .map_err(|e| MindMapError::Config(e.to_string()))?
            // 2. Default config file
            .add_source(File::with_name(&default_config_path.to_string_lossy()).required(false));

        // 3. CLI-specified config file (higher precedence than default)
        if let Some(path) = cli_config_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        // 4. Environment variables, e.g. MINDMAP_LOG_LEVEL, MINDMAP_LAYOUT__SEED
        builder = builder.add_source(
            Environment::with_prefix("MINDMAP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| MindMapError::Config(e.to_string()))?;

        let settings: Settings = config
            .try_deserialize()
            .map_err(|e| MindMapError::Config(e.to_string()))?;

        settings.validate().map_err(MindMapError::Config)?;
        Ok(settings)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.extraction.max_keywords == 0 {
            return Err("extraction.max_keywords must be > 0".to_string());
        }
        if self.layout.iterations == 0 {
            return Err("layout.iterations must be > 0".to_string());
        }
        if self.layout.k.is_nan() || self.layout.k <= 0.0 {
            return Err(format!("layout.k must be > 0, got {}", self.layout.k));
        }
        if self.layout.scale.is_nan() || self.layout.scale <= 0.0 {
            return Err(format!("layout.scale must be > 0, got {}", self.layout.scale));
        }
        if self.render.width == 0 || self.render.height == 0 {
            return Err("render.width and render.height must be > 0".to_string());
        }
        Ok(())
    }

    /// Resolve a user-entered title, falling back to `default_title` when blank.
    pub fn resolve_title(&self, title: &str) -> String {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            self.default_title.clone()
        } else {
            trimmed.to_string()
        }
    }

    /// Expand ~ in output_dir to the home directory
    pub fn expanded_output_dir(&self) -> PathBuf {
        if let Some(rest) = self.output_dir.strip_prefix("~/") {
            if let Some(home) = directories::BaseDirs::new().map(|d| d.home_dir().to_path_buf()) {
                return home.join(rest);
            }
        }
        PathBuf::from(&self.output_dir)
    }
}
