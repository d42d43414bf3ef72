//! End-to-end test infrastructure for the mind map generator.
//!
//! Provides a shared TestHarness and the reference inputs used across the
//! text-to-export pipeline tests.

use std::path::Path;
use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use mindmap_cli::Session;
use mindmap_keywords::{MockTokenizer, RuleTokenizer, Tokenizer};
use mindmap_types::{PosTag, Settings};

/// Body text of the reference scenario.
pub const SCENARIO_TEXT: &str = "Data science involves data analysis and data visualization. \
                                 Machine learning uses data.";

/// Title of the reference scenario.
pub const SCENARIO_TITLE: &str = "AI";

/// Keywords the reference scenario must produce, in rank order.
pub const SCENARIO_KEYWORDS: [&str; 6] = [
    "Data",
    "Science",
    "Analysis",
    "Visualization",
    "Machine",
    "Learning",
];

/// Input made only of stop words.
pub const STOP_WORDS_ONLY: &str = "the a an is of";

/// Mock tagged the way a statistical English model tags the scenario.
pub fn scenario_tokenizer() -> MockTokenizer {
    MockTokenizer::new()
        .with_tag("involves", PosTag::Verb)
        .with_tag("uses", PosTag::Verb)
        .with_stop("and", PosTag::Cconj)
        .with_stop("the", PosTag::Det)
        .with_stop("a", PosTag::Det)
        .with_stop("an", PosTag::Det)
        .with_stop("is", PosTag::Aux)
        .with_stop("of", PosTag::Adp)
}

/// Fixed export timestamp: 2024-01-15 09:30:00.
pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .and_then(|d| d.and_hms_opt(9, 30, 0))
        .unwrap_or_default()
}

/// Shared test harness for E2E tests.
///
/// Owns a temp output directory and builds sessions that export into it.
pub struct TestHarness {
    /// Keeps temp dir alive for the lifetime of the harness
    pub temp_dir: tempfile::TempDir,
    pub settings: Settings,
}

impl TestHarness {
    /// Create a new test harness with default settings and a temp output dir.
    pub fn new() -> Self {
        let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
        let mut settings = Settings::default();
        settings.output_dir = temp_dir.path().to_string_lossy().into_owned();
        Self { temp_dir, settings }
    }

    pub fn output_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Session backed by the given tokenizer.
    pub fn session_with(&self, tokenizer: Arc<dyn Tokenizer>) -> Session {
        Session::from_settings(&self.settings, tokenizer)
    }

    /// Session backed by the scripted scenario tokenizer.
    pub fn mock_session(&self) -> Session {
        self.session_with(Arc::new(scenario_tokenizer()))
    }

    /// Session backed by the built-in rule tokenizer.
    pub fn rule_session(&self) -> Session {
        self.session_with(Arc::new(RuleTokenizer::new()))
    }

    /// Names of the files currently in the output directory.
    pub fn exported_files(&self) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(self.output_dir())
            .expect("Failed to read output dir")
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect();
        names.sort();
        names
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
