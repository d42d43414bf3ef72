//! Error types for the mind-map system.

use thiserror::Error;

/// Unified error type for mind-map operations.
///
/// `EmptyInput`, `NoKeywordsFound` and `ExportBeforeGenerate` are
/// user-recoverable: the caller reports them and waits for the next action.
/// `TokenizerInit` is only produced while starting up.
#[derive(Debug, Error)]
pub enum MindMapError {
    /// Body text was blank
    #[error("Please enter some text.")]
    EmptyInput,

    /// Extraction ran but no token passed the selection predicate
    #[error("No valid keywords found.")]
    NoKeywordsFound,

    /// Export requested with nothing generated yet
    #[error("Generate a mind map before exporting.")]
    ExportBeforeGenerate,

    /// The linguistic model could not be loaded
    #[error("Tokenizer initialization failed: {0}")]
    TokenizerInit(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Rendering error
    #[error("Render error: {0}")]
    Render(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MindMapError {
    /// Whether the user can recover by re-entering text or regenerating.
    pub fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            MindMapError::EmptyInput
                | MindMapError::NoKeywordsFound
                | MindMapError::ExportBeforeGenerate
        )
    }

    /// Short heading used when reporting the error to a user.
    pub fn heading(&self) -> &'static str {
        match self {
            MindMapError::EmptyInput => "Input Error",
            MindMapError::NoKeywordsFound => "No Keywords",
            MindMapError::ExportBeforeGenerate => "No Mind Map",
            _ => "Error",
        }
    }
}
