//! # mindmap-types
//!
//! Shared domain types for the mind-map workspace.
//!
//! This crate defines the data structures every other crate agrees on:
//! - Tokens: the output contract of the linguistic tokenizer service
//! - Settings: layered configuration
//! - Errors: the user-facing error taxonomy
//!
//! ## Usage
//!
//! ```rust
//! use mindmap_types::{PosTag, Token};
//!
//! let token = Token::new("data", PosTag::Noun, false, true);
//! assert!(token.pos.is_nominal());
//! ```

pub mod config;
pub mod error;
pub mod token;

pub use config::{
    ExtractionSettings, ExportFormat, LayoutSettings, RenderSettings, Settings, TokenizerSettings,
    DEFAULT_TITLE,
};
pub use error::MindMapError;
pub use token::{PosTag, Token};
