//! # mindmap-keywords
//!
//! Keyword selection for mind-map generation.
//!
//! Text is lower-cased and handed to a [`Tokenizer`]; tokens that are
//! nouns, not stop words, purely alphabetic and long enough become
//! candidates, which are then ranked by frequency (first occurrence breaks
//! ties) and capitalized for display.
//!
//! ## Features
//! - `Tokenizer` trait so the linguistic model stays swappable
//! - `RuleTokenizer`: built-in lexicon + suffix-heuristic English tagger
//! - `MockTokenizer` / `FixedTokenizer` for tests
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use mindmap_keywords::{KeywordExtractor, RuleTokenizer};
//!
//! let extractor = KeywordExtractor::with_defaults(Arc::new(RuleTokenizer::new()));
//! let keywords = extractor.extract("Rust ownership makes memory safety practical.");
//! assert!(keywords.len() <= 15);
//! ```

pub mod extractor;
pub mod lexicon;
pub mod mock;
pub mod stopwords;
pub mod tokenizer;

pub use extractor::{capitalize, KeywordExtractor, RankedKeyword};
pub use lexicon::Lexicon;
pub use mock::{FixedTokenizer, MockTokenizer};
pub use stopwords::is_stop_word;
pub use tokenizer::{RuleTokenizer, Tokenizer};
