//! Test tokenizers.
//!
//! Useful for testing extraction without depending on a linguistic model.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use mindmap_types::{PosTag, Token};

use crate::tokenizer::Tokenizer;

/// Tokenizer with a scripted tag table.
///
/// Splits on whitespace and punctuation; words missing from the table are
/// tagged `default_pos` and are not stop words.
pub struct MockTokenizer {
    tags: HashMap<String, (PosTag, bool)>,
    default_pos: PosTag,
    calls: AtomicUsize,
    last_input: Mutex<Option<String>>,
}

impl MockTokenizer {
    /// Create a mock that tags every word as a common noun.
    pub fn new() -> Self {
        Self {
            tags: HashMap::new(),
            default_pos: PosTag::Noun,
            calls: AtomicUsize::new(0),
            last_input: Mutex::new(None),
        }
    }

    /// Tag used for words missing from the table.
    pub fn with_default_pos(mut self, pos: PosTag) -> Self {
        self.default_pos = pos;
        self
    }

    /// Script the tag for a word.
    pub fn with_tag(mut self, word: &str, pos: PosTag) -> Self {
        self.tags.insert(word.to_string(), (pos, false));
        self
    }

    /// Script a stop word.
    pub fn with_stop(mut self, word: &str, pos: PosTag) -> Self {
        self.tags.insert(word.to_string(), (pos, true));
        self
    }

    /// Number of `tokenize` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Text passed to the most recent `tokenize` call.
    pub fn last_input(&self) -> Option<String> {
        self.last_input.lock().ok().and_then(|guard| guard.clone())
    }
}

impl Default for MockTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for MockTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut guard) = self.last_input.lock() {
            *guard = Some(text.to_string());
        }

        let mut tokens = Vec::new();
        for word in text.split_whitespace() {
            let trimmed = word.trim_matches(|c: char| c.is_ascii_punctuation());
            if !trimmed.is_empty() {
                let (pos, is_stop) = self
                    .tags
                    .get(trimmed)
                    .copied()
                    .unwrap_or((self.default_pos, false));
                let is_alpha = trimmed.chars().all(char::is_alphabetic);
                tokens.push(Token::new(trimmed, pos, is_stop, is_alpha));
            }
            if word.ends_with(|c: char| c.is_ascii_punctuation()) {
                tokens.push(Token::new(".", PosTag::Punct, false, false));
            }
        }
        tokens
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Tokenizer that returns the same token sequence for every input.
pub struct FixedTokenizer {
    tokens: Vec<Token>,
    calls: AtomicUsize,
}

impl FixedTokenizer {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `tokenize` calls so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Tokenizer for FixedTokenizer {
    fn tokenize(&self, _text: &str) -> Vec<Token> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tokens.clone()
    }

    fn name(&self) -> &str {
        "fixed"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_splits_punctuation() {
        let tokenizer = MockTokenizer::new().with_stop("and", PosTag::Cconj);
        let tokens = tokenizer.tokenize("cats and dogs.");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["cats", "and", "dogs", "."]);
        assert!(tokens[1].is_stop);
        assert_eq!(tokens[3].pos, PosTag::Punct);
    }

    #[test]
    fn test_mock_default_pos() {
        let tokenizer = MockTokenizer::new().with_default_pos(PosTag::Verb);
        let tokens = tokenizer.tokenize("run");
        assert_eq!(tokens[0].pos, PosTag::Verb);
        assert_eq!(tokenizer.call_count(), 1);
        assert_eq!(tokenizer.last_input().as_deref(), Some("run"));
    }

    #[test]
    fn test_fixed_ignores_input() {
        let tokenizer = FixedTokenizer::new(vec![Token::new("x", PosTag::X, false, true)]);
        assert_eq!(tokenizer.tokenize("a"), tokenizer.tokenize("b"));
        assert_eq!(tokenizer.call_count(), 2);
    }
}
