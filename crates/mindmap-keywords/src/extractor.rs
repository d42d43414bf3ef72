//! Frequency-ranked keyword extraction.
//!
//! The selection predicate keeps a token when it is a common or proper
//! noun, not a stop word, purely alphabetic and at least `min_chars`
//! characters long. Surviving forms are counted case-insensitively and
//! ranked by count; equal counts keep first-occurrence order.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use mindmap_types::{ExtractionSettings, Token};

use crate::tokenizer::Tokenizer;

/// A selected keyword with its frequency in the filtered token stream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankedKeyword {
    /// Capitalized display form
    pub keyword: String,
    /// Occurrences among candidate tokens
    pub count: usize,
}

impl RankedKeyword {
    pub fn new(keyword: impl Into<String>, count: usize) -> Self {
        Self {
            keyword: keyword.into(),
            count,
        }
    }
}

/// Extracts the most frequent noun keywords from free-form text.
pub struct KeywordExtractor {
    tokenizer: Arc<dyn Tokenizer>,
    settings: ExtractionSettings,
}

impl KeywordExtractor {
    /// Create an extractor over a tokenizer with explicit settings.
    pub fn new(tokenizer: Arc<dyn Tokenizer>, settings: ExtractionSettings) -> Self {
        Self {
            tokenizer,
            settings,
        }
    }

    /// Create an extractor with the default limits (15 keywords, > 2 chars).
    pub fn with_defaults(tokenizer: Arc<dyn Tokenizer>) -> Self {
        Self::new(tokenizer, ExtractionSettings::default())
    }

    /// Get the extraction settings.
    pub fn settings(&self) -> &ExtractionSettings {
        &self.settings
    }

    /// Check a token against the selection predicate.
    pub fn is_candidate(&self, token: &Token) -> bool {
        token.pos.is_nominal()
            && !token.is_stop
            && token.is_alpha
            && token.char_len() >= self.settings.min_chars
    }

    /// Extract ranked keywords with their counts.
    ///
    /// Blank text yields an empty list without consulting the tokenizer.
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    pub fn extract_ranked(&self, text: &str) -> Vec<RankedKeyword> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        let tokens = self.tokenizer.tokenize(&text.to_lowercase());

        // Counts in first-occurrence order
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        for token in tokens.iter().filter(|t| self.is_candidate(t)) {
            let form = token.text.to_lowercase();
            match index.get(&form) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    index.insert(form.clone(), counts.len());
                    counts.push((form, 1));
                }
            }
        }

        // Stable sort keeps first-occurrence order among equal counts
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let mut seen: HashSet<String> = HashSet::new();
        let ranked: Vec<RankedKeyword> = counts
            .into_iter()
            .map(|(form, count)| RankedKeyword::new(capitalize(&form), count))
            .filter(|k| seen.insert(k.keyword.clone()))
            .take(self.settings.max_keywords)
            .collect();

        debug!(
            tokens = tokens.len(),
            candidates = index.len(),
            selected = ranked.len(),
            "Extracted keywords"
        );

        ranked
    }

    /// Extract up to `max_keywords` capitalized keywords, most frequent first.
    pub fn extract(&self, text: &str) -> Vec<String> {
        self.extract_ranked(text)
            .into_iter()
            .map(|k| k.keyword)
            .collect()
    }
}

/// Upper-case the first character, leaving the rest unchanged.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{FixedTokenizer, MockTokenizer};
    use mindmap_types::PosTag;

    fn scenario_tokenizer() -> MockTokenizer {
        MockTokenizer::new()
            .with_tag("involves", PosTag::Verb)
            .with_tag("uses", PosTag::Verb)
            .with_stop("and", PosTag::Cconj)
    }

    const SCENARIO: &str =
        "Data science involves data analysis and data visualization. Machine learning uses data.";

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("data"), "Data");
        assert_eq!(capitalize("iPhone"), "IPhone");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_scenario_ranking() {
        let extractor = KeywordExtractor::with_defaults(Arc::new(scenario_tokenizer()));
        let ranked = extractor.extract_ranked(SCENARIO);

        assert_eq!(ranked[0], RankedKeyword::new("Data", 4));
        let words: Vec<&str> = ranked.iter().map(|k| k.keyword.as_str()).collect();
        assert_eq!(
            words,
            vec!["Data", "Science", "Analysis", "Visualization", "Machine", "Learning"]
        );
        assert!(ranked[1..].iter().all(|k| k.count == 1));
    }

    #[test]
    fn test_only_stop_words_yields_empty() {
        let tokenizer = MockTokenizer::new()
            .with_stop("the", PosTag::Det)
            .with_stop("of", PosTag::Adp)
            .with_stop("and", PosTag::Cconj)
            .with_stop("is", PosTag::Aux);
        let extractor = KeywordExtractor::with_defaults(Arc::new(tokenizer));
        assert!(extractor.extract("the of and is").is_empty());
    }

    #[test]
    fn test_blank_text_skips_tokenizer() {
        let tokenizer = Arc::new(MockTokenizer::new());
        let extractor = KeywordExtractor::with_defaults(tokenizer.clone());
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("  \n\t ").is_empty());
        assert_eq!(tokenizer.call_count(), 0);
    }

    #[test]
    fn test_text_is_lowercased_before_tokenizing() {
        let tokenizer = Arc::new(MockTokenizer::new());
        let extractor = KeywordExtractor::with_defaults(tokenizer.clone());
        extractor.extract("Rust RUST rust");
        assert_eq!(tokenizer.last_input().as_deref(), Some("rust rust rust"));
    }

    #[test]
    fn test_predicate_filters() {
        let tokens = vec![
            Token::new("graph", PosTag::Noun, false, true),
            Token::new("paris", PosTag::Propn, false, true),
            Token::new("run", PosTag::Verb, false, true),
            Token::new("blue", PosTag::Adj, false, true),
            Token::new("thing", PosTag::Noun, true, true),
            Token::new("covid19", PosTag::Noun, false, false),
            Token::new("ox", PosTag::Noun, false, true),
            Token::new("art", PosTag::Noun, false, true),
        ];
        let extractor = KeywordExtractor::with_defaults(Arc::new(FixedTokenizer::new(tokens)));
        assert_eq!(extractor.extract("ignored"), vec!["Graph", "Paris", "Art"]);
    }

    #[test]
    fn test_case_variants_merge() {
        let tokens = vec![
            Token::new("Data", PosTag::Noun, false, true),
            Token::new("model", PosTag::Noun, false, true),
            Token::new("data", PosTag::Noun, false, true),
            Token::new("DATA", PosTag::Propn, false, true),
        ];
        let extractor = KeywordExtractor::with_defaults(Arc::new(FixedTokenizer::new(tokens)));
        let ranked = extractor.extract_ranked("ignored");
        assert_eq!(
            ranked,
            vec![RankedKeyword::new("Data", 3), RankedKeyword::new("Model", 1)]
        );
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let tokens: Vec<Token> = ["zebra", "apple", "mango", "apple", "zebra", "kiwi"]
            .iter()
            .map(|w| Token::new(*w, PosTag::Noun, false, true))
            .collect();
        let extractor = KeywordExtractor::with_defaults(Arc::new(FixedTokenizer::new(tokens)));
        assert_eq!(
            extractor.extract("ignored"),
            vec!["Zebra", "Apple", "Mango", "Kiwi"]
        );
    }

    #[test]
    fn test_truncates_to_max_keywords() {
        let words: Vec<String> = (0..30).map(|i| format!("word{}", letters(i))).collect();
        let tokens: Vec<Token> = words
            .iter()
            .map(|w| Token::new(w.clone(), PosTag::Noun, false, true))
            .collect();
        let extractor = KeywordExtractor::with_defaults(Arc::new(FixedTokenizer::new(tokens)));
        let keywords = extractor.extract("ignored");
        assert_eq!(keywords.len(), 15);
        assert_eq!(keywords[0], "Worda");
        assert_eq!(keywords[14], "Wordo");
    }

    #[test]
    fn test_custom_limits() {
        let tokens: Vec<Token> = ["cat", "dog", "dog", "emu", "horse"]
            .iter()
            .map(|w| Token::new(*w, PosTag::Noun, false, true))
            .collect();
        let settings = ExtractionSettings {
            max_keywords: 2,
            min_chars: 4,
        };
        let extractor = KeywordExtractor::new(Arc::new(FixedTokenizer::new(tokens)), settings);
        assert_eq!(extractor.extract("ignored"), vec!["Horse"]);
    }

    #[test]
    fn test_idempotent() {
        let extractor = KeywordExtractor::with_defaults(Arc::new(scenario_tokenizer()));
        assert_eq!(extractor.extract(SCENARIO), extractor.extract(SCENARIO));
    }

    /// Alphabetic suffix for generated words: 0 -> "a", 1 -> "b", ...
    fn letters(i: usize) -> String {
        let first = (b'a' + (i / 26) as u8 - if i >= 26 { 1 } else { 0 }) as char;
        let second = (b'a' + (i % 26) as u8) as char;
        if i < 26 {
            second.to_string()
        } else {
            format!("{first}{second}")
        }
    }
}
