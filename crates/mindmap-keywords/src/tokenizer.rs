//! Tokenizer service boundary and the built-in rule-based tagger.

use std::path::Path;

use tracing::info;

use mindmap_types::{MindMapError, PosTag, Token, TokenizerSettings};

use crate::lexicon::Lexicon;
use crate::stopwords::is_stop_word;

/// Splits text into tagged tokens.
///
/// Implementations are created once at startup and shared read-only, so a
/// call must not fail; a model that cannot be loaded fails at construction.
pub trait Tokenizer: Send + Sync {
    /// Tokenize already lower-cased text.
    fn tokenize(&self, text: &str) -> Vec<Token>;

    /// Name of the tokenizer (used in logs).
    fn name(&self) -> &str {
        "tokenizer"
    }
}

/// Contraction endings split off their host word.
const CONTRACTIONS: &[&str] = &["n't", "'s", "'re", "'ve", "'ll", "'d", "'m"];

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ism", "ist", "ance", "ence", "ship", "sis", "ogy",
    "ure", "ics", "hood", "dom",
];

const ADJ_SUFFIXES: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ical"];

const VERB_SUFFIXES: &[&str] = &["ize", "izes", "ify", "ifies"];

const SYMBOLS: &str = "$%&*+<=>@^|~#/\\€£¥©°";

/// English tagger driven by a lexicon, a stop-word list and suffix rules.
///
/// Words are runs of alphanumeric characters; an apostrophe between two
/// word characters stays in the word and contractions (`n't`, `'s`, ...)
/// are then split off. Every other non-space character is its own token.
pub struct RuleTokenizer {
    lexicon: Lexicon,
}

impl RuleTokenizer {
    /// Create a tagger with the built-in lexicon.
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::builtin(),
        }
    }

    /// Create a tagger with the built-in lexicon extended by `extra`.
    pub fn with_lexicon(extra: Lexicon) -> Self {
        let mut lexicon = Lexicon::builtin();
        lexicon.extend(extra);
        Self { lexicon }
    }

    /// Build the tagger from settings, loading the configured lexicon file.
    pub fn from_settings(settings: &TokenizerSettings) -> Result<Self, MindMapError> {
        let tokenizer = match &settings.lexicon_path {
            Some(path) => Self::with_lexicon(Lexicon::load(Path::new(path))?),
            None => Self::new(),
        };
        info!(entries = tokenizer.lexicon.len(), "Rule tokenizer ready");
        Ok(tokenizer)
    }

    fn tag(&self, piece: &str, prev: Option<PosTag>) -> PosTag {
        let mut chars = piece.chars();
        let first = match chars.next() {
            Some(c) => c,
            None => return PosTag::X,
        };

        if chars.next().is_none() && !first.is_alphanumeric() {
            if first.is_whitespace() {
                return PosTag::Space;
            }
            return if SYMBOLS.contains(first) {
                PosTag::Sym
            } else {
                PosTag::Punct
            };
        }

        let normalized = piece.replace('\u{2019}', "'");
        if normalized == "n't" || normalized == "'s" {
            return PosTag::Part;
        }
        if normalized.starts_with('\'') {
            return PosTag::Aux;
        }

        if let Some(tag) = self.lexicon.get(piece) {
            return tag;
        }
        if piece.chars().all(char::is_numeric) {
            return PosTag::Num;
        }
        guess_tag(piece, prev)
    }
}

impl Default for RuleTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for RuleTokenizer {
    fn tokenize(&self, text: &str) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        for piece in segment(text) {
            let prev = tokens.last().map(|t| t.pos);
            let pos = self.tag(&piece, prev);
            let is_alpha = piece.chars().all(char::is_alphabetic);
            let is_stop = is_stop_word(&piece);
            tokens.push(Token::new(piece, pos, is_stop, is_alpha));
        }
        tokens
    }

    fn name(&self) -> &str {
        "rule"
    }
}

/// Tag an unknown word from its shape.
fn guess_tag(word: &str, prev: Option<PosTag>) -> PosTag {
    if word.chars().count() < 5 {
        return PosTag::Noun;
    }
    if NOUN_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return PosTag::Noun;
    }
    if word.ends_with("ly") {
        return PosTag::Adv;
    }
    if ADJ_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return PosTag::Adj;
    }
    if word.ends_with("ed") || VERB_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        return PosTag::Verb;
    }
    if word.ends_with("ing") {
        // "is running" vs "machine learning"
        return match prev {
            Some(PosTag::Aux | PosTag::Pron | PosTag::Part | PosTag::Adv) => PosTag::Verb,
            _ => PosTag::Noun,
        };
    }
    PosTag::Noun
}

/// Split text into word and punctuation pieces.
fn segment(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut pieces = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_alphanumeric() {
            current.push(c);
            continue;
        }
        let apostrophe = c == '\'' || c == '\u{2019}';
        let next_is_word = chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());
        if apostrophe && !current.is_empty() && next_is_word {
            current.push(c);
            continue;
        }

        flush_word(&mut current, &mut pieces);
        if !c.is_whitespace() {
            pieces.push(c.to_string());
        }
    }
    flush_word(&mut current, &mut pieces);
    pieces
}

fn flush_word(current: &mut String, pieces: &mut Vec<String>) {
    if current.is_empty() {
        return;
    }
    pieces.extend(split_contraction(current));
    current.clear();
}

/// "doesn't" -> ["does", "n't"], "data's" -> ["data", "'s"].
fn split_contraction(word: &str) -> Vec<String> {
    let chars: Vec<char> = word.chars().collect();
    let normalized: String = chars
        .iter()
        .map(|&c| if c == '\u{2019}' { '\'' } else { c })
        .collect();

    for suffix in CONTRACTIONS {
        let suffix_len = suffix.chars().count();
        if chars.len() > suffix_len && normalized.ends_with(suffix) {
            let split = chars.len() - suffix_len;
            let head: String = chars[..split].iter().collect();
            let tail: String = chars[split..].iter().collect();
            return vec![head, tail];
        }
    }
    vec![word.to_string()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    fn pos_of(tokens: &[Token], word: &str) -> PosTag {
        tokens
            .iter()
            .find(|t| t.text == word)
            .map(|t| t.pos)
            .unwrap_or_else(|| panic!("no token {word}"))
    }

    #[test]
    fn test_segment_words_and_punctuation() {
        let tokens = RuleTokenizer::new().tokenize("graphs, nodes; edges.");
        assert_eq!(texts(&tokens), vec!["graphs", ",", "nodes", ";", "edges", "."]);
        assert_eq!(tokens[1].pos, PosTag::Punct);
        assert!(!tokens[1].is_alpha);
    }

    #[test]
    fn test_contractions_are_split() {
        let tokens = RuleTokenizer::new().tokenize("it doesn't matter what rust's borrow checker says");
        let words = texts(&tokens);
        assert!(words.contains(&"does"));
        assert!(words.contains(&"n't"));
        assert!(words.contains(&"rust"));
        assert!(words.contains(&"'s"));
        assert_eq!(pos_of(&tokens, "n't"), PosTag::Part);
        assert!(tokens.iter().find(|t| t.text == "n't").unwrap().is_stop);
    }

    #[test]
    fn test_quotes_are_not_words() {
        let tokens = RuleTokenizer::new().tokenize("'quoted'");
        assert_eq!(texts(&tokens), vec!["'", "quoted", "'"]);
    }

    #[test]
    fn test_scenario_tags() {
        let tokens = RuleTokenizer::new().tokenize(
            "data science involves data analysis and data visualization. machine learning uses data.",
        );
        assert_eq!(pos_of(&tokens, "data"), PosTag::Noun);
        assert_eq!(pos_of(&tokens, "science"), PosTag::Noun);
        assert_eq!(pos_of(&tokens, "involves"), PosTag::Verb);
        assert_eq!(pos_of(&tokens, "analysis"), PosTag::Noun);
        assert_eq!(pos_of(&tokens, "visualization"), PosTag::Noun);
        assert_eq!(pos_of(&tokens, "learning"), PosTag::Noun);
        assert_eq!(pos_of(&tokens, "uses"), PosTag::Verb);
        assert_eq!(pos_of(&tokens, "and"), PosTag::Cconj);
        assert!(tokens.iter().find(|t| t.text == "and").unwrap().is_stop);
    }

    #[test]
    fn test_numbers_and_symbols() {
        let tokens = RuleTokenizer::new().tokenize("42 % 3d");
        assert_eq!(tokens[0].pos, PosTag::Num);
        assert!(!tokens[0].is_alpha);
        assert_eq!(tokens[1].pos, PosTag::Sym);
        assert!(!tokens[2].is_alpha);
    }

    #[test]
    fn test_suffix_heuristics() {
        assert_eq!(guess_tag("quickly", None), PosTag::Adv);
        assert_eq!(guess_tag("dangerous", None), PosTag::Adj);
        assert_eq!(guess_tag("optimized", None), PosTag::Verb);
        assert_eq!(guess_tag("happiness", None), PosTag::Noun);
        assert_eq!(guess_tag("running", Some(PosTag::Aux)), PosTag::Verb);
        assert_eq!(guess_tag("learning", Some(PosTag::Noun)), PosTag::Noun);
        assert_eq!(guess_tag("cat", None), PosTag::Noun);
    }

    #[test]
    fn test_with_lexicon_overrides_builtin() {
        let extra = Lexicon::parse("ferris\tPROPN\nuses\tNOUN\n").unwrap();
        let tokens = RuleTokenizer::with_lexicon(extra).tokenize("ferris uses");
        assert_eq!(tokens[0].pos, PosTag::Propn);
        assert_eq!(tokens[1].pos, PosTag::Noun);
    }

    #[test]
    fn test_from_settings_missing_lexicon_fails() {
        let settings = TokenizerSettings {
            lexicon_path: Some("/nonexistent/lexicon.tsv".to_string()),
        };
        let result = RuleTokenizer::from_settings(&settings);
        assert!(matches!(result, Err(MindMapError::TokenizerInit(_))));
    }

    #[test]
    fn test_from_settings_default() {
        let tokenizer = RuleTokenizer::from_settings(&TokenizerSettings::default()).unwrap();
        assert_eq!(tokenizer.name(), "rule");
        assert!(tokenizer.tokenize("").is_empty());
    }
}
