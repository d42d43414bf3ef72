//! Token types produced by the tokenizer service.

use serde::{Deserialize, Serialize};

/// Universal part-of-speech tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum PosTag {
    /// Common noun
    Noun,
    /// Proper noun
    Propn,
    Verb,
    Adj,
    Adv,
    Pron,
    Det,
    /// Adposition (preposition or postposition)
    Adp,
    /// Auxiliary verb
    Aux,
    /// Coordinating conjunction
    Cconj,
    /// Subordinating conjunction
    Sconj,
    Num,
    /// Particle
    Part,
    Punct,
    Sym,
    Intj,
    Space,
    /// Anything else
    X,
}

impl PosTag {
    /// Get the upper-case tag code.
    pub fn code(&self) -> &'static str {
        match self {
            PosTag::Noun => "NOUN",
            PosTag::Propn => "PROPN",
            PosTag::Verb => "VERB",
            PosTag::Adj => "ADJ",
            PosTag::Adv => "ADV",
            PosTag::Pron => "PRON",
            PosTag::Det => "DET",
            PosTag::Adp => "ADP",
            PosTag::Aux => "AUX",
            PosTag::Cconj => "CCONJ",
            PosTag::Sconj => "SCONJ",
            PosTag::Num => "NUM",
            PosTag::Part => "PART",
            PosTag::Punct => "PUNCT",
            PosTag::Sym => "SYM",
            PosTag::Intj => "INTJ",
            PosTag::Space => "SPACE",
            PosTag::X => "X",
        }
    }

    /// Parse from code (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        let tag = match code.trim().to_ascii_uppercase().as_str() {
            "NOUN" => PosTag::Noun,
            "PROPN" => PosTag::Propn,
            "VERB" => PosTag::Verb,
            "ADJ" => PosTag::Adj,
            "ADV" => PosTag::Adv,
            "PRON" => PosTag::Pron,
            "DET" => PosTag::Det,
            "ADP" => PosTag::Adp,
            "AUX" => PosTag::Aux,
            "CCONJ" => PosTag::Cconj,
            "SCONJ" => PosTag::Sconj,
            "NUM" => PosTag::Num,
            "PART" => PosTag::Part,
            "PUNCT" => PosTag::Punct,
            "SYM" => PosTag::Sym,
            "INTJ" => PosTag::Intj,
            "SPACE" => PosTag::Space,
            "X" => PosTag::X,
            _ => return None,
        };
        Some(tag)
    }

    /// Common or proper noun.
    pub fn is_nominal(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::Propn)
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A linguistic unit returned by a tokenizer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// Surface form as it appears in the tokenized text
    pub text: String,
    /// Part-of-speech tag
    pub pos: PosTag,
    /// Whether the token is a stop word
    pub is_stop: bool,
    /// Whether every character of the token is alphabetic
    pub is_alpha: bool,
}

impl Token {
    /// Create a new token.
    pub fn new(text: impl Into<String>, pos: PosTag, is_stop: bool, is_alpha: bool) -> Self {
        Self {
            text: text.into(),
            pos,
            is_stop,
            is_alpha,
        }
    }

    /// Length of the surface form in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}
