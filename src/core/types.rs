use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Values grouped under a relation key, in dictionary order.
pub type RelationMap<K> = BTreeMap<K, Vec<String>>;

/// Decomposition of a content word into sememes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSense {
    pub first_primitive: Option<String>,
    pub other_primitives: Vec<String>,
    pub relational_primitives: RelationMap<String>,
    pub relation_symbol_primitives: RelationMap<char>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Meaning {
    Content(ContentSense),
    /// Function word, described by literal tokens.
    Structural(Vec<String>),
}

/// One sense of one word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
    pub word: String,
    pub pos: String,
    pub meaning: Meaning,
}

impl WordRecord {
    pub fn content(word: &str, pos: &str, sense: ContentSense) -> Self {
        WordRecord {
            word: word.to_string(),
            pos: pos.to_string(),
            meaning: Meaning::Content(sense),
        }
    }

    pub fn structural(word: &str, pos: &str, words: Vec<String>) -> Self {
        WordRecord {
            word: word.to_string(),
            pos: pos.to_string(),
            meaning: Meaning::Structural(words),
        }
    }

    pub fn is_structural(&self) -> bool {
        matches!(self.meaning, Meaning::Structural(_))
    }

    pub fn as_content(&self) -> Option<&ContentSense> {
        match &self.meaning {
            Meaning::Content(sense) => Some(sense),
            Meaning::Structural(_) => None,
        }
    }

    pub fn structural_words(&self) -> &[String] {
        match &self.meaning {
            Meaning::Structural(words) => words,
            Meaning::Content(_) => &[],
        }
    }
}

impl ContentSense {
    pub fn with_first(primitive: &str) -> Self {
        ContentSense {
            first_primitive: Some(primitive.to_string()),
            ..ContentSense::default()
        }
    }

    pub fn add_other(&mut self, primitive: &str) {
        self.other_primitives.push(primitive.to_string());
    }

    pub fn add_relational(&mut self, key: &str, value: &str) {
        self.relational_primitives
            .entry(key.to_string())
            .or_insert_with(Vec::new)
            .push(value.to_string());
    }

    pub fn add_relation_symbol(&mut self, symbol: char, value: &str) {
        self.relation_symbol_primitives
            .entry(symbol)
            .or_insert_with(Vec::new)
            .push(value.to_string());
    }
}
