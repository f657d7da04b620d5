use std::collections::HashMap;
use crate::core::types::WordRecord;

/// Word → senses, in load order. Filled once during loading and only read
/// afterwards; share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct WordStore {
    words: HashMap<String, Vec<WordRecord>>,
    sense_count: usize,
}

impl WordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: WordRecord) {
        self.sense_count += 1;
        self.words
            .entry(record.word.clone())
            .or_insert_with(Vec::new)
            .push(record);
    }

    pub fn lookup(&self, word: &str) -> Option<&[WordRecord]> {
        self.words.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn sense_count(&self) -> usize {
        self.sense_count
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    pub fn senses(&self) -> impl Iterator<Item = &WordRecord> {
        self.words.values().flatten()
    }
}

impl FromIterator<WordRecord> for WordStore {
    fn from_iter<I: IntoIterator<Item = WordRecord>>(iter: I) -> Self {
        let mut store = WordStore::new();
        for record in iter {
            store.insert(record);
        }
        store
    }
}
