use crate::core::types::{Meaning, WordRecord};
use crate::glossary::parser::{RELATION_SYMBOLS, SPECIAL_SYMBOLS};

/// Render a record back into glossary line form. Every value is written
/// in explicit `token|gloss` form so no segment relies on carry-over.
pub fn serialize(record: &WordRecord) -> String {
    let mut segments = Vec::new();

    match &record.meaning {
        Meaning::Structural(words) => {
            for word in words {
                segments.push(format!("{{{}|{}}}", token_for(word), word));
            }
        }
        Meaning::Content(sense) => {
            for primitive in sense.first_primitive.iter().chain(&sense.other_primitives) {
                segments.push(format!("{}|{}", token_for(primitive), primitive));
            }
            for (key, values) in &sense.relational_primitives {
                for value in values {
                    segments.push(format!("{}={}|{}", key, token_for(value), value));
                }
            }
            for (symbol, values) in &sense.relation_symbol_primitives {
                for value in values {
                    segments.push(format!("{}{}|{}", symbol, token_for(value), value));
                }
            }
        }
    }

    format!("{} {} {}", record.word, record.pos, segments.join(","))
}

// The token is discarded on parse when a gloss is present, but its first
// character still decides the segment kind.
fn token_for(value: &str) -> &str {
    match value.chars().next() {
        Some(c) if RELATION_SYMBOLS.contains(c) || SPECIAL_SYMBOLS.contains(c) || c == '(' => "_",
        _ => value,
    }
}
