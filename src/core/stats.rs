use serde::{Deserialize, Serialize};
use crate::hierarchy::primitive::PrimitiveHierarchy;
use crate::store::word_store::WordStore;

/// Dictionary statistics, fixed once loading finishes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexiconStats {
    pub words: usize,
    pub senses: usize,
    pub structural_senses: usize,
    pub primitives: usize,

    // Lines dropped while loading
    pub skipped_glossary_lines: usize,
    pub skipped_hierarchy_lines: usize,
}

impl LexiconStats {
    pub fn collect(hierarchy: &PrimitiveHierarchy, store: &WordStore) -> Self {
        LexiconStats {
            words: store.len(),
            senses: store.sense_count(),
            structural_senses: store.senses().filter(|s| s.is_structural()).count(),
            primitives: hierarchy.len(),
            skipped_glossary_lines: 0,
            skipped_hierarchy_lines: 0,
        }
    }
}
