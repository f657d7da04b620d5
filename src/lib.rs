pub mod core;
pub mod hierarchy;
pub mod glossary;
pub mod store;
pub mod scoring;
pub mod parallel;

pub use crate::core::config::Config;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::lexicon::Lexicon;

/*
┌──────────────────────────────── LOAD (once, sequential) ─────────────────────────────────┐
│                                                                                           │
│   WHOLE.DAT ──► hierarchy::loader ──► PrimitiveHierarchy   (gloss → id, id → parent)     │
│                                                                                           │
│   glossary.dat ──► glossary::parser (nom) ──► WordRecord ──► store::WordStore            │
│                                                 Content { first, others,                  │
│                                                           relational, symbols }           │
│                                               | Structural(words)                         │
└───────────────────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── QUERY (shared, read-only) ───────────────────────────────┐
│                                                                                           │
│   Lexicon ──► SimilarityEngine                                                            │
│                 word_similarity   = max over sense pairs                                  │
│                   sense_similarity  = cascade  b1·s1 + b2·s1s2 + b3·s1s2s3 + b4·s1s2s3s4  │
│                     s1 primitive_similarity = alpha / (distance + alpha)                  │
│                     s2 list_similarity      (greedy, first max wins)                      │
│                     s3 map_similarity       relational keys                               │
│                     s4 map_similarity       relation symbols                              │
│                                                                                           │
│   parallel::BatchScorer ── rayon pool over Arc<SimilarityEngine>                          │
└───────────────────────────────────────────────────────────────────────────────────────────┘
*/
