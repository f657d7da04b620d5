use std::sync::Arc;
use tracing::{debug, warn};
use crate::core::error::{Error, Result};
use crate::core::types::{ContentSense, Meaning, RelationMap, WordRecord};
use crate::hierarchy::primitive::PrimitiveHierarchy;
use crate::scoring::explanation::{ContentBreakdown, SenseComparison, SenseScore, WordExplanation};
use crate::scoring::matcher::{greedy_match, matched_similarity, MatchedPair};
use crate::scoring::params::SimilarityParams;
use crate::store::word_store::WordStore;

/// Scores words against a loaded hierarchy and word store.
/// Read-only after construction.
#[derive(Debug)]
pub struct SimilarityEngine {
    hierarchy: Arc<PrimitiveHierarchy>,
    store: Arc<WordStore>,
    params: SimilarityParams,
}

impl SimilarityEngine {
    pub fn new(hierarchy: Arc<PrimitiveHierarchy>, store: Arc<WordStore>, params: SimilarityParams) -> Self {
        SimilarityEngine { hierarchy, store, params }
    }

    pub fn hierarchy(&self) -> &PrimitiveHierarchy {
        &self.hierarchy
    }

    pub fn store(&self) -> &WordStore {
        &self.store
    }

    pub fn params(&self) -> &SimilarityParams {
        &self.params
    }

    /// Hierarchy distance, or the default distance when the sememes share no
    /// ancestor. An unregistered token is indistinguishable from an
    /// unrelated one here.
    pub fn distance(&self, p1: &str, p2: &str) -> u32 {
        self.hierarchy
            .distance(p1, p2)
            .unwrap_or(self.params.default_distance)
    }

    /// `alpha / (distance + alpha)`
    pub fn primitive_similarity(&self, p1: &str, p2: &str) -> f64 {
        self.similarity_at(self.distance(p1, p2))
    }

    fn similarity_at(&self, distance: u32) -> f64 {
        self.params.alpha / (distance as f64 + self.params.alpha)
    }

    /// Sememe against sememe by distance, literal against literal by
    /// equality, and `gamma` for a mixed pair.
    pub fn token_similarity(&self, t1: &str, t2: &str) -> f64 {
        match (self.hierarchy.is_primitive(t1), self.hierarchy.is_primitive(t2)) {
            (true, true) => self.primitive_similarity(t1, t2),
            (false, false) => {
                if t1 == t2 {
                    1.0
                } else {
                    0.0
                }
            }
            _ => self.params.gamma,
        }
    }

    pub fn list_matches(&self, list1: &[String], list2: &[String]) -> Vec<MatchedPair> {
        greedy_match(list1, list2, |a, b| self.token_similarity(a, b))
    }

    /// Order-insensitive comparison of two value lists by greedy matching.
    pub fn list_similarity(&self, list1: &[String], list2: &[String]) -> f64 {
        if list1.is_empty() && list2.is_empty() {
            return 1.0;
        }
        let pairs = self.list_matches(list1, list2);
        matched_similarity(&pairs, list1.len(), list2.len(), self.params.delta)
    }

    /// Shared keys are compared with `list_similarity`; every key present on
    /// one side only contributes `delta`.
    pub fn map_similarity<K: Ord>(&self, map1: &RelationMap<K>, map2: &RelationMap<K>) -> f64 {
        if map1.is_empty() && map2.is_empty() {
            return 1.0;
        }

        let total = map1.len() + map2.len();
        let mut sum = 0.0;
        let mut shared = 0;
        for (key, values1) in map1 {
            if let Some(values2) = map2.get(key) {
                sum += self.list_similarity(values1, values2);
                shared += 1;
            }
        }

        let denominator = total - shared;
        if denominator == 0 {
            return if shared == 0 { 1.0 } else { sum / shared as f64 };
        }
        (sum + self.params.delta * (total - 2 * shared) as f64) / denominator as f64
    }

    fn first_primitive_similarity(&self, p1: Option<&str>, p2: Option<&str>) -> f64 {
        match (p1, p2) {
            (Some(p1), Some(p2)) => self.primitive_similarity(p1, p2),
            _ => self.similarity_at(self.params.default_distance),
        }
    }

    pub fn content_breakdown(&self, s1: &ContentSense, s2: &ContentSense) -> ContentBreakdown {
        ContentBreakdown {
            first: self.first_primitive_similarity(
                s1.first_primitive.as_deref(),
                s2.first_primitive.as_deref(),
            ),
            others: self.list_similarity(&s1.other_primitives, &s2.other_primitives),
            relational: self.map_similarity(&s1.relational_primitives, &s2.relational_primitives),
            symbols: self.map_similarity(
                &s1.relation_symbol_primitives,
                &s2.relation_symbol_primitives,
            ),
        }
    }

    pub fn explain_senses(&self, s1: &WordRecord, s2: &WordRecord) -> SenseScore {
        match (&s1.meaning, &s2.meaning) {
            (Meaning::Structural(words1), Meaning::Structural(words2)) => SenseScore {
                comparison: SenseComparison::Structural,
                score: self.list_similarity(words1, words2),
            },
            (Meaning::Content(c1), Meaning::Content(c2)) => {
                let breakdown = self.content_breakdown(c1, c2);
                SenseScore {
                    comparison: SenseComparison::Content(breakdown),
                    score: breakdown.weighted(&self.params.beta),
                }
            }
            _ => SenseScore {
                comparison: SenseComparison::Incomparable,
                score: 0.0,
            },
        }
    }

    pub fn sense_similarity(&self, s1: &WordRecord, s2: &WordRecord) -> f64 {
        self.explain_senses(s1, s2).score
    }

    /// Maximum sense similarity over every pair of senses; 0 when either
    /// word is missing from the store.
    pub fn word_similarity(&self, word1: &str, word2: &str) -> f64 {
        match self.explain_words(word1, word2) {
            Ok(explanation) => explanation.score(),
            Err(e) => {
                warn!(word1, word2, error = %e, "word not in dictionary");
                0.0
            }
        }
    }

    pub fn explain_words(&self, word1: &str, word2: &str) -> Result<WordExplanation> {
        let senses1 = self.store.lookup(word1).ok_or_else(|| Error::not_found(word1))?;
        let senses2 = self.store.lookup(word2).ok_or_else(|| Error::not_found(word2))?;

        let mut best: Option<(usize, usize, SenseScore)> = None;
        for (i, s1) in senses1.iter().enumerate() {
            for (j, s2) in senses2.iter().enumerate() {
                let scored = self.explain_senses(s1, s2);
                if best.map_or(true, |(_, _, top)| scored.score > top.score) {
                    best = Some((i, j, scored));
                }
            }
        }

        let (sense1, sense2, best) = best.ok_or_else(|| Error::not_found(word1))?;
        debug!(word1, word2, sense1, sense2, score = best.score, "best sense pair");

        Ok(WordExplanation {
            word1: word1.to_string(),
            word2: word2.to_string(),
            sense1,
            sense2,
            pairs_scored: senses1.len() * senses2.len(),
            best,
        })
    }
}
