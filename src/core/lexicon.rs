use std::sync::Arc;
use tracing::info;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::stats::LexiconStats;
use crate::glossary::loader::load_glossary;
use crate::hierarchy::loader::load_hierarchy;
use crate::hierarchy::primitive::PrimitiveHierarchy;
use crate::parallel::batch::BatchScorer;
use crate::scoring::explanation::WordExplanation;
use crate::scoring::params::SimilarityParams;
use crate::scoring::similarity::SimilarityEngine;
use crate::store::word_store::WordStore;

/// Loaded dictionary plus the scoring engine. Cloning shares the loaded
/// state; every query takes `&self`.
#[derive(Debug, Clone)]
pub struct Lexicon {
    engine: Arc<SimilarityEngine>,
    batch: Arc<BatchScorer>,
    stats: LexiconStats,
}

impl Lexicon {
    /// Load the sememe hierarchy, then the glossary. Either file failing to
    /// open fails the whole call; bad lines are only counted.
    pub fn open(config: &Config) -> Result<Self> {
        config.params.validate()?;

        let hierarchy_load = load_hierarchy(&config.hierarchy_path)?;
        let glossary_load = load_glossary(&config.glossary_path)?;

        let mut lexicon = Self::build(
            hierarchy_load.hierarchy,
            glossary_load.store,
            config.params,
            config.workers,
        )?;
        lexicon.stats.skipped_hierarchy_lines = hierarchy_load.skipped_lines;
        lexicon.stats.skipped_glossary_lines = glossary_load.skipped_lines;

        info!(
            words = lexicon.stats.words,
            senses = lexicon.stats.senses,
            primitives = lexicon.stats.primitives,
            "lexicon ready"
        );
        Ok(lexicon)
    }

    /// Assemble a lexicon from parts built in memory.
    pub fn from_parts(hierarchy: PrimitiveHierarchy, store: WordStore, params: SimilarityParams) -> Result<Self> {
        params.validate()?;
        Self::build(hierarchy, store, params, num_cpus::get())
    }

    fn build(hierarchy: PrimitiveHierarchy, store: WordStore, params: SimilarityParams, workers: usize) -> Result<Self> {
        let stats = LexiconStats::collect(&hierarchy, &store);
        let engine = SimilarityEngine::new(Arc::new(hierarchy), Arc::new(store), params);

        Ok(Lexicon {
            engine: Arc::new(engine),
            batch: Arc::new(BatchScorer::new(workers)?),
            stats,
        })
    }

    pub fn engine(&self) -> &SimilarityEngine {
        &self.engine
    }

    pub fn stats(&self) -> &LexiconStats {
        &self.stats
    }

    pub fn similarity_of_words(&self, word1: &str, word2: &str) -> f64 {
        self.engine.word_similarity(word1, word2)
    }

    pub fn similarity_of_primitives(&self, p1: &str, p2: &str) -> f64 {
        self.engine.primitive_similarity(p1, p2)
    }

    pub fn distance_of_primitives(&self, p1: &str, p2: &str) -> u32 {
        self.engine.distance(p1, p2)
    }

    /// Like `similarity_of_words`, but a missing word is an error and the
    /// winning sense pair is reported.
    pub fn explain_words(&self, word1: &str, word2: &str) -> Result<WordExplanation> {
        self.engine.explain_words(word1, word2)
    }

    pub fn similarity_batch(&self, pairs: &[(String, String)]) -> Vec<f64> {
        self.batch.score_pairs(&self.engine, pairs)
    }

    pub fn similarity_matrix(&self, rows: &[String], cols: &[String]) -> Vec<Vec<f64>> {
        self.batch.score_matrix(&self.engine, rows, cols)
    }
}
