use std::sync::Arc;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use crate::core::error::{Error, ErrorKind, Result};
use crate::scoring::similarity::SimilarityEngine;

/// Scores many word pairs at once on a dedicated rayon pool
pub struct BatchScorer {
    pub workers: usize,
    pool: ThreadPool,
}

impl BatchScorer {
    pub fn new(workers: usize) -> Result<Self> {
        let workers = workers.max(1);
        let pool = ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("sememe-batch-{}", i))
            .build()
            .map_err(|e| Error::new(ErrorKind::Internal, format!("thread pool: {}", e)))?;

        Ok(BatchScorer { workers, pool })
    }

    /// Results line up with `pairs`.
    pub fn score_pairs(&self, engine: &Arc<SimilarityEngine>, pairs: &[(String, String)]) -> Vec<f64> {
        self.pool.install(|| {
            pairs
                .par_iter()
                .map(|(w1, w2)| engine.word_similarity(w1, w2))
                .collect()
        })
    }

    /// Every word of `row_words` against every word of `col_words`.
    pub fn score_matrix(&self, engine: &Arc<SimilarityEngine>, row_words: &[String], col_words: &[String]) -> Vec<Vec<f64>> {
        self.pool.install(|| {
            row_words
                .par_iter()
                .map(|w1| {
                    col_words
                        .iter()
                        .map(|w2| engine.word_similarity(w1, w2))
                        .collect()
                })
                .collect()
        })
    }
}

impl std::fmt::Debug for BatchScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchScorer").field("workers", &self.workers).finish()
    }
}
