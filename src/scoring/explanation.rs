use serde::Serialize;

/// The four layers compared for two content senses, and the cascaded
/// products that get weighted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContentBreakdown {
    pub first: f64,
    pub others: f64,
    pub relational: f64,
    pub symbols: f64,
}

impl ContentBreakdown {
    /// `[s1, s1*s2, s1*s2*s3, s1*s2*s3*s4]`: a layer only counts as far as
    /// the layers before it agree.
    pub fn products(&self) -> [f64; 4] {
        let mut product = self.first;
        let mut out = [0.0; 4];
        out[0] = product;
        product *= self.others;
        out[1] = product;
        product *= self.relational;
        out[2] = product;
        product *= self.symbols;
        out[3] = product;
        out
    }

    pub fn weighted(&self, beta: &[f64; 4]) -> f64 {
        self.products()
            .iter()
            .zip(beta)
            .fold(0.0, |total, (product, weight)| total + weight * product)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum SenseComparison {
    /// A function word against a content word.
    Incomparable,
    Structural,
    Content(ContentBreakdown),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SenseScore {
    pub comparison: SenseComparison,
    pub score: f64,
}

/// Best-scoring sense pair of two words.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordExplanation {
    pub word1: String,
    pub word2: String,
    pub sense1: usize,
    pub sense2: usize,
    pub pairs_scored: usize,
    pub best: SenseScore,
}

impl WordExplanation {
    pub fn score(&self) -> f64 {
        self.best.score
    }
}
