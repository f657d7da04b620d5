use serde::{Deserialize, Serialize};
use crate::core::error::{Error, ErrorKind, Result};

/// Tunable constants of the similarity model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityParams {
    /// Smoothing in `alpha / (distance + alpha)`.
    pub alpha: f64,
    /// Weights of the first primitive, other primitives, relational
    /// primitives and relation-symbol primitives.
    pub beta: [f64; 4],
    /// Score of a sememe against a literal word.
    pub gamma: f64,
    /// Score of any value against a missing one.
    pub delta: f64,
    /// Distance between sememes with no common ancestor, or unknown tokens.
    pub default_distance: u32,
}

impl Default for SimilarityParams {
    fn default() -> Self {
        SimilarityParams {
            alpha: 1.6,
            beta: [0.5, 0.2, 0.17, 0.13],
            gamma: 0.2,
            delta: 0.2,
            default_distance: 20,
        }
    }
}

impl SimilarityParams {
    pub fn validate(&self) -> Result<()> {
        if !(self.alpha > 0.0) {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                format!("alpha must be positive, got {}", self.alpha),
            ));
        }
        if self.beta.iter().any(|b| *b < 0.0) {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                format!("beta weights must be non-negative, got {:?}", self.beta),
            ));
        }
        let sum: f64 = self.beta.iter().sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                format!("beta weights must sum to 1, got {}", sum),
            ));
        }
        for (name, value) in [("gamma", self.gamma), ("delta", self.delta)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::new(
                    ErrorKind::InvalidArgument,
                    format!("{} must lie in [0, 1], got {}", name, value),
                ));
            }
        }
        Ok(())
    }
}
