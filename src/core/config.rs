use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::core::error::Result;
use crate::scoring::params::SimilarityParams;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub glossary_path: PathBuf,   // word senses, one per line
    pub hierarchy_path: PathBuf,  // sememe tree
    pub params: SimilarityParams,
    pub workers: usize,           // threads for batch scoring
}

impl Default for Config {
    fn default() -> Self {
        Config {
            glossary_path: PathBuf::from("dict/glossary.dat"),
            hierarchy_path: PathBuf::from("dict/WHOLE.DAT"),
            params: SimilarityParams::default(),
            workers: num_cpus::get(),
        }
    }
}

impl Config {
    /// Read a JSON config; missing fields fall back to the defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        config.params.validate()?;
        Ok(config)
    }
}
