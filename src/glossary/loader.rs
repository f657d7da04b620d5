use std::path::Path;
use tracing::{info, warn};
use crate::core::error::{Error, Result};
use crate::core::utils::for_each_line;
use crate::glossary::parser::GlossaryParser;
use crate::store::word_store::WordStore;

/// Outcome of reading a glossary file.
#[derive(Debug)]
pub struct GlossaryLoad {
    pub store: WordStore,
    pub skipped_lines: usize,
}

/// Build a word store from a glossary file. Malformed lines are logged and
/// skipped; failing to open or read the file aborts the load.
pub fn load_glossary(path: &Path) -> Result<GlossaryLoad> {
    load_glossary_with(path, &GlossaryParser::new())
}

pub fn load_glossary_with(path: &Path, parser: &GlossaryParser) -> Result<GlossaryLoad> {
    let mut store = WordStore::new();
    let mut skipped_lines = 0;

    for_each_line(path, |line_no, line| {
        let parsed = match line {
            Ok(text) if text.trim().is_empty() => return,
            Ok(text) => parser.parse_line(text),
            Err(lossy) => Err(Error::parse(format!("invalid UTF-8: {}", lossy))),
        };
        match parsed {
            Ok(record) => store.insert(record),
            Err(e) => {
                warn!(line = line_no, error = %e, "skipping glossary line");
                skipped_lines += 1;
            }
        }
    })?;

    info!(
        path = %path.display(),
        words = store.len(),
        senses = store.sense_count(),
        skipped = skipped_lines,
        "loaded glossary"
    );

    Ok(GlossaryLoad { store, skipped_lines })
}
