use std::path::Path;
use tracing::{info, warn};
use crate::core::error::{Error, Result};
use crate::core::utils::for_each_line;
use crate::hierarchy::primitive::{PrimitiveHierarchy, PrimitiveId, PrimitiveNode};

/// Outcome of reading a hierarchy file.
#[derive(Debug)]
pub struct HierarchyLoad {
    pub hierarchy: PrimitiveHierarchy,
    pub skipped_lines: usize,
}

/// Reads `<id> <english|chinese> <parent-id>` lines. The sememe is
/// registered under its gloss, the part after `|`.
pub fn load_hierarchy(path: &Path) -> Result<HierarchyLoad> {
    let mut builder = PrimitiveHierarchy::builder();
    let mut skipped_lines = 0;

    for_each_line(path, |line_no, line| {
        let parsed = match line {
            Ok(text) if text.trim().is_empty() => return,
            Ok(text) => parse_node_line(text),
            Err(lossy) => Err(Error::parse(format!("invalid UTF-8: {}", lossy))),
        };
        match parsed {
            Ok(node) => builder.push(node),
            Err(e) => {
                warn!(line = line_no, error = %e, "skipping hierarchy line");
                skipped_lines += 1;
            }
        }
    })?;

    let hierarchy = builder.build();
    info!(
        path = %path.display(),
        primitives = hierarchy.len(),
        skipped = skipped_lines,
        "loaded sememe hierarchy"
    );

    Ok(HierarchyLoad { hierarchy, skipped_lines })
}

pub fn parse_node_line(line: &str) -> Result<PrimitiveNode> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < 3 {
        return Err(Error::parse(format!("expected 3 fields: {}", line)));
    }

    let id = parse_id(fields[0], line)?;
    let parent = parse_id(fields[2], line)?;
    let name = match fields[1].split_once('|') {
        Some((_, gloss)) if !gloss.is_empty() => gloss,
        _ => fields[1],
    };

    Ok(PrimitiveNode {
        id,
        name: name.to_string(),
        parent,
    })
}

fn parse_id(field: &str, line: &str) -> Result<PrimitiveId> {
    field
        .parse::<PrimitiveId>()
        .map_err(|_| Error::parse(format!("bad id '{}' in: {}", field, line)))
}
