//! Load benchmark objects from JSON input.

use std::path::Path;

use crate::model::entity::BsbmObject;

/// Errors that can occur during loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parse error on line {line}: {source}")]
    Json {
        line: usize,
        source: serde_json::Error,
    },
}

/// Load objects from a file holding either one JSON array or one JSON object
/// per line (blank lines ignored).
pub fn load_objects(path: &Path) -> Result<Vec<BsbmObject>, LoadError> {
    let content = std::fs::read_to_string(path)?;
    parse_objects(&content)
}

/// Parse objects from a JSON array or newline-delimited JSON text.
pub fn parse_objects(content: &str) -> Result<Vec<BsbmObject>, LoadError> {
    if content.trim_start().starts_with('[') {
        return serde_json::from_str(content).map_err(|source| LoadError::Json {
            line: source.line(),
            source,
        });
    }

    let mut objects = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let object = serde_json::from_str(line).map_err(|source| LoadError::Json {
            line: i + 1,
            source,
        })?;
        objects.push(object);
    }
    Ok(objects)
}
