//! Catalog file loading.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::{info, warn};

/// Load the model catalog at `path`.
///
/// Returns `Ok(None)` if `path` is not an existing regular file.
pub fn load_catalog(path: &Path) -> Result<Option<Catalog>> {
    if !path.is_file() {
        warn!("Model catalog not found: {}", path.display());
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|e| Error::CatalogRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let entries = parse_catalog(&contents, path)?;
    info!(
        "Loaded model catalog {} ({} entries)",
        path.display(),
        entries.len()
    );
    Ok(Some(Catalog::new(path.to_path_buf(), entries)))
}

/// Parse catalog text into its top-level mapping.
fn parse_catalog(contents: &str, path: &Path) -> Result<Mapping> {
    let body = strip_directive(contents);
    if is_blank_document(body) {
        return Ok(Mapping::new());
    }

    let body = quote_bool_spellings(body);
    let value: Value = serde_yaml::from_str(&body).map_err(|e| Error::CatalogParse {
        path: path.to_path_buf(),
        source: e,
    })?;

    match value {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(entries) => Ok(entries),
        _ => Err(Error::CatalogShape {
            path: path.to_path_buf(),
        }),
    }
}

/// Drop a leading `%YAML` directive.
///
/// Structured-storage writers emit `%YAML:1.0`, which YAML parsers reject.
fn strip_directive(contents: &str) -> &str {
    let trimmed = contents.trim_start();
    if trimmed.starts_with("%YAML") {
        trimmed.split_once('\n').map_or("", |(_, rest)| rest)
    } else {
        contents
    }
}

/// Quote capitalised boolean spellings in `key: value` lines.
///
/// Structured-storage readers only resolve lowercase `true`/`false`;
/// `True` or `FALSE` stay strings, so they must not become booleans here.
fn quote_bool_spellings(body: &str) -> String {
    const SPELLINGS: [&str; 4] = ["True", "TRUE", "False", "FALSE"];

    let mut out = String::with_capacity(body.len());
    for line in body.lines() {
        let quoted = line.split_once(": ").and_then(|(key, value)| {
            let (token, comment) = value.find(" #").map_or((value, ""), |i| value.split_at(i));
            SPELLINGS
                .contains(&token.trim())
                .then(|| format!("{key}: \"{}\"{comment}", token.trim()))
        });
        out.push_str(quoted.as_deref().unwrap_or(line));
        out.push('\n');
    }
    out
}

/// Whether the document has nothing but comments and markers.
fn is_blank_document(body: &str) -> bool {
    body.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}
