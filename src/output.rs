//! Rendering of resolved parameters.

use crate::cli::PreprocParams;
use crate::error::Result;
use serde::Serialize;
use std::fmt::Write;
use std::path::PathBuf;

/// Parameters of one sample invocation, ready to print.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedSample {
    /// Catalog the defaults came from, if one was loaded.
    pub catalog: Option<PathBuf>,
    /// Sample tag used for alias selection.
    pub sample: String,
    /// Merged preprocessing parameters.
    #[serde(flatten)]
    pub params: PreprocParams,
}

/// Render as `key: value` lines.
#[must_use]
pub fn render_text(resolved: &ResolvedSample) -> String {
    fn opt<T: ToString>(value: Option<&T>) -> String {
        value.map_or_else(|| "-".to_string(), ToString::to_string)
    }

    let p = &resolved.params;
    let mean = p
        .mean
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");

    let mut out = String::new();
    let catalog = resolved
        .catalog
        .as_ref()
        .map(|c| c.display().to_string());
    let _ = writeln!(out, "catalog: {}", opt(catalog.as_ref()));
    let _ = writeln!(out, "sample: {}", resolved.sample);
    let _ = writeln!(out, "alias: {}", opt(p.alias.as_ref()));
    let _ = writeln!(out, "model: {}", opt(p.model.as_ref()));
    let _ = writeln!(out, "config: {}", opt(p.config.as_ref()));
    let _ = writeln!(out, "mean: {mean}");
    let _ = writeln!(out, "scale: {}", opt(p.scale.as_ref()));
    let _ = writeln!(out, "width: {}", opt(p.width.as_ref()));
    let _ = writeln!(out, "height: {}", opt(p.height.as_ref()));
    let _ = writeln!(out, "rgb: {}", p.rgb);
    let _ = writeln!(out, "classes: {}", opt(p.classes.as_ref()));
    out
}

/// Render as pretty-printed JSON.
pub fn render_json(resolved: &ResolvedSample) -> Result<String> {
    Ok(serde_json::to_string_pretty(resolved)?)
}
