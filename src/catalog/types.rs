//! Catalog type definitions.

use crate::constants::SAMPLE_FIELD;
use crate::error::{Error, Result};
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};
use tracing::debug;

/// One element of a numeric sequence field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// Integer element.
    Int(i64),
    /// Real element.
    Real(f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}

/// Value of a single catalog field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Real scalar.
    Real(f64),
    /// Integer scalar.
    Int(i64),
    /// String scalar (unquoted booleans included).
    Str(String),
    /// Sequence of numbers.
    Seq(Vec<Number>),
}

/// A parsed model catalog.
///
/// Top-level keys are model aliases; each maps to the default
/// preprocessing fields of that model. Entry order follows the document.
#[derive(Debug, Clone)]
pub struct Catalog {
    path: PathBuf,
    entries: Mapping,
}

impl Catalog {
    pub(crate) fn new(path: PathBuf, entries: Mapping) -> Self {
        Self { path, entries }
    }

    /// Path the catalog was read from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All aliases in document order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().filter_map(Value::as_str)
    }

    /// Aliases whose `sample` field equals `sample`, in document order.
    #[must_use]
    pub fn aliases_for_sample(&self, sample: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, node)| node.get(SAMPLE_FIELD).and_then(Value::as_str) == Some(sample))
            .filter_map(|(name, _)| name.as_str().map(str::to_string))
            .collect()
    }

    /// Look up `field` of the entry named `alias`.
    ///
    /// Returns `Ok(None)` if the alias or the field is missing.
    pub fn field(&self, alias: &str, field: &str) -> Result<Option<FieldValue>> {
        let Some(node) = self.entries.get(alias) else {
            debug!("Alias '{alias}' not in catalog {}", self.path.display());
            return Ok(None);
        };
        let Some(value) = node.as_mapping().and_then(|m| m.get(field)) else {
            return Ok(None);
        };

        let field_err = || Error::UnexpectedFieldFormat {
            alias: alias.to_string(),
            field: field.to_string(),
        };

        let resolved = match value {
            Value::Null => return Ok(None),
            Value::Bool(b) => FieldValue::Str(b.to_string()),
            Value::String(s) => FieldValue::Str(s.clone()),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Int(i),
                None => FieldValue::Real(n.as_f64().ok_or_else(field_err)?),
            },
            Value::Sequence(items) => {
                let mut numbers = Vec::with_capacity(items.len());
                for (index, item) in items.iter().enumerate() {
                    let number = item
                        .as_i64()
                        .map(Number::Int)
                        .or_else(|| item.as_f64().map(Number::Real));
                    numbers.push(number.ok_or_else(|| Error::UnexpectedValueFormat {
                        alias: alias.to_string(),
                        field: field.to_string(),
                        index,
                    })?);
                }
                FieldValue::Seq(numbers)
            }
            Value::Mapping(_) | Value::Tagged(_) => return Err(field_err()),
        };

        debug!("Catalog {alias}.{field} = {resolved:?}");
        Ok(Some(resolved))
    }
}
