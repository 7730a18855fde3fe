//! Key-path resolution over a decoded manifest.
//!
//! A path resolves to an ordered list of strings: array elements in
//! declaration order, or the keys of a table in declaration order. In
//! [`Lookup::Strict`] mode every segment must name an existing key inside a
//! table; in [`Lookup::Lenient`] mode anything unresolvable yields an empty
//! list instead.

use crate::manifest::Manifest;
use crate::specifier::Specifier;
use thiserror::Error;
use toml::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lookup {
    #[default]
    Strict,
    Lenient,
}

impl Lookup {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("the specifier '{segment}' at position {position} (0-indexed) of '{specifier}' is invalid")]
    MissingSpecifier {
        segment: String,
        position: usize,
        specifier: String,
    },
    #[error("'{specifier}' resolves to a {found}, expected an array or table")]
    NotASequence { specifier: String, found: String },
}

/// Resolve `specifier` against `manifest` and return the values found there.
///
/// A segment that is absent, or that would index into something other than
/// a table, counts as missing.
pub fn extract(
    manifest: &Manifest,
    specifier: &Specifier,
    mode: Lookup,
) -> Result<Vec<String>, ExtractError> {
    let mut table = manifest;
    let mut found: Option<&Value> = None;

    for (position, segment) in specifier.segments().iter().enumerate() {
        if let Some(value) = found {
            match value {
                Value::Table(inner) => table = inner,
                _ => return missing(specifier, segment, position, mode),
            }
        }
        match table.get(segment.as_str()) {
            Some(value) => found = Some(value),
            None => return missing(specifier, segment, position, mode),
        }
    }

    let values = match found {
        Some(value) => sequence_of(specifier, value, mode)?,
        None => Vec::new(),
    };
    tracing::trace!("{specifier} -> {} entries", values.len());
    Ok(values)
}

fn missing(
    specifier: &Specifier,
    segment: &str,
    position: usize,
    mode: Lookup,
) -> Result<Vec<String>, ExtractError> {
    match mode {
        Lookup::Strict => Err(ExtractError::MissingSpecifier {
            segment: segment.to_owned(),
            position,
            specifier: specifier.to_string(),
        }),
        Lookup::Lenient => {
            tracing::trace!("{specifier}: '{segment}' at position {position} not found");
            Ok(Vec::new())
        }
    }
}

fn sequence_of(
    specifier: &Specifier,
    value: &Value,
    mode: Lookup,
) -> Result<Vec<String>, ExtractError> {
    match value {
        Value::Array(items) => Ok(items.iter().map(render_item).collect()),
        Value::Table(table) => Ok(table.keys().cloned().collect()),
        scalar => match mode {
            Lookup::Strict => Err(ExtractError::NotASequence {
                specifier: specifier.to_string(),
                found: scalar.type_str().to_owned(),
            }),
            Lookup::Lenient => Ok(Vec::new()),
        },
    }
}

fn render_item(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
