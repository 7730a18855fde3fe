//! Manifest loading and dependency extraction for depsift.
//!
//! This crate reads a `pyproject.toml` into a `toml::Table` (`load_manifest`),
//! resolves dot-separated key paths against it (`extract`), and assembles the
//! build, runtime, and optional dependency sections printed by the CLI
//! (`DependencyReport`).

pub mod extract;
pub mod manifest;
pub mod report;
pub mod specifier;

pub use extract::{extract, ExtractError, Lookup};
pub use manifest::{load_manifest, parse_manifest_str, Manifest, ManifestError};
pub use report::{list_groups, Category, DependencyReport, Section, Selection};
pub use specifier::{Specifier, BUILD_REQUIRES, OPTIONAL_DEPENDENCIES, PROJECT_DEPENDENCIES};
