pub mod completions;
pub mod list;
pub mod man_pages;
pub mod show;

use depsift_schema::{load_manifest, ExtractError, Manifest, ManifestError};
use std::path::Path;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_MANIFEST_ERROR: u8 = 2;
pub const EXIT_SPECIFIER_ERROR: u8 = 3;

/// Exit status for each library error class.
pub trait ExitStatus: std::fmt::Display {
    fn exit_code(&self) -> u8;
}

impl ExitStatus for ManifestError {
    fn exit_code(&self) -> u8 {
        EXIT_MANIFEST_ERROR
    }
}

impl ExitStatus for ExtractError {
    fn exit_code(&self) -> u8 {
        EXIT_SPECIFIER_ERROR
    }
}

/// Report a library error on stderr and hand back its exit status.
pub fn fail(err: &impl ExitStatus) -> u8 {
    eprintln!("error: {err}");
    err.exit_code()
}

pub fn json_pretty(value: &impl serde::Serialize) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))
}

pub fn read_manifest(path: &Path) -> Result<Manifest, u8> {
    load_manifest(path).map_err(|e| fail(&e))
}
