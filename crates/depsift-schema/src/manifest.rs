use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Decoded `pyproject.toml` document. Keys keep their declaration order.
pub type Manifest = toml::Table;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("manifest not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("failed to read manifest file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse manifest: {0}")]
    Malformed(#[from] toml::de::Error),
}

pub fn parse_manifest_str(input: &str) -> Result<Manifest, ManifestError> {
    Ok(toml::from_str(input)?)
}

/// Read and decode the manifest at `path`.
///
/// Existence is checked before the file is opened, so a missing path is
/// reported as [`ManifestError::NotFound`] rather than an I/O error.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<Manifest, ManifestError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ManifestError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let manifest = parse_manifest_str(&content)?;
    tracing::debug!(
        "loaded manifest {} ({} top-level keys)",
        path.display(),
        manifest.len()
    );
    Ok(manifest)
}
