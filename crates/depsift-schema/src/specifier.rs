use std::fmt;

/// Well-known paths inside a `pyproject.toml`.
pub const BUILD_REQUIRES: &str = "build-system.requires";
pub const PROJECT_DEPENDENCIES: &str = "project.dependencies";
pub const OPTIONAL_DEPENDENCIES: &str = "project.optional-dependencies";

/// A dot-separated key path through nested manifest tables, such as
/// `project.optional-dependencies.test`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Specifier {
    raw: String,
    segments: Vec<String>,
}

impl Specifier {
    pub fn parse(raw: &str) -> Self {
        Self {
            raw: raw.to_owned(),
            segments: raw.split('.').map(str::to_owned).collect(),
        }
    }

    /// Append one segment. The segment is taken literally, so a group name
    /// containing a dot still resolves as a single key lookup.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_owned());
        Self {
            raw: format!("{}.{segment}", self.raw),
            segments,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<&str> for Specifier {
    fn from(raw: &str) -> Self {
        Self::parse(raw)
    }
}
