use crate::extract::{extract, ExtractError, Lookup};
use crate::manifest::Manifest;
use crate::specifier::{Specifier, BUILD_REQUIRES, OPTIONAL_DEPENDENCIES, PROJECT_DEPENDENCIES};
use serde::Serialize;
use std::fmt;

/// Which dependency categories to collect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub build: bool,
    pub runtime: bool,
    /// Restrict optional dependencies to a single group.
    pub group: Option<String>,
    pub lenient: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            build: true,
            runtime: true,
            group: None,
            lenient: false,
        }
    }
}

impl Selection {
    fn lookup(&self) -> Lookup {
        Lookup::from_strict(!self.lenient)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "category", content = "name", rename_all = "lowercase")]
pub enum Category {
    Build,
    Runtime,
    Optional(String),
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Build => f.write_str("build time dependencies"),
            Self::Runtime => f.write_str("run time dependencies"),
            Self::Optional(group) => write!(f, "optional dependencies for {group}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    #[serde(flatten)]
    pub category: Category,
    pub packages: Vec<String>,
}

/// Dependencies grouped by category, in output order. Empty categories are
/// never present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DependencyReport {
    pub sections: Vec<Section>,
}

impl DependencyReport {
    pub fn collect(manifest: &Manifest, selection: &Selection) -> Result<Self, ExtractError> {
        let mode = selection.lookup();
        let mut report = Self::default();

        if selection.build {
            let packages = extract(manifest, &Specifier::parse(BUILD_REQUIRES), mode)?;
            report.push(Category::Build, packages);
        }
        if selection.runtime {
            let packages = extract(manifest, &Specifier::parse(PROJECT_DEPENDENCIES), mode)?;
            report.push(Category::Runtime, packages);
        }

        let optional = Specifier::parse(OPTIONAL_DEPENDENCIES);
        let groups = match &selection.group {
            Some(group) => vec![group.clone()],
            None => extract(manifest, &optional, mode)?,
        };
        for group in groups {
            let packages = extract(manifest, &optional.child(&group), mode)?;
            report.push(Category::Optional(group), packages);
        }

        Ok(report)
    }

    fn push(&mut self, category: Category, packages: Vec<String>) {
        if packages.is_empty() {
            tracing::debug!("skipping empty section: {category}");
            return;
        }
        self.sections.push(Section { category, packages });
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Names of the optional-dependency groups, in declaration order.
pub fn list_groups(manifest: &Manifest, lenient: bool) -> Result<Vec<String>, ExtractError> {
    extract(
        manifest,
        &Specifier::parse(OPTIONAL_DEPENDENCIES),
        Lookup::from_strict(!lenient),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::parse_manifest_str;

    const FULL: &str = r#"
[build-system]
requires = ["setuptools", "wheel"]

[project]
dependencies = ["requests", "click"]

[project.optional-dependencies]
test = ["pytest"]
docs = ["sphinx"]
"#;

    fn categories(report: &DependencyReport) -> Vec<String> {
        report.sections.iter().map(|s| s.category.to_string()).collect()
    }

    #[test]
    fn collects_all_sections_in_order() {
        let m = parse_manifest_str(FULL).unwrap();
        let report = DependencyReport::collect(&m, &Selection::default()).unwrap();
        assert_eq!(
            categories(&report),
            [
                "build time dependencies",
                "run time dependencies",
                "optional dependencies for test",
                "optional dependencies for docs",
            ]
        );
        assert_eq!(report.sections[1].packages, ["requests", "click"]);
    }

    #[test]
    fn suppresses_build_and_runtime() {
        let m = parse_manifest_str(FULL).unwrap();
        let selection = Selection {
            build: false,
            runtime: false,
            ..Selection::default()
        };
        let report = DependencyReport::collect(&m, &selection).unwrap();
        assert_eq!(
            categories(&report),
            ["optional dependencies for test", "optional dependencies for docs"]
        );
    }

    #[test]
    fn single_group() {
        let m = parse_manifest_str(FULL).unwrap();
        let selection = Selection {
            group: Some("docs".to_owned()),
            ..Selection::default()
        };
        let report = DependencyReport::collect(&m, &selection).unwrap();
        assert_eq!(report.sections.len(), 3);
        assert_eq!(report.sections[2].category, Category::Optional("docs".to_owned()));
        assert_eq!(report.sections[2].packages, ["sphinx"]);
    }

    #[test]
    fn unknown_group_is_missing_specifier() {
        let m = parse_manifest_str(FULL).unwrap();
        let selection = Selection {
            group: Some("gui".to_owned()),
            ..Selection::default()
        };
        let err = DependencyReport::collect(&m, &selection).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingSpecifier { position: 2, ref segment, .. } if segment == "gui"
        ));
    }

    #[test]
    fn missing_build_system_fails_by_default() {
        let m = parse_manifest_str("[project]\ndependencies = [\"requests\"]\n").unwrap();
        let err = DependencyReport::collect(&m, &Selection::default()).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingSpecifier { position: 0, ref segment, .. } if segment == "build-system"
        ));
    }

    #[test]
    fn project_without_extras_fails_by_default() {
        let m = parse_manifest_str(
            "[build-system]\nrequires = [\"flit_core\"]\n[project]\ndependencies = [\"requests\"]\n",
        )
        .unwrap();
        let err = DependencyReport::collect(&m, &Selection::default()).unwrap_err();
        assert_eq!(
            err,
            ExtractError::MissingSpecifier {
                segment: "optional-dependencies".to_owned(),
                position: 1,
                specifier: "project.optional-dependencies".to_owned(),
            }
        );
    }

    #[test]
    fn project_without_extras_is_fine_when_lenient() {
        let m = parse_manifest_str(
            "[build-system]\nrequires = [\"flit_core\"]\n[project]\ndependencies = [\"requests\"]\n",
        )
        .unwrap();
        let selection = Selection {
            lenient: true,
            ..Selection::default()
        };
        let report = DependencyReport::collect(&m, &selection).unwrap();
        assert_eq!(
            categories(&report),
            ["build time dependencies", "run time dependencies"]
        );
    }

    #[test]
    fn scalar_extras_table_is_not_a_sequence() {
        let m = parse_manifest_str(
            "[build-system]\nrequires = []\n[project]\ndependencies = []\n\
             optional-dependencies = \"oops\"\n",
        )
        .unwrap();
        let err = DependencyReport::collect(&m, &Selection::default()).unwrap_err();
        assert_eq!(
            err,
            ExtractError::NotASequence {
                specifier: "project.optional-dependencies".to_owned(),
                found: "string".to_owned(),
            }
        );
    }

    #[test]
    fn empty_categories_are_dropped() {
        let m = parse_manifest_str(
            "[build-system]\nrequires = []\n[project]\ndependencies = [\"requests\"]\n\
             [project.optional-dependencies]\ntest = []\n",
        )
        .unwrap();
        let report = DependencyReport::collect(&m, &Selection::default()).unwrap();
        assert_eq!(categories(&report), ["run time dependencies"]);
    }

    #[test]
    fn lenient_selection_tolerates_missing_tables() {
        let m = parse_manifest_str("[tool.black]\nline-length = 88\n").unwrap();
        let selection = Selection {
            group: Some("test".to_owned()),
            lenient: true,
            ..Selection::default()
        };
        let report = DependencyReport::collect(&m, &selection).unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn lists_groups() {
        let m = parse_manifest_str(FULL).unwrap();
        assert_eq!(list_groups(&m, false).unwrap(), ["test", "docs"]);
    }

    #[test]
    fn listing_groups_without_table() {
        let m = parse_manifest_str("[project]\nname = \"x\"\n").unwrap();
        assert!(list_groups(&m, false).is_err());
        assert!(list_groups(&m, true).unwrap().is_empty());
    }

    #[test]
    fn serializes_sections() {
        let m = parse_manifest_str(FULL).unwrap();
        let selection = Selection {
            build: false,
            group: Some("test".to_owned()),
            ..Selection::default()
        };
        let report = DependencyReport::collect(&m, &selection).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sections": [
                    { "category": "runtime", "packages": ["requests", "click"] },
                    { "category": "optional", "name": "test", "packages": ["pytest"] },
                ]
            })
        );
    }
}
