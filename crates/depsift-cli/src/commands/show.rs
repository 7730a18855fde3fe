use super::{fail, json_pretty, read_manifest, EXIT_SUCCESS};
use depsift_schema::{DependencyReport, Selection};
use std::path::Path;

pub fn run(file: &Path, selection: &Selection, json: bool) -> Result<u8, String> {
    let manifest = match read_manifest(file) {
        Ok(manifest) => manifest,
        Err(code) => return Ok(code),
    };
    let report = match DependencyReport::collect(&manifest, selection) {
        Ok(report) => report,
        Err(e) => return Ok(fail(&e)),
    };
    if json {
        println!("{}", json_pretty(&report)?);
        return Ok(EXIT_SUCCESS);
    }
    for section in &report.sections {
        println!("# {}", section.category);
        for package in &section.packages {
            println!("{package}");
        }
    }
    Ok(EXIT_SUCCESS)
}
