use super::{fail, json_pretty, read_manifest, EXIT_SUCCESS};
use depsift_schema::list_groups;
use std::path::Path;

pub fn run(file: &Path, lenient: bool, json: bool) -> Result<u8, String> {
    let manifest = match read_manifest(file) {
        Ok(manifest) => manifest,
        Err(code) => return Ok(code),
    };
    let groups = match list_groups(&manifest, lenient) {
        Ok(groups) => groups,
        Err(e) => return Ok(fail(&e)),
    };
    if json {
        println!("{}", json_pretty(&groups)?);
    } else {
        for group in &groups {
            println!("{group}");
        }
    }
    Ok(EXIT_SUCCESS)
}
