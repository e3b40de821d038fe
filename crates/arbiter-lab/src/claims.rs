//! Claim file discovery and loading
//!
//! Claims are JSON files; parsing happens here at the collaborator layer,
//! never inside the judges. A file that parses but is not a JSON object is
//! still handed to the pipeline, which reduces it to NO-EVAL(PARSE) rather
//! than failing the whole batch.

use crate::error::LabError;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Load a single claim file as parsed JSON.
pub fn load_claim_file(path: &Path) -> Result<Value, LabError> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Discover claim files (`*.json`) under a directory, sorted by path.
pub fn discover_claim_files(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, LabError> {
    if !dir.is_dir() {
        return Err(LabError::ClaimsDirNotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    collect_json_files(dir, recursive, &mut files)?;
    files.sort();

    if files.is_empty() {
        return Err(LabError::NoClaimFiles(dir.to_path_buf()));
    }
    Ok(files)
}

fn collect_json_files(
    dir: &Path,
    recursive: bool,
    out: &mut Vec<PathBuf>,
) -> Result<(), LabError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            if recursive {
                collect_json_files(&path, recursive, out)?;
            }
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            out.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_claim_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("claim.json");
        fs::write(&path, r#"{"domain": {"observables": ["O1"]}}"#).unwrap();

        let claim = load_claim_file(&path).unwrap();
        assert_eq!(claim["domain"]["observables"], json!(["O1"]));
    }

    #[test]
    fn test_load_invalid_json_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "not json at all").unwrap();

        assert!(matches!(load_claim_file(&path), Err(LabError::Json(_))));
    }

    #[test]
    fn test_discover_sorted_json_only() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.json"), "{}").unwrap();
        fs::write(dir.path().join("a.json"), "{}").unwrap();
        fs::write(dir.path().join("notes.txt"), "skip me").unwrap();

        let files = discover_claim_files(dir.path(), false).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.json", "b.json"]);
    }

    #[test]
    fn test_discover_recursive() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("deep.json"), "{}").unwrap();

        assert!(matches!(
            discover_claim_files(dir.path(), false),
            Err(LabError::NoClaimFiles(_))
        ));
        let files = discover_claim_files(dir.path(), true).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn test_discover_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            discover_claim_files(&missing, false),
            Err(LabError::ClaimsDirNotFound(_))
        ));
    }
}
