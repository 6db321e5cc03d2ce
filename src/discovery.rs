use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::VarsError;

/// Expand a leading `~/` to the user's home directory.
pub fn expand_home(raw_path: &str) -> Result<PathBuf, VarsError> {
    match raw_path.strip_prefix("~/") {
        Some(rest) => {
            let home = dirs::home_dir().ok_or_else(|| VarsError::FileError {
                message: "Could not determine home directory for ~ expansion".into(),
                path: raw_path.to_string(),
                hint: Some("Set HOME or pass an absolute path".into()),
                code: Some(300),
            })?;
            Ok(home.join(rest))
        }
        None => Ok(PathBuf::from(raw_path)),
    }
}

/// Find every file under `root` whose extension is exactly `extension`.
///
/// Directory entries are visited in file-name order, depth first, so the
/// result order is stable across runs. That order is the merge order for
/// definition files. Directories named in `excluded_dirs` are not entered.
pub fn discover_files(
    root: &Path,
    extension: &str,
    excluded_dirs: &[String],
) -> Result<Vec<PathBuf>, VarsError> {
    let extension = extension.trim_start_matches('.');
    let mut found = Vec::new();
    walk(root, extension, excluded_dirs, &mut found)?;
    Ok(found)
}

fn walk(
    dir: &Path,
    extension: &str,
    excluded_dirs: &[String],
    found: &mut Vec<PathBuf>,
) -> Result<(), VarsError> {
    let read_error = |e: std::io::Error| VarsError::FileError {
        message: format!("Failed to read directory: {}", e),
        path: dir.to_string_lossy().to_string(),
        hint: Some("Check that the directory exists and is readable".into()),
        code: Some(303),
    };

    let mut entries = fs::read_dir(dir)
        .map_err(read_error)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_error)?;
    entries.sort_by_key(|entry| entry.file_name());

    for entry in entries {
        let path = entry.path();
        let file_type = entry.file_type().map_err(read_error)?;

        if file_type.is_dir() {
            let name = entry.file_name();
            if excluded_dirs.iter().any(|ex| name.to_str() == Some(ex.as_str())) {
                trace!(path = %path.display(), "skipping excluded directory");
                continue;
            }
            walk(&path, extension, excluded_dirs, found)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some(extension) {
            found.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_discover_by_exact_extension_in_lexical_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "b.tfvars");
        touch(root, "a.tfvars");
        touch(root, "main.tf");
        touch(root, "env/prod.tfvars");
        touch(root, "env/dev.tfvars");
        touch(root, "z.tfvars.bak");

        let found = discover_files(root, "tfvars", &[]).unwrap();
        let rel: Vec<_> = found
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().replace('\\', "/"))
            .collect();

        assert_eq!(rel, vec!["a.tfvars", "b.tfvars", "env/dev.tfvars", "env/prod.tfvars"]);

        let templates = discover_files(root, ".tf", &[]).unwrap();
        assert_eq!(templates, vec![root.join("main.tf")]);
    }

    #[test]
    fn test_discover_skips_excluded_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "main.tf");
        touch(root, ".terraform/modules/x/main.tf");

        let found = discover_files(root, "tf", &[".terraform".to_string()]).unwrap();
        assert_eq!(found, vec![root.join("main.tf")]);

        let all = discover_files(root, "tf", &[]).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_discover_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_files(&dir.path().join("absent"), "tf", &[]).unwrap_err();
        assert!(matches!(err, VarsError::FileError { code: Some(303), .. }));
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("infra/live").unwrap(), PathBuf::from("infra/live"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/infra").unwrap(), home.join("infra"));
        }
    }
}
