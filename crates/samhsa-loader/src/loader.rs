//! Code list discovery.

use std::fs;
use std::path::{Path, PathBuf};

use samhsa_types::CodeCategory;

use crate::types::{CodeListFiles, LoadError, LoadResult, LoaderConfig};

/// Name of the directory code lists are conventionally shipped in.
pub const CODE_LIST_DIR: &str = "samhsa-related-codes";

/// Discovers the six code list files under `path`.
///
/// `path` may be the code list directory itself, a directory containing a
/// `samhsa-related-codes` subdirectory, or a directory one level above that.
///
/// # Errors
/// Returns [`LoadError::DirectoryNotFound`] if `path` does not exist, and
/// [`LoadError::RequiredResourcesMissing`] if any list is absent.
pub fn discover_code_lists<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> LoadResult<CodeListFiles> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LoadError::DirectoryNotFound {
            path: path.display().to_string(),
        });
    }

    let directory = find_code_list_dir(path, config)?;
    let mut files = CodeListFiles::new(&directory);

    for category in CodeCategory::ALL {
        let candidate = directory.join(config.resource_name(category));
        if candidate.is_file() {
            files.files.insert(category, candidate);
        }
    }

    if !files.has_required_files() {
        let missing: Vec<&str> = files
            .missing_categories()
            .into_iter()
            .map(|c| config.resource_name(c))
            .collect();
        return Err(LoadError::RequiredResourcesMissing {
            resources: missing.join(", "),
            directory: directory.display().to_string(),
        });
    }

    Ok(files)
}

/// Finds the directory holding the code lists.
fn find_code_list_dir(base: &Path, config: &LoaderConfig) -> LoadResult<PathBuf> {
    // Check if base already holds code lists
    if holds_code_lists(base, config) {
        return Ok(base.to_path_buf());
    }

    let nested = base.join(CODE_LIST_DIR);
    if nested.is_dir() {
        return Ok(nested);
    }

    // Search one level deep
    for entry in fs::read_dir(base)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            let sub_nested = entry.path().join(CODE_LIST_DIR);
            if sub_nested.is_dir() {
                return Ok(sub_nested);
            }
        }
    }

    // Fall back to base so the caller reports exactly what is missing
    Ok(base.to_path_buf())
}

/// Returns true if any configured code list exists directly in `dir`.
fn holds_code_lists(dir: &Path, config: &LoaderConfig) -> bool {
    CodeCategory::ALL
        .iter()
        .any(|&c| dir.join(config.resource_name(c)).is_file())
}
