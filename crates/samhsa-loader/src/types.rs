//! Loader-specific types: errors, configuration and statistics.

use std::collections::HashMap;
use std::path::PathBuf;

use samhsa_types::CodeCategory;
use thiserror::Error;

/// Errors that can occur while loading reference code lists.
///
/// Every variant is fatal: a process that cannot load all six lists must not
/// serve anything that depends on the classifier.
#[derive(Error, Debug)]
pub enum LoadError {
    /// I/O error reading a code list.
    #[error("IO error reading code list: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error.
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// A named resource does not exist in its source.
    #[error("Code list not found: {name} in {location}")]
    ResourceNotFound {
        /// The resource name that was requested.
        name: String,
        /// Where the resource was looked for.
        location: String,
    },

    /// Directory not found.
    #[error("Directory not found: {path}")]
    DirectoryNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Code lists missing from a directory during discovery.
    #[error("Required code lists not found: {resources} in {directory}")]
    RequiredResourcesMissing {
        /// The missing resource names, comma separated.
        resources: String,
        /// The directory that was searched.
        directory: String,
    },

    /// The expected column header is missing from a code list.
    #[error("Missing column '{column}' in {resource}")]
    MissingColumn {
        /// The resource that was read.
        resource: String,
        /// The name of the missing column.
        column: String,
    },
}

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Configuration for loading reference code lists.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Resource names that replace a category's default name.
    pub resource_names: HashMap<CodeCategory, String>,
    /// Whether blank values in the code column are dropped.
    pub skip_blank_values: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            resource_names: HashMap::new(),
            skip_blank_values: true,
        }
    }
}

impl LoaderConfig {
    /// Overrides the resource name used for `category`.
    pub fn with_resource_name(mut self, category: CodeCategory, name: impl Into<String>) -> Self {
        self.resource_names.insert(category, name.into());
        self
    }

    /// Returns the resource name to load for `category`.
    pub fn resource_name(&self, category: CodeCategory) -> &str {
        self.resource_names
            .get(&category)
            .map(String::as_str)
            .unwrap_or_else(|| category.resource_name())
    }
}

/// Statistics from loading one code list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryStats {
    /// Data records read from the resource.
    pub records_read: usize,
    /// Blank values dropped.
    pub blank_values: usize,
    /// Distinct normalized codes kept.
    pub distinct_codes: usize,
}

/// Statistics from loading all code lists.
#[derive(Debug, Clone, Default)]
pub struct LoadStats {
    /// Per-category statistics.
    pub categories: HashMap<CodeCategory, CategoryStats>,
    /// Time taken to load in milliseconds.
    pub load_time_ms: u64,
}

impl LoadStats {
    /// Returns the total number of distinct codes across all categories.
    pub fn total_codes(&self) -> usize {
        self.categories.values().map(|s| s.distinct_codes).sum()
    }

    /// Returns the total number of records read across all categories.
    pub fn total_records(&self) -> usize {
        self.categories.values().map(|s| s.records_read).sum()
    }
}

/// Code list files discovered in a directory.
#[derive(Debug, Clone, Default)]
pub struct CodeListFiles {
    /// Directory holding the code lists.
    pub directory: PathBuf,
    /// Discovered file per category.
    pub files: HashMap<CodeCategory, PathBuf>,
}

impl CodeListFiles {
    /// Creates an empty file set for `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            files: HashMap::new(),
        }
    }

    /// Returns the discovered path for `category`.
    pub fn path(&self, category: CodeCategory) -> Option<&PathBuf> {
        self.files.get(&category)
    }

    /// Returns true if a file was found for every category.
    pub fn has_required_files(&self) -> bool {
        CodeCategory::ALL.iter().all(|c| self.files.contains_key(c))
    }

    /// Returns the categories with no discovered file.
    pub fn missing_categories(&self) -> Vec<CodeCategory> {
        CodeCategory::ALL
            .iter()
            .copied()
            .filter(|c| !self.files.contains_key(c))
            .collect()
    }
}
