//! Named byte sources for code lists.
//!
//! The loader never touches the filesystem directly; it asks a
//! [`CodeSource`] for a resource by name. This keeps table building testable
//! with in-memory fixtures.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::{Path, PathBuf};

use crate::types::{CodeListFiles, LoadError, LoadResult};

/// A provider of named code list resources.
///
/// Sources must be shareable across threads so the six lists can be read
/// concurrently.
pub trait CodeSource: Sync {
    /// Opens the resource called `name`.
    ///
    /// # Errors
    /// Returns [`LoadError::ResourceNotFound`] if no such resource exists, or
    /// an I/O error if it cannot be opened.
    fn open(&self, name: &str) -> LoadResult<Box<dyn Read + '_>>;

    /// Describes where resources come from, for logs and error messages.
    fn location(&self) -> String;
}

/// Code lists stored as files in a directory.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    directory: PathBuf,
}

impl DirectorySource {
    /// Creates a source reading files from `directory`.
    ///
    /// # Errors
    /// Returns [`LoadError::DirectoryNotFound`] if the directory does not exist.
    pub fn new<P: AsRef<Path>>(directory: P) -> LoadResult<Self> {
        let directory = directory.as_ref();

        if !directory.is_dir() {
            return Err(LoadError::DirectoryNotFound {
                path: directory.display().to_string(),
            });
        }

        Ok(Self {
            directory: directory.to_path_buf(),
        })
    }

    /// Creates a source over the directory of a discovered file set.
    pub fn from_files(files: &CodeListFiles) -> LoadResult<Self> {
        Self::new(&files.directory)
    }

    /// Returns the directory being read.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl CodeSource for DirectorySource {
    fn open(&self, name: &str) -> LoadResult<Box<dyn Read + '_>> {
        let path = self.directory.join(name);

        if !path.is_file() {
            return Err(LoadError::ResourceNotFound {
                name: name.to_string(),
                location: self.location(),
            });
        }

        let file = File::open(&path)?;
        Ok(Box::new(BufReader::new(file)))
    }

    fn location(&self) -> String {
        self.directory.display().to_string()
    }
}

/// Code lists held in memory, keyed by resource name.
///
/// # Example
///
/// ```
/// use samhsa_loader::{CodeSource, MemorySource};
///
/// let source = MemorySource::new().with_resource("codes-drg.csv", "MS-DRGs\nMS-DRG 896\n");
/// assert!(source.open("codes-drg.csv").is_ok());
/// assert!(source.open("codes-cpt.csv").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    resources: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    /// Creates an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) a resource.
    pub fn with_resource(mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.insert(name, data);
        self
    }

    /// Adds (or replaces) a resource in place.
    pub fn insert(&mut self, name: impl Into<String>, data: impl Into<Vec<u8>>) {
        self.resources.insert(name.into(), data.into());
    }

    /// Returns the number of resources held.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns true if no resources are held.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl CodeSource for MemorySource {
    fn open(&self, name: &str) -> LoadResult<Box<dyn Read + '_>> {
        match self.resources.get(name) {
            Some(data) => Ok(Box::new(Cursor::new(data.as_slice()))),
            None => Err(LoadError::ResourceNotFound {
                name: name.to_string(),
                location: self.location(),
            }),
        }
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
