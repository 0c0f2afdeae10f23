//! # samhsa-loader
//!
//! Loader and normalizer for SAMHSA-related reference code lists.
//!
//! Reads the six code lists (DRG, CPT, ICD-9 diagnosis/procedure, ICD-10
//! diagnosis/procedure) from named CSV sources, normalizes every code, and
//! assembles the immutable [`ReferenceTables`] the matcher evaluates claims
//! against.
//!
//! ## Features
//!
//! - `parallel` (default): reads the six code lists concurrently via rayon.
//!
//! ## Usage
//!
//! ```rust
//! use samhsa_loader::{build_reference_tables, MemorySource};
//!
//! let source = MemorySource::new()
//!     .with_resource("codes-drg.csv", "MS-DRGs\nMS-DRG 896\n")
//!     .with_resource("codes-cpt.csv", "CPT Code\nH0005\n")
//!     .with_resource("codes-icd-9-diagnosis.csv", "ICD-9-CM Diagnosis Code\n291.0\n")
//!     .with_resource("codes-icd-9-procedure.csv", "ICD-9-CM\n94.61\n")
//!     .with_resource("codes-icd-10-diagnosis.csv", "ICD-10-CM Diagnosis Code\nF11.20\n")
//!     .with_resource("codes-icd-10-procedure.csv", "ICD-10-PCS Code\nHZ2ZZZZ\n");
//!
//! let tables = build_reference_tables(&source).unwrap();
//! assert!(tables.drg().contains_code("MS-DRG 896"));
//! assert!(tables.icd10_diagnosis().contains_code("F11.20"));
//! ```

#![warn(missing_docs)]

mod code_set;
mod loader;
pub mod normalize;
mod parser;
mod source;
mod tables;
mod types;

pub use code_set::ReferenceCodeSet;
pub use loader::{discover_code_lists, CODE_LIST_DIR};
pub use parser::CodeListReader;
pub use source::{CodeSource, DirectorySource, MemorySource};
pub use tables::{
    build_reference_tables, build_reference_tables_with_config, load_code_set, ReferenceTables,
};
pub use types::{CategoryStats, CodeListFiles, LoadError, LoadResult, LoadStats, LoaderConfig};

// Re-export samhsa-types for convenience
pub use samhsa_types;
