//! # samhsa-matcher
//!
//! Fail-safe SAMHSA sensitivity classification for healthcare claims.
//!
//! Given the [`ReferenceTables`](samhsa_loader::ReferenceTables) built by
//! `samhsa-loader`, decides whether a claim's coded fields contain
//! SAMHSA-related substance-use codes. Anything the matcher cannot vouch
//! for, such as an unrecognized coding system, is treated as sensitive.
//!
//! ## Features
//!
//! - `parallel` (default): [`evaluate_batch`] spreads claims over rayon
//!   worker threads.
//!
//! ## Usage
//!
//! ```rust
//! use samhsa_loader::{ReferenceCodeSet, ReferenceTables};
//! use samhsa_matcher::evaluate;
//! use samhsa_types::{well_known, ClaimCodedView, CodeCategory, CodedConcept, Coding, Generation};
//!
//! let tables = ReferenceTables::from_sets([
//!     ReferenceCodeSet::from_raw(CodeCategory::Icd10Diagnosis, ["F11.20"]),
//! ]);
//!
//! let claim = ClaimCodedView::new()
//!     .with_diagnosis(CodedConcept::single(Coding::new(well_known::ICD_10, "F1120")));
//! assert!(evaluate(&claim, &tables, Generation::R4));
//!
//! let unknown = ClaimCodedView::new()
//!     .with_procedure(CodedConcept::single(Coding::new("urn:local", "A0001")));
//! assert!(evaluate(&unknown, &tables, Generation::Base));
//! ```

#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod matcher;
pub mod policy;
mod report;
pub mod resolver;

pub use config::{MatcherConfig, CODES_PATH_ENV, GENERATION_ENV};
pub use engine::{
    evaluate, evaluate_batch, explain, explain_batch, global_tables, init_global, Finding,
};
pub use error::{ConfigError, SystemMismatch};
pub use matcher::{fail_safe, is_cpt_member, is_member, is_sensitive_coded_concept, Matcher};
pub use report::{ClaimEntry, VerdictLine};
pub use resolver::{
    classify_procedure_systems, classify_systems, coding_systems, resolve_category, FieldKind,
    SystemMatch,
};

// Re-export the lower crates for convenience
pub use samhsa_loader;
pub use samhsa_types;
