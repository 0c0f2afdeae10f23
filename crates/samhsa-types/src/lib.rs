//! # samhsa-types
//!
//! Type definitions for SAMHSA-sensitive claim classification.
//!
//! This crate provides the data model shared by the loader and the matcher:
//! reference code categories, codings and coded claim fields, the claim view
//! the classifier consumes, and the well-known coding-system identifiers.
//!
//! ## Features
//!
//! - `serde` (default): Enables serialization/deserialization support via serde.
//!   Disable this feature for zero-dependency usage.
//!
//! ## Usage
//!
//! ```rust
//! use samhsa_types::{well_known, ClaimCodedView, CodeCategory, CodedConcept, Coding};
//!
//! let diagnosis = CodedConcept::single(Coding::new(well_known::ICD_9, "291.0"));
//! let claim = ClaimCodedView::new().with_diagnosis(diagnosis);
//!
//! assert_eq!(claim.diagnoses[0].codings()[0].system(), Some(CodeCategory::Icd9Diagnosis.system()));
//! ```

#![warn(missing_docs)]

mod category;
mod claim;
mod coding;
mod enums;
pub mod well_known;

// Re-export all public types at crate root
pub use category::CodeCategory;
pub use claim::ClaimCodedView;
pub use coding::{CodedConcept, Coding};
pub use enums::{ClaimType, Generation};

/// Classification outcome: `true` means the claim must be treated as
/// SAMHSA-sensitive and redacted.
pub type Verdict = bool;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_types_are_exported() {
        let _category = CodeCategory::Cpt;
        let _generation = Generation::Base;
        let _claim_type = ClaimType::Carrier;
        let _concept = CodedConcept::new();
        let _verdict: Verdict = false;
    }

    #[test]
    fn test_well_known_accessible() {
        assert_eq!(well_known::ICD_9, "http://hl7.org/fhir/sid/icd-9-cm");
        assert_eq!(CodeCategory::Drg.system(), well_known::DRG);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let claim = ClaimCodedView::new()
            .with_claim_type(ClaimType::Snf)
            .with_diagnosis(CodedConcept::single(Coding::new(well_known::ICD_10, "F1120")))
            .with_package(CodedConcept::single(Coding::new(well_known::DRG, "MS-DRG 522")));

        let json = serde_json::to_string(&claim).unwrap();
        let parsed: ClaimCodedView = serde_json::from_str(&json).unwrap();
        assert_eq!(claim, parsed);
    }
}
