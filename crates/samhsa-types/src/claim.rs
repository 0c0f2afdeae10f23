//! The claim view consumed by the classifier.

use crate::{ClaimType, CodedConcept};

/// The coded fields of a claim that matter for SAMHSA classification.
///
/// This is the only claim representation the classifier depends on; callers
/// build it from whatever claim model they hold.
///
/// # Examples
///
/// ```
/// use samhsa_types::{well_known, ClaimCodedView, CodedConcept, Coding};
///
/// let claim = ClaimCodedView::new()
///     .with_diagnosis(CodedConcept::single(Coding::new(well_known::ICD_10, "F1120")))
///     .with_package(CodedConcept::single(Coding::new(well_known::DRG, "522")));
///
/// assert_eq!(claim.diagnoses.len(), 1);
/// assert!(claim.package.is_some());
/// assert!(!claim.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClaimCodedView {
    /// Type of the source claim, when known.
    pub claim_type: Option<ClaimType>,
    /// Diagnosis fields (ICD-9 / ICD-10 diagnosis codes).
    pub diagnoses: Vec<CodedConcept>,
    /// Institutional procedure fields (ICD-9 / ICD-10 procedure codes).
    pub icd_procedures: Vec<CodedConcept>,
    /// Line-item procedure fields (HCPCS / CPT codes).
    pub procedures: Vec<CodedConcept>,
    /// Package (DRG) field.
    pub package: Option<CodedConcept>,
}

impl ClaimCodedView {
    /// Creates an empty claim view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the claim type.
    pub fn with_claim_type(mut self, claim_type: ClaimType) -> Self {
        self.claim_type = Some(claim_type);
        self
    }

    /// Adds a diagnosis field.
    pub fn with_diagnosis(mut self, concept: CodedConcept) -> Self {
        self.diagnoses.push(concept);
        self
    }

    /// Adds an ICD procedure field.
    pub fn with_icd_procedure(mut self, concept: CodedConcept) -> Self {
        self.icd_procedures.push(concept);
        self
    }

    /// Adds a line-item procedure field.
    pub fn with_procedure(mut self, concept: CodedConcept) -> Self {
        self.procedures.push(concept);
        self
    }

    /// Sets the package field.
    pub fn with_package(mut self, concept: CodedConcept) -> Self {
        self.package = Some(concept);
        self
    }

    /// Returns true if the view carries no coded fields at all.
    pub fn is_empty(&self) -> bool {
        self.diagnoses.is_empty()
            && self.icd_procedures.is_empty()
            && self.procedures.is_empty()
            && self.package.is_none()
    }
}
