//! Coding system identity resolution.
//!
//! Classifies the set of systems a coded concept uses against the systems a
//! category accepts, and maps a single system to the category that governs
//! it for a given claim field.

use std::collections::BTreeSet;

use samhsa_types::{well_known, CodeCategory, CodedConcept};

/// The kind of claim field a coding appears in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Diagnosis code fields.
    Diagnosis,
    /// ICD procedure code fields on institutional claims.
    IcdProcedure,
    /// Line-item product/service fields.
    LineItem,
    /// Claim-level package (DRG) field.
    Package,
}

/// How a concept's system set relates to a category's accepted systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemMatch {
    /// Exactly the category's canonical system.
    KnownExact,
    /// Exactly the category's backward-compatible system set.
    KnownBackwardCompatible,
    /// Anything else, including empty, mixed and absent systems.
    Unknown,
}

impl SystemMatch {
    /// Returns true for either known classification.
    pub fn is_known(self) -> bool {
        !matches!(self, SystemMatch::Unknown)
    }
}

/// Collects the distinct systems of a concept. An absent system is kept as
/// its own member (`None`).
pub fn coding_systems(concept: &CodedConcept) -> BTreeSet<Option<&str>> {
    concept.codings().iter().map(|coding| coding.system()).collect()
}

/// Classifies a concept's systems against `category`.
pub fn classify_systems(concept: &CodedConcept, category: CodeCategory) -> SystemMatch {
    let systems = coding_systems(concept);
    if systems.is_empty() {
        return SystemMatch::Unknown;
    }

    if systems.len() == 1 && systems.contains(&Some(category.system())) {
        return SystemMatch::KnownExact;
    }

    if let Some(compatible) = category.backward_compatible_systems() {
        let expected: BTreeSet<Option<&str>> = compatible.iter().map(|s| Some(*s)).collect();
        if systems == expected {
            return SystemMatch::KnownBackwardCompatible;
        }
    }

    SystemMatch::Unknown
}

/// Classifies a procedure concept's systems against the CPT category.
pub fn classify_procedure_systems(concept: &CodedConcept) -> SystemMatch {
    classify_systems(concept, CodeCategory::Cpt)
}

/// Maps a system to the category that governs it in `field`.
///
/// Returns `None` for absent and unrecognized systems; callers treat those
/// as sensitive.
pub fn resolve_category(field: FieldKind, system: Option<&str>) -> Option<CodeCategory> {
    match (field, system?) {
        (FieldKind::Diagnosis, well_known::ICD_9) => Some(CodeCategory::Icd9Diagnosis),
        (FieldKind::Diagnosis, well_known::ICD_10) => Some(CodeCategory::Icd10Diagnosis),
        (FieldKind::IcdProcedure, well_known::ICD_9) => Some(CodeCategory::Icd9Procedure),
        (FieldKind::IcdProcedure, well_known::ICD_10) => Some(CodeCategory::Icd10Procedure),
        (FieldKind::LineItem, well_known::HCPCS) => Some(CodeCategory::Cpt),
        (FieldKind::Package, well_known::DRG) => Some(CodeCategory::Drg),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use samhsa_types::Coding;

    fn concept(systems: &[Option<&str>]) -> CodedConcept {
        systems
            .iter()
            .map(|system| match system {
                Some(system) => Coding::new(*system, "X"),
                None => Coding {
                    system: None,
                    code: Some("X".to_string()),
                },
            })
            .collect()
    }

    #[test]
    fn test_coding_systems_distinct() {
        let c = concept(&[Some(well_known::HCPCS), Some(well_known::HCPCS), None]);
        let systems = coding_systems(&c);
        assert_eq!(systems.len(), 2);
        assert!(systems.contains(&None));
        assert!(systems.contains(&Some(well_known::HCPCS)));
    }

    #[test]
    fn test_procedure_exact() {
        let c = concept(&[Some(well_known::HCPCS), Some(well_known::HCPCS)]);
        assert_eq!(classify_procedure_systems(&c), SystemMatch::KnownExact);
    }

    #[test]
    fn test_procedure_backward_compatible() {
        let c = concept(&[Some(well_known::HCPCS_CD), Some(well_known::HCPCS)]);
        assert_eq!(
            classify_procedure_systems(&c),
            SystemMatch::KnownBackwardCompatible
        );
        assert!(classify_procedure_systems(&c).is_known());
    }

    #[test]
    fn test_procedure_unknown() {
        assert_eq!(
            classify_procedure_systems(&CodedConcept::new()),
            SystemMatch::Unknown
        );
        // Legacy system on its own is not a known set
        let legacy_only = concept(&[Some(well_known::HCPCS_CD)]);
        assert_eq!(classify_procedure_systems(&legacy_only), SystemMatch::Unknown);

        let mixed = concept(&[Some(well_known::HCPCS), Some("urn:other")]);
        assert_eq!(classify_procedure_systems(&mixed), SystemMatch::Unknown);

        let absent = concept(&[Some(well_known::HCPCS), None]);
        assert_eq!(classify_procedure_systems(&absent), SystemMatch::Unknown);
        assert!(!classify_procedure_systems(&absent).is_known());
    }

    #[test]
    fn test_classify_other_categories() {
        let c = concept(&[Some(well_known::DRG)]);
        assert_eq!(classify_systems(&c, CodeCategory::Drg), SystemMatch::KnownExact);
        assert_eq!(classify_systems(&c, CodeCategory::Cpt), SystemMatch::Unknown);

        let c = concept(&[Some(well_known::ICD_9), Some(well_known::ICD_10)]);
        assert_eq!(
            classify_systems(&c, CodeCategory::Icd9Diagnosis),
            SystemMatch::Unknown
        );
    }

    #[test]
    fn test_resolve_category() {
        assert_eq!(
            resolve_category(FieldKind::Diagnosis, Some(well_known::ICD_10)),
            Some(CodeCategory::Icd10Diagnosis)
        );
        assert_eq!(
            resolve_category(FieldKind::IcdProcedure, Some(well_known::ICD_9)),
            Some(CodeCategory::Icd9Procedure)
        );
        assert_eq!(
            resolve_category(FieldKind::LineItem, Some(well_known::HCPCS)),
            Some(CodeCategory::Cpt)
        );
        assert_eq!(
            resolve_category(FieldKind::Package, Some(well_known::DRG)),
            Some(CodeCategory::Drg)
        );
        assert_eq!(resolve_category(FieldKind::LineItem, Some(well_known::HCPCS_CD)), None);
        assert_eq!(resolve_category(FieldKind::Package, Some(well_known::ICD_9)), None);
        assert_eq!(resolve_category(FieldKind::Diagnosis, None), None);
    }
}
