//! Code membership predicates and the fail-safe coded-concept composite.

use samhsa_loader::normalize::normalize_hcpcs;
use samhsa_loader::{ReferenceCodeSet, ReferenceTables};
use samhsa_types::{well_known, CodeCategory, CodedConcept, Coding};

use crate::error::SystemMismatch;

/// Tests whether `coding` is a member of `set`.
///
/// The coding must carry `expected_system`; anything else is a routing bug
/// and yields [`SystemMismatch`]. A coding without a code is never a member.
pub fn is_member(
    coding: &Coding,
    set: &ReferenceCodeSet,
    expected_system: &str,
) -> Result<bool, SystemMismatch> {
    if !coding.has_system(expected_system) {
        return Err(SystemMismatch {
            expected: expected_system.to_string(),
            found: coding.system().map(str::to_string),
        });
    }

    Ok(coding.code().is_some_and(|code| set.contains_code(code)))
}

/// Tests CPT membership without checking the coding's system.
pub fn is_cpt_member(coding: &Coding, set: &ReferenceCodeSet) -> bool {
    coding
        .code()
        .is_some_and(|code| set.contains_normalized(&normalize_hcpcs(code)))
}

/// Resolves a predicate result, treating a system mismatch as sensitive.
///
/// Mismatches are logged at error level and trip a debug assertion, so they
/// surface in tests while production keeps redacting.
pub fn fail_safe(result: Result<bool, SystemMismatch>) -> bool {
    match result {
        Ok(matched) => matched,
        Err(mismatch) => {
            tracing::error!(
                expected = %mismatch.expected,
                found = mismatch.found.as_deref().unwrap_or("<none>"),
                "Predicate called with a foreign coding system, treating as sensitive"
            );
            debug_assert!(false, "{mismatch}");
            true
        }
    }
}

/// Evaluates a diagnosis-like concept with one predicate per ICD revision.
///
/// Empty concepts are not sensitive. Otherwise the concept is sensitive if
/// any coding matches its revision's predicate, or uses any other (or no)
/// system.
pub fn is_sensitive_coded_concept<F9, F10>(
    concept: &CodedConcept,
    icd9_predicate: F9,
    icd10_predicate: F10,
) -> bool
where
    F9: Fn(&Coding) -> Result<bool, SystemMismatch>,
    F10: Fn(&Coding) -> Result<bool, SystemMismatch>,
{
    concept.codings().iter().any(|coding| match coding.system() {
        Some(well_known::ICD_9) => fail_safe(icd9_predicate(coding)),
        Some(well_known::ICD_10) => fail_safe(icd10_predicate(coding)),
        _ => true,
    })
}

/// Named category predicates over a set of reference tables.
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    tables: &'a ReferenceTables,
}

impl<'a> Matcher<'a> {
    /// Creates a matcher over `tables`.
    pub fn new(tables: &'a ReferenceTables) -> Self {
        Self { tables }
    }

    /// The underlying tables.
    pub fn tables(&self) -> &'a ReferenceTables {
        self.tables
    }

    /// Membership in any category, enforcing that category's system.
    pub fn is_member_of(
        &self,
        coding: &Coding,
        category: CodeCategory,
    ) -> Result<bool, SystemMismatch> {
        if category == CodeCategory::Cpt {
            return Ok(self.is_cpt(coding));
        }
        is_member(coding, self.tables.get(category), category.system())
    }

    /// ICD-9 diagnosis membership.
    pub fn is_icd9_diagnosis(&self, coding: &Coding) -> Result<bool, SystemMismatch> {
        self.is_member_of(coding, CodeCategory::Icd9Diagnosis)
    }

    /// ICD-10 diagnosis membership.
    pub fn is_icd10_diagnosis(&self, coding: &Coding) -> Result<bool, SystemMismatch> {
        self.is_member_of(coding, CodeCategory::Icd10Diagnosis)
    }

    /// ICD-9 procedure membership.
    pub fn is_icd9_procedure(&self, coding: &Coding) -> Result<bool, SystemMismatch> {
        self.is_member_of(coding, CodeCategory::Icd9Procedure)
    }

    /// ICD-10 procedure membership.
    pub fn is_icd10_procedure(&self, coding: &Coding) -> Result<bool, SystemMismatch> {
        self.is_member_of(coding, CodeCategory::Icd10Procedure)
    }

    /// DRG membership, after stripping the `MS-DRG ` prefix.
    pub fn is_drg(&self, coding: &Coding) -> Result<bool, SystemMismatch> {
        self.is_member_of(coding, CodeCategory::Drg)
    }

    /// CPT membership. Never checks the system.
    pub fn is_cpt(&self, coding: &Coding) -> bool {
        is_cpt_member(coding, self.tables.cpt())
    }

    /// Fail-safe composite over the diagnosis tables.
    pub fn is_sensitive_diagnosis(&self, concept: &CodedConcept) -> bool {
        is_sensitive_coded_concept(
            concept,
            |coding| self.is_icd9_diagnosis(coding),
            |coding| self.is_icd10_diagnosis(coding),
        )
    }

    /// Fail-safe composite over the ICD procedure tables.
    pub fn is_sensitive_icd_procedure(&self, concept: &CodedConcept) -> bool {
        is_sensitive_coded_concept(
            concept,
            |coding| self.is_icd9_procedure(coding),
            |coding| self.is_icd10_procedure(coding),
        )
    }
}
