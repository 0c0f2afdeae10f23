//! Claim-level evaluation.

use std::fmt;
use std::sync::OnceLock;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use samhsa_loader::{build_reference_tables, CodeSource, LoadResult, ReferenceTables};
use samhsa_types::{ClaimCodedView, Generation, Verdict};

use crate::matcher::Matcher;
use crate::policy::{is_sensitive_package, is_sensitive_procedure};

/// The first claim field found to be sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finding {
    /// Diagnosis concept at this index.
    Diagnosis(usize),
    /// ICD procedure concept at this index.
    IcdProcedure(usize),
    /// Line-item procedure concept at this index.
    Procedure(usize),
    /// The package concept.
    Package,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Diagnosis(index) => write!(f, "diagnosis[{index}]"),
            Finding::IcdProcedure(index) => write!(f, "icd_procedure[{index}]"),
            Finding::Procedure(index) => write!(f, "procedure[{index}]"),
            Finding::Package => f.write_str("package"),
        }
    }
}

/// Returns the first field that makes `claim` sensitive, if any.
///
/// Fields are checked in order: diagnoses, ICD procedures, line-item
/// procedures, then the package. Part D events are never sensitive.
pub fn explain(
    claim: &ClaimCodedView,
    tables: &ReferenceTables,
    generation: Generation,
) -> Option<Finding> {
    if claim
        .claim_type
        .is_some_and(|claim_type| !claim_type.carries_samhsa_fields())
    {
        return None;
    }

    let matcher = Matcher::new(tables);

    let finding = claim
        .diagnoses
        .iter()
        .position(|concept| matcher.is_sensitive_diagnosis(concept))
        .map(Finding::Diagnosis)
        .or_else(|| {
            claim
                .icd_procedures
                .iter()
                .position(|concept| matcher.is_sensitive_icd_procedure(concept))
                .map(Finding::IcdProcedure)
        })
        .or_else(|| {
            claim
                .procedures
                .iter()
                .position(|concept| is_sensitive_procedure(&matcher, concept, generation))
                .map(Finding::Procedure)
        })
        .or_else(|| {
            claim
                .package
                .as_ref()
                .filter(|concept| is_sensitive_package(&matcher, concept, generation))
                .map(|_| Finding::Package)
        });

    if let Some(finding) = finding {
        tracing::debug!(%finding, %generation, "Claim is SAMHSA-sensitive");
    }
    finding
}

/// Returns true if `claim` must be treated as SAMHSA-sensitive.
pub fn evaluate(claim: &ClaimCodedView, tables: &ReferenceTables, generation: Generation) -> Verdict {
    explain(claim, tables, generation).is_some()
}

/// Explains many claims against the same tables.
pub fn explain_batch(
    claims: &[ClaimCodedView],
    tables: &ReferenceTables,
    generation: Generation,
) -> Vec<Option<Finding>> {
    #[cfg(feature = "parallel")]
    {
        claims
            .par_iter()
            .map(|claim| explain(claim, tables, generation))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        claims
            .iter()
            .map(|claim| explain(claim, tables, generation))
            .collect()
    }
}

/// Evaluates many claims against the same tables.
pub fn evaluate_batch(
    claims: &[ClaimCodedView],
    tables: &ReferenceTables,
    generation: Generation,
) -> Vec<Verdict> {
    explain_batch(claims, tables, generation)
        .into_iter()
        .map(|finding| finding.is_some())
        .collect()
}

static GLOBAL_TABLES: OnceLock<ReferenceTables> = OnceLock::new();

/// Builds the process-wide tables once.
///
/// Later calls return the already-built tables and ignore `source`. A load
/// failure leaves the gate empty so a later call can retry.
pub fn init_global<S: CodeSource + ?Sized>(source: &S) -> LoadResult<&'static ReferenceTables> {
    if let Some(tables) = GLOBAL_TABLES.get() {
        return Ok(tables);
    }

    let tables = build_reference_tables(source)?;
    Ok(GLOBAL_TABLES.get_or_init(|| tables))
}

/// The process-wide tables, if [`init_global`] has succeeded.
pub fn global_tables() -> Option<&'static ReferenceTables> {
    GLOBAL_TABLES.get()
}
