//! Code normalization.
//!
//! Reference lists and claims format the same code in different ways
//! (`"MS-DRG 522"` vs `"522"`, `"250.01"` vs `"25001"`, `"h0005"` vs
//! `"H0005"`). These functions bring both sides to one canonical form so
//! lookups are plain set membership.

use samhsa_types::CodeCategory;

/// Prefix found on MS-DRG codes in the reference list.
const DRG_PREFIX: &str = "MS-DRG ";

/// Normalizes a DRG code.
///
/// Trims whitespace and removes the `"MS-DRG "` prefix. The prefix removal
/// repeats and the result is trimmed a second time, so whitespace left
/// after the prefix is dropped too and the function is idempotent.
///
/// # Examples
///
/// ```
/// use samhsa_loader::normalize::normalize_drg;
///
/// assert_eq!(normalize_drg("MS-DRG 522"), "522");
/// assert_eq!(normalize_drg("  MS-DRG 003 "), "003");
/// assert_eq!(normalize_drg("MS-DRG  896"), "896");
/// assert_eq!(normalize_drg("896"), "896");
/// ```
pub fn normalize_drg(code: &str) -> String {
    let mut normalized = code.trim().to_string();
    // Repeated so a removal never leaves a fresh prefix behind.
    while normalized.contains(DRG_PREFIX) {
        normalized = normalized.replace(DRG_PREFIX, "");
    }
    normalized.trim().to_string()
}

/// Normalizes an ICD-9 or ICD-10 code.
///
/// Trims whitespace, removes the first decimal point (only the first) and
/// upper-cases the result.
///
/// # Examples
///
/// ```
/// use samhsa_loader::normalize::normalize_icd;
///
/// assert_eq!(normalize_icd(" 250.01 "), "25001");
/// assert_eq!(normalize_icd("e859"), "E859");
/// assert_eq!(normalize_icd("A01.1.2"), "A011.2");
/// ```
pub fn normalize_icd(code: &str) -> String {
    let mut normalized = code.trim().to_string();
    if let Some(dot) = normalized.find('.') {
        normalized.remove(dot);
    }
    normalized.to_uppercase()
}

/// Normalizes a HCPCS (or CPT) code.
///
/// Trims whitespace and upper-cases the result.
///
/// # Examples
///
/// ```
/// use samhsa_loader::normalize::normalize_hcpcs;
///
/// assert_eq!(normalize_hcpcs(" h0005"), "H0005");
/// ```
pub fn normalize_hcpcs(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Normalizes a code with the normalizer belonging to `category`.
pub fn normalize(category: CodeCategory, code: &str) -> String {
    match category {
        CodeCategory::Drg => normalize_drg(code),
        CodeCategory::Cpt => normalize_hcpcs(code),
        CodeCategory::Icd9Diagnosis
        | CodeCategory::Icd9Procedure
        | CodeCategory::Icd10Diagnosis
        | CodeCategory::Icd10Procedure => normalize_icd(code),
    }
}
