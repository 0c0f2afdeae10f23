//! Reference code categories.
//!
//! Each SAMHSA reference list belongs to exactly one [`CodeCategory`], which
//! fixes the coding system its codes are expected on, the CSV resource it is
//! loaded from and the column holding the codes.

use std::fmt;

use crate::well_known;

/// A category of SAMHSA-related reference codes.
///
/// # Examples
///
/// ```
/// use samhsa_types::{well_known, CodeCategory};
///
/// assert_eq!(CodeCategory::Icd10Diagnosis.system(), well_known::ICD_10);
/// assert_eq!(CodeCategory::Drg.column_name(), "MS-DRGs");
/// assert_eq!(CodeCategory::ALL.len(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CodeCategory {
    /// MS-DRG package codes.
    Drg,
    /// CPT codes (the checked subset of HCPCS).
    Cpt,
    /// ICD-9-CM diagnosis codes.
    Icd9Diagnosis,
    /// ICD-9-CM procedure codes.
    Icd9Procedure,
    /// ICD-10-CM diagnosis codes.
    Icd10Diagnosis,
    /// ICD-10-PCS procedure codes.
    Icd10Procedure,
}

impl CodeCategory {
    /// All categories, in loading order.
    pub const ALL: [CodeCategory; 6] = [
        CodeCategory::Drg,
        CodeCategory::Cpt,
        CodeCategory::Icd9Diagnosis,
        CodeCategory::Icd9Procedure,
        CodeCategory::Icd10Diagnosis,
        CodeCategory::Icd10Procedure,
    ];

    /// Returns the canonical coding-system identifier for this category.
    pub fn system(self) -> &'static str {
        match self {
            Self::Drg => well_known::DRG,
            Self::Cpt => well_known::HCPCS,
            Self::Icd9Diagnosis | Self::Icd9Procedure => well_known::ICD_9,
            Self::Icd10Diagnosis | Self::Icd10Procedure => well_known::ICD_10,
        }
    }

    /// Returns the expanded, backward-compatible system set for this category.
    ///
    /// Only `Cpt` has one (HCPCS plus the legacy `hcpcs_cd` reference URL).
    pub fn backward_compatible_systems(self) -> Option<&'static [&'static str]> {
        match self {
            Self::Cpt => Some(&[well_known::HCPCS, well_known::HCPCS_CD]),
            _ => None,
        }
    }

    /// Returns the default CSV resource name holding this category's codes.
    pub fn resource_name(self) -> &'static str {
        match self {
            Self::Drg => "codes-drg.csv",
            Self::Cpt => "codes-cpt.csv",
            Self::Icd9Diagnosis => "codes-icd-9-diagnosis.csv",
            Self::Icd9Procedure => "codes-icd-9-procedure.csv",
            Self::Icd10Diagnosis => "codes-icd-10-diagnosis.csv",
            Self::Icd10Procedure => "codes-icd-10-procedure.csv",
        }
    }

    /// Returns the CSV column holding this category's codes.
    ///
    /// Column names are matched exactly and case-sensitively.
    pub fn column_name(self) -> &'static str {
        match self {
            Self::Drg => "MS-DRGs",
            Self::Cpt => "CPT Code",
            Self::Icd9Diagnosis => "ICD-9-CM Diagnosis Code",
            Self::Icd9Procedure => "ICD-9-CM",
            Self::Icd10Diagnosis => "ICD-10-CM Diagnosis Code",
            Self::Icd10Procedure => "ICD-10-PCS Code",
        }
    }

    /// Returns true for the four ICD categories.
    pub fn is_icd(self) -> bool {
        !matches!(self, Self::Drg | Self::Cpt)
    }

    /// Returns a short, stable name for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Drg => "drg",
            Self::Cpt => "cpt",
            Self::Icd9Diagnosis => "icd9_diagnosis",
            Self::Icd9Procedure => "icd9_procedure",
            Self::Icd10Diagnosis => "icd10_diagnosis",
            Self::Icd10Procedure => "icd10_procedure",
        }
    }
}

impl fmt::Display for CodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icd_categories_share_systems() {
        assert_eq!(
            CodeCategory::Icd9Diagnosis.system(),
            CodeCategory::Icd9Procedure.system()
        );
        assert_eq!(
            CodeCategory::Icd10Diagnosis.system(),
            CodeCategory::Icd10Procedure.system()
        );
        assert_ne!(
            CodeCategory::Icd9Diagnosis.system(),
            CodeCategory::Icd10Diagnosis.system()
        );
    }

    #[test]
    fn test_only_cpt_is_backward_compatible() {
        let cpt = CodeCategory::Cpt.backward_compatible_systems().unwrap();
        assert_eq!(cpt, &[well_known::HCPCS, well_known::HCPCS_CD]);

        for category in CodeCategory::ALL {
            if category != CodeCategory::Cpt {
                assert!(category.backward_compatible_systems().is_none());
            }
        }
    }

    #[test]
    fn test_resource_names_are_unique() {
        let mut names: Vec<_> = CodeCategory::ALL.iter().map(|c| c.resource_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn test_column_names() {
        assert_eq!(CodeCategory::Cpt.column_name(), "CPT Code");
        assert_eq!(CodeCategory::Icd9Procedure.column_name(), "ICD-9-CM");
        assert_eq!(
            CodeCategory::Icd10Procedure.column_name(),
            "ICD-10-PCS Code"
        );
    }

    #[test]
    fn test_is_icd() {
        assert!(!CodeCategory::Drg.is_icd());
        assert!(!CodeCategory::Cpt.is_icd());
        assert!(CodeCategory::Icd9Diagnosis.is_icd());
        assert!(CodeCategory::Icd10Procedure.is_icd());
    }
}
