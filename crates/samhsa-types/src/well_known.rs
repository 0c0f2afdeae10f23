//! Well-known coding-system identifiers.
//!
//! This module provides constants for the coding systems that appear on claim
//! fields checked for SAMHSA-related codes.
//!
//! # Examples
//!
//! ```
//! use samhsa_types::well_known;
//!
//! assert_eq!(well_known::ICD_10, "http://hl7.org/fhir/sid/icd-10");
//! assert!(well_known::HCPCS.ends_with("/codesystem/hcpcs"));
//! ```

// =============================================================================
// Diagnosis & Procedure Systems
// =============================================================================

/// ICD-9-CM coding system.
///
/// ICD-9 covers both diagnoses and procedures under a single system
/// identifier; the claim field decides which reference table applies.
pub const ICD_9: &str = "http://hl7.org/fhir/sid/icd-9-cm";

/// ICD-10 coding system.
///
/// Used for ICD-10-CM diagnoses and ICD-10-PCS procedures on claims.
pub const ICD_10: &str = "http://hl7.org/fhir/sid/icd-10";

// =============================================================================
// Line-Item & Package Systems
// =============================================================================

/// HCPCS coding system used on claim line items.
///
/// CPT codes are a subset of HCPCS codes, and are the only subset checked.
pub const HCPCS: &str = "https://bluebutton.cms.gov/resources/codesystem/hcpcs";

/// Legacy HCPCS reference URL (`hcpcs_cd` codebook variable).
///
/// Older line items carry this alongside [`HCPCS`]; the pair is still a
/// known system set for procedure fields.
pub const HCPCS_CD: &str = "https://bluebutton.cms.gov/resources/variables/hcpcs_cd";

/// Diagnosis Related Group system (`clm_drg_cd` codebook variable).
pub const DRG: &str = "https://bluebutton.cms.gov/resources/variables/clm_drg_cd";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codebook_variables() {
        assert!(HCPCS_CD.ends_with("/variables/hcpcs_cd"));
        assert!(DRG.ends_with("/variables/clm_drg_cd"));
    }

    #[test]
    fn test_systems_are_distinct() {
        let systems = [ICD_9, ICD_10, HCPCS, HCPCS_CD, DRG];
        for (i, a) in systems.iter().enumerate() {
            for b in &systems[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
