//! Enumeration types for claim classification.
//!
//! This module provides the rule [`Generation`] selector and the [`ClaimType`]
//! of the claim being checked.

use std::fmt;

/// Rule generation used for procedure and package policies.
///
/// The two generations agree on diagnoses and most procedure fields but
/// differ in how a procedure field's coding systems are judged: `Base`
/// looks at each coding in turn, `R4` compares the field's whole system set
/// against the known HCPCS sets.
///
/// # Examples
///
/// ```
/// use samhsa_types::Generation;
///
/// assert_eq!(Generation::from_name("r4"), Some(Generation::R4));
/// assert_eq!(Generation::from_name("STU3"), Some(Generation::Base));
/// assert_eq!(Generation::from_name("v9"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Generation {
    /// Generation 1: per-coding checks.
    Base,
    /// Generation 2: system-set checks.
    #[default]
    R4,
}

impl Generation {
    /// Parses a generation name, case-insensitively.
    ///
    /// Accepts `base`, `stu3`, `gen1` for [`Generation::Base`] and `r4`,
    /// `abstract`, `gen2` for [`Generation::R4`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "base" | "stu3" | "gen1" => Some(Self::Base),
            "r4" | "abstract" | "gen2" => Some(Self::R4),
            _ => None,
        }
    }

    /// Returns the canonical name of this generation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::R4 => "r4",
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The type of claim a coded view was taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClaimType {
    /// Carrier (professional) claim.
    Carrier,
    /// Durable medical equipment claim.
    Dme,
    /// Home health agency claim.
    Hha,
    /// Hospice claim.
    Hospice,
    /// Inpatient claim.
    Inpatient,
    /// Outpatient claim.
    Outpatient,
    /// Skilled nursing facility claim.
    Snf,
    /// Part D prescription drug event.
    Pde,
}

impl ClaimType {
    /// Returns true if claims of this type can carry SAMHSA-related fields.
    ///
    /// Part D events carry no diagnosis, procedure or package codes.
    pub fn carries_samhsa_fields(self) -> bool {
        !matches!(self, Self::Pde)
    }

    /// Returns true if claims of this type carry ICD procedure fields.
    pub fn carries_icd_procedures(self) -> bool {
        matches!(self, Self::Inpatient | Self::Outpatient | Self::Snf)
    }
}
