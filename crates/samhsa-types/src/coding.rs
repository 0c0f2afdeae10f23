//! Coded claim fields.
//!
//! A [`CodedConcept`] is one claim field (a diagnosis, a procedure slot, a
//! line item, a package code) holding zero or more [`Coding`]s.

/// A single `(system, code)` pair found on a claim.
///
/// Either half may be absent. An absent system is never a recognized system,
/// and an absent code never matches a reference list.
///
/// # Examples
///
/// ```
/// use samhsa_types::{well_known, Coding};
///
/// let coding = Coding::new(well_known::ICD_10, "F11.20");
/// assert!(coding.has_system(well_known::ICD_10));
/// assert_eq!(coding.code(), Some("F11.20"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coding {
    /// Coding-system identifier (URL or OID).
    #[cfg_attr(feature = "serde", serde(default))]
    pub system: Option<String>,
    /// Code value within the system.
    #[cfg_attr(feature = "serde", serde(default))]
    pub code: Option<String>,
}

impl Coding {
    /// Creates a coding with both a system and a code.
    pub fn new(system: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            code: Some(code.into()),
        }
    }

    /// Creates a coding with a system but no code value.
    pub fn without_code(system: impl Into<String>) -> Self {
        Self {
            system: Some(system.into()),
            code: None,
        }
    }

    /// Returns the system identifier, if present.
    pub fn system(&self) -> Option<&str> {
        self.system.as_deref()
    }

    /// Returns the code value, if present.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns true if this coding's system is exactly `system`.
    pub fn has_system(&self, system: &str) -> bool {
        self.system.as_deref() == Some(system)
    }
}

/// An ordered collection of [`Coding`]s representing one claim field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CodedConcept {
    /// The codings, in claim order.
    pub codings: Vec<Coding>,
}

impl CodedConcept {
    /// Creates an empty concept.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a concept holding a single coding.
    pub fn single(coding: Coding) -> Self {
        Self {
            codings: vec![coding],
        }
    }

    /// Returns the codings in this concept.
    pub fn codings(&self) -> &[Coding] {
        &self.codings
    }

    /// Returns true if this concept has no codings.
    pub fn is_empty(&self) -> bool {
        self.codings.is_empty()
    }

    /// Returns the number of codings.
    pub fn len(&self) -> usize {
        self.codings.len()
    }
}

impl From<Vec<Coding>> for CodedConcept {
    fn from(codings: Vec<Coding>) -> Self {
        Self { codings }
    }
}

impl FromIterator<Coding> for CodedConcept {
    fn from_iter<I: IntoIterator<Item = Coding>>(iter: I) -> Self {
        Self {
            codings: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::well_known;

    #[test]
    fn test_coding_accessors() {
        let coding = Coding::new(well_known::HCPCS, "H0005");
        assert_eq!(coding.system(), Some(well_known::HCPCS));
        assert_eq!(coding.code(), Some("H0005"));
        assert!(coding.has_system(well_known::HCPCS));
        assert!(!coding.has_system(well_known::HCPCS_CD));
    }

    #[test]
    fn test_coding_without_system() {
        let coding = Coding {
            system: None,
            code: Some("H0005".to_string()),
        };
        assert!(!coding.has_system(well_known::HCPCS));
        assert!(!coding.has_system(""));
    }

    #[test]
    fn test_concept_collect() {
        let concept: CodedConcept = vec![
            Coding::new(well_known::ICD_9, "291.0"),
            Coding::without_code(well_known::ICD_10),
        ]
        .into_iter()
        .collect();

        assert_eq!(concept.len(), 2);
        assert!(!concept.is_empty());
        assert!(concept.codings()[1].code().is_none());
        assert!(CodedConcept::new().is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_concept_serializes_as_list() {
        let concept = CodedConcept::single(Coding::new(well_known::DRG, "522"));
        let json = serde_json::to_value(&concept).unwrap();
        assert!(json.is_array());

        let parsed: CodedConcept =
            serde_json::from_str(r#"[{"system": "urn:local"}, {"code": "X"}]"#).unwrap();
        assert_eq!(parsed.codings[0].system(), Some("urn:local"));
        assert!(parsed.codings[0].code().is_none());
        assert!(parsed.codings[1].system().is_none());
    }
}
