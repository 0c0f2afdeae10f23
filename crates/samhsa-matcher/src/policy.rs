//! Procedure and package policies for each rule generation.
//!
//! Both generations share the matcher predicates. They differ only in how a
//! line-item concept's systems are judged:
//!
//! - `Base` walks codings one at a time. An HCPCS coding is checked against
//!   the CPT table; any other system, including the legacy `hcpcs_cd`
//!   variable, is sensitive.
//! - `R4` judges the concept's system set as a whole. `{HCPCS}` and
//!   `{HCPCS, hcpcs_cd}` are known; a known set is only sensitive when some
//!   coding's code is in the CPT table.

use samhsa_types::{well_known, CodeCategory, CodedConcept, Generation};

use crate::matcher::{fail_safe, Matcher};
use crate::resolver::{classify_procedure_systems, resolve_category, FieldKind};

/// Per-coding procedure policy.
pub fn procedure_policy_base(matcher: &Matcher<'_>, concept: &CodedConcept) -> bool {
    for coding in concept.codings() {
        match resolve_category(FieldKind::LineItem, coding.system()) {
            Some(CodeCategory::Cpt) => {
                if matcher.is_cpt(coding) {
                    return true;
                }
            }
            _ => return true,
        }
    }
    false
}

/// System-set procedure policy.
pub fn procedure_policy_r4(matcher: &Matcher<'_>, concept: &CodedConcept) -> bool {
    if concept.is_empty() {
        return false;
    }

    let codings = concept.codings();
    let has_hcpcs = codings.iter().any(|coding| coding.has_system(well_known::HCPCS));
    let cpt_match = has_hcpcs && codings.iter().any(|coding| matcher.is_cpt(coding));

    cpt_match || !classify_procedure_systems(concept).is_known()
}

/// Per-coding package policy.
pub fn package_policy_base(matcher: &Matcher<'_>, concept: &CodedConcept) -> bool {
    for coding in concept.codings() {
        match resolve_category(FieldKind::Package, coding.system()) {
            Some(CodeCategory::Drg) => {
                if fail_safe(matcher.is_drg(coding)) {
                    return true;
                }
            }
            _ => return true,
        }
    }
    false
}

/// Any-coding package policy.
pub fn package_policy_r4(matcher: &Matcher<'_>, concept: &CodedConcept) -> bool {
    concept
        .codings()
        .iter()
        .any(|coding| !coding.has_system(well_known::DRG) || fail_safe(matcher.is_drg(coding)))
}

/// Applies `generation`'s procedure policy.
pub fn is_sensitive_procedure(
    matcher: &Matcher<'_>,
    concept: &CodedConcept,
    generation: Generation,
) -> bool {
    match generation {
        Generation::Base => procedure_policy_base(matcher, concept),
        Generation::R4 => procedure_policy_r4(matcher, concept),
    }
}

/// Applies `generation`'s package policy.
pub fn is_sensitive_package(
    matcher: &Matcher<'_>,
    concept: &CodedConcept,
    generation: Generation,
) -> bool {
    match generation {
        Generation::Base => package_policy_base(matcher, concept),
        Generation::R4 => package_policy_r4(matcher, concept),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use samhsa_loader::{ReferenceCodeSet, ReferenceTables};
    use samhsa_types::Coding;

    const BOTH: [Generation; 2] = [Generation::Base, Generation::R4];

    fn tables() -> ReferenceTables {
        ReferenceTables::from_sets([
            ReferenceCodeSet::from_raw(CodeCategory::Drg, ["522", "003"]),
            ReferenceCodeSet::from_raw(CodeCategory::Cpt, ["H0005", "99408"]),
        ])
    }

    fn procedure(codings: &[(&str, &str)]) -> CodedConcept {
        codings
            .iter()
            .map(|(system, code)| Coding::new(*system, *code))
            .collect()
    }

    #[test]
    fn test_empty_procedure_not_sensitive() {
        let tables = tables();
        let matcher = Matcher::new(&tables);
        for generation in BOTH {
            assert!(!is_sensitive_procedure(&matcher, &CodedConcept::new(), generation));
            assert!(!is_sensitive_package(&matcher, &CodedConcept::new(), generation));
        }
    }

    #[test]
    fn test_hcpcs_cpt_match() {
        let tables = tables();
        let matcher = Matcher::new(&tables);
        let sensitive = procedure(&[(well_known::HCPCS, "h0005")]);
        let clean = procedure(&[(well_known::HCPCS, "A0001")]);
        for generation in BOTH {
            assert!(is_sensitive_procedure(&matcher, &sensitive, generation));
            assert!(!is_sensitive_procedure(&matcher, &clean, generation));
        }
    }

    #[test]
    fn test_unknown_system_sensitive() {
        let tables = tables();
        let matcher = Matcher::new(&tables);
        let unknown = procedure(&[("urn:local-procedures", "A0001")]);
        let mixed = procedure(&[(well_known::HCPCS, "A0001"), ("urn:local", "A0001")]);
        for generation in BOTH {
            assert!(is_sensitive_procedure(&matcher, &unknown, generation));
            assert!(is_sensitive_procedure(&matcher, &mixed, generation));
        }
    }

    #[test]
    fn test_absent_system_sensitive() {
        let tables = tables();
        let matcher = Matcher::new(&tables);
        let concept = CodedConcept::single(Coding {
            system: None,
            code: Some("A0001".to_string()),
        });
        for generation in BOTH {
            assert!(is_sensitive_procedure(&matcher, &concept, generation));
            assert!(is_sensitive_package(&matcher, &concept, generation));
        }
    }

    #[test]
    fn test_backward_compatible_set_diverges() {
        let tables = tables();
        let matcher = Matcher::new(&tables);
        let concept = procedure(&[(well_known::HCPCS, "A0001"), (well_known::HCPCS_CD, "A0001")]);

        // Base treats the legacy variable as an unrecognized system
        assert!(procedure_policy_base(&matcher, &concept));
        // R4 accepts the pair as known and finds no CPT match
        assert!(!procedure_policy_r4(&matcher, &concept));
    }

    #[test]
    fn test_r4_cpt_check_spans_codings() {
        let tables = tables();
        let matcher = Matcher::new(&tables);
        let concept = procedure(&[(well_known::HCPCS, "A0001"), (well_known::HCPCS_CD, "H0005")]);
        assert!(procedure_policy_r4(&matcher, &concept));
        assert!(procedure_policy_base(&matcher, &concept));
    }

    #[test]
    fn test_r4_legacy_only_is_unknown() {
        let tables = tables();
        let matcher = Matcher::new(&tables);
        let concept = procedure(&[(well_known::HCPCS_CD, "A0001")]);
        assert!(procedure_policy_r4(&matcher, &concept));
        assert!(procedure_policy_base(&matcher, &concept));
    }

    #[test]
    fn test_package_drg() {
        let tables = tables();
        let matcher = Matcher::new(&tables);
        let sensitive = procedure(&[(well_known::DRG, "MS-DRG 522")]);
        let clean = procedure(&[(well_known::DRG, "MS-DRG 470")]);
        let other = procedure(&[(well_known::DRG, "MS-DRG 470"), ("urn:local-drg", "470")]);
        for generation in BOTH {
            assert!(is_sensitive_package(&matcher, &sensitive, generation));
            assert!(!is_sensitive_package(&matcher, &clean, generation));
            assert!(is_sensitive_package(&matcher, &other, generation));
        }
    }

    #[test]
    fn test_package_missing_code() {
        let tables = tables();
        let matcher = Matcher::new(&tables);
        let concept = CodedConcept::single(Coding::without_code(well_known::DRG));
        for generation in BOTH {
            assert!(!is_sensitive_package(&matcher, &concept, generation));
        }
    }
}
