//! JSON input and output records for the `samhsa-check` binary.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use samhsa_types::ClaimCodedView;

use crate::engine::Finding;

/// One claim to check, tagged with a caller-supplied identifier.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClaimEntry {
    /// Opaque identifier echoed back in the verdict.
    pub id: Value,
    /// The claim's coded fields.
    pub claim: ClaimCodedView,
}

/// The verdict for one [`ClaimEntry`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerdictLine {
    /// Identifier from the input entry.
    pub id: Value,
    /// Whether the claim must be redacted.
    pub sensitive: bool,
    /// The first sensitive field, if any.
    pub finding: Option<String>,
}

impl VerdictLine {
    /// Builds the verdict for `id` from an explanation.
    pub fn new(id: Value, finding: Option<Finding>) -> Self {
        Self {
            id,
            sensitive: finding.is_some(),
            finding: finding.map(|finding| finding.to_string()),
        }
    }
}
