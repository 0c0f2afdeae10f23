//! Immutable reference code sets.

use std::collections::HashSet;

use samhsa_types::CodeCategory;

use crate::normalize::normalize;

/// The normalized SAMHSA-related codes of one [`CodeCategory`].
///
/// Every member is stored in normalized form, so lookups only ever normalize
/// the query side. The set is never mutated after construction and is safe
/// to share across threads.
///
/// # Example
///
/// ```
/// use samhsa_loader::ReferenceCodeSet;
/// use samhsa_types::CodeCategory;
///
/// let drg = ReferenceCodeSet::from_raw(CodeCategory::Drg, ["MS-DRG 522", "MS-DRG 003"]);
/// assert!(drg.contains_normalized("522"));
/// assert!(drg.contains_code("MS-DRG 003"));
/// assert!(!drg.contains_code("896"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceCodeSet {
    category: CodeCategory,
    codes: HashSet<String>,
}

impl ReferenceCodeSet {
    /// Builds a set from raw values, normalizing each with the category's
    /// normalizer.
    pub fn from_raw<I, S>(category: CodeCategory, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes = values
            .into_iter()
            .map(|value| normalize(category, value.as_ref()))
            .collect();

        Self { category, codes }
    }

    /// Creates an empty set for `category`.
    pub fn empty(category: CodeCategory) -> Self {
        Self {
            category,
            codes: HashSet::new(),
        }
    }

    /// Returns the category of this set.
    pub fn category(&self) -> CodeCategory {
        self.category
    }

    /// Returns the number of distinct codes.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if the set holds no codes.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Returns true if an already-normalized code is a member.
    pub fn contains_normalized(&self, normalized: &str) -> bool {
        self.codes.contains(normalized)
    }

    /// Normalizes a raw code with this set's normalizer and tests membership.
    pub fn contains_code(&self, raw: &str) -> bool {
        self.contains_normalized(&normalize(self.category, raw))
    }

    /// Iterates over the normalized codes, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}
