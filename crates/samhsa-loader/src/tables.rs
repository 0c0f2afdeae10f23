//! Reference table construction.
//!
//! Builds one [`ReferenceCodeSet`] per [`CodeCategory`] from a
//! [`CodeSource`]. With the `parallel` feature the six lists are read
//! concurrently via rayon.

use std::collections::HashMap;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use samhsa_types::CodeCategory;

use crate::code_set::ReferenceCodeSet;
use crate::parser::CodeListReader;
use crate::source::CodeSource;
use crate::types::{CategoryStats, LoadResult, LoadStats, LoaderConfig};

/// The reference code sets for all six categories.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct ReferenceTables {
    sets: HashMap<CodeCategory, ReferenceCodeSet>,
}

impl ReferenceTables {
    /// Assembles tables from already-built sets.
    ///
    /// Categories without a set get an empty one; a later set for the same
    /// category replaces an earlier one.
    pub fn from_sets<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = ReferenceCodeSet>,
    {
        let mut by_category: HashMap<CodeCategory, ReferenceCodeSet> = sets
            .into_iter()
            .map(|set| (set.category(), set))
            .collect();

        for category in CodeCategory::ALL {
            by_category
                .entry(category)
                .or_insert_with(|| ReferenceCodeSet::empty(category));
        }

        Self { sets: by_category }
    }

    /// Creates tables with every set empty.
    pub fn empty() -> Self {
        Self::from_sets(std::iter::empty())
    }

    /// Returns the set for `category`.
    pub fn get(&self, category: CodeCategory) -> &ReferenceCodeSet {
        // from_sets fills every category
        &self.sets[&category]
    }

    /// Returns the DRG set.
    pub fn drg(&self) -> &ReferenceCodeSet {
        self.get(CodeCategory::Drg)
    }

    /// Returns the CPT set.
    pub fn cpt(&self) -> &ReferenceCodeSet {
        self.get(CodeCategory::Cpt)
    }

    /// Returns the ICD-9 diagnosis set.
    pub fn icd9_diagnosis(&self) -> &ReferenceCodeSet {
        self.get(CodeCategory::Icd9Diagnosis)
    }

    /// Returns the ICD-9 procedure set.
    pub fn icd9_procedure(&self) -> &ReferenceCodeSet {
        self.get(CodeCategory::Icd9Procedure)
    }

    /// Returns the ICD-10 diagnosis set.
    pub fn icd10_diagnosis(&self) -> &ReferenceCodeSet {
        self.get(CodeCategory::Icd10Diagnosis)
    }

    /// Returns the ICD-10 procedure set.
    pub fn icd10_procedure(&self) -> &ReferenceCodeSet {
        self.get(CodeCategory::Icd10Procedure)
    }

    /// Returns the total number of codes across all sets.
    pub fn total_codes(&self) -> usize {
        self.sets.values().map(ReferenceCodeSet::len).sum()
    }
}

/// Builds reference tables from `source` with the default configuration.
///
/// # Errors
/// Fails if any of the six code lists is missing, unreadable, or lacks its
/// expected column. Every such failure is fatal for the caller.
///
/// # Example
///
/// ```ignore
/// use samhsa_loader::{build_reference_tables, DirectorySource};
///
/// let source = DirectorySource::new("samhsa-related-codes")?;
/// let tables = build_reference_tables(&source)?;
/// println!("{} SAMHSA codes loaded", tables.total_codes());
/// ```
pub fn build_reference_tables<S: CodeSource + ?Sized>(source: &S) -> LoadResult<ReferenceTables> {
    build_reference_tables_with_config(source, &LoaderConfig::default()).map(|(tables, _)| tables)
}

/// Builds reference tables from `source`, returning load statistics too.
pub fn build_reference_tables_with_config<S: CodeSource + ?Sized>(
    source: &S,
    config: &LoaderConfig,
) -> LoadResult<(ReferenceTables, LoadStats)> {
    let start = Instant::now();

    #[cfg(feature = "parallel")]
    let loaded = CodeCategory::ALL
        .as_slice()
        .par_iter()
        .map(|&category| load_code_set(source, category, config))
        .collect::<LoadResult<Vec<_>>>()?;

    #[cfg(not(feature = "parallel"))]
    let loaded = CodeCategory::ALL
        .iter()
        .map(|&category| load_code_set(source, category, config))
        .collect::<LoadResult<Vec<_>>>()?;

    let mut stats = LoadStats::default();
    let mut sets = Vec::with_capacity(loaded.len());
    for (set, category_stats) in loaded {
        tracing::debug!(
            category = %set.category(),
            records = category_stats.records_read,
            blank = category_stats.blank_values,
            codes = category_stats.distinct_codes,
            "Loaded code list"
        );
        stats.categories.insert(set.category(), category_stats);
        sets.push(set);
    }
    stats.load_time_ms = start.elapsed().as_millis() as u64;

    let tables = ReferenceTables::from_sets(sets);
    tracing::info!(
        "Loaded {} SAMHSA reference codes from {} in {} ms",
        tables.total_codes(),
        source.location(),
        stats.load_time_ms
    );

    Ok((tables, stats))
}

/// Loads and normalizes the code list for a single category.
pub fn load_code_set<S: CodeSource + ?Sized>(
    source: &S,
    category: CodeCategory,
    config: &LoaderConfig,
) -> LoadResult<(ReferenceCodeSet, CategoryStats)> {
    let resource = config.resource_name(category);
    let reader = source.open(resource)?;

    let mut values = CodeListReader::from_reader(reader, resource, category.column_name())?
        .skip_blank_values(config.skip_blank_values);
    let raw = values.read_all()?;

    let set = ReferenceCodeSet::from_raw(category, raw);
    let stats = CategoryStats {
        records_read: values.records_read(),
        blank_values: values.blank_values(),
        distinct_codes: set.len(),
    };

    Ok((set, stats))
}
