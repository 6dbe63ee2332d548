//! Aggregator: records -> per-label counts along one dimension.
//!
//! Pure and synchronous. Unknown categories fail the whole summary
//! (`DomainError::UnknownCategory`) instead of being dropped, so upstream
//! data problems surface to the caller.

use crate::domain::{DimensionSpec, DomainError, Summary};

/// Count `categories` against `dimension`.
///
/// The result holds every label of the dimension in canonical order,
/// zero-filled, regardless of input order. An empty input yields an
/// all-zero summary.
///
/// # Errors
/// `UnknownCategory` for the first category not among the dimension's labels.
pub fn summarize<I>(categories: I, dimension: &DimensionSpec) -> Result<Summary, DomainError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut counts = vec![0u64; dimension.labels().len()];
    for category in categories {
        let category = category.as_ref();
        let idx = dimension
            .position(category)
            .ok_or_else(|| DomainError::UnknownCategory {
                dimension: dimension.name().to_string(),
                category: category.to_string(),
            })?;
        counts[idx] += 1;
    }
    Ok(Summary::from_counts(dimension.labels(), counts))
}

/// [`summarize`] over a slice of records, projecting each to its category.
pub fn summarize_by<'a, R, F>(
    records: &'a [R],
    dimension: &DimensionSpec,
    category_of: F,
) -> Result<Summary, DomainError>
where
    F: Fn(&'a R) -> &'a str,
{
    summarize(records.iter().map(category_of), dimension)
}
