//! Pure queries over the project list: category/text search and related picks.
//!
//! Every function borrows the records and returns them in their original
//! order, so callers can render results without re-sorting.

use super::types::{CategoryFilter, ProjectId, ProjectRecord, ProjectType};

/// Related projects shown under a case study.
pub const RELATED_LIMIT: usize = 3;

/// Records passing both the category tab and the free-text search.
///
/// Blank or whitespace-only text matches everything. Otherwise the text is
/// matched as-is, case-insensitively, as a substring of the title, the
/// description, or any single technology tag.
pub fn query<'a>(
    records: &'a [ProjectRecord],
    filter: CategoryFilter,
    text: &str,
) -> Vec<&'a ProjectRecord> {
    let needle = if text.trim().is_empty() {
        String::new()
    } else {
        text.to_lowercase()
    };
    let results: Vec<_> = records
        .iter()
        .filter(|r| filter.admits(r.kind))
        .filter(|r| needle.is_empty() || matches_text(r, &needle))
        .collect();

    tracing::debug!(
        filter = filter.value(),
        text = %needle,
        matched = results.len(),
        "catalog query"
    );
    results
}

/// `needle` must already be lowercased.
fn matches_text(record: &ProjectRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
        || record
            .technologies
            .iter()
            .any(|tech| tech.to_lowercase().contains(needle))
}

/// Up to `limit` records of the same type as the current one, excluding it.
pub fn related(
    records: &[ProjectRecord],
    exclude: ProjectId,
    kind: ProjectType,
    limit: usize,
) -> Vec<&ProjectRecord> {
    records
        .iter()
        .filter(|r| r.id != exclude && r.kind == kind)
        .take(limit)
        .collect()
}
