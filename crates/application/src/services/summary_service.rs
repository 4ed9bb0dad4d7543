//! Summary queries for the presentation surfaces
//!
//! Pure functions over the persisted summary rows: name filtering, the
//! risk-level distribution, and fixed-size pagination. Both the dashboard
//! and the map consume these instead of re-deriving the rules.

use domain::{RiskLevel, SummaryRow};
use serde::Serialize;

/// Fixed dashboard page size
pub const PAGE_SIZE: usize = 10;

/// Count of summary rows at one risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelCount {
    /// The risk level
    pub level: RiskLevel,
    /// Number of rows at that level
    pub count: usize,
}

/// Filter rows by a case-insensitive "contains" match on the name
///
/// An empty or absent query returns all rows unchanged, row for row.
#[must_use]
pub fn filter_by_name<'a>(rows: &'a [SummaryRow], query: Option<&str>) -> Vec<&'a SummaryRow> {
    match query.map(str::trim).filter(|q| !q.is_empty()) {
        None => rows.iter().collect(),
        Some(query) => {
            let needle = query.to_lowercase();
            rows.iter()
                .filter(|row| row.name.to_lowercase().contains(&needle))
                .collect()
        }
    }
}

/// Count rows per risk level, in fixed order Low, Medium, High
///
/// Levels with no rows are reported with a zero count.
#[must_use]
pub fn distribution(rows: &[SummaryRow]) -> [LevelCount; 3] {
    RiskLevel::all().map(|level| LevelCount {
        level,
        count: rows.iter().filter(|row| row.risk_level == level).count(),
    })
}

/// Take one page of rows at the fixed page size (pages are 0-indexed)
///
/// A page past the end is empty.
#[must_use]
pub fn paginate<'a, T>(rows: &'a [T], page: usize) -> &'a [T] {
    let start = page.saturating_mul(PAGE_SIZE);
    if start >= rows.len() {
        return &[];
    }
    let end = (start + PAGE_SIZE).min(rows.len());
    &rows[start..end]
}
