//! Pairwise table merge compatibility and fusion.
//!
//! Two candidate tables merge when they are plausibly one logical table
//! split by a page boundary: adjacent pages, compatible column counts,
//! aligned column x-coordinates, and similar headers. All thresholds are
//! explicit parameters; borderline values decide deterministically at the
//! documented constants.

use crate::geometry::BoundingBox;
use crate::layout::TableCandidate;

/// Tunable thresholds for cross-page table merging.
#[derive(Debug, Clone)]
pub struct MergeParams {
    /// Maximum absolute page gap between the end of one table and the
    /// start of the next
    pub max_page_gap: u32,
    /// Maximum per-column x-coordinate difference
    pub column_tolerance: f32,
    /// Minimum header similarity for two headered tables to merge
    pub min_header_similarity: f32,
}

impl Default for MergeParams {
    fn default() -> Self {
        Self {
            max_page_gap: 1,
            column_tolerance: 10.0,
            min_header_similarity: 0.7,
        }
    }
}

impl MergeParams {
    /// Create parameters with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column x-coordinate tolerance.
    pub fn with_column_tolerance(mut self, tolerance: f32) -> Self {
        self.column_tolerance = tolerance;
        self
    }

    /// Set the minimum header similarity.
    pub fn with_min_header_similarity(mut self, similarity: f32) -> Self {
        self.min_header_similarity = similarity;
        self
    }
}

/// Check whether two tables can be merged.
///
/// All of the following must hold:
/// - the absolute page gap is at most `max_page_gap`,
/// - the column counts match, or one table's first data row length equals
///   the other's column count (a header repeated as the first data row on
///   the next page),
/// - when both tables report column x-coordinates: same count and every
///   corresponding pair within `column_tolerance`,
/// - when both tables have non-empty headers: per-position similarity of
///   at least `min_header_similarity`.
pub fn can_merge(first: &TableCandidate, second: &TableCandidate, params: &MergeParams) -> bool {
    let page_gap = (second.page_start as i64 - first.page_end as i64).unsigned_abs();
    if page_gap > params.max_page_gap as u64 {
        return false;
    }

    if first.columns.len() != second.columns.len() {
        let first_row_matches = first
            .rows
            .first()
            .map(|row| row.len() == second.columns.len())
            .unwrap_or(false);
        let second_row_matches = second
            .rows
            .first()
            .map(|row| row.len() == first.columns.len())
            .unwrap_or(false);
        if !first_row_matches && !second_row_matches {
            return false;
        }
    }

    if !first.x_coordinates.is_empty() && !second.x_coordinates.is_empty() {
        if first.x_coordinates.len() != second.x_coordinates.len() {
            return false;
        }
        for (x1, x2) in first.x_coordinates.iter().zip(&second.x_coordinates) {
            if (x1 - x2).abs() > params.column_tolerance {
                return false;
            }
        }
    }

    if !first.columns.is_empty()
        && !second.columns.is_empty()
        && header_similarity(&first.columns, &second.columns) < params.min_header_similarity
    {
        return false;
    }

    true
}

/// Compare two header lists and return their similarity ratio in `[0, 1]`.
///
/// Headers are compared per position, ignoring case and surrounding
/// whitespace. Lists of unequal length have similarity zero.
pub fn header_similarity(headers1: &[String], headers2: &[String]) -> f32 {
    if headers1.len() != headers2.len() {
        return 0.0;
    }
    if headers1.is_empty() {
        return 1.0;
    }

    let matches = headers1
        .iter()
        .zip(headers2)
        .filter(|(h1, h2)| h1.trim().to_lowercase() == h2.trim().to_lowercase())
        .count();

    matches as f32 / headers1.len() as f32
}

/// Merge two tables into a new candidate.
///
/// The tables are order-normalized by `page_start` before fusing: rows are
/// concatenated earlier-first, the columns and x-coordinates come from the
/// earlier table when it has them, the page range and bounding box are the
/// component-wise min/max. Neither input is mutated.
pub fn merge_pair(a: &TableCandidate, b: &TableCandidate) -> TableCandidate {
    let (first, second) = if a.page_start <= b.page_start { (a, b) } else { (b, a) };

    let mut rows = first.rows.clone();
    rows.extend(second.rows.iter().cloned());

    let columns = if first.columns.is_empty() {
        second.columns.clone()
    } else {
        first.columns.clone()
    };

    let x_coordinates = if first.x_coordinates.is_empty() {
        second.x_coordinates.clone()
    } else {
        first.x_coordinates.clone()
    };

    let bbox = BoundingBox::new(
        first.bbox.x0.min(second.bbox.x0),
        first.bbox.y0.min(second.bbox.y0),
        first.bbox.x1.max(second.bbox.x1),
        first.bbox.y1.max(second.bbox.y1),
    );

    TableCandidate {
        page_start: first.page_start.min(second.page_start),
        page_end: first.page_end.max(second.page_end),
        columns,
        rows,
        bbox,
        x_coordinates,
    }
}
