//! Cross-page table accumulation and merging.
//!
//! A [`TableBuffer`] collects candidate tables in discovery order across
//! all pages of one document, then fuses runs of page-adjacent compatible
//! candidates into [`MergedTable`] records. One buffer per document; the
//! buffer is not shared across documents.

use serde::{Deserialize, Serialize};

use crate::layout::TableCandidate;
use crate::tables::merge::{can_merge, merge_pair, MergeParams};

/// A logical table that may span multiple pages.
///
/// Produced once per merge group; read-only afterward. The candidates the
/// group was fused from are carried explicitly in `original_tables`, never
/// inferred from the shape of the merged value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedTable {
    /// Every candidate absorbed into this group, in page-sorted order
    pub original_tables: Vec<TableCandidate>,
    /// Fused column headers
    pub columns: Vec<String>,
    /// Fused data rows
    pub rows: Vec<Vec<String>>,
    /// Page span of the group as (start, end)
    pub page_range: (usize, usize),
}

/// Accumulator for candidate tables across the pages of one document.
///
/// `add` is pure accumulation and must be serialized by the caller;
/// `merge` runs after all pages have been added. Candidates that never
/// merge pass through unchanged as singleton groups.
#[derive(Debug, Default)]
pub struct TableBuffer {
    tables: Vec<TableCandidate>,
    merged_tables: Vec<MergedTable>,
}

impl TableBuffer {
    /// Create an empty buffer for one document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate discovered on `page_number`.
    ///
    /// The candidate's page span is stamped to the page of discovery,
    /// overriding whatever the detector set. No deduplication and no
    /// validation; amortized O(1).
    pub fn add(&mut self, mut table: TableCandidate, page_number: usize) {
        table.page_start = page_number;
        table.page_end = page_number;
        self.tables.push(table);
    }

    /// Number of accumulated candidates.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// True when no candidates have been added.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// The accumulated candidates, in discovery order.
    pub fn tables(&self) -> &[TableCandidate] {
        &self.tables
    }

    /// The result of the last `merge` call.
    pub fn merged_tables(&self) -> &[MergedTable] {
        &self.merged_tables
    }

    /// Merge compatible candidates that span page boundaries.
    ///
    /// Candidates are stable-sorted by starting page, then swept left to
    /// right: starting from each unprocessed candidate, the immediately
    /// following one is absorbed while [`can_merge`] holds against the
    /// cumulative merged table. Non-adjacent candidates in the sorted
    /// order are never compared. Re-invocation recomputes from the same
    /// accumulated candidates and yields the same result.
    ///
    /// # Returns
    ///
    /// The merge groups in sweep order (ascending by starting page). Each
    /// group lists every absorbed candidate, or the singleton candidate
    /// itself when nothing merged.
    pub fn merge(&mut self, params: &MergeParams) -> Vec<MergedTable> {
        if self.tables.is_empty() {
            self.merged_tables.clear();
            return Vec::new();
        }

        let mut sorted = self.tables.clone();
        sorted.sort_by_key(|t| t.page_start);

        let mut merged = Vec::new();
        let mut i = 0;

        while i < sorted.len() {
            let mut current = sorted[i].clone();

            let mut j = i + 1;
            while j < sorted.len() && can_merge(&current, &sorted[j], params) {
                current = merge_pair(&current, &sorted[j]);
                j += 1;
            }

            merged.push(MergedTable {
                original_tables: sorted[i..j].to_vec(),
                columns: current.columns,
                rows: current.rows,
                page_range: (current.page_start, current.page_end),
            });

            i = j;
        }

        log::debug!(
            "merged {} candidate(s) into {} table(s)",
            self.tables.len(),
            merged.len()
        );

        self.merged_tables = merged.clone();
        merged
    }
}
