//! Table area detection from aligned text lines.
//!
//! This module finds candidate table regions on a single page by grouping
//! consecutive lines whose runs share a columnar left-edge alignment. It
//! is a greedy single pass with no backtracking: a genuine table broken by
//! one misaligned line is split into two candidates, which is an accepted
//! heuristic limitation rather than a defect.

use serde::{Deserialize, Serialize};

use crate::geometry::BoundingBox;
use crate::layout::text_run::Line;

/// A candidate table discovered on a single page.
///
/// Candidates are created by [`detect_tables`] and later stamped with
/// their page of discovery by the table buffer. Merging across pages
/// produces new candidates; existing ones are never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCandidate {
    /// First page the table appears on
    pub page_start: usize,
    /// Last page the table appears on
    pub page_end: usize,
    /// Header guess: the text of the first line's runs, left-to-right
    pub columns: Vec<String>,
    /// Data rows, each an ordered list of cell strings
    pub rows: Vec<Vec<String>>,
    /// Bounding box covering every run in the detected group
    pub bbox: BoundingBox,
    /// Left edge of each detected column on the first line of the group
    pub x_coordinates: Vec<f32>,
}

/// Tunable thresholds for table area detection.
#[derive(Debug, Clone)]
pub struct DetectorParams {
    /// Maximum left-x difference for two runs to count as aligned
    pub align_tolerance: f32,
    /// Maximum difference in run count between consecutive table lines
    pub max_run_delta: usize,
    /// Minimum number of lines a group needs to become a candidate
    pub min_group_lines: usize,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            align_tolerance: 5.0,
            max_run_delta: 1,
            min_group_lines: 2,
        }
    }
}

impl DetectorParams {
    /// Create parameters with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the left-x alignment tolerance.
    pub fn with_align_tolerance(mut self, tolerance: f32) -> Self {
        self.align_tolerance = tolerance;
        self
    }
}

/// Detect candidate tables in a page's lines.
///
/// Lines must be in top-to-bottom order with runs sorted left-to-right,
/// as produced by [`crate::layout::group_runs_into_lines`]. The walk
/// keeps one open group: a line that aligns with the last line of the
/// group extends it, a line that does not closes the group (emitting a
/// candidate when it has enough lines) and starts a new one.
///
/// # Arguments
///
/// * `page_num` - Zero-based index of the page being scanned
/// * `lines` - The page's grouped text lines
/// * `params` - Detection thresholds
///
/// # Returns
///
/// Zero or more candidates, in discovery (top-to-bottom) order.
pub fn detect_tables(page_num: usize, lines: &[Line], params: &DetectorParams) -> Vec<TableCandidate> {
    let mut tables = Vec::new();
    if lines.is_empty() {
        return tables;
    }

    let mut group: Vec<&Line> = vec![&lines[0]];

    for line in &lines[1..] {
        let extends = group
            .last()
            .map(|prev| lines_align(prev, line, params))
            .unwrap_or(false);

        if extends {
            group.push(line);
        } else {
            if group.len() >= params.min_group_lines {
                tables.push(candidate_from_group(page_num, &group));
            }
            group = vec![line];
        }
    }

    if group.len() >= params.min_group_lines {
        tables.push(candidate_from_group(page_num, &group));
    }

    log::debug!("page {page_num}: {} table candidate(s)", tables.len());
    tables
}

/// Check whether two consecutive lines belong to the same table group.
///
/// True when the run counts differ by at most `max_run_delta` and at least
/// half of the position-matched runs (by index, up to the shorter line's
/// length) have left edges within the alignment tolerance.
fn lines_align(prev: &Line, curr: &Line, params: &DetectorParams) -> bool {
    let n_prev = prev.runs.len();
    let n_curr = curr.runs.len();

    if n_prev.abs_diff(n_curr) > params.max_run_delta {
        return false;
    }

    let shorter = n_prev.min(n_curr);
    let matches = (0..shorter)
        .filter(|&i| (prev.runs[i].bbox.x0 - curr.runs[i].bbox.x0).abs() <= params.align_tolerance)
        .count();

    matches >= shorter / 2
}

/// Build a candidate from a closed group of lines.
///
/// The first line becomes the header guess and supplies the column
/// x-coordinates; the remaining lines become data rows. The bounding box
/// is the min/max over every run box in the group.
fn candidate_from_group(page_num: usize, group: &[&Line]) -> TableCandidate {
    let first = group[0];
    let columns: Vec<String> = first.runs.iter().map(|r| r.text.clone()).collect();
    let rows: Vec<Vec<String>> = group[1..]
        .iter()
        .map(|line| line.runs.iter().map(|r| r.text.clone()).collect())
        .collect();
    let x_coordinates: Vec<f32> = first.runs.iter().map(|r| r.bbox.x0).collect();

    let mut bbox: Option<BoundingBox> = None;
    for run in group.iter().flat_map(|line| line.runs.iter()) {
        bbox = Some(match bbox {
            Some(acc) => acc.union(&run.bbox),
            None => run.bbox,
        });
    }

    TableCandidate {
        page_start: page_num,
        page_end: page_num,
        columns,
        rows,
        bbox: bbox.unwrap_or(BoundingBox::new(0.0, 0.0, 0.0, 0.0)),
        x_coordinates,
    }
}
