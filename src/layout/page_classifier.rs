//! Page content classification.
//!
//! Determines the content type signals of a page (text, table, images,
//! scan) from its positioned text runs and embedded object counts. The
//! resulting [`PageProfile`] feeds the caller's dispatch decision; the
//! expected priority order when signals overlap is table > text > scan >
//! images, enforced by the caller rather than here.

use serde::{Deserialize, Serialize};

use crate::layout::text_run::{group_runs_into_lines, Line, TextRun};

/// Classification result for one page.
///
/// Created once per page; immutable thereafter. Flags are not mutually
/// exclusive by construction; overlap is resolved by the consumer's
/// priority order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageProfile {
    /// Zero-based page index
    pub page_num: usize,
    /// Page carries enough extractable text to treat as a text page
    pub has_text: bool,
    /// Page shows a columnar alignment pattern suggesting a table
    pub has_table: bool,
    /// Page embeds at least one raster image
    pub has_images: bool,
    /// Page looks like a rasterized scan that needs OCR
    pub is_scan: bool,
    /// Estimated fraction of the page area covered by text, in `[0, 1]`
    pub text_density: f32,
    /// Number of embedded raster images
    pub image_count: usize,
    /// Length of the trimmed extracted text
    pub char_count: usize,
}

/// Tunable thresholds for page classification.
///
/// Passed explicitly into [`classify_page`]; there is no ambient
/// configuration state.
#[derive(Debug, Clone)]
pub struct ClassifierParams {
    /// Minimum trimmed character count for `has_text` (exclusive)
    pub min_text_chars: usize,
    /// Character count below which a page is always a scan
    pub scan_char_floor: usize,
    /// Density below which a page with images is a scan
    pub scan_density_with_images: f32,
    /// Density below which a noisy page is a scan
    pub scan_density_noisy: f32,
    /// Fraction of non-alphanumeric, non-space characters that counts as noisy
    pub scan_noise_ratio: f32,
    /// Estimated area of one glyph, used for the density estimate
    pub glyph_area: f32,
    /// Width of the left-x bins used by the table signal
    pub column_bin: f32,
    /// Minimum number of multi-run lines required for the table signal
    pub min_table_lines: usize,
    /// Minimum number of recurring bins required for the table signal
    pub min_recurring_bins: usize,
    /// Number of lines a bin must recur in to count as a column
    pub bin_recurrence: usize,
    /// Vertical band tolerance for grouping runs into lines
    pub line_tolerance: f32,
}

impl Default for ClassifierParams {
    fn default() -> Self {
        Self {
            min_text_chars: 20,
            scan_char_floor: 10,
            scan_density_with_images: 0.05,
            scan_density_noisy: 0.1,
            scan_noise_ratio: 0.3,
            glyph_area: 6.0 * 12.0,
            column_bin: 10.0,
            min_table_lines: 3,
            min_recurring_bins: 2,
            bin_recurrence: 3,
            line_tolerance: 5.0,
        }
    }
}

impl ClassifierParams {
    /// Create parameters with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum character count for `has_text`.
    pub fn with_min_text_chars(mut self, chars: usize) -> Self {
        self.min_text_chars = chars;
        self
    }

    /// Set the vertical band tolerance for line grouping.
    pub fn with_line_tolerance(mut self, tolerance: f32) -> Self {
        self.line_tolerance = tolerance;
        self
    }

    /// Set the minimum number of multi-run lines for the table signal.
    pub fn with_min_table_lines(mut self, lines: usize) -> Self {
        self.min_table_lines = lines;
        self
    }
}

/// Classify the content type of a page.
///
/// # Arguments
///
/// * `page_num` - Zero-based page index
/// * `runs` - The page's positioned text runs
/// * `image_count` - Number of embedded raster images on the page
/// * `vector_path_count` - Number of vector drawing paths on the page
/// * `page_area` - Total page area in the same units as the run boxes
/// * `params` - Classification thresholds
///
/// # Returns
///
/// A [`PageProfile`] with the page's content signals. Empty input produces
/// a profile with all-false derivable flags except `is_scan`, which is set
/// because the character count falls under the scan floor.
pub fn classify_page(
    page_num: usize,
    runs: &[TextRun],
    image_count: usize,
    vector_path_count: usize,
    page_area: f32,
    params: &ClassifierParams,
) -> PageProfile {
    let lines = group_runs_into_lines(runs, params.line_tolerance);
    let line_texts: Vec<String> = lines.iter().map(|l| l.text()).collect();
    let raw_text = line_texts.join("\n");

    let char_count = raw_text.trim().chars().count();
    let text_density = estimate_text_density(&line_texts, page_area, params);
    let has_table = detect_table_signal(&lines, params);
    let has_text = char_count > params.min_text_chars;
    let is_scan = looks_like_scan(char_count, text_density, image_count, &raw_text, params);
    let has_images = image_count > 0;

    log::debug!(
        "page {page_num}: chars={char_count} density={text_density:.3} images={image_count} \
         paths={vector_path_count} table={has_table} scan={is_scan}"
    );

    PageProfile {
        page_num,
        has_text,
        has_table,
        has_images,
        is_scan,
        text_density,
        image_count,
        char_count,
    }
}

/// Estimate the fraction of the page covered by text.
///
/// The covered area is approximated as non-empty line count times mean
/// characters per line times a fixed glyph-area constant, then divided by
/// the page area and clamped to `[0, 1]`. A non-positive page area yields
/// zero.
fn estimate_text_density(line_texts: &[String], page_area: f32, params: &ClassifierParams) -> f32 {
    if page_area <= 0.0 {
        return 0.0;
    }

    let non_empty = line_texts.iter().filter(|l| !l.trim().is_empty()).count();
    let total_chars: usize = line_texts.iter().map(|l| l.chars().count()).sum();
    let avg_line_length = total_chars as f32 / line_texts.len().max(1) as f32;

    let estimated_char_area = non_empty as f32 * avg_line_length * params.glyph_area;
    (estimated_char_area / page_area).min(1.0)
}

/// Detect a columnar alignment pattern that suggests a table.
///
/// Only lines with at least two runs participate. Each run's left edge is
/// bucketed into fixed-width bins, counting each bin at most once per
/// line. The signal fires when at least `min_recurring_bins` distinct bins
/// each recur in `bin_recurrence` or more lines. Fewer than
/// `min_table_lines` qualifying lines never fires, regardless of bins.
fn detect_table_signal(lines: &[Line], params: &ClassifierParams) -> bool {
    let multi_run: Vec<&Line> = lines.iter().filter(|l| l.runs.len() >= 2).collect();
    if multi_run.len() < params.min_table_lines {
        return false;
    }

    let mut bin_counts: Vec<(i64, usize)> = Vec::new();
    for line in &multi_run {
        let mut seen_in_line: Vec<i64> = Vec::new();
        for run in &line.runs {
            let bin = (run.bbox.x0 / params.column_bin).round() as i64;
            if seen_in_line.contains(&bin) {
                continue;
            }
            seen_in_line.push(bin);
            match bin_counts.iter_mut().find(|(b, _)| *b == bin) {
                Some((_, count)) => *count += 1,
                None => bin_counts.push((bin, 1)),
            }
        }
    }

    let recurring = bin_counts
        .iter()
        .filter(|(_, count)| *count >= params.bin_recurrence)
        .count();
    recurring >= params.min_recurring_bins
}

/// Decide whether a page is likely a rasterized scan.
///
/// Triggers are evaluated in order and short-circuit: a near-empty page is
/// always a scan; a sparse page with images is a scan; a sparse page whose
/// text is mostly non-alphanumeric noise is a scan.
fn looks_like_scan(
    char_count: usize,
    text_density: f32,
    image_count: usize,
    raw_text: &str,
    params: &ClassifierParams,
) -> bool {
    if char_count < params.scan_char_floor {
        return true;
    }

    if text_density < params.scan_density_with_images && image_count > 0 {
        return true;
    }

    let total = raw_text.chars().count().max(1);
    let special = raw_text
        .chars()
        .filter(|c| !c.is_alphanumeric() && *c != ' ')
        .count();
    let special_ratio = special as f32 / total as f32;

    text_density < params.scan_density_noisy && special_ratio > params.scan_noise_ratio
}
