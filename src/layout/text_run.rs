//! Positioned text runs and line grouping.
//!
//! A text run is the unit of input to the layout heuristics: one
//! contiguous span of rendered text with a bounding box and a font size,
//! as reported by the external extraction provider. Runs are grouped into
//! lines (vertical bands) before classification and table detection.

use serde::{Deserialize, Serialize};

use crate::geometry::{aligned_horizontally, BoundingBox};
use crate::utils::safe_float_cmp;

/// One positioned piece of text on a page.
///
/// Produced by the external text extraction provider; read-only input to
/// the structuring heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content of the run
    pub text: String,
    /// Bounding box in page coordinates
    pub bbox: BoundingBox,
    /// Font size in points
    pub font_size: f32,
    /// Originating line grouping, when the provider reports one
    #[serde(default)]
    pub line: Option<usize>,
}

impl TextRun {
    /// Create a new text run without a provider line grouping.
    pub fn new(text: impl Into<String>, bbox: BoundingBox, font_size: f32) -> Self {
        Self {
            text: text.into(),
            bbox,
            font_size,
            line: None,
        }
    }
}

/// An ordered group of runs sharing one vertical band.
///
/// Runs within a line are sorted left-to-right by their left edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// The runs of the line, left-to-right
    pub runs: Vec<TextRun>,
    /// Bounding box covering every run in the line
    pub bbox: BoundingBox,
}

impl Line {
    /// Build a line from a set of runs, sorting them left-to-right.
    pub fn from_runs(mut runs: Vec<TextRun>) -> Self {
        runs.sort_by(|a, b| safe_float_cmp(a.bbox.x0, b.bbox.x0));

        let mut bbox = runs
            .first()
            .map(|r| r.bbox)
            .unwrap_or(BoundingBox::new(0.0, 0.0, 0.0, 0.0));
        for run in runs.iter().skip(1) {
            bbox = bbox.union(&run.bbox);
        }

        Self { runs, bbox }
    }

    /// The text of the line, runs joined by single spaces.
    pub fn text(&self) -> String {
        self.runs
            .iter()
            .map(|r| r.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Group a page's text runs into lines.
///
/// Runs whose trimmed text is empty are dropped. When every run carries a
/// provider line id, runs are grouped by that id; otherwise runs are
/// clustered geometrically: sorted top-to-bottom, a run joins the current
/// band when its centerline is within `band_tolerance` of the band's first
/// run, else it starts a new band. Lines are returned in top-to-bottom
/// order with runs sorted left-to-right.
pub fn group_runs_into_lines(runs: &[TextRun], band_tolerance: f32) -> Vec<Line> {
    let kept: Vec<&TextRun> = runs.iter().filter(|r| !r.text.trim().is_empty()).collect();
    if kept.is_empty() {
        return Vec::new();
    }

    let mut groups: Vec<Vec<TextRun>> = Vec::new();

    if kept.iter().all(|r| r.line.is_some()) {
        let mut ids: Vec<usize> = Vec::new();
        for run in &kept {
            let id = run.line.unwrap_or_default();
            match ids.iter().position(|known| *known == id) {
                Some(idx) => groups[idx].push((*run).clone()),
                None => {
                    ids.push(id);
                    groups.push(vec![(*run).clone()]);
                },
            }
        }
    } else {
        let mut sorted = kept;
        sorted.sort_by(|a, b| {
            safe_float_cmp(a.bbox.y0, b.bbox.y0).then(safe_float_cmp(a.bbox.x0, b.bbox.x0))
        });

        for run in sorted {
            let joins = groups
                .last()
                .and_then(|g| g.first())
                .map(|first| aligned_horizontally(&first.bbox, &run.bbox, band_tolerance))
                .unwrap_or(false);
            if joins {
                if let Some(group) = groups.last_mut() {
                    group.push(run.clone());
                }
            } else {
                groups.push(vec![run.clone()]);
            }
        }
    }

    let mut lines: Vec<Line> = groups.into_iter().map(Line::from_runs).collect();
    lines.sort_by(|a, b| safe_float_cmp(a.bbox.y0, b.bbox.y0));
    lines
}
