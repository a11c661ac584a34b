//! Document structuring pipeline.
//!
//! Drives the full flow for one document:
//!
//! ```text
//! PageProvider
//!     ↓ per page
//! [classify_page] → PageProfile
//!     ↓ dispatch (table > text > scan > images)
//! [detect_tables] → TableBuffer.add     (table pages)
//! clean_text → Paragraph block          (text pages)
//! OcrProvider → Paragraph block         (scan pages)
//! captions → ImageCaption blocks        (image-only pages)
//!     ↓ after the last page
//! TableBuffer.merge → normalize_table → Table blocks
//!     ↓
//! [assemble] → DocumentModel
//! ```
//!
//! The pipeline is single-threaded and synchronous: one [`TableBuffer`]
//! per document, populated page by page, merged exactly once after the
//! last page. Provider and OCR failures propagate as hard failures for
//! the document.

use crate::document::{assemble, Block, DocumentModel};
use crate::error::Result;
use crate::layout::{
    classify_page, detect_tables, group_runs_into_lines, ClassifierParams, DetectorParams,
};
use crate::providers::{OcrProvider, PageProvider};
use crate::tables::{normalize_table, MergeParams, TableBuffer};
use crate::text::{clean_text, is_text_meaningful};

/// Tunable thresholds for the whole pipeline.
///
/// Bundles the per-component parameter structs so callers can pass one
/// value; every threshold stays an explicit parameter of the calls below.
#[derive(Debug, Clone)]
pub struct PipelineParams {
    /// Page classification thresholds
    pub classifier: ClassifierParams,
    /// Table area detection thresholds
    pub detector: DetectorParams,
    /// Cross-page merge thresholds
    pub merge: MergeParams,
    /// Minimum cleaned length for a paragraph to be kept
    pub min_paragraph_chars: usize,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            classifier: ClassifierParams::default(),
            detector: DetectorParams::default(),
            merge: MergeParams::default(),
            min_paragraph_chars: 10,
        }
    }
}

impl PipelineParams {
    /// Create parameters with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }
}

/// The document structuring pipeline.
#[derive(Debug, Clone)]
pub struct DocumentPipeline {
    params: PipelineParams,
}

impl Default for DocumentPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentPipeline {
    /// Create a pipeline with default parameters.
    pub fn new() -> Self {
        Self {
            params: PipelineParams::new(),
        }
    }

    /// Create a pipeline with explicit parameters.
    pub fn with_params(params: PipelineParams) -> Self {
        Self { params }
    }

    /// Process one document into its structural model.
    ///
    /// Pages are visited in order. Each page is classified, then
    /// dispatched by priority: table detection wins over plain text
    /// extraction, plain text wins over OCR, OCR wins over
    /// caption-only handling. A page carrying both a table and other
    /// text runs table extraction only; its non-table text is not
    /// separated out by this pipeline.
    ///
    /// # Errors
    ///
    /// Provider and OCR failures abort processing and propagate; the
    /// partially filled buffer is discarded with the pipeline state.
    pub fn process<P, O>(&self, provider: &P, ocr: &O) -> Result<DocumentModel>
    where
        P: PageProvider,
        O: OcrProvider,
    {
        let page_count = provider.page_count();
        let mut buffer = TableBuffer::new();
        let mut blocks: Vec<Block> = Vec::new();

        for page in 0..page_count {
            let runs = provider.text_runs(page)?;
            let image_count = provider.image_count(page)?;
            let vector_path_count = provider.vector_path_count(page)?;
            let page_area = provider.page_area(page)?;

            let profile = classify_page(
                page,
                &runs,
                image_count,
                vector_path_count,
                page_area,
                &self.params.classifier,
            );

            if profile.has_table {
                let lines = group_runs_into_lines(&runs, self.params.classifier.line_tolerance);
                for candidate in detect_tables(page, &lines, &self.params.detector) {
                    buffer.add(candidate, page);
                }
            }

            if profile.has_text && !profile.has_table {
                let lines = group_runs_into_lines(&runs, self.params.classifier.line_tolerance);
                let text = lines.iter().map(|l| l.text()).collect::<Vec<_>>().join("\n");
                let cleaned = clean_text(&text);
                if is_text_meaningful(&cleaned, self.params.min_paragraph_chars) {
                    blocks.push(Block::Paragraph {
                        page,
                        text: cleaned,
                    });
                }
            } else if profile.is_scan {
                log::debug!("page {page} looks like a scan, requesting OCR");
                let text = ocr.ocr_page(page)?;
                let cleaned = clean_text(&text);
                if !cleaned.is_empty() {
                    blocks.push(Block::Paragraph {
                        page,
                        text: cleaned,
                    });
                }
            } else if profile.has_images && !profile.has_text && !profile.has_table {
                for caption in provider.image_captions(page)? {
                    let caption = caption.trim();
                    if !caption.is_empty() {
                        blocks.push(Block::ImageCaption {
                            page,
                            text: caption.to_string(),
                        });
                    }
                }
            }
        }

        for table in buffer.merge(&self.params.merge) {
            let table = normalize_table(&table);
            blocks.push(Block::Table {
                page: table.page_range.0,
                table,
            });
        }

        Ok(assemble(blocks, page_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::geometry::BoundingBox;
    use crate::layout::TextRun;
    use crate::providers::{PageInput, StaticDocument};

    fn run(text: &str, x: f32, y: f32) -> TextRun {
        TextRun::new(text, BoundingBox::new(x, y, x + 60.0, y + 10.0), 11.0)
    }

    fn blank_page() -> PageInput {
        PageInput {
            runs: Vec::new(),
            image_count: 0,
            vector_path_count: 0,
            width: 612.0,
            height: 792.0,
            ocr_text: None,
            captions: Vec::new(),
        }
    }

    fn text_page(sentences: usize) -> PageInput {
        let mut runs = Vec::new();
        for i in 0..sentences {
            runs.push(run(
                "a full line of ordinary prose stretching across the page",
                10.0,
                i as f32 * 20.0,
            ));
        }
        PageInput {
            runs,
            ..blank_page()
        }
    }

    fn table_page(rows: &[[&str; 3]]) -> PageInput {
        let mut runs = Vec::new();
        for (i, row) in rows.iter().enumerate() {
            let y = i as f32 * 20.0;
            runs.push(run(row[0], 10.0, y));
            runs.push(run(row[1], 150.0, y));
            runs.push(run(row[2], 300.0, y));
        }
        PageInput {
            runs,
            ..blank_page()
        }
    }

    #[test]
    fn test_text_page_becomes_paragraph() {
        let doc = StaticDocument::new(vec![text_page(20)]);
        let model = DocumentPipeline::new().process(&doc, &doc).unwrap();
        assert_eq!(model.blocks.len(), 1);
        assert!(matches!(model.blocks[0], Block::Paragraph { page: 0, .. }));
    }

    #[test]
    fn test_scan_page_uses_ocr() {
        let page = PageInput {
            ocr_text: Some("Recognized   scan text from the page image.".to_string()),
            ..blank_page()
        };
        let doc = StaticDocument::new(vec![page]);
        let model = DocumentPipeline::new().process(&doc, &doc).unwrap();
        assert_eq!(model.blocks.len(), 1);
        match &model.blocks[0] {
            Block::Paragraph { text, .. } => {
                assert_eq!(text, "Recognized scan text from the page image.");
            },
            other => panic!("unexpected block: {other:?}"),
        }
    }

    #[test]
    fn test_scan_page_ocr_failure_propagates() {
        let doc = StaticDocument::new(vec![blank_page()]);
        let err = DocumentPipeline::new().process(&doc, &doc).unwrap_err();
        assert!(matches!(err, Error::Ocr { page: 0, .. }));
    }

    #[test]
    fn test_cross_page_table_is_merged() {
        let header = ["Name", "Qty", "Price"];
        let page1 = table_page(&[
            header,
            ["Bolt", "12", "0.40"],
            ["Nut", "30", "0.15"],
            ["Washer", "8", "0.05"],
        ]);
        let page2 = table_page(&[
            header,
            ["Screw", "40", "0.25"],
            ["Anchor", "16", "0.60"],
            ["Rivet", "9", "0.10"],
        ]);

        let doc = StaticDocument::new(vec![page1, page2]);
        let model = DocumentPipeline::new().process(&doc, &doc).unwrap();

        let tables: Vec<_> = model
            .blocks
            .iter()
            .filter_map(|b| match b {
                Block::Table { table, .. } => Some(table),
                _ => None,
            })
            .collect();
        assert_eq!(tables.len(), 1);
        assert_eq!(tables[0].page_range, (0, 1));
        assert_eq!(tables[0].original_tables.len(), 2);
        // 3 data rows from each page; the repeated header on page 2 became
        // that candidate's header guess, not a data row
        assert_eq!(tables[0].rows.len(), 6);
        assert_eq!(tables[0].columns, vec!["Name", "Qty", "Price"]);
    }

    #[test]
    fn test_scan_priority_wins_over_captions() {
        // An image-only page with no extractable text classifies as a
        // scan, so OCR runs and the caption branch is never reached.
        let page = PageInput {
            image_count: 1,
            ocr_text: Some(String::new()),
            captions: vec!["A bar chart of quarterly revenue.".to_string()],
            ..blank_page()
        };
        let doc = StaticDocument::new(vec![page]);
        let model = DocumentPipeline::new().process(&doc, &doc).unwrap();
        assert!(model.blocks.is_empty());
    }

    #[test]
    fn test_image_page_with_stub_text_yields_captions() {
        // Enough characters to clear the scan floor, too few for has_text,
        // on a page small enough to keep the density above the scan
        // thresholds: the caption branch handles it.
        let page = PageInput {
            runs: vec![run("Figure 1 below", 10.0, 10.0)],
            image_count: 1,
            width: 100.0,
            height: 100.0,
            captions: vec![" A bar chart of quarterly revenue. ".to_string(), "  ".to_string()],
            ..blank_page()
        };
        let doc = StaticDocument::new(vec![page]);
        let model = DocumentPipeline::new().process(&doc, &doc).unwrap();

        assert_eq!(model.blocks.len(), 1);
        match &model.blocks[0] {
            Block::ImageCaption { text, .. } => {
                assert_eq!(text, "A bar chart of quarterly revenue.");
            },
            other => panic!("unexpected block: {other:?}"),
        }
    }

    #[test]
    fn test_blocks_are_page_ordered() {
        let header = ["Name", "Qty", "Price"];
        let pages = vec![
            text_page(20),
            table_page(&[header, ["a", "1", "2"], ["b", "3", "4"], ["c", "5", "6"]]),
            text_page(20),
        ];
        let doc = StaticDocument::new(pages);
        let model = DocumentPipeline::new().process(&doc, &doc).unwrap();

        let pages: Vec<usize> = model.blocks.iter().map(|b| b.page()).collect();
        assert_eq!(pages, vec![0, 1, 2]);
        assert!(matches!(model.blocks[1], Block::Table { .. }));
    }
}
