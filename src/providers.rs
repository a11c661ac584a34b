//! Contracts for the external content providers.
//!
//! The structuring core does not read source files itself. A
//! [`PageProvider`] supplies positioned text runs, image counts, vector
//! path counts, and page geometry; an [`OcrProvider`] supplies plain text
//! for rasterized pages. Both are in-process traits; implementations wrap
//! whatever extraction backend the application uses. Coordinates must be
//! reported in a consistent unit across all pages of one document, since
//! cross-page merging compares column positions between pages.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::layout::TextRun;

/// Supplies per-page content for one document.
pub trait PageProvider {
    /// Number of pages in the document.
    fn page_count(&self) -> usize;

    /// The positioned text runs of a page, in extraction order.
    fn text_runs(&self, page: usize) -> Result<Vec<TextRun>>;

    /// Number of embedded raster images on a page.
    fn image_count(&self, page: usize) -> Result<usize>;

    /// Number of vector drawing paths on a page.
    fn vector_path_count(&self, page: usize) -> Result<usize>;

    /// Total page area, in the same units as the run bounding boxes.
    fn page_area(&self, page: usize) -> Result<f32>;

    /// Captions for the images on a page, when the backend produces them.
    fn image_captions(&self, page: usize) -> Result<Vec<String>> {
        let _ = page;
        Ok(Vec::new())
    }
}

/// Supplies OCR text for rasterized pages.
///
/// The core consumes the returned string opaquely; it never inspects the
/// spatial layout of OCR output.
pub trait OcrProvider {
    /// Recognize the text of a page.
    fn ocr_page(&self, page: usize) -> Result<String>;
}

/// Serialized content of one page, as dumped by an extraction backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInput {
    /// Positioned text runs of the page
    #[serde(default)]
    pub runs: Vec<TextRun>,
    /// Number of embedded raster images
    #[serde(default)]
    pub image_count: usize,
    /// Number of vector drawing paths
    #[serde(default)]
    pub vector_path_count: usize,
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
    /// OCR text for the page, when the dump includes it
    #[serde(default)]
    pub ocr_text: Option<String>,
    /// Captions for the page's images, when the dump includes them
    #[serde(default)]
    pub captions: Vec<String>,
}

/// A provider backed by an in-memory page dump.
///
/// Used by the CLI (which reads a JSON dump produced by an extraction
/// backend) and by tests. OCR requests fail unless the dump carries
/// `ocr_text` for the page.
#[derive(Debug, Clone)]
pub struct StaticDocument {
    pages: Vec<PageInput>,
}

impl StaticDocument {
    /// Create a static document from its pages.
    pub fn new(pages: Vec<PageInput>) -> Self {
        Self { pages }
    }

    /// Parse a static document from a JSON array of pages.
    pub fn from_json(json: &str) -> Result<Self> {
        let pages: Vec<PageInput> =
            serde_json::from_str(json).map_err(|e| Error::InvalidDump(e.to_string()))?;
        Ok(Self::new(pages))
    }

    fn page(&self, page: usize) -> Result<&PageInput> {
        self.pages.get(page).ok_or_else(|| Error::Provider {
            page,
            reason: format!("page out of range (document has {} pages)", self.pages.len()),
        })
    }
}

impl PageProvider for StaticDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn text_runs(&self, page: usize) -> Result<Vec<TextRun>> {
        Ok(self.page(page)?.runs.clone())
    }

    fn image_count(&self, page: usize) -> Result<usize> {
        Ok(self.page(page)?.image_count)
    }

    fn vector_path_count(&self, page: usize) -> Result<usize> {
        Ok(self.page(page)?.vector_path_count)
    }

    fn page_area(&self, page: usize) -> Result<f32> {
        let page = self.page(page)?;
        Ok(page.width * page.height)
    }

    fn image_captions(&self, page: usize) -> Result<Vec<String>> {
        Ok(self.page(page)?.captions.clone())
    }
}

impl OcrProvider for StaticDocument {
    fn ocr_page(&self, page: usize) -> Result<String> {
        self.page(page)?.ocr_text.clone().ok_or_else(|| Error::Ocr {
            page,
            reason: "no OCR text in page dump".to_string(),
        })
    }
}
