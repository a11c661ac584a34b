//! # docstruct
//!
//! Best-effort structural model extraction for paginated documents.
//!
//! Given pages that expose positioned text runs (text plus bounding box
//! and font size), docstruct renders a structural model of the document:
//! paragraphs, tables, and image captions in original reading order, with
//! tables that span multiple pages merged into one logical table.
//!
//! ## Core Components
//!
//! - **Geometry primitives**: overlap, distance, alignment, and column
//!   clustering over axis-aligned boxes
//! - **Page classifier**: per-page content signals (text, table, images,
//!   scan) feeding the extraction dispatch
//! - **Table area detector**: clusters aligned text lines into candidate
//!   tables
//! - **Table buffer / merger**: accumulates candidates across pages and
//!   fuses plausible continuations into logical tables
//! - **Table normalizer**: post-merge cell and row cleanup
//!
//! Content extraction itself (page parsing, OCR, image captioning) is
//! supplied by the caller through the [`providers`] traits; output
//! rendering is pure formatting in [`export`].
//!
//! ## Quick Start
//!
//! ```
//! use docstruct::geometry::BoundingBox;
//! use docstruct::layout::TextRun;
//! use docstruct::pipeline::DocumentPipeline;
//! use docstruct::providers::{PageInput, StaticDocument};
//!
//! # fn main() -> docstruct::Result<()> {
//! let page = PageInput {
//!     runs: vec![TextRun::new(
//!         "A paragraph of body text long enough to keep.",
//!         BoundingBox::new(50.0, 50.0, 550.0, 62.0),
//!         12.0,
//!     )],
//!     image_count: 0,
//!     vector_path_count: 0,
//!     width: 612.0,
//!     height: 792.0,
//!     ocr_text: None,
//!     captions: vec![],
//! };
//!
//! let document = StaticDocument::new(vec![page]);
//! let model = DocumentPipeline::new().process(&document, &document)?;
//! assert_eq!(model.blocks.len(), 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

// Error handling
pub mod error;

// Layout analysis
pub mod geometry;
pub mod layout;

// Cross-page table handling
pub mod tables;

// Text cleanup
pub mod text;

// Document model and assembly
pub mod document;

// Provider contracts
pub mod providers;

// Orchestration
pub mod pipeline;

// Output renderers
pub mod export;

// Re-exports
pub use document::{assemble, Block, DocumentMetadata, DocumentModel};
pub use error::{Error, Result};
pub use layout::{ClassifierParams, DetectorParams, PageProfile, TableCandidate, TextRun};
pub use pipeline::{DocumentPipeline, PipelineParams};
pub use providers::{OcrProvider, PageInput, PageProvider, StaticDocument};
pub use tables::{MergeParams, MergedTable, TableBuffer};

// Internal utilities
pub(crate) mod utils {
    //! Internal utility functions for the library.

    use std::cmp::Ordering;

    /// Safely compare two floating point numbers, handling NaN cases.
    ///
    /// NaN values are treated as equal to each other and greater than all
    /// other values, so sorting never panics on malformed geometry.
    #[inline]
    pub fn safe_float_cmp(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => {
                // Both are normal numbers, safe to unwrap
                a.partial_cmp(&b).unwrap()
            },
        }
    }

}

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
