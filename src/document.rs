//! The assembled document model.
//!
//! Extraction produces typed blocks (paragraphs, merged tables, image
//! captions) keyed by their page of origin. Assembly is a stable sort by
//! page key plus metadata stamping; there is no decision logic here.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::tables::MergedTable;

/// One typed content block of the structural model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of body text
    Paragraph {
        /// Page the paragraph was extracted from
        page: usize,
        /// Cleaned paragraph text
        text: String,
    },
    /// A logical table, possibly merged across pages
    Table {
        /// Page the table starts on
        page: usize,
        /// The merged, normalized table
        table: MergedTable,
    },
    /// A caption describing an embedded image
    ImageCaption {
        /// Page the image appears on
        page: usize,
        /// Caption text
        text: String,
    },
}

impl Block {
    /// The page-order key of the block.
    pub fn page(&self) -> usize {
        match self {
            Block::Paragraph { page, .. } => *page,
            Block::Table { page, .. } => *page,
            Block::ImageCaption { page, .. } => *page,
        }
    }
}

/// Metadata stamped onto an assembled document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Optional document title, used by renderers
    #[serde(default)]
    pub title: Option<String>,
    /// RFC 3339 timestamp of assembly
    pub created_at: String,
    /// Number of pages in the source document
    pub page_count: usize,
    /// Number of content blocks in the model
    pub block_count: usize,
}

/// The structural model of one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentModel {
    /// Assembly metadata
    pub metadata: DocumentMetadata,
    /// Content blocks in page order
    pub blocks: Vec<Block>,
}

/// Assemble content blocks into a document model.
///
/// Blocks are stable-sorted by their page key, so blocks from the same
/// page keep their relative extraction order.
pub fn assemble(mut blocks: Vec<Block>, page_count: usize) -> DocumentModel {
    blocks.sort_by_key(|b| b.page());

    DocumentModel {
        metadata: DocumentMetadata {
            title: None,
            created_at: Utc::now().to_rfc3339(),
            page_count,
            block_count: blocks.len(),
        },
        blocks,
    }
}
