//! Markdown rendering of the document model.
//!
//! Pure formatting: paragraphs become prose, merged tables become pipe
//! tables, image captions become blockquotes. No decision logic lives
//! here.

use crate::document::{Block, DocumentModel};
use crate::tables::MergedTable;

/// Render a document model to Markdown.
///
/// The document title (or a generic fallback) becomes a level-one
/// heading, followed by the blocks in page order separated by blank
/// lines.
pub fn render_markdown(document: &DocumentModel) -> String {
    let mut parts: Vec<String> = Vec::new();

    let title = document
        .metadata
        .title
        .as_deref()
        .unwrap_or("Processed Document");
    parts.push(format!("# {title}\n"));

    for block in &document.blocks {
        match block {
            Block::Paragraph { text, .. } => {
                if !text.trim().is_empty() {
                    parts.push(format!("{text}\n"));
                }
            },
            Block::Table { table, .. } => {
                let rendered = table_to_markdown(table);
                if !rendered.is_empty() {
                    parts.push(format!("{rendered}\n"));
                }
            },
            Block::ImageCaption { text, .. } => {
                if !text.trim().is_empty() {
                    parts.push(format!("> {text}\n"));
                }
            },
        }
    }

    parts.join("\n")
}

/// Render one merged table as a Markdown pipe table.
///
/// When the table has no header guess, the first data row is promoted to
/// the header. Rows shorter than the widest row are padded with empty
/// cells so every line has the same column count.
pub fn table_to_markdown(table: &MergedTable) -> String {
    if table.columns.is_empty() && table.rows.is_empty() {
        return String::new();
    }

    let mut headers: Vec<String> = table.columns.clone();
    let mut data_rows: Vec<Vec<String>> = table.rows.clone();

    if headers.is_empty() {
        headers = data_rows.remove(0);
    }

    let width = data_rows
        .iter()
        .map(|r| r.len())
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0);
    headers.resize(width, String::new());
    for row in &mut data_rows {
        row.resize(width, String::new());
    }

    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("| {} |", headers.join(" | ")));
    lines.push(format!(
        "| {} |",
        vec!["---"; width].join(" | ")
    ));
    for row in &data_rows {
        lines.push(format!("| {} |", row.join(" | ")));
    }

    lines.join("\n")
}
