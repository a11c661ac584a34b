//! JSON rendering of the document model.

use crate::document::DocumentModel;
use crate::error::Result;

/// Render a document model as pretty-printed JSON.
pub fn render_json(document: &DocumentModel) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{assemble, Block, DocumentModel};

    #[test]
    fn test_render_json_round_trips() {
        let doc = assemble(
            vec![Block::Paragraph {
                page: 0,
                text: "hello".to_string(),
            }],
            1,
        );

        let json = render_json(&doc).unwrap();
        let parsed: DocumentModel = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, doc);
    }
}
