//! Content block and text-run types.

use super::TableRow;
use serde::{Deserialize, Serialize};

/// One unit of document content, in document order.
///
/// Blocks are immutable once produced by the extractor; the renderer never
/// mutates them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// A heading. Level 0 is the document title; levels 1+ map to heading
    /// styles. The renderer clamps to the markdown range.
    Heading {
        /// Heading level (0 = title)
        level: u8,
        /// Heading text, formatting stripped
        text: String,
    },

    /// A paragraph of formatted text runs.
    Paragraph {
        /// Text runs in order
        runs: Vec<TextRun>,
    },

    /// A list item.
    ListItem {
        /// Numbered vs. bulleted
        ordered: bool,
        /// Nesting depth (0 = top level)
        depth: u8,
        /// Item content
        runs: Vec<TextRun>,
    },

    /// A table with at least one row.
    Table {
        /// Rows in order
        rows: Vec<TableRow>,
    },

    /// A literal code block. The source format carries no language tag.
    CodeBlock {
        /// Verbatim code text
        text: String,
    },

    /// A reference to an embedded image, identified by its relationship id
    /// inside the source document.
    ImageRef {
        /// Source-internal resource id (e.g. `rId7`)
        resource_id: String,
    },
}

impl ContentBlock {
    /// Create a paragraph block from plain text.
    pub fn paragraph(text: impl Into<String>) -> Self {
        ContentBlock::Paragraph {
            runs: vec![TextRun::new(text)],
        }
    }

    /// Create a heading block.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        ContentBlock::Heading {
            level,
            text: text.into(),
        }
    }

    /// Check if this block is a list item.
    pub fn is_list_item(&self) -> bool {
        matches!(self, ContentBlock::ListItem { .. })
    }

    /// Get plain text content of the block (no markdown markers).
    pub fn plain_text(&self) -> String {
        match self {
            ContentBlock::Heading { text, .. } => text.clone(),
            ContentBlock::Paragraph { runs } | ContentBlock::ListItem { runs, .. } => {
                runs.iter().map(|r| r.text.as_str()).collect()
            }
            ContentBlock::Table { rows } => rows
                .iter()
                .map(|r| r.plain_text())
                .collect::<Vec<_>>()
                .join("\n"),
            ContentBlock::CodeBlock { text } => text.clone(),
            ContentBlock::ImageRef { .. } => String::new(),
        }
    }
}

/// A span of text with consistent formatting.
///
/// Only bold is carried through to markdown; italics are deliberately
/// dropped as a conversion policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Bold flag
    pub bold: bool,
}

impl TextRun {
    /// Create a plain text run.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
        }
    }

    /// Create a bold text run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_plain_text() {
        let block = ContentBlock::Paragraph {
            runs: vec![
                TextRun::new("Hello "),
                TextRun::bold("world"),
                TextRun::new("!"),
            ],
        };
        assert_eq!(block.plain_text(), "Hello world!");
    }

    #[test]
    fn test_heading_helper() {
        let block = ContentBlock::heading(2, "Chapter");
        assert_eq!(
            block,
            ContentBlock::Heading {
                level: 2,
                text: "Chapter".to_string()
            }
        );
    }

    #[test]
    fn test_image_ref_has_no_text() {
        let block = ContentBlock::ImageRef {
            resource_id: "rId4".to_string(),
        };
        assert_eq!(block.plain_text(), "");
    }
}
