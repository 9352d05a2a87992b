//! Table types.

use super::ContentBlock;
use serde::{Deserialize, Serialize};

/// A table row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create a new row with cells.
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    /// Create a row from plain text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self::new(values.into_iter().map(TableCell::text).collect())
    }

    /// Get plain text representation, tab-separated.
    pub fn plain_text(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.plain_text())
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// A table cell holding an ordered list of content blocks (usually
/// paragraphs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content in order
    pub blocks: Vec<ContentBlock>,
}

impl TableCell {
    /// Create a cell with plain text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            blocks: vec![ContentBlock::paragraph(text)],
        }
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Create a cell with the given blocks.
    pub fn with_blocks(blocks: Vec<ContentBlock>) -> Self {
        Self { blocks }
    }

    /// Get plain text content, paragraphs joined with a space.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|b| b.plain_text())
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Check if the cell has no visible content.
    pub fn is_empty(&self) -> bool {
        self.plain_text().trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_strings() {
        let row = TableRow::from_strings(["Name", "Age"]);
        assert_eq!(row.cells.len(), 2);
        assert_eq!(row.plain_text(), "Name\tAge");
    }

    #[test]
    fn test_cell_text() {
        let cell = TableCell::text("Hello");
        assert_eq!(cell.plain_text(), "Hello");
        assert!(!cell.is_empty());
        assert!(TableCell::empty().is_empty());
    }

    #[test]
    fn test_cell_multiple_paragraphs() {
        let cell = TableCell::with_blocks(vec![
            ContentBlock::paragraph("first"),
            ContentBlock::paragraph("second"),
        ]);
        assert_eq!(cell.plain_text(), "first second");
    }
}
