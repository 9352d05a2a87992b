//! Document source abstraction layer.
//!
//! Provides a trait-based interface over the raw body content of a word
//! processing document, isolating the concrete package format (ZIP + XML)
//! from the block extraction logic.

use crate::model::Metadata;

/// A span of body text with the formatting flags the pipeline cares about.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRun {
    /// Run text. Soft line breaks appear as `\n`.
    pub text: String,
    /// Bold flag
    pub bold: bool,
    /// Whether the run uses a monospace font
    pub monospace: bool,
}

impl RawRun {
    /// Create a plain run.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            monospace: false,
        }
    }

    /// Create a bold run.
    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            monospace: false,
        }
    }

    /// Create a monospace run.
    pub fn monospace(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            monospace: true,
        }
    }
}

/// One inline piece of a paragraph, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum RawInline {
    /// A text run
    Text(RawRun),
    /// An embedded image, identified by its relationship id
    Image {
        /// Relationship id resolving to a media item
        resource_id: String,
    },
}

/// Paragraph role derived from its style and numbering properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphKind {
    /// The document title style
    Title,
    /// A heading style with its 1-based level
    Heading(u8),
    /// A numbered or bulleted list paragraph
    List {
        /// Numbered vs. bulleted
        ordered: bool,
        /// Nesting depth (0 = top level)
        depth: u8,
    },
    /// Ordinary body text
    #[default]
    Body,
}

/// A raw paragraph: role plus ordered inline content.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawParagraph {
    /// Paragraph role
    pub kind: ParagraphKind,
    /// Inline content in order
    pub inlines: Vec<RawInline>,
}

impl RawParagraph {
    /// Create a body paragraph from inlines.
    pub fn new(inlines: Vec<RawInline>) -> Self {
        Self {
            kind: ParagraphKind::Body,
            inlines,
        }
    }

    /// Create a paragraph with an explicit kind.
    pub fn with_kind(kind: ParagraphKind, inlines: Vec<RawInline>) -> Self {
        Self { kind, inlines }
    }

    /// Whether the paragraph carries no text and no images.
    pub fn is_empty(&self) -> bool {
        self.inlines.iter().all(|inline| match inline {
            RawInline::Text(run) => run.text.trim().is_empty(),
            RawInline::Image { .. } => false,
        })
    }
}

/// A raw table cell: a sequence of paragraphs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawCell {
    /// Cell paragraphs in order
    pub paragraphs: Vec<RawParagraph>,
}

/// A raw table: rows of cells.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawTable {
    /// Rows in order
    pub rows: Vec<Vec<RawCell>>,
}

/// One ordered element of the document body.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyElement {
    /// A paragraph
    Paragraph(RawParagraph),
    /// A table
    Table(RawTable),
}

/// An embedded media item resolved from a relationship id.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    /// Original file name inside the package (e.g. `image1.png`)
    pub name: String,
    /// Raw bytes
    pub data: Vec<u8>,
}

/// Abstract interface for document body access.
///
/// Implementations expose the ordered body, resolved media, and package
/// metadata — without exposing any concrete package or XML library types.
/// All fallible work happens when the source is opened.
pub trait DocumentSource {
    /// Ordered body elements.
    fn body(&self) -> &[BodyElement];

    /// Resolve a relationship id to its media item, if any.
    fn media(&self, resource_id: &str) -> Option<&MediaItem>;

    /// Package metadata.
    fn metadata(&self) -> &Metadata;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_paragraph() {
        assert!(RawParagraph::default().is_empty());
        assert!(RawParagraph::new(vec![RawInline::Text(RawRun::text("  \n "))]).is_empty());
    }

    #[test]
    fn test_image_paragraph_not_empty() {
        let para = RawParagraph::new(vec![RawInline::Image {
            resource_id: "rId3".to_string(),
        }]);
        assert!(!para.is_empty());
    }
}
