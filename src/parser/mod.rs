//! DOCX parsing.
//!
//! [`DocxSource`] opens a package and exposes its raw body through the
//! [`DocumentSource`] trait; [`extract_blocks`] turns that body into the
//! ordered [`ContentBlock`](crate::model::ContentBlock) sequence the rest of
//! the pipeline consumes.

mod blocks;
mod docx;
mod options;
mod source;

pub use blocks::{blocks_from_body, extract_blocks};
pub use docx::DocxSource;
pub use options::ParseOptions;
pub use source::{
    BodyElement, DocumentSource, MediaItem, ParagraphKind, RawCell, RawInline, RawParagraph,
    RawRun, RawTable,
};

use crate::error::Result;
use crate::model::Document;
use std::path::Path;

/// Parse a DOCX file into a document model (no image extraction).
pub fn parse_file<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Document> {
    let data = std::fs::read(path)?;
    parse_bytes(&data, options)
}

/// Parse DOCX bytes into a document model (no image extraction).
pub fn parse_bytes(data: &[u8], options: &ParseOptions) -> Result<Document> {
    let source = DocxSource::from_bytes(data, options)?;
    let mut document = Document::new();
    document.metadata = source.metadata().clone();
    document.blocks = extract_blocks(&source, options);
    Ok(document)
}
