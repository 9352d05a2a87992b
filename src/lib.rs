//! # undocx
//!
//! DOCX to markdown conversion library with OCR augmentation.
//!
//! This library converts DOCX documents to markdown (or plain text and
//! JSON), extracts embedded images with deterministic names, and can
//! recover text from those images with OCR, appending it after each
//! image's markdown reference.
//!
//! ## Quick Start
//!
//! ```no_run
//! use undocx::{parse_file, render, ParseOptions};
//!
//! fn main() -> undocx::Result<()> {
//!     // Parse a DOCX file
//!     let doc = parse_file("chapter.docx", &ParseOptions::default())?;
//!
//!     // Convert to markdown
//!     let options = render::RenderOptions::default();
//!     let markdown = render::to_markdown(&doc, &options);
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Multiple output formats**: markdown, plain text, JSON
//! - **Structure preservation**: headings, paragraphs, tables, lists
//! - **Image extraction**: deterministic `stem_N.ext` names
//! - **OCR augmentation**: multi-mode tesseract pass with code detection
//! - **Parallel processing**: uses Rayon for directory batches

pub mod convert;
pub mod detect;
pub mod error;
pub mod images;
pub mod model;
pub mod ocr;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{
    convert_dir, ConvertOptions, ConvertResult, ConverterRegistry, DocumentConverter,
    DocxConverter, FileOutcome, OutputFormat,
};
pub use detect::{detect_format_from_bytes, is_docx_bytes, is_docx_file};
pub use error::{Error, Result};
pub use images::{find_extracted_images, ImageExtractor};
pub use model::{
    ContentBlock, Document, ImageRecord, Metadata, TableCell, TableRow, TextRun,
};
pub use ocr::{looks_like_code, OcrEngine, OcrOptions, PageSegMode, TesseractCli};
pub use parser::{parse_bytes, parse_file, DocumentSource, DocxSource, ParseOptions};
pub use render::{JsonFormat, ListState, RenderOptions};

use std::path::Path;

/// Convert a DOCX file to markdown with default options.
///
/// # Example
///
/// ```no_run
/// use undocx::to_markdown;
///
/// let markdown = to_markdown("chapter.docx").unwrap();
/// std::fs::write("chapter.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path, &ParseOptions::default())?;
    Ok(render::to_markdown(&doc, &RenderOptions::default()))
}

/// Convert a DOCX file to markdown with custom options.
pub fn to_markdown_with_options<P: AsRef<Path>>(
    path: P,
    parse: &ParseOptions,
    render_options: &RenderOptions,
) -> Result<String> {
    let doc = parse_file(path, parse)?;
    Ok(render::to_markdown(&doc, render_options))
}

/// Extract plain text from a DOCX file.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path, &ParseOptions::default())?;
    Ok(render::to_text(&doc))
}

/// Convert a DOCX file to JSON.
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path, &ParseOptions::default())?;
    render::to_json(&doc, format)
}

/// Builder for the full conversion pipeline.
///
/// # Example
///
/// ```no_run
/// use undocx::Undocx;
///
/// let result = Undocx::new()
///     .with_image_dir("./out/images")
///     .with_frontmatter()
///     .convert("chapter.docx")?;
/// std::fs::write("chapter.md", &result.content)?;
/// # Ok::<(), undocx::Error>(())
/// ```
pub struct Undocx {
    options: ConvertOptions,
}

impl Undocx {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Set the image extraction directory.
    pub fn with_image_dir(mut self, dir: impl Into<std::path::PathBuf>) -> Self {
        self.options = self.options.with_image_dir(dir);
        self
    }

    /// Enable YAML frontmatter in markdown output.
    pub fn with_frontmatter(mut self) -> Self {
        self.options.render = self.options.render.with_frontmatter(true);
        self
    }

    /// Set the image path prefix used in markdown references.
    pub fn with_image_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.options.render = self.options.render.with_image_path_prefix(prefix);
        self
    }

    /// Set the output format.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.options = self.options.with_format(format);
        self
    }

    /// Disable single-cell code table detection.
    pub fn without_code_tables(mut self) -> Self {
        self.options.parse = self.options.parse.with_code_tables(false);
        self
    }

    /// Convert a single file.
    pub fn convert<P: AsRef<Path>>(self, path: P) -> Result<ConvertResult> {
        let registry = ConverterRegistry::with_defaults();
        registry.convert(path.as_ref(), &self.options)
    }

    /// The assembled conversion options, for use with [`convert_dir`].
    pub fn into_options(self) -> ConvertOptions {
        self.options
    }
}

impl Default for Undocx {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_options() {
        let options = Undocx::new()
            .with_frontmatter()
            .with_image_dir("./img")
            .with_format(OutputFormat::Json)
            .into_options();

        assert!(options.render.include_frontmatter);
        assert_eq!(options.image_dir, Some(std::path::PathBuf::from("./img")));
        assert_eq!(options.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_parse_bytes_empty_data() {
        let result = parse_bytes(&[], &ParseOptions::default());
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_parse_bytes_unknown_magic() {
        let result = parse_bytes(b"<!DOCTYPE html>", &ParseOptions::default());
        assert!(result.is_err());
    }
}
