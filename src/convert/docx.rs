//! DOCX converter.

use std::path::Path;

use crate::error::{Error, Result};
use crate::images::ImageExtractor;
use crate::model::Document;
use crate::parser::{extract_blocks, DocumentSource, DocxSource};
use crate::render::{to_json, to_markdown, to_text, JsonFormat};

use super::{ConvertOptions, ConvertResult, DocumentConverter, OutputFormat};

/// Converter for DOCX documents.
pub struct DocxConverter;

impl DocxConverter {
    /// Create a new DOCX converter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocxConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentConverter for DocxConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["docx"]
    }

    fn name(&self) -> &str {
        "docx"
    }

    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| Error::Other(format!("invalid file name: {}", path.display())))?
            .to_string();
        let bytes = std::fs::read(path)?;
        self.convert_bytes(&bytes, &stem, options)
    }

    fn convert_bytes(
        &self,
        bytes: &[u8],
        stem: &str,
        options: &ConvertOptions,
    ) -> Result<ConvertResult> {
        let source = DocxSource::from_bytes(bytes, &options.parse)?;

        let mut document = Document::new();
        document.metadata = source.metadata().clone();
        document.blocks = extract_blocks(&source, &options.parse);

        if let Some(ref image_dir) = options.image_dir {
            let extractor = ImageExtractor::new(image_dir);
            document.images = extractor.extract(&source, &document.blocks, stem)?;
        }

        let (content, mime_type) = match options.output_format {
            OutputFormat::Markdown => (to_markdown(&document, &options.render), "text/markdown"),
            OutputFormat::Text => (to_text(&document), "text/plain"),
            OutputFormat::Json => (to_json(&document, JsonFormat::Pretty)?, "application/json"),
        };

        Ok(ConvertResult::new(content, document.metadata.clone())
            .with_images(document.images)
            .with_mime_type(mime_type))
    }
}
