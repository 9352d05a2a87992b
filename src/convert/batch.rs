//! Batch conversion of a directory of documents.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::ocr::{augment_markdown, OcrEngine};

use super::{ConvertOptions, ConverterRegistry, OutputFormat};

/// Per-file result of a batch run. One failed file never aborts the batch;
/// its outcome carries the error instead.
#[derive(Debug, Clone)]
pub struct FileOutcome {
    /// Input file
    pub input: PathBuf,

    /// Written output file, if conversion succeeded
    pub output: Option<PathBuf>,

    /// Number of images extracted from the file
    pub image_count: usize,

    /// Error message for a failed file
    pub error: Option<String>,
}

impl FileOutcome {
    fn success(input: PathBuf, output: PathBuf, image_count: usize) -> Self {
        Self {
            input,
            output: Some(output),
            image_count,
            error: None,
        }
    }

    fn failure(input: PathBuf, error: &Error) -> Self {
        Self {
            input,
            output: None,
            image_count: 0,
            error: Some(error.to_string()),
        }
    }

    /// Whether the file converted and was written.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Convert every supported file in `input_dir`, writing outputs to
/// `output_dir`. Files are processed in parallel; outcomes come back in
/// name order.
///
/// When an OCR engine is supplied and markdown output with image extraction
/// is configured, each file's markdown is augmented with text recovered
/// from its images before being written.
pub fn convert_dir(
    registry: &ConverterRegistry,
    input_dir: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
    ocr_engine: Option<&dyn OcrEngine>,
) -> Result<Vec<FileOutcome>> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(input_dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .map(|ext| registry.supports(ext))
                .unwrap_or(false)
        })
        .collect();
    files.sort();

    std::fs::create_dir_all(output_dir)?;

    let outcomes = files
        .par_iter()
        .map(|path| convert_one(registry, path, output_dir, options, ocr_engine))
        .collect();

    Ok(outcomes)
}

fn convert_one(
    registry: &ConverterRegistry,
    input: &Path,
    output_dir: &Path,
    options: &ConvertOptions,
    ocr_engine: Option<&dyn OcrEngine>,
) -> FileOutcome {
    let result = match registry.convert(input, options) {
        Ok(result) => result,
        Err(e) => {
            log::warn!("failed to convert {}: {}", input.display(), e);
            return FileOutcome::failure(input.to_path_buf(), &e);
        }
    };

    let mut content = result.content;
    if let (Some(engine), Some(image_dir)) = (ocr_engine, options.image_dir.as_ref()) {
        if options.output_format == OutputFormat::Markdown && !result.images.is_empty() {
            content = augment_markdown(engine, &content, &result.images, image_dir);
        }
    }

    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    let output = output_dir.join(format!("{}.{}", stem, options.output_format.extension()));

    if let Err(e) = std::fs::write(&output, content + "\n") {
        let error = Error::OutputWrite {
            path: output.display().to_string(),
            reason: e.to_string(),
        };
        log::warn!("{}", error);
        return FileOutcome::failure(input.to_path_buf(), &error);
    }

    FileOutcome::success(input.to_path_buf(), output, result.images.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;

    fn minimal_docx(text: &str) -> Vec<u8> {
        let document = format!(
            "<w:document xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
             <w:body><w:p><w:r><w:t>{}</w:t></w:r></w:p></w:body></w:document>",
            text
        );
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            writer
                .start_file("word/document.xml", SimpleFileOptions::default())
                .unwrap();
            writer.write_all(document.as_bytes()).unwrap();
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }

    #[test]
    fn test_bad_file_does_not_abort_batch() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join("a.docx"), minimal_docx("good")).unwrap();
        std::fs::write(input.path().join("b.docx"), b"not a docx at all").unwrap();

        let registry = ConverterRegistry::with_defaults();
        let outcomes = convert_dir(
            &registry,
            input.path(),
            output.path(),
            &ConvertOptions::default(),
            None,
        )
        .unwrap();

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes[0].is_success());
        assert!(!outcomes[1].is_success());
        assert_eq!(
            std::fs::read_to_string(output.path().join("a.md")).unwrap(),
            "good\n"
        );
    }

    #[test]
    fn test_unsupported_files_ignored() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join("notes.txt"), b"plain").unwrap();
        std::fs::write(input.path().join("a.docx"), minimal_docx("hello")).unwrap();

        let registry = ConverterRegistry::with_defaults();
        let outcomes = convert_dir(
            &registry,
            input.path(),
            output.path(),
            &ConvertOptions::default(),
            None,
        )
        .unwrap();

        assert_eq!(outcomes.len(), 1);
    }

    #[test]
    fn test_outcomes_in_name_order() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        for name in ["c.docx", "a.docx", "b.docx"] {
            std::fs::write(input.path().join(name), minimal_docx("x")).unwrap();
        }

        let registry = ConverterRegistry::with_defaults();
        let outcomes = convert_dir(
            &registry,
            input.path(),
            output.path(),
            &ConvertOptions::default(),
            None,
        )
        .unwrap();

        let names: Vec<String> = outcomes
            .iter()
            .map(|o| o.input.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.docx", "b.docx", "c.docx"]);
    }
}
