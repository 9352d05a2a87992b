//! OCR augmentation pass.
//!
//! Runs after conversion, over the already-extracted images and the
//! already-rendered markdown. Recovered text is appended in a fixed block
//! format directly after each image's markdown reference; images whose
//! reference line cannot be found get their block appended at the end of
//! the file.

use std::path::Path;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::model::ImageRecord;

use super::engine::{OcrEngine, PageSegMode};
use super::heuristic::looks_like_code;

/// Separator line closing every appended block.
const SEPARATOR: &str =
    "--------------------------------------------------";

/// The winning extraction for one image.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    /// Cleaned recovered text
    pub text: String,
    /// Segmentation mode that produced it
    pub mode: PageSegMode,
    /// Whether the text looks like code
    pub code_like: bool,
}

/// Run the engine under every segmentation mode and pick the best result.
///
/// The result with the most non-whitespace characters wins, except that a
/// code-like result beats any non-code-like one. Engine failures for a
/// single mode are logged at debug and skipped; `None` means every mode
/// failed or produced only whitespace.
pub fn best_extraction(engine: &dyn OcrEngine, image: &Path) -> Option<Extraction> {
    let mut best: Option<Extraction> = None;

    for mode in PageSegMode::PRIORITY {
        let raw = match engine.recognize(image, mode) {
            Ok(raw) => raw,
            Err(e) => {
                log::debug!("{} failed on {}: {}", mode.label(), image.display(), e);
                continue;
            }
        };

        let text = cleanup_text(&raw);
        if text.is_empty() {
            continue;
        }

        let candidate = Extraction {
            code_like: looks_like_code(&text),
            text,
            mode,
        };
        best = Some(match best.take() {
            None => candidate,
            Some(current) => pick(current, candidate),
        });
    }

    best
}

fn pick(current: Extraction, candidate: Extraction) -> Extraction {
    if candidate.code_like != current.code_like {
        return if candidate.code_like { candidate } else { current };
    }
    if score(&candidate.text) > score(&current.text) {
        candidate
    } else {
        current
    }
}

fn score(text: &str) -> usize {
    text.chars().filter(|c| !c.is_whitespace()).count()
}

/// Normalize raw OCR output: NFC, interior whitespace runs collapsed per
/// line, lines trimmed, leading and trailing blank lines dropped.
pub fn cleanup_text(raw: &str) -> String {
    let spaces = Regex::new(r"[ \t]+").unwrap();
    let normalized: String = raw.nfc().collect();

    let lines: Vec<String> = normalized
        .lines()
        .map(|line| spaces.replace_all(line.trim(), " ").into_owned())
        .collect();

    let start = lines.iter().position(|l| !l.is_empty());
    let end = lines.iter().rposition(|l| !l.is_empty());
    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end].join("\n"),
        _ => String::new(),
    }
}

/// Render the fixed-format block appended after an image reference.
pub fn render_ocr_block(image_name: &str, extraction: &Extraction) -> String {
    let mut block = String::new();
    block.push_str(&format!("[Extracted Text from {}]\n", image_name));
    block.push_str(&format!("OCR Method: {}\n", extraction.mode.label()));
    if extraction.code_like {
        block.push_str(&format!("```\n{}\n```\n", extraction.text));
    } else {
        block.push_str(&extraction.text);
        block.push('\n');
    }
    block.push_str(SEPARATOR);
    block.push('\n');
    block
}

/// Augment rendered markdown with OCR text for the given images.
///
/// Each image is OCRed once; if text is recovered, its block is inserted
/// after the line referencing the image. Images with no recoverable text
/// leave the markdown untouched, and the pass as a whole never fails.
pub fn augment_markdown(
    engine: &dyn OcrEngine,
    markdown: &str,
    records: &[ImageRecord],
    image_dir: &Path,
) -> String {
    let mut extractions = Vec::new();
    for record in records {
        let image = image_dir.join(&record.file_name);
        if let Some(extraction) = best_extraction(engine, &image) {
            extractions.push((record.file_name.clone(), extraction));
        } else {
            log::debug!("no text recovered from {}", record.file_name);
        }
    }

    if extractions.is_empty() {
        return markdown.to_string();
    }

    let mut output = String::new();
    let mut pending: Vec<Option<(String, Extraction)>> =
        extractions.into_iter().map(Some).collect();

    for line in markdown.lines() {
        output.push_str(line);
        output.push('\n');

        for slot in pending.iter_mut() {
            let is_ref = matches!(
                slot.as_ref(),
                Some((name, _)) if line.contains(&format!("![{}]", name))
            );
            if is_ref {
                if let Some((name, extraction)) = slot.take() {
                    output.push('\n');
                    output.push_str(&render_ocr_block(&name, &extraction));
                }
            }
        }
    }

    // references that never appeared in the markdown
    for (name, extraction) in pending.into_iter().flatten() {
        output.push('\n');
        output.push_str(&render_ocr_block(&name, &extraction));
    }

    output.trim_end().to_string()
}
