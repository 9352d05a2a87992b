//! OCR augmentation: recover text from extracted images and weave it into
//! rendered markdown.

mod augment;
mod engine;
mod heuristic;

pub use augment::{augment_markdown, best_extraction, cleanup_text, render_ocr_block, Extraction};
pub use engine::{OcrEngine, OcrOptions, PageSegMode, TesseractCli};
pub use heuristic::looks_like_code;
