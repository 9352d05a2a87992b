//! OCR engine abstraction and the tesseract CLI engine.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};

/// Tesseract page segmentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageSegMode {
    /// Uniform block of text (psm 6), good for code listings
    UniformBlock,
    /// Single column of text (psm 4)
    SingleColumn,
    /// Fully automatic segmentation (psm 3)
    Auto,
    /// Automatic segmentation with orientation detection (psm 1)
    AutoOsd,
}

impl PageSegMode {
    /// Modes in the order they are tried.
    pub const PRIORITY: [PageSegMode; 4] = [
        PageSegMode::UniformBlock,
        PageSegMode::SingleColumn,
        PageSegMode::Auto,
        PageSegMode::AutoOsd,
    ];

    /// Numeric psm value passed to tesseract.
    pub fn psm(self) -> u8 {
        match self {
            PageSegMode::UniformBlock => 6,
            PageSegMode::SingleColumn => 4,
            PageSegMode::Auto => 3,
            PageSegMode::AutoOsd => 1,
        }
    }

    /// Human-readable method label used in output.
    pub fn label(self) -> String {
        format!("--psm {}", self.psm())
    }
}

/// Abstract interface to an OCR engine.
///
/// One call recognizes one image under one segmentation mode. Engines are
/// expected to be stateless so a single instance can serve a whole batch.
pub trait OcrEngine: Send + Sync {
    /// Recognize text in an image file.
    fn recognize(&self, image: &Path, mode: PageSegMode) -> Result<String>;
}

/// OCR engine configuration.
#[derive(Debug, Clone)]
pub struct OcrOptions {
    /// Tesseract binary name or path
    pub binary: String,

    /// Recognition language (tesseract `-l`)
    pub language: Option<String>,
}

impl OcrOptions {
    /// Create new OCR options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tesseract binary name or path.
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Set the recognition language.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }
}

impl Default for OcrOptions {
    fn default() -> Self {
        Self {
            binary: "tesseract".to_string(),
            language: None,
        }
    }
}

/// Concrete [`OcrEngine`] that shells out to the `tesseract` binary.
pub struct TesseractCli {
    options: OcrOptions,
}

impl TesseractCli {
    /// Create an engine with default options.
    pub fn new() -> Self {
        Self::with_options(OcrOptions::default())
    }

    /// Create an engine with explicit options.
    pub fn with_options(options: OcrOptions) -> Self {
        Self { options }
    }
}

impl Default for TesseractCli {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractCli {
    fn recognize(&self, image: &Path, mode: PageSegMode) -> Result<String> {
        let mut command = Command::new(&self.options.binary);
        command
            .arg(image)
            .arg("stdout")
            .arg("--psm")
            .arg(mode.psm().to_string());
        if let Some(ref language) = self.options.language {
            command.arg("-l").arg(language);
        }

        let output = command.output().map_err(|e| {
            Error::OcrEngine(format!("failed to run {}: {}", self.options.binary, e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::OcrEngine(format!(
                "{} exited with {}: {}",
                self.options.binary,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
