//! DOCX format detection.
//!
//! A `.docx` file is a ZIP archive containing `word/document.xml`. Detection
//! sniffs the ZIP local-file-header magic first, then confirms the archive
//! actually carries a WordprocessingML document part.

use crate::error::{Error, Result};
use std::io::Cursor;
use std::path::Path;

/// ZIP local file header magic.
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Archive entry that identifies a WordprocessingML package.
const DOCUMENT_PART: &str = "word/document.xml";

/// Check whether bytes look like a DOCX archive.
///
/// This is a cheap check: ZIP magic plus the presence of the main document
/// part. It does not validate the document XML itself.
pub fn is_docx_bytes(data: &[u8]) -> bool {
    if data.len() < 4 || data[..4] != ZIP_MAGIC {
        return false;
    }

    let cursor = Cursor::new(data);
    match zip::ZipArchive::new(cursor) {
        Ok(mut archive) => archive.by_name(DOCUMENT_PART).is_ok(),
        Err(_) => false,
    }
}

/// Check whether a file on disk is a DOCX document.
pub fn is_docx_file<P: AsRef<Path>>(path: P) -> Result<bool> {
    let data = std::fs::read(path)?;
    Ok(is_docx_bytes(&data))
}

/// Validate bytes as DOCX, returning an error for anything else.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<()> {
    if is_docx_bytes(data) {
        Ok(())
    } else {
        Err(Error::UnknownFormat)
    }
}
