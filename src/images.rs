//! Embedded image extraction.
//!
//! Images are written to a single output directory with deterministic names:
//! source file stem, a dense 1-based sequence number assigned in document
//! order, and the original extension. Re-running extraction overwrites the
//! same names, so the pass is idempotent.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::{image_file_name, ContentBlock, ImageRecord};
use crate::parser::DocumentSource;

/// Writes embedded images referenced by a block sequence.
pub struct ImageExtractor {
    output_dir: PathBuf,
}

impl ImageExtractor {
    /// Create an extractor targeting an output directory. The directory is
    /// created on first use.
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// The configured output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Extract every image referenced by `blocks` (in order, including
    /// references inside table cells) from `source`, writing files named
    /// after `stem`.
    ///
    /// Sequence numbers are dense: a reference whose media cannot be
    /// resolved is skipped with a warning and consumes no number. A resource
    /// referenced more than once is written once.
    pub fn extract(
        &self,
        source: &dyn DocumentSource,
        blocks: &[ContentBlock],
        stem: &str,
    ) -> Result<Vec<ImageRecord>> {
        std::fs::create_dir_all(&self.output_dir)?;

        let mut records: Vec<ImageRecord> = Vec::new();
        for resource_id in image_refs(blocks) {
            if records.iter().any(|r| r.resource_id == resource_id) {
                continue;
            }
            let Some(media) = source.media(&resource_id) else {
                log::warn!("image reference {} has no media item, skipping", resource_id);
                continue;
            };

            let sequence = records.len() as u32 + 1;
            let file_name = image_file_name(stem, sequence, &media.name);
            std::fs::write(self.output_dir.join(&file_name), &media.data)
                .map_err(|e| Error::ImageExtract(format!("writing {}: {}", file_name, e)))?;
            records.push(ImageRecord::new(resource_id, file_name, sequence));
        }

        Ok(records)
    }
}

/// Rediscover previously extracted images for a source file stem, for
/// passes that run over existing output. Matches `<stem>_<seq>.<ext>` names
/// and returns records sorted by sequence number.
pub fn find_extracted_images<P: AsRef<Path>>(image_dir: P, stem: &str) -> Result<Vec<ImageRecord>> {
    let prefix = format!("{}_", stem);
    let mut records = Vec::new();

    for entry in std::fs::read_dir(image_dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        let Some(rest) = name.strip_prefix(&prefix) else {
            continue;
        };
        let Some((seq, _ext)) = rest.split_once('.') else {
            continue;
        };
        if let Ok(sequence) = seq.parse::<u32>() {
            records.push(ImageRecord::new(name, name, sequence));
        }
    }

    records.sort_by_key(|r| r.sequence);
    Ok(records)
}

/// Image resource ids referenced by the blocks, in document order.
fn image_refs(blocks: &[ContentBlock]) -> Vec<String> {
    let mut ids = Vec::new();
    collect_refs(blocks, &mut ids);
    ids
}

fn collect_refs(blocks: &[ContentBlock], ids: &mut Vec<String>) {
    for block in blocks {
        match block {
            ContentBlock::ImageRef { resource_id } => ids.push(resource_id.clone()),
            ContentBlock::Table { rows } => {
                for row in rows {
                    for cell in &row.cells {
                        collect_refs(&cell.blocks, ids);
                    }
                }
            }
            _ => {}
        }
    }
}
