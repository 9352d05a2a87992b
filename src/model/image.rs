//! Extracted image records.

use serde::{Deserialize, Serialize};

/// Record of one embedded image written to the output directory.
///
/// Sequence numbers are assigned in document order, starting at 1 per source
/// file, with no gaps. A record is written once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    /// Source-internal resource id (relationship id)
    pub resource_id: String,

    /// File name in the image output directory
    pub file_name: String,

    /// 1-based sequence number within the source file
    pub sequence: u32,
}

impl ImageRecord {
    /// Create a new record.
    pub fn new(
        resource_id: impl Into<String>,
        file_name: impl Into<String>,
        sequence: u32,
    ) -> Self {
        Self {
            resource_id: resource_id.into(),
            file_name: file_name.into(),
            sequence,
        }
    }
}

/// Build the deterministic output file name for an extracted image:
/// source file stem, sequence number, original extension.
pub(crate) fn image_file_name(stem: &str, sequence: u32, original_name: &str) -> String {
    let ext = original_name.rsplit_once('.').map(|(_, e)| e).unwrap_or("bin");
    format!("{}_{}.{}", stem, sequence, ext.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_file_name() {
        assert_eq!(image_file_name("chapter01", 1, "image1.png"), "chapter01_1.png");
        assert_eq!(image_file_name("chapter01", 12, "image3.JPEG"), "chapter01_12.jpeg");
    }

    #[test]
    fn test_image_file_name_no_extension() {
        assert_eq!(image_file_name("notes", 2, "blob"), "notes_2.bin");
    }

    #[test]
    fn test_record_fields() {
        let rec = ImageRecord::new("rId5", "ch_1.png", 1);
        assert_eq!(rec.resource_id, "rId5");
        assert_eq!(rec.sequence, 1);
    }
}
