//! Document model types.

mod block;
mod document;
mod image;
mod table;

pub use block::{ContentBlock, TextRun};
pub use document::{Document, Metadata};
pub use image::ImageRecord;
pub(crate) use image::image_file_name;
pub use table::{TableCell, TableRow};
