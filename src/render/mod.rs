//! Document rendering to markdown, plain text, and JSON.

mod json;
mod markdown;
mod options;
mod text;

pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, ListState};
pub use options::RenderOptions;
pub use text::to_text;
