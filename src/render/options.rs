//! Rendering options and configuration.

/// Options for rendering documents to markdown.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Whether to prepend YAML frontmatter built from document metadata
    pub include_frontmatter: bool,

    /// Relative path prefix for image references (no trailing slash)
    pub image_path_prefix: String,

    /// Maximum heading level; deeper headings are clamped
    pub max_heading_level: u8,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable YAML frontmatter.
    pub fn with_frontmatter(mut self, include: bool) -> Self {
        self.include_frontmatter = include;
        self
    }

    /// Set the image path prefix (e.g. `images`).
    pub fn with_image_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.image_path_prefix = prefix.into();
        self
    }

    /// Set the maximum heading level.
    pub fn with_max_heading_level(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, 6);
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_frontmatter: false,
            image_path_prefix: "images".to_string(),
            max_heading_level: 6,
        }
    }
}
