//! Parsing options and configuration.

/// Font names treated as monospace when classifying single-cell tables.
const DEFAULT_MONOSPACE_FONTS: &[&str] = &[
    "Consolas",
    "Courier",
    "Courier New",
    "Lucida Console",
    "Menlo",
    "Monaco",
    "Source Code Pro",
    "Fira Code",
];

/// Options for parsing DOCX documents.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Whether to turn single-cell monospace tables into code blocks
    pub detect_code_tables: bool,

    /// Whether to read package metadata (docProps/core.xml)
    pub read_metadata: bool,

    /// Extra font names treated as monospace
    pub extra_monospace_fonts: Vec<String>,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable single-cell code table detection.
    pub fn with_code_tables(mut self, detect: bool) -> Self {
        self.detect_code_tables = detect;
        self
    }

    /// Enable or disable metadata reading.
    pub fn with_metadata(mut self, read: bool) -> Self {
        self.read_metadata = read;
        self
    }

    /// Register an additional monospace font name.
    pub fn with_monospace_font(mut self, name: impl Into<String>) -> Self {
        self.extra_monospace_fonts.push(name.into());
        self
    }

    /// Check whether a font name counts as monospace.
    pub fn is_monospace_font(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        if lower.contains("mono") || lower.contains("courier") {
            return true;
        }
        DEFAULT_MONOSPACE_FONTS
            .iter()
            .any(|f| f.eq_ignore_ascii_case(name))
            || self
                .extra_monospace_fonts
                .iter()
                .any(|f| f.eq_ignore_ascii_case(name))
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            detect_code_tables: true,
            read_metadata: true,
            extra_monospace_fonts: Vec::new(),
        }
    }
}
