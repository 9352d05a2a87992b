//! Markdown rendering.
//!
//! Rendering is a pure fold over the block sequence: the same blocks always
//! produce the same markdown. List numbering lives in a [`ListState`] value
//! that is threaded through the fold and returned updated from every block,
//! never in shared mutable state.

use crate::model::{ContentBlock, Document, TableRow, TextRun};

use super::RenderOptions;

/// Convert a document to markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> String {
    let mut output = String::new();

    if options.include_frontmatter && !doc.metadata.is_empty() {
        output.push_str(&doc.metadata.to_yaml_frontmatter());
        output.push('\n');
    }

    let mut state = ListState::new();
    for block in &doc.blocks {
        state = render_block(&mut output, block, state, doc, options);
    }

    output.trim().to_string()
}

/// Ordered-list numbering state.
///
/// One counter per nesting depth. [`advance`](ListState::advance) consumes
/// the state and returns the successor along with the item number to print;
/// [`interrupt`](ListState::interrupt) is what any non-list block does to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListState {
    counters: Vec<u32>,
    ordered: Vec<bool>,
}

impl ListState {
    /// Fresh state: no list in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one list item, returning the updated state and the
    /// 1-based number of the item at its depth.
    ///
    /// Moving to a shallower depth drops the deeper counters; switching
    /// between ordered and bulleted at the same depth restarts the counter.
    pub fn advance(mut self, ordered: bool, depth: u8) -> (Self, u32) {
        let d = depth as usize;
        self.counters.truncate(d + 1);
        self.ordered.truncate(d + 1);
        while self.counters.len() <= d {
            self.counters.push(0);
            self.ordered.push(ordered);
        }
        if self.ordered[d] != ordered {
            self.counters[d] = 0;
            self.ordered[d] = ordered;
        }
        self.counters[d] += 1;
        let number = self.counters[d];
        (self, number)
    }

    /// Any non-list block ends all lists in progress.
    pub fn interrupt(self) -> Self {
        Self::new()
    }
}

fn render_block(
    output: &mut String,
    block: &ContentBlock,
    state: ListState,
    doc: &Document,
    options: &RenderOptions,
) -> ListState {
    if !block.is_list_item() {
        ensure_blank_line(output);
    }

    match block {
        ContentBlock::Heading { level, text } => {
            let level = heading_level(*level, options.max_heading_level);
            output.push_str(&"#".repeat(level as usize));
            output.push(' ');
            output.push_str(text);
            output.push_str("\n\n");
            state.interrupt()
        }
        ContentBlock::Paragraph { runs } => {
            output.push_str(&render_runs(runs, true));
            output.push_str("\n\n");
            state.interrupt()
        }
        ContentBlock::ListItem {
            ordered,
            depth,
            runs,
        } => {
            let (state, number) = state.advance(*ordered, *depth);
            output.push_str(&"  ".repeat(*depth as usize));
            if *ordered {
                output.push_str(&format!("{}. ", number));
            } else {
                output.push_str("- ");
            }
            output.push_str(&render_runs(runs, false));
            output.push('\n');
            state
        }
        ContentBlock::Table { rows } => {
            render_table(output, rows);
            state.interrupt()
        }
        ContentBlock::CodeBlock { text } => {
            output.push_str("```\n");
            output.push_str(text);
            output.push_str("\n```\n\n");
            state.interrupt()
        }
        ContentBlock::ImageRef { resource_id } => {
            match doc.image_by_id(resource_id) {
                Some(record) => {
                    let path = image_path(&options.image_path_prefix, &record.file_name);
                    output.push_str(&format!("![{}]({})\n\n", record.file_name, path));
                }
                None => {
                    log::debug!("image {} has no extracted record, skipping", resource_id);
                }
            }
            state.interrupt()
        }
    }
}

/// Map a source heading level to markdown. Level 0 is the document title.
fn heading_level(level: u8, max: u8) -> u8 {
    if level == 0 {
        1
    } else {
        level.clamp(1, max)
    }
}

fn image_path(prefix: &str, name: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", prefix, name)
    }
}

fn ensure_blank_line(output: &mut String) {
    if !output.is_empty() && !output.ends_with("\n\n") {
        output.push('\n');
    }
}

/// Render text runs. Bold runs get `**` markers hugging the text; plain
/// text is escaped at line starts when `escape` is set.
fn render_runs(runs: &[TextRun], escape: bool) -> String {
    let mut out = String::new();
    for run in runs {
        if run.bold {
            let trimmed = run.text.trim();
            if trimmed.is_empty() {
                out.push_str(&run.text);
                continue;
            }
            let start = run.text.len() - run.text.trim_start().len();
            let end = run.text.trim_end().len();
            out.push_str(&run.text[..start]);
            out.push_str("**");
            out.push_str(&run.text[start..end]);
            out.push_str("**");
            out.push_str(&run.text[end..]);
        } else if escape {
            let at_line_start = out.is_empty() || out.ends_with('\n');
            out.push_str(&escape_text(&run.text, at_line_start));
        } else {
            out.push_str(&run.text);
        }
    }
    out
}

/// Escape characters that would be markdown-significant at the start of a
/// line: `#`, `-`, `*`, and an ordered-list `1.` prefix. Characters
/// elsewhere in the line are left alone.
fn escape_text(text: &str, first_at_line_start: bool) -> String {
    let mut out = String::new();
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if i == 0 && !first_at_line_start {
            out.push_str(line);
        } else {
            out.push_str(&escape_line_start(line));
        }
    }
    out
}

fn escape_line_start(line: &str) -> String {
    let trimmed = line.trim_start();
    let indent = &line[..line.len() - trimmed.len()];

    if let Some(first) = trimmed.chars().next() {
        if matches!(first, '#' | '-' | '*') {
            return format!("{}\\{}", indent, trimmed);
        }
        let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
        if !digits.is_empty() {
            if let Some(rest) = trimmed.strip_prefix(&digits) {
                if rest.starts_with('.') {
                    return format!("{}{}\\{}", indent, digits, rest);
                }
            }
        }
    }

    line.to_string()
}

fn render_table(output: &mut String, rows: &[TableRow]) {
    let cols = rows.iter().map(|r| r.cells.len()).max().unwrap_or(0);
    if cols == 0 {
        return;
    }

    for (i, row) in rows.iter().enumerate() {
        output.push('|');
        for c in 0..cols {
            let content = row
                .cells
                .get(c)
                .map(|cell| cell.plain_text().replace('\n', " ").replace('|', "\\|"))
                .unwrap_or_default();
            output.push_str(&format!(" {} |", content.trim()));
        }
        output.push('\n');

        if i == 0 {
            output.push('|');
            for _ in 0..cols {
                output.push_str(" --- |");
            }
            output.push('\n');
        }
    }

    output.push('\n');
}
