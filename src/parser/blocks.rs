//! Block extraction: raw body elements to ordered content blocks.

use crate::model::{ContentBlock, TableCell, TableRow, TextRun};
use crate::parser::options::ParseOptions;
use crate::parser::source::{
    BodyElement, DocumentSource, ParagraphKind, RawCell, RawInline, RawParagraph, RawTable,
};

/// Extract ordered content blocks from a document source.
pub fn extract_blocks(source: &dyn DocumentSource, options: &ParseOptions) -> Vec<ContentBlock> {
    blocks_from_body(source.body(), options)
}

/// Extract ordered content blocks from raw body elements.
pub fn blocks_from_body(body: &[BodyElement], options: &ParseOptions) -> Vec<ContentBlock> {
    let mut blocks = Vec::new();
    for element in body {
        match element {
            BodyElement::Paragraph(para) => push_paragraph_blocks(para, &mut blocks),
            BodyElement::Table(table) => blocks.push(table_block(table, options)),
        }
    }
    blocks
}

/// Convert one paragraph into zero or more blocks: its text block (if it has
/// visible text) followed by one `ImageRef` per embedded image. Empty
/// paragraphs yield nothing, so they never interrupt list numbering.
fn push_paragraph_blocks(para: &RawParagraph, blocks: &mut Vec<ContentBlock>) {
    if para.is_empty() {
        return;
    }

    let (runs, images) = collect_inlines(&para.inlines);

    if runs.iter().any(|r| !r.text.trim().is_empty()) {
        let block = match para.kind {
            ParagraphKind::Title => ContentBlock::Heading {
                level: 0,
                text: join_runs(&runs),
            },
            ParagraphKind::Heading(level) => ContentBlock::Heading {
                level,
                text: join_runs(&runs),
            },
            ParagraphKind::List { ordered, depth } => ContentBlock::ListItem {
                ordered,
                depth,
                runs,
            },
            ParagraphKind::Body => ContentBlock::Paragraph { runs },
        };
        blocks.push(block);
    }

    for resource_id in images {
        blocks.push(ContentBlock::ImageRef { resource_id });
    }
}

/// Split inlines into coalesced text runs and image resource ids.
fn collect_inlines(inlines: &[RawInline]) -> (Vec<TextRun>, Vec<String>) {
    let mut runs: Vec<TextRun> = Vec::new();
    let mut images = Vec::new();

    for inline in inlines {
        match inline {
            RawInline::Text(raw) => {
                if raw.text.is_empty() {
                    continue;
                }
                match runs.last_mut() {
                    Some(last) if last.bold == raw.bold => last.text.push_str(&raw.text),
                    _ => runs.push(TextRun {
                        text: raw.text.clone(),
                        bold: raw.bold,
                    }),
                }
            }
            RawInline::Image { resource_id } => images.push(resource_id.clone()),
        }
    }

    (runs, images)
}

fn join_runs(runs: &[TextRun]) -> String {
    runs.iter()
        .map(|r| r.text.as_str())
        .collect::<String>()
        .trim()
        .to_string()
}

/// Convert a raw table. A single-cell table whose sole content is unformatted
/// monospace text is a code listing, not tabular data.
fn table_block(table: &RawTable, options: &ParseOptions) -> ContentBlock {
    if options.detect_code_tables {
        if let Some(text) = code_listing_text(table) {
            return ContentBlock::CodeBlock { text };
        }
    }

    let rows = table
        .rows
        .iter()
        .map(|cells| TableRow::new(cells.iter().map(cell_block).collect()))
        .collect();
    ContentBlock::Table { rows }
}

/// Code listing text of a 1×1 table, or `None` when the table is tabular
/// data after all.
fn code_listing_text(table: &RawTable) -> Option<String> {
    let [row] = table.rows.as_slice() else {
        return None;
    };
    let [cell] = row.as_slice() else {
        return None;
    };

    let mut lines = Vec::new();
    let mut saw_text = false;
    for para in &cell.paragraphs {
        let mut line = String::new();
        for inline in &para.inlines {
            match inline {
                RawInline::Text(run) => {
                    if run.bold || (!run.monospace && !run.text.trim().is_empty()) {
                        return None;
                    }
                    saw_text = saw_text || !run.text.trim().is_empty();
                    line.push_str(&run.text);
                }
                RawInline::Image { .. } => return None,
            }
        }
        lines.push(line);
    }

    if !saw_text {
        return None;
    }
    Some(lines.join("\n").trim_matches('\n').to_string())
}

fn cell_block(cell: &RawCell) -> TableCell {
    let mut blocks = Vec::new();
    for para in &cell.paragraphs {
        if para.is_empty() {
            continue;
        }
        let (runs, images) = collect_inlines(&para.inlines);
        if runs.iter().any(|r| !r.text.trim().is_empty()) {
            blocks.push(ContentBlock::Paragraph { runs });
        }
        for resource_id in images {
            blocks.push(ContentBlock::ImageRef { resource_id });
        }
    }
    TableCell::with_blocks(blocks)
}
