//! Concrete document source backed by `zip` + `roxmltree`.
//!
//! A `.docx` package is a ZIP archive of XML parts. The parts this source
//! reads:
//!
//! - `word/document.xml` — the ordered body (paragraphs, tables, drawings)
//! - `word/styles.xml` — style id to style name mapping (heading detection)
//! - `word/numbering.xml` — list numbering definitions (ordered vs. bullet)
//! - `word/_rels/document.xml.rels` — relationship ids to media targets
//! - `docProps/core.xml` — package metadata
//!
//! All parsing happens when the source is opened; the [`DocumentSource`]
//! accessors are plain reads afterwards.

use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use roxmltree::Node;

use crate::detect;
use crate::error::{Error, Result};
use crate::model::Metadata;
use crate::parser::options::ParseOptions;
use crate::parser::source::{
    BodyElement, DocumentSource, MediaItem, ParagraphKind, RawCell, RawInline, RawParagraph,
    RawRun, RawTable,
};

const DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";
const NUMBERING_PART: &str = "word/numbering.xml";
const RELS_PART: &str = "word/_rels/document.xml.rels";
const CORE_PART: &str = "docProps/core.xml";

/// Concrete [`DocumentSource`] backed by a DOCX package.
pub struct DocxSource {
    body: Vec<BodyElement>,
    media: HashMap<String, MediaItem>,
    metadata: Metadata,
}

impl DocxSource {
    /// Open a DOCX file from disk.
    pub fn open<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data, options)
    }

    /// Open a DOCX package from an in-memory byte slice.
    pub fn from_bytes(data: &[u8], options: &ParseOptions) -> Result<Self> {
        detect::detect_format_from_bytes(data)?;

        let mut archive = zip::ZipArchive::new(Cursor::new(data))?;

        let document_xml = read_entry_string(&mut archive, DOCUMENT_PART)?
            .ok_or_else(|| Error::DocxParse(format!("missing {}", DOCUMENT_PART)))?;
        let styles_xml = read_entry_string(&mut archive, STYLES_PART)?;
        let numbering_xml = read_entry_string(&mut archive, NUMBERING_PART)?;
        let rels_xml = read_entry_string(&mut archive, RELS_PART)?;
        let core_xml = read_entry_string(&mut archive, CORE_PART)?;

        let styles = match styles_xml {
            Some(ref xml) => parse_styles(xml)?,
            None => HashMap::new(),
        };
        let numbering = match numbering_xml {
            Some(ref xml) => parse_numbering(xml)?,
            None => NumberingMap::default(),
        };
        let rels = match rels_xml {
            Some(ref xml) => parse_rels(xml)?,
            None => HashMap::new(),
        };

        let body = parse_body(&document_xml, &styles, &numbering, options)?;

        let mut media = HashMap::new();
        for (rid, target) in rels {
            let entry = media_entry_path(&target);
            match read_entry(&mut archive, &entry)? {
                Some(data) => {
                    let name = target
                        .rsplit('/')
                        .next()
                        .unwrap_or(target.as_str())
                        .to_string();
                    media.insert(rid, MediaItem { name, data });
                }
                None => {
                    log::warn!("media target {} not found in package, skipping", entry);
                }
            }
        }

        let metadata = if options.read_metadata {
            match core_xml {
                Some(ref xml) => parse_core_properties(xml)?,
                None => Metadata::default(),
            }
        } else {
            Metadata::default()
        };

        Ok(Self {
            body,
            media,
            metadata,
        })
    }
}

impl DocumentSource for DocxSource {
    fn body(&self) -> &[BodyElement] {
        &self.body
    }

    fn media(&self, resource_id: &str) -> Option<&MediaItem> {
        self.media.get(resource_id)
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }
}

// ---------------------------------------------------------------------------
// ZIP helpers
// ---------------------------------------------------------------------------

fn read_entry(
    archive: &mut zip::ZipArchive<Cursor<&[u8]>>,
    name: &str,
) -> Result<Option<Vec<u8>>> {
    match archive.by_name(name) {
        Ok(mut file) => {
            let mut buf = Vec::new();
            file.read_to_end(&mut buf)?;
            Ok(Some(buf))
        }
        Err(zip::result::ZipError::FileNotFound) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn read_entry_string(
    archive: &mut zip::ZipArchive<Cursor<&[u8]>>,
    name: &str,
) -> Result<Option<String>> {
    Ok(read_entry(archive, name)?.map(|buf| String::from_utf8_lossy(&buf).into_owned()))
}

/// Resolve a relationship target (relative to `word/`) to a package path.
fn media_entry_path(target: &str) -> String {
    let trimmed = target.trim_start_matches('/');
    if trimmed.starts_with("word/") {
        trimmed.to_string()
    } else {
        format!("word/{}", trimmed)
    }
}

// ---------------------------------------------------------------------------
// XML helpers (local-name matching; WordprocessingML is namespace-heavy but
// part structure is unambiguous on local names)
// ---------------------------------------------------------------------------

fn attr(node: Node, name: &str) -> Option<String> {
    node.attributes()
        .find(|a| a.name() == name)
        .map(|a| a.value().to_string())
}

fn child<'a, 'i>(node: Node<'a, 'i>, name: &str) -> Option<Node<'a, 'i>> {
    node.children()
        .find(|c| c.is_element() && c.tag_name().name() == name)
}

fn element_children<'a, 'i>(node: Node<'a, 'i>) -> impl Iterator<Item = Node<'a, 'i>> {
    node.children().filter(|c| c.is_element())
}

/// Whether a toggle property (`w:b`, etc.) is on. Absence of the `val`
/// attribute means on.
fn toggle_on(node: Node) -> bool {
    match attr(node, "val") {
        Some(v) => v != "false" && v != "0" && v != "none",
        None => true,
    }
}

// ---------------------------------------------------------------------------
// styles.xml
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StyleRole {
    Title,
    Heading(u8),
    List,
    Other,
}

fn parse_styles(xml: &str) -> Result<HashMap<String, StyleRole>> {
    let doc = roxmltree::Document::parse(xml)?;
    let mut styles = HashMap::new();

    for style in doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "style")
    {
        let Some(style_id) = attr(style, "styleId") else {
            continue;
        };
        let name = child(style, "name")
            .and_then(|n| attr(n, "val"))
            .unwrap_or_default();
        styles.insert(style_id, style_role(&name));
    }

    Ok(styles)
}

fn style_role(name: &str) -> StyleRole {
    let lower = name.to_lowercase();
    if lower == "title" {
        return StyleRole::Title;
    }
    if let Some(rest) = lower.strip_prefix("heading ") {
        if let Ok(level) = rest.trim().parse::<u8>() {
            return StyleRole::Heading(level);
        }
    }
    if lower.starts_with("list") {
        return StyleRole::List;
    }
    StyleRole::Other
}

/// Fallback role derived from the style id itself, for packages without a
/// styles part.
fn style_role_from_id(style_id: &str) -> StyleRole {
    if style_id == "Title" {
        return StyleRole::Title;
    }
    if let Some(rest) = style_id.strip_prefix("Heading") {
        if let Ok(level) = rest.parse::<u8>() {
            return StyleRole::Heading(level);
        }
    }
    if style_id.starts_with("List") {
        return StyleRole::List;
    }
    StyleRole::Other
}

// ---------------------------------------------------------------------------
// numbering.xml
// ---------------------------------------------------------------------------

/// Resolved numbering: (numId, level) → ordered flag.
#[derive(Debug, Default)]
struct NumberingMap {
    levels: HashMap<(String, u8), bool>,
}

impl NumberingMap {
    /// Ordered flag for a numbering instance and level. Unknown ids default
    /// to bulleted.
    fn is_ordered(&self, num_id: &str, level: u8) -> bool {
        self.levels
            .get(&(num_id.to_string(), level))
            .copied()
            .unwrap_or(false)
    }
}

fn parse_numbering(xml: &str) -> Result<NumberingMap> {
    let doc = roxmltree::Document::parse(xml)?;

    // abstractNumId → (level → ordered)
    let mut abstract_levels: HashMap<String, HashMap<u8, bool>> = HashMap::new();
    for abstract_num in doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "abstractNum")
    {
        let Some(abstract_id) = attr(abstract_num, "abstractNumId") else {
            continue;
        };
        let mut levels = HashMap::new();
        for lvl in element_children(abstract_num).filter(|n| n.tag_name().name() == "lvl") {
            let depth = attr(lvl, "ilvl")
                .and_then(|v| v.parse::<u8>().ok())
                .unwrap_or(0);
            let fmt = child(lvl, "numFmt")
                .and_then(|n| attr(n, "val"))
                .unwrap_or_default();
            levels.insert(depth, fmt != "bullet" && fmt != "none");
        }
        abstract_levels.insert(abstract_id, levels);
    }

    let mut map = NumberingMap::default();
    for num in doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "num")
    {
        let Some(num_id) = attr(num, "numId") else {
            continue;
        };
        let Some(abstract_id) = child(num, "abstractNumId").and_then(|n| attr(n, "val")) else {
            continue;
        };
        if let Some(levels) = abstract_levels.get(&abstract_id) {
            for (&depth, &ordered) in levels {
                map.levels.insert((num_id.clone(), depth), ordered);
            }
        }
    }

    Ok(map)
}

// ---------------------------------------------------------------------------
// document.xml.rels
// ---------------------------------------------------------------------------

fn parse_rels(xml: &str) -> Result<HashMap<String, String>> {
    let doc = roxmltree::Document::parse(xml)?;
    let mut rels = HashMap::new();

    for rel in doc
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "Relationship")
    {
        let (Some(id), Some(kind), Some(target)) =
            (attr(rel, "Id"), attr(rel, "Type"), attr(rel, "Target"))
        else {
            continue;
        };
        if kind.ends_with("/image") {
            rels.insert(id, target);
        }
    }

    Ok(rels)
}

// ---------------------------------------------------------------------------
// docProps/core.xml
// ---------------------------------------------------------------------------

fn parse_core_properties(xml: &str) -> Result<Metadata> {
    let doc = roxmltree::Document::parse(xml)?;
    let mut metadata = Metadata::default();

    for node in doc.descendants().filter(|n| n.is_element()) {
        let text = node.text().map(str::trim).filter(|t| !t.is_empty());
        match node.tag_name().name() {
            "title" => metadata.title = text.map(String::from),
            "creator" => metadata.author = text.map(String::from),
            "subject" => metadata.subject = text.map(String::from),
            "keywords" => metadata.keywords = text.map(String::from),
            "lastModifiedBy" => metadata.last_modified_by = text.map(String::from),
            "created" => metadata.created = text.and_then(parse_w3cdtf),
            "modified" => metadata.modified = text.and_then(parse_w3cdtf),
            _ => {}
        }
    }

    Ok(metadata)
}

fn parse_w3cdtf(text: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

// ---------------------------------------------------------------------------
// document.xml body
// ---------------------------------------------------------------------------

fn parse_body(
    xml: &str,
    styles: &HashMap<String, StyleRole>,
    numbering: &NumberingMap,
    options: &ParseOptions,
) -> Result<Vec<BodyElement>> {
    let doc = roxmltree::Document::parse(xml)?;
    let body = doc
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name() == "body")
        .ok_or_else(|| Error::DocxParse("document has no body element".to_string()))?;

    let mut elements = Vec::new();
    for node in element_children(body) {
        match node.tag_name().name() {
            "p" => elements.push(BodyElement::Paragraph(parse_paragraph(
                node, styles, numbering, options,
            ))),
            "tbl" => elements.push(BodyElement::Table(parse_table(
                node, styles, numbering, options,
            ))),
            // sectPr and friends carry no body content
            _ => {}
        }
    }

    Ok(elements)
}

fn parse_paragraph(
    node: Node,
    styles: &HashMap<String, StyleRole>,
    numbering: &NumberingMap,
    options: &ParseOptions,
) -> RawParagraph {
    let ppr = child(node, "pPr");
    let style_id = ppr.and_then(|p| child(p, "pStyle")).and_then(|s| attr(s, "val"));
    let role = style_id
        .as_deref()
        .map(|id| match styles.get(id) {
            Some(role) => *role,
            None => style_role_from_id(id),
        })
        .unwrap_or(StyleRole::Other);

    let num_pr = ppr.and_then(|p| child(p, "numPr"));
    let num_id = num_pr
        .and_then(|n| child(n, "numId"))
        .and_then(|n| attr(n, "val"))
        // numId 0 means numbering was removed from the paragraph
        .filter(|v| v != "0");

    let kind = match role {
        StyleRole::Title => ParagraphKind::Title,
        StyleRole::Heading(level) => ParagraphKind::Heading(level),
        _ => match num_id {
            Some(ref id) => {
                let depth = num_pr
                    .and_then(|n| child(n, "ilvl"))
                    .and_then(|n| attr(n, "val"))
                    .and_then(|v| v.parse::<u8>().ok())
                    .unwrap_or(0);
                ParagraphKind::List {
                    ordered: numbering.is_ordered(id, depth),
                    depth,
                }
            }
            None if role == StyleRole::List => ParagraphKind::List {
                ordered: false,
                depth: 0,
            },
            None => ParagraphKind::Body,
        },
    };

    let mut inlines = Vec::new();
    for run in node.descendants().filter(|n| is_content_run(*n)) {
        parse_run(run, options, &mut inlines);
    }

    RawParagraph::with_kind(kind, inlines)
}

/// A `w:r` that should contribute content. Runs inside an AlternateContent
/// fallback duplicate the choice branch and are skipped.
fn is_content_run(node: Node) -> bool {
    if !node.is_element() || node.tag_name().name() != "r" {
        return false;
    }
    !node
        .ancestors()
        .any(|a| a.is_element() && a.tag_name().name() == "Fallback")
}

fn parse_run(node: Node, options: &ParseOptions, inlines: &mut Vec<RawInline>) {
    let rpr = child(node, "rPr");
    let bold = rpr.and_then(|p| child(p, "b")).map(toggle_on).unwrap_or(false);
    let monospace = rpr
        .and_then(|p| child(p, "rFonts"))
        .map(|fonts| {
            ["ascii", "hAnsi", "cs"]
                .into_iter()
                .filter_map(|a| attr(fonts, a))
                .any(|name| options.is_monospace_font(&name))
        })
        .unwrap_or(false);

    let mut text = String::new();
    let mut flush = |text: &mut String, inlines: &mut Vec<RawInline>| {
        if !text.is_empty() {
            inlines.push(RawInline::Text(RawRun {
                text: std::mem::take(text),
                bold,
                monospace,
            }));
        }
    };

    for part in element_children(node) {
        match part.tag_name().name() {
            "t" => {
                if let Some(t) = part.text() {
                    text.push_str(t);
                }
            }
            "br" => text.push('\n'),
            "tab" => text.push('\t'),
            "drawing" | "pict" | "object" => {
                flush(&mut text, inlines);
                match embedded_image_id(part) {
                    Some(resource_id) => inlines.push(RawInline::Image { resource_id }),
                    None => {
                        log::warn!("embedded object without an image relationship, skipping");
                    }
                }
            }
            _ => {}
        }
    }
    flush(&mut text, inlines);
}

/// Find the relationship id of an embedded image inside a drawing or pict
/// element (`a:blip r:embed` or `v:imagedata r:id`).
fn embedded_image_id(node: Node) -> Option<String> {
    node.descendants()
        .filter(|n| n.is_element())
        .find_map(|n| match n.tag_name().name() {
            "blip" => attr(n, "embed").or_else(|| attr(n, "link")),
            "imagedata" => attr(n, "id"),
            _ => None,
        })
}

fn parse_table(
    node: Node,
    styles: &HashMap<String, StyleRole>,
    numbering: &NumberingMap,
    options: &ParseOptions,
) -> RawTable {
    let mut rows = Vec::new();
    for tr in element_children(node).filter(|n| n.tag_name().name() == "tr") {
        let mut cells = Vec::new();
        for tc in element_children(tr).filter(|n| n.tag_name().name() == "tc") {
            let mut paragraphs = Vec::new();
            for content in element_children(tc) {
                match content.tag_name().name() {
                    "p" => paragraphs.push(parse_paragraph(content, styles, numbering, options)),
                    "tbl" => {
                        log::warn!("nested table inside a cell is not supported, skipping");
                    }
                    _ => {}
                }
            }
            cells.push(RawCell { paragraphs });
        }
        if !cells.is_empty() {
            rows.push(cells);
        }
    }
    RawTable { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::SimpleFileOptions;

    const DOC_NS: &str = r#"xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main""#;

    fn build_docx(parts: &[(&str, &str)]) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        {
            let mut writer = zip::ZipWriter::new(&mut cursor);
            for (name, content) in parts {
                writer.start_file(*name, SimpleFileOptions::default()).unwrap();
                writer.write_all(content.as_bytes()).unwrap();
            }
            writer.finish().unwrap();
        }
        cursor.into_inner()
    }

    fn document_xml(body: &str) -> String {
        format!(
            "<w:document {}><w:body>{}</w:body></w:document>",
            DOC_NS, body
        )
    }

    #[test]
    fn test_paragraph_and_heading() {
        let body = "<w:p><w:pPr><w:pStyle w:val=\"Heading2\"/></w:pPr>\
                    <w:r><w:t>Setup</w:t></w:r></w:p>\
                    <w:p><w:r><w:t>Install the </w:t></w:r>\
                    <w:r><w:rPr><w:b/></w:rPr><w:t>latest</w:t></w:r>\
                    <w:r><w:t> release.</w:t></w:r></w:p>";
        let data = build_docx(&[("word/document.xml", &document_xml(body))]);
        let source = DocxSource::from_bytes(&data, &ParseOptions::default()).unwrap();

        assert_eq!(source.body().len(), 2);
        let BodyElement::Paragraph(heading) = &source.body()[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(heading.kind, ParagraphKind::Heading(2));

        let BodyElement::Paragraph(para) = &source.body()[1] else {
            panic!("expected paragraph");
        };
        assert_eq!(para.inlines.len(), 3);
        assert_eq!(
            para.inlines[1],
            RawInline::Text(RawRun::bold("latest"))
        );
    }

    #[test]
    fn test_soft_break_stays_in_run() {
        let body = "<w:p><w:r><w:t>first</w:t><w:br/><w:t>second</w:t></w:r></w:p>";
        let data = build_docx(&[("word/document.xml", &document_xml(body))]);
        let source = DocxSource::from_bytes(&data, &ParseOptions::default()).unwrap();

        let BodyElement::Paragraph(para) = &source.body()[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(
            para.inlines,
            vec![RawInline::Text(RawRun::text("first\nsecond"))]
        );
    }

    #[test]
    fn test_ordered_list_from_numbering() {
        let numbering = r#"<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
            <w:abstractNum w:abstractNumId="0">
                <w:lvl w:ilvl="0"><w:numFmt w:val="decimal"/></w:lvl>
                <w:lvl w:ilvl="1"><w:numFmt w:val="bullet"/></w:lvl>
            </w:abstractNum>
            <w:num w:numId="3"><w:abstractNumId w:val="0"/></w:num>
        </w:numbering>"#;
        let body = "<w:p><w:pPr><w:numPr><w:ilvl w:val=\"0\"/><w:numId w:val=\"3\"/></w:numPr></w:pPr>\
                    <w:r><w:t>step one</w:t></w:r></w:p>\
                    <w:p><w:pPr><w:numPr><w:ilvl w:val=\"1\"/><w:numId w:val=\"3\"/></w:numPr></w:pPr>\
                    <w:r><w:t>detail</w:t></w:r></w:p>";
        let data = build_docx(&[
            ("word/document.xml", &document_xml(body)),
            ("word/numbering.xml", numbering),
        ]);
        let source = DocxSource::from_bytes(&data, &ParseOptions::default()).unwrap();

        let kinds: Vec<ParagraphKind> = source
            .body()
            .iter()
            .map(|e| match e {
                BodyElement::Paragraph(p) => p.kind,
                _ => panic!("expected paragraphs"),
            })
            .collect();
        assert_eq!(
            kinds,
            vec![
                ParagraphKind::List {
                    ordered: true,
                    depth: 0
                },
                ParagraphKind::List {
                    ordered: false,
                    depth: 1
                },
            ]
        );
    }

    #[test]
    fn test_embedded_image_and_media() {
        let rels = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
            <Relationship Id="rId4" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="media/image1.png"/>
        </Relationships>"#;
        let body = "<w:p><w:r><w:drawing><a:blip r:embed=\"rId4\"/></w:drawing></w:r></w:p>";
        let data = build_docx(&[
            ("word/document.xml", &document_xml(body)),
            ("word/_rels/document.xml.rels", rels),
            ("word/media/image1.png", "\u{89}PNGfake"),
        ]);
        let source = DocxSource::from_bytes(&data, &ParseOptions::default()).unwrap();

        let BodyElement::Paragraph(para) = &source.body()[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(
            para.inlines,
            vec![RawInline::Image {
                resource_id: "rId4".to_string()
            }]
        );
        let media = source.media("rId4").expect("media resolved");
        assert_eq!(media.name, "image1.png");
        assert!(!media.data.is_empty());
    }

    #[test]
    fn test_table_cells() {
        let body = "<w:tbl><w:tr>\
                    <w:tc><w:p><w:r><w:t>Name</w:t></w:r></w:p></w:tc>\
                    <w:tc><w:p><w:r><w:t>Age</w:t></w:r></w:p></w:tc>\
                    </w:tr></w:tbl>";
        let data = build_docx(&[("word/document.xml", &document_xml(body))]);
        let source = DocxSource::from_bytes(&data, &ParseOptions::default()).unwrap();

        let BodyElement::Table(table) = &source.body()[0] else {
            panic!("expected table");
        };
        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.rows[0].len(), 2);
    }

    #[test]
    fn test_core_metadata() {
        let core = r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
            <dc:title>Field Notes</dc:title>
            <dc:creator>A. Wright</dc:creator>
            <dcterms:created xsi:type="dcterms:W3CDTF">2024-03-01T09:30:00Z</dcterms:created>
        </cp:coreProperties>"#;
        let data = build_docx(&[
            ("word/document.xml", &document_xml("<w:p/>")),
            ("docProps/core.xml", core),
        ]);
        let source = DocxSource::from_bytes(&data, &ParseOptions::default()).unwrap();

        assert_eq!(source.metadata().title.as_deref(), Some("Field Notes"));
        assert_eq!(source.metadata().author.as_deref(), Some("A. Wright"));
        assert!(source.metadata().created.is_some());
    }

    #[test]
    fn test_not_a_docx() {
        let err = DocxSource::from_bytes(b"plain text", &ParseOptions::default());
        assert!(matches!(err, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_monospace_run_flag() {
        let body = "<w:p><w:r><w:rPr><w:rFonts w:ascii=\"Consolas\"/></w:rPr>\
                    <w:t>x = 1</w:t></w:r></w:p>";
        let data = build_docx(&[("word/document.xml", &document_xml(body))]);
        let source = DocxSource::from_bytes(&data, &ParseOptions::default()).unwrap();

        let BodyElement::Paragraph(para) = &source.body()[0] else {
            panic!("expected paragraph");
        };
        let RawInline::Text(run) = &para.inlines[0] else {
            panic!("expected text run");
        };
        assert!(run.monospace);
    }
}
