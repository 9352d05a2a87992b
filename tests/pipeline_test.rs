//! End-to-end pipeline tests: DOCX bytes in, markdown and images out.

use std::io::{Cursor, Write};
use std::path::Path;

use zip::write::SimpleFileOptions;

use undocx::convert::{convert_dir, ConvertOptions, ConverterRegistry};
use undocx::error::{Error, Result};
use undocx::ocr::{OcrEngine, PageSegMode};
use undocx::render::RenderOptions;
use undocx::{DocumentConverter, DocxConverter};

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

fn build_docx(parts: &[(&str, String)]) -> Vec<u8> {
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = zip::ZipWriter::new(&mut cursor);
        for (name, content) in parts {
            writer
                .start_file(*name, SimpleFileOptions::default())
                .unwrap();
            writer.write_all(content.as_bytes()).unwrap();
        }
        writer.finish().unwrap();
    }
    cursor.into_inner()
}

fn chapter_docx() -> Vec<u8> {
    let document = format!(
        r#"<w:document xmlns:w="{W_NS}" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main"><w:body>
        <w:p><w:pPr><w:pStyle w:val="Heading1"/></w:pPr><w:r><w:t>Getting Started</w:t></w:r></w:p>
        <w:p><w:r><w:t>See the screenshot below.</w:t></w:r></w:p>
        <w:p><w:r><w:drawing><a:blip r:embed="rId4"/></w:drawing></w:r></w:p>
        <w:p><w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr></w:pPr><w:r><w:t>install it</w:t></w:r></w:p>
        <w:p><w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr></w:pPr><w:r><w:t>run it</w:t></w:r></w:p>
        <w:p><w:r><w:t>That is all.</w:t></w:r></w:p>
        <w:p><w:pPr><w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr></w:pPr><w:r><w:t>a new list</w:t></w:r></w:p>
        <w:tbl><w:tr><w:tc><w:p><w:r><w:rPr><w:rFonts w:ascii="Consolas"/></w:rPr><w:t>print("hi")</w:t></w:r></w:p></w:tc></w:tr></w:tbl>
        <w:tbl><w:tr>
            <w:tc><w:p><w:r><w:t>Key</w:t></w:r></w:p></w:tc>
            <w:tc><w:p><w:r><w:t>Value</w:t></w:r></w:p></w:tc>
        </w:tr><w:tr>
            <w:tc><w:p><w:r><w:t>a</w:t></w:r></w:p></w:tc>
        </w:tr></w:tbl>
        </w:body></w:document>"#
    );
    let numbering = format!(
        r#"<w:numbering xmlns:w="{W_NS}">
        <w:abstractNum w:abstractNumId="0"><w:lvl w:ilvl="0"><w:numFmt w:val="decimal"/></w:lvl></w:abstractNum>
        <w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num>
        </w:numbering>"#
    );
    let rels = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
        <Relationship Id="rId4" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/image" Target="media/image1.png"/>
        </Relationships>"#
        .to_string();

    build_docx(&[
        ("word/document.xml", document),
        ("word/numbering.xml", numbering),
        ("word/_rels/document.xml.rels", rels),
        ("word/media/image1.png", "fake png bytes".to_string()),
    ])
}

fn pos(haystack: &str, needle: &str) -> usize {
    haystack
        .find(needle)
        .unwrap_or_else(|| panic!("{:?} not found in output:\n{}", needle, haystack))
}

#[test]
fn test_end_to_end_ordering_and_images() {
    let images = tempfile::tempdir().unwrap();
    let converter = DocxConverter::new();
    let options = ConvertOptions::new().with_image_dir(images.path());

    let result = converter
        .convert_bytes(&chapter_docx(), "ch01", &options)
        .unwrap();

    // dense image numbering, original extension
    assert_eq!(result.images.len(), 1);
    assert_eq!(result.images[0].file_name, "ch01_1.png");
    assert!(images.path().join("ch01_1.png").exists());

    let md = &result.content;
    let heading = pos(md, "# Getting Started");
    let before = pos(md, "See the screenshot below.");
    let image = pos(md, "![ch01_1.png](images/ch01_1.png)");
    let item_one = pos(md, "1. install it");
    let item_two = pos(md, "2. run it");
    let interruption = pos(md, "That is all.");
    let restarted = pos(md, "1. a new list");
    let code = pos(md, "```\nprint(\"hi\")\n```");
    let table = pos(md, "| Key | Value |");

    assert!(heading < before);
    assert!(before < image);
    assert!(image < item_one);
    assert!(item_one < item_two);
    assert!(item_two < interruption);
    assert!(interruption < restarted);
    assert!(restarted < code);
    assert!(code < table);

    // ragged second row padded to the header width
    assert!(md.contains("| a |  |"));
}

#[test]
fn test_conversion_is_deterministic() {
    let images_a = tempfile::tempdir().unwrap();
    let images_b = tempfile::tempdir().unwrap();
    let converter = DocxConverter::new();

    let a = converter
        .convert_bytes(
            &chapter_docx(),
            "ch01",
            &ConvertOptions::new().with_image_dir(images_a.path()),
        )
        .unwrap();
    let b = converter
        .convert_bytes(
            &chapter_docx(),
            "ch01",
            &ConvertOptions::new().with_image_dir(images_b.path()),
        )
        .unwrap();

    assert_eq!(a.content, b.content);
    assert_eq!(a.images, b.images);
}

/// Engine returning one canned result for psm 6 and failing otherwise.
struct CannedEngine {
    text: Option<&'static str>,
}

impl OcrEngine for CannedEngine {
    fn recognize(&self, _image: &Path, mode: PageSegMode) -> Result<String> {
        match (self.text, mode) {
            (Some(text), PageSegMode::UniformBlock) => Ok(text.to_string()),
            _ => Err(Error::OcrEngine("canned failure".to_string())),
        }
    }
}

#[test]
fn test_batch_with_ocr_appends_after_image() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    std::fs::write(input.path().join("ch01.docx"), chapter_docx()).unwrap();

    let engine = CannedEngine {
        text: Some("def main():\n    return x == 1"),
    };
    let registry = ConverterRegistry::with_defaults();
    let options = ConvertOptions::new()
        .with_image_dir(output.path().join("images"))
        .with_render_options(RenderOptions::new().with_image_path_prefix("images"));

    let outcomes = convert_dir(
        &registry,
        input.path(),
        output.path(),
        &options,
        Some(&engine),
    )
    .unwrap();

    assert_eq!(outcomes.len(), 1);
    assert!(outcomes[0].is_success());
    assert_eq!(outcomes[0].image_count, 1);

    let md = std::fs::read_to_string(output.path().join("ch01.md")).unwrap();
    let image = pos(&md, "![ch01_1.png](images/ch01_1.png)");
    let header = pos(&md, "[Extracted Text from ch01_1.png]");
    let method = pos(&md, "OCR Method: --psm 6");
    let fence = pos(&md, "```\ndef main():\n    return x == 1\n```");
    let separator = pos(&md, &"-".repeat(50));

    assert!(image < header);
    assert!(header < method);
    assert!(method < fence);
    assert!(fence < separator);

    // the list that follows the image is still intact
    assert!(md.contains("1. install it"));
}

#[test]
fn test_batch_with_failing_ocr_leaves_markdown_unchanged() {
    let input = tempfile::tempdir().unwrap();
    let with_ocr = tempfile::tempdir().unwrap();
    let without_ocr = tempfile::tempdir().unwrap();
    std::fs::write(input.path().join("ch01.docx"), chapter_docx()).unwrap();

    let registry = ConverterRegistry::with_defaults();
    let failing = CannedEngine { text: None };

    let options_a = ConvertOptions::new().with_image_dir(with_ocr.path().join("images"));
    let outcomes = convert_dir(
        &registry,
        input.path(),
        with_ocr.path(),
        &options_a,
        Some(&failing),
    )
    .unwrap();
    assert!(outcomes[0].is_success());

    let options_b = ConvertOptions::new().with_image_dir(without_ocr.path().join("images"));
    convert_dir(&registry, input.path(), without_ocr.path(), &options_b, None).unwrap();

    let a = std::fs::read_to_string(with_ocr.path().join("ch01.md")).unwrap();
    let b = std::fs::read_to_string(without_ocr.path().join("ch01.md")).unwrap();
    assert_eq!(a, b);
    assert!(!a.contains("[Extracted Text"));
}

#[test]
fn test_metadata_frontmatter_end_to_end() {
    let document = format!(
        r#"<w:document xmlns:w="{W_NS}"><w:body><w:p><w:r><w:t>Body.</w:t></w:r></w:p></w:body></w:document>"#
    );
    let core = r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/">
        <dc:title>My Chapter</dc:title>
        </cp:coreProperties>"#
        .to_string();
    let bytes = build_docx(&[("word/document.xml", document), ("docProps/core.xml", core)]);

    let converter = DocxConverter::new();
    let options =
        ConvertOptions::new().with_render_options(RenderOptions::new().with_frontmatter(true));
    let result = converter.convert_bytes(&bytes, "doc", &options).unwrap();

    assert!(result.content.starts_with("---\ntitle: \"My Chapter\""));
    assert!(result.content.ends_with("Body."));
    assert_eq!(result.metadata.title.as_deref(), Some("My Chapter"));
}
