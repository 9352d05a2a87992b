//! undocx CLI - DOCX to markdown conversion tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use undocx::{
    convert_dir, parse_file, render, ConvertOptions, ConverterRegistry, ImageExtractor,
    JsonFormat, OcrOptions, OutputFormat, ParseOptions, RenderOptions, TesseractCli,
};

#[derive(Parser)]
#[command(name = "undocx")]
#[command(version)]
#[command(about = "Convert DOCX documents to Markdown with image extraction and OCR", long_about = None)]
struct Cli {
    /// Input directory of .docx files
    #[arg(value_name = "DIR")]
    input: Option<PathBuf>,

    /// Output directory
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a directory of DOCX files (markdown + images, optional OCR)
    Convert {
        /// Input directory
        #[arg(value_name = "DIR")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,

        /// Run OCR over extracted images and append recovered text
        #[arg(long)]
        ocr: bool,

        /// OCR language (tesseract -l)
        #[arg(long, value_name = "LANG")]
        lang: Option<String>,

        /// Include YAML frontmatter
        #[arg(short, long)]
        frontmatter: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "markdown")]
        format: Format,
    },

    /// Convert a single DOCX file to Markdown
    #[command(alias = "md")]
    Markdown {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Include YAML frontmatter
        #[arg(short, long)]
        frontmatter: bool,

        /// Extract images into this directory
        #[arg(long, value_name = "DIR")]
        images: Option<PathBuf>,

        /// Maximum heading level (1-6)
        #[arg(long, default_value = "6")]
        max_heading: u8,
    },

    /// Convert a single DOCX file to JSON
    Json {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Extract embedded images from a DOCX file
    Extract {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Augment an existing markdown file with OCR text from its images
    Ocr {
        /// Markdown file to augment in place
        #[arg(value_name = "FILE")]
        markdown: PathBuf,

        /// Directory holding the file's extracted images
        #[arg(short, long, value_name = "DIR", default_value = "images")]
        images: PathBuf,

        /// OCR language (tesseract -l)
        #[arg(long, value_name = "LANG")]
        lang: Option<String>,
    },

    /// Show document information
    Info {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Markdown output
    Markdown,
    /// Plain text output
    Text,
    /// JSON structure
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Markdown => OutputFormat::Markdown,
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Convert {
            input,
            output,
            ocr,
            lang,
            frontmatter,
            format,
        }) => cmd_convert(&input, output.as_deref(), ocr, lang, frontmatter, format),
        Some(Commands::Markdown {
            input,
            output,
            frontmatter,
            images,
            max_heading,
        }) => cmd_markdown(
            &input,
            output.as_deref(),
            frontmatter,
            images.as_deref(),
            max_heading,
        ),
        Some(Commands::Json {
            input,
            output,
            compact,
        }) => cmd_json(&input, output.as_deref(), compact),
        Some(Commands::Extract { input, output }) => cmd_extract(&input, output.as_deref()),
        Some(Commands::Ocr {
            markdown,
            images,
            lang,
        }) => cmd_ocr(&markdown, &images, lang),
        Some(Commands::Info { input }) => cmd_info(&input),
        None => {
            if let Some(input) = cli.input {
                cmd_convert(
                    &input,
                    cli.output.as_deref(),
                    false,
                    None,
                    false,
                    Format::Markdown,
                )
            } else {
                println!("{}", "Usage: undocx <DIR> [OUTPUT]".yellow());
                println!("       undocx --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_convert(
    input: &Path,
    output: Option<&Path>,
    ocr: bool,
    lang: Option<String>,
    frontmatter: bool,
    format: Format,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_dir = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}_output", stem))
    });

    let options = ConvertOptions::new()
        .with_format(format.into())
        .with_image_dir(output_dir.join("images"))
        .with_render_options(
            RenderOptions::new()
                .with_frontmatter(frontmatter)
                .with_image_path_prefix("images"),
        );

    let engine = if ocr {
        let mut ocr_options = OcrOptions::new();
        if let Some(lang) = lang {
            ocr_options = ocr_options.with_language(lang);
        }
        Some(TesseractCli::with_options(ocr_options))
    } else {
        None
    };

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Converting {}...", input.display()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let registry = ConverterRegistry::with_defaults();
    let outcomes = convert_dir(
        &registry,
        input,
        &output_dir,
        &options,
        engine.as_ref().map(|e| e as &dyn undocx::OcrEngine),
    )?;

    pb.finish_and_clear();

    let mut failed = 0;
    for outcome in &outcomes {
        let name = outcome.input.file_name().unwrap_or_default().to_string_lossy();
        match (&outcome.output, &outcome.error) {
            (Some(out), _) => {
                println!(
                    "{} {} {} {} ({} images)",
                    "✓".green(),
                    name,
                    "→".dimmed(),
                    out.display(),
                    outcome.image_count
                );
            }
            (None, Some(error)) => {
                failed += 1;
                println!("{} {}: {}", "✗".red(), name, error);
            }
            (None, None) => {}
        }
    }

    println!(
        "\n{} {} converted, {} failed",
        "Done!".green().bold(),
        outcomes.len() - failed,
        failed
    );

    if failed > 0 {
        return Err(format!("{} of {} files failed", failed, outcomes.len()).into());
    }
    Ok(())
}

fn cmd_markdown(
    input: &Path,
    output: Option<&Path>,
    frontmatter: bool,
    images: Option<&Path>,
    max_heading: u8,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut options = ConvertOptions::new().with_render_options(
        RenderOptions::new()
            .with_frontmatter(frontmatter)
            .with_max_heading_level(max_heading),
    );
    if let Some(dir) = images {
        options = options.with_image_dir(dir);
    }

    let registry = ConverterRegistry::with_defaults();
    let result = registry.convert(input, &options)?;

    if let Some(path) = output {
        fs::write(path, result.content + "\n")?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", result.content);
    }

    Ok(())
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input, &ParseOptions::default())?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = render::to_json(&doc, format)?;

    if let Some(path) = output {
        fs::write(path, json + "\n")?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    Ok(())
}

fn cmd_extract(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or("invalid input file name")?;

    let parse_options = ParseOptions::default();
    let source = undocx::DocxSource::open(input, &parse_options)?;
    let blocks = undocx::parser::extract_blocks(&source, &parse_options);

    let output_dir = output
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    let extractor = ImageExtractor::new(&output_dir);
    let records = extractor.extract(&source, &blocks, &stem)?;

    for record in &records {
        println!("{} {}", "Extracted".green(), record.file_name);
    }
    println!(
        "\n{} {} images extracted",
        "Done!".green().bold(),
        records.len()
    );

    Ok(())
}

fn cmd_ocr(
    markdown: &Path,
    images: &Path,
    lang: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let stem = markdown
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .ok_or("invalid markdown file name")?;

    let records = undocx::find_extracted_images(images, &stem)?;
    if records.is_empty() {
        println!(
            "{} no images matching {}_*.* in {}",
            "Note:".yellow(),
            stem,
            images.display()
        );
        return Ok(());
    }

    let mut ocr_options = OcrOptions::new();
    if let Some(lang) = lang {
        ocr_options = ocr_options.with_language(lang);
    }
    let engine = TesseractCli::with_options(ocr_options);

    let content = fs::read_to_string(markdown)?;
    let augmented = undocx::ocr::augment_markdown(&engine, &content, &records, images);
    fs::write(markdown, augmented + "\n")?;

    println!(
        "{} {} ({} images checked)",
        "Augmented".green(),
        markdown.display(),
        records.len()
    );

    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let doc = parse_file(input, &ParseOptions::default())?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref title) = doc.metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref author) = doc.metadata.author {
        println!("{}: {}", "Author".bold(), author);
    }
    if let Some(ref subject) = doc.metadata.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    if let Some(ref created) = doc.metadata.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = doc.metadata.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    let text = doc.plain_text();
    let words: usize = text.split_whitespace().count();
    let images = doc
        .blocks
        .iter()
        .filter(|b| matches!(b, undocx::ContentBlock::ImageRef { .. }))
        .count();

    println!("{}: {}", "Blocks".bold(), doc.block_count());
    println!("{}: {}", "Words".bold(), words);
    println!("{}: {}", "Characters".bold(), text.len());
    println!("{}: {}", "Images".bold(), images);

    Ok(())
}
