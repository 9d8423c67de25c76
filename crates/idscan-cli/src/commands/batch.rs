//! Batch command - identity extraction over multiple OCR text files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use idscan_core::{IdentityParser, SourceFile};

use super::extract::{OutputFormat, format_report};

/// Extensions tried when pairing a text file with its document image.
const IMAGE_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "tiff", "tif", "bmp"];

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Directory holding the source document images, paired by file stem
    /// (default: each text file's own directory)
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Output directory (default: alongside each input)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub fn run(args: BatchArgs) -> anyhow::Result<()> {
    let start = Instant::now();

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str()).unwrap_or("");
            matches!(ext.to_lowercase().as_str(), "txt" | "md")
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("i").blue(),
        files.len()
    );

    if let Some(dir) = &args.output_dir {
        fs::create_dir_all(dir)?;
    }

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let parser = IdentityParser::new();
    let mut failures = 0usize;

    for path in &files {
        pb.set_message(path.display().to_string());

        if let Err(e) = process_file(&parser, path, &args) {
            failures += 1;
            if args.continue_on_error {
                warn!("{}: {e}", path.display());
            } else {
                pb.finish_and_clear();
                return Err(e);
            }
        }

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    println!(
        "{} Processed {} files ({} failed) in {:.1}s",
        style("✓").green(),
        files.len() - failures,
        failures,
        start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn process_file(parser: &IdentityParser, path: &Path, args: &BatchArgs) -> anyhow::Result<()> {
    let text = fs::read_to_string(path)?;

    let source = match find_source_image(path, args.source_dir.as_deref()) {
        Some(image) => Some(SourceFile::from_path(&image)?),
        None => None,
    };

    let report = parser.parse(&text, source.as_ref())?;
    let output = format_report(&report, args.format)?;

    let extension = match args.format {
        OutputFormat::Json => "json",
        OutputFormat::Text => "out",
    };

    let out_path = match &args.output_dir {
        Some(dir) => dir
            .join(path.file_name().unwrap_or_default())
            .with_extension(extension),
        None => path.with_extension(extension),
    };

    fs::write(&out_path, output)?;

    Ok(())
}

/// Locate the document image a text file was OCR'd from, by matching stem.
fn find_source_image(text_path: &Path, source_dir: Option<&Path>) -> Option<PathBuf> {
    let dir = source_dir.unwrap_or(text_path.parent()?);
    let stem = text_path.file_stem()?;

    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(stem).with_extension(ext))
        .find(|candidate| candidate.exists())
}
