//! Extract command - identity fields from a single OCR text file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use idscan_core::identity::ExtractionReport;
use idscan_core::{ExtractionError, IdentityParser, SourceFile};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// OCR text file to process
    #[arg(required = true)]
    input: PathBuf,

    /// Document image the text was read from (provides the record metadata)
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ExtractArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let text = fs::read_to_string(&args.input)?;
    let source = match &args.source {
        Some(path) => Some(SourceFile::from_path(path)?),
        None => None,
    };

    let parser = IdentityParser::new();
    let report = match parser.parse(&text, source.as_ref()) {
        Ok(report) => report,
        Err(ExtractionError::MissingSourceFile) => {
            anyhow::bail!("no source file selected - pass the document image with --source")
        }
    };

    for warning in &report.warnings {
        eprintln!("  {} {}", style("!").yellow(), warning);
    }

    let output = format_report(&report, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{output}");
    }

    Ok(())
}

pub(super) fn format_report(
    report: &ExtractionReport,
    format: OutputFormat,
) -> anyhow::Result<String> {
    let output = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&report.identity)?,
        OutputFormat::Text => {
            let identity = &report.identity;
            let mut lines = vec![
                format!("Full name:     {}", identity.full_name),
                format!("Date of birth: {}", identity.date_of_birth),
                format!("Gender:        {}", identity.gender),
                format!("ID number:     {}", identity.id_number),
                format!("File type:     {}", identity.metadata.file_type),
                format!("File size:     {}", identity.metadata.file_size),
            ];
            if let Some(created) = &identity.metadata.created {
                lines.push(format!("Created:       {created}"));
            }
            lines.push(format!("Processed in {} ms", report.processing_time_ms));
            lines.join("\n")
        }
    };

    Ok(output)
}
