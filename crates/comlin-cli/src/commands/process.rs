//! Process command - classify a single receipt file and extract its fields.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info, warn};

use comlin_core::formats::FormatRegistry;
use comlin_core::models::Record;
use comlin_core::models::config::ComlinConfig;
use comlin_core::pdf::{DocumentReader, PdfReader};
use comlin_core::pipeline::{Pipeline, raw_text};

use crate::template::expand_output_path;

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout). Supports the {desktop}, {tmpdir} and
    /// {tmpfile} placeholders.
    #[arg(short, long)]
    output: Option<String>,

    /// Output format (default: from config, falling back to json)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Print the concatenated raw text instead of classifying
    #[arg(long)]
    raw: bool,

    /// Scan at most N pages (0 = all; overrides the config value)
    #[arg(long, value_name = "N")]
    pages: Option<usize>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON object in field order
    Json,
    /// Two-row CSV (field names, then values)
    Csv,
    /// Plain "name: value" lines
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    // Load configuration
    let config = if let Some(path) = config_path {
        ComlinConfig::from_file(Path::new(path))?
    } else {
        ComlinConfig::default()
    };

    // Check input file exists
    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if extension != "pdf" {
        anyhow::bail!("Unsupported file format: {}", extension);
    }

    info!("Processing file: {}", args.input.display());

    // Create progress bar
    let pb = ProgressBar::new(100);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {msg}")
            .unwrap()
            .progress_chars("##-"),
    );

    let mut pages = read_pages(&args.input, &pb)?;

    let total_text: usize = pages.iter().map(|p| p.len()).sum();
    if total_text < config.pdf.min_text_length {
        warn!(
            "Extracted only {} characters of text; the PDF may have no text layer",
            total_text
        );
    }

    let max_pages = args.pages.unwrap_or(config.pdf.max_pages);
    if max_pages > 0 && pages.len() > max_pages {
        debug!(
            "Limiting scan to the first {} of {} pages",
            max_pages,
            pages.len()
        );
        pages.truncate(max_pages);
    }

    let target = args
        .output
        .as_deref()
        .or(config.output.path.as_deref())
        .map(str::to_string);

    if args.raw {
        pb.finish_with_message("Done");
        return write_output(raw_text(&pages), target.as_deref());
    }

    pb.set_message("Classifying document...");
    pb.set_position(70);

    let registry = Arc::new(FormatRegistry::discover()?);
    let pipeline = Pipeline::new(registry);
    let extraction = pipeline.classify_and_extract(&pages);

    pb.finish_with_message("Done");

    let format = resolve_format(args.format, &config);
    let output = match &extraction {
        Some(extraction) => format_record(&extraction.record, format)?,
        None => {
            // Not an error: the document simply uses no known layout.
            eprintln!(
                "{} No known format matched this document",
                style("ℹ").blue()
            );
            no_match_output(format)
        }
    };

    write_output(output, target.as_deref())?;

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn read_pages(input: &Path, pb: &ProgressBar) -> anyhow::Result<Vec<String>> {
    pb.set_message("Loading PDF...");
    pb.set_position(10);

    let data = fs::read(input)?;
    let mut reader = PdfReader::new();
    reader.load(&data)?;

    debug!("PDF has {} pages", reader.page_count());

    pb.set_message("Extracting text...");
    pb.set_position(40);

    match reader.page_texts() {
        Ok(pages) => Ok(pages),
        Err(e) => {
            warn!(
                "Per-page text extraction failed ({}), falling back to whole-document text",
                e
            );
            Ok(vec![reader.text()?])
        }
    }
}

fn write_output(content: String, target: Option<&str>) -> anyhow::Result<()> {
    match target {
        Some(template) => {
            let path = expand_output_path(template)?;
            fs::write(&path, &content)?;
            println!(
                "{} Output written to {}",
                style("✓").green(),
                path.display()
            );
        }
        None => println!("{}", content),
    }

    Ok(())
}

/// Pick the output format: explicit flag first, then the config default.
pub(crate) fn resolve_format(flag: Option<OutputFormat>, config: &ComlinConfig) -> OutputFormat {
    match flag {
        Some(format) => format,
        None => match config.output.format.as_str() {
            "csv" => OutputFormat::Csv,
            "text" => OutputFormat::Text,
            _ => OutputFormat::Json,
        },
    }
}

pub(crate) fn format_record(record: &Record, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record)),
    }
}

fn format_csv(record: &Record) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(record.field_names())?;
    wtr.write_record(record.iter().map(|(_, value)| value.to_string()))?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &Record) -> String {
    let mut output = String::new();
    for (name, value) in record.iter() {
        output.push_str(&format!("{}: {}\n", name, value));
    }
    output
}

fn no_match_output(format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => "null".to_string(),
        OutputFormat::Csv | OutputFormat::Text => String::new(),
    }
}
