use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use pdfscreen_core::config_file::{self, ConfigFile};
use pdfscreen_core::{ScanOutcome, collect_custom_terms, load_terms_file, scan_extraction};
use pdfscreen_reporting::ExportFormat;
use tracing_subscriber::EnvFilter;

mod output;

use output::ColorMode;

/// Completed scan, with or without matches.
const EXIT_OK: u8 = 0;
/// Extraction failure, unreadable terms file, or other I/O error.
const EXIT_FAILURE: u8 = 1;
/// Missing file, not a regular file, not a PDF, or no usable text layer.
const EXIT_UNUSABLE_INPUT: u8 = 2;

/// PDF redaction pre-screen - check for a text layer and count potentially sensitive terms
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan a single PDF for a text layer and sensitive-term counts
    Scan {
        /// Path to the PDF file to scan
        file_path: PathBuf,

        /// Extra term to count (repeatable, matched literally and case-insensitively)
        #[arg(long = "add-term", value_name = "TERM")]
        add_term: Vec<String>,

        /// File of extra terms, one per line (blank lines ignored)
        #[arg(long, value_name = "PATH")]
        add_terms_file: Option<PathBuf>,

        /// Report format
        #[arg(long, value_enum)]
        format: Option<Format>,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// List the built-in sensitive-term categories
    Categories {
        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Text,
    Json,
    Markdown,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = config_file::load_config();

    let result = match cli.command {
        Command::Categories { no_color } => categories(no_color, &config),
        Command::Scan {
            file_path,
            add_term,
            add_terms_file,
            format,
            output,
            no_color,
        } => {
            scan(
                file_path,
                add_term,
                add_terms_file,
                format,
                output,
                no_color,
                &config,
            )
            .await
        }
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Colour only for interactive text output that nobody has opted out of.
fn use_color(no_color_flag: bool, config: &ConfigFile) -> bool {
    !no_color_flag && !config.no_color() && std::env::var_os("NO_COLOR").is_none()
}

fn resolve_format(flag: Option<Format>, config: &ConfigFile) -> Format {
    if let Some(format) = flag {
        return format;
    }
    match config.format() {
        Some(name) => Format::from_str(name, true).unwrap_or_else(|_| {
            tracing::warn!(format = name, "unknown report format in config, using text");
            Format::Text
        }),
        None => Format::Text,
    }
}

fn categories(no_color: bool, config: &ConfigFile) -> anyhow::Result<u8> {
    let color = ColorMode(use_color(no_color, config));
    let mut stdout = std::io::stdout();
    output::print_categories(&mut stdout, color)?;
    Ok(EXIT_OK)
}

#[allow(clippy::too_many_arguments)]
async fn scan(
    file_path: PathBuf,
    add_term: Vec<String>,
    add_terms_file: Option<PathBuf>,
    format: Option<Format>,
    output: Option<PathBuf>,
    no_color: bool,
    config: &ConfigFile,
) -> anyhow::Result<u8> {
    let full_path = match pdfscreen_ingest::resolve_input(&file_path) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("scan: {e}");
            return Ok(EXIT_UNUSABLE_INPUT);
        }
    };

    // Resolve configuration: CLI flags > env vars > config file.
    // An empty env var counts as unset.
    let terms_file = add_terms_file
        .or_else(|| {
            std::env::var("PDFSCREEN_TERMS_FILE")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| config.terms_file());

    let file_terms = match terms_file {
        Some(ref path) => load_terms_file(path).await?,
        None => Vec::new(),
    };
    let custom_terms = collect_custom_terms(&add_term, file_terms);

    let extraction = {
        let path = full_path.clone();
        tokio::task::spawn_blocking(move || pdfscreen_ingest::extract_text_layer(&path)).await??
    };

    let outcome = scan_extraction(extraction, &custom_terms);

    let format = resolve_format(format, config);
    let color = ColorMode(format == Format::Text && output.is_none() && use_color(no_color, config));
    write_report(&outcome, format, output.as_ref(), color)?;

    Ok(exit_code(&outcome))
}

fn write_report(
    outcome: &ScanOutcome,
    format: Format,
    output: Option<&PathBuf>,
    color: ColorMode,
) -> anyhow::Result<()> {
    let export = match format {
        Format::Text => None,
        Format::Json => Some(ExportFormat::Json),
        Format::Markdown => Some(ExportFormat::Markdown),
    };

    match (export, output) {
        (Some(export), Some(path)) => {
            pdfscreen_reporting::export_to_file(outcome, export, path)?;
        }
        (Some(export), None) => {
            let content = pdfscreen_reporting::render(outcome, export)?;
            let mut stdout = std::io::stdout();
            writeln!(stdout, "{}", content)?;
        }
        (None, Some(path)) => {
            let mut file = std::fs::File::create(path)?;
            output::print_report(&mut file, outcome, color)?;
        }
        (None, None) => {
            let mut stdout = std::io::stdout();
            output::print_report(&mut stdout, outcome, color)?;
        }
    }
    Ok(())
}

fn exit_code(outcome: &ScanOutcome) -> u8 {
    match outcome {
        ScanOutcome::Scanned { .. } => EXIT_OK,
        ScanOutcome::NoTextLayer { .. } => EXIT_UNUSABLE_INPUT,
    }
}
