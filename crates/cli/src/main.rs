//! oas2raml CLI
//!
//! Command-line interface converting OpenAPI 3.x documents to RAML 1.0.

use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use oas2raml_converter::{Conversion, OpenApiParser, Severity};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "oas2raml")]
#[command(version, about = "Convert OpenAPI 3.x documents to RAML 1.0", long_about = None)]
#[command(after_help = "EXAMPLES:\n  \
    # Print RAML to stdout\n  \
    oas2raml openapi.yaml\n\n  \
    # Write RAML to a file and keep a diagnostics report\n  \
    oas2raml openapi.json --output api.raml --report diagnostics.json\n\n  \
    # Fail when the document is not OpenAPI 3.x\n  \
    oas2raml --strict openapi.yaml")]
struct Cli {
    /// Path to the OpenAPI document (YAML or JSON)
    #[arg(value_name = "OPENAPI")]
    input: PathBuf,

    /// Output file, otherwise RAML is written to stdout
    #[arg(short, long, value_name = "API.raml")]
    output: Option<PathBuf>,

    /// Write the conversion diagnostics as JSON to this file
    #[arg(long, value_name = "FILE")]
    report: Option<PathBuf>,

    /// Exit with an error when an error-level diagnostic was produced
    #[arg(long)]
    strict: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    convert_command(&cli)
}

/// Diagnostics are logged as they are emitted; `RUST_LOG` overrides the level
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

fn convert_command(cli: &Cli) -> Result<()> {
    if cli.verbose {
        eprintln!("{} Converting: {}", "→".cyan(), cli.input.display());
    }

    let parser =
        OpenApiParser::from_file(&cli.input).context("Failed to load OpenAPI document")?;
    let conversion = parser
        .convert()
        .context("Failed to convert OpenAPI document")?;
    let raml = conversion
        .document
        .to_raml_string()
        .context("Failed to serialize RAML document")?;

    match &cli.output {
        Some(output) => {
            let output = resolve_output(output)?;
            fs::write(&output, &raml)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            eprintln!("{} Wrote {}", "✓".green(), output.display());
        }
        None => print!("{}", raml),
    }

    if let Some(report) = &cli.report {
        write_report(report, &conversion)?;
        if cli.verbose {
            eprintln!("{} Diagnostics report: {}", "→".cyan(), report.display());
        }
    }

    print_summary(&conversion);

    let errors = conversion.diagnostics.count(Severity::Error);
    if cli.strict && errors > 0 {
        anyhow::bail!("Conversion produced {} error diagnostic(s)", errors);
    }

    Ok(())
}

/// Relative output paths are taken from the working directory
fn resolve_output(output: &Path) -> Result<PathBuf> {
    if output.is_absolute() {
        return Ok(output.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to read working directory")?;
    Ok(cwd.join(output))
}

fn write_report(path: &Path, conversion: &Conversion) -> Result<()> {
    let json = serde_json::to_string_pretty(&conversion.diagnostics)
        .context("Failed to serialize diagnostics")?;
    fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(path = %path.display(), "diagnostics report written");
    Ok(())
}

fn print_summary(conversion: &Conversion) {
    let warnings = conversion.diagnostics.count(Severity::Warning);
    let errors = conversion.diagnostics.count(Severity::Error);

    if warnings == 0 && errors == 0 {
        eprintln!("{}", "✓ Conversion complete".green().bold());
        return;
    }

    let summary = format!(
        "Conversion complete with {} warning(s) and {} error(s)",
        warnings, errors
    );
    if errors > 0 {
        eprintln!("{} {}", "✗".red(), summary.red().bold());
    } else {
        eprintln!("{} {}", "⚠".yellow(), summary.yellow());
    }
}
