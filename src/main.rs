use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use docscrub::{Config, ScrubError, convert_directory, scrub_directory};

/// Batch-convert legacy .doc files with LibreOffice, then replace sensitive
/// keywords in every .docx file's name and text.
#[derive(Parser)]
#[command(name = "docscrub", version)]
struct Cli {
    /// Directory to process (defaults to the configured directory)
    directory: Option<PathBuf>,

    /// Path or command name of the LibreOffice executable
    #[arg(long)]
    soffice: Option<String>,

    /// Explicit TOML config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Skip the .doc conversion stage and only desensitize .docx files
    #[arg(long)]
    skip_convert: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[fatal] {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(directory) = cli.directory {
        config.directory = directory;
    }
    if let Some(soffice) = cli.soffice {
        config.soffice = Some(soffice);
    }

    println!("Starting document desensitization...");
    println!("{}", "=".repeat(40));

    if !config.directory.is_dir() {
        return Err(ScrubError::MissingDirectory(config.directory.clone()).into());
    }

    let mut converted = 0;
    if !cli.skip_convert {
        let summary = convert_directory(&config.directory, config.soffice_command())
            .context("conversion stage failed; desensitization was not attempted")?;
        converted = summary.converted;
        println!();
    }

    let summary = scrub_directory(&config.directory, &config)?;

    println!();
    println!("{}", "=".repeat(40));
    println!(
        "All tasks complete: {converted} file(s) converted, {} file(s) renamed, \
         {} of {} file(s) rewritten ({} paragraph(s)).",
        summary.renamed, summary.rewritten, summary.scanned, summary.paragraphs
    );
    Ok(())
}
