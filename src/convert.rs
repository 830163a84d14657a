//! Stage one: converting legacy `.doc` files to `.docx` with LibreOffice.
//!
//! Each conversion is a blocking `soffice --headless --convert-to docx` call
//! producing a sibling file with the same base name. Originals are deleted
//! only after their converted counterpart is confirmed on disk, so a failed
//! conversion never loses the input file.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Result, bail};

use crate::error::ScrubError;

/// Counts reported after the conversion stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConversionSummary {
    /// Legacy files discovered in the target directory.
    pub found: usize,
    /// Conversions that exited successfully and produced the expected file.
    pub converted: usize,
    /// Originals deleted after their `.docx` counterpart appeared.
    pub removed: usize,
}

/// Check that the converter executable can be invoked at all.
///
/// This is the stage's fatal precondition: if the version probe fails, no
/// file in the directory is touched.
pub fn probe_converter(soffice: &str) -> Result<(), ScrubError> {
    let invocable = Command::new(soffice)
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false);

    if invocable {
        Ok(())
    } else {
        Err(ScrubError::ConverterUnavailable(soffice.to_string()))
    }
}

/// Convert every `.doc` file in `dir` to `.docx`, then remove each original
/// whose converted counterpart exists.
///
/// Individual conversion or deletion failures are reported and skipped; the
/// overall result only reflects whether the converter was invocable.
pub fn convert_directory(dir: &Path, soffice: &str) -> Result<ConversionSummary> {
    println!("--- Stage one: converting .doc files with LibreOffice ---");
    probe_converter(soffice)?;

    let doc_files = list_files_with_extension(dir, "doc")?;
    let mut summary = ConversionSummary {
        found: doc_files.len(),
        ..Default::default()
    };

    if doc_files.is_empty() {
        println!("No .doc files to convert.");
        return Ok(summary);
    }

    println!("Found {} .doc file(s) to convert.", doc_files.len());
    for path in &doc_files {
        println!("  Converting '{}'...", path.display());
        match run_conversion(soffice, dir, path) {
            Ok(()) => summary.converted += 1,
            Err(err) => {
                eprintln!("  [error] converting '{}' failed: {err:#}", path.display());
            }
        }
    }

    println!("Cleaning up original .doc files...");
    for path in &doc_files {
        // Only delete an original once the converted file is actually there.
        if !path.with_extension("docx").exists() {
            continue;
        }
        match fs::remove_file(path) {
            Ok(()) => {
                summary.removed += 1;
                println!("  Removed '{}'", path.display());
            }
            Err(err) => {
                eprintln!("  [error] removing '{}' failed: {err}", path.display());
            }
        }
    }

    println!("--- Conversion stage complete ---");
    Ok(summary)
}

fn run_conversion(soffice: &str, outdir: &Path, input: &Path) -> Result<()> {
    let output = Command::new(soffice)
        .arg("--headless")
        .arg("--convert-to")
        .arg("docx")
        .arg("--outdir")
        .arg(outdir)
        .arg(input)
        .output()?;

    if !output.status.success() {
        bail!(
            "soffice exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    // A clean exit without the expected output file is still a failure.
    let expected = input.with_extension("docx");
    if !expected.exists() {
        bail!(
            "soffice exited successfully but '{}' was not produced",
            expected.display()
        );
    }
    Ok(())
}

/// List the regular files in `dir` whose extension matches `extension`
/// case-insensitively. Subdirectories are not descended into; the result is
/// sorted for deterministic processing order.
pub(crate) fn list_files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
        if matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
