//! Stage two: keyword desensitization of file names and document content.
//!
//! File names are handled first, then the directory is re-listed so content
//! processing sees the renamed files. Every failure below the directory level
//! is reported and skipped; one bad file never stops the batch.

use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::config::Config;
use crate::convert::list_files_with_extension;
use crate::document::{open_docx, rewrite_document, save_docx};

/// Counts reported after the desensitization stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrubSummary {
    /// Files renamed because their name contained a keyword.
    pub renamed: usize,
    /// `.docx` files whose content was scanned.
    pub scanned: usize,
    /// Files that contained at least one match and were rewritten on disk.
    pub rewritten: usize,
    /// Total paragraphs collapsed across all rewritten files.
    pub paragraphs: usize,
}

/// Apply every keyword substitution to `text`, in keyword-list order.
///
/// Substitution is chained: each keyword is matched against the output of
/// the previous replacement, not the original text. Returns the final text
/// and whether any keyword matched.
pub fn substitute(text: &str, keywords: &[String], replacement: &str) -> (String, bool) {
    let mut result = text.to_string();
    let mut matched = false;
    for keyword in keywords {
        // An empty keyword would splice the token between every character.
        if keyword.is_empty() {
            continue;
        }
        if result.contains(keyword.as_str()) {
            matched = true;
            result = result.replace(keyword.as_str(), replacement);
        }
    }
    (result, matched)
}

/// Rename every `.docx` file whose name contains a keyword.
///
/// Idempotent: a second pass over already-clean names changes nothing.
pub fn rename_files(dir: &Path, config: &Config) -> Result<usize> {
    println!("  Step 2.1: renaming files...");
    let mut renamed = 0;
    for path in list_files_with_extension(dir, "docx")? {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            eprintln!("    [error] skipping non-UTF-8 file name '{}'", path.display());
            continue;
        };
        let (new_name, _) = substitute(name, &config.keywords, &config.replacement);
        if new_name == name {
            continue;
        }
        match fs::rename(&path, dir.join(&new_name)) {
            Ok(()) => {
                renamed += 1;
                println!("    Renamed '{name}' -> '{new_name}'");
            }
            Err(err) => {
                eprintln!("    [error] renaming '{name}' failed: {err}");
            }
        }
    }
    println!("  File renaming complete.");
    Ok(renamed)
}

/// Run the full desensitization stage over `dir`: rename pass, then a
/// content pass over the re-listed `.docx` files.
pub fn scrub_directory(dir: &Path, config: &Config) -> Result<ScrubSummary> {
    println!("--- Stage two: desensitizing .docx files ---");
    let mut summary = ScrubSummary {
        renamed: rename_files(dir, config)?,
        ..Default::default()
    };

    println!("  Step 2.2: rewriting file content...");
    for path in list_files_with_extension(dir, "docx")? {
        summary.scanned += 1;
        println!("    Processing content of '{}'", path.display());
        match scrub_file(&path, config) {
            Ok(0) => {}
            Ok(paragraphs) => {
                summary.rewritten += 1;
                summary.paragraphs += paragraphs;
            }
            Err(err) => {
                eprintln!("    [error] processing '{}' failed: {err:#}", path.display());
            }
        }
    }

    println!("--- Desensitization stage complete ---");
    Ok(summary)
}

/// Scrub a single document in place, returning the number of rewritten
/// paragraphs. A document with no matches is left entirely unwritten, so its
/// bytes on disk stay identical.
fn scrub_file(path: &Path, config: &Config) -> Result<usize> {
    let mut docx = open_docx(path)?;
    let paragraphs = rewrite_document(&mut docx, &config.keywords, &config.replacement);
    if paragraphs > 0 {
        save_docx(docx, path)?;
    }
    Ok(paragraphs)
}
