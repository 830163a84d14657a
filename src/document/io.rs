//! File I/O for `.docx` documents.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};
use zip::ZipArchive;

/// Validates that the file is a legitimate `.docx` container before parsing.
pub fn validate_docx_file(path: &Path) -> Result<()> {
    let extension = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    if !extension.eq_ignore_ascii_case("docx") {
        bail!("expected a .docx file, got '.{extension}'");
    }

    // Check the ZIP structure contains word/document.xml
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;
    if archive.by_name("word/document.xml").is_err() {
        bail!("missing word/document.xml; the file may be corrupted or not a Word document");
    }

    Ok(())
}

/// Parses a `.docx` file into its document tree.
pub fn open_docx(path: &Path) -> Result<docx_rs::Docx> {
    validate_docx_file(path)?;
    let data =
        std::fs::read(path).with_context(|| format!("reading '{}'", path.display()))?;
    docx_rs::read_docx(&data).with_context(|| format!("parsing '{}'", path.display()))
}

/// Writes the document tree back to disk, replacing the file contents.
///
/// The write is all-or-nothing: the document is packed into a temporary
/// file in the same directory and renamed over the target only once it is
/// complete, so a failure mid-write leaves the original file intact.
pub fn save_docx(docx: docx_rs::Docx, path: &Path) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let temp = tempfile::Builder::new()
        .prefix(".docscrub-")
        .suffix(".docx")
        .tempfile_in(parent)
        .with_context(|| format!("creating temporary file for '{}'", path.display()))?;
    docx.build()
        .pack(temp.as_file())
        .with_context(|| format!("writing '{}'", path.display()))?;
    temp.persist(path)
        .with_context(|| format!("replacing '{}'", path.display()))?;
    Ok(())
}
