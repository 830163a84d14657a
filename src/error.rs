//! Fatal error conditions that abort the whole run.

use std::path::PathBuf;

use thiserror::Error;

/// Preconditions that must hold before any file is touched.
///
/// Per-file failures (a single conversion, rename, parse, or save) are not
/// represented here; they are reported and skipped at the item boundary.
#[derive(Debug, Error)]
pub enum ScrubError {
    #[error("target directory '{}' does not exist", .0.display())]
    MissingDirectory(PathBuf),

    #[error("cannot execute '{0}'; check the LibreOffice installation and path")]
    ConverterUnavailable(String),
}
