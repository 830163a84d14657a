//! docscrub: batch desensitization for Word documents
//!
//! This library converts legacy `.doc` files to `.docx` through a headless
//! LibreOffice invocation, then replaces a configured list of sensitive
//! keywords with a placeholder string in both file names and document text,
//! including text inside table cells.

pub mod config;
pub mod convert;
pub mod desensitize;
pub mod document;
pub mod error;

// Re-export commonly used types
pub use config::Config;
pub use convert::{ConversionSummary, convert_directory, probe_converter};
pub use desensitize::{ScrubSummary, rename_files, scrub_directory, substitute};
pub use error::ScrubError;
