//! Reading, rewriting, and writing of `.docx` documents.

pub mod io;
pub mod rewrite;

// Re-export the document-level API
pub use io::{open_docx, save_docx, validate_docx_file};
pub use rewrite::{paragraph_text, rewrite_document, rewrite_paragraph};
