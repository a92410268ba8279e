//! Core library for AFIP e-receipt extraction.
//!
//! This crate provides:
//! - PDF text access (per-page and whole-document)
//! - A registry of known receipt layouts ("formats") sorted by try order
//! - Page-major classification and field extraction
//! - A self-consistency harness that keeps formats mutually exclusive

pub mod error;
pub mod formats;
pub mod models;
pub mod pdf;
pub mod pipeline;

pub use error::{ComlinError, FormatDefect, PdfError, RegistryError, Result};
pub use formats::{FormatRegistry, ReceiptFormat, builtin_formats};
pub use models::{ComlinConfig, FieldValue, Record};
pub use pdf::{DocumentReader, PdfReader};
pub use pipeline::{Extraction, Pipeline, raw_text};

use std::sync::Arc;

/// Classify a PDF already read into memory, using the built-in formats.
///
/// Convenience for embedders that do not need a shared registry or custom
/// page handling; the CLI builds the same pieces by hand to add fallbacks
/// and page limits.
pub fn classify_pdf_bytes(data: &[u8]) -> Result<Option<Extraction>> {
    let reader = PdfReader::from_bytes(data)?;
    let pages = reader.page_texts()?;

    let registry = Arc::new(FormatRegistry::discover()?);
    Ok(Pipeline::new(registry).classify_and_extract(&pages))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_pdf_bytes_rejects_garbage() {
        let result = classify_pdf_bytes(b"no soy un PDF");
        assert!(matches!(result, Err(ComlinError::Pdf(_))));
    }
}
