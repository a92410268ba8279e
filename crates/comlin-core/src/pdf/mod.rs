//! PDF processing module.
//!
//! The extraction engine never opens files or parses PDF bytes itself;
//! callers load a document here and hand its page texts to the pipeline. A
//! caller that already holds plain text can skip this module entirely and
//! pass the text as a one-page document.

mod reader;

pub use reader::PdfReader;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF text access.
pub trait DocumentReader {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract each page's text, in page order.
    fn page_texts(&self) -> Result<Vec<String>>;

    /// Extract text from the entire PDF as one string.
    fn text(&self) -> Result<String>;
}
