//! PDF text reading using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::{DocumentReader, Result};
use crate::error::PdfError;

/// PDF text reader backed by lopdf and pdf-extract.
///
/// lopdf handles the structural load (including receipts "encrypted" with an
/// empty owner password, which AFIP PDFs sometimes are); pdf-extract renders
/// the text layer.
pub struct PdfReader {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfReader {
    /// Create an empty reader.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Create a reader directly from a byte buffer.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let mut reader = Self::new();
        reader.load(data)?;
        Ok(reader)
    }
}

impl Default for PdfReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentReader for PdfReader {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        // Handle PDFs with empty password encryption
        if doc.is_encrypted() {
            if doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // Save decrypted document to raw_data for pdf_extract
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn page_texts(&self) -> Result<Vec<String>> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }

        pdf_extract::extract_text_from_mem_by_pages(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }

    fn text(&self) -> Result<String> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }

        pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_reader_has_no_document() {
        let reader = PdfReader::new();
        assert!(reader.document.is_none());
        assert_eq!(reader.page_count(), 0);
    }

    #[test]
    fn unloaded_reader_refuses_text_extraction() {
        let reader = PdfReader::new();
        assert!(reader.text().is_err());
        assert!(reader.page_texts().is_err());
    }

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let mut reader = PdfReader::new();
        let result = reader.load(b"no soy un PDF");
        assert!(matches!(result, Err(PdfError::Parse(_))));
    }
}
