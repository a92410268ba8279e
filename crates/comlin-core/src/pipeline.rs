//! Document classification and field extraction.
//!
//! The pipeline walks a document's pages in order and, within each page,
//! tries every registered format in registry order. The first pattern match
//! that also extracts a record decides the whole document; nothing after it
//! is scanned. Documents no format recognizes are an ordinary outcome, not an
//! error.

use std::sync::Arc;
use tracing::{debug, info};

use crate::formats::FormatRegistry;
use crate::models::Record;

/// A successful classification with its extracted fields.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Name of the matched format.
    pub format: &'static str,
    /// 1-based page the match was found on.
    pub page: usize,
    /// Extracted fields, in the format's field order.
    pub record: Record,
}

/// Page-major scanner over a shared format registry.
///
/// Holds no per-document state; one pipeline may serve many documents, and
/// many pipelines may share one registry.
pub struct Pipeline {
    registry: Arc<FormatRegistry>,
}

impl Pipeline {
    /// Create a pipeline over a registry.
    pub fn new(registry: Arc<FormatRegistry>) -> Self {
        Self { registry }
    }

    /// The registry this pipeline scans with.
    pub fn registry(&self) -> &FormatRegistry {
        &self.registry
    }

    /// Identify the document's format and extract its fields.
    ///
    /// Returns `None` when no page matches any registered format. A format
    /// whose pattern matches but whose extraction comes back empty is
    /// treated exactly like a non-match and scanning continues.
    pub fn classify_and_extract<S: AsRef<str>>(&self, pages: &[S]) -> Option<Extraction> {
        for (index, page) in pages.iter().enumerate() {
            let page_text = page.as_ref();
            debug!(
                "scanning page {} ({} characters)",
                index + 1,
                page_text.len()
            );

            for format in self.registry.formats() {
                if let Some(caps) = format.pattern().captures(page_text) {
                    if let Some(record) = format.extract(&caps) {
                        info!("page {} matched format '{}'", index + 1, format.name());
                        return Some(Extraction {
                            format: format.name(),
                            page: index + 1,
                            record,
                        });
                    }
                    debug!(
                        "format '{}' matched page {} but yielded no record",
                        format.name(),
                        index + 1
                    );
                }
            }
        }

        debug!("no format matched any of {} pages", pages.len());
        None
    }
}

/// Concatenate page texts in document order, without classifying.
pub fn raw_text<S: AsRef<str>>(pages: &[S]) -> String {
    pages
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join("\n\n")
}
