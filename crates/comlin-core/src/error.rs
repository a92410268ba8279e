//! Error types for the comlin-core library.

use thiserror::Error;

/// Main error type for the comlin library.
#[derive(Error, Debug)]
pub enum ComlinError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Format registry construction error.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors raised while assembling the format registry.
///
/// Both variants are fatal at startup: a registry that is empty or carries
/// two formats under the same name cannot classify documents meaningfully.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// No formats were registered.
    #[error("format registry is empty")]
    Empty,

    /// Two registered formats share a name.
    #[error("duplicate format name: {0}")]
    DuplicateName(String),
}

/// A violation of the format self-consistency contract.
///
/// Produced by `FormatRegistry::verify`. Any defect means the offending
/// format definition must be fixed before it can ship.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatDefect {
    /// A format's pattern does not match its own sample text.
    #[error("format '{format}' does not match its own sample")]
    SampleMismatch { format: String },

    /// A format's extraction of its own sample differs from the expected record.
    #[error("format '{format}' extracted a record that differs from its sample record")]
    SampleOutput { format: String },

    /// A format's pattern matches another format's sample text.
    #[error("format '{format}' also matches the sample of '{other}'")]
    Collision { format: String, other: String },
}

/// Result type for the comlin library.
pub type Result<T> = std::result::Result<T, ComlinError>;
