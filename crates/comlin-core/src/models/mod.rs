//! Data models: extracted records and pipeline configuration.

pub mod config;
pub mod record;

pub use config::{ComlinConfig, OutputConfig, PdfConfig};
pub use record::{FieldValue, Record};
