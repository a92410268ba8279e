//! Receipt format definitions.
//!
//! Each supported receipt layout is a [`ReceiptFormat`]: a detection pattern
//! paired with an extraction rule and a canonical sample that pins down both.
//! Formats are mutually exclusive by contract (no format may match another
//! format's sample), which is what lets the pipeline trust the first match it
//! finds. [`FormatRegistry::verify`](registry::FormatRegistry::verify)
//! enforces the contract.

pub mod coerce;
mod comprobante_en_linea;
mod factura_movil;
pub mod registry;
mod tique_factura;

pub use comprobante_en_linea::ComprobanteEnLinea;
pub use factura_movil::FacturaMovil;
pub use registry::FormatRegistry;
pub use tique_factura::TiqueFactura;

use regex::{Captures, Regex};
use std::sync::Arc;

use crate::models::Record;

/// Try priority for formats that do not state one.
pub const DEFAULT_ORDER: u32 = 50;

/// A receipt layout: detection pattern plus extraction rule.
///
/// Implementations are stateless and immutable; one instance serves any
/// number of documents concurrently.
pub trait ReceiptFormat: Send + Sync {
    /// Unique layout identifier.
    fn name(&self) -> &'static str;

    /// Try priority. Lower values are tried first; ties break by name.
    fn order(&self) -> u32 {
        DEFAULT_ORDER
    }

    /// Detection pattern. Matching anywhere in a page's text selects this
    /// format for the whole document.
    fn pattern(&self) -> &Regex;

    /// Canonical page text known to match [`pattern`](Self::pattern).
    fn sample_text(&self) -> &'static str;

    /// The exact record [`extract`](Self::extract) must produce from the
    /// match of the pattern on [`sample_text`](Self::sample_text).
    fn sample_record(&self) -> Record;

    /// Build a record from a pattern match.
    ///
    /// Pure function of the captures. Returns `None` when a required group
    /// is absent or fails to parse, which the pipeline treats exactly like a
    /// non-match of this format.
    fn extract(&self, caps: &Captures<'_>) -> Option<Record>;
}

/// All built-in formats, in no particular order.
///
/// New layouts are added by implementing [`ReceiptFormat`] in their own
/// module and appending one entry here; the registry handles ordering and
/// uniqueness.
pub fn builtin_formats() -> Vec<Arc<dyn ReceiptFormat>> {
    vec![
        Arc::new(ComprobanteEnLinea),
        Arc::new(FacturaMovil),
        Arc::new(TiqueFactura),
    ]
}
