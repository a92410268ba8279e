//! Format registry: discovery, ordering and the self-consistency harness.

use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

use super::{ReceiptFormat, builtin_formats};
use crate::error::{FormatDefect, RegistryError};

/// The set of known receipt formats, sorted by `(order, name)`.
///
/// Immutable after construction. One registry is built at startup and shared
/// behind an `Arc` by every pipeline in the process.
pub struct FormatRegistry {
    formats: Vec<Arc<dyn ReceiptFormat>>,
}

impl FormatRegistry {
    /// Build the registry from the built-in format list.
    pub fn discover() -> Result<Self, RegistryError> {
        Self::with_formats(builtin_formats())
    }

    /// Build a registry from an explicit format list.
    ///
    /// Rejects an empty list and duplicate names; both make classification
    /// meaningless, so neither registry may exist.
    pub fn with_formats(
        mut formats: Vec<Arc<dyn ReceiptFormat>>,
    ) -> Result<Self, RegistryError> {
        if formats.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::new();
        for format in &formats {
            if !seen.insert(format.name()) {
                return Err(RegistryError::DuplicateName(format.name().to_string()));
            }
        }

        formats.sort_by_key(|f| (f.order(), f.name()));
        debug!("format registry assembled with {} formats", formats.len());

        Ok(Self { formats })
    }

    /// Formats in try order.
    pub fn formats(&self) -> &[Arc<dyn ReceiptFormat>] {
        &self.formats
    }

    /// Look up a format by name.
    pub fn get(&self, name: &str) -> Option<&Arc<dyn ReceiptFormat>> {
        self.formats.iter().find(|f| f.name() == name)
    }

    /// Number of registered formats.
    pub fn len(&self) -> usize {
        self.formats.len()
    }

    /// Always false for a constructed registry.
    pub fn is_empty(&self) -> bool {
        self.formats.is_empty()
    }

    /// Check every format definition against the registry contract.
    ///
    /// Each format must match its own sample and extract exactly its sample
    /// record from it, and no format may match another format's sample. An
    /// empty result means the registry is sound; any defect blocks the
    /// offending format from shipping.
    pub fn verify(&self) -> Vec<FormatDefect> {
        let mut defects = Vec::new();

        for format in &self.formats {
            match format.pattern().captures(format.sample_text()) {
                None => defects.push(FormatDefect::SampleMismatch {
                    format: format.name().to_string(),
                }),
                Some(caps) => {
                    if format.extract(&caps).as_ref() != Some(&format.sample_record()) {
                        defects.push(FormatDefect::SampleOutput {
                            format: format.name().to_string(),
                        });
                    }
                }
            }
        }

        for sample_owner in &self.formats {
            for candidate in &self.formats {
                if candidate.name() != sample_owner.name()
                    && candidate.pattern().is_match(sample_owner.sample_text())
                {
                    defects.push(FormatDefect::Collision {
                        format: candidate.name().to_string(),
                        other: sample_owner.name().to_string(),
                    });
                }
            }
        }

        defects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::{ComprobanteEnLinea, TiqueFactura};
    use crate::models::Record;
    use lazy_static::lazy_static;
    use pretty_assertions::assert_eq;
    use regex::{Captures, Regex};

    lazy_static! {
        static ref ANY_TEXT: Regex = Regex::new(r"[\s\S]+").unwrap();
        static ref FIVE_DIGITS: Regex = Regex::new(r"\d{5}").unwrap();
    }

    struct MatchesEverything;

    impl ReceiptFormat for MatchesEverything {
        fn name(&self) -> &'static str {
            "matches_everything"
        }

        fn pattern(&self) -> &Regex {
            &ANY_TEXT
        }

        fn sample_text(&self) -> &'static str {
            "cualquier texto"
        }

        fn sample_record(&self) -> Record {
            Record::new().with_text("texto", "cualquier texto")
        }

        fn extract(&self, caps: &Captures<'_>) -> Option<Record> {
            Some(Record::new().with_text("texto", caps.get(0)?.as_str()))
        }
    }

    struct NeverMatchesOwnSample;

    impl ReceiptFormat for NeverMatchesOwnSample {
        fn name(&self) -> &'static str {
            "never_matches"
        }

        fn pattern(&self) -> &Regex {
            &FIVE_DIGITS
        }

        fn sample_text(&self) -> &'static str {
            "sin numeros aca"
        }

        fn sample_record(&self) -> Record {
            Record::new()
        }

        fn extract(&self, _caps: &Captures<'_>) -> Option<Record> {
            Some(Record::new())
        }
    }

    struct WrongSampleOutput;

    impl ReceiptFormat for WrongSampleOutput {
        fn name(&self) -> &'static str {
            "wrong_output"
        }

        fn pattern(&self) -> &Regex {
            &FIVE_DIGITS
        }

        fn sample_text(&self) -> &'static str {
            "12345"
        }

        fn sample_record(&self) -> Record {
            Record::new().with_text("numero", "12345")
        }

        fn extract(&self, caps: &Captures<'_>) -> Option<Record> {
            Some(Record::new().with_text("otro_campo", caps.get(0)?.as_str()))
        }
    }

    #[test]
    fn discover_sorts_by_order_then_name() {
        let registry = FormatRegistry::discover().unwrap();
        let names: Vec<&str> = registry.formats().iter().map(|f| f.name()).collect();

        assert_eq!(
            names,
            vec!["comprobante_en_linea", "factura_movil", "tique_factura"]
        );
    }

    #[test]
    fn rejects_empty_registry() {
        let result = FormatRegistry::with_formats(Vec::new());
        assert!(matches!(result, Err(RegistryError::Empty)));
    }

    #[test]
    fn rejects_duplicate_names() {
        let result = FormatRegistry::with_formats(vec![
            Arc::new(ComprobanteEnLinea) as Arc<dyn ReceiptFormat>,
            Arc::new(ComprobanteEnLinea),
        ]);

        match result {
            Err(RegistryError::DuplicateName(name)) => {
                assert_eq!(name, "comprobante_en_linea");
            }
            _ => panic!("duplicate name must be rejected"),
        }
    }

    #[test]
    fn get_finds_formats_by_name() {
        let registry = FormatRegistry::discover().unwrap();

        assert!(registry.get("tique_factura").is_some());
        assert!(registry.get("desconocido").is_none());
    }

    #[test]
    fn builtin_formats_verify_clean() {
        let registry = FormatRegistry::discover().unwrap();
        assert_eq!(registry.verify(), Vec::new());
    }

    #[test]
    fn verify_reports_sample_mismatch() {
        let registry = FormatRegistry::with_formats(vec![
            Arc::new(NeverMatchesOwnSample) as Arc<dyn ReceiptFormat>,
        ])
        .unwrap();

        assert_eq!(
            registry.verify(),
            vec![FormatDefect::SampleMismatch {
                format: "never_matches".to_string()
            }]
        );
    }

    #[test]
    fn verify_reports_wrong_sample_output() {
        let registry = FormatRegistry::with_formats(vec![
            Arc::new(WrongSampleOutput) as Arc<dyn ReceiptFormat>,
        ])
        .unwrap();

        assert_eq!(
            registry.verify(),
            vec![FormatDefect::SampleOutput {
                format: "wrong_output".to_string()
            }]
        );
    }

    #[test]
    fn verify_reports_collisions() {
        let registry = FormatRegistry::with_formats(vec![
            Arc::new(TiqueFactura) as Arc<dyn ReceiptFormat>,
            Arc::new(MatchesEverything),
        ])
        .unwrap();

        let defects = registry.verify();
        assert!(defects.contains(&FormatDefect::Collision {
            format: "matches_everything".to_string(),
            other: "tique_factura".to_string(),
        }));
        // The ticket pattern must not match the catch-all's sample.
        assert!(!defects.contains(&FormatDefect::Collision {
            format: "tique_factura".to_string(),
            other: "matches_everything".to_string(),
        }));
    }
}
