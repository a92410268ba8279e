//! Registry-wide consistency checks.
//!
//! Every registered format must match its own sample and extract exactly its
//! sample record from it, and no format may match any other format's sample.
//! These two properties are what make first-match-wins classification safe.

use std::sync::Arc;
use std::thread;

use comlin_core::{FormatRegistry, Pipeline, ReceiptFormat, builtin_formats};
use pretty_assertions::assert_eq;

#[test]
fn each_format_versus_itself() {
    for format in builtin_formats() {
        let caps = format
            .pattern()
            .captures(format.sample_text())
            .unwrap_or_else(|| panic!("{} does not match its own sample", format.name()));

        let record = format
            .extract(&caps)
            .unwrap_or_else(|| panic!("{} extracted nothing from its own sample", format.name()));

        assert_eq!(
            record,
            format.sample_record(),
            "{} sample record differs",
            format.name()
        );
    }
}

#[test]
fn each_format_versus_others() {
    let formats = builtin_formats();

    for owner in &formats {
        for other in formats.iter().filter(|f| f.name() != owner.name()) {
            assert!(
                !other.pattern().is_match(owner.sample_text()),
                "{} vs {} match!",
                owner.name(),
                other.name()
            );
        }
    }
}

#[test]
fn registry_reports_no_defects() {
    let registry = FormatRegistry::discover().unwrap();
    assert_eq!(registry.verify(), Vec::new());
}

#[test]
fn registry_is_shareable_across_threads() {
    let registry = Arc::new(FormatRegistry::discover().unwrap());
    let sample = registry.get("tique_factura").unwrap().sample_text();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                let pipeline = Pipeline::new(registry);
                pipeline
                    .classify_and_extract(&[sample])
                    .map(|extraction| extraction.format)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some("tique_factura"));
    }
}
