//! Extracted receipt records.
//!
//! A [`Record`] is a flat, ordered mapping from field name to scalar value.
//! Field order is part of a record's identity: it is fixed by the format
//! definition that produced the record and is preserved through serialization,
//! so JSON and CSV outputs list fields the way the receipt layout defines them.

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;

/// A single extracted field value.
///
/// Receipt fields are scalars only. Identifier-like fields stay textual even
/// when they are all digits (leading zeros in receipt numbers are
/// significant); monetary fields use exact decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Textual field (identifiers, dates, codes).
    Text(String),
    /// Integer field (counts).
    Integer(i64),
    /// Monetary amount with exact decimal semantics.
    Amount(Decimal),
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Integer(n) => write!(f, "{n}"),
            FieldValue::Amount(d) => write!(f, "{d}"),
        }
    }
}

/// An ordered collection of extracted fields.
///
/// Serializes to a flat JSON object in field order. Equality is
/// order-sensitive: two records with the same fields in a different order are
/// not equal.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text field.
    pub fn with_text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.insert(name.to_string(), FieldValue::Text(value.into()));
        self
    }

    /// Append an integer field.
    pub fn with_integer(mut self, name: &str, value: i64) -> Self {
        self.fields.insert(name.to_string(), FieldValue::Integer(value));
        self
    }

    /// Append a monetary amount field.
    pub fn with_amount(mut self, name: &str, value: Decimal) -> Self {
        self.fields.insert(name.to_string(), FieldValue::Amount(value));
        self
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Iterate fields in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record carries no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

// IndexMap's own equality ignores order; records must not.
impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.fields.len() == other.fields.len()
            && self.fields.iter().zip(other.fields.iter()).all(|(a, b)| a == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    #[test]
    fn preserves_insertion_order() {
        let record = Record::new()
            .with_text("Punto_Venta", "0003")
            .with_amount("Total", Decimal::new(14860, 2))
            .with_integer("Articulos", 3);

        let names: Vec<&str> = record.field_names().collect();
        assert_eq!(names, vec!["Punto_Venta", "Total", "Articulos"]);
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn new_record_is_empty() {
        let record = Record::new();
        assert!(record.is_empty());
        assert_eq!(record.len(), 0);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a = Record::new().with_text("x", "1").with_text("y", "2");
        let b = Record::new().with_text("y", "2").with_text("x", "1");
        let c = Record::new().with_text("x", "1").with_text("y", "2");

        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn serializes_as_flat_object_in_order() {
        let record = Record::new()
            .with_text("CUIT_Emisor", "30709123456")
            .with_amount("Total", Decimal::new(14860, 2))
            .with_integer("Articulos", 3);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"CUIT_Emisor":"30709123456","Total":"148.60","Articulos":3}"#
        );
    }

    #[test]
    fn display_renders_scalars() {
        assert_eq!(FieldValue::Text("06".into()).to_string(), "06");
        assert_eq!(FieldValue::Integer(3).to_string(), "3");
        assert_eq!(FieldValue::Amount(Decimal::new(2700, 2)).to_string(), "27.00");
    }
}
