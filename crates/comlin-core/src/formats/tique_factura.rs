//! Fiscal-controller ticket invoices ("tique factura").

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use rust_decimal::Decimal;

use super::ReceiptFormat;
use super::coerce::{parse_amount, parse_integer};
use crate::models::Record;

lazy_static! {
    static ref PATTERN: Regex = Regex::new(concat!(
        r"TIQUE FACTURA (A|B|C)\s+",
        r"P\.V\.: (\d{4})\s+Nro\. T\.: (\d{8})\s+",
        r"Fecha: (\d{2}/\d{2}/\d{4})\s+Hora: (\d{2}:\d{2})\s+",
        r"C\.U\.I\.T\.: (\d{11})\s+",
        r"Articulos: (\d+)\s+",
        r"TOTAL: \$(\d+,\d{2})\s+",
        r"I\.V\.A\. Contenido: \$(\d+,\d{2})",
    ))
    .unwrap();
}

const SAMPLE: &str = concat!(
    "IMPRENTA DIGITAL S.A.\n",
    "Av. Corrientes 1234 - C.A.B.A.\n",
    "IVA RESPONSABLE INSCRIPTO\n",
    "TIQUE FACTURA B\n",
    "P.V.: 0012   Nro. T.: 00045678\n",
    "Fecha: 05/11/2020   Hora: 14:32\n",
    "C.U.I.T.: 30585178129\n",
    "Articulos: 3\n",
    "TOTAL: $587,45\n",
    "I.V.A. Contenido: $101,95\n",
    "CF DGI Homologacion 90081231",
);

/// Tickets printed by homologated fiscal controllers.
pub struct TiqueFactura;

impl ReceiptFormat for TiqueFactura {
    fn name(&self) -> &'static str {
        "tique_factura"
    }

    fn order(&self) -> u32 {
        30
    }

    fn pattern(&self) -> &Regex {
        &PATTERN
    }

    fn sample_text(&self) -> &'static str {
        SAMPLE
    }

    fn sample_record(&self) -> Record {
        Record::new()
            .with_text("Tipo_Tique", "B")
            .with_text("Punto_Venta", "0012")
            .with_text("Numero_Tique", "00045678")
            .with_text("Fecha", "05/11/2020")
            .with_text("Hora", "14:32")
            .with_text("CUIT_Emisor", "30585178129")
            .with_integer("Articulos", 3)
            .with_amount("Total", Decimal::new(58745, 2))
            .with_amount("IVA_Contenido", Decimal::new(10195, 2))
    }

    fn extract(&self, caps: &Captures<'_>) -> Option<Record> {
        let text = |i: usize| caps.get(i).map(|m| m.as_str());
        let amount = |i: usize| caps.get(i).and_then(|m| parse_amount(m.as_str()));

        Some(
            Record::new()
                .with_text("Tipo_Tique", text(1)?)
                .with_text("Punto_Venta", text(2)?)
                .with_text("Numero_Tique", text(3)?)
                .with_text("Fecha", text(4)?)
                .with_text("Hora", text(5)?)
                .with_text("CUIT_Emisor", text(6)?)
                .with_integer("Articulos", parse_integer(text(7)?)?)
                .with_amount("Total", amount(8)?)
                .with_amount("IVA_Contenido", amount(9)?),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn matches_own_sample() {
        let format = TiqueFactura;
        assert!(format.pattern().is_match(format.sample_text()));
    }

    #[test]
    fn extracts_sample_record() {
        let format = TiqueFactura;
        let caps = format.pattern().captures(format.sample_text()).unwrap();
        let record = format.extract(&caps).unwrap();

        assert_eq!(record, format.sample_record());
    }

    #[test]
    fn item_count_is_an_integer_field() {
        let format = TiqueFactura;
        let caps = format.pattern().captures(format.sample_text()).unwrap();
        let record = format.extract(&caps).unwrap();

        assert_eq!(record.get("Articulos"), Some(&FieldValue::Integer(3)));
    }

    #[test]
    fn ignores_unrelated_text() {
        let format = TiqueFactura;
        assert!(
            format
                .pattern()
                .captures("TIQUE comun, controlador no fiscal")
                .is_none()
        );
    }
}
