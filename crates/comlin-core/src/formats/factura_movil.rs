//! The mobile e-invoice layout ("facturador móvil"), one labeled field per
//! line. Amounts carry dot thousands separators; the issuer CUIT is dashed.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use rust_decimal::Decimal;

use super::ReceiptFormat;
use super::coerce::{digits, parse_amount};
use crate::models::Record;

lazy_static! {
    static ref PATTERN: Regex = Regex::new(concat!(
        r"FACTURA ELECTRONICA\s+Tipo: (?P<tipo>[A-C])\s+",
        r"Punto de Venta: (?P<pv>\d{4,5})\s+Nro\. Comprobante: (?P<nro>\d+)\s+",
        r"Fecha de Emision: (?P<emision>\d{2}/\d{2}/\d{4})\s+",
        r"CUIT Emisor: (?P<cuit>\d{2}-\d{8}-\d)\s+",
        r"Importe Neto: \$ (?P<neto>[\d.]+,\d{2})\s+",
        r"IVA 21%: \$ (?P<iva>[\d.]+,\d{2})\s+",
        r"Importe Total: \$ (?P<total>[\d.]+,\d{2})\s+",
        r"CAE N°: (?P<cae>\d{14})\s+",
        r"Fecha de Vto\. de CAE: (?P<vto>\d{2}/\d{2}/\d{4})",
    ))
    .unwrap();
}

const SAMPLE: &str = concat!(
    "Cafe La Esquina S.A.  Av. Rivadavia 2450, CABA\n",
    "FACTURA ELECTRONICA\n",
    "Tipo: C\n",
    "Punto de Venta: 00005\n",
    "Nro. Comprobante: 00001234\n",
    "Fecha de Emision: 12/03/2019\n",
    "CUIT Emisor: 30-71234567-8\n",
    "Importe Neto: $ 1.520,00\n",
    "IVA 21%: $ 319,20\n",
    "Importe Total: $ 1.839,20\n",
    "CAE N°: 69123456789012\n",
    "Fecha de Vto. de CAE: 22/03/2019\n",
    "Consumidor Final - Gracias por su compra",
);

/// Invoices issued from the AFIP mobile billing application.
pub struct FacturaMovil;

impl ReceiptFormat for FacturaMovil {
    fn name(&self) -> &'static str {
        "factura_movil"
    }

    fn order(&self) -> u32 {
        20
    }

    fn pattern(&self) -> &Regex {
        &PATTERN
    }

    fn sample_text(&self) -> &'static str {
        SAMPLE
    }

    fn sample_record(&self) -> Record {
        Record::new()
            .with_text("Tipo_Comprobante", "C")
            .with_text("Punto_Venta", "00005")
            .with_text("Numero_Comprobante", "00001234")
            .with_text("Fecha_Emision", "12/03/2019")
            .with_text("CUIT_Emisor", "30712345678")
            .with_amount("Neto", Decimal::new(152000, 2))
            .with_amount("IVA", Decimal::new(31920, 2))
            .with_amount("Total", Decimal::new(183920, 2))
            .with_text("CAE", "69123456789012")
            .with_text("CAE_vto", "22/03/2019")
    }

    fn extract(&self, caps: &Captures<'_>) -> Option<Record> {
        let text = |name: &str| caps.name(name).map(|m| m.as_str());
        let amount = |name: &str| caps.name(name).and_then(|m| parse_amount(m.as_str()));

        Some(
            Record::new()
                .with_text("Tipo_Comprobante", text("tipo")?)
                .with_text("Punto_Venta", text("pv")?)
                .with_text("Numero_Comprobante", text("nro")?)
                .with_text("Fecha_Emision", text("emision")?)
                .with_text("CUIT_Emisor", digits(text("cuit")?))
                .with_amount("Neto", amount("neto")?)
                .with_amount("IVA", amount("iva")?)
                .with_amount("Total", amount("total")?)
                .with_text("CAE", text("cae")?)
                .with_text("CAE_vto", text("vto")?),
        )
    }
}
