//! The AFIP "comprobante en línea" web layout.
//!
//! The text layer of these PDFs runs the whole body together into one line:
//! the receipt number, an expiry date glued directly to a 54-digit
//! authorization block, and eleven labeled amounts with no separation. All
//! identifier fields live at fixed character offsets inside the block.

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use rust_decimal::Decimal;
use std::ops::Range;

use super::ReceiptFormat;
use super::coerce::parse_amount;
use crate::models::Record;

lazy_static! {
    static ref PATTERN: Regex = Regex::new(concat!(
        r"Comp\. Nro:(\d+).+([0-9]{2}/[0-9]{2}/[0-9]{4})([0-9]{54})",
        r"Importe Otros Tributos: \$(\d+,\d+)Importe Neto No Gravado: \$(\d+,\d+)",
        r"Importe Neto Gravado: \$(\d+,\d+)IVA 27%: \$(\d+,\d+)IVA 21%: \$(\d+,\d+)",
        r"IVA 10\.5%: \$(\d+,\d+)IVA 5%: \$(\d+,\d+)IVA 2\.5%: \$(\d+,\d+)",
        r"Importe Otros Tributos: \$(\d+,\d+)Importe Total: \$(\d+,\d+)IVA 0%: \$(\d+,\d+)",
    ))
    .unwrap();
}

// Character layout of the 54-digit authorization block (capture group 3).
// Position 53 is a trailing digit with no known meaning.
const CAE_NRO: Range<usize> = 0..14;
const CUIT_EMISOR: Range<usize> = 14..25;
const CODIGO_COMPROBANTE: Range<usize> = 25..27;
const PUNTO_VENTA: Range<usize> = 27..31;
const CAE: Range<usize> = 31..45;
const FECHA_EMISION: Range<usize> = 45..53;

// Receipt numbers arrive prefixed with the 4-digit point of sale.
const POS_PREFIX_LEN: usize = 4;

const SAMPLE: &str = concat!(
    "AFIP Administracion Federal de Ingresos Publicos\n",
    "ORIGINAL Factura B Codigo 06 PAPELERA MITRE S.R.L. Punto de Venta: 0003 ",
    "Comp. Nro:000300007812 Fecha de Emision: 20/04/2018 CUIT: 30-70912345-6 ",
    "Ingresos Brutos: 901-123456-7 CAE Fecha de Vto.: 15/05/2018",
    "681845197028443070912345606000368184519702855201804205",
    "Importe Otros Tributos: $0,00Importe Neto No Gravado: $0,00",
    "Importe Neto Gravado: $100,50IVA 27%: $27,00IVA 21%: $21,10",
    "IVA 10.5%: $0,00IVA 5%: $0,00IVA 2.5%: $0,00",
    "Importe Otros Tributos: $0,00Importe Total: $148,60IVA 0%: $0,00\n",
    "Pagina 1 de 1",
);

/// Receipts generated by the AFIP "comprobantes en línea" web service.
pub struct ComprobanteEnLinea;

impl ReceiptFormat for ComprobanteEnLinea {
    fn name(&self) -> &'static str {
        "comprobante_en_linea"
    }

    fn order(&self) -> u32 {
        10
    }

    fn pattern(&self) -> &Regex {
        &PATTERN
    }

    fn sample_text(&self) -> &'static str {
        SAMPLE
    }

    fn sample_record(&self) -> Record {
        Record::new()
            .with_text("CUIT_Emisor", "30709123456")
            .with_text("Codigo_Comprobante", "06")
            .with_text("Punto_Venta", "0003")
            .with_text("Numero_Comprobante", "00007812")
            .with_text("CAE_vto", "15/05/2018")
            .with_text("CAE_nro", "68184519702844")
            .with_text("CAE", "68184519702855")
            .with_text("Fecha_Emision", "20180420")
            .with_amount("No_Gravado", Decimal::new(0, 2))
            .with_amount("Gravado", Decimal::new(10050, 2))
            .with_amount("IVA_27", Decimal::new(2700, 2))
            .with_amount("IVA_21", Decimal::new(2110, 2))
            .with_amount("IVA_10.5", Decimal::new(0, 2))
            .with_amount("IVA_5", Decimal::new(0, 2))
            .with_amount("IVA_2.5", Decimal::new(0, 2))
            .with_amount("Otros_Tributos", Decimal::new(0, 2))
            .with_amount("Total", Decimal::new(14860, 2))
            .with_amount("IVA_0", Decimal::new(0, 2))
    }

    fn extract(&self, caps: &Captures<'_>) -> Option<Record> {
        let numero = caps.get(1)?.as_str();
        let cae_vto = caps.get(2)?.as_str();
        let block = caps.get(3)?.as_str();

        // The pattern guarantees 54 digits; keep the slicing total anyway.
        if numero.len() <= POS_PREFIX_LEN || block.len() < FECHA_EMISION.end {
            return None;
        }

        let amount = |i: usize| caps.get(i).and_then(|m| parse_amount(m.as_str()));

        // "Importe Otros Tributos" appears twice in this layout; group 4 is
        // the duplicate label, group 12 carries the value.
        Some(
            Record::new()
                .with_text("CUIT_Emisor", &block[CUIT_EMISOR])
                .with_text("Codigo_Comprobante", &block[CODIGO_COMPROBANTE])
                .with_text("Punto_Venta", &block[PUNTO_VENTA])
                .with_text("Numero_Comprobante", &numero[POS_PREFIX_LEN..])
                .with_text("CAE_vto", cae_vto)
                .with_text("CAE_nro", &block[CAE_NRO])
                .with_text("CAE", &block[CAE])
                .with_text("Fecha_Emision", &block[FECHA_EMISION])
                .with_amount("No_Gravado", amount(5)?)
                .with_amount("Gravado", amount(6)?)
                .with_amount("IVA_27", amount(7)?)
                .with_amount("IVA_21", amount(8)?)
                .with_amount("IVA_10.5", amount(9)?)
                .with_amount("IVA_5", amount(10)?)
                .with_amount("IVA_2.5", amount(11)?)
                .with_amount("Otros_Tributos", amount(12)?)
                .with_amount("Total", amount(13)?)
                .with_amount("IVA_0", amount(14)?),
        )
    }
}
