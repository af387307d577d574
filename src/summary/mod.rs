//! Aggregation of fiscal records into report totals.
//!
//! Pure reductions over completed records — no ordering requirement, and
//! an empty collection yields all-zero totals. The export layer consumes
//! [`Summary::rows`] and applies its own number formatting.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{DocumentKind, FiscalRecord, OperationDirection};

/// Count and monetary sums for one partition of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxTotals {
    pub count: usize,
    pub total_value: Decimal,
    pub icms: Decimal,
    pub pis: Decimal,
    pub cofins: Decimal,
    pub ipi: Decimal,
    pub difal: Decimal,
}

impl TaxTotals {
    /// Fold one record into the totals.
    pub fn add(&mut self, record: &FiscalRecord) {
        self.count += 1;
        self.total_value += record.total_value;
        self.icms += record.icms.amount;
        self.pis += record.pis.amount;
        self.cofins += record.cofins.amount;
        self.ipi += record.ipi.amount;
        self.difal += record.difal.amount;
    }

    /// Sum a collection of records.
    pub fn sum<'a>(records: impl IntoIterator<Item = &'a FiscalRecord>) -> Self {
        let mut totals = Self::default();
        for record in records {
            totals.add(record);
        }
        totals
    }
}

/// Full report summary: document counts plus totals partitioned by
/// operation direction, with grand totals across both.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub documents: usize,
    pub invoices: usize,
    pub manifests: usize,
    pub inbound: TaxTotals,
    pub outbound: TaxTotals,
    pub overall: TaxTotals,
}

impl Summary {
    /// Aggregate a collection of records in one pass.
    pub fn of(records: &[FiscalRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            summary.documents += 1;
            match record.kind {
                DocumentKind::Invoice => summary.invoices += 1,
                DocumentKind::Manifest => summary.manifests += 1,
            }
            match record.direction {
                OperationDirection::Inbound => summary.inbound.add(record),
                OperationDirection::Outbound => summary.outbound.add(record),
            }
            summary.overall.add(record);
        }
        summary
    }

    /// Ordered (label, value) rows for the report sheet. `None` marks
    /// separator and section-header rows; values are left unformatted.
    pub fn rows(&self) -> Vec<(String, Option<Decimal>)> {
        let mut rows = vec![
            row("Total de Documentos", self.documents),
            row("Total NF-e", self.invoices),
            row("Total CT-e", self.manifests),
        ];
        section(&mut rows, "--- ENTRADAS ---", "Entradas", &self.inbound);
        section(&mut rows, "--- SAÍDAS ---", "Saídas", &self.outbound);
        section(&mut rows, "--- GERAL ---", "Geral", &self.overall);
        rows
    }
}

fn row(label: &str, count: usize) -> (String, Option<Decimal>) {
    (label.to_string(), Some(Decimal::from(count)))
}

fn section(
    rows: &mut Vec<(String, Option<Decimal>)>,
    header: &str,
    suffix: &str,
    totals: &TaxTotals,
) {
    rows.push((String::new(), None));
    rows.push((header.to_string(), None));
    rows.push(row(&format!("Qtd. {suffix}"), totals.count));
    rows.push((format!("Valor Total {suffix}"), Some(totals.total_value)));
    rows.push((format!("ICMS {suffix}"), Some(totals.icms)));
    rows.push((format!("PIS {suffix}"), Some(totals.pis)));
    rows.push((format!("COFINS {suffix}"), Some(totals.cofins)));
    rows.push((format!("IPI {suffix}"), Some(totals.ipi)));
    rows.push((format!("DIFAL {suffix}"), Some(totals.difal)));
}
