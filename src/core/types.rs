use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Supported fiscal document schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// NF-e — electronic invoice (Nota Fiscal Eletrônica).
    Invoice,
    /// CT-e — electronic transport manifest (Conhecimento de Transporte).
    Manifest,
}

impl DocumentKind {
    /// Display code used in reports and spreadsheet columns.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Invoice => "NF-e",
            Self::Manifest => "CT-e",
        }
    }
}

/// Operation direction from the perspective of the reporting company.
///
/// Derived once at parse time from the document's type flag (`tpNF` for
/// NF-e, `tpCTe` for CT-e) and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperationDirection {
    /// Entrada — goods or services received.
    Inbound,
    /// Saída — goods or services supplied.
    Outbound,
}

impl OperationDirection {
    /// Portuguese label used in reports ("Entrada" / "Saída").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Inbound => "Entrada",
            Self::Outbound => "Saída",
        }
    }
}

/// One tax position: a percentage rate and a monetary amount.
///
/// For NF-e most rates are not present in the source XML and are derived
/// from the amount and a base; for CT-e the ICMS rate is carried verbatim.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TaxLine {
    /// Rate in percent, non-negative, rounded to two decimal places.
    pub rate: Decimal,
    /// Amount in BRL; zero when absent from the source document.
    pub amount: Decimal,
}

impl TaxLine {
    pub fn new(rate: Decimal, amount: Decimal) -> Self {
        Self { rate, amount }
    }
}

/// Normalized fiscal record — the unified output for both document kinds.
///
/// Constructed exactly once per successfully extracted document and not
/// mutated afterwards. Missing optional source fields appear as empty
/// strings or zero amounts, never as errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiscalRecord {
    /// Generated unique identifier (v4 UUID).
    pub id: Uuid,
    /// 44-digit access key from the root `Id` attribute, schema prefix
    /// stripped; empty if the attribute is absent.
    pub access_key: String,
    /// Document schema this record was extracted from.
    pub kind: DocumentKind,
    /// Inbound or outbound, per the document's type flag.
    pub direction: OperationDirection,
    /// Document number (`nNF` for invoices, `nCT` for manifests).
    pub number: String,
    /// Manifest number (`nCT`); empty for invoices. Kept separately from
    /// `number` because reports show the two in separate columns.
    pub manifest_number: String,
    /// Document series (`serie`).
    pub series: String,
    /// Issue date formatted as `dd/mm/yyyy`; the raw source text when the
    /// timestamp cannot be parsed.
    pub issue_date: String,
    /// Four-digit issue year taken from the issue timestamp; empty if the
    /// document carries no timestamp.
    pub issue_year: String,
    /// Counterparty name (`xNome` of the selected party).
    pub counterparty: String,
    /// Counterparty fiscal ID, masked as CPF or CNPJ by digit count.
    pub counterparty_tax_id: String,
    /// Total value: product total (`vProd`) for invoices, service total
    /// (`vTPrest`, falling back to `vRec`) for manifests.
    pub total_value: Decimal,
    /// ICMS calculation base (`vBC`).
    pub icms_base: Decimal,
    /// PIS federal contribution.
    pub pis: TaxLine,
    /// COFINS federal contribution.
    pub cofins: TaxLine,
    /// IPI excise tax; always zero for manifests.
    pub ipi: TaxLine,
    /// ICMS state tax.
    pub icms: TaxLine,
    /// DIFAL — interstate ICMS differential owed to the destination state.
    pub difal: TaxLine,
    /// ICMS base reduction percentage (`pRedBC`).
    pub icms_base_reduction: Decimal,
}
