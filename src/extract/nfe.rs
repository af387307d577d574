//! NF-e (electronic invoice) extraction.

use rust_decimal::Decimal;
use uuid::Uuid;

use super::dom::{Element, decimal_of, text_of};
use super::derived_rate;
use crate::core::{
    DocumentKind, FiscalRecord, OperationDirection, TaxLine, format_cnpj_cpf, format_issue_date,
};

/// Build a fiscal record from an `NFe` (or `nfeProc`) subtree.
///
/// The NF-e schema carries tax amounts in the document-level `ICMSTot`
/// block but no document-level rates, so every rate here is derived:
/// ICMS against its own base, PIS/COFINS/IPI against the product total,
/// and DIFAL against the ICMS base.
pub(crate) fn extract(doc: &Element) -> FiscalRecord {
    let inf_nfe = doc.find("infNFe");
    let ide = doc.find("ide");
    let emit = doc.find("emit");
    let dest = doc.find("dest");
    let icms_tot = doc.find("total").and_then(|t| t.find("ICMSTot"));

    let direction = if text_of(ide, "tpNF") == "0" {
        OperationDirection::Inbound
    } else {
        OperationDirection::Outbound
    };

    let access_key = inf_nfe
        .and_then(|e| e.attr("Id"))
        .map(|id| id.strip_prefix("NFe").unwrap_or(id).to_string())
        .unwrap_or_default();

    // Outbound documents report the recipient, inbound ones the issuer.
    let party = match direction {
        OperationDirection::Outbound => dest,
        OperationDirection::Inbound => emit,
    };
    let counterparty = text_of(party, "xNome");
    let mut tax_id = text_of(party, "CNPJ");
    if tax_id.is_empty() {
        tax_id = text_of(party, "CPF");
    }

    let icms_base = decimal_of(icms_tot, "vBC");
    let icms_value = decimal_of(icms_tot, "vICMS");
    let total_value = decimal_of(icms_tot, "vProd");
    let pis_value = decimal_of(icms_tot, "vPIS");
    let cofins_value = decimal_of(icms_tot, "vCOFINS");
    let ipi_value = decimal_of(icms_tot, "vIPI");
    let difal_value = decimal_of(icms_tot, "vICMSUFDest");

    // pRedBC lives on the product line, one level below whichever ICMS
    // regime node the first item uses (ICMS00, ICMS20, ICMSSN102, ...).
    let icms_base_reduction = doc
        .find("det")
        .and_then(|det| det.find("ICMS"))
        .and_then(|icms| icms.children().first())
        .map(|regime| decimal_of(Some(regime), "pRedBC"))
        .unwrap_or(Decimal::ZERO);

    let mut issued = text_of(ide, "dhEmi");
    if issued.is_empty() {
        issued = text_of(ide, "dEmi");
    }
    let issue_year: String = issued.chars().take(4).collect();

    FiscalRecord {
        id: Uuid::new_v4(),
        access_key,
        kind: DocumentKind::Invoice,
        direction,
        number: text_of(ide, "nNF"),
        manifest_number: String::new(),
        series: text_of(ide, "serie"),
        issue_date: format_issue_date(&issued),
        issue_year,
        counterparty,
        counterparty_tax_id: format_cnpj_cpf(&tax_id),
        total_value,
        icms_base,
        pis: TaxLine::new(derived_rate(pis_value, total_value), pis_value),
        cofins: TaxLine::new(derived_rate(cofins_value, total_value), cofins_value),
        ipi: TaxLine::new(derived_rate(ipi_value, total_value), ipi_value),
        icms: TaxLine::new(derived_rate(icms_value, icms_base), icms_value),
        difal: TaxLine::new(derived_rate(difal_value, icms_base), difal_value),
        icms_base_reduction,
    }
}
