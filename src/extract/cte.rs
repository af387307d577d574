//! CT-e (transport manifest) extraction.

use uuid::Uuid;

use super::dom::{Element, decimal_of, text_of};
use super::{derived_rate, round_rate};
use crate::core::{
    DocumentKind, FiscalRecord, OperationDirection, TaxLine, format_cnpj_cpf, format_issue_date,
};

/// Build a fiscal record from a `CTe` (or `cteProc`) subtree.
///
/// Unlike the NF-e, the CT-e ICMS regime node carries an explicit rate
/// (`pICMS`) and reduction (`pRedBC`), so both are read verbatim rather
/// than derived. The counterparty is the sender when present, the issuer
/// otherwise — the operation direction is not consulted here.
pub(crate) fn extract(doc: &Element) -> FiscalRecord {
    let inf_cte = doc.find("infCte");
    let ide = doc.find("ide");
    let imp = doc.find("imp");
    let v_prest = doc.find("vPrest");

    let direction = if text_of(ide, "tpCTe") == "1" {
        OperationDirection::Inbound
    } else {
        OperationDirection::Outbound
    };

    let access_key = inf_cte
        .and_then(|e| e.attr("Id"))
        .map(|id| id.strip_prefix("CTe").unwrap_or(id).to_string())
        .unwrap_or_default();

    let party = doc.find("rem").or_else(|| doc.find("emit"));
    let counterparty = text_of(party, "xNome");
    let mut tax_id = text_of(party, "CNPJ");
    if tax_id.is_empty() {
        tax_id = text_of(party, "CPF");
    }

    // imp/ICMS wraps a single regime child (ICMS00, ICMS20, ICMS90, ...).
    let regime = imp
        .and_then(|i| i.find("ICMS"))
        .and_then(|icms| icms.children().first());
    let icms_base = decimal_of(regime, "vBC");
    let icms_value = decimal_of(regime, "vICMS");
    let icms_rate = round_rate(decimal_of(regime, "pICMS"));
    let icms_base_reduction = decimal_of(regime, "pRedBC");
    let difal_value = decimal_of(regime, "vICMSUFDest");

    let mut total_value = decimal_of(v_prest, "vTPrest");
    if total_value.is_zero() {
        total_value = decimal_of(v_prest, "vRec");
    }
    let pis_value = decimal_of(imp, "vPIS");
    let cofins_value = decimal_of(imp, "vCOFINS");

    let mut issued = text_of(ide, "dhEmi");
    if issued.is_empty() {
        issued = text_of(ide, "dEmi");
    }
    let issue_year: String = issued.chars().take(4).collect();

    let number = text_of(ide, "nCT");

    FiscalRecord {
        id: Uuid::new_v4(),
        access_key,
        kind: DocumentKind::Manifest,
        direction,
        manifest_number: number.clone(),
        number,
        series: text_of(ide, "serie"),
        issue_date: format_issue_date(&issued),
        issue_year,
        counterparty,
        counterparty_tax_id: format_cnpj_cpf(&tax_id),
        total_value,
        icms_base,
        pis: TaxLine::new(derived_rate(pis_value, total_value), pis_value),
        cofins: TaxLine::new(derived_rate(cofins_value, total_value), cofins_value),
        // Manifests carry no product tax.
        ipi: TaxLine::default(),
        icms: TaxLine::new(icms_rate, icms_value),
        difal: TaxLine::new(derived_rate(difal_value, icms_base), difal_value),
        icms_base_reduction,
    }
}
