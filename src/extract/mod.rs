//! Document classification and extraction.
//!
//! Raw XML text goes in, one [`FiscalRecord`] or an [`ExtractError`] comes
//! out. The classifier routes by root element: `NFe`/`nfeProc` to the
//! invoice extractor, `CTe`/`cteProc` to the manifest extractor. Invoice
//! detection runs first, so a document that somehow carried both markers
//! would deterministically be treated as an invoice.
//!
//! Extraction is permissive by design: a recognized document always yields
//! a record, with absent or unparseable fields degraded to empty strings
//! or zero amounts. Only non-XML input and unknown schemas fail.

mod cte;
pub(crate) mod dom;
mod nfe;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::{ExtractError, FiscalRecord};

/// Extract a fiscal record from raw document text.
///
/// `file_name` labels errors for diagnostics; it is never parsed.
pub fn extract_document(xml: &str, file_name: &str) -> Result<FiscalRecord, ExtractError> {
    let doc = dom::parse(xml).map_err(|message| ExtractError::MalformedDocument {
        file: file_name.to_string(),
        message,
    })?;

    if let Some(root) = doc.find("NFe").or_else(|| doc.find("nfeProc")) {
        Ok(nfe::extract(root))
    } else if let Some(root) = doc.find("CTe").or_else(|| doc.find("cteProc")) {
        Ok(cte::extract(root))
    } else {
        Err(ExtractError::UnrecognizedSchema {
            file: file_name.to_string(),
        })
    }
}

/// Derive a percentage rate from an amount and its base:
/// `(amount / base) × 100`, zero when the base is not positive.
pub(crate) fn derived_rate(amount: Decimal, base: Decimal) -> Decimal {
    if base > Decimal::ZERO {
        round_rate(amount / base * Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    }
}

/// Round a rate to two decimal places (midpoint away from zero), clamped at
/// zero so rates are never negative.
pub(crate) fn round_rate(rate: Decimal) -> Decimal {
    rate.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .max(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn derived_rate_cases() {
        assert_eq!(derived_rate(dec!(180), dec!(1000)), dec!(18.00));
        assert_eq!(derived_rate(dec!(16.5), dec!(1000)), dec!(1.65));
        assert_eq!(derived_rate(dec!(1), dec!(3)), dec!(33.33));
        assert_eq!(derived_rate(dec!(500), Decimal::ZERO), Decimal::ZERO);
        assert_eq!(derived_rate(dec!(500), dec!(-10)), Decimal::ZERO);
    }

    #[test]
    fn round_rate_clamps_negative() {
        assert_eq!(round_rate(dec!(-3)), Decimal::ZERO);
        assert_eq!(round_rate(dec!(12.345)), dec!(12.35));
    }
}
