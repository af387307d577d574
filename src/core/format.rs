//! Normalizers for dates, fiscal IDs, and report-facing number strings.

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Format an issue timestamp as a pt-BR calendar date (`dd/mm/yyyy`).
///
/// Only the date portion before any `T` separator is considered, so both
/// `dhEmi` (`2024-03-15T10:30:00-03:00`) and `dEmi` (`2024-03-15`) work.
/// Unparseable input passes through unchanged.
pub fn format_issue_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let date_part = raw.split('T').next().unwrap_or(raw);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Mask a fiscal ID as CPF or CNPJ depending on digit count.
///
/// Non-digit characters are stripped first. 11 digits produce the CPF mask
/// `###.###.###-##`, 14 digits the CNPJ mask `##.###.###/####-##`. Any other
/// length returns the input unchanged — no padding, no rejection.
pub fn format_cnpj_cpf(value: &str) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.len() {
        11 => format!(
            "{}.{}.{}-{}",
            &digits[0..3],
            &digits[3..6],
            &digits[6..9],
            &digits[9..11]
        ),
        14 => format!(
            "{}.{}.{}/{}-{}",
            &digits[0..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..12],
            &digits[12..14]
        ),
        _ => value.to_string(),
    }
}

/// Format a rate as a percent string with two decimal places, e.g. `18.00%`.
pub fn format_percent(value: Decimal) -> String {
    format!("{:.2}%", value)
}

/// Format an amount as a pt-BR currency string, e.g. `R$ 1.234,56`.
///
/// Negative amounts keep the sign in front of the digits.
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::new();
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("R$ {sign}{grouped},{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn cpf_mask() {
        assert_eq!(format_cnpj_cpf("12345678901"), "123.456.789-01");
    }

    #[test]
    fn cnpj_mask() {
        assert_eq!(format_cnpj_cpf("12345678000199"), "12.345.678/0001-99");
    }

    #[test]
    fn mask_strips_existing_punctuation() {
        assert_eq!(format_cnpj_cpf("12.345.678/0001-99"), "12.345.678/0001-99");
        assert_eq!(format_cnpj_cpf("123.456.789-01"), "123.456.789-01");
    }

    #[test]
    fn mask_passes_other_lengths_through() {
        assert_eq!(format_cnpj_cpf(""), "");
        assert_eq!(format_cnpj_cpf("1234"), "1234");
        assert_eq!(format_cnpj_cpf("123456789012345"), "123456789012345");
    }

    #[test]
    fn issue_date_from_timestamp() {
        assert_eq!(format_issue_date("2024-03-15T10:30:00-03:00"), "15/03/2024");
        assert_eq!(format_issue_date("2024-03-15"), "15/03/2024");
    }

    #[test]
    fn issue_date_passthrough_on_garbage() {
        assert_eq!(format_issue_date("not-a-date"), "not-a-date");
        assert_eq!(format_issue_date(""), "");
    }

    #[test]
    fn percent_fixed_two_decimals() {
        assert_eq!(format_percent(dec!(18)), "18.00%");
        assert_eq!(format_percent(dec!(1.65)), "1.65%");
        assert_eq!(format_percent(dec!(0)), "0.00%");
    }

    #[test]
    fn brl_grouping_and_decimals() {
        assert_eq!(format_brl(dec!(1234.56)), "R$ 1.234,56");
        assert_eq!(format_brl(dec!(0)), "R$ 0,00");
        assert_eq!(format_brl(dec!(1000000)), "R$ 1.000.000,00");
        assert_eq!(format_brl(dec!(-42.5)), "R$ -42,50");
    }
}
