//! Parsers for the text fields of a transaction record

use super::error::GainsError;
use super::record::Shares;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

pub const DATE_FORMAT: &str = "%m/%d/%Y";

const CURRENCY_SYMBOL: char = '$';

/// Parse a MM/DD/YYYY date
pub fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, GainsError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        GainsError::InvalidDateFormat {
            field,
            value: value.to_string(),
        }
    })
}

/// Parse a dollar amount such as "$1,234.56".
///
/// The leading symbol is optional but must be `$`; any other prefix is an error.
pub fn parse_money(field: &'static str, value: &str) -> Result<Decimal, GainsError> {
    let trimmed = value.trim();
    let amount = trimmed.strip_prefix(CURRENCY_SYMBOL).unwrap_or(trimmed);
    parse_plain_decimal(amount).ok_or_else(|| invalid_amount(field, value))
}

/// Parse a share quantity, given either as JSON text or a JSON number
pub fn parse_shares(shares: &Shares) -> Result<Decimal, GainsError> {
    match shares {
        Shares::Text(text) => {
            parse_plain_decimal(text.trim()).ok_or_else(|| invalid_amount("Shares", text))
        }
        Shares::Number(number) => {
            let text = number.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .map_err(|_| invalid_amount("Shares", &text))
        }
    }
}

fn parse_plain_decimal(s: &str) -> Option<Decimal> {
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-' | '+'))
    {
        return None;
    }
    Decimal::from_str(&without_grouping(s)?).ok()
}

/// Remove `,` thousands separators, rejecting commas anywhere else.
///
/// The integer part must be a leading group of one to three digits followed by
/// groups of exactly three. The fraction may not contain commas.
fn without_grouping(s: &str) -> Option<String> {
    if !s.contains(',') {
        return Some(s.to_string());
    }
    let unsigned = s.trim_start_matches(['+', '-']);
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };
    if fraction.is_some_and(|f| f.contains(',')) {
        return None;
    }

    let mut groups = integer.split(',');
    let leading = groups.next()?;
    if leading.is_empty() || leading.len() > 3 || groups.any(|g| g.len() != 3) {
        return None;
    }
    Some(s.replace(',', ""))
}

fn invalid_amount(field: &'static str, value: &str) -> GainsError {
    GainsError::InvalidMonetaryFormat {
        field,
        value: value.to_string(),
    }
}
