//! Display formatting, fixed to the fr-FR locale and euros.

use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

/// Between the amount and the currency symbol.
const CURRENCY_SPACING: char = '\u{00A0}';
pub const EMPTY_PLACEHOLDER: &str = "-";

/// `18000.0` renders as `"18 000,00 €"`, grouped with the fr locale's
/// narrow no-break space.
///
/// Cents are rounded half away from zero, applied to the float product
/// `amount * 100.0`: `0.125` becomes `0,13 €`. Since that product carries
/// its own float error, amounts near a half cent can land either way
/// (`1.115` gives `1,12 €` although its binary value is just below).
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round();
    let negative = cents < 0.0;
    let cents = cents.abs() as u64;

    let units = (cents / 100).to_formatted_string(&Locale::fr);
    let sign = if negative { "-" } else { "" };

    format!("{}{},{:02}{}€", sign, units, cents % 100, CURRENCY_SPACING)
}

/// Renders an ISO `YYYY-MM-DD` date as `DD/MM/YYYY`.
///
/// Absent dates render as `-`. Anything that does not parse is shown as is.
pub fn format_date(iso_date: Option<&str>) -> String {
    match iso_date {
        None => EMPTY_PLACEHOLDER.to_string(),
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => format_naive_date(Some(date)),
            Err(_) => raw.to_string(),
        },
    }
}

pub fn format_naive_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => EMPTY_PLACEHOLDER.to_string(),
    }
}

/// `en_retard` -> `en retard`. No translation, no capitalisation.
pub fn format_status(status_code: &str) -> String {
    status_code.replace('_', " ")
}

pub fn format_percent(value: u32) -> String {
    format!("{value}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(18000.0), "18\u{202F}000,00\u{00A0}€");
        assert_eq!(format_currency(1234567.891), "1\u{202F}234\u{202F}567,89\u{00A0}€");
        assert_eq!(format_currency(999.5), "999,50\u{00A0}€");
        assert_eq!(format_currency(0.0), "0,00\u{00A0}€");
    }

    #[test]
    fn currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(0.125), "0,13\u{00A0}€");
        assert_eq!(format_currency(-0.125), "-0,13\u{00A0}€");
        assert_eq!(format_currency(2.994), "2,99\u{00A0}€");
        assert_eq!(format_currency(1.115), "1,12\u{00A0}€");
        assert_eq!(format_currency(999.996), "1\u{202F}000,00\u{00A0}€");
    }

    #[test]
    fn currency_negative_amounts() {
        assert_eq!(format_currency(-4500.0), "-4\u{202F}500,00\u{00A0}€");
        assert_eq!(format_currency(-0.001), "0,00\u{00A0}€");
    }

    #[test]
    fn dates_render_day_first() {
        assert_eq!(format_date(Some("2024-07-15")), "15/07/2024");
        assert_eq!(
            format_naive_date(NaiveDate::from_ymd_opt(2024, 1, 5)),
            "05/01/2024"
        );
    }

    #[test]
    fn missing_date_renders_placeholder() {
        assert_eq!(format_date(None), "-");
        assert_eq!(format_naive_date(None), "-");
    }

    #[test]
    fn malformed_date_passes_through() {
        assert_eq!(format_date(Some("bientôt")), "bientôt");
    }

    #[test]
    fn status_replaces_every_underscore() {
        assert_eq!(format_status("en_retard"), "en retard");
        assert_eq!(format_status("hors_service"), "hors service");
        assert_eq!(format_status("a_b_c"), "a b c");
        assert_eq!(format_status("payee"), "payee");
    }

    #[test]
    fn percent() {
        assert_eq!(format_percent(62), "62%");
    }
}
