/// Display-value formatting for listing cards
///
/// Every function here is a pure derivation from card props and is called
/// fresh on each view pass. None of them can fail the render: anything the
/// formatter does not understand degrades to a deterministic fallback
/// string instead of panicking.

use chrono::{Datelike, NaiveDate};

use crate::card::input::Location;

/// Format a nightly price as a zero-decimal currency string ("$1,200").
///
/// `locale` only influences the digit-grouping separator. An unknown
/// currency code or a non-finite amount falls back to
/// `"<code> <rounded amount>"` - formatting is never fatal.
pub fn format_price(amount: f64, code: &str, locale: Option<&str>) -> String {
    if !amount.is_finite() {
        return format!("{} {}", code, amount);
    }

    match currency_symbol(code) {
        Some(symbol) => {
            let rounded = amount.round() as i64;
            let digits = group_digits(rounded.unsigned_abs(), group_separator(locale));
            let sign = if rounded < 0 { "-" } else { "" };
            format!("{}{}{}", sign, symbol, digits)
        }
        None => format!("{} {}", code, amount.round() as i64),
    }
}

/// Symbol prefix for the currency codes the app knows how to render.
/// Anything else takes the fallback path in `format_price`.
fn currency_symbol(code: &str) -> Option<&'static str> {
    match code {
        "USD" => Some("$"),
        "EUR" => Some("\u{20ac}"),
        "GBP" => Some("\u{a3}"),
        "JPY" => Some("\u{a5}"),
        "CNY" => Some("CN\u{a5}"),
        "KRW" => Some("\u{20a9}"),
        "INR" => Some("\u{20b9}"),
        "BRL" => Some("R$"),
        "CAD" => Some("CA$"),
        "AUD" => Some("A$"),
        "MXN" => Some("MX$"),
        _ => None,
    }
}

/// Thousands separator by locale prefix. Unknown locales are not an
/// error; they simply get the default separator.
fn group_separator(locale: Option<&str>) -> char {
    let tag = locale.unwrap_or("en");
    let language = tag.split(['-', '_']).next().unwrap_or(tag);
    match language {
        "de" | "es" | "it" | "pt" | "nl" => '.',
        "fr" => '\u{202f}',
        _ => ',',
    }
}

/// Group an unsigned integer into blocks of three digits
fn group_digits(mut value: u64, separator: char) -> String {
    let mut blocks = Vec::new();
    loop {
        let block = value % 1000;
        value /= 1000;
        if value == 0 {
            blocks.push(block.to_string());
            break;
        }
        blocks.push(format!("{:03}", block));
    }
    blocks.reverse();
    blocks.join(&separator.to_string())
}

/// Normalize a card location to a single display string.
///
/// Absent location yields `""`; a pre-formatted string passes through
/// unchanged; structured parts are joined with ", " in city, region,
/// country order, skipping empty parts (never a double separator).
pub fn resolve_location(location: Option<&Location>) -> String {
    match location {
        None => String::new(),
        Some(Location::Formatted(text)) => text.clone(),
        Some(Location::Parts { city, region, country }) => [city, region, country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

/// Rating with at most two decimals, trailing zeros stripped:
/// 4 -> "4", 4.5 -> "4.5", 4.33 -> "4.33", 3.999 -> "4".
pub fn display_rating(rating: f64) -> String {
    let fixed = format!("{:.2}", rating);
    if !fixed.contains('.') {
        return fixed;
    }
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Aggregate rating label for assistive tooling ("Rated 4.5 out of 5")
pub fn rating_label(rating: f64) -> String {
    format!("Rated {} out of 5", display_rating(rating))
}

/// Compact availability badge: "Jun 10 - 15" within one month,
/// "Jun 28 - Jul 3" across months.
pub fn format_date_range(start: NaiveDate, end: NaiveDate) -> String {
    if start.month() == end.month() && start.year() == end.year() {
        format!("{} - {}", start.format("%b %-d"), end.day())
    } else {
        format!("{} - {}", start.format("%b %-d"), end.format("%b %-d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_whole_dollars_with_symbol() {
        assert_eq!(format_price(120.0, "USD", None), "$120");
        assert_eq!(format_price(120.4, "USD", None), "$120");
        assert_eq!(format_price(1200.0, "USD", None), "$1,200");
        assert_eq!(format_price(85.0, "EUR", None), "\u{20ac}85");
    }

    #[test]
    fn test_price_unknown_code_falls_back() {
        assert_eq!(format_price(120.0, "XYZ", None), "XYZ 120");
        assert_eq!(format_price(120.6, "XYZ", None), "XYZ 121");
    }

    #[test]
    fn test_price_non_finite_never_panics() {
        assert_eq!(format_price(f64::NAN, "USD", None), "USD NaN");
        assert_eq!(format_price(f64::INFINITY, "USD", None), "USD inf");
    }

    #[test]
    fn test_price_locale_grouping() {
        assert_eq!(format_price(1_234_567.0, "USD", Some("en-US")), "$1,234,567");
        assert_eq!(format_price(1_234_567.0, "EUR", Some("de-DE")), "\u{20ac}1.234.567");
    }

    #[test]
    fn test_price_negative_passes_through() {
        // Permissive by design: out-of-range input is not validated here
        assert_eq!(format_price(-42.0, "USD", None), "-$42");
    }

    #[test]
    fn test_resolve_location_parts() {
        let paris = Location::Parts {
            city: Some("Paris".into()),
            region: None,
            country: Some("France".into()),
        };
        assert_eq!(resolve_location(Some(&paris)), "Paris, France");

        let city_only = Location::Parts {
            city: Some("Paris".into()),
            region: None,
            country: None,
        };
        assert_eq!(resolve_location(Some(&city_only)), "Paris");

        assert_eq!(resolve_location(None), "");
    }

    #[test]
    fn test_resolve_location_skips_empty_parts() {
        let sparse = Location::Parts {
            city: Some(String::new()),
            region: Some("Bavaria".into()),
            country: Some("Germany".into()),
        };
        assert_eq!(resolve_location(Some(&sparse)), "Bavaria, Germany");
    }

    #[test]
    fn test_resolve_location_preformatted() {
        let text = Location::Formatted("Lake District, UK".into());
        assert_eq!(resolve_location(Some(&text)), "Lake District, UK");
    }

    #[test]
    fn test_display_rating_strips_trailing_zeros() {
        assert_eq!(display_rating(4.0), "4");
        assert_eq!(display_rating(4.5), "4.5");
        assert_eq!(display_rating(4.33), "4.33");
        assert_eq!(display_rating(3.999), "4");
    }

    #[test]
    fn test_rating_label() {
        assert_eq!(rating_label(4.5), "Rated 4.5 out of 5");
    }

    #[test]
    fn test_date_range_same_and_cross_month() {
        let jun10 = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let jun15 = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let jul3 = NaiveDate::from_ymd_opt(2025, 7, 3).unwrap();
        assert_eq!(format_date_range(jun10, jun15), "Jun 10 - 15");
        assert_eq!(format_date_range(jun15, jul3), "Jun 15 - Jul 3");
    }
}
