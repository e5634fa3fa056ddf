//! Display formatting for Storefront decimal amounts.

/// Parses a Storefront decimal amount string such as `"1280.0"`.
///
/// Returns `None` for empty, non-numeric or non-finite input.
#[must_use]
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Formats a raw decimal amount for display: two fractional digits with
/// comma thousands grouping (`"1234.5"` → `"1,234.50"`).
///
/// Input that is not a number is returned trimmed but otherwise unchanged.
#[must_use]
pub fn format_price(raw: &str) -> String {
    parse_amount(raw).map_or_else(|| raw.trim().to_owned(), format_amount)
}

/// Formats an already-parsed amount with the same rule as [`format_price`].
#[must_use]
pub fn format_amount(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3 + 4);
    if value < 0.0 && fixed != "0.00" {
        grouped.push('-');
    }
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped.push('.');
    grouped.push_str(fraction);
    grouped
}
