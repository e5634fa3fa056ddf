use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Tag-driven discount policy resolved from the store's discount-settings
/// metaobject.
///
/// Constructed fresh for every catalog fetch and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiscountSettings {
    pub prescription_enabled: bool,
    pub prescription_percentage: f64,
    pub parasite_enabled: bool,
    pub parasite_percentage: f64,
    pub default_enabled: bool,
    pub default_percentage: f64,
}

impl DiscountSettings {
    /// Policy applied when the metaobject cannot be fetched or does not exist:
    /// prescription 10%, parasite 10%, default 5%, all enabled.
    #[must_use]
    pub const fn fallback() -> Self {
        Self {
            prescription_enabled: true,
            prescription_percentage: 10.0,
            parasite_enabled: true,
            parasite_percentage: 10.0,
            default_enabled: true,
            default_percentage: 5.0,
        }
    }

    /// Parses a metaobject field list (`key` → `value`) into settings.
    ///
    /// Later duplicates of a key win. Unknown keys are ignored. A boolean is
    /// `true` only for the literal string `"true"`. A percentage is read from
    /// the longest numeric prefix of its value (`"15%"` is 15); one with no
    /// numeric prefix, or a non-finite one, becomes `0`.
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<&'a str>)>,
    {
        let map: HashMap<&str, Option<&str>> = fields.into_iter().collect();
        let text = |key: &str| map.get(key).copied().flatten();

        let flag = |key: &str| text(key) == Some("true");
        let percentage = |key: &str| {
            text(key)
                .and_then(leading_float)
                .filter(|value| value.is_finite())
                .unwrap_or(0.0)
        };

        Self {
            prescription_enabled: flag("prescription_enabled"),
            prescription_percentage: percentage("prescription_percentage"),
            parasite_enabled: flag("parasite_enabled"),
            parasite_percentage: percentage("parasite_percentage"),
            default_enabled: flag("default_enabled"),
            default_percentage: percentage("default_percentage"),
        }
    }
}

/// Parses the longest decimal float at the start of `raw`, after leading
/// whitespace. Trailing text is ignored.
fn leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - end - 1;
        if frac_end > end + 1 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}
