//! Display formatting for catalog values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Yen price with thousands separators and at most two decimals
/// (`1234.5` -> `¥1,234.5`).
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "¥-".to_owned();
    }
    let sign = if price < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", price.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = format!("{sign}¥{}", group_thousands(whole));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Render an RFC 3339 timestamp as `YYYY-MM-DD HH:MM`. Anything that does not
/// look like one is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let Some((date, time)) = raw.split_once('T') else {
        return raw.to_owned();
    };
    let well_formed =
        date.len() == 10 && time.is_char_boundary(5) && time.as_bytes().get(2) == Some(&b':');
    if !well_formed {
        return raw.to_owned();
    }
    format!("{date} {}", &time[..5])
}
