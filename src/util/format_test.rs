use super::*;

// =============================================================
// format_price
// =============================================================

#[test]
fn price_groups_thousands() {
    assert_eq!(format_price(0.0), "¥0");
    assert_eq!(format_price(980.0), "¥980");
    assert_eq!(format_price(1000.0), "¥1,000");
    assert_eq!(format_price(1_234_567.0), "¥1,234,567");
}

#[test]
fn price_keeps_significant_decimals() {
    assert_eq!(format_price(1234.5), "¥1,234.5");
    assert_eq!(format_price(19.99), "¥19.99");
    assert_eq!(format_price(3.004), "¥3");
}

#[test]
fn price_handles_negative_and_non_finite() {
    assert_eq!(format_price(-1500.0), "-¥1,500");
    assert_eq!(format_price(f64::NAN), "¥-");
}

// =============================================================
// format_timestamp
// =============================================================

#[test]
fn timestamp_drops_seconds_and_zone() {
    assert_eq!(format_timestamp("2024-05-01T10:42:07Z"), "2024-05-01 10:42");
    assert_eq!(format_timestamp("2024-05-01T10:42:07.123+09:00"), "2024-05-01 10:42");
}

#[test]
fn timestamp_passes_through_unrecognized_input() {
    assert_eq!(format_timestamp(""), "");
    assert_eq!(format_timestamp("yesterday"), "yesterday");
    assert_eq!(format_timestamp("2024-05-01T1"), "2024-05-01T1");
}
