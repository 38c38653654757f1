//! Formatting helpers for presenting summary figures.

use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

/// Fractional digits needed to print any finite `f64` exactly (2^-1074).
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Fixed-point rendering, e.g. `format_fixed(12.345, 2) == "12.35"`.
///
/// Rounds like JavaScript's `Number.prototype.toFixed`: the exact binary value is expanded
/// and a tie goes away from zero, so `0.125` gives `"0.13"` while `1.005` (stored as
/// `1.00499…`) gives `"1.00"`. `format!` alone would round ties to even.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let exact = format!(
        "{:.*}",
        EXACT_FRACTION_DIGITS.max(decimals + 1),
        value.abs()
    );
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().take(decimals))
        .collect();
    let mut whole_len = whole.len();

    if fraction.as_bytes().get(decimals).is_some_and(|next| *next >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            whole_len += 1;
        }
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if value < 0.0 {
        out.push('-');
    }
    for (index, digit) in digits.into_iter().enumerate() {
        if index == whole_len {
            out.push('.');
        }
        out.push(char::from(digit));
    }
    out
}

/// Compact label for an RFC 3339 upload timestamp: `Mar 4 · 14:05`.
/// Unparseable input is shown verbatim.
pub fn format_upload_time(raw: &str) -> String {
    match OffsetDateTime::parse(raw, &Rfc3339) {
        Ok(stamp) => {
            let date = stamp
                .format(&format_description!("[month repr:short] [day padding:none]"))
                .unwrap_or_else(|_| "—".to_string());
            let time = stamp
                .format(&format_description!("[hour]:[minute]"))
                .unwrap_or_else(|_| "—".to_string());
            format!("{date} · {time}")
        }
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_rounds_to_two_places() {
        assert_eq!(format_fixed(12.345, 2), "12.35");
        assert_eq!(format_fixed(1.0, 2), "1.00");
        assert_eq!(format_fixed(0.0, 2), "0.00");
    }

    #[test]
    fn fixed_rounds_exact_ties_up() {
        assert_eq!(format_fixed(0.125, 2), "0.13");
        assert_eq!(format_fixed(0.375, 2), "0.38");
        assert_eq!(format_fixed(80.625, 2), "80.63");
        assert_eq!(format_fixed(-0.125, 2), "-0.13");
    }

    #[test]
    fn fixed_follows_stored_value_not_literal() {
        assert_eq!(format_fixed(1.005, 2), "1.00");
        assert_eq!(format_fixed(2.675, 2), "2.67");
        assert_eq!(format_fixed(9.995, 2), "9.99");
    }

    #[test]
    fn fixed_carries_into_whole_part() {
        assert_eq!(format_fixed(99.995, 2), "100.00");
        assert_eq!(format_fixed(0.5, 0), "1");
        assert_eq!(format_fixed(1234.0, 0), "1234");
    }

    #[test]
    fn upload_time_is_compacted() {
        assert_eq!(format_upload_time("2025-03-04T14:05:09Z"), "Mar 4 · 14:05");
    }

    #[test]
    fn garbage_timestamp_passes_through() {
        assert_eq!(format_upload_time("yesterday"), "yesterday");
    }
}
