//! Conversions from raw form text to payload values.

/// Split a comma-delimited field into trimmed, non-empty pieces.
///
/// Order follows the text; duplicates are kept.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a coordinate from its leading number, so `"40.7N"` reads as 40.7.
/// Text with no numeric prefix, or a non-finite value, is unknown.
pub fn parse_coordinate(raw: &str) -> Option<f64> {
    numeric_prefix(raw, true)
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Parse a head count from its leading integer, so `"12.5"` reads as 12 and
/// `"200 people"` as 200. Text with no numeric prefix counts as zero.
pub fn parse_count(raw: &str) -> i64 {
    numeric_prefix(raw, false).parse::<i64>().unwrap_or(0)
}

/// Longest leading slice of `raw` (after leading whitespace) that reads as a
/// number: an optional sign and digits, plus a fraction and exponent when
/// `decimal` is set. Empty when there are no mantissa digits.
fn numeric_prefix(raw: &str, decimal: bool) -> &str {
    let text = raw.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        start + bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
    };

    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut end = digits_from(sign);
    let mut mantissa_digits = end - sign;

    if decimal {
        if bytes.get(end) == Some(&b'.') {
            let fraction_end = digits_from(end + 1);
            mantissa_digits += fraction_end - (end + 1);
            if mantissa_digits > 0 {
                end = fraction_end;
            }
        }
        if mantissa_digits > 0 && matches!(bytes.get(end), Some(b'e' | b'E')) {
            let exp_sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
            let exp_end = digits_from(end + 1 + exp_sign);
            if exp_end > end + 1 + exp_sign {
                end = exp_end;
            }
        }
    }

    if mantissa_digits == 0 {
        return "";
    }
    &text[..end]
}
