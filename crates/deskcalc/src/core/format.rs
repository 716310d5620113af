//! Display formatting for computed results

/// Decimal places kept for non-integral results
const FRACTION_DIGITS: usize = 6;

/// Formats a computed value for the display.
///
/// Whole numbers print without a fractional part. Anything else prints with
/// six decimal places, then trailing zeros and a dangling `.` are removed.
#[must_use]
pub fn format_result(value: f64) -> String {
    if value == (value as i64) as f64 {
        return format!("{value:.0}");
    }
    let fixed = format!("{:.*}", FRACTION_DIGITS, value);
    if !fixed.contains('.') {
        return fixed;
    }
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
