/// Number of significant digits the calculator display uses.
pub const DISPLAY_DIGITS: usize = 6;

/// Formats a value with `digits` significant digits, like C's `%.<digits>g`.
///
/// Scientific notation is used when the decimal exponent is below `-4` or at
/// least `digits`; fixed notation otherwise. Trailing zeros, and a trailing
/// decimal point, are removed. A `digits` of zero is treated as one.
///
/// ## Example
/// ```
/// use graphcalc::util::format::format_significant;
///
/// assert_eq!(format_significant(std::f64::consts::PI, 6), "3.14159");
/// assert_eq!(format_significant(1024.0, 6), "1024");
/// assert_eq!(format_significant(1_234_567.0, 6), "1.23457e+06");
/// assert_eq!(format_significant(0.000_012_5, 6), "1.25e-05");
/// ```
#[must_use]
pub fn format_significant(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        return format!("{sign}inf");
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let digits = digits.max(1);

    // Rounding to the requested precision first decides the exponent, so
    // 999999.5 correctly becomes 1e+06 rather than 999999.
    let scientific = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let precision = i64::try_from(digits).unwrap_or(i64::MAX);

    if exponent < -4 || exponent >= precision {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    } else {
        let decimals = usize::try_from(precision - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Formats a value for the calculator display, with
/// [`DISPLAY_DIGITS`] significant digits.
///
/// ## Example
/// ```
/// use graphcalc::util::format::format_display;
///
/// assert_eq!(format_display(1.0 / 3.0), "0.333333");
/// ```
#[must_use]
pub fn format_display(value: f64) -> String {
    format_significant(value, DISPLAY_DIGITS)
}

/// Removes trailing zeros after a decimal point, then the point itself.
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}
