//! Numeric display rules shared by the geometry engine and the rendering
//! boundary
//!
//! Thread designations, fit-class labels and the XML output all format
//! numbers from the same three rules, kept here so every boundary renders
//! them identically.

/// Render a designation number: whole values print without a decimal part
/// ("8", never "8.0"), fractional values keep their shortest decimal form
/// ("6.5", "0.75").
///
/// `f64`'s `Display` already produces the shortest round-tripping decimal
/// form and drops the fractional part of whole values, which is exactly the
/// designator rule; this function is the named home of that rule.
pub fn designator(value: f64) -> String {
    value.to_string()
}

/// The digits after the decimal point of a value's shortest decimal form,
/// empty when the value is whole (0.1 -> "1", 0.25 -> "25", 2.0 -> "").
pub fn fraction_digits(value: f64) -> String {
    match value.to_string().split_once('.') {
        Some((_, fraction)) => fraction.to_string(),
        None => String::new(),
    }
}

/// Format with `digits` significant digits in general notation: fixed form
/// with trailing zeros trimmed for ordinary magnitudes, `<mantissa>e<exp>`
/// for exponents below -4 or at/above `digits`.
pub fn format_sig(value: f64, digits: usize) -> String {
    let digits = digits.max(1);
    if !value.is_finite() {
        return value.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Exponential formatting rounds to the requested significance and
    // exposes the decimal exponent of the rounded value ("{:.3e}" of
    // 9.9999 is "1.000e1").
    let exponential = format!("{:.*e}", digits - 1, value);
    let (mantissa, exponent) = match exponential.split_once('e') {
        Some(parts) => parts,
        None => return exponential,
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return exponential,
    };

    if exponent < -4 || exponent >= digits as i32 {
        format!("{}e{}", trim_fraction(mantissa), exponent)
    } else {
        let decimals = (digits as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Strip trailing zeros after the decimal point, and the point itself when
/// nothing remains behind it.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_designator_whole_values() {
        assert_eq!(designator(8.0), "8");
        assert_eq!(designator(1.0), "1");
        assert_eq!(designator(12.0), "12");
        assert_eq!(designator(60.0), "60");
    }

    #[test]
    fn test_designator_fractional_values() {
        assert_eq!(designator(6.5), "6.5");
        assert_eq!(designator(0.75), "0.75");
        assert_eq!(designator(1.25), "1.25");
        assert_eq!(designator(-2.5), "-2.5");
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(fraction_digits(0.1), "1");
        assert_eq!(fraction_digits(0.25), "25");
        assert_eq!(fraction_digits(0.125), "125");
        assert_eq!(fraction_digits(1.5), "5");
    }

    #[test]
    fn test_fraction_digits_whole_value_is_empty() {
        assert_eq!(fraction_digits(0.0), "");
        assert_eq!(fraction_digits(2.0), "");
    }

    #[test]
    fn test_format_sig_trims_trailing_zeros() {
        assert_eq!(format_sig(7.9, 4), "7.9");
        assert_eq!(format_sig(8.0, 4), "8");
        assert_eq!(format_sig(7.2504809471616703, 4), "7.25");
        assert_eq!(format_sig(10.0, 4), "10");
    }

    #[test]
    fn test_format_sig_rounds_to_significance() {
        assert_eq!(format_sig(6.8174682452696176, 4), "6.817");
        assert_eq!(format_sig(9.87654321, 4), "9.877");
        assert_eq!(format_sig(9.9999, 4), "10");
        assert_eq!(format_sig(0.86602540378, 4), "0.866");
    }

    #[test]
    fn test_format_sig_small_magnitudes_stay_fixed() {
        assert_eq!(format_sig(0.0001, 4), "0.0001");
        assert_eq!(format_sig(0.1, 4), "0.1");
    }

    #[test]
    fn test_format_sig_extreme_magnitudes_go_scientific() {
        assert_eq!(format_sig(0.00001, 4), "1e-5");
        assert_eq!(format_sig(12350.0, 4), "1.235e4");
    }

    #[test]
    fn test_format_sig_zero_and_negative() {
        assert_eq!(format_sig(0.0, 4), "0");
        assert_eq!(format_sig(-7.9, 4), "-7.9");
    }
}
