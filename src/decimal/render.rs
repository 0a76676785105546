//! Applying a parsed decimal pattern to a number.

use super::{Affixes, AffixPart, DecimalPattern, ExponentSpec, NumberSpec};
use crate::locale::Locale;

impl DecimalPattern {
    /// Format a value with this pattern.
    ///
    /// Rounding is half-even on the exact binary value, and a value that
    /// rounds to zero is shown without a sign.
    pub fn apply(&self, value: f64, locale: &Locale) -> String {
        if value.is_nan() {
            return "NaN".to_string();
        }

        let negative = value.is_sign_negative();
        let scaled = value.abs() * self.positive.multiplier();
        if scaled.is_infinite() {
            return if negative { "-Infinity" } else { "Infinity" }.to_string();
        }

        let (digits, is_zero) = match self.number.exponent {
            Some(exponent) => format_scientific(scaled, &self.number, exponent, locale),
            None => format_fixed(scaled, &self.number, locale),
        };

        let affixes = if negative && !is_zero {
            self.negative.as_ref()
        } else {
            None
        };

        let mut result = String::new();
        match affixes {
            Some(neg) => {
                push_affix(&mut result, &neg.prefix);
                result.push_str(&digits);
                push_affix(&mut result, &neg.suffix);
            }
            None => {
                if negative && !is_zero {
                    result.push('-');
                }
                let Affixes { prefix, suffix } = &self.positive;
                push_affix(&mut result, prefix);
                result.push_str(&digits);
                push_affix(&mut result, suffix);
            }
        }
        result
    }
}

fn push_affix(out: &mut String, parts: &[AffixPart]) {
    for part in parts {
        match part {
            AffixPart::Literal(s) => out.push_str(s),
            AffixPart::Percent => out.push('%'),
            AffixPart::PerMille => out.push('\u{2030}'),
        }
    }
}

/// Round `value` to `places` decimals, returning the integer and fraction
/// digit strings.
fn round_digits(value: f64, places: usize) -> (String, String) {
    let text = format!("{:.*}", places, value);
    match text.split_once('.') {
        Some((int, frac)) => (int.to_string(), frac.to_string()),
        None => (text, String::new()),
    }
}

/// Drop trailing zeros from optional fraction positions.
fn trim_fraction(frac: &mut String, min_digits: usize) {
    while frac.len() > min_digits && frac.ends_with('0') {
        frac.pop();
    }
}

/// Format a non-negative value without an exponent.
///
/// Returns the digits and whether every shown digit is zero.
fn format_fixed(value: f64, spec: &NumberSpec, locale: &Locale) -> (String, bool) {
    let (int, mut frac) = round_digits(value, spec.max_fraction_digits());
    trim_fraction(&mut frac, spec.min_fraction_digits());

    let is_zero = int.bytes().all(|b| b == b'0') && frac.bytes().all(|b| b == b'0');

    let mut int = int.trim_start_matches('0').to_string();
    let min_int = spec.min_integer_digits();
    if int.len() < min_int {
        int = format!("{}{}", "0".repeat(min_int - int.len()), int);
    }
    // Something must be shown, even for `#` or `#.##` with zero
    if int.is_empty() && frac.is_empty() {
        int.push('0');
    }

    let mut result = match spec.grouping_size {
        Some(size) => group(&int, size, locale.thousands_separator),
        None => int,
    };
    if !frac.is_empty() {
        result.push(locale.decimal_separator);
        result.push_str(&frac);
    }
    (result, is_zero)
}

/// Insert a separator every `size` digits, counted from the right.
fn group(digits: &str, size: usize, separator: char) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / size);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % size == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    result
}

/// Round a positive value to `count` significant digits, or to its shortest
/// round-trip form when `count` is `None`.
///
/// Returns the digits and the decimal exponent of the first one.
fn significant_digits(value: f64, count: Option<usize>) -> (String, i32) {
    let text = match count {
        Some(count) => format!("{:.*e}", count.saturating_sub(1), value),
        None => format!("{:e}", value),
    };
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            (mantissa.replace('.', ""), exponent.parse().unwrap_or(0))
        }
        None => (text, 0),
    }
}

/// Format a non-negative value in scientific notation.
///
/// The mantissa digits are taken from decimal formatting of the value
/// itself, so subnormals keep their digits.
fn format_scientific(
    value: f64,
    spec: &NumberSpec,
    exponent_spec: ExponentSpec,
    locale: &Locale,
) -> (String, bool) {
    let int_max = spec.integer.len();
    let int_min = spec.min_integer_digits();
    let engineering = int_max > int_min && int_max > 1;
    let places = spec.max_fraction_digits();

    // Exponent step and the mantissa bound that forces renormalizing
    let (step, int_digits) = if engineering {
        (int_max as i32, int_max as i32)
    } else {
        (1, int_min.max(1) as i32)
    };
    let exponent_for = |magnitude: i32| {
        if engineering {
            magnitude.div_euclid(step) * step
        } else {
            magnitude - (int_digits - 1)
        }
    };
    let rounded = |magnitude: i32, exponent: i32| {
        let int_count = (magnitude - exponent + 1).max(1) as usize;
        significant_digits(value, Some(int_count + places))
    };

    let (int, mut frac, exponent) = if value == 0.0 {
        ("0".to_string(), "0".repeat(places), 0)
    } else {
        let mut magnitude = significant_digits(value, None).1;
        let mut exponent = exponent_for(magnitude);
        let mut digits = rounded(magnitude, exponent);
        // The shortest form can round up to the next power of ten
        if digits.1 < magnitude {
            magnitude = digits.1;
            exponent = exponent_for(magnitude);
            digits = rounded(magnitude, exponent);
        }

        let (mut digits, first) = digits;
        // Rounding can carry into an extra integer digit (9.995 -> 10.00)
        if first - exponent + 1 > int_digits {
            exponent += step;
        }
        let int_count = (first - exponent + 1).max(1) as usize;
        // A carry leaves `1` and zeros, so padding or cutting is exact
        digits.truncate(int_count + places);
        while digits.len() < int_count + places {
            digits.push('0');
        }
        let frac = digits.split_off(int_count);
        (digits, frac, exponent)
    };

    trim_fraction(&mut frac, spec.min_fraction_digits());
    let is_zero = int.bytes().all(|b| b == b'0') && frac.bytes().all(|b| b == b'0');

    let mut int = int.trim_start_matches('0').to_string();
    if int.len() < int_min {
        int = format!("{}{}", "0".repeat(int_min - int.len()), int);
    }
    if int.is_empty() && frac.is_empty() {
        int.push('0');
    }

    let mut result = int;
    if !frac.is_empty() {
        result.push(locale.decimal_separator);
        result.push_str(&frac);
    }

    result.push('E');
    if exponent < 0 {
        result.push('-');
    } else if exponent_spec.show_plus {
        result.push('+');
    }
    result.push_str(&format!(
        "{:0>width$}",
        exponent.unsigned_abs(),
        width = exponent_spec.min_digits
    ));

    (result, is_zero)
}
