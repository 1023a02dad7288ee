//! Number <-> String conversions used by the host primitives.
//!
//! - [`string_to_number`] implements StringToNumber (ECMA-262 7.1.4.1.1)
//! - [`number_to_string`] implements Number::toString with radix 10
//!   (ECMA-262 6.1.6.1.20), using `ryu` for the shortest round-trip digits

use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// ECMAScript WhiteSpace and LineTerminator code points
fn is_js_whitespace(c: char) -> bool {
    match c {
        '\t' | '\u{0B}' | '\u{0C}' | ' ' | '\u{A0}' | '\u{FEFF}' => true,
        // category Zs
        '\u{1680}' | '\u{2000}'..='\u{200A}' | '\u{202F}' | '\u{205F}' | '\u{3000}' => true,
        '\n' | '\r' | '\u{2028}' | '\u{2029}' => true,
        _ => false,
    }
}

/// Convert a string to a number following JavaScript's `Number(string)` rules.
///
/// # Examples
///
/// ```
/// use core_types::number::string_to_number;
///
/// assert_eq!(string_to_number("  42  "), 42.0);
/// assert_eq!(string_to_number(""), 0.0);
/// assert_eq!(string_to_number("0x1F"), 31.0);
/// assert!(string_to_number("12px").is_nan());
/// ```
pub fn string_to_number(s: &str) -> f64 {
    let s = s.trim_matches(is_js_whitespace);
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_non_decimal(&s[2..], radix);
    }

    // Rust's float grammar also accepts "inf"/"nan" spellings, which JS does not
    let decimal_chars = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !decimal_chars || !s.chars().any(|c| c.is_ascii_digit()) {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_non_decimal(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return f64::NAN;
    }
    BigInt::parse_bytes(digits.as_bytes(), radix)
        .and_then(|n| n.to_f64())
        .unwrap_or(f64::NAN)
}

/// Format a number the way JavaScript's `String(number)` does.
///
/// # Examples
///
/// ```
/// use core_types::number::number_to_string;
///
/// assert_eq!(number_to_string(1.0), "1");
/// assert_eq!(number_to_string(0.1), "0.1");
/// assert_eq!(number_to_string(1e21), "1e+21");
/// assert_eq!(number_to_string(-0.0), "0");
/// assert_eq!(number_to_string(f64::NAN), "NaN");
/// ```
pub fn number_to_string(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if x < 0.0 {
        return format!("-{}", number_to_string(-x));
    }

    let mut buffer = ryu::Buffer::new();
    let repr = buffer.format_finite(x);
    let (mantissa, exponent) = match repr.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (repr, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    // digits * 10^(n - k), with no leading or trailing zeros in digits
    let mut digits = format!("{int_part}{frac_part}");
    let mut n = int_part.len() as i32 + exponent;
    while digits.len() > 1 && digits.starts_with('0') {
        digits.remove(0);
        n -= 1;
    }
    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
    }
    let k = digits.len() as i32;

    if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (head, tail) = digits.split_at(n as usize);
        format!("{head}.{tail}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let sign = if e < 0 { '-' } else { '+' };
        let (head, tail) = digits.split_at(1);
        if tail.is_empty() {
            format!("{head}e{sign}{}", e.abs())
        } else {
            format!("{head}.{tail}e{sign}{}", e.abs())
        }
    }
}
