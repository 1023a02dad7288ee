//! Arithmetic helpers for integer conversion.
//!
//! All values are f64 because the inputs are JavaScript Numbers; every helper
//! here returns +0 rather than -0.

/// IntegerPart(x): drop the fractional part, rounding toward zero.
pub fn integer_part(x: f64) -> f64 {
    x.trunc()
}

/// Round to the nearest integer, ties to the even neighbor, never -0.
///
/// Unlike `f64::round`, which rounds ties away from zero.
///
/// # Examples
///
/// ```
/// use webidl::even_round;
///
/// assert_eq!(even_round(2.5), 2.0);
/// assert_eq!(even_round(3.5), 4.0);
/// assert_eq!(even_round(-2.5), -2.0);
/// assert!(even_round(-0.4).is_sign_positive());
/// ```
pub fn even_round(x: f64) -> f64 {
    let r = x.round_ties_even();
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// 2^exponent as a Number.
///
/// Shifts are only used below 31: `1 << 31` would overflow a signed 32-bit
/// shift, so 2^31 and 2^32 are written out.
///
/// # Examples
///
/// ```
/// use webidl::pow2;
///
/// assert_eq!(pow2(8), 256.0);
/// assert_eq!(pow2(31), 2147483648.0);
/// assert_eq!(pow2(32), 4294967296.0);
/// ```
pub fn pow2(exponent: u32) -> f64 {
    match exponent {
        0..=30 => (1_i32 << exponent) as f64,
        31 => 0x8000_0000_u32 as f64,
        32 => 0x1_0000_0000_u64 as f64,
        _ => 2_f64.powi(exponent as i32),
    }
}

/// `x modulo y`: the remainder takes the sign of `y`, and a zero result is +0.
///
/// # Examples
///
/// ```
/// use webidl::modulo;
///
/// assert_eq!(modulo(-1.0, 256.0), 255.0);
/// assert_eq!(modulo(257.0, 256.0), 1.0);
/// assert!(modulo(-256.0, 256.0).is_sign_positive());
/// ```
pub fn modulo(x: f64, y: f64) -> f64 {
    let mut r = x % y;
    if r != 0.0 && (r < 0.0) != (y < 0.0) {
        r += y;
    }
    if r == 0.0 {
        0.0
    } else {
        r
    }
}
