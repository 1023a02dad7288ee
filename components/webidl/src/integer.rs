//! ConvertToInt and the IDL integer types.
//!
//! Implements https://webidl.spec.whatwg.org/#abstract-opdef-converttoint.
//! Results are integral f64 values, the host's Number domain.

use std::fmt;
use std::str::FromStr;

use core_types::Value;

use crate::converter::Converter;
use crate::error::{invalid_arg_value, WebIdlResult};
use crate::numeric::{even_round, integer_part, modulo, pow2};
use crate::options::ConversionOptions;

/// 2^53 - 1
pub const MAX_SAFE_INTEGER: f64 = 9007199254740991.0;

/// Inclusive range of an integer type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegerBounds {
    /// Smallest accepted value
    pub lower: f64,
    /// Largest accepted value
    pub upper: f64,
}

impl IntegerBounds {
    /// Bounds for a `bit_length`-bit integer.
    ///
    /// 64-bit types are limited to ±(2^53 - 1).
    ///
    /// # Examples
    ///
    /// ```
    /// use webidl::IntegerBounds;
    ///
    /// let b = IntegerBounds::new(8, true);
    /// assert_eq!((b.lower, b.upper), (-128.0, 127.0));
    ///
    /// let b = IntegerBounds::new(64, false);
    /// assert_eq!((b.lower, b.upper), (0.0, 9007199254740991.0));
    /// ```
    pub fn new(bit_length: u32, signed: bool) -> Self {
        if bit_length == 64 {
            let lower = if signed { -MAX_SAFE_INTEGER } else { 0.0 };
            IntegerBounds {
                lower,
                upper: MAX_SAFE_INTEGER,
            }
        } else if !signed {
            IntegerBounds {
                lower: 0.0,
                upper: pow2(bit_length) - 1.0,
            }
        } else {
            let half = pow2(bit_length.saturating_sub(1));
            IntegerBounds {
                lower: -half,
                upper: half - 1.0,
            }
        }
    }

    /// Whether `x` lies within the bounds
    pub fn contains(&self, x: f64) -> bool {
        self.lower <= x && x <= self.upper
    }
}

/// Convert `value` to an integer of `bit_length` bits.
///
/// `name` labels the value in error messages. Only `[EnforceRange]`
/// conversions fail (besides host errors from ToNumber); every other input,
/// NaN and the infinities included, has a defined result.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use webidl::{convert_to_int, ConversionOptions};
///
/// let opts = ConversionOptions::default();
/// assert_eq!(convert_to_int("x", &Value::Smi(256), 8, &opts).unwrap(), 0.0);
///
/// let signed = ConversionOptions::default().with_signed(true);
/// assert_eq!(convert_to_int("x", &Value::Smi(-1), 8, &signed).unwrap(), -1.0);
///
/// let clamp = ConversionOptions::default().with_clamp(true);
/// assert_eq!(convert_to_int("x", &Value::Double(2.5), 8, &clamp).unwrap(), 2.0);
///
/// let enforce = ConversionOptions::default().with_enforce_range(true);
/// assert!(convert_to_int("x", &Value::Smi(300), 8, &enforce).is_err());
/// ```
pub fn convert_to_int(
    name: &str,
    value: &Value,
    bit_length: u32,
    options: &ConversionOptions,
) -> WebIdlResult<f64> {
    let bounds = IntegerBounds::new(bit_length, options.signed);

    let mut x = value.to_number()?;
    if x == 0.0 {
        x = 0.0;
    }

    if options.enforce_range {
        if !x.is_finite() {
            return Err(invalid_arg_value(name, &Value::Double(x), options));
        }
        let x = integer_part(x);
        if !bounds.contains(x) {
            return Err(invalid_arg_value(name, &Value::Double(x), options));
        }
        return Ok(x + 0.0);
    }

    if options.clamp && !x.is_nan() {
        return Ok(even_round(x.max(bounds.lower).min(bounds.upper)));
    }

    if !x.is_finite() || x == 0.0 {
        return Ok(0.0);
    }

    let x = integer_part(x);
    if !options.signed {
        return Ok(modulo(x, pow2(bit_length)));
    }

    // x modulo 2^n, then minus 2^n when >= 2^(n-1), folded into one step so
    // small negative 64-bit inputs stay exact
    let m = pow2(bit_length);
    let half = pow2(bit_length.saturating_sub(1));
    let r = x % m;
    let r = if r >= half {
        r - m
    } else if r < -half {
        r + m
    } else {
        r
    };
    Ok(r + 0.0)
}

/// Converter for a fixed integer width and signedness.
///
/// `[EnforceRange]` / `[Clamp]` may be attached to the converter itself or
/// passed per call in the options; either source enables them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerConverter {
    bit_length: u32,
    signed: bool,
    enforce_range: bool,
    clamp: bool,
}

impl IntegerConverter {
    /// Converter for `bit_length`-bit integers
    pub fn new(bit_length: u32, signed: bool) -> Self {
        IntegerConverter {
            bit_length,
            signed,
            enforce_range: false,
            clamp: false,
        }
    }

    /// Attach `[EnforceRange]`
    pub fn enforce_range(mut self) -> Self {
        self.enforce_range = true;
        self
    }

    /// Attach `[Clamp]`
    pub fn clamp(mut self) -> Self {
        self.clamp = true;
        self
    }

    /// Width in bits
    pub fn bit_length(&self) -> u32 {
        self.bit_length
    }

    /// Whether the signed range is used
    pub fn is_signed(&self) -> bool {
        self.signed
    }

    /// Range of accepted results
    pub fn bounds(&self) -> IntegerBounds {
        IntegerBounds::new(self.bit_length, self.signed)
    }
}

impl Converter for IntegerConverter {
    type Output = f64;

    fn convert(&self, value: &Value, options: &ConversionOptions) -> WebIdlResult<f64> {
        let effective = ConversionOptions {
            signed: self.signed,
            enforce_range: self.enforce_range || options.enforce_range,
            clamp: self.clamp || options.clamp,
            ..options.clone()
        };
        convert_to_int(options.context_label(), value, self.bit_length, &effective)
    }
}

/// The WebIDL integer types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerType {
    /// `byte`: signed 8-bit
    Byte,
    /// `octet`: unsigned 8-bit
    Octet,
    /// `short`: signed 16-bit
    Short,
    /// `unsigned short`
    UnsignedShort,
    /// `long`: signed 32-bit
    Long,
    /// `unsigned long`
    UnsignedLong,
    /// `long long`: signed 64-bit, limited to the safe integer range
    LongLong,
    /// `unsigned long long`
    UnsignedLongLong,
}

impl IntegerType {
    /// Every integer type, narrowest first
    pub const ALL: [IntegerType; 8] = [
        IntegerType::Byte,
        IntegerType::Octet,
        IntegerType::Short,
        IntegerType::UnsignedShort,
        IntegerType::Long,
        IntegerType::UnsignedLong,
        IntegerType::LongLong,
        IntegerType::UnsignedLongLong,
    ];

    /// Width in bits
    pub fn bit_length(&self) -> u32 {
        match self {
            IntegerType::Byte | IntegerType::Octet => 8,
            IntegerType::Short | IntegerType::UnsignedShort => 16,
            IntegerType::Long | IntegerType::UnsignedLong => 32,
            IntegerType::LongLong | IntegerType::UnsignedLongLong => 64,
        }
    }

    /// Whether the type is signed
    pub fn is_signed(&self) -> bool {
        matches!(
            self,
            IntegerType::Byte | IntegerType::Short | IntegerType::Long | IntegerType::LongLong
        )
    }

    /// The type name as written in IDL
    pub fn idl_name(&self) -> &'static str {
        match self {
            IntegerType::Byte => "byte",
            IntegerType::Octet => "octet",
            IntegerType::Short => "short",
            IntegerType::UnsignedShort => "unsigned short",
            IntegerType::Long => "long",
            IntegerType::UnsignedLong => "unsigned long",
            IntegerType::LongLong => "long long",
            IntegerType::UnsignedLongLong => "unsigned long long",
        }
    }

    /// A converter for this type
    pub fn converter(&self) -> IntegerConverter {
        IntegerConverter::new(self.bit_length(), self.is_signed())
    }
}

impl fmt::Display for IntegerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.idl_name())
    }
}

/// Returned when parsing a name that is not an IDL integer type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{0}' is not a WebIDL integer type")]
pub struct UnknownIntegerType(pub String);

impl FromStr for IntegerType {
    type Err = UnknownIntegerType;

    /// Parse an IDL type name such as `"unsigned long"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ");
        IntegerType::ALL
            .into_iter()
            .find(|t| t.idl_name() == normalized)
            .ok_or_else(|| UnknownIntegerType(s.to_string()))
    }
}
