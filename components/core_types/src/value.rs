//! JavaScript value representation and the host conversion primitives.
//!
//! This module provides the core `Value` enum that represents all possible
//! JavaScript values, together with the abstract operations bindings rely on:
//! ToNumber, ToString, the `String()` function and ToBoolean.

use num_bigint::BigInt;
use num_traits::Zero;
use std::any::Any;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{JsError, JsResult};
use crate::number::{number_to_string, string_to_number};
use crate::object::JsObject;
use crate::symbol::Symbol;

/// Represents any JavaScript value.
///
/// Numbers come in two shapes: small integers (`Smi`) stored inline and
/// IEEE 754 doubles. Both are the same JavaScript Number type.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// let undefined = Value::Undefined;
/// let number = Value::Smi(42);
/// let float = Value::Double(3.14);
///
/// assert!(!undefined.is_truthy());
/// assert!(number.is_truthy());
/// assert_eq!(float.type_of(), "number");
/// ```
#[derive(Clone)]
pub enum Value {
    /// JavaScript undefined value
    Undefined,
    /// JavaScript null value
    Null,
    /// JavaScript boolean (true or false)
    Boolean(bool),
    /// Small integer (fits in 32 bits, tagged representation)
    Smi(i32),
    /// IEEE 754 double-precision floating point
    Double(f64),
    /// JavaScript string value
    String(std::string::String),
    /// JavaScript Symbol
    Symbol(Symbol),
    /// JavaScript BigInt (arbitrary precision integer)
    BigInt(BigInt),
    /// Ordinary or platform object
    Object(JsObject),
    /// Host-exotic object the engine knows nothing about
    NativeObject(Rc<RefCell<dyn Any>>),
    /// Native function reference by name
    NativeFunction(std::string::String),
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "Undefined"),
            Value::Null => write!(f, "Null"),
            Value::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Value::Smi(n) => f.debug_tuple("Smi").field(n).finish(),
            Value::Double(n) => f.debug_tuple("Double").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Symbol(s) => f.debug_tuple("Symbol").field(&s.description()).finish(),
            Value::BigInt(n) => f.debug_tuple("BigInt").field(n).finish(),
            Value::Object(o) => f.debug_tuple("Object").field(o).finish(),
            Value::NativeObject(_) => write!(f, "NativeObject(...)"),
            Value::NativeFunction(name) => f.debug_tuple("NativeFunction").field(name).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Undefined, Value::Undefined) => true,
            (Value::Null, Value::Null) => true,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Smi(a), Value::Smi(b)) => a == b,
            (Value::Double(a), Value::Double(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::BigInt(a), Value::BigInt(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::NativeObject(a), Value::NativeObject(b)) => Rc::ptr_eq(a, b),
            (Value::NativeFunction(a), Value::NativeFunction(b)) => a == b,
            _ => false,
        }
    }
}

impl Value {
    /// Returns whether this value is truthy in JavaScript semantics (ToBoolean).
    ///
    /// In JavaScript, the following values are falsy:
    /// - undefined
    /// - null
    /// - false
    /// - 0 (including -0)
    /// - NaN
    /// - "" (empty string)
    /// - 0n
    ///
    /// All other values are truthy, including all objects and symbols.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert!(!Value::Undefined.is_truthy());
    /// assert!(!Value::Null.is_truthy());
    /// assert!(!Value::Boolean(false).is_truthy());
    /// assert!(!Value::Smi(0).is_truthy());
    /// assert!(!Value::Double(f64::NAN).is_truthy());
    ///
    /// assert!(Value::Boolean(true).is_truthy());
    /// assert!(Value::Smi(42).is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Null => false,
            Value::Boolean(b) => *b,
            Value::Smi(n) => *n != 0,
            Value::Double(n) => !n.is_nan() && *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Symbol(_) => true,
            Value::BigInt(n) => !n.is_zero(),
            Value::Object(_) => true,
            Value::NativeObject(_) => true,
            Value::NativeFunction(_) => true,
        }
    }

    /// Returns the JavaScript typeof result for this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::Undefined.type_of(), "undefined");
    /// assert_eq!(Value::Null.type_of(), "object");
    /// assert_eq!(Value::Boolean(true).type_of(), "boolean");
    /// assert_eq!(Value::Smi(42).type_of(), "number");
    /// assert_eq!(Value::NativeFunction("f".into()).type_of(), "function");
    /// ```
    pub fn type_of(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "object", // JavaScript quirk
            Value::Boolean(_) => "boolean",
            Value::Smi(_) | Value::Double(_) => "number",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::BigInt(_) => "bigint",
            Value::Object(_) | Value::NativeObject(_) => "object",
            Value::NativeFunction(_) => "function",
        }
    }

    /// The object handle, if this value is an ordinary or platform object
    pub fn as_object(&self) -> Option<&JsObject> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// The numeric value, if this value is a Number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Smi(n) => Some(*n as f64),
            Value::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// ToNumber (ECMA-262 7.1.4).
    ///
    /// # Errors
    ///
    /// Symbols and BigInts cannot be implicitly converted and raise a TypeError.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    ///
    /// assert_eq!(Value::Null.to_number().unwrap(), 0.0);
    /// assert_eq!(Value::Boolean(true).to_number().unwrap(), 1.0);
    /// assert_eq!(Value::String(" 0x10 ".into()).to_number().unwrap(), 16.0);
    /// assert!(Value::Undefined.to_number().unwrap().is_nan());
    /// ```
    pub fn to_number(&self) -> JsResult<f64> {
        match self {
            Value::Undefined => Ok(f64::NAN),
            Value::Null => Ok(0.0),
            Value::Boolean(b) => Ok(if *b { 1.0 } else { 0.0 }),
            Value::Smi(n) => Ok(*n as f64),
            Value::Double(n) => Ok(*n),
            Value::String(s) => Ok(string_to_number(s)),
            Value::Symbol(_) => Err(JsError::type_error(
                "Cannot convert a Symbol value to a number",
            )),
            Value::BigInt(_) => Err(JsError::type_error(
                "Cannot convert a BigInt value to a number",
            )),
            Value::Object(o) => o.to_primitive()?.to_number(),
            Value::NativeObject(_) | Value::NativeFunction(_) => Ok(f64::NAN),
        }
    }

    /// ToString (ECMA-262 7.1.17).
    ///
    /// # Errors
    ///
    /// Symbols have no implicit string form and raise a TypeError.
    pub fn to_js_string(&self) -> JsResult<String> {
        match self {
            Value::Undefined => Ok("undefined".to_string()),
            Value::Null => Ok("null".to_string()),
            Value::Boolean(b) => Ok(b.to_string()),
            Value::Smi(n) => Ok(n.to_string()),
            Value::Double(n) => Ok(number_to_string(*n)),
            Value::String(s) => Ok(s.clone()),
            Value::Symbol(_) => Err(JsError::type_error(
                "Cannot convert a Symbol value to a string",
            )),
            Value::BigInt(n) => Ok(n.to_string()),
            Value::Object(o) => o.to_primitive()?.to_js_string(),
            Value::NativeObject(_) => Ok("[object Object]".to_string()),
            Value::NativeFunction(name) => Ok(format!("function {}() {{ [native code] }}", name)),
        }
    }

    /// The `String(value)` function: ToString, except that symbols render as
    /// their descriptive string instead of throwing.
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::{Symbol, Value};
    ///
    /// let sym = Value::Symbol(Symbol::new(Some("s")));
    /// assert_eq!(sym.string_value().unwrap(), "Symbol(s)");
    /// assert!(sym.to_js_string().is_err());
    /// ```
    pub fn string_value(&self) -> JsResult<String> {
        match self {
            Value::Symbol(s) => Ok(s.to_string()),
            other => other.to_js_string(),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Smi(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Double(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<JsObject> for Value {
    fn from(o: JsObject) -> Self {
        Value::Object(o)
    }
}

/// Display follows the `String()` function.
///
/// When an object's primitive conversion throws, the object is shown as
/// `[object Class]`.
///
/// # Examples
///
/// ```
/// use core_types::Value;
///
/// assert_eq!(Value::Undefined.to_string(), "undefined");
/// assert_eq!(Value::Null.to_string(), "null");
/// assert_eq!(Value::Boolean(true).to_string(), "true");
/// assert_eq!(Value::Double(2.5).to_string(), "2.5");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.string_value() {
            Ok(s) => f.write_str(&s),
            Err(_) => match self {
                Value::Object(o) => write!(f, "[object {}]", o.class_name()),
                _ => write!(f, "{}", self.type_of()),
            },
        }
    }
}
