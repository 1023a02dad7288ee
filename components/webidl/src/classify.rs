//! ECMAScript `Type(V)`.
//!
//! WebIDL dispatches on the language type of a value rather than on `typeof`.
//! The two differ for `null` and for callable or host-exotic objects, which
//! are all plain `Object` here.

use std::fmt;

use core_types::Value;

/// The ECMAScript language types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// `null`
    Null,
    /// `undefined`
    Undefined,
    /// `true` / `false`
    Boolean,
    /// Any Number, including NaN and the infinities
    Number,
    /// String
    String,
    /// Symbol
    Symbol,
    /// BigInt
    BigInt,
    /// Everything else: ordinary, callable and host-exotic objects
    Object,
}

impl ValueType {
    /// The type name as written in the ECMAScript specification
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Null => "Null",
            ValueType::Undefined => "Undefined",
            ValueType::Boolean => "Boolean",
            ValueType::Number => "Number",
            ValueType::String => "String",
            ValueType::Symbol => "Symbol",
            ValueType::BigInt => "BigInt",
            ValueType::Object => "Object",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a value by its language type.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use webidl::{value_type, ValueType};
///
/// assert_eq!(value_type(&Value::Null), ValueType::Null);
/// assert_eq!(value_type(&Value::Smi(1)), ValueType::Number);
/// assert_eq!(value_type(&Value::NativeFunction("f".into())), ValueType::Object);
/// ```
pub fn value_type(value: &Value) -> ValueType {
    match value {
        Value::Null => ValueType::Null,
        Value::Undefined => ValueType::Undefined,
        Value::Boolean(_) => ValueType::Boolean,
        Value::Smi(_) | Value::Double(_) => ValueType::Number,
        Value::String(_) => ValueType::String,
        Value::Symbol(_) => ValueType::Symbol,
        Value::BigInt(_) => ValueType::BigInt,
        Value::Object(_) | Value::NativeObject(_) | Value::NativeFunction(_) => ValueType::Object,
    }
}
