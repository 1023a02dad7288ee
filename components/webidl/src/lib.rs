//! WebIDL value conversions for host API bindings.
//!
//! This crate converts arbitrary host values into values of WebIDL types,
//! following the abstract conversion algorithms of the WebIDL standard:
//! - Integer types (`byte` .. `unsigned long long`) with `[EnforceRange]` and `[Clamp]`
//! - `DOMString`, `boolean`, `object`, `any`
//! - Enumerations, sequences, nullable types and interface types
//!
//! Every failure is a [`WebIdlError`] whose message names the offending value
//! and whose code tells the error kind apart (`ERR_INVALID_ARG_TYPE`,
//! `ERR_INVALID_ARG_VALUE`, `ERR_MISSING_ARGS`).
//!
//! # Example
//!
//! ```
//! use core_types::{JsObject, Value};
//! use webidl::{ConversionOptions, Converter, IntegerType, SequenceConverter};
//!
//! let octets = SequenceConverter::new(IntegerType::Octet.converter());
//! let input = Value::Object(JsObject::array(vec![
//!     Value::Smi(1),
//!     Value::Double(257.0),
//!     Value::String("0x10".into()),
//! ]));
//!
//! let out = octets.convert(&input, &ConversionOptions::default()).unwrap();
//! assert_eq!(out, vec![1.0, 1.0, 16.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod arguments;
pub mod classify;
pub mod converter;
pub mod enumeration;
pub mod error;
pub mod integer;
pub mod interface;
pub mod nullable;
pub mod numeric;
pub mod options;
pub mod sequence;

// Re-export main types for convenience
pub use arguments::required_arguments;
pub use classify::{value_type, ValueType};
pub use converter::{any, dom_string, Any, Boolean, Converter, DomString, Object};
pub use enumeration::EnumConverter;
pub use error::{
    coded_type_error, invalid_arg_value, make_exception, CoercionError, ErrorCode, WebIdlError,
    WebIdlResult,
};
pub use integer::{
    convert_to_int, IntegerBounds, IntegerConverter, IntegerType, UnknownIntegerType,
    MAX_SAFE_INTEGER,
};
pub use interface::{Capability, InterfaceConverter};
pub use nullable::NullableConverter;
pub use numeric::{even_round, integer_part, modulo, pow2};
pub use options::{ConversionOptions, DEFAULT_CONTEXT};
pub use sequence::SequenceConverter;
