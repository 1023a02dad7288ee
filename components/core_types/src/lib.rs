//! Core JavaScript value types and host primitives.
//!
//! This crate provides the value model a binding layer consumes from the
//! host runtime, together with the abstract operations it relies on.
//!
//! # Overview
//!
//! - [`Value`] - Tagged representation of JavaScript values
//! - [`JsObject`] - Shared object handle with prototype chain and brands
//! - [`HostIterator`] - The iteration protocol (`obj[Symbol.iterator]()`)
//! - [`JsError`] - JavaScript errors raised by host operations
//! - [`ErrorKind`] - Types of JavaScript errors
//!
//! # Examples
//!
//! ```
//! use core_types::{Value, JsError, ErrorKind};
//!
//! // Create JavaScript values
//! let num = Value::Smi(42);
//! assert!(num.is_truthy());
//! assert_eq!(num.type_of(), "number");
//! assert_eq!(Value::String("1.5".into()).to_number().unwrap(), 1.5);
//!
//! // Create an error
//! let error = JsError::type_error("undefined is not a function");
//! assert_eq!(error.kind, ErrorKind::TypeError);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
pub mod number;
mod object;
mod symbol;
mod value;

pub use error::{ErrorKind, JsError, JsResult};
pub use object::{HostIterator, IteratorFactory, IteratorResult, JsObject, ListIterator, ObjectData};
pub use symbol::Symbol;
pub use value::Value;
