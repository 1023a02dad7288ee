//! IDL interface types: references to platform objects.

use core_types::{JsObject, Value};

use crate::converter::Converter;
use crate::error::{make_exception, ErrorCode, WebIdlResult};
use crate::options::ConversionOptions;

/// How a value is recognized as implementing an interface
#[derive(Debug, Clone)]
pub enum Capability {
    /// The interface prototype object must be on the value's prototype chain
    Prototype(JsObject),
    /// The platform object must carry this brand
    Brand(String),
}

impl Capability {
    /// Whether `value` satisfies this capability
    pub fn is_satisfied_by(&self, value: &Value) -> bool {
        match self {
            Capability::Prototype(proto) => proto.is_prototype_of(value),
            Capability::Brand(brand) => value.as_object().is_some_and(|o| o.implements(brand)),
        }
    }
}

/// Converter for an interface type.
///
/// A conforming value is returned as the very same reference; anything else
/// is rejected with `ERR_INVALID_ARG_TYPE`, whatever code the options carry.
///
/// # Examples
///
/// ```
/// use core_types::{JsObject, Value};
/// use webidl::{Capability, ConversionOptions, Converter, InterfaceConverter};
///
/// let blob_proto = JsObject::new();
/// let blob = InterfaceConverter::new("Blob", Capability::Prototype(blob_proto.clone()));
/// let opts = ConversionOptions::default();
///
/// let instance = Value::Object(JsObject::with_prototype(&blob_proto));
/// assert_eq!(blob.convert(&instance, &opts).unwrap(), instance);
///
/// let err = blob.convert(&Value::Object(JsObject::new()), &opts).unwrap_err();
/// assert_eq!(err.message(), "Value is not of type Blob.");
/// ```
#[derive(Debug, Clone)]
pub struct InterfaceConverter {
    name: String,
    capability: Capability,
}

impl InterfaceConverter {
    /// Create a converter for interface `name`
    pub fn new(name: impl Into<String>, capability: Capability) -> Self {
        InterfaceConverter {
            name: name.into(),
            capability,
        }
    }

    /// The interface's IDL name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether `value` implements the interface
    pub fn conforms(&self, value: &Value) -> bool {
        self.capability.is_satisfied_by(value)
    }
}

impl Converter for InterfaceConverter {
    type Output = Value;

    fn convert(&self, value: &Value, options: &ConversionOptions) -> WebIdlResult<Value> {
        if self.conforms(value) {
            return Ok(value.clone());
        }
        let options = options.clone().with_code(ErrorCode::InvalidArgType);
        Err(make_exception(&format!("is not of type {}.", self.name), &options))
    }
}
