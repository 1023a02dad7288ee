//! Host objects, prototype chains and the default iteration protocol.
//!
//! A [`JsObject`] is a shared handle; cloning it clones the reference, never
//! the object. Identity is tested with [`JsObject::ptr_eq`].

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::rc::Rc;

use crate::error::JsResult;
use crate::value::Value;

/// A JavaScript iterator as produced by `obj[Symbol.iterator]()`.
///
/// `next` returns the raw iterator result. A well-behaved iterator returns an
/// object with `done` and `value` properties (see [`IteratorResult`]); a
/// misbehaving one may return anything.
pub trait HostIterator {
    /// Advance the iterator.
    fn next(&mut self) -> JsResult<Value>;
}

/// Produces a fresh iterator for an iterable object.
pub type IteratorFactory = Rc<dyn Fn(&JsObject) -> Box<dyn HostIterator>>;

/// Iterator result object `{ value, done }`
#[derive(Debug, Clone, PartialEq)]
pub struct IteratorResult {
    /// The value produced by the iterator
    pub value: Value,
    /// Whether the iterator is exhausted
    pub done: bool,
}

impl IteratorResult {
    /// Create a result carrying a value
    pub fn value(v: Value) -> Self {
        IteratorResult {
            value: v,
            done: false,
        }
    }

    /// Create a done result
    pub fn done() -> Self {
        IteratorResult {
            value: Value::Undefined,
            done: true,
        }
    }

    /// Convert to its object representation
    pub fn to_value(&self) -> Value {
        let obj = JsObject::new();
        obj.set("value", self.value.clone());
        obj.set("done", Value::Boolean(self.done));
        Value::Object(obj)
    }

    /// Read an iterator result object.
    ///
    /// Returns `None` when `result` is not an object. `done` counts only when
    /// it is exactly `true`; a missing `value` reads as undefined.
    pub fn from_value(result: &Value) -> Option<Self> {
        let obj = result.as_object()?;
        let done = matches!(obj.get("done"), Some(Value::Boolean(true)));
        let value = obj.get("value").unwrap_or(Value::Undefined);
        Some(IteratorResult { value, done })
    }
}

/// Internal object state
pub struct ObjectData {
    /// Class name used by `Object.prototype.toString` (`[object Class]`)
    pub class_name: String,
    /// `[[Prototype]]`
    pub prototype: Option<JsObject>,
    /// Own string-keyed properties
    pub properties: HashMap<String, Value>,
    /// `[[PrimitiveValue]]` for wrapper objects, or the result of a custom `valueOf`
    pub primitive_value: Option<Value>,
    /// Array elements, for array exotic objects
    pub elements: Option<Vec<Value>>,
    /// Interfaces this platform object implements
    pub brands: HashSet<String>,
    /// Custom `[Symbol.iterator]` behavior
    pub iterator: Option<IteratorFactory>,
}

impl Default for ObjectData {
    fn default() -> Self {
        ObjectData {
            class_name: "Object".to_string(),
            prototype: None,
            properties: HashMap::new(),
            primitive_value: None,
            elements: None,
            brands: HashSet::new(),
            iterator: None,
        }
    }
}

/// Shared handle to a host object.
///
/// # Examples
///
/// ```
/// use core_types::{JsObject, Value};
///
/// let proto = JsObject::new();
/// let obj = JsObject::with_prototype(&proto);
/// obj.set("answer", Value::Smi(42));
///
/// assert!(proto.is_prototype_of(&Value::Object(obj.clone())));
/// assert_eq!(obj.get("answer"), Some(Value::Smi(42)));
/// ```
#[derive(Clone)]
pub struct JsObject(Rc<RefCell<ObjectData>>);

impl JsObject {
    /// Create an ordinary object with no prototype
    pub fn new() -> Self {
        Self::from_data(ObjectData::default())
    }

    /// Create an object from prepared internal data
    pub fn from_data(data: ObjectData) -> Self {
        JsObject(Rc::new(RefCell::new(data)))
    }

    /// Create an ordinary object inheriting from `proto`
    pub fn with_prototype(proto: &JsObject) -> Self {
        Self::from_data(ObjectData {
            prototype: Some(proto.clone()),
            ..ObjectData::default()
        })
    }

    /// Create an array holding `elements`
    pub fn array(elements: Vec<Value>) -> Self {
        Self::from_data(ObjectData {
            class_name: "Array".to_string(),
            elements: Some(elements),
            ..ObjectData::default()
        })
    }

    /// Create a wrapper object (`new Number(1)`, `new String("a")`, ...)
    pub fn wrapper(primitive: Value) -> Self {
        let class_name = match &primitive {
            Value::Boolean(_) => "Boolean",
            Value::Smi(_) | Value::Double(_) => "Number",
            Value::String(_) => "String",
            Value::Symbol(_) => "Symbol",
            Value::BigInt(_) => "BigInt",
            _ => "Object",
        };
        Self::from_data(ObjectData {
            class_name: class_name.to_string(),
            primitive_value: Some(primitive),
            ..ObjectData::default()
        })
    }

    /// Create an object whose `[Symbol.iterator]` is `factory`
    pub fn iterable<F>(factory: F) -> Self
    where
        F: Fn(&JsObject) -> Box<dyn HostIterator> + 'static,
    {
        Self::from_data(ObjectData {
            iterator: Some(Rc::new(factory)),
            ..ObjectData::default()
        })
    }

    /// Whether both handles refer to the same object
    pub fn ptr_eq(&self, other: &JsObject) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Class name of this object
    pub fn class_name(&self) -> String {
        self.0.borrow().class_name.clone()
    }

    /// `[[Prototype]]` of this object
    pub fn prototype(&self) -> Option<JsObject> {
        self.0.borrow().prototype.clone()
    }

    /// Replace `[[Prototype]]`
    pub fn set_prototype(&self, proto: Option<JsObject>) {
        self.0.borrow_mut().prototype = proto;
    }

    /// Property lookup along the prototype chain
    pub fn get(&self, key: &str) -> Option<Value> {
        let data = self.0.borrow();
        if let Some(elements) = &data.elements {
            if key == "length" {
                return Some(Value::Double(elements.len() as f64));
            }
            if let Ok(index) = key.parse::<usize>() {
                if let Some(v) = elements.get(index) {
                    return Some(v.clone());
                }
            }
        }
        if let Some(v) = data.properties.get(key) {
            return Some(v.clone());
        }
        let proto = data.prototype.clone();
        drop(data);
        proto.and_then(|p| p.get(key))
    }

    /// Set an own property
    pub fn set(&self, key: &str, value: Value) {
        let mut data = self.0.borrow_mut();
        data.properties.insert(key.to_string(), value);
    }

    /// Append an element to an array object. Ordinary objects are unaffected.
    pub fn push(&self, value: Value) {
        if let Some(elements) = self.0.borrow_mut().elements.as_mut() {
            elements.push(value);
        }
    }

    /// Mark this platform object as implementing `interface`
    pub fn add_brand(&self, interface: &str) {
        self.0.borrow_mut().brands.insert(interface.to_string());
    }

    /// Whether this platform object implements `interface`
    pub fn implements(&self, interface: &str) -> bool {
        self.0.borrow().brands.contains(interface)
    }

    /// `Object.prototype.isPrototypeOf`: is `self` on the prototype chain of `value`?
    pub fn is_prototype_of(&self, value: &Value) -> bool {
        let Some(obj) = value.as_object() else {
            return false;
        };
        let mut current = obj.prototype();
        while let Some(proto) = current {
            if proto.ptr_eq(self) {
                return true;
            }
            current = proto.prototype();
        }
        false
    }

    /// `GetIterator(obj, sync)` using the default `[Symbol.iterator]`.
    ///
    /// Arrays and String wrappers are iterable; other objects only when they
    /// carry an iterator factory.
    pub fn get_iterator(&self) -> Option<Box<dyn HostIterator>> {
        let factory = self.0.borrow().iterator.clone();
        if let Some(factory) = factory {
            return Some(factory(self));
        }
        let data = self.0.borrow();
        if data.elements.is_some() {
            return Some(Box::new(ArrayIterator {
                array: self.clone(),
                index: 0,
            }));
        }
        if let Some(Value::String(s)) = &data.primitive_value {
            let chars: Vec<Value> = s.chars().map(|c| Value::String(c.to_string())).collect();
            return Some(Box::new(ListIterator::new(chars)));
        }
        None
    }

    /// `ToPrimitive(obj, number)`
    ///
    /// Wrapper objects yield their primitive value, arrays the result of
    /// `join(",")`, everything else `"[object Class]"`. An array reached again
    /// while it is being joined renders as the empty string.
    pub fn to_primitive(&self) -> JsResult<Value> {
        self.to_primitive_with(&mut Vec::new())
    }

    fn to_primitive_with(&self, joining: &mut Vec<JsObject>) -> JsResult<Value> {
        let data = self.0.borrow();
        if let Some(primitive) = &data.primitive_value {
            return Ok(primitive.clone());
        }
        let Some(elements) = &data.elements else {
            return Ok(Value::String(format!("[object {}]", data.class_name)));
        };
        if joining.iter().any(|o| o.ptr_eq(self)) {
            return Ok(Value::String(String::new()));
        }
        let elements = elements.clone();
        drop(data);

        joining.push(self.clone());
        let parts = elements
            .iter()
            .map(|v| match v {
                Value::Undefined | Value::Null => Ok(String::new()),
                Value::Object(o) => o.to_primitive_with(joining)?.to_js_string(),
                other => other.to_js_string(),
            })
            .collect::<JsResult<Vec<_>>>();
        joining.pop();
        Ok(Value::String(parts?.join(",")))
    }
}

impl Default for JsObject {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for JsObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.try_borrow() {
            Ok(data) => f.debug_tuple("JsObject").field(&data.class_name).finish(),
            Err(_) => write!(f, "JsObject(<borrowed>)"),
        }
    }
}

/// Live iterator over an array object
struct ArrayIterator {
    array: JsObject,
    index: usize,
}

impl HostIterator for ArrayIterator {
    fn next(&mut self) -> JsResult<Value> {
        let element = {
            let data = self.array.0.borrow();
            data.elements.as_ref().and_then(|e| e.get(self.index).cloned())
        };
        let result = match element {
            Some(v) => {
                self.index += 1;
                IteratorResult::value(v)
            }
            None => IteratorResult::done(),
        };
        Ok(result.to_value())
    }
}

/// Iterator over a fixed list of values, yielding well-formed results.
pub struct ListIterator {
    values: std::vec::IntoIter<Value>,
}

impl ListIterator {
    /// Create an iterator yielding `values` in order
    pub fn new(values: Vec<Value>) -> Self {
        ListIterator {
            values: values.into_iter(),
        }
    }
}

impl HostIterator for ListIterator {
    fn next(&mut self) -> JsResult<Value> {
        let result = match self.values.next() {
            Some(v) => IteratorResult::value(v),
            None => IteratorResult::done(),
        };
        Ok(result.to_value())
    }
}
