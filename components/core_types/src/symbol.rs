//! JavaScript Symbol primitive.
//!
//! Symbols are unique, immutable primitive values. They have no implicit
//! string or number form; only the explicit `String(sym)` conversion renders
//! them, as `Symbol(description)`.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for generating unique symbol IDs
static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

/// A JavaScript Symbol value
///
/// Each symbol has a unique internal ID and an optional description.
/// Equality is identity: two symbols with the same description differ.
///
/// # Examples
///
/// ```
/// use core_types::Symbol;
///
/// let a = Symbol::new(Some("tag"));
/// let b = Symbol::new(Some("tag"));
/// assert_ne!(a, b);
/// assert_eq!(a.to_string(), "Symbol(tag)");
/// ```
#[derive(Debug, Clone)]
pub struct Symbol {
    id: u64,
    description: Option<String>,
}

impl Symbol {
    /// Create a new unique symbol with optional description
    pub fn new(description: Option<&str>) -> Self {
        let id = SYMBOL_COUNTER.fetch_add(1, Ordering::SeqCst);
        Symbol {
            id,
            description: description.map(str::to_string),
        }
    }

    /// Get the unique ID of this symbol
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the description of this symbol
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description.as_deref().unwrap_or(""))
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl std::hash::Hash for Symbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
