//! The type-erased value carried across the call boundary.
//!
//! [`Value`] is a tagged variant over exactly the known discipline set. It
//! exists only at the marshalling boundary: binders narrow it into typed
//! parameters before any implementation runs, and results are erased back
//! into it only when a caller asked for an erased call.

use std::borrow::Cow;
use std::fmt;

use sw_types::Discipline;

use crate::{Complex, DynFunction, ObjectRef, Ref, Str, Tuple};

/// Erased runtime value.
///
/// Cloning copies value variants and bumps the reference count of object
/// variants; it never deep-copies an object.
#[derive(Clone)]
pub enum Value {
    /// The absent sentinel. Narrows only into optional parameters.
    None,

    // Value discipline (inline)
    /// Integer.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Complex number.
    Complex(Complex),
    /// Function value.
    Function(DynFunction),

    // Object discipline (shared handles)
    /// String.
    Str(Ref<Str>),
    /// Tuple, including dictionary items.
    Tuple(Ref<Tuple>),
    /// User-defined object.
    Object(ObjectRef),
}

// Factory methods

impl Value {
    /// Create an integer value.
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Int(n)
    }

    /// Create a float value.
    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    /// Create a complex value.
    #[inline]
    pub fn complex(real: i64, imag: i64) -> Self {
        Value::Complex(Complex::new(real, imag))
    }

    /// Create a string value.
    ///
    /// ```text
    /// let s = Value::string("hello");
    /// ```
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(Ref::new(Str::new(s)))
    }

    /// Create a tuple value.
    ///
    /// ```text
    /// let pair = Value::tuple(vec![Value::string("k"), Value::int(5)]);
    /// ```
    #[inline]
    pub fn tuple(slots: Vec<Value>) -> Self {
        Value::Tuple(Ref::new(Tuple::new(slots)))
    }
}

// Value methods

impl Value {
    /// Check if this is the absent sentinel.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// The discipline of the carried value; `None` for the absent sentinel.
    pub fn discipline(&self) -> Option<Discipline> {
        match self {
            Value::None => None,
            Value::Int(_)
            | Value::Float(_)
            | Value::Bool(_)
            | Value::Complex(_)
            | Value::Function(_) => Some(Discipline::Value),
            Value::Str(_) | Value::Tuple(_) | Value::Object(_) => Some(Discipline::Object),
        }
    }

    /// Try to read an integer.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Try to read a float.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to read a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to borrow a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Source-level name of the carried type, for error messages.
    pub fn type_name(&self) -> Cow<'static, str> {
        match self {
            Value::None => Cow::Borrowed("None"),
            Value::Int(_) => Cow::Borrowed("int"),
            Value::Float(_) => Cow::Borrowed("float"),
            Value::Bool(_) => Cow::Borrowed("bool"),
            Value::Complex(_) => Cow::Borrowed("complex"),
            Value::Str(_) => Cow::Borrowed("str"),
            Value::Tuple(t) => {
                let slots: Vec<_> = t.iter().map(Value::type_name).collect();
                Cow::Owned(match slots.as_slice() {
                    [only] => format!("({only},)"),
                    _ => format!("({})", slots.join(", ")),
                })
            }
            Value::Function(f) => Cow::Owned(f.signature().fn_ty().to_string()),
            Value::Object(obj) => Cow::Owned(obj.ty().to_string()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Int(n) => write!(f, "Int({n})"),
            Value::Float(x) => write!(f, "Float({x})"),
            Value::Bool(b) => write!(f, "Bool({b})"),
            Value::Complex(c) => write!(f, "Complex{c}"),
            Value::Str(s) => write!(f, "Str({:?})", s.as_str()),
            Value::Tuple(t) => write!(f, "Tuple{t:?}"),
            Value::Function(func) => write!(f, "{func:?}"),
            Value::Object(obj) => write!(f, "{obj:?}"),
        }
    }
}
