//! The string wrapper.

use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

use sw_types::Ty;

use crate::object::ObjectType;
use crate::{Ref, Value};

/// Source-language string.
///
/// Wraps native `String` storage and converts to it implicitly (`Deref` to
/// `str`, `From<Str> for String`). Not part of the built-in value set, so it
/// travels as an object handle ([`Ref<Str>`]); its contents are immutable
/// once shared.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Str(String);

impl Str {
    /// Create a string.
    pub fn new(s: impl Into<String>) -> Self {
        Str(s.into())
    }

    /// The contents as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Unwrap into the native string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Str {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Str {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Str {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Str {
    fn from(s: &str) -> Self {
        Str(s.to_string())
    }
}

impl From<String> for Str {
    fn from(s: String) -> Self {
        Str(s)
    }
}

impl From<Str> for String {
    fn from(s: Str) -> Self {
        s.0
    }
}

impl From<&Str> for String {
    fn from(s: &Str) -> Self {
        s.0.clone()
    }
}

impl fmt::Display for Str {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl ObjectType for Str {
    fn object_ty() -> Ty {
        Ty::Str
    }

    fn erase(handle: Ref<Self>) -> Value {
        Value::Str(handle)
    }

    fn narrow(value: Value) -> Result<Ref<Self>, Value> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(other),
        }
    }
}
