//! Narrowing between [`Value`] and statically typed Rust values.
//!
//! The Rust types that implement these traits are exactly the owned
//! parameter types, [`Mutable<T>`](crate::Mutable): `i64`, `f64`, `bool`,
//! [`Complex`], function wrappers, `Ref<T>` for every object type, and
//! `Option` of any of them.

use sw_types::{Discipline, Ty};

use crate::classified::discipline_of;
use crate::object::ObjectType;
use crate::{CallError, Complex, Ref, Value};

/// A Rust type with a fixed source-level type.
pub trait Typed {
    /// The source-level type.
    fn ty() -> Ty;

    /// The discipline this Rust type implements.
    fn discipline() -> Discipline;
}

/// Recover a statically typed value from a [`Value`].
pub trait FromValue: Typed + Sized {
    /// Narrow `value`, handing it back unchanged if its type does not match.
    fn from_value(value: Value) -> Result<Self, Value>;
}

/// Erase a statically typed value into a [`Value`].
pub trait IntoValue {
    /// Erase `self`.
    fn into_value(self) -> Value;
}

/// Narrow `value` to `T`, describing a mismatch at `site`.
pub fn narrow<T: FromValue>(value: Value, site: impl FnOnce() -> String) -> Result<T, CallError> {
    T::from_value(value).map_err(|found| {
        let err = CallError::TypeMismatch {
            site: site(),
            expected: T::ty(),
            found: found.type_name().into_owned(),
        };
        tracing::trace!(%err, "narrowing failed");
        err
    })
}

macro_rules! impl_scalar {
    ($ty:ty, $variant:ident, $source:expr) => {
        impl Typed for $ty {
            fn ty() -> Ty {
                $source
            }

            fn discipline() -> Discipline {
                discipline_of::<$ty>()
            }
        }

        impl FromValue for $ty {
            fn from_value(value: Value) -> Result<Self, Value> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(other),
                }
            }
        }

        impl IntoValue for $ty {
            fn into_value(self) -> Value {
                Value::$variant(self)
            }
        }
    };
}

impl_scalar!(i64, Int, Ty::Int);
impl_scalar!(f64, Float, Ty::Float);
impl_scalar!(bool, Bool, Ty::Bool);
impl_scalar!(Complex, Complex, Ty::Complex);

// Object handles

impl<T: ObjectType> Typed for Ref<T> {
    fn ty() -> Ty {
        T::object_ty()
    }

    fn discipline() -> Discipline {
        discipline_of::<T>()
    }
}

impl<T: ObjectType> FromValue for Ref<T> {
    fn from_value(value: Value) -> Result<Self, Value> {
        T::narrow(value)
    }
}

impl<T: ObjectType> IntoValue for Ref<T> {
    fn into_value(self) -> Value {
        T::erase(self)
    }
}

// Optional

impl<T: Typed> Typed for Option<T> {
    /// Not flattened: `Option<Option<T>>` reports `T??`, so a wrapper using it
    /// is rejected when defined instead of losing `Some(None)` at run time.
    fn ty() -> Ty {
        Ty::Optional(Box::new(T::ty()))
    }

    fn discipline() -> Discipline {
        T::discipline()
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::None => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(v) => v.into_value(),
            None => Value::None,
        }
    }
}

#[cfg(test)]
mod tests;
