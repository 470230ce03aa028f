//! Type-level disciplines and the derived parameter types.
//!
//! Emitted code never names a passing convention directly. It writes
//! `Const<'_, T>`, `Mutable<T>` or `Optional<T>` and the discipline of `T`
//! picks the shape:
//!
//! | alias | value `T` | object `T` |
//! |---|---|---|
//! | `Const<'a, T>` | `T` | `&'a Ref<T>` |
//! | `Mutable<T>` | `T` | `Ref<T>` |
//! | `Optional<T>` | `Option<T>` | `Option<Ref<T>>` |
//! | `absent::<T>()` | `None` | `None` (null handle) |

use std::sync::Arc;

use sw_types::Discipline;

use crate::object::ObjectType;

/// Shared, reference-counted handle to an object-discipline type.
pub type Ref<T> = Arc<T>;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::ValueKind {}
    impl Sealed for super::ObjectKind {}
}

/// Marker for one of the two disciplines.
///
/// Sealed: [`ValueKind`] and [`ObjectKind`] are the only implementors.
pub trait DisciplineKind: sealed::Sealed + 'static {
    /// The discipline this marker stands for.
    const DISCIPLINE: Discipline;

    /// Read-only parameter type.
    type Const<'a, T: 'a>;

    /// Owned parameter type.
    type Mutable<T>;
}

/// Marker for value-discipline types.
#[derive(Debug)]
pub enum ValueKind {}

/// Marker for object-discipline types.
#[derive(Debug)]
pub enum ObjectKind {}

impl DisciplineKind for ValueKind {
    const DISCIPLINE: Discipline = Discipline::Value;
    type Const<'a, T: 'a> = T;
    type Mutable<T> = T;
}

impl DisciplineKind for ObjectKind {
    const DISCIPLINE: Discipline = Discipline::Object;
    type Const<'a, T: 'a> = &'a Ref<T>;
    type Mutable<T> = Ref<T>;
}

/// A concrete type with a fixed discipline.
///
/// Implemented here for the built-in value set (`i64`, `f64`, `bool`,
/// [`Complex`](crate::Complex)), for function wrappers, and for every
/// [`ObjectType`].
pub trait Classified: Sized + 'static {
    /// [`ValueKind`] or [`ObjectKind`].
    type Kind: DisciplineKind;

    /// Read-only view of an owned parameter.
    ///
    /// Copies a value; borrows an object handle without touching its
    /// reference count.
    fn as_const(owned: &Mutable<Self>) -> Const<'_, Self>;
}

/// Read-only parameter type for `T`.
pub type Const<'a, T> = <<T as Classified>::Kind as DisciplineKind>::Const<'a, T>;

/// Owned parameter type for `T`.
pub type Mutable<T> = <<T as Classified>::Kind as DisciplineKind>::Mutable<T>;

/// Optional parameter type for `T`.
///
/// Both disciplines use `Option`, so presence is tested the same way for
/// either.
pub type Optional<T> = Option<Mutable<T>>;

/// The absent sentinel for `T`.
#[inline]
pub const fn absent<T: Classified>() -> Optional<T> {
    None
}

/// Wrap an owned parameter as present.
#[inline]
pub fn present<T: Classified>(owned: Mutable<T>) -> Optional<T> {
    Some(owned)
}

/// The discipline of `T`.
#[inline]
pub fn discipline_of<T: Classified>() -> Discipline {
    <T::Kind as DisciplineKind>::DISCIPLINE
}

macro_rules! impl_value_classified {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Classified for $ty {
                type Kind = ValueKind;

                #[inline]
                fn as_const(owned: &$ty) -> $ty {
                    *owned
                }
            }
        )*
    };
}

impl_value_classified!(i64, f64, bool, crate::Complex);

impl<T: ObjectType> Classified for T {
    type Kind = ObjectKind;

    #[inline]
    fn as_const(owned: &Ref<T>) -> &Ref<T> {
        owned
    }
}

#[cfg(test)]
mod tests;
