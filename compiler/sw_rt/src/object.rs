//! Object-discipline types and their erased handles.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use sw_types::Ty;

use crate::{Ref, Value};

/// A type that lives behind a shared [`Ref`] handle.
///
/// Implementing this is all a generated user class needs: it becomes
/// [`Classified`](crate::Classified) as an object, and `Ref<Self>` becomes a
/// parameter and return type that narrows from and erases to [`Value`].
///
/// Built-in objects ([`Str`](crate::Str), [`DictItem`](crate::DictItem))
/// override [`erase`](Self::erase) and [`narrow`](Self::narrow) to use their
/// dedicated [`Value`] variants; user types travel as [`Value::Object`].
pub trait ObjectType: Send + Sync + Sized + 'static {
    /// The source-level type of this object.
    fn object_ty() -> Ty;

    /// Erase a handle.
    fn erase(handle: Ref<Self>) -> Value {
        Value::Object(ObjectRef::new(handle))
    }

    /// Recover a handle, returning the value untouched on mismatch.
    fn narrow(value: Value) -> Result<Ref<Self>, Value> {
        match value {
            Value::Object(obj) => obj.downcast::<Self>().map_err(Value::Object),
            other => Err(other),
        }
    }
}

/// Erased handle to a user object.
///
/// Shares the object with the typed handle it was made from; narrowing back
/// yields the same allocation.
#[derive(Clone)]
pub struct ObjectRef {
    ty: Ty,
    handle: Arc<dyn Any + Send + Sync>,
}

impl ObjectRef {
    /// Erase a typed handle.
    pub fn new<T: ObjectType>(handle: Ref<T>) -> Self {
        ObjectRef {
            ty: T::object_ty(),
            handle,
        }
    }

    /// The source-level type of the object.
    pub fn ty(&self) -> &Ty {
        &self.ty
    }

    /// Recover the typed handle.
    pub fn downcast<T: ObjectType>(self) -> Result<Ref<T>, Self> {
        let ty = self.ty;
        self.handle
            .downcast::<T>()
            .map_err(|handle| ObjectRef { ty, handle })
    }

    /// Check whether two erased handles point to the same object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.handle).cast::<()>(),
            Arc::as_ptr(&other.handle).cast::<()>(),
        )
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} object>", self.ty)
    }
}
