//! Fixed-arity heterogeneous containers.
//!
//! [`Tuple`] is the storage base: erased slots, indexed access only.
//! [`TypedTuple`] and [`DictItem`] are typed views over a tuple; as
//! parameters they only bind when every slot narrows to its static type.
//!
//! Neither type implements `PartialEq`. Whether two tuples compare by
//! content or by identity is for the concrete source type to decide.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;
use std::sync::Arc;

use sw_types::Ty;

use crate::classified::{Classified, ObjectKind};
use crate::narrow::{narrow, FromValue, IntoValue};
use crate::object::ObjectType;
use crate::{CallError, Ref, Value};

/// Ordered, fixed-length sequence of erased slots.
#[derive(Clone)]
pub struct Tuple {
    slots: Arc<[Value]>,
}

impl Tuple {
    /// Create a tuple; its arity is fixed from here on.
    pub fn new(slots: Vec<Value>) -> Self {
        Tuple {
            slots: slots.into(),
        }
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the tuple has no slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Borrow the slot at `index`.
    pub fn get(&self, index: usize) -> Result<&Value, CallError> {
        self.slots.get(index).ok_or(CallError::IndexOutOfRange {
            index,
            len: self.slots.len(),
        })
    }

    /// Narrow the slot at `index` to `T`.
    pub fn narrow<T: FromValue>(&self, index: usize) -> Result<T, CallError> {
        narrow_slot(&self.slots, index)
    }

    /// All slots in order.
    pub fn as_slice(&self) -> &[Value] {
        &self.slots
    }

    /// Iterate over the slots in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.slots.iter()
    }
}

impl fmt::Debug for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut t = f.debug_tuple("");
        for slot in self.slots.iter() {
            t.field(slot);
        }
        t.finish()
    }
}

impl Classified for Tuple {
    type Kind = ObjectKind;

    #[inline]
    fn as_const(owned: &Ref<Tuple>) -> &Ref<Tuple> {
        owned
    }
}

fn narrow_slot<T: FromValue>(slots: &[Value], index: usize) -> Result<T, CallError> {
    let slot = slots.get(index).ok_or(CallError::IndexOutOfRange {
        index,
        len: slots.len(),
    })?;
    narrow(slot.clone(), || format!("slot {index} of tuple"))
}

fn slot_conforms<T: FromValue>(slots: &[Value], index: usize) -> bool {
    slots
        .get(index)
        .is_some_and(|slot| T::from_value(slot.clone()).is_ok())
}

/// Static element types of a typed tuple view.
///
/// Implemented for Rust tuples of up to eight element types; `(i64, Ref<Str>)`
/// describes the source type `(int, str)`.
pub trait TupleElements: Sized + 'static {
    /// Number of elements.
    const ARITY: usize;

    /// Source-level element types, in order.
    fn tys() -> Vec<Ty>;

    /// Check that `slots` has the right length and every slot narrows.
    fn conforms(slots: &[Value]) -> bool;

    /// Narrow every slot, failing on the first that does not.
    fn from_slots(slots: &[Value]) -> Result<Self, CallError>;

    /// Erase every element, in order.
    fn into_slots(self) -> Vec<Value>;
}

fn check_len(expected: usize, slots: &[Value]) -> Result<(), CallError> {
    if slots.len() == expected {
        Ok(())
    } else {
        Err(CallError::ArityMismatch {
            function: "tuple".into(),
            expected,
            got: slots.len(),
        })
    }
}

impl TupleElements for () {
    const ARITY: usize = 0;

    fn tys() -> Vec<Ty> {
        Vec::new()
    }

    fn conforms(slots: &[Value]) -> bool {
        slots.is_empty()
    }

    fn from_slots(slots: &[Value]) -> Result<Self, CallError> {
        check_len(0, slots)
    }

    fn into_slots(self) -> Vec<Value> {
        Vec::new()
    }
}

macro_rules! impl_tuple_elements {
    ($arity:literal; $($index:tt $elem:ident),+) => {
        impl<$($elem: FromValue + IntoValue + 'static),+> TupleElements for ($($elem,)+) {
            const ARITY: usize = $arity;

            fn tys() -> Vec<Ty> {
                vec![$($elem::ty()),+]
            }

            fn conforms(slots: &[Value]) -> bool {
                slots.len() == $arity $(&& slot_conforms::<$elem>(slots, $index))+
            }

            fn from_slots(slots: &[Value]) -> Result<Self, CallError> {
                check_len($arity, slots)?;
                Ok(($(narrow_slot::<$elem>(slots, $index)?,)+))
            }

            fn into_slots(self) -> Vec<Value> {
                vec![$(self.$index.into_value()),+]
            }
        }
    };
}

impl_tuple_elements!(1; 0 A);
impl_tuple_elements!(2; 0 A, 1 B);
impl_tuple_elements!(3; 0 A, 1 B, 2 C);
impl_tuple_elements!(4; 0 A, 1 B, 2 C, 3 D);
impl_tuple_elements!(5; 0 A, 1 B, 2 C, 3 D, 4 E);
impl_tuple_elements!(6; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_tuple_elements!(7; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_tuple_elements!(8; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);

/// A tuple whose slots have static element types `E`.
///
/// Carries the source type `(t0, t1, ..)`, so it can be a parameter or a
/// return type. The slots are checked when the view is made.
pub struct TypedTuple<E> {
    base: Ref<Tuple>,
    _types: PhantomData<fn() -> E>,
}

impl<E: TupleElements> TypedTuple<E> {
    /// Create a typed tuple from its elements.
    pub fn new(elements: E) -> Self {
        TypedTuple {
            base: Ref::new(Tuple::new(elements.into_slots())),
            _types: PhantomData,
        }
    }

    /// View a tuple as typed, checking its arity and every slot.
    pub fn from_tuple(base: Ref<Tuple>) -> Result<Self, CallError> {
        E::from_slots(&base.slots)?;
        Ok(TypedTuple {
            base,
            _types: PhantomData,
        })
    }

    /// Narrow every slot to its static type.
    pub fn unpack(&self) -> Result<E, CallError> {
        E::from_slots(&self.base.slots)
    }
}

impl<E> TypedTuple<E> {
    /// The underlying tuple.
    pub fn base(&self) -> &Ref<Tuple> {
        &self.base
    }
}

impl<E> Deref for TypedTuple<E> {
    type Target = Tuple;

    fn deref(&self) -> &Tuple {
        &self.base
    }
}

impl<E> Clone for TypedTuple<E> {
    fn clone(&self) -> Self {
        TypedTuple {
            base: Ref::clone(&self.base),
            _types: PhantomData,
        }
    }
}

impl<E> fmt::Debug for TypedTuple<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.base, f)
    }
}

impl<E: TupleElements> ObjectType for TypedTuple<E> {
    fn object_ty() -> Ty {
        Ty::tuple(E::tys())
    }

    fn erase(handle: Ref<Self>) -> Value {
        Value::Tuple(Ref::clone(&handle.base))
    }

    fn narrow(value: Value) -> Result<Ref<Self>, Value> {
        match value {
            Value::Tuple(base) if E::conforms(&base.slots) => Ok(Ref::new(TypedTuple {
                base,
                _types: PhantomData,
            })),
            other => Err(other),
        }
    }
}

/// A dictionary entry: a two-slot tuple whose key and value have static
/// types.
///
/// The slots stay erased until [`unpack`](Self::unpack), which narrows both
/// or neither.
pub struct DictItem<K, V> {
    base: Ref<Tuple>,
    _types: PhantomData<fn() -> (K, V)>,
}

impl<K, V> DictItem<K, V> {
    /// View a two-slot tuple as a dictionary item.
    ///
    /// Only the arity is checked here; slot types are checked by
    /// [`unpack`](Self::unpack).
    pub fn from_tuple(base: Ref<Tuple>) -> Result<Self, CallError> {
        if base.len() != 2 {
            return Err(CallError::ArityMismatch {
                function: "DictItem".into(),
                expected: 2,
                got: base.len(),
            });
        }
        Ok(DictItem {
            base,
            _types: PhantomData,
        })
    }

    /// The underlying tuple.
    pub fn base(&self) -> &Ref<Tuple> {
        &self.base
    }

    /// The erased key slot.
    pub fn key_slot(&self) -> &Value {
        &self.base.slots[0]
    }

    /// The erased value slot.
    pub fn value_slot(&self) -> &Value {
        &self.base.slots[1]
    }
}

impl<K: IntoValue, V: IntoValue> DictItem<K, V> {
    /// Create a dictionary item from typed parts.
    pub fn new(key: K, value: V) -> Self {
        DictItem {
            base: Ref::new(Tuple::new(vec![key.into_value(), value.into_value()])),
            _types: PhantomData,
        }
    }
}

impl<K: FromValue, V: FromValue> DictItem<K, V> {
    /// Narrow both slots to their static types.
    ///
    /// Fails as a whole if either slot does not narrow.
    pub fn unpack(&self) -> Result<(K, V), CallError> {
        let key = narrow(self.key_slot().clone(), || "key of DictItem".to_string())?;
        let value = narrow(self.value_slot().clone(), || "value of DictItem".to_string())?;
        Ok((key, value))
    }
}

impl<K, V> Deref for DictItem<K, V> {
    type Target = Tuple;

    fn deref(&self) -> &Tuple {
        &self.base
    }
}

impl<K, V> Clone for DictItem<K, V> {
    fn clone(&self) -> Self {
        DictItem {
            base: Ref::clone(&self.base),
            _types: PhantomData,
        }
    }
}

impl<K, V> fmt::Debug for DictItem<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DictItem")
            .field("key", self.key_slot())
            .field("value", self.value_slot())
            .finish()
    }
}

impl<K, V> ObjectType for DictItem<K, V>
where
    K: FromValue + IntoValue + 'static,
    V: FromValue + IntoValue + 'static,
{
    fn object_ty() -> Ty {
        Ty::dict_item(K::ty(), V::ty())
    }

    fn erase(handle: Ref<Self>) -> Value {
        Value::Tuple(Ref::clone(&handle.base))
    }

    fn narrow(value: Value) -> Result<Ref<Self>, Value> {
        match value {
            Value::Tuple(base) if <(K, V)>::conforms(&base.slots) => Ok(Ref::new(DictItem {
                base,
                _types: PhantomData,
            })),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests;
