//! Argument binding.
//!
//! A [`Binder`] turns one erased payload into the typed parameters of one
//! signature. Positional payloads are read by index, keyword payloads by
//! declared name. Every structural check (arity, missing names, unexpected
//! names) runs before any slot is narrowed, and nothing is handed to the
//! implementation unless every parameter narrowed.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use sw_types::{Discipline, Name, Signature, Ty};

use crate::narrow::{narrow, FromValue};
use crate::{CallError, Value};

/// Erased parameter values in declaration order.
pub type Slots = SmallVec<[Value; 4]>;

/// Name-keyed erased payload.
#[derive(Clone, Debug, Default)]
pub struct Kwargs {
    entries: FxHashMap<Name, Value>,
}

impl Kwargs {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an argument, returning the previous value for that name.
    pub fn insert(&mut self, name: impl Into<Name>, value: Value) -> Option<Value> {
        self.entries.insert(name.into(), value)
    }

    /// Look up an argument.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Remove an argument.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.entries.remove(name)
    }

    /// Check if an argument is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Argument names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &Name> + '_ {
        self.entries.keys()
    }
}

impl<N: Into<Name>> FromIterator<(N, Value)> for Kwargs {
    fn from_iter<I: IntoIterator<Item = (N, Value)>>(iter: I) -> Self {
        Kwargs {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}

impl<N: Into<Name>, const L: usize> From<[(N, Value); L]> for Kwargs {
    fn from(entries: [(N, Value); L]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for Kwargs {
    type Item = (Name, Value);
    type IntoIter = std::collections::hash_map::IntoIter<Name, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// A statically typed parameter list.
///
/// Implemented for tuples of up to eight [`FromValue`] types; `(A, B)` binds
/// a two-parameter signature whose first parameter narrows to `A`.
pub trait ArgList: Sized + 'static {
    /// Number of parameters.
    const ARITY: usize;

    /// Source-level parameter types, in order.
    fn param_tys() -> Vec<Ty>;

    /// Disciplines implemented by the parameter types, in order.
    fn param_disciplines() -> Vec<Discipline>;

    /// Narrow slots that are already in declaration order and of the right
    /// count.
    fn from_slots(sig: &Signature, slots: Slots) -> Result<Self, CallError>;
}

/// Narrow the parameter at `index`.
fn bind_slot<T: FromValue>(
    sig: &Signature,
    index: usize,
    slot: Option<Value>,
) -> Result<T, CallError> {
    let value = slot.ok_or_else(|| CallError::ArityMismatch {
        function: sig.name().clone(),
        expected: sig.arity(),
        got: index,
    })?;
    narrow(value, || {
        let param = sig
            .params()
            .get(index)
            .map_or_else(|| index.to_string(), |p| p.name.to_string());
        format!("argument `{param}` of `{}`", sig.name())
    })
}

impl ArgList for () {
    const ARITY: usize = 0;

    fn param_tys() -> Vec<Ty> {
        Vec::new()
    }

    fn param_disciplines() -> Vec<Discipline> {
        Vec::new()
    }

    fn from_slots(_sig: &Signature, _slots: Slots) -> Result<Self, CallError> {
        Ok(())
    }
}

macro_rules! impl_arg_list {
    ($arity:literal; $($index:literal $param:ident),+) => {
        impl<$($param: FromValue + 'static),+> ArgList for ($($param,)+) {
            const ARITY: usize = $arity;

            fn param_tys() -> Vec<Ty> {
                vec![$($param::ty()),+]
            }

            fn param_disciplines() -> Vec<Discipline> {
                vec![$($param::discipline()),+]
            }

            fn from_slots(sig: &Signature, slots: Slots) -> Result<Self, CallError> {
                let mut slots = slots.into_iter();
                Ok(($(bind_slot::<$param>(sig, $index, slots.next())?,)+))
            }
        }
    };
}

impl_arg_list!(1; 0 A);
impl_arg_list!(2; 0 A, 1 B);
impl_arg_list!(3; 0 A, 1 B, 2 C);
impl_arg_list!(4; 0 A, 1 B, 2 C, 3 D);
impl_arg_list!(5; 0 A, 1 B, 2 C, 3 D, 4 E);
impl_arg_list!(6; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F);
impl_arg_list!(7; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G);
impl_arg_list!(8; 0 A, 1 B, 2 C, 3 D, 4 E, 5 F, 6 G, 7 H);

/// Per-call argument extraction for one signature.
///
/// Holds nothing but the signature reference; build one per call.
#[derive(Clone, Copy, Debug)]
pub struct Binder<'sig> {
    sig: &'sig Signature,
}

impl<'sig> Binder<'sig> {
    /// Create a binder for `sig`.
    pub fn new(sig: &'sig Signature) -> Self {
        Binder { sig }
    }

    /// The signature being bound.
    pub fn signature(&self) -> &'sig Signature {
        self.sig
    }

    /// Bind an ordered payload: slot `i` feeds parameter `i`.
    pub fn positional<A: ArgList>(&self, args: Vec<Value>) -> Result<A, CallError> {
        self.check_arity(args.len())?;
        A::from_slots(self.sig, SmallVec::from_vec(args))
    }

    /// Bind a name-keyed payload.
    pub fn keyword<A: ArgList>(&self, kwargs: Kwargs) -> Result<A, CallError> {
        let slots = self.order(kwargs)?;
        A::from_slots(self.sig, slots)
    }

    /// Check a positional payload length against the parameter count.
    pub fn check_arity(&self, got: usize) -> Result<(), CallError> {
        if got == self.sig.arity() {
            Ok(())
        } else {
            let err = CallError::ArityMismatch {
                function: self.sig.name().clone(),
                expected: self.sig.arity(),
                got,
            };
            tracing::trace!(%err, "positional binding failed");
            Err(err)
        }
    }

    /// Reorder a keyword payload into declaration order.
    ///
    /// Every declared name must be present and no other name may be.
    pub fn order(&self, mut kwargs: Kwargs) -> Result<Slots, CallError> {
        let mut slots = Slots::with_capacity(self.sig.arity());
        for param in self.sig.params() {
            let Some(value) = kwargs.remove(&param.name) else {
                let err = CallError::MissingArgument {
                    function: self.sig.name().clone(),
                    param: param.name.clone(),
                };
                tracing::trace!(%err, "keyword binding failed");
                return Err(err);
            };
            slots.push(value);
        }

        // Report the smallest leftover name so the error is deterministic.
        if let Some(extra) = kwargs.names().min() {
            let err = CallError::UnexpectedArgument {
                function: self.sig.name().clone(),
                name: extra.clone(),
            };
            tracing::trace!(%err, "keyword binding failed");
            return Err(err);
        }

        Ok(slots)
    }
}

#[cfg(test)]
mod tests;
