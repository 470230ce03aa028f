//! Generator-time type information for the Sidewinder code generator.
//!
//! This crate provides:
//!
//! - **Type descriptors** ([`Ty`]): the fully resolved source-level types the
//!   front end hands to the generator.
//!
//! - **Discipline classification** ([`Discipline`], [`ClassTable`],
//!   [`Classifier`]): every concrete type is either
//!   [`Value`](Discipline::Value) (copied, no identity) or
//!   [`Object`](Discipline::Object) (shared, reference-counted identity).
//!
//! - **Derived passing conventions** ([`Derived`], [`Passing`]): the absent,
//!   const, mutable and optional forms of a type, as a pure function of its
//!   discipline.
//!
//! - **Signatures** ([`Signature`], [`ClassifiedSig`]): ordered, named,
//!   typed parameter lists plus a return type, and their classified form.
//!
//! # Design
//!
//! Classification is an explicit registry, not structural inference. The
//! built-in scalars (`int`, `float`, `bool`, `complex`) and function types
//! are values, strings and tuples are objects, and user types must be registered before the
//! generator touches them. Asking about a type nobody registered is a
//! generator-time error ([`ClassifyError::UnclassifiedType`]); it never
//! reaches emitted code.

mod classify;
mod discipline;
mod name;
mod signature;
mod ty;

pub use classify::{ClassTable, Classification, Classifier, ClassifyError};
pub use discipline::{Derived, Discipline, Passing};
pub use name::Name;
pub use signature::{
    ClassifiedParam, ClassifiedSig, Param, Signature, SignatureBuilder, SignatureError,
};
pub use ty::{FnTy, Ty};
