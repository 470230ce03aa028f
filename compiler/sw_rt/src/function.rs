//! Callable wrappers.
//!
//! A [`Function`] pairs one implementation with its [`Signature`] and offers
//! three entry points over it: positional erased, keyword erased, and direct
//! typed. The erased entries bind through a [`Binder`] and then make exactly
//! the call the direct entry makes.
//!
//! # Sharing
//!
//! A wrapper is a value: cloning it shares the implementation behind an
//! `Arc`, and it holds no per-call state, so clones are interchangeable and
//! may be called from several threads at once.
//!
//! [`DynFunction`] is the erased form carried by [`Value::Function`]. It
//! points at the same allocation as the typed wrapper it came from and can be
//! narrowed back into it.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use sw_types::{ClassTable, Discipline, Name, Signature, Ty};

use crate::binder::{ArgList, Binder, Kwargs};
use crate::classified::{Classified, ValueKind};
use crate::narrow::{FromValue, IntoValue, Typed};
use crate::{CallError, DefineError, Value};

type Implementation<A, R> = Box<dyn Fn(A) -> R + Send + Sync>;

struct FunctionInner<A, R> {
    sig: Signature,
    imp: Implementation<A, R>,
}

impl<A: ArgList, R> FunctionInner<A, R> {
    #[inline]
    fn invoke(&self, args: A) -> R {
        (self.imp)(args)
    }

    #[tracing::instrument(level = "trace", skip_all, fields(function = %self.sig.name(), argc = args.len()))]
    fn call_positional(&self, args: Vec<Value>) -> Result<R, CallError> {
        let bound = Binder::new(&self.sig).positional::<A>(args)?;
        Ok(self.invoke(bound))
    }

    #[tracing::instrument(level = "trace", skip_all, fields(function = %self.sig.name(), argc = kwargs.len()))]
    fn call_keyword(&self, kwargs: Kwargs) -> Result<R, CallError> {
        let bound = Binder::new(&self.sig).keyword::<A>(kwargs)?;
        Ok(self.invoke(bound))
    }
}

/// Callable wrapper over one implementation.
///
/// `A` is the parameter tuple, `R` the return type.
pub struct Function<A, R> {
    inner: Arc<FunctionInner<A, R>>,
}

impl<A: ArgList, R: Typed + 'static> Function<A, R> {
    /// Define a wrapper for `sig` backed by `imp`.
    ///
    /// Classifies the whole signature first, then checks that it agrees with
    /// the implementation's Rust types: same arity, same parameter and return
    /// types, same disciplines. Nested `Option`s are rejected.
    pub fn define<F>(table: &ClassTable, sig: Signature, imp: F) -> Result<Self, DefineError>
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        let classified = table.classify_signature(&sig)?;

        if sig.arity() != A::ARITY {
            return Err(DefineError::ArityMismatch {
                function: sig.name().clone(),
                declared: sig.arity(),
                native: A::ARITY,
            });
        }

        let params = classified.params.iter();
        let natives = A::param_tys().into_iter().zip(A::param_disciplines());
        for (param, (native_ty, native_discipline)) in params.zip(natives) {
            reject_nested_optional(sig.name(), &native_ty)?;
            if param.ty != native_ty {
                return Err(DefineError::ParamTypeMismatch {
                    function: sig.name().clone(),
                    param: param.name.clone(),
                    declared: param.ty.clone(),
                    native: native_ty,
                });
            }
            check_discipline(sig.name(), &param.ty, param.discipline, native_discipline)?;
        }

        let native_ret = R::ty();
        reject_nested_optional(sig.name(), &native_ret)?;
        if *sig.ret() != native_ret {
            return Err(DefineError::ReturnTypeMismatch {
                function: sig.name().clone(),
                declared: sig.ret().clone(),
                native: native_ret,
            });
        }
        check_discipline(
            sig.name(),
            sig.ret(),
            classified.ret_discipline,
            R::discipline(),
        )?;

        tracing::debug!(function = %sig.name(), arity = sig.arity(), "defined function wrapper");
        Ok(Function {
            inner: Arc::new(FunctionInner {
                sig,
                imp: Box::new(imp),
            }),
        })
    }
}

fn reject_nested_optional(function: &Name, native: &Ty) -> Result<(), DefineError> {
    if native.has_nested_optional() {
        return Err(DefineError::NestedOptional {
            function: function.clone(),
            ty: native.clone(),
        });
    }
    Ok(())
}

fn check_discipline(
    function: &Name,
    ty: &Ty,
    registered: Discipline,
    native: Discipline,
) -> Result<(), DefineError> {
    if registered == native {
        Ok(())
    } else {
        Err(DefineError::DisciplineMismatch {
            function: function.clone(),
            ty: ty.clone(),
            registered,
            native,
        })
    }
}

impl<A: ArgList, R> Function<A, R> {
    /// The wrapped function's signature.
    pub fn signature(&self) -> &Signature {
        &self.inner.sig
    }

    /// The wrapped function's name.
    pub fn name(&self) -> &Name {
        self.inner.sig.name()
    }

    /// Direct typed entry: no erasure, no binding.
    #[inline]
    pub fn call(&self, args: A) -> R {
        self.inner.invoke(args)
    }

    /// Positional erased entry.
    pub fn call_positional(&self, args: Vec<Value>) -> Result<R, CallError> {
        self.inner.call_positional(args)
    }

    /// Keyword erased entry.
    pub fn call_keyword(&self, kwargs: Kwargs) -> Result<R, CallError> {
        self.inner.call_keyword(kwargs)
    }

    /// Check whether two wrappers share one implementation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<A: ArgList, R: IntoValue + 'static> Function<A, R> {
    /// Erase into a [`DynFunction`] sharing this implementation.
    pub fn erase(&self) -> DynFunction {
        DynFunction {
            inner: Arc::clone(&self.inner) as Arc<dyn ErasedFunction>,
        }
    }
}

impl<A, R> Clone for Function<A, R> {
    fn clone(&self) -> Self {
        Function {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<A, R> fmt::Debug for Function<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {}>", self.inner.sig.name())
    }
}

impl<A: 'static, R: 'static> Classified for Function<A, R> {
    type Kind = ValueKind;

    #[inline]
    fn as_const(owned: &Self) -> Self {
        owned.clone()
    }
}

impl<A: ArgList, R: Typed> Typed for Function<A, R> {
    fn ty() -> Ty {
        Ty::function(A::param_tys(), R::ty())
    }

    fn discipline() -> Discipline {
        Discipline::Value
    }
}

impl<A: ArgList, R: Typed + IntoValue + 'static> FromValue for Function<A, R> {
    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Function(f) => f.downcast().map_err(Value::Function),
            other => Err(other),
        }
    }
}

impl<A: ArgList, R: IntoValue + 'static> IntoValue for Function<A, R> {
    fn into_value(self) -> Value {
        Value::Function(self.erase())
    }
}

/// Object-safe view of a [`FunctionInner`] with its types erased.
trait ErasedFunction: Send + Sync + 'static {
    fn signature(&self) -> &Signature;

    fn call_positional(&self, args: Vec<Value>) -> Result<Value, CallError>;

    fn call_keyword(&self, kwargs: Kwargs) -> Result<Value, CallError>;

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<A: ArgList, R: IntoValue + 'static> ErasedFunction for FunctionInner<A, R> {
    fn signature(&self) -> &Signature {
        &self.sig
    }

    fn call_positional(&self, args: Vec<Value>) -> Result<Value, CallError> {
        FunctionInner::call_positional(self, args).map(IntoValue::into_value)
    }

    fn call_keyword(&self, kwargs: Kwargs) -> Result<Value, CallError> {
        FunctionInner::call_keyword(self, kwargs).map(IntoValue::into_value)
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// Erased callable wrapper.
///
/// Offers the two erased entry points, returning erased results.
#[derive(Clone)]
pub struct DynFunction {
    inner: Arc<dyn ErasedFunction>,
}

impl DynFunction {
    /// The wrapped function's signature.
    pub fn signature(&self) -> &Signature {
        self.inner.signature()
    }

    /// The wrapped function's name.
    pub fn name(&self) -> &Name {
        self.inner.signature().name()
    }

    /// Positional erased entry.
    pub fn call_positional(&self, args: Vec<Value>) -> Result<Value, CallError> {
        self.inner.call_positional(args)
    }

    /// Keyword erased entry.
    pub fn call_keyword(&self, kwargs: Kwargs) -> Result<Value, CallError> {
        self.inner.call_keyword(kwargs)
    }

    /// Recover the typed wrapper, sharing the same implementation.
    pub fn downcast<A: ArgList, R: IntoValue + 'static>(self) -> Result<Function<A, R>, Self> {
        match Arc::clone(&self.inner).into_any().downcast::<FunctionInner<A, R>>() {
            Ok(inner) => Ok(Function { inner }),
            Err(_) => Err(self),
        }
    }

    /// Check whether two erased wrappers share one implementation.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.inner).cast::<()>(),
            Arc::as_ptr(&other.inner).cast::<()>(),
        )
    }
}

impl fmt::Debug for DynFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {}>", self.name())
    }
}
