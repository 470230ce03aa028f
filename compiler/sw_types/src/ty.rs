//! Source-level type descriptors.
//!
//! A [`Ty`] is what the front end resolved a source value to. The generator
//! only ever sees concrete types: there are no type variables here, so every
//! `Ty` either classifies or is an error.

use std::fmt;

use crate::Name;

/// A fully resolved source-level type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Ty {
    /// Signed integer.
    Int,
    /// Floating-point number.
    Float,
    /// Boolean.
    Bool,
    /// Complex number with integer real and imaginary parts.
    Complex,
    /// String.
    Str,
    /// Fixed-arity heterogeneous tuple.
    Tuple(Vec<Ty>),
    /// Key/value pair produced by iterating a dictionary.
    DictItem(Box<(Ty, Ty)>),
    /// Function value.
    Function(Box<FnTy>),
    /// A value that may be absent.
    ///
    /// Never nested: [`Ty::optional`] flattens `Optional(Optional(t))`.
    Optional(Box<Ty>),
    /// User-defined type, classified through the registry.
    Named(Name),
}

/// Parameter and return types of a function value.
///
/// Parameter names are not part of a function's type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct FnTy {
    pub params: Vec<Ty>,
    pub ret: Ty,
}

impl Ty {
    /// Create a tuple type.
    pub fn tuple(elems: impl IntoIterator<Item = Ty>) -> Self {
        Ty::Tuple(elems.into_iter().collect())
    }

    /// Create a dictionary item type.
    pub fn dict_item(key: Ty, value: Ty) -> Self {
        Ty::DictItem(Box::new((key, value)))
    }

    /// Create a function type.
    pub fn function(params: impl IntoIterator<Item = Ty>, ret: Ty) -> Self {
        Ty::Function(Box::new(FnTy {
            params: params.into_iter().collect(),
            ret,
        }))
    }

    /// Create an optional type. Optional of optional collapses to one level.
    pub fn optional(inner: Ty) -> Self {
        match inner {
            Ty::Optional(_) => inner,
            other => Ty::Optional(Box::new(other)),
        }
    }

    /// Create a reference to a user-defined type.
    pub fn named(name: impl Into<Name>) -> Self {
        Ty::Named(name.into())
    }

    /// Returns `true` for the fixed built-in value set.
    #[inline]
    pub fn is_builtin_value(&self) -> bool {
        matches!(self, Ty::Int | Ty::Float | Ty::Bool | Ty::Complex)
    }

    /// Returns `true` if this type admits the absent sentinel.
    #[inline]
    pub fn is_optional(&self) -> bool {
        matches!(self, Ty::Optional(_))
    }

    /// Strip one level of optionality.
    pub fn non_optional(&self) -> &Ty {
        match self {
            Ty::Optional(inner) => inner,
            other => other,
        }
    }

    /// Returns `true` if an optional directly wraps another optional anywhere
    /// in this type.
    ///
    /// [`Ty::optional`] never builds one; a hand-built `Ty::Optional` can.
    pub fn has_nested_optional(&self) -> bool {
        match self {
            Ty::Int | Ty::Float | Ty::Bool | Ty::Complex | Ty::Str | Ty::Named(_) => false,
            Ty::Optional(inner) => inner.is_optional() || inner.has_nested_optional(),
            Ty::Tuple(elems) => elems.iter().any(Ty::has_nested_optional),
            Ty::DictItem(pair) => pair.0.has_nested_optional() || pair.1.has_nested_optional(),
            Ty::Function(fn_ty) => {
                fn_ty.params.iter().any(Ty::has_nested_optional) || fn_ty.ret.has_nested_optional()
            }
        }
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ty::Int => f.write_str("int"),
            Ty::Float => f.write_str("float"),
            Ty::Bool => f.write_str("bool"),
            Ty::Complex => f.write_str("complex"),
            Ty::Str => f.write_str("str"),
            Ty::Tuple(elems) => {
                f.write_str("(")?;
                write_list(f, elems)?;
                if elems.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
            Ty::DictItem(pair) => write!(f, "DictItem[{}, {}]", pair.0, pair.1),
            Ty::Function(fn_ty) => {
                f.write_str("(")?;
                write_list(f, &fn_ty.params)?;
                write!(f, ") -> {}", fn_ty.ret)
            }
            Ty::Optional(inner) => write!(f, "{inner}?"),
            Ty::Named(name) => f.write_str(name),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, tys: &[Ty]) -> fmt::Result {
    for (i, ty) in tys.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{ty}")?;
    }
    Ok(())
}
