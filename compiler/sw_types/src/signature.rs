//! Function signatures.
//!
//! A [`Signature`] is created once per user function by the front end and is
//! immutable afterwards. [`ClassifiedSig`] is the same signature after every
//! type in it has been assigned a discipline.

use smallvec::SmallVec;

use crate::{Derived, Discipline, Name, Passing, Ty};

/// Invalid signature.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    /// Two parameters share a name, so keyword calls would be ambiguous.
    #[error("function `{function}` declares parameter `{param}` more than once")]
    DuplicateParam { function: Name, param: Name },
}

/// A declared parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Param {
    pub name: Name,
    pub ty: Ty,
}

/// Ordered, named, typed parameter list plus a return type.
///
/// Parameter names are unique; [`SignatureBuilder::build`] enforces it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    name: Name,
    params: SmallVec<[Param; 4]>,
    ret: Ty,
}

impl Signature {
    /// Start building a signature for function `name` returning `ret`.
    pub fn builder(name: impl Into<Name>, ret: Ty) -> SignatureBuilder {
        SignatureBuilder {
            name: name.into(),
            params: SmallVec::new(),
            ret,
        }
    }

    /// The function name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Parameters in declaration order.
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// The declared return type.
    pub fn ret(&self) -> &Ty {
        &self.ret
    }

    /// Number of declared parameters.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Declaration index of the parameter called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|p| p.name.as_str() == name)
    }

    /// Parameter names in declaration order.
    pub fn param_names(&self) -> impl Iterator<Item = &Name> + '_ {
        self.params.iter().map(|p| &p.name)
    }

    /// The type of this function as a value.
    pub fn fn_ty(&self) -> Ty {
        Ty::function(self.params.iter().map(|p| p.ty.clone()), self.ret.clone())
    }
}

/// Builder for [`Signature`].
#[derive(Clone, Debug)]
pub struct SignatureBuilder {
    name: Name,
    params: SmallVec<[Param; 4]>,
    ret: Ty,
}

impl SignatureBuilder {
    /// Append a parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<Name>, ty: Ty) -> Self {
        self.params.push(Param {
            name: name.into(),
            ty,
        });
        self
    }

    /// Finish the signature, rejecting duplicate parameter names.
    pub fn build(self) -> Result<Signature, SignatureError> {
        for (i, param) in self.params.iter().enumerate() {
            if self.params[..i].iter().any(|p| p.name == param.name) {
                return Err(SignatureError::DuplicateParam {
                    function: self.name,
                    param: param.name.clone(),
                });
            }
        }
        Ok(Signature {
            name: self.name,
            params: self.params,
            ret: self.ret,
        })
    }
}

/// A parameter annotated with its discipline.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassifiedParam {
    pub name: Name,
    pub ty: Ty,
    pub discipline: Discipline,
}

impl ClassifiedParam {
    /// The passing convention for this parameter under a derived constructor.
    #[inline]
    pub fn passing(&self, derived: Derived) -> Passing {
        self.discipline.derive(derived)
    }
}

/// A signature whose parameter and return types have all been classified.
///
/// Produced by [`ClassTable::classify_signature`](crate::ClassTable::classify_signature).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassifiedSig {
    pub name: Name,
    /// Classified parameters (order matches the signature).
    pub params: SmallVec<[ClassifiedParam; 4]>,
    pub ret: Ty,
    pub ret_discipline: Discipline,
}

impl ClassifiedSig {
    /// Disciplines of the parameters, in declaration order.
    pub fn param_disciplines(&self) -> impl Iterator<Item = Discipline> + '_ {
        self.params.iter().map(|p| p.discipline)
    }
}

#[cfg(test)]
mod tests;
