//! Discipline classification.
//!
//! [`ClassTable`] is the explicit registry: one entry per user type, filled by
//! the front end before generation starts. [`Classifier`] answers queries over
//! arbitrary [`Ty`] trees against a table, memoizing compound results.

use std::cell::RefCell;

use rustc_hash::FxHashMap;

use crate::signature::{ClassifiedParam, ClassifiedSig, Signature};
use crate::{Discipline, Name, Ty};

/// Generator-time classification failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    /// A user type was used before any discipline was registered for it.
    #[error("type `{name}` has no discipline assigned")]
    UnclassifiedType { name: Name },

    /// A user type was registered twice with conflicting disciplines.
    #[error("type `{name}` is already classified as {registered}, cannot reclassify as {requested}")]
    Reclassified {
        name: Name,
        registered: Discipline,
        requested: Discipline,
    },
}

/// Registry of user-type disciplines.
///
/// Built-in types never appear here; their discipline is fixed.
#[derive(Clone, Debug, Default)]
pub struct ClassTable {
    named: FxHashMap<Name, Discipline>,
}

impl ClassTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the discipline of a user type.
    ///
    /// Registering the same discipline again is a no-op; a different one is
    /// [`ClassifyError::Reclassified`].
    pub fn register(
        &mut self,
        name: impl Into<Name>,
        discipline: Discipline,
    ) -> Result<(), ClassifyError> {
        let name = name.into();
        match self.named.get(&name) {
            Some(&registered) if registered == discipline => Ok(()),
            Some(&registered) => Err(ClassifyError::Reclassified {
                name,
                registered,
                requested: discipline,
            }),
            None => {
                tracing::debug!(%name, %discipline, "registered type");
                self.named.insert(name, discipline);
                Ok(())
            }
        }
    }

    /// Look up a registered user type.
    pub fn registered(&self, name: &str) -> Option<Discipline> {
        self.named.get(name).copied()
    }

    /// Number of registered user types.
    pub fn len(&self) -> usize {
        self.named.len()
    }

    /// Check if no user types are registered.
    pub fn is_empty(&self) -> bool {
        self.named.is_empty()
    }

    /// Create a classifier over this table.
    pub fn classifier(&self) -> Classifier<'_> {
        Classifier::new(self)
    }

    /// Classify a single type.
    pub fn classify(&self, ty: &Ty) -> Result<Discipline, ClassifyError> {
        self.classifier().discipline(ty)
    }

    /// Classify every parameter and the return type of a signature.
    pub fn classify_signature(&self, sig: &Signature) -> Result<ClassifiedSig, ClassifyError> {
        self.classifier().classify_signature(sig)
    }
}

/// Classification queries.
///
/// Implemented by [`Classifier`]. Every query is fallible: a type that does
/// not classify is an error, never a default.
pub trait Classification {
    /// Classify a type.
    fn discipline(&self, ty: &Ty) -> Result<Discipline, ClassifyError>;

    /// Returns `true` if the type is copied on assignment.
    fn is_value(&self, ty: &Ty) -> Result<bool, ClassifyError> {
        self.discipline(ty).map(Discipline::is_value)
    }

    /// Returns `true` if the type lives behind a shared handle.
    fn is_object(&self, ty: &Ty) -> Result<bool, ClassifyError> {
        self.discipline(ty).map(Discipline::is_object)
    }
}

/// Memoizing classifier over a [`ClassTable`].
///
/// # Interior Mutability
///
/// Uses `RefCell` for the cache because [`Classification`] takes `&self`.
/// A classifier belongs to one generator pass and is not shared across
/// threads.
pub struct Classifier<'t> {
    table: &'t ClassTable,
    cache: RefCell<FxHashMap<Ty, Discipline>>,
}

impl<'t> Classifier<'t> {
    /// Create a classifier for the given table.
    pub fn new(table: &'t ClassTable) -> Self {
        Self {
            table,
            cache: RefCell::new(FxHashMap::default()),
        }
    }

    /// Create a classifier with a cache from a previous run.
    ///
    /// Only valid if the table has not changed since the cache was exported.
    pub fn with_cache(table: &'t ClassTable, cache: FxHashMap<Ty, Discipline>) -> Self {
        Self {
            table,
            cache: RefCell::new(cache),
        }
    }

    /// Access the underlying table.
    pub fn table(&self) -> &'t ClassTable {
        self.table
    }

    /// Snapshot of every compound classification computed so far.
    pub fn export_cache(&self) -> FxHashMap<Ty, Discipline> {
        self.cache.borrow().clone()
    }

    /// Classify every parameter and the return type of a signature.
    ///
    /// Fails on the first type that does not classify, before anything
    /// referencing the signature can be emitted.
    #[tracing::instrument(level = "trace", skip_all, fields(function = %sig.name()))]
    pub fn classify_signature(&self, sig: &Signature) -> Result<ClassifiedSig, ClassifyError> {
        let params = sig
            .params()
            .iter()
            .map(|param| {
                Ok(ClassifiedParam {
                    name: param.name.clone(),
                    ty: param.ty.clone(),
                    discipline: self.classify(&param.ty)?,
                })
            })
            .collect::<Result<_, ClassifyError>>()?;
        let ret_discipline = self.classify(sig.ret())?;

        Ok(ClassifiedSig {
            name: sig.name().clone(),
            params,
            ret: sig.ret().clone(),
            ret_discipline,
        })
    }

    /// Core classification with caching.
    fn classify(&self, ty: &Ty) -> Result<Discipline, ClassifyError> {
        // Fast path: leaves never touch the cache.
        match ty {
            Ty::Int | Ty::Float | Ty::Bool | Ty::Complex => return Ok(Discipline::Value),
            Ty::Str => return Ok(Discipline::Object),
            Ty::Named(name) => {
                return self
                    .table
                    .registered(name)
                    .ok_or_else(|| ClassifyError::UnclassifiedType { name: name.clone() });
            }
            Ty::Tuple(_) | Ty::DictItem(_) | Ty::Function(_) | Ty::Optional(_) => {}
        }

        if let Some(&cached) = self.cache.borrow().get(ty) {
            return Ok(cached);
        }

        let result = self.classify_compound(ty)?;
        tracing::trace!(%ty, discipline = %result, "classified");
        self.cache.borrow_mut().insert(ty.clone(), result);
        Ok(result)
    }

    /// Classify a compound type.
    ///
    /// Every component must classify first; the compound's own discipline
    /// does not depend on the components except for `Optional`.
    fn classify_compound(&self, ty: &Ty) -> Result<Discipline, ClassifyError> {
        match ty {
            Ty::Tuple(elems) => {
                self.classify_all(elems)?;
                Ok(Discipline::Object)
            }
            Ty::DictItem(pair) => {
                self.classify(&pair.0)?;
                self.classify(&pair.1)?;
                Ok(Discipline::Object)
            }
            Ty::Function(fn_ty) => {
                self.classify_all(&fn_ty.params)?;
                self.classify(&fn_ty.ret)?;
                Ok(Discipline::Value)
            }
            // Optional composes: the handle or copy underneath decides.
            Ty::Optional(inner) => self.classify(inner),
            Ty::Int | Ty::Float | Ty::Bool | Ty::Complex | Ty::Str | Ty::Named(_) => {
                self.classify(ty)
            }
        }
    }

    fn classify_all(&self, tys: &[Ty]) -> Result<(), ClassifyError> {
        for ty in tys {
            self.classify(ty)?;
        }
        Ok(())
    }
}

impl Classification for Classifier<'_> {
    fn discipline(&self, ty: &Ty) -> Result<Discipline, ClassifyError> {
        self.classify(ty)
    }
}
