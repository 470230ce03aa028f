//! Marshalling errors.
//!
//! [`CallError`] is what a call site sees: every variant is raised before
//! the implementation runs. [`DefineError`] is raised once, when a wrapper is
//! defined, and means the generator produced an inconsistent wrapper.

use sw_types::{ClassifyError, Discipline, Name, Ty};

/// Call-time marshalling failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CallError {
    /// Positional payload length differs from the parameter count.
    #[error("{function} expects {expected} {}, got {got}", arguments(.expected))]
    ArityMismatch {
        function: Name,
        expected: usize,
        got: usize,
    },

    /// Keyword payload lacks a declared parameter.
    #[error("{function} missing required argument `{param}`")]
    MissingArgument { function: Name, param: Name },

    /// Keyword payload names a parameter the signature does not declare.
    #[error("{function} got an unexpected keyword argument `{name}`")]
    UnexpectedArgument { function: Name, name: Name },

    /// An erased slot does not narrow to the declared type.
    #[error("type mismatch for {site}: expected {expected}, found {found}")]
    TypeMismatch {
        site: String,
        expected: Ty,
        found: String,
    },

    /// Tuple access past its fixed arity.
    #[error("index {index} out of range for tuple of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

fn arguments(n: &usize) -> &'static str {
    if *n == 1 {
        "argument"
    } else {
        "arguments"
    }
}

/// Definition-time wrapper inconsistency.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DefineError {
    /// A type in the signature has no discipline.
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    /// The signature and the implementation disagree on parameter count.
    #[error("`{function}` declares {declared} parameters but its implementation takes {native}")]
    ArityMismatch {
        function: Name,
        declared: usize,
        native: usize,
    },

    /// A declared parameter type differs from the implementation's.
    #[error("parameter `{param}` of `{function}` is declared {declared} but implemented as {native}")]
    ParamTypeMismatch {
        function: Name,
        param: Name,
        declared: Ty,
        native: Ty,
    },

    /// The declared return type differs from the implementation's.
    #[error("`{function}` is declared to return {declared} but its implementation returns {native}")]
    ReturnTypeMismatch {
        function: Name,
        declared: Ty,
        native: Ty,
    },

    /// A nested optional cannot tell `Some(None)` from `None` once erased.
    #[error("`{function}` uses nested optional {ty}")]
    NestedOptional { function: Name, ty: Ty },

    /// The registry and the implementing Rust type disagree on a discipline.
    #[error("`{function}`: {ty} is registered as {registered} but implemented as {native}")]
    DisciplineMismatch {
        function: Name,
        ty: Ty,
        registered: Discipline,
        native: Discipline,
    },
}
