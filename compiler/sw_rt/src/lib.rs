//! Runtime support for code emitted by the Sidewinder generator.
//!
//! This crate provides:
//!
//! - **Derived parameter types** ([`Const`], [`Mutable`], [`Optional`],
//!   [`absent`]): emitted code names a type's passing convention through
//!   these aliases and the type's discipline picks the shape.
//!
//! - **Erased values** ([`Value`]): the tagged variant that crosses dynamic
//!   call boundaries, and the narrowing traits ([`FromValue`],
//!   [`IntoValue`]) that move between it and typed Rust values.
//!
//! - **Built-in types** ([`Complex`], [`Str`], [`Tuple`], [`TypedTuple`],
//!   [`DictItem`]).
//!
//! - **Argument binding** ([`Binder`], [`Kwargs`]) and **callable wrappers**
//!   ([`Function`], [`DynFunction`]) with positional, keyword and direct
//!   typed entry points.
//!
//! # Call Protocol
//!
//! ```text
//! positional [Value]  ──┐
//!                       ├─► Binder ─► (A, B, ..) ─► implementation ─► R
//! keyword {name: Value} ┘                 ▲
//! direct (A, B, ..) ──────────────────────┘
//! ```
//!
//! All three entries reach the same implementation with the same typed
//! arguments. Binding failures are [`CallError`]s raised before the
//! implementation runs.

mod binder;
mod classified;
mod complex;
mod error;
mod function;
mod narrow;
mod object;
mod string;
mod tuple;
mod value;

use std::sync::Once;

pub use binder::{ArgList, Binder, Kwargs, Slots};
pub use classified::{
    absent, discipline_of, present, Classified, Const, DisciplineKind, Mutable, ObjectKind,
    Optional, Ref, ValueKind,
};
pub use complex::Complex;
pub use error::{CallError, DefineError};
pub use function::{DynFunction, Function};
pub use narrow::{narrow, FromValue, IntoValue, Typed};
pub use object::{ObjectRef, ObjectType};
pub use string::Str;
pub use tuple::{DictItem, Tuple, TupleElements, TypedTuple};
pub use value::Value;

pub use sw_types as types;
pub use sw_types::{ClassTable, Discipline, Name, Signature, Ty};

static TRACING_INIT: Once = Once::new();

/// Route binding and definition events to stderr.
///
/// Does nothing unless `RUST_LOG` is set, so generated programs and test
/// binaries stay quiet by default:
///
/// ```bash
/// RUST_LOG=sw_rt=debug ./program    # Wrapper definitions
/// RUST_LOG=sw_rt=trace ./program    # Every binding and narrowing step
/// ```
///
/// Only the first call installs anything. If the host already set a global
/// subscriber, that one is kept.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        let Ok(filter) = EnvFilter::try_from_default_env() else {
            return;
        };
        let installed = tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_thread_names(true))
            .with(filter)
            .try_init();
        if installed.is_err() {
            tracing::debug!("global subscriber already set, keeping it");
        }
    });
}
