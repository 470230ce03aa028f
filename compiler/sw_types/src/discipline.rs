//! Ownership disciplines and the passing conventions derived from them.
//!
//! The generator asks two questions about every type: is it copied or shared
//! ([`Discipline`]), and given that, how is it spelled when it appears as an
//! absent sentinel, a read-only parameter, an owned parameter or an optional
//! parameter ([`Derived`] → [`Passing`]). The second answer depends only on
//! the first.

use std::fmt;

/// Ownership discipline of a concrete type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Discipline {
    /// No identity, copied on assignment, compared by content.
    ///
    /// Examples: `int`, `float`, `bool`, `complex`, function values.
    Value,

    /// Has identity; lives behind a shared, reference-counted handle that may
    /// be null.
    ///
    /// Examples: `str`, tuples, dictionary items, user classes.
    Object,
}

impl Discipline {
    /// Check if this is the value discipline.
    #[inline]
    pub const fn is_value(self) -> bool {
        matches!(self, Self::Value)
    }

    /// Check if this is the object discipline.
    #[inline]
    pub const fn is_object(self) -> bool {
        matches!(self, Self::Object)
    }

    /// Get a human-readable name for this discipline.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Object => "object",
        }
    }

    /// Apply a derived type constructor.
    pub const fn derive(self, derived: Derived) -> Passing {
        match (self, derived) {
            (Self::Value, Derived::Absent) => Passing::NoValue,
            (Self::Value, Derived::Const) => Passing::ConstCopy,
            (Self::Value, Derived::Mutable) => Passing::OwnedCopy,
            (Self::Value, Derived::Optional) => Passing::OptionalCopy,
            (Self::Object, Derived::Absent) => Passing::NullHandle,
            (Self::Object, Derived::Const) => Passing::ConstBorrow,
            (Self::Object, Derived::Mutable) => Passing::OwnedHandle,
            (Self::Object, Derived::Optional) => Passing::NullableHandle,
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The four derived type constructors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Derived {
    /// "No value" sentinel.
    Absent,
    /// Read-only parameter.
    Const,
    /// Owned, mutable parameter.
    Mutable,
    /// Parameter that may be absent.
    Optional,
}

impl Derived {
    /// All constructors, in declaration order.
    pub const ALL: [Derived; 4] = [
        Derived::Absent,
        Derived::Const,
        Derived::Mutable,
        Derived::Optional,
    ];
}

/// A derived passing convention.
///
/// The result of [`Discipline::derive`]. Each variant knows how it is spelled
/// in emitted Rust (see [`Passing::spell`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Passing {
    /// Absent value-discipline type: `None` of an `Option<T>`.
    NoValue,
    /// Absent object-discipline type: the null handle.
    NullHandle,
    /// Read-only copy of a value.
    ConstCopy,
    /// Read-only borrow of an object handle; the handle is not cloned.
    ConstBorrow,
    /// Owned copy of a value.
    OwnedCopy,
    /// Owned object handle (one reference).
    OwnedHandle,
    /// Value in an optional container.
    OptionalCopy,
    /// Object handle that may be null.
    NullableHandle,
}

impl Passing {
    /// Returns `true` if this convention goes through a shared handle.
    #[inline]
    pub const fn is_handle(self) -> bool {
        matches!(
            self,
            Self::NullHandle | Self::ConstBorrow | Self::OwnedHandle | Self::NullableHandle
        )
    }

    /// Returns `true` if this convention admits the absent sentinel.
    #[inline]
    pub const fn is_nullable(self) -> bool {
        matches!(
            self,
            Self::NoValue | Self::NullHandle | Self::OptionalCopy | Self::NullableHandle
        )
    }

    /// Spell this convention in emitted Rust for the native type `native`.
    ///
    /// Absent conventions spell the sentinel expression (`None`); every other
    /// convention spells a type.
    pub fn spell(self, native: &str) -> String {
        match self {
            Self::NoValue | Self::NullHandle => "None".to_string(),
            Self::ConstCopy | Self::OwnedCopy => native.to_string(),
            Self::ConstBorrow => format!("&Ref<{native}>"),
            Self::OwnedHandle => format!("Ref<{native}>"),
            Self::OptionalCopy => format!("Option<{native}>"),
            Self::NullableHandle => format!("Option<Ref<{native}>>"),
        }
    }
}
