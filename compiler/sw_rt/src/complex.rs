//! Fixed-width complex numbers.

use std::fmt;

/// Complex number with integer real and imaginary parts.
///
/// Part of the built-in value set: copied on assignment, compared by content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Complex {
    real: i64,
    imag: i64,
}

impl Complex {
    /// Create a complex number.
    #[inline]
    pub const fn new(real: i64, imag: i64) -> Self {
        Complex { real, imag }
    }

    /// The real part.
    #[inline]
    pub const fn real(self) -> i64 {
        self.real
    }

    /// The imaginary part.
    #[inline]
    pub const fn imag(self) -> i64 {
        self.imag
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.imag < 0 {
            write!(f, "({}{}j)", self.real, self.imag)
        } else {
            write!(f, "({}+{}j)", self.real, self.imag)
        }
    }
}
