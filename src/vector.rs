//! Dimension Vector
//!
//! Exponent tuple over the base dimensions mass (M), length (L), time (T).
//! Equality is component-wise and is the sole equivalence criterion for
//! quantities; the formatted string is presentation only.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Exponents of a dimensional formula over {M, L, T}.
///
/// Immutable value type. `force` is `MLT^-2`, i.e. `(1, 1, -2)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionVector {
    /// Exponent of mass (M)
    pub mass: i32,
    /// Exponent of length (L)
    pub length: i32,
    /// Exponent of time (T)
    pub time: i32,
}

impl DimensionVector {
    /// Build a vector from (M, L, T) exponents.
    pub const fn new(mass: i32, length: i32, time: i32) -> Self {
        Self { mass, length, time }
    }

    /// The dimensionless vector (all exponents zero).
    pub const fn dimensionless() -> Self {
        Self::new(0, 0, 0)
    }

    /// True when every exponent is zero.
    pub fn is_dimensionless(&self) -> bool {
        *self == Self::dimensionless()
    }
}

fn write_term(f: &mut fmt::Formatter<'_>, symbol: char, exponent: i32) -> fmt::Result {
    match exponent {
        0 => Ok(()),
        1 => write!(f, "{}", symbol),
        n => write!(f, "{}^{}", symbol, n),
    }
}

impl fmt::Display for DimensionVector {
    /// Canonical formula: fixed M, L, T token order, zero exponents omitted,
    /// exponent 1 omitted, e.g. `LT^-1`, `MLT^-2`, `ML^-3`.
    /// The dimensionless vector renders as `1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return write!(f, "1");
        }
        write_term(f, 'M', self.mass)?;
        write_term(f, 'L', self.length)?;
        write_term(f, 'T', self.time)
    }
}
