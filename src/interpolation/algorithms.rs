//! Defines the interpolation algorithm variants
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Interpolation algorithm variants.
/// - [`Algorithm::Lagrange`] Lagrange basis polynomials
/// - [`Algorithm::Newton`]   Newton divided differences
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    Lagrange,
    Newton,
}

impl Algorithm {
    pub fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Lagrange => "lagrange",
            Algorithm::Newton   => "newton",
        }
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
