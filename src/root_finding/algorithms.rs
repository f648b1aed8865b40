//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};


/// Root-finding algorithm variants.
/// - [`Algorithm::Bracket`] contains bracket methods for root-finding
/// - [`Algorithm::Open`]    contains open methods for root-finding
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Algorithm {
    Bracket(BracketFamily),
    Open(OpenFamily),
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BracketFamily {
    Bisection,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OpenFamily {
    Newton,
    Secant,
}

impl Algorithm {
    pub const BISECTION: Algorithm = Algorithm::Bracket(BracketFamily::Bisection);
    pub const NEWTON:    Algorithm = Algorithm::Open(OpenFamily::Newton);
    pub const SECANT:    Algorithm = Algorithm::Open(OpenFamily::Secant);

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Bracket(BracketFamily::Bisection) => "bisection",
            Algorithm::Open(OpenFamily::Newton)          => "newton",
            Algorithm::Open(OpenFamily::Secant)          => "secant",
        }
    }

    /// Number of seed records an algorithm writes to its trace before the
    /// first iteration (the starting guesses of open methods).
    pub(crate) const fn seed_records(self) -> usize {
        match self {
            Algorithm::Bracket(_)               => 0,
            Algorithm::Open(OpenFamily::Newton) => 1,
            Algorithm::Open(OpenFamily::Secant) => 2,
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
