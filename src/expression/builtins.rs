//! Allow-listed constants and functions.
//!
//! Anything not named here does not resolve. There is no fallback lookup.

use std::f64::consts;

/// Name of the single free variable.
pub const VARIABLE: &str = "x";

#[derive(Debug, Clone, Copy)]
pub(crate) enum Builtin {
    Unary(fn(f64) -> f64),
    Binary(fn(f64, f64) -> f64),
}

impl Builtin {
    pub(crate) fn arity(self) -> usize {
        match self {
            Builtin::Unary(_)  => 1,
            Builtin::Binary(_) => 2,
        }
    }
}

pub(crate) fn constant(name: &str) -> Option<f64> {
    match name {
        "pi" => Some(consts::PI),
        "e"  => Some(consts::E),
        _    => None,
    }
}

pub(crate) fn function(name: &str) -> Option<Builtin> {
    let f = match name {
        "sin"   => Builtin::Unary(f64::sin),
        "cos"   => Builtin::Unary(f64::cos),
        "tan"   => Builtin::Unary(f64::tan),
        "asin"  => Builtin::Unary(f64::asin),
        "acos"  => Builtin::Unary(f64::acos),
        "atan"  => Builtin::Unary(f64::atan),
        "sinh"  => Builtin::Unary(f64::sinh),
        "cosh"  => Builtin::Unary(f64::cosh),
        "tanh"  => Builtin::Unary(f64::tanh),
        "exp"   => Builtin::Unary(f64::exp),
        "log" | "ln" => Builtin::Unary(f64::ln),
        "log10" => Builtin::Unary(f64::log10),
        "log2"  => Builtin::Unary(f64::log2),
        "sqrt"  => Builtin::Unary(f64::sqrt),
        "abs"   => Builtin::Unary(f64::abs),
        "pow"   => Builtin::Binary(f64::powf),
        "atan2" => Builtin::Binary(f64::atan2),
        _ => return None,
    };
    Some(f)
}
