//! Display strings for fitted polynomials.
//!
//! Coefficients are printed with [`PRECISION`] decimals. The leading term
//! carries its own sign only when negative; every later term is prefixed with
//! an explicit ` + ` or ` - `. A zero coefficient of either sign prints as
//! `0.0000`. Node factors read `(x - x_j)`, or `(x + |x_j|)`
//! for negative nodes, and are joined to the coefficient with `*`.

use std::fmt::Write;

pub const PRECISION: usize = 4;

fn node_factor(xj: f64) -> String {
    if xj < 0.0 {
        format!("(x + {})", -xj)
    } else {
        format!("(x - {})", xj.abs())
    }
}

/// Appends one term `coef*(x - n_0)*(x - n_1)...` to `out`.
pub(crate) fn push_term<I>(out: &mut String, coef: f64, nodes: I)
where I: IntoIterator<Item = f64> {
    let coef = if coef == 0.0 { 0.0 } else { coef };
    if out.is_empty() {
        let _ = write!(out, "{:.*}", PRECISION, coef);
    } else {
        let sign = if coef < 0.0 { '-' } else { '+' };
        let _ = write!(out, " {} {:.*}", sign, PRECISION, coef.abs());
    }
    for xj in nodes {
        out.push('*');
        out.push_str(&node_factor(xj));
    }
}
