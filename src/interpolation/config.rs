//! Sample-set configuration shared by the polynomial interpolators.
//!
//! [`CommonCfg`] borrows the caller's slices; nothing is copied until a
//! polynomial is fitted.
//! ├ `x`             : nodes, any order, pairwise distinct
//! ├ `y`             : values at the nodes
//! ├ `x_eval`        : query points, extrapolated when outside the nodes
//! └ `x_min_spacing` : relative separation below which two nodes count as
//!                     the same node ([`DEFAULT_X_TOL`] unless set)
//!
//! Each setter checks what it can see on its own; [`CommonCfg::validate`]
//! repeats the full check before fitting.

use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    x: &'a [f64],
    y: &'a [f64],
    x_eval: &'a [f64],
    x_min_spacing: f64,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self { x: &[], y: &[], x_eval: &[], x_min_spacing: DEFAULT_X_TOL }
    }

    pub fn validate(&self) -> Result<(), InterpolationError> {
        validate_samples(self.x, self.y, self.x_min_spacing)
    }

    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
    pub fn x_min_spacing(&self) -> f64 { self.x_min_spacing }

    pub(crate) fn try_set_x(&mut self, x: &'a [f64]) -> Result<(), InterpolationError> {
        check_finite(x)?;
        if let Some((x1, x2)) = duplicate_pair(x, self.x_min_spacing) {
            return Err(InterpolationError::DegenerateSample { x1, x2 });
        }
        check_lengths(x.len(), self.y.len())?;
        self.x = x;
        Ok(())
    }

    pub(crate) fn try_set_y(&mut self, y: &'a [f64]) -> Result<(), InterpolationError> {
        check_finite(y)?;
        check_lengths(self.x.len(), y.len())?;
        self.y = y;
        Ok(())
    }

    pub(crate) fn try_set_x_eval(&mut self, x_eval: &'a [f64]) -> Result<(), InterpolationError> {
        if let Some(idx) = non_finite_idx(x_eval) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }
        self.x_eval = x_eval;
        Ok(())
    }

    pub(crate) fn try_set_x_min_spacing(&mut self, tol: f64) -> Result<(), InterpolationError> {
        if !tol.is_finite() || tol <= 0.0 {
            return Err(InterpolationError::InvalidXTol { got: tol });
        }
        self.x_min_spacing = tol;
        Ok(())
    }
}

impl Default for CommonCfg<'_> {
    fn default() -> Self { Self::new() }
}


fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

/// Non-empty and finite.
fn check_finite(v: &[f64]) -> Result<(), InterpolationError> {
    if v.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    match non_finite_idx(v) {
        Some(idx) => Err(InterpolationError::NonFiniteVec { idx }),
        None      => Ok(()),
    }
}

/// Lengths must agree once both sides are set; an unset side is length 0.
fn check_lengths(x_len: usize, y_len: usize) -> Result<(), InterpolationError> {
    if x_len != 0 && y_len != 0 && x_len != y_len {
        return Err(InterpolationError::UnequalLength { x_len, y_len });
    }
    Ok(())
}

/// Relative test `|xi - xj| <= x_tol * max(|xi|, |xj|)`; equal nodes always
/// collide, including `0.0` and `-0.0`.
fn same_node(xi: f64, xj: f64, x_tol: f64) -> bool {
    (xi - xj).abs() <= x_tol * xi.abs().max(xj.abs())
}

/// First pair of coinciding nodes, in index order. Nodes are not assumed
/// sorted, so every pair is checked.
fn duplicate_pair(xs: &[f64], x_tol: f64) -> Option<(f64, f64)> {
    xs.iter().enumerate().find_map(|(i, &xi)| {
        xs[i + 1..]
            .iter()
            .find(|&&xj| same_node(xi, xj, x_tol))
            .map(|&xj| (xi, xj))
    })
}

/// Full sample-set check, run before any fitting:
/// ├ both non-empty and of equal length
/// ├ all values finite
/// └ x-values pairwise distinct
pub(crate) fn validate_samples(
    x: &[f64],
    y: &[f64],
    x_tol: f64,
) -> Result<(), InterpolationError> {
    if x.is_empty() || y.is_empty() {
        return Err(InterpolationError::EmptyInput);
    }
    if x.len() != y.len() {
        return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
    }
    if let Some(idx) = non_finite_idx(x).or_else(|| non_finite_idx(y)) {
        return Err(InterpolationError::NonFiniteVec { idx });
    }
    if let Some((x1, x2)) = duplicate_pair(x, x_tol) {
        return Err(InterpolationError::DegenerateSample { x1, x2 });
    }
    Ok(())
}


/// Builder setters for any config holding a `common: CommonCfg<'a>` field.
macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            /// Nodes. Rejects empty, non-finite and duplicate values.
            pub fn set_x(mut self, x: &'a [f64])
                -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                self.common.try_set_x(x)?;
                Ok(self)
            }

            pub fn set_y(mut self, y: &'a [f64])
                -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                self.common.try_set_y(y)?;
                Ok(self)
            }

            pub fn set_x_eval(mut self, x_eval: &'a [f64])
                -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                self.common.try_set_x_eval(x_eval)?;
                Ok(self)
            }

            /// Minimum relative node separation. Set it before [`Self::set_x`].
            pub fn set_x_tol(mut self, tol: f64)
                -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                self.common.try_set_x_min_spacing(tol)?;
                Ok(self)
            }

            pub fn common(&self) -> &$crate::interpolation::config::CommonCfg<'a> {
                &self.common
            }
        }

        impl<'a> Default for $cfg {
            fn default() -> Self { Self::new() }
        }
    };
}
pub(crate) use impl_common_cfg;
