//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with the default tolerance and iteration cap,
//! used by all root-finding configs.
//!
//! [`CommonCfg`] fields
//! ├ `tolerance` : step (open methods) or half-width (bisection) tolerance
//! └ `max_iter`  : iteration cap
//!
//! Setters validate eagerly so a bad configuration never reaches a solver.

pub const DEFAULT_TOLERANCE: f64   = 1e-6;
pub const DEFAULT_MAX_ITER:  usize = 100;


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    tolerance: f64,
    max_iter:  usize,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            tolerance : DEFAULT_TOLERANCE,
            max_iter  : DEFAULT_MAX_ITER,
        }
    }

    // getters
    pub fn tolerance(&self) -> f64   { self.tolerance }
    pub fn max_iter(&self)  -> usize { self.max_iter }

    // setters (internal)
    pub(crate) fn with_tolerance(&mut self, v: f64)  { self.tolerance = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter  = v; }
}

impl Default for CommonCfg {
    fn default() -> Self { Self::new() }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_tolerance(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidTolerance { got: v }
                    );
                }
                self.common.with_tolerance(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::RootFindingError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::RootFindingError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }

            pub fn tolerance(&self) -> f64   { self.common.tolerance() }
            pub fn max_iter(&self)  -> usize { self.common.max_iter() }

            #[allow(dead_code)]
            pub(crate) fn from_common(common: $crate::root_finding::config::CommonCfg) -> Self {
                Self { common }
            }
        }

        impl Default for $cfg {
            fn default() -> Self { Self::new() }
        }
    };
}
pub(crate) use impl_common_cfg;
