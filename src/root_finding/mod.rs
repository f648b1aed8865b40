// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub mod config;
pub(crate) mod signs;

// algorithms
pub mod bisection;
pub mod newton;
pub mod secant;

// expression-string entry point
pub mod solve;

pub use bisection::{bisection, BisectionCfg};
pub use errors::RootFindingError;
pub use newton::{newton, NewtonCfg};
pub use report::{IterationRecord, RootReport, Termination};
pub use secant::{secant, SecantCfg};
pub use solve::{solve, Method, SolveCfg};
