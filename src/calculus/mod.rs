pub mod derivative;
pub mod errors;
pub mod trapezoid;

pub use derivative::{derivative, derivative_expr, derivative_table, DerivativeSample, DifferenceScheme};
pub use errors::CalculusError;
pub use trapezoid::{trapezoidal, trapezoidal_expr};
