pub mod config;
pub mod errors;
pub mod matrix;
pub mod report;

pub mod gauss_seidel;
pub mod lu;

pub use config::GaussSeidelCfg;
pub use errors::LinearSystemError;
pub use gauss_seidel::gauss_seidel;
pub use lu::{lu_decompose, lu_solve, LuFactors};
pub use matrix::Matrix;
pub use report::{LuSolution, SolveReport, SweepRecord};
