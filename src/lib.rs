pub mod dataerror;
pub mod linreg;
pub mod regressor;

pub use dataerror::{DataError, DataResult};
pub use linreg::LinReg;
pub use regressor::{FitResult, Observations, Regressor};

pub const MIN_OBSERVATIONS: usize = 4;
