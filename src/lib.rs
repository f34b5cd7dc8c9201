//! Vapor-liquid flash calculations with cubic equations of state.
//!
//! Given critical constants for every component, a temperature, a
//! pressure, and an overall composition, [`CubicEos::tp_flash`] splits
//! the mixture into a vapor and a liquid phase with equal component
//! fugacities. The Peng-Robinson and Soave-Redlich-Kwong families are
//! available as [`PengRobinson`] and [`SoaveRedlichKwong`].
//!
//! ```no_run
//! use cubic_flash::{ComponentRecord, CubicEos, PengRobinson, SolverOptions};
//! use ndarray::arr1;
//!
//! # fn main() -> cubic_flash::EosResult<()> {
//! let methane = ComponentRecord::new("methane", 190.6, 4.5992e6, 0.011, 8.07131, 1730.63, 233.426);
//! let ethane = ComponentRecord::new("ethane", 305.4, 4.872e6, 0.099, 8.21201, 1652.57, 229.387);
//! let eos = CubicEos::<PengRobinson>::new(vec![methane, ethane], 300.0, 5e6)?;
//! let split = eos.tp_flash(&arr1(&[0.5, 0.5]), SolverOptions::default())?;
//! println!("{}", split);
//! # Ok(())
//! # }
//! ```
#![warn(clippy::all)]
#![allow(clippy::many_single_char_names)]

/// Print messages with level `Verbosity::Iter` or higher.
#[macro_export]
macro_rules! log_iter {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::Verbosity::Iter {
            println!($($arg)*);
        }
    }
}

/// Print messages with level `Verbosity::Result` or higher.
#[macro_export]
macro_rules! log_result {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::Verbosity::Result {
            println!($($arg)*);
        }
    }
}

pub mod cubic;
mod eos;
mod errors;
pub mod parameter;
mod phase_equilibria;

pub use eos::{CubicEos, CubicModel, PengRobinson, Phase, SoaveRedlichKwong, GAS_CONSTANT};
pub use errors::{EosError, EosResult};
pub use parameter::ComponentRecord;
pub use phase_equilibria::{
    bubble_point_pressure, dew_point_pressure, wilson_k, PhaseSplit, SolverOptions, Verbosity,
};
