//! Core thermal comfort engine for thermalindex
//!
//! Turns a dry-bulb temperature plus whatever environmental readings are
//! available into the comfort indices used by weather services and building
//! monitors: apparent temperature, NWS heat index, humidex and the Missenard
//! net effective temperature.
//!
//! Key constraints:
//! - Pure functions, no I/O, no interior mutability
//! - `no_std` + `alloc` friendly (math goes through `libm`)
//! - Unit conversions round at every step so results stay reproducible
//!
//! ```
//! use thermalindex_core::{Temperature, Thermal};
//!
//! let reading = Temperature::from_fahrenheit(95.0);
//! let felt = Thermal::new(reading).humidity(50.0).heat_index()?;
//!
//! assert_eq!(felt.fahrenheit().round(), 105.0);
//! # Ok::<(), thermalindex_core::ThermalError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[macro_use]
mod logging;

pub mod constants;
pub mod convert;
pub mod errors;
pub mod high_low;
pub mod precision;
pub mod temperature;
pub mod thermal;

// Public API
pub use errors::{ThermalError, ThermalResult};
pub use high_low::{HighLow, TimeMap, Timestamp};
pub use precision::Precision;
pub use temperature::{Scale, Temperature};
pub use thermal::{ComfortIndex, Conditions, Parameter, Thermal, ThermalOptions};

#[cfg(feature = "chrono")]
pub use high_low::DateTimeMap;

/// Crate version, taken from the manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
