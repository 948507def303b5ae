//! Error Types for Comfort Index Calculations
//!
//! Every formula in this crate is total over the `f64` domain: humidity above
//! 100%, negative air speed or a sentinel temperature all produce a number,
//! possibly a physically meaningless one, and never a panic. The only way a
//! calculation fails is when an index needs an input that has no sensible
//! default.
//!
//! | Index                      | Needs humidity | Default when absent |
//! |----------------------------|----------------|---------------------|
//! | Apparent temperature       | no             | 50% (also for 0%)   |
//! | Blazejczyk heat index      | no             | 50%                 |
//! | Heat index (NWS)           | yes            | -                   |
//! | Humidex                    | yes            | -                   |
//! | Net effective temperature  | yes            | -                   |
//!
//! ```rust
//! use thermalindex_core::{Parameter, Temperature, Thermal, ThermalError};
//!
//! let thermal = Thermal::new(Temperature::from_celsius(30.0));
//!
//! match thermal.humidex() {
//!     Ok(humidex) => println!("feels like {humidex}"),
//!     Err(ThermalError::MissingRequiredParameter { parameter, .. }) => {
//!         assert_eq!(parameter, Parameter::RelativeHumidity);
//!     }
//! }
//! ```
//!
//! Errors are `Copy` and carry no heap data, so they can be queued or
//! returned from hot loops freely.

use thiserror_no_std::Error;

use crate::thermal::{ComfortIndex, Parameter};

/// Result type for comfort index calculations
pub type ThermalResult<T> = Result<T, ThermalError>;

/// Comfort index calculation errors
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThermalError {
    /// The index cannot be computed without this parameter
    #[error("{parameter} is required to compute {index}")]
    MissingRequiredParameter {
        /// The parameter that was not configured
        parameter: Parameter,
        /// The index that asked for it
        index: ComfortIndex,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for ThermalError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::MissingRequiredParameter { parameter, index } => defmt::write!(
                fmt,
                "{} is required to compute {}",
                parameter.name(),
                index.name()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_parameter_and_index() {
        let err = ThermalError::MissingRequiredParameter {
            parameter: Parameter::RelativeHumidity,
            index: ComfortIndex::Humidex,
        };

        assert_eq!(
            err.to_string(),
            "relative humidity is required to compute humidex"
        );
    }
}
