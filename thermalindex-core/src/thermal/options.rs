//! Environmental parameters for the comfort indices
//!
//! [`ThermalOptions`] collects the optional inputs. Each field is an
//! `Option<f64>` so "not measured" and "measured as 0" stay distinct; several
//! formulas substitute a default only for the former.
//!
//! The builder is functional: every setter consumes the options and returns
//! a new value. Nothing is derived while setting. [`ThermalOptions::finalize`]
//! reads all fields at once and produces [`Conditions`], which is what the
//! formulas consume. Effective air speed is derived there, so the order in
//! which air speed and metabolic rate were set does not matter:
//!
//! ```rust
//! use thermalindex_core::ThermalOptions;
//!
//! let a = ThermalOptions::new().metabolic_rate(2.0).relative_air_speed(0.5);
//! let b = ThermalOptions::new().relative_air_speed(0.5).metabolic_rate(2.0);
//!
//! assert_eq!(a.finalize().air_speed, Some(0.8));
//! assert_eq!(a.finalize(), b.finalize());
//! ```

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::comfort::{METABOLIC_AIR_SPEED_FACTOR, RESTING_METABOLIC_RATE_MET};
use crate::errors::{ThermalError, ThermalResult};

use super::ComfortIndex;

/// Optional environmental parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Parameter {
    /// Relative air speed (m/s)
    RelativeAirSpeed,
    /// Relative humidity (%)
    RelativeHumidity,
    /// Metabolic rate (met)
    MetabolicRate,
    /// Net radiation absorbed by the body (W/m²)
    NetRadiationAbsorbed,
}

impl Parameter {
    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            Parameter::RelativeAirSpeed => "relative air speed",
            Parameter::RelativeHumidity => "relative humidity",
            Parameter::MetabolicRate => "metabolic rate",
            Parameter::NetRadiationAbsorbed => "net radiation absorbed",
        }
    }

    /// Unit the parameter is expressed in
    pub fn unit(self) -> &'static str {
        match self {
            Parameter::RelativeAirSpeed => "m/s",
            Parameter::RelativeHumidity => "%",
            Parameter::MetabolicRate => "met",
            Parameter::NetRadiationAbsorbed => "W/m²",
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Optional inputs as set by the caller
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThermalOptions {
    relative_air_speed: Option<f64>,
    relative_humidity: Option<f64>,
    metabolic_rate: Option<f64>,
    net_radiation_absorbed: Option<f64>,
}

impl ThermalOptions {
    /// No parameters set
    pub fn new() -> Self {
        Self::default()
    }

    /// Set relative humidity (%). Not range checked.
    pub fn relative_humidity(mut self, humidity: f64) -> Self {
        self.relative_humidity = Some(humidity);
        self
    }

    /// Alias of [`ThermalOptions::relative_humidity`]
    pub fn humidity(self, humidity: f64) -> Self {
        self.relative_humidity(humidity)
    }

    /// Set the measured relative air speed (m/s).
    ///
    /// The metabolic correction is applied by [`ThermalOptions::finalize`].
    pub fn relative_air_speed(mut self, speed: f64) -> Self {
        self.relative_air_speed = Some(speed);
        self
    }

    /// Set metabolic rate (met)
    pub fn metabolic_rate(mut self, rate: f64) -> Self {
        self.metabolic_rate = Some(rate);
        self
    }

    /// Set net radiation absorbed by the body (W/m²)
    pub fn net_radiation_absorbed(mut self, radiation: f64) -> Self {
        self.net_radiation_absorbed = Some(radiation);
        self
    }

    /// Value of a parameter as it was set, before any derivation
    pub fn get(&self, parameter: Parameter) -> Option<f64> {
        match parameter {
            Parameter::RelativeAirSpeed => self.relative_air_speed,
            Parameter::RelativeHumidity => self.relative_humidity,
            Parameter::MetabolicRate => self.metabolic_rate,
            Parameter::NetRadiationAbsorbed => self.net_radiation_absorbed,
        }
    }

    /// Resolve the options into the values the formulas use.
    ///
    /// Effective air speed adds `0.3 m/s` per met above resting when both air
    /// speed and a metabolic rate above 1 met are present. Absent air speed
    /// stays absent.
    pub fn finalize(&self) -> Conditions {
        if let Some(humidity) = self.relative_humidity {
            if !(0.0..=100.0).contains(&humidity) {
                log_warn!("Relative humidity {}% is outside 0-100%", humidity);
            }
        }

        let air_speed = self.relative_air_speed.map(|speed| match self.metabolic_rate {
            Some(rate) if rate > RESTING_METABOLIC_RATE_MET => {
                let effective = speed + METABOLIC_AIR_SPEED_FACTOR * (rate - RESTING_METABOLIC_RATE_MET);
                log_trace!(
                    "Air speed {} m/s raised to {} m/s for {} met",
                    speed, effective, rate
                );
                effective
            }
            _ => speed,
        });

        Conditions {
            relative_humidity: self.relative_humidity,
            air_speed,
            metabolic_rate: self.metabolic_rate,
            net_radiation_absorbed: self.net_radiation_absorbed,
        }
    }
}

/// Finalized inputs read by the comfort index formulas
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Conditions {
    /// Relative humidity (%)
    pub relative_humidity: Option<f64>,
    /// Effective relative air speed (m/s), metabolic correction included
    pub air_speed: Option<f64>,
    /// Metabolic rate (met), as set.
    ///
    /// Not read by any formula; its effect is already folded into
    /// `air_speed`. Kept for callers reporting the conditions.
    pub metabolic_rate: Option<f64>,
    /// Net radiation absorbed (W/m²)
    pub net_radiation_absorbed: Option<f64>,
}

impl Conditions {
    /// Relative humidity, or an error naming the index that needs it
    pub fn require_humidity(&self, index: ComfortIndex) -> ThermalResult<f64> {
        match self.relative_humidity {
            Some(humidity) => Ok(humidity),
            None => Err(ThermalError::MissingRequiredParameter {
                parameter: Parameter::RelativeHumidity,
                index,
            }),
        }
    }
}
