//! Thermal Comfort Indices
//!
//! ## Overview
//!
//! Air temperature alone is a poor guide to how hot or cold a person feels.
//! Humidity slows evaporative cooling, wind speeds it up, sunshine adds heat.
//! Each index in this module folds some of those factors into a single
//! "feels like" temperature:
//!
//! | Index                                   | Inputs used               | Scale |
//! |-----------------------------------------|---------------------------|-------|
//! | [`Thermal::apparent_temperature`]       | T, RH, air speed, Q       | °C    |
//! | [`Thermal::heat_index`]                 | T, RH                     | °F    |
//! | [`Thermal::blazejczyk_heat_index`]      | T, RH                     | °C    |
//! | [`Thermal::humidex`]                    | T, RH                     | °C    |
//! | [`Thermal::net`]                        | T, RH                     | °C    |
//!
//! Every formula is a pure function of the temperature and the finalized
//! [`Conditions`]. Nothing is written back into the options, so a `Thermal`
//! can be reused for any number of indices and shared between threads.
//!
//! ## Building a Thermal
//!
//! ```rust
//! use thermalindex_core::{ComfortIndex, Temperature, Thermal};
//!
//! let thermal = Thermal::new(Temperature::from_celsius(31.0))
//!     .humidity(65.0)
//!     .relative_air_speed(1.5)
//!     .metabolic_rate(2.0);
//!
//! for index in ComfortIndex::ALL {
//!     let felt = thermal.compute(index)?;
//!     println!("{index}: {:.1}{}", felt.value_in(index.native_scale()), index.native_scale());
//! }
//! # Ok::<(), thermalindex_core::ThermalError>(())
//! ```

mod apparent;
mod heat_index;
mod humidex;
mod net;
mod options;

pub use options::{Conditions, Parameter, ThermalOptions};

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::ThermalResult;
use crate::temperature::{Scale, Temperature};

/// Comfort index selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ComfortIndex {
    /// Bureau of Meteorology apparent temperature
    ApparentTemperature,
    /// NWS heat index (Rothfusz regression)
    HeatIndex,
    /// Blazejczyk et al. (2012) heat index fit
    BlazejczykHeatIndex,
    /// Canadian humidex
    Humidex,
    /// Missenard net effective temperature
    NetEffectiveTemperature,
}

impl ComfortIndex {
    /// Every index, in declaration order
    pub const ALL: [ComfortIndex; 5] = [
        ComfortIndex::ApparentTemperature,
        ComfortIndex::HeatIndex,
        ComfortIndex::BlazejczykHeatIndex,
        ComfortIndex::Humidex,
        ComfortIndex::NetEffectiveTemperature,
    ];

    /// Human readable name
    pub fn name(self) -> &'static str {
        match self {
            ComfortIndex::ApparentTemperature => "apparent temperature",
            ComfortIndex::HeatIndex => "heat index",
            ComfortIndex::BlazejczykHeatIndex => "Blazejczyk heat index",
            ComfortIndex::Humidex => "humidex",
            ComfortIndex::NetEffectiveTemperature => "net effective temperature",
        }
    }

    /// Scale the formula works in and reports
    pub fn native_scale(self) -> Scale {
        match self {
            ComfortIndex::HeatIndex => Scale::Fahrenheit,
            _ => Scale::Celsius,
        }
    }

    /// Whether the index fails without relative humidity
    pub fn requires_humidity(self) -> bool {
        matches!(
            self,
            ComfortIndex::HeatIndex | ComfortIndex::Humidex | ComfortIndex::NetEffectiveTemperature
        )
    }
}

impl fmt::Display for ComfortIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A temperature reading together with its environmental parameters
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Thermal {
    temperature: Temperature,
    options: ThermalOptions,
}

impl Thermal {
    /// Wrap a temperature with no parameters set
    pub fn new(temperature: Temperature) -> Self {
        Self::with_options(temperature, ThermalOptions::new())
    }

    /// Wrap a temperature with prepared options
    pub fn with_options(temperature: Temperature, options: ThermalOptions) -> Self {
        Self { temperature, options }
    }

    /// The dry-bulb temperature
    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    /// Options as set
    pub fn options(&self) -> &ThermalOptions {
        &self.options
    }

    /// Finalized parameters the formulas read
    pub fn conditions(&self) -> Conditions {
        self.options.finalize()
    }

    /// Set relative humidity (%)
    pub fn humidity(self, humidity: f64) -> Self {
        self.map_options(|options| options.humidity(humidity))
    }

    /// Alias of [`Thermal::humidity`]
    pub fn relative_humidity(self, humidity: f64) -> Self {
        self.map_options(|options| options.relative_humidity(humidity))
    }

    /// Set relative air speed (m/s)
    pub fn relative_air_speed(self, speed: f64) -> Self {
        self.map_options(|options| options.relative_air_speed(speed))
    }

    /// Set metabolic rate (met)
    pub fn metabolic_rate(self, rate: f64) -> Self {
        self.map_options(|options| options.metabolic_rate(rate))
    }

    /// Set net radiation absorbed (W/m²)
    pub fn net_radiation_absorbed(self, radiation: f64) -> Self {
        self.map_options(|options| options.net_radiation_absorbed(radiation))
    }

    /// Compute the selected index
    pub fn compute(&self, index: ComfortIndex) -> ThermalResult<Temperature> {
        match index {
            ComfortIndex::ApparentTemperature => self.apparent_temperature(),
            ComfortIndex::HeatIndex => self.heat_index(),
            ComfortIndex::BlazejczykHeatIndex => self.blazejczyk_heat_index(),
            ComfortIndex::Humidex => self.humidex(),
            ComfortIndex::NetEffectiveTemperature => self.net(),
        }
    }

    fn map_options(self, f: impl FnOnce(ThermalOptions) -> ThermalOptions) -> Self {
        Self {
            temperature: self.temperature,
            options: f(self.options),
        }
    }
}

impl From<Temperature> for Thermal {
    fn from(temperature: Temperature) -> Self {
        Self::new(temperature)
    }
}
