//! Temperature value type
//!
//! A [`Temperature`] stores all three scales at construction time so reading
//! any of them is free and always agrees with what the conversion rules in
//! [`crate::convert`] produced. The scale the value was created from is kept
//! exactly as supplied; the other two are rounded.
//!
//! Comparisons and equality look at Celsius only. Two readings created from
//! different scales compare equal when their Celsius values match, even if
//! the rounded Kelvin values differ in the last digit.
//!
//! ```rust
//! use thermalindex_core::Temperature;
//!
//! let body = Temperature::from_celsius(37.0);
//! assert_eq!(body.fahrenheit(), 98.6);
//! assert_eq!(body.kelvin(), 310.15);
//!
//! let room = Temperature::from_fahrenheit(70.0);
//! assert!(body.greater_than(&room));
//! ```

use core::cmp::Ordering;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::constants::physics::{MAGNUS_A, MAGNUS_B_C, SATURATION_PRESSURE_AT_ZERO_PA};
use crate::convert;
use crate::precision::{self, Precision};

/// Temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Scale {
    /// Degrees Celsius
    Celsius,
    /// Degrees Fahrenheit
    Fahrenheit,
    /// Kelvin
    Kelvin,
}

impl Scale {
    /// Unit symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Scale::Celsius => "°C",
            Scale::Fahrenheit => "°F",
            Scale::Kelvin => "K",
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// One physical temperature in Celsius, Fahrenheit and Kelvin
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Temperature {
    celsius: f64,
    fahrenheit: f64,
    kelvin: f64,
}

impl Temperature {
    /// Lowest representable temperature.
    ///
    /// Seed for maximum searches; not a physical value.
    pub const MIN: Temperature = Temperature {
        celsius: f64::MIN,
        fahrenheit: f64::MIN,
        kelvin: f64::MIN,
    };

    /// Highest representable temperature.
    ///
    /// Seed for minimum searches; not a physical value.
    pub const MAX: Temperature = Temperature {
        celsius: f64::MAX,
        fahrenheit: f64::MAX,
        kelvin: f64::MAX,
    };

    /// From degrees Celsius, using the process-wide default precision
    pub fn from_celsius(celsius: f64) -> Self {
        Self::from_celsius_with(celsius, precision::default_precision())
    }

    /// From degrees Fahrenheit, using the process-wide default precision
    pub fn from_fahrenheit(fahrenheit: f64) -> Self {
        Self::from_fahrenheit_with(fahrenheit, precision::default_precision())
    }

    /// From Kelvin, using the process-wide default precision
    pub fn from_kelvin(kelvin: f64) -> Self {
        Self::from_kelvin_with(kelvin, precision::default_precision())
    }

    /// From degrees Celsius with an explicit precision
    pub fn from_celsius_with(celsius: f64, precision: Precision) -> Self {
        Self {
            celsius,
            fahrenheit: convert::celsius_to_fahrenheit(celsius, precision),
            kelvin: convert::celsius_to_kelvin(celsius, precision),
        }
    }

    /// From degrees Fahrenheit with an explicit precision
    pub fn from_fahrenheit_with(fahrenheit: f64, precision: Precision) -> Self {
        Self {
            celsius: convert::fahrenheit_to_celsius(fahrenheit, precision),
            fahrenheit,
            kelvin: convert::fahrenheit_to_kelvin(fahrenheit, precision),
        }
    }

    /// From Kelvin with an explicit precision
    pub fn from_kelvin_with(kelvin: f64, precision: Precision) -> Self {
        Self {
            celsius: convert::kelvin_to_celsius(kelvin, precision),
            fahrenheit: convert::kelvin_to_fahrenheit(kelvin, precision),
            kelvin,
        }
    }

    /// From a value in the given scale, using the default precision
    pub fn from_scale(value: f64, scale: Scale) -> Self {
        match scale {
            Scale::Celsius => Self::from_celsius(value),
            Scale::Fahrenheit => Self::from_fahrenheit(value),
            Scale::Kelvin => Self::from_kelvin(value),
        }
    }

    /// Degrees Celsius
    #[inline]
    pub fn celsius(&self) -> f64 {
        self.celsius
    }

    /// Degrees Fahrenheit
    #[inline]
    pub fn fahrenheit(&self) -> f64 {
        self.fahrenheit
    }

    /// Kelvin
    #[inline]
    pub fn kelvin(&self) -> f64 {
        self.kelvin
    }

    /// Value in the given scale
    pub fn value_in(&self, scale: Scale) -> f64 {
        match scale {
            Scale::Celsius => self.celsius,
            Scale::Fahrenheit => self.fahrenheit,
            Scale::Kelvin => self.kelvin,
        }
    }

    /// Strictly warmer than `other` (Celsius comparison)
    #[inline]
    pub fn greater_than(&self, other: &Temperature) -> bool {
        self.celsius > other.celsius
    }

    /// Strictly colder than `other` (Celsius comparison)
    #[inline]
    pub fn less_than(&self, other: &Temperature) -> bool {
        self.celsius < other.celsius
    }

    /// True for [`Temperature::MIN`] and [`Temperature::MAX`]
    pub fn is_sentinel(&self) -> bool {
        self.celsius == f64::MIN || self.celsius == f64::MAX
    }

    /// Saturation vapour pressure of water at this temperature (Pa).
    ///
    /// Magnus-type fit used by the Bureau of Meteorology:
    /// `610.5 * exp(17.27 * T / (237.7 + T))`, T in °C.
    pub fn saturation_vapor_pressure(&self) -> f64 {
        SATURATION_PRESSURE_AT_ZERO_PA * libm::exp(MAGNUS_A * self.celsius / (MAGNUS_B_C + self.celsius))
    }
}

impl PartialEq for Temperature {
    fn eq(&self, other: &Self) -> bool {
        self.celsius == other.celsius
    }
}

impl PartialOrd for Temperature {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.celsius.partial_cmp(&other.celsius)
    }
}

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = f.precision().unwrap_or(3);
        write!(f, "{:.*}{}", decimals, self.celsius, Scale::Celsius)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Temperature {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{=f64} degC", self.celsius)
    }
}
