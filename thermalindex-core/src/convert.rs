//! Temperature Scale Conversions
//!
//! Pure conversions between Celsius, Fahrenheit and Kelvin. Each function
//! rounds its result with the supplied [`Precision`]; composite conversions
//! round their intermediate steps too:
//!
//! ```text
//! °F → °C   round((F - 32) / 1.8)
//! °F → K    round(round((F - 32) / 1.8) + 273.15)     intermediate °C rounded
//! °C → °F   round(C * 1.8 + 32)
//! °C → K    round(C + 273.15)
//! K  → °C   round(K - 273.15)
//! K  → °F   round(round((K - 273.15) * 1.8 + 32))     intermediate °C NOT rounded
//! ```
//!
//! The two composite paths are deliberately asymmetric. Kelvin to Fahrenheit
//! feeds the raw difference into the Celsius to Fahrenheit step, while
//! Fahrenheit to Kelvin works from the rounded Celsius value.

use crate::constants::physics::{
    CELSIUS_KELVIN_OFFSET, FAHRENHEIT_FREEZING_POINT, FAHRENHEIT_PER_CELSIUS,
};
use crate::precision::Precision;

/// Fahrenheit to Celsius
#[inline]
pub fn fahrenheit_to_celsius(fahrenheit: f64, precision: Precision) -> f64 {
    precision.round((fahrenheit - FAHRENHEIT_FREEZING_POINT) / FAHRENHEIT_PER_CELSIUS)
}

/// Fahrenheit to Kelvin, via a rounded Celsius value
#[inline]
pub fn fahrenheit_to_kelvin(fahrenheit: f64, precision: Precision) -> f64 {
    precision.round(fahrenheit_to_celsius(fahrenheit, precision) + CELSIUS_KELVIN_OFFSET)
}

/// Celsius to Fahrenheit
#[inline]
pub fn celsius_to_fahrenheit(celsius: f64, precision: Precision) -> f64 {
    precision.round(celsius * FAHRENHEIT_PER_CELSIUS + FAHRENHEIT_FREEZING_POINT)
}

/// Celsius to Kelvin
#[inline]
pub fn celsius_to_kelvin(celsius: f64, precision: Precision) -> f64 {
    precision.round(celsius + CELSIUS_KELVIN_OFFSET)
}

/// Kelvin to Celsius
#[inline]
pub fn kelvin_to_celsius(kelvin: f64, precision: Precision) -> f64 {
    precision.round(kelvin - CELSIUS_KELVIN_OFFSET)
}

/// Kelvin to Fahrenheit, via an unrounded Celsius value
#[inline]
pub fn kelvin_to_fahrenheit(kelvin: f64, precision: Precision) -> f64 {
    precision.round(celsius_to_fahrenheit(kelvin - CELSIUS_KELVIN_OFFSET, precision))
}
