//! Physical Constants for thermalindex
//!
//! Scale offsets and the saturation vapour pressure fit shared by the unit
//! conversions and the comfort indices.

// ===== TEMPERATURE SCALES =====

/// Offset between the Celsius and Kelvin scales (K).
///
/// 0°C = 273.15 K exactly.
///
/// Source: SI Brochure, 9th edition (2019)
pub const CELSIUS_KELVIN_OFFSET: f64 = 273.15;

/// Water freezing point on the Fahrenheit scale (°F).
pub const FAHRENHEIT_FREEZING_POINT: f64 = 32.0;

/// Size of one Celsius degree in Fahrenheit degrees.
pub const FAHRENHEIT_PER_CELSIUS: f64 = 1.8;

/// Absolute zero in Celsius (°C).
///
/// Not enforced by constructors; sentinels and nonsense inputs are allowed.
pub const ABSOLUTE_ZERO_CELSIUS: f64 = -CELSIUS_KELVIN_OFFSET;

// ===== SATURATION VAPOUR PRESSURE =====

/// Saturation vapour pressure of water at 0°C (Pa).
///
/// Leading coefficient of the Magnus-type fit published by the Australian
/// Bureau of Meteorology alongside its apparent temperature equation
/// (6.105 hPa).
///
/// Source: http://www.bom.gov.au/info/thermal_stress/
pub const SATURATION_PRESSURE_AT_ZERO_PA: f64 = 610.5;

/// Magnus fit exponent coefficient (dimensionless).
pub const MAGNUS_A: f64 = 17.27;

/// Magnus fit temperature offset (°C).
pub const MAGNUS_B_C: f64 = 237.7;

/// Pascals per hectopascal.
pub const PA_PER_HPA: f64 = 100.0;
