//! Constants for thermalindex
//!
//! All numeric values that are not part of a published regression live here,
//! named with their units. Regression coefficients (Rothfusz, Blazejczyk,
//! Missenard) stay inline in the formula that uses them so they can be read
//! side by side with the published equation.
//!
//! ## Organization
//!
//! - **Physics**: scale offsets, conversion factors, vapour pressure fit
//! - **Comfort**: defaults substituted for absent parameters and index
//!   thresholds

/// Physical constants and unit conversion factors.
pub mod physics;

/// Defaults and thresholds used by the comfort index formulas.
pub mod comfort;

pub use comfort::{DEFAULT_RELATIVE_HUMIDITY_PCT, STILL_AIR_SPEED_M_PER_S};
pub use physics::{CELSIUS_KELVIN_OFFSET, FAHRENHEIT_FREEZING_POINT, FAHRENHEIT_PER_CELSIUS};
