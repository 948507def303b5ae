//! Shared fixtures for integration tests
//!
//! Reference readings with the index values published in the NWS heat index
//! chart and the Environment Canada humidex table, plus a synthetic day of
//! readings for the high/low tracker.

#![allow(dead_code)]

use thermalindex_core::{Temperature, Thermal, TimeMap, Timestamp};

/// Milliseconds in one hour
pub const HOUR_MS: Timestamp = 3_600_000;

/// (°F, RH %, heat index °F rounded) from the NWS heat index chart
pub const NWS_CHART: &[(f64, f64, f64)] = &[
    (80.0, 40.0, 80.0),
    (90.0, 60.0, 100.0),
    (95.0, 50.0, 105.0),
    (100.0, 40.0, 109.0),
];

/// (°C, RH %, humidex rounded) from the Environment Canada humidex table
pub const HUMIDEX_TABLE: &[(f64, f64, f64)] = &[
    (30.0, 50.0, 36.0),
    (30.0, 70.0, 41.0),
];

/// A humid summer reading with every parameter set
pub fn summer_afternoon() -> Thermal {
    Thermal::new(Temperature::from_celsius(32.0))
        .humidity(55.0)
        .relative_air_speed(1.2)
        .metabolic_rate(1.6)
        .net_radiation_absorbed(180.0)
}

/// Hourly readings following a simple diurnal curve: coldest at 03:00,
/// warmest at 15:00.
pub fn diurnal_day(min_celsius: f64, max_celsius: f64) -> TimeMap {
    let mean = (min_celsius + max_celsius) / 2.0;
    let amplitude = (max_celsius - min_celsius) / 2.0;

    (0..24u64)
        .map(|hour| {
            let phase = (hour as f64 - 15.0) / 24.0 * core::f64::consts::TAU;
            let celsius = mean + amplitude * phase.cos();
            (hour * HOUR_MS, Temperature::from_celsius(celsius))
        })
        .collect()
}
