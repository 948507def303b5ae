//! Heat Index
//!
//! ## NWS Heat Index
//!
//! The US National Weather Service heat index reproduces Steadman's 1979
//! apparent temperature tables with a regression fitted by Rothfusz (1990).
//! The Weather Prediction Center evaluates it in three stages, all in °F:
//!
//! ```text
//! 1. T ≤ 40°F                → HI = T            (humidity irrelevant)
//! 2. HI₀ = ½·(T + 61 + 1.2·(T − 68) + 0.094·RH)
//!    HI₀ ≤ 79°F              → HI = HI₀
//! 3. otherwise               → HI = Rothfusz(T, RH)
//!      RH < 13%, 80 ≤ T ≤ 112 → HI −= (13 − RH)/4 · √((17 − |T − 95|)/17)
//!      RH > 85%, 80 ≤ T ≤ 87  → HI += (RH − 85)/10 · (87 − T)/5
//! ```
//!
//! Source: https://www.wpc.ncep.noaa.gov/html/heatindex_equation.shtml
//!
//! ## Blazejczyk Heat Index
//!
//! Blazejczyk et al. (2012) fitted the same Steadman table directly in °C.
//! Humidity falls back to 50% when absent, so this index never fails.
//!
//! Source: Blazejczyk K. et al., Comparison of UTCI to selected thermal
//! indices, Int J Biometeorol (2012)

use crate::constants::comfort::{DEFAULT_RELATIVE_HUMIDITY_PCT, HEAT_INDEX_MIN_F, ROTHFUSZ_THRESHOLD_F};
use crate::errors::ThermalResult;
use crate::temperature::Temperature;

use super::{ComfortIndex, Thermal};

impl Thermal {
    /// NWS heat index in °F. Requires relative humidity.
    pub fn heat_index(&self) -> ThermalResult<Temperature> {
        let humidity = self.conditions().require_humidity(ComfortIndex::HeatIndex)?;
        let fahrenheit = self.temperature.fahrenheit();

        if fahrenheit <= HEAT_INDEX_MIN_F {
            return Ok(Temperature::from_fahrenheit(fahrenheit));
        }

        Ok(Temperature::from_fahrenheit(nws_heat_index(fahrenheit, humidity)))
    }

    /// Blazejczyk heat index in °C. Humidity defaults to 50%.
    pub fn blazejczyk_heat_index(&self) -> ThermalResult<Temperature> {
        let humidity = self.conditions().relative_humidity.unwrap_or_else(|| {
            log_debug!(
                "Blazejczyk heat index: no humidity, assuming {}%",
                DEFAULT_RELATIVE_HUMIDITY_PCT
            );
            DEFAULT_RELATIVE_HUMIDITY_PCT
        });

        Ok(Temperature::from_celsius(blazejczyk(self.temperature.celsius(), humidity)))
    }
}

/// Stages 2 and 3 of the NWS procedure, for T above 40°F
fn nws_heat_index(t: f64, rh: f64) -> f64 {
    let simple = 0.5 * (t + (61.0 + ((t - 68.0) * 1.2) + (rh * 0.094)));
    if simple <= ROTHFUSZ_THRESHOLD_F {
        return simple;
    }

    log_trace!("Heat index {}°F above {}°F, using Rothfusz regression", simple, ROTHFUSZ_THRESHOLD_F);
    let mut hi = rothfusz(t, rh);

    if rh < 13.0 && (80.0..=112.0).contains(&t) {
        hi -= ((13.0 - rh) * 0.25) * libm::sqrt((17.0 - libm::fabs(t - 95.0)) * 0.05882);
    } else if rh > 85.0 && (80.0..=87.0).contains(&t) {
        hi += ((rh - 85.0) * 0.1) * ((87.0 - t) * 0.2);
    }
    hi
}

fn rothfusz(t: f64, rh: f64) -> f64 {
    let t2 = libm::pow(t, 2.0);
    let rh2 = libm::pow(rh, 2.0);

    let mut hi = -42.379 + 2.04901523 * t;
    hi += 10.14333127 * rh;
    hi -= 0.22475541 * t * rh;
    hi -= 0.00683783 * t2;
    hi -= 0.05481717 * rh2;
    hi += 0.00122874 * t2 * rh;
    hi += 0.00085282 * t * rh2;
    hi -= 0.00000199 * t2 * rh2;
    hi
}

fn blazejczyk(t: f64, rh: f64) -> f64 {
    let t2 = libm::pow(t, 2.0);
    let rh2 = libm::pow(rh, 2.0);

    let mut hi = -8.784695 + 1.61139411 * t + 2.338549 * rh - 0.14611605 * t * rh;
    hi += -1.2308094 * libm::pow(10.0, -2.0) * t2 - 1.6424828 * libm::pow(10.0, -2.0) * rh2;
    hi += 2.211732 * libm::pow(10.0, -3.0) * t2 * rh + 7.2546 * libm::pow(10.0, -4.0) * t * rh2;
    hi += -3.582 * libm::pow(10.0, -6.0) * t2 * rh2;
    hi
}
