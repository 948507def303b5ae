//! Humidex
//!
//! Developed by the Meteorological Service of Canada (1965) and revised by
//! Masterson and Richardson (1979). It describes how hot, humid weather feels
//! to the average person by adding the excess of vapour pressure over 10 hPa:
//!
//! ```text
//! e  = 6.112 · 10^(7.5·T / (237.7 + T)) · RH/100      (hPa)
//! H  = T + 5/9 · (e − 10)
//! ```
//!
//! The official humidex is defined from dew point; this relative humidity
//! form gives the same vapour pressure without computing it.

use crate::errors::ThermalResult;
use crate::temperature::Temperature;

use super::{ComfortIndex, Thermal};

impl Thermal {
    /// Humidex in °C. Requires relative humidity.
    pub fn humidex(&self) -> ThermalResult<Temperature> {
        let humidity = self.conditions().require_humidity(ComfortIndex::Humidex)?;
        let t = self.temperature.celsius();

        let vapor_hpa = 6.112 * libm::pow(10.0, 7.5 * t / (237.7 + t)) * humidity / 100.0;
        let humidex = t + 5.0 / 9.0 * (vapor_hpa - 10.0);

        Ok(Temperature::from_celsius(humidex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ThermalError;
    use crate::thermal::Parameter;

    #[test]
    fn hot_humid_afternoon() {
        let humidex = Thermal::new(Temperature::from_celsius(30.0))
            .humidity(70.0)
            .humidex()
            .unwrap();

        // Environment Canada table: 30°C at 70% reads 41
        assert!((humidex.celsius() - 40.907_179).abs() < 1e-6);
    }

    #[test]
    fn dry_air_feels_cooler() {
        let humidex = Thermal::new(Temperature::from_celsius(20.0))
            .humidity(0.0)
            .humidex()
            .unwrap();

        assert!((humidex.celsius() - (20.0 - 50.0 / 9.0)).abs() < 1e-9);
    }

    #[test]
    fn requires_humidity() {
        let err = Thermal::new(Temperature::from_celsius(30.0))
            .relative_air_speed(2.0)
            .humidex()
            .unwrap_err();

        assert_eq!(
            err,
            ThermalError::MissingRequiredParameter {
                parameter: Parameter::RelativeHumidity,
                index: ComfortIndex::Humidex,
            }
        );
    }
}
