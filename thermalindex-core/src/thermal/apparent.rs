//! Apparent Temperature (Australian Bureau of Meteorology)
//!
//! ## Physics Background
//!
//! Steadman's apparent temperature (1994) estimates the temperature a person
//! would feel in the shade, combining air temperature, water vapour pressure
//! and wind. The Bureau of Meteorology publishes two forms:
//!
//! ```text
//! Without radiation:  AT = Ta + 0.33·e − 0.70·ws − 4.00
//! With radiation:     AT = Ta + 0.348·e − 0.70·ws + 0.70·Q/(ws + 10) − 4.25
//!
//! Ta  dry-bulb temperature (°C)
//! e   water vapour pressure (hPa)
//! ws  wind speed at 10 m (m/s)
//! Q   net radiation absorbed per unit area of body surface (W/m²)
//! ```
//!
//! With air speed 0 the first form works well for indoor spaces, which is
//! why absent air speed means still air here.
//!
//! ## Radiation Branch
//!
//! The radiation form implemented here is
//!
//! ```text
//! AT = Ta + 0.348·e − 0.7·(0.7·Q/(ws + 10)) − 4.25
//! ```
//!
//! The radiation term carries two 0.7 factors, is subtracted, and the
//! `−0.70·ws` term is absent. This does not match the published equation but
//! is kept so results agree with existing deployments of this calculation.
//! Treat values from this branch with care until it is checked against the
//! Bureau's reference.
//!
//! Source: http://www.bom.gov.au/info/thermal_stress/

use crate::constants::comfort::{DEFAULT_RELATIVE_HUMIDITY_PCT, STILL_AIR_SPEED_M_PER_S};
use crate::constants::physics::PA_PER_HPA;
use crate::errors::ThermalResult;
use crate::temperature::Temperature;

use super::{Conditions, Thermal};

impl Thermal {
    /// Apparent temperature in °C.
    ///
    /// Air speed defaults to still air, humidity to 50% (see
    /// [`Thermal::pressure_vapor`]). Never fails.
    pub fn apparent_temperature(&self) -> ThermalResult<Temperature> {
        let conditions = self.conditions();
        let celsius = self.temperature.celsius();
        let air_speed = conditions.air_speed.unwrap_or(STILL_AIR_SPEED_M_PER_S);
        let vapor_hpa = vapor_pressure(&self.temperature, &conditions) / PA_PER_HPA;

        let apparent = match conditions.net_radiation_absorbed {
            Some(radiation) => {
                log_trace!("Apparent temperature: radiation branch, Q = {} W/m²", radiation);
                celsius + 0.348 * vapor_hpa - 0.7 * (0.7 * radiation / (air_speed + 10.0)) - 4.25
            }
            None => celsius + 0.33 * vapor_hpa - 0.7 * air_speed - 4.00,
        };

        Ok(Temperature::from_celsius(apparent))
    }

    /// Partial pressure of water vapour in the air (Pa).
    ///
    /// Humidity of 50% is assumed when none is set or when it is exactly 0.
    /// The options are not modified.
    pub fn pressure_vapor(&self) -> f64 {
        vapor_pressure(&self.temperature, &self.conditions())
    }
}

fn vapor_pressure(temperature: &Temperature, conditions: &Conditions) -> f64 {
    let humidity = match conditions.relative_humidity {
        Some(humidity) if humidity != 0.0 => humidity,
        _ => {
            log_debug!(
                "No usable relative humidity, assuming {}%",
                DEFAULT_RELATIVE_HUMIDITY_PCT
            );
            DEFAULT_RELATIVE_HUMIDITY_PCT
        }
    };
    humidity / 100.0 * temperature.saturation_vapor_pressure()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thermal::Parameter;

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() < 1e-9
    }

    #[test]
    fn still_air_matches_formula() {
        let thermal = Thermal::new(Temperature::from_celsius(25.0)).humidity(60.0);

        let e_hpa = 0.6 * 610.5 * libm::exp(17.27 * 25.0 / (237.7 + 25.0)) / 100.0;
        let expected = 25.0 + 0.33 * e_hpa - 4.0;

        let at = thermal.apparent_temperature().unwrap();
        assert!(close(at.celsius(), expected));
        assert!((at.celsius() - 27.253_427).abs() < 1e-6);
    }

    #[test]
    fn wind_cools() {
        let calm = Thermal::new(Temperature::from_celsius(25.0)).humidity(60.0);
        let windy = calm.relative_air_speed(4.0);

        let delta = calm.apparent_temperature().unwrap().celsius()
            - windy.apparent_temperature().unwrap().celsius();
        assert!(close(delta, 0.7 * 4.0));
    }

    #[test]
    fn exertion_increases_effective_wind() {
        let walking = Thermal::new(Temperature::from_celsius(25.0))
            .humidity(60.0)
            .metabolic_rate(2.0)
            .relative_air_speed(1.0);
        let standing = Thermal::new(Temperature::from_celsius(25.0))
            .humidity(60.0)
            .relative_air_speed(1.3);

        assert!(close(
            walking.apparent_temperature().unwrap().celsius(),
            standing.apparent_temperature().unwrap().celsius()
        ));
    }

    #[test]
    fn radiation_branch_keeps_double_coefficient() {
        let thermal = Thermal::new(Temperature::from_celsius(30.0))
            .humidity(50.0)
            .relative_air_speed(2.0)
            .net_radiation_absorbed(100.0);

        let at = thermal.apparent_temperature().unwrap();
        assert!((at.celsius() - 29.024_633).abs() < 1e-6);
    }

    #[test]
    fn missing_humidity_assumes_fifty_percent() {
        let unset = Thermal::new(Temperature::from_celsius(25.0));
        let zero = unset.humidity(0.0);
        let fifty = unset.humidity(50.0);

        assert_eq!(unset.apparent_temperature(), fifty.apparent_temperature());
        assert_eq!(zero.apparent_temperature(), fifty.apparent_temperature());
        assert!((unset.apparent_temperature().unwrap().celsius() - 26.211_189).abs() < 1e-6);
    }

    #[test]
    fn pressure_vapor_is_pure() {
        let thermal = Thermal::new(Temperature::from_celsius(20.0)).humidity(0.0);

        let first = thermal.pressure_vapor();
        let second = thermal.pressure_vapor();

        assert_eq!(first, second);
        assert!(close(first, 0.5 * thermal.temperature().saturation_vapor_pressure()));
        assert_eq!(thermal.options().get(Parameter::RelativeHumidity), Some(0.0));
    }

    #[test]
    fn nonsense_inputs_stay_finite() {
        let thermal = Thermal::new(Temperature::from_celsius(35.0))
            .humidity(-20.0)
            .relative_air_speed(-3.0);

        assert!(thermal.apparent_temperature().unwrap().celsius().is_finite());
    }
}
