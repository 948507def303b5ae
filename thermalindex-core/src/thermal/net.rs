//! Net Effective Temperature (Missenard)
//!
//! ```text
//! NET = 37 − (37 − T) / (0.68 − 0.0014·RH + 1/(1.76 + 1.4·v^0.75))
//!          − 0.29·T·(1 − 0.01·RH)
//! ```
//!
//! The air speed term `v` is fixed at 0: this variant is the still-air
//! effective temperature and ignores any configured air speed. The result is
//! rounded with the process-wide default precision before it is wrapped.

use crate::errors::ThermalResult;
use crate::precision;
use crate::temperature::Temperature;

use super::{ComfortIndex, Thermal};

/// Air speed used by the formula, whatever the options say (m/s)
const NET_AIR_SPEED_M_PER_S: f64 = 0.0;

impl Thermal {
    /// Net effective temperature in °C. Requires relative humidity.
    pub fn net(&self) -> ThermalResult<Temperature> {
        let humidity = self
            .conditions()
            .require_humidity(ComfortIndex::NetEffectiveTemperature)?;
        let t = self.temperature.celsius();

        let frac = 1.0 / (1.76 + 1.4 * libm::pow(NET_AIR_SPEED_M_PER_S, 0.75));
        let net = 37.0 - (37.0 - t) / (0.68 - 0.0014 * humidity + frac) - 0.29 * t * (1.0 - 0.01 * humidity);

        Ok(Temperature::from_celsius(precision::default_precision().round(net)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ThermalError;
    use crate::thermal::Parameter;

    #[test]
    fn comfortable_room() {
        let net = Thermal::new(Temperature::from_celsius(25.0))
            .humidity(50.0)
            .net()
            .unwrap();

        assert_eq!(net.celsius(), 23.19);
    }

    #[test]
    fn result_is_rounded() {
        let net = Thermal::new(Temperature::from_celsius(30.0))
            .humidity(80.0)
            .net()
            .unwrap();

        assert_eq!(net.celsius(), 29.099);
    }

    #[test]
    fn air_speed_is_ignored() {
        let still = Thermal::new(Temperature::from_celsius(28.0)).humidity(60.0);
        let breezy = still.relative_air_speed(5.0).metabolic_rate(3.0);

        assert_eq!(still.net(), breezy.net());
    }

    #[test]
    fn requires_humidity() {
        assert_eq!(
            Thermal::new(Temperature::from_celsius(25.0)).net(),
            Err(ThermalError::MissingRequiredParameter {
                parameter: Parameter::RelativeHumidity,
                index: ComfortIndex::NetEffectiveTemperature,
            })
        );
    }
}
