//! Property tests for the unit conversions

use proptest::prelude::*;

use thermalindex_core::convert::{
    celsius_to_fahrenheit, celsius_to_kelvin, fahrenheit_to_celsius, fahrenheit_to_kelvin,
    kelvin_to_celsius, kelvin_to_fahrenheit,
};
use thermalindex_core::{Precision, Temperature};

/// Round trips lose at most one rounding step at the default scale
const ROUND_TRIP_TOLERANCE: f64 = 0.005;

proptest! {
    #[test]
    fn celsius_fahrenheit_round_trip(celsius in -100.0f64..150.0) {
        let back = fahrenheit_to_celsius(celsius_to_fahrenheit(celsius, Precision::DEFAULT), Precision::DEFAULT);
        prop_assert!((back - celsius).abs() < ROUND_TRIP_TOLERANCE, "{} -> {}", celsius, back);
    }

    #[test]
    fn celsius_kelvin_round_trip(celsius in -273.15f64..1000.0) {
        let back = kelvin_to_celsius(celsius_to_kelvin(celsius, Precision::DEFAULT), Precision::DEFAULT);
        prop_assert!((back - celsius).abs() < ROUND_TRIP_TOLERANCE);
    }

    #[test]
    fn conversions_land_on_the_precision_grid(value in -500.0f64..500.0, decimals in 0u8..5) {
        let precision = Precision::from_decimals(decimals);
        let scale = f64::from(precision.scale());

        for converted in [
            fahrenheit_to_celsius(value, precision),
            fahrenheit_to_kelvin(value, precision),
            celsius_to_fahrenheit(value, precision),
            kelvin_to_fahrenheit(value, precision),
        ] {
            let scaled = converted * scale;
            prop_assert!((scaled - scaled.round()).abs() < 1e-6, "{} off grid at {}", converted, precision);
        }
    }

    #[test]
    fn scales_agree_within_precision(celsius in -90.0f64..60.0) {
        let t = Temperature::from_celsius_with(celsius, Precision::DEFAULT);
        let via_fahrenheit = Temperature::from_fahrenheit_with(t.fahrenheit(), Precision::DEFAULT);
        let via_kelvin = Temperature::from_kelvin_with(t.kelvin(), Precision::DEFAULT);

        prop_assert!((via_fahrenheit.celsius() - celsius).abs() < ROUND_TRIP_TOLERANCE);
        prop_assert!((via_kelvin.celsius() - celsius).abs() < ROUND_TRIP_TOLERANCE);
        prop_assert!((via_kelvin.fahrenheit() - t.fahrenheit()).abs() < 0.01);
    }

    #[test]
    fn ordering_follows_celsius(a in -100.0f64..100.0, b in -100.0f64..100.0) {
        let ta = Temperature::from_celsius(a);
        let tb = Temperature::from_celsius(b);

        prop_assert_eq!(ta.greater_than(&tb), a > b);
        prop_assert_eq!(ta.less_than(&tb), a < b);
    }
}
