//! Process-wide precision lifecycle
//!
//! Kept in its own test binary with a single test: changing the default is
//! process-global and would race with any test running alongside it.

use thermalindex_core::precision::{default_precision, set_default_precision};
use thermalindex_core::{Precision, Temperature, Thermal};

#[test]
fn default_precision_affects_only_later_constructions() {
    assert_eq!(default_precision(), Precision::DEFAULT);
    assert_eq!(Precision::default(), Precision::DEFAULT);

    let before = Temperature::from_fahrenheit(0.0);
    assert_eq!(before.celsius(), -17.778);

    set_default_precision(Precision::from_decimals(2));

    let after = Temperature::from_fahrenheit(0.0);
    assert_eq!(after.celsius(), -17.78);
    assert_eq!(after.kelvin(), 255.37);
    // Earlier values keep their rounding
    assert_eq!(before.celsius(), -17.778);

    // Net effective temperature rounds with the default too
    let net = Thermal::new(Temperature::from_celsius(25.0))
        .humidity(50.0)
        .net()
        .unwrap();
    assert_eq!(net.celsius(), 23.19);

    set_default_precision(Precision::DEFAULT);
    assert_eq!(Temperature::from_fahrenheit(100.0).celsius(), 37.778);
}
