//! High/low tracking over a series of readings
//!
//! [`HighLow`] starts from the sentinels [`Temperature::MIN`] (high) and
//! [`Temperature::MAX`] (low) so the first real reading replaces both. A
//! reading replaces an extreme only when strictly warmer or colder, so ties
//! keep the reading already held.
//!
//! With no readings the sentinels come back unchanged; check
//! [`HighLow::has_data`] before displaying the result.
//!
//! ```rust
//! use thermalindex_core::{Temperature, TimeMap};
//!
//! let mut day = TimeMap::new();
//! day.insert(1_000, Temperature::from_celsius(20.0));
//! day.insert(2_000, Temperature::from_celsius(30.0));
//! day.insert(3_000, Temperature::from_celsius(10.0));
//!
//! let extremes = day.high_low();
//! assert_eq!(extremes.high.celsius(), 30.0);
//! assert_eq!(extremes.low.celsius(), 10.0);
//! ```

#[cfg(not(feature = "std"))]
use alloc::collections::{btree_map, BTreeMap};
#[cfg(feature = "std")]
use std::collections::{btree_map, BTreeMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::temperature::Temperature;

/// Timestamp in milliseconds since epoch
pub type Timestamp = u64;

/// Time series keyed by wall-clock time
#[cfg(feature = "chrono")]
pub type DateTimeMap = TimeMap<chrono::DateTime<chrono::Utc>>;

/// Highest and lowest temperature seen
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HighLow {
    /// Warmest reading, [`Temperature::MIN`] until one is observed
    pub high: Temperature,
    /// Coldest reading, [`Temperature::MAX`] until one is observed
    pub low: Temperature,
}

impl Default for HighLow {
    fn default() -> Self {
        Self::new()
    }
}

impl HighLow {
    /// Seeded with the sentinels
    pub fn new() -> Self {
        Self {
            high: Temperature::MIN,
            low: Temperature::MAX,
        }
    }

    /// Fold one reading in
    pub fn observe(&mut self, reading: &Temperature) {
        if reading.greater_than(&self.high) {
            self.high = *reading;
        }
        if reading.less_than(&self.low) {
            self.low = *reading;
        }
    }

    /// False while both extremes are still the sentinels
    pub fn has_data(&self) -> bool {
        !(self.high.is_sentinel() && self.low.is_sentinel())
    }

    /// High minus low in °C, if any reading was observed
    pub fn spread_celsius(&self) -> Option<f64> {
        self.has_data()
            .then(|| self.high.celsius() - self.low.celsius())
    }
}

impl<'a> Extend<&'a Temperature> for HighLow {
    fn extend<I: IntoIterator<Item = &'a Temperature>>(&mut self, readings: I) {
        for reading in readings {
            self.observe(reading);
        }
    }
}

impl Extend<Temperature> for HighLow {
    fn extend<I: IntoIterator<Item = Temperature>>(&mut self, readings: I) {
        for reading in readings {
            self.observe(&reading);
        }
    }
}

impl<'a> FromIterator<&'a Temperature> for HighLow {
    fn from_iter<I: IntoIterator<Item = &'a Temperature>>(readings: I) -> Self {
        let mut high_low = Self::new();
        high_low.extend(readings);
        high_low
    }
}

impl FromIterator<Temperature> for HighLow {
    fn from_iter<I: IntoIterator<Item = Temperature>>(readings: I) -> Self {
        let mut high_low = Self::new();
        high_low.extend(readings);
        high_low
    }
}

/// Temperatures keyed by the time they were taken
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeMap<K: Ord = Timestamp> {
    readings: BTreeMap<K, Temperature>,
}

impl<K: Ord> Default for TimeMap<K> {
    fn default() -> Self {
        Self {
            readings: BTreeMap::new(),
        }
    }
}

impl<K: Ord> TimeMap<K> {
    /// Empty series
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reading, returning the one it replaced
    pub fn insert(&mut self, at: K, reading: Temperature) -> Option<Temperature> {
        self.readings.insert(at, reading)
    }

    /// Reading taken at `at`
    pub fn get(&self, at: &K) -> Option<&Temperature> {
        self.readings.get(at)
    }

    /// Number of readings
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// True when there are no readings
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// Readings in key order
    pub fn iter(&self) -> btree_map::Iter<'_, K, Temperature> {
        self.readings.iter()
    }

    /// Highest and lowest reading, sentinels when empty
    pub fn high_low(&self) -> HighLow {
        let high_low: HighLow = self.readings.values().collect();
        if !high_low.has_data() {
            log_debug!("High/low requested over an empty series");
        }
        high_low
    }
}

impl<K: Ord> FromIterator<(K, Temperature)> for TimeMap<K> {
    fn from_iter<I: IntoIterator<Item = (K, Temperature)>>(readings: I) -> Self {
        Self {
            readings: readings.into_iter().collect(),
        }
    }
}

impl<K: Ord> Extend<(K, Temperature)> for TimeMap<K> {
    fn extend<I: IntoIterator<Item = (K, Temperature)>>(&mut self, readings: I) {
        self.readings.extend(readings);
    }
}

impl<'a, K: Ord> IntoIterator for &'a TimeMap<K> {
    type Item = (&'a K, &'a Temperature);
    type IntoIter = btree_map::Iter<'a, K, Temperature>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
