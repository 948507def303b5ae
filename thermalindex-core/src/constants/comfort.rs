//! Comfort Index Defaults and Thresholds
//!
//! Values substituted when an optional parameter is absent, and the branch
//! thresholds of the heat index.

// ===== DEFAULTS FOR ABSENT PARAMETERS =====

/// Relative humidity assumed when none is configured (%).
///
/// Used by the vapour pressure helper (also when humidity is exactly 0) and
/// by the Blazejczyk heat index (only when absent).
pub const DEFAULT_RELATIVE_HUMIDITY_PCT: f64 = 50.0;

/// Air speed assumed when none is configured (m/s).
///
/// Still air. Fits indoor use of the apparent temperature.
pub const STILL_AIR_SPEED_M_PER_S: f64 = 0.0;

// ===== METABOLIC AIR SPEED CORRECTION =====

/// Metabolic rate of a seated, resting person (met).
///
/// Activity above this level adds body movement to the relative air speed.
pub const RESTING_METABOLIC_RATE_MET: f64 = 1.0;

/// Extra relative air speed per met above rest (m/s per met).
///
/// Source: ASHRAE Standard 55, relative air speed for active occupants
pub const METABOLIC_AIR_SPEED_FACTOR: f64 = 0.3;

// ===== HEAT INDEX THRESHOLDS =====

/// At or below this temperature humidity has no effect on the heat index (°F).
pub const HEAT_INDEX_MIN_F: f64 = 40.0;

/// First-pass heat index above which the Rothfusz regression is used (°F).
///
/// Source: NWS Weather Prediction Center heat index equation
pub const ROTHFUSZ_THRESHOLD_F: f64 = 79.0;
