//! Rounding Precision for Unit Conversions
//!
//! ## Overview
//!
//! Every conversion between temperature scales is rounded to a fixed number
//! of decimals, and the rounding happens at each step, not just at the end.
//! Fahrenheit to Kelvin goes through a rounded Celsius value first, so the
//! result can differ in the last digit from a direct computation. Keeping
//! this behaviour makes readings converted by this crate match readings
//! converted by other tools built on the same rules.
//!
//! ## Scale Factor
//!
//! Precision is expressed as a scale factor:
//!
//! ```text
//! rounded = round(value * scale) / scale
//!
//! scale = 1000  →  3 decimals  (default)
//! scale = 100   →  2 decimals
//! scale = 1     →  whole degrees
//! ```
//!
//! `round` is half away from zero (`libm::round`), so `-0.0005` at scale 1000
//! becomes `-0.001`.
//!
//! ## Process-Wide Default
//!
//! The conversion functions in [`crate::convert`] take a [`Precision`]
//! explicitly. The convenience constructors on
//! [`Temperature`](crate::Temperature) read the process-wide default instead,
//! which starts at [`Precision::DEFAULT`].
//!
//! Lifecycle: set it once at startup with [`set_default_precision`]. Changing
//! it mid-run is allowed; it affects conversions made afterwards, never
//! temperatures that were already constructed.
//!
//! ```rust
//! use thermalindex_core::precision::{self, Precision};
//! use thermalindex_core::convert;
//!
//! let two_decimals = Precision::from_decimals(2);
//! assert_eq!(convert::fahrenheit_to_celsius(0.0, two_decimals), -17.78);
//! assert_eq!(convert::fahrenheit_to_celsius(0.0, Precision::DEFAULT), -17.778);
//!
//! // Startup configuration
//! precision::set_default_precision(two_decimals);
//! assert_eq!(precision::default_precision(), two_decimals);
//! # precision::set_default_precision(Precision::DEFAULT);
//! ```

use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Scale factor of the default precision (3 decimals)
pub const DEFAULT_SCALE: u32 = 1000;

static DEFAULT_PRECISION_SCALE: AtomicU32 = AtomicU32::new(DEFAULT_SCALE);

/// Rounding policy applied at every conversion step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Precision {
    scale: u32,
}

impl Default for Precision {
    /// The current process-wide default, see [`default_precision`]
    fn default() -> Self {
        default_precision()
    }
}

impl Precision {
    /// Three decimals (scale factor 1000)
    pub const DEFAULT: Precision = Precision {
        scale: DEFAULT_SCALE,
    };

    /// Create a precision from a scale factor.
    ///
    /// A scale of 0 would divide by zero; it is raised to 1 (whole degrees).
    pub fn new(scale: u32) -> Self {
        if scale == 0 {
            log_warn!("Precision scale 0 is not usable, rounding to whole degrees");
        }
        Self {
            scale: scale.max(1),
        }
    }

    /// Create a precision that keeps `decimals` digits after the point.
    ///
    /// Saturates at 9 decimals, the most a `u32` scale can express.
    pub fn from_decimals(decimals: u8) -> Self {
        Self::new(10u32.pow(u32::from(decimals.min(9))))
    }

    /// Scale factor
    pub fn scale(self) -> u32 {
        self.scale
    }

    /// Round `value` to this precision, half away from zero
    #[inline]
    pub fn round(self, value: f64) -> f64 {
        let scale = f64::from(self.scale);
        libm::round(value * scale) / scale
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1/{}", self.scale)
    }
}

/// The process-wide default precision.
pub fn default_precision() -> Precision {
    Precision {
        scale: DEFAULT_PRECISION_SCALE.load(Ordering::Relaxed),
    }
}

/// Replace the process-wide default precision.
///
/// Intended to be called once at startup. Temperatures constructed earlier
/// keep the values they were rounded to.
pub fn set_default_precision(precision: Precision) {
    let previous = DEFAULT_PRECISION_SCALE.swap(precision.scale, Ordering::Relaxed);
    if previous != precision.scale {
        log_debug!("Default precision changed from 1/{} to {}", previous, precision);
    }
}
