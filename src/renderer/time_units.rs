// SPDX-License-Identifier: MPL-2.0
//! Time unit conversion utilities for the transport surface.
//!
//! The native control's timeline speaks milliseconds; the transport API
//! exposed to event handlers speaks seconds. These converters are the only
//! place that boundary is crossed.

/// Milliseconds per second as f64 for calculations.
pub const MILLIS_PER_SECOND: f64 = 1_000.0;

/// Converts seconds to milliseconds (i64, the control's timeline unit).
///
/// # Examples
///
/// ```
/// use playdeck::renderer::time_units::secs_to_millis;
///
/// assert_eq!(secs_to_millis(1.0), 1_000);
/// assert_eq!(secs_to_millis(0.5), 500);
/// ```
#[inline]
pub fn secs_to_millis(secs: f64) -> i64 {
    (secs * MILLIS_PER_SECOND) as i64
}

/// Converts milliseconds to seconds (f64).
///
/// # Examples
///
/// ```
/// use playdeck::renderer::time_units::millis_to_secs;
///
/// assert_eq!(millis_to_secs(1_000), 1.0);
/// assert_eq!(millis_to_secs(500), 0.5);
/// ```
#[inline]
pub fn millis_to_secs(millis: i64) -> f64 {
    millis as f64 / MILLIS_PER_SECOND
}
