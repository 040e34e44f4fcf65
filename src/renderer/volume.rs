// SPDX-License-Identifier: MPL-2.0
//! Volume domain type for the transport surface.
//!
//! This module provides a type-safe wrapper for UI-scale volume values
//! (0–100) and the rescaling onto the native control's 0–200 range.

use crate::config::{DEFAULT_UI_VOLUME, MAX_UI_VOLUME, NATIVE_VOLUME_MAX};

/// UI-scale volume level, guaranteed to be within `0..=100`.
///
/// The shell's volume widget speaks 0–100; the native control speaks 0–200.
/// This newtype enforces the UI range at the type level and owns the
/// rescaling, so an out-of-range native write is impossible.
///
/// # Example
///
/// ```
/// use playdeck::renderer::UiVolume;
///
/// let vol = UiVolume::new(50);
/// assert_eq!(vol.value(), 50);
/// assert_eq!(vol.to_native(), 100);
///
/// // Values above the UI range are clamped
/// let too_loud = UiVolume::new(140);
/// assert_eq!(too_loud.value(), 100);
/// assert_eq!(too_loud.to_native(), 200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiVolume(u8);

impl UiVolume {
    /// Creates a new volume level, clamping to the UI range.
    #[must_use]
    pub fn new(level: u8) -> Self {
        Self(level.min(MAX_UI_VOLUME))
    }

    /// Returns the UI-scale value.
    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Rescales linearly onto the native control's `0..=200` range.
    #[must_use]
    pub fn to_native(self) -> u16 {
        u16::from(self.0) * (NATIVE_VOLUME_MAX / u16::from(MAX_UI_VOLUME))
    }

    /// Returns true if the volume is fully down.
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 == 0
    }
}

impl Default for UiVolume {
    fn default() -> Self {
        Self(DEFAULT_UI_VOLUME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_ui_range() {
        assert_eq!(UiVolume::new(0).value(), 0);
        assert_eq!(UiVolume::new(100).value(), 100);
        assert_eq!(UiVolume::new(250).value(), 100);
    }

    #[test]
    fn midpoint_maps_to_native_hundred() {
        assert_eq!(UiVolume::new(50).to_native(), 100);
    }

    #[test]
    fn native_scale_endpoints() {
        assert_eq!(UiVolume::new(0).to_native(), 0);
        assert_eq!(UiVolume::new(100).to_native(), 200);
    }

    #[test]
    fn default_is_expected_volume() {
        assert_eq!(UiVolume::default().value(), DEFAULT_UI_VOLUME);
    }

    #[test]
    fn is_silent_detects_zero_only() {
        assert!(UiVolume::new(0).is_silent());
        assert!(!UiVolume::new(1).is_silent());
        assert!(!UiVolume::new(100).is_silent());
    }
}
