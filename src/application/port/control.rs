// SPDX-License-Identifier: MPL-2.0
//! Native playback control port definition.
//!
//! This module defines the [`MediaControl`] trait for the externally owned
//! video-playback control the renderer drives. The control owns all actual
//! decode/render/playlist state; the renderer only invokes this surface.
//!
//! # Design Notes
//!
//! - The control's timeline speaks **milliseconds**, and raw readings may be
//!   out of range (negative elapsed, zero length); the renderer clamps.
//! - [`MediaControl::probe`] folds the is-playing check and the timeline read
//!   into one result so a fault between the two reads cannot surface as an
//!   exception — the wrapper classifies it as [`PlaybackProbe::Faulted`].
//! - The control's state transitions are not atomic with respect to these
//!   reads; callers must treat any fault as possible mid-teardown noise.

use crate::error::PlaybackFault;

/// Handle to an item the control has accepted into its queue.
///
/// Opaque to the renderer; it is only ever handed back to
/// [`MediaControl::play_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemId(u64);

impl ItemId {
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// One combined sample of the control's playback state.
///
/// Returned by [`MediaControl::probe`] on every poll tick. The wrapper layer
/// decides the classification; raised errors never cross this boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackProbe {
    /// The control reports active playback, with raw timeline readings in
    /// milliseconds. Values are raw: `elapsed_ms` may be negative or exceed
    /// `length_ms`, and `length_ms` may be zero.
    Playing { elapsed_ms: i64, length_ms: i64 },

    /// The control reports no active playback.
    Stopped,

    /// Reading the control's state failed (mid-teardown or inconsistent).
    Faulted(PlaybackFault),
}

/// Port for the embedded video-playback control.
///
/// Implementations must be `Send` so a control (or a renderer owning one) can
/// be handed to a dispatch context. The renderer never owns the control's
/// lifecycle; dropping the trait object must not tear the control down.
pub trait MediaControl: Send {
    /// Number of items currently queued in the control.
    fn queued_count(&self) -> usize;

    /// Appends a URL to the control's queue.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackFault`] if the control rejects the item.
    fn enqueue(&mut self, url: &str) -> Result<ItemId, PlaybackFault>;

    /// Removes every queued item.
    fn clear_queue(&mut self);

    /// Whether the control reports active playback right now.
    fn is_playing(&self) -> bool;

    /// Starts playback of a specific previously queued item.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackFault`] if the item is gone or the control is not
    /// ready.
    fn play_item(&mut self, item: ItemId) -> Result<(), PlaybackFault>;

    /// Starts or resumes playback of whatever the control considers current.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackFault`] if the control is not ready.
    fn resume(&mut self) -> Result<(), PlaybackFault>;

    /// Toggles the control's paused state.
    fn toggle_pause(&mut self);

    /// Stops playback without clearing the queue.
    fn stop(&mut self);

    /// Samples is-playing plus the timeline in one read.
    fn probe(&self) -> PlaybackProbe;

    /// Seeks to an absolute position in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackFault`] if the control rejects the seek (commonly
    /// [`PlaybackFault::NotReady`] before load completes).
    fn seek_to(&mut self, target_ms: i64) -> Result<(), PlaybackFault>;

    /// Current position in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackFault`] if the timeline cannot be read.
    fn position_ms(&self) -> Result<i64, PlaybackFault>;

    /// Total length of the current item in milliseconds.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackFault`] if the timeline cannot be read.
    fn duration_ms(&self) -> Result<i64, PlaybackFault>;

    /// Applies a volume on the control's native scale (`0..=200`).
    fn set_native_volume(&mut self, volume: u16);

    /// Mutes or unmutes the control's audio.
    fn set_muted(&mut self, muted: bool);

    /// Switches the control's video output to fullscreen.
    fn enter_fullscreen(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn MediaControl) {}

    // Mock implementation for testing
    struct MockControl {
        queue: Vec<String>,
        playing: bool,
        position_ms: i64,
        length_ms: i64,
        volume: u16,
        muted: bool,
        fullscreen: bool,
    }

    impl MockControl {
        fn new() -> Self {
            Self {
                queue: Vec::new(),
                playing: false,
                position_ms: 0,
                length_ms: 60_000,
                volume: 0,
                muted: true,
                fullscreen: false,
            }
        }
    }

    impl MediaControl for MockControl {
        fn queued_count(&self) -> usize {
            self.queue.len()
        }

        fn enqueue(&mut self, url: &str) -> Result<ItemId, PlaybackFault> {
            if url.is_empty() {
                return Err(PlaybackFault::QueueRejected("empty url".into()));
            }
            self.queue.push(url.to_string());
            Ok(ItemId::new(self.queue.len() as u64 - 1))
        }

        fn clear_queue(&mut self) {
            self.queue.clear();
        }

        fn is_playing(&self) -> bool {
            self.playing
        }

        fn play_item(&mut self, item: ItemId) -> Result<(), PlaybackFault> {
            if (item.value() as usize) >= self.queue.len() {
                return Err(PlaybackFault::Detached);
            }
            self.playing = true;
            Ok(())
        }

        fn resume(&mut self) -> Result<(), PlaybackFault> {
            if self.queue.is_empty() {
                return Err(PlaybackFault::NotReady);
            }
            self.playing = true;
            Ok(())
        }

        fn toggle_pause(&mut self) {
            self.playing = !self.playing;
        }

        fn stop(&mut self) {
            self.playing = false;
            self.position_ms = 0;
        }

        fn probe(&self) -> PlaybackProbe {
            if self.playing {
                PlaybackProbe::Playing {
                    elapsed_ms: self.position_ms,
                    length_ms: self.length_ms,
                }
            } else {
                PlaybackProbe::Stopped
            }
        }

        fn seek_to(&mut self, target_ms: i64) -> Result<(), PlaybackFault> {
            if !self.playing {
                return Err(PlaybackFault::NotReady);
            }
            self.position_ms = target_ms;
            Ok(())
        }

        fn position_ms(&self) -> Result<i64, PlaybackFault> {
            Ok(self.position_ms)
        }

        fn duration_ms(&self) -> Result<i64, PlaybackFault> {
            Ok(self.length_ms)
        }

        fn set_native_volume(&mut self, volume: u16) {
            self.volume = volume;
        }

        fn set_muted(&mut self, muted: bool) {
            self.muted = muted;
        }

        fn enter_fullscreen(&mut self) {
            self.fullscreen = true;
        }
    }

    #[test]
    fn mock_control_lifecycle() {
        let mut control = MockControl::new();
        assert_eq!(control.queued_count(), 0);
        assert!(!control.is_playing());

        let item = control.enqueue("file:///movie.ogv").unwrap();
        assert_eq!(control.queued_count(), 1);

        control.play_item(item).unwrap();
        assert!(control.is_playing());
        assert!(matches!(control.probe(), PlaybackProbe::Playing { .. }));

        control.seek_to(5_000).unwrap();
        assert_eq!(control.position_ms().unwrap(), 5_000);

        control.stop();
        assert!(!control.is_playing());
        assert_eq!(control.probe(), PlaybackProbe::Stopped);
    }

    #[test]
    fn mock_control_rejects_bad_enqueue() {
        let mut control = MockControl::new();
        assert!(control.enqueue("").is_err());
        assert_eq!(control.queued_count(), 0);
    }

    #[test]
    fn mock_control_seek_before_play_is_not_ready() {
        let mut control = MockControl::new();
        control.enqueue("file:///movie.ogv").unwrap();
        assert_eq!(control.seek_to(1_000), Err(PlaybackFault::NotReady));
    }

    #[test]
    fn item_id_round_trips_raw_value() {
        assert_eq!(ItemId::new(7).value(), 7);
    }
}
