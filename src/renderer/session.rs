// SPDX-License-Identifier: MPL-2.0
//! Session bookkeeping for one playback attempt.
//!
//! The session is the adapter's own record of what it expects the control to
//! be doing, independent of the control's internal state. It is created
//! fresh on `play()`, mutated by every transport call and poll tick, and
//! reset on `stop()` or end-of-playback.
//!
//! Poller phases derived from the session flags:
//! - `Idle`: no polling, session inactive
//! - `Polling`: timer armed, session active
//! - `Draining`: end-of-stream detected, completion being notified

use crate::application::port::{ArmToken, ItemId};
use super::volume::UiVolume;

/// Phase of the position poller, derived from the session flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollPhase {
    /// No polling; the adapter does not expect playback.
    Idle,
    /// The poll timer is (re-)armed and ticks are expected.
    Polling,
    /// End-of-stream detected; the completion sink is being notified and the
    /// session is about to go idle.
    Draining,
}

/// The adapter's bookkeeping for one playback attempt.
///
/// Invariant: `schedule_polling` is true only while `active` is true. Only
/// [`PlaybackSession::begin`] sets `schedule_polling`, and every path that
/// clears `active` clears `schedule_polling` with it, so a poll tick can
/// never re-arm once the session has been deactivated.
#[derive(Debug)]
pub struct PlaybackSession {
    active: bool,
    started_playing: bool,
    pending_seek_ms: Option<i64>,
    volume: UiVolume,
    schedule_polling: bool,
    queued_item: Option<ItemId>,
    generation: u64,
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackSession {
    pub fn new() -> Self {
        Self {
            active: false,
            started_playing: false,
            pending_seek_ms: None,
            volume: UiVolume::default(),
            schedule_polling: false,
            queued_item: None,
            generation: 0,
        }
    }

    /// Whether the adapter currently expects the control to be playing.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the control has confirmed playback at least once this session.
    pub fn started_playing(&self) -> bool {
        self.started_playing
    }

    /// Whether the next completed tick should re-arm the poll timer.
    pub fn schedule_polling(&self) -> bool {
        self.schedule_polling
    }

    pub fn phase(&self) -> PollPhase {
        if !self.active {
            PollPhase::Idle
        } else if self.schedule_polling {
            PollPhase::Polling
        } else {
            PollPhase::Draining
        }
    }

    /// Token for timers armed against the current session generation.
    pub fn token(&self) -> ArmToken {
        ArmToken::new(self.generation)
    }

    /// Whether a timer expiry armed with `token` is still current.
    pub fn is_current(&self, token: ArmToken) -> bool {
        token == self.token()
    }

    /// Starts a fresh playback attempt: active, polling scheduled, playback
    /// not yet confirmed. Invalidates every previously armed timer.
    pub fn begin(&mut self) {
        self.generation += 1;
        self.active = true;
        self.schedule_polling = true;
        self.started_playing = false;
    }

    /// Ends the playback attempt (transport-initiated). Idempotent.
    /// Invalidates every previously armed timer.
    pub fn deactivate(&mut self) {
        self.generation += 1;
        self.active = false;
        self.schedule_polling = false;
        self.pending_seek_ms = None;
    }

    /// Records that the control confirmed playback.
    pub fn mark_started(&mut self) {
        self.started_playing = true;
    }

    /// Enters the drain phase: no further ticks will be scheduled, the
    /// session stays active until the completion sink has been notified.
    pub fn begin_drain(&mut self) {
        self.schedule_polling = false;
    }

    /// Leaves the drain phase; the session is idle again.
    pub fn finish_drain(&mut self) {
        self.generation += 1;
        self.active = false;
    }

    /// Remembers the item `select_url` just enqueued, so the next `play()`
    /// starts that exact item.
    pub fn set_queued_item(&mut self, item: ItemId) {
        self.queued_item = Some(item);
    }

    /// Takes the remembered queued item, if any.
    pub fn take_queued_item(&mut self) -> Option<ItemId> {
        self.queued_item.take()
    }

    /// Remembers a seek target the control rejected, for the single retry.
    pub fn set_pending_seek(&mut self, target_ms: i64) {
        self.pending_seek_ms = Some(target_ms);
    }

    /// Takes the remembered seek target; the retry consumes it so a second
    /// rejection is not retried again.
    pub fn take_pending_seek(&mut self) -> Option<i64> {
        self.pending_seek_ms.take()
    }

    pub fn set_volume(&mut self, volume: UiVolume) {
        self.volume = volume;
    }

    pub fn volume(&self) -> UiVolume {
        self.volume
    }
}
