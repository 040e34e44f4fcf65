// SPDX-License-Identifier: MPL-2.0
//! The renderer adapter: transport operations over the native control plus
//! the position-poll loop that keeps the shell's timeline widgets honest.
//!
//! Scheduling model is single-threaded cooperative: every entry point here is
//! called from the host's UI event loop, either directly (transport calls
//! from event handlers) or via a one-shot timer expiry routed back by the
//! host ([`Renderer::poll_tick`], [`Renderer::seek_retry_tick`]). Nothing
//! blocks, and at most one poll tick is outstanding at a time — the poll
//! timer is one-shot and only a completed tick re-arms it, so two ticks can
//! never overlap a playlist mutation.

use std::path::Path;
use std::time::Duration;

use crate::application::port::{
    ArmToken, MediaControl, PlayButtonMode, PlaybackProbe, PlaybackSink, TimerKind, TimerService,
    TransportWidgets,
};
use crate::config::{Config, POLL_INTERVAL_MS, SEEK_RETRY_DELAY_MS};
use crate::error::Result;
use crate::i18n::fluent::I18n;

use super::session::{PlaybackSession, PollPhase};
use super::time_units::{millis_to_secs, secs_to_millis};
use super::volume::UiVolume;

/// Drives the embedded playback control and mirrors its state into the
/// shell's transport widgets.
///
/// All collaborators are injected; the renderer owns none of their
/// lifecycles. See the port traits in [`crate::application::port`].
pub struct Renderer {
    control: Box<dyn MediaControl>,
    widgets: Box<dyn TransportWidgets>,
    sink: Box<dyn PlaybackSink>,
    timer: Box<dyn TimerService>,
    session: PlaybackSession,
    poll_interval: Duration,
    seek_retry_delay: Duration,
    play_label: String,
    pause_label: String,
}

impl Renderer {
    /// Builds a renderer over the given environment ports.
    ///
    /// Button labels are resolved once from `i18n`; hosts that switch locale
    /// rebuild the renderer. The poll interval comes from `config`, falling
    /// back to the crate default.
    pub fn new(
        control: Box<dyn MediaControl>,
        widgets: Box<dyn TransportWidgets>,
        sink: Box<dyn PlaybackSink>,
        timer: Box<dyn TimerService>,
        i18n: &I18n,
        config: &Config,
    ) -> Self {
        Self {
            control,
            widgets,
            sink,
            timer,
            session: PlaybackSession::new(),
            poll_interval: Duration::from_millis(
                config.poll_interval_ms.unwrap_or(POLL_INTERVAL_MS),
            ),
            seek_retry_delay: Duration::from_millis(SEEK_RETRY_DELAY_MS),
            play_label: i18n.tr("transport-play"),
            pause_label: i18n.tr("transport-pause"),
        }
    }

    /// Current poller phase, for hosts that surface it.
    pub fn phase(&self) -> PollPhase {
        self.session.phase()
    }

    /// The adapter's session bookkeeping.
    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    // =========================================================================
    // Transport operations
    // =========================================================================

    /// Starts playback of the queued item.
    ///
    /// With an empty queue there is nothing to play: the session stays idle
    /// and the completion sink is notified exactly once, so the host advances
    /// past the unplayable entry instead of hanging on it.
    pub fn play(&mut self) {
        if self.control.queued_count() == 0 {
            self.session.deactivate();
            self.sink.movie_finished();
            return;
        }

        if !self.control.is_playing() {
            let started = match self.session.take_queued_item() {
                Some(item) => self.control.play_item(item),
                None => self.control.resume(),
            };
            if let Err(fault) = started {
                log::warn!("control refused to start playback: {fault}");
            }
        }

        self.session.begin();
        self.rearm_poll();
        self.widgets
            .set_play_button(PlayButtonMode::Pause, &self.pause_label);
    }

    /// Pauses playback. Idempotent: pausing an already-paused or stopped
    /// control only refreshes the button state.
    pub fn pause(&mut self) {
        self.pause_transport();
        self.widgets
            .set_play_button(PlayButtonMode::Play, &self.play_label);
    }

    /// Pauses playback for a slider drag, without touching the button; the
    /// drag will resume or stop playback when it ends.
    pub fn pause_for_drag(&mut self) {
        self.pause_transport();
    }

    /// Stops playback and resets the timeline widgets.
    pub fn stop(&mut self) {
        self.session.deactivate();
        if self.control.queued_count() > 0 {
            self.control.stop();
        }
        self.widgets
            .set_play_button(PlayButtonMode::Play, &self.play_label);
        self.reset_timeline_widgets();
    }

    /// Replaces the control's queue with `url`.
    ///
    /// # Errors
    ///
    /// Propagates the control's fault if it rejects the item.
    pub fn select_url(&mut self, url: &str) -> Result<()> {
        if self.control.queued_count() > 0 {
            self.stop();
            self.control.clear_queue();
        }
        let item = self.control.enqueue(url)?;
        self.session.set_queued_item(item);
        Ok(())
    }

    /// Like [`Renderer::select_url`], but reports rejection as `false`
    /// instead of an error.
    pub fn can_play_url(&mut self, url: &str) -> bool {
        self.select_url(url).is_ok()
    }

    /// Seeks to an absolute position in seconds.
    ///
    /// A rejected seek (control still initializing) is retried exactly once
    /// after a short delay, with the originally requested target.
    pub fn set_current_time(&mut self, secs: f64) {
        let target_ms = secs_to_millis(secs);
        if let Err(fault) = self.control.seek_to(target_ms) {
            log::debug!("seek to {target_ms} ms rejected, scheduling one retry: {fault}");
            self.session.set_pending_seek(target_ms);
            self.timer
                .arm(TimerKind::SeekRetry, self.seek_retry_delay, self.session.token());
        }
    }

    /// Entry point for the seek-retry timer expiry.
    pub fn seek_retry_tick(&mut self, token: ArmToken) {
        if !self.session.is_current(token) {
            return;
        }
        if let Some(target_ms) = self.session.take_pending_seek() {
            if let Err(fault) = self.control.seek_to(target_ms) {
                log::warn!("seek retry to {target_ms} ms failed, giving up: {fault}");
            }
        }
    }

    /// Current position in seconds, `-1.0` if the control cannot be read.
    pub fn get_current_time(&self) -> f64 {
        match self.control.position_ms() {
            Ok(ms) => millis_to_secs(ms),
            Err(_) => -1.0,
        }
    }

    /// Duration of the current item in milliseconds, `-1` if the control
    /// cannot be read.
    pub fn get_duration(&self) -> i64 {
        match self.control.duration_ms() {
            Ok(ms) => ms,
            Err(_) => -1,
        }
    }

    /// Applies a UI-scale (0–100) volume to the control, unmuting first.
    pub fn set_volume(&mut self, level: u8) {
        let volume = UiVolume::new(level);
        self.session.set_volume(volume);
        self.control.set_muted(false);
        self.control.set_native_volume(volume.to_native());
    }

    /// Switches the control's video output to fullscreen.
    pub fn go_fullscreen(&mut self) {
        self.control.enter_fullscreen();
    }

    /// Starts playback at a given offset in seconds.
    pub fn play_from_time(&mut self, secs: f64) {
        self.play();
        self.set_current_time(secs);
    }

    /// Rewinds to the start of the current item.
    pub fn go_to_beginning(&mut self) {
        self.set_current_time(0.0);
    }

    /// Refreshes the transport widgets to their idle state. Does not stop
    /// the control; hosts call this when tearing down a display, and a stop
    /// here would race the control's own teardown.
    pub fn reset(&mut self) {
        self.widgets
            .set_play_button(PlayButtonMode::Play, &self.play_label);
        self.reset_timeline_widgets();
    }

    /// Movie-data extraction is not available; reports failure immediately.
    pub fn extract_movie_data(&mut self, _url: &str, _screenshot_path: &Path) {
        self.sink.extract_finished(-1, false);
    }

    // =========================================================================
    // Position poll
    // =========================================================================

    /// Entry point for the position-poll timer expiry.
    ///
    /// A stale token (the session moved on since the timer was armed) or an
    /// inactive session makes this a no-op; the expiry is the one-shot
    /// timer's last breath, not a command.
    pub fn poll_tick(&mut self, token: ArmToken) {
        if !self.session.is_current(token) || !self.session.is_active() {
            return;
        }

        match self.control.probe() {
            PlaybackProbe::Playing {
                elapsed_ms,
                length_ms,
            } => {
                self.session.mark_started();
                let length = length_ms.max(1);
                let elapsed = elapsed_ms.clamp(0, length);
                self.push_timeline(elapsed, length);
                self.rearm_poll();
            }
            PlaybackProbe::Stopped => {
                if self.session.started_playing() {
                    // Natural end of the playlist.
                    self.finish_playback();
                } else {
                    self.push_timeline(0, 1);
                    self.rearm_poll();
                }
            }
            PlaybackProbe::Faulted(fault) => {
                if self.session.started_playing() {
                    // The control freed its playlist between reporting
                    // is-playing and the timeline read; same outcome as a
                    // clean end of stream.
                    log::debug!("probe faulted after playback started: {fault}");
                    self.finish_playback();
                } else {
                    log::debug!("probe faulted before playback started, retrying: {fault}");
                    self.rearm_poll();
                }
            }
        }
    }

    fn finish_playback(&mut self) {
        self.session.begin_drain();
        self.sink.movie_finished();
        self.session.finish_drain();
    }

    fn rearm_poll(&mut self) {
        if self.session.schedule_polling() {
            self.timer
                .arm(TimerKind::PositionPoll, self.poll_interval, self.session.token());
        }
    }

    fn push_timeline(&mut self, elapsed_ms: i64, length_ms: i64) {
        if self.widgets.slider_being_dragged() {
            return;
        }
        self.widgets.set_slider_text(elapsed_ms);
        self.widgets.set_duration(length_ms);
        self.widgets
            .move_slider(elapsed_ms as f64 / length_ms as f64);
    }

    fn pause_transport(&mut self) {
        self.session.deactivate();
        if self.control.is_playing() && self.control.queued_count() > 0 {
            self.control.toggle_pause();
        }
    }

    fn reset_timeline_widgets(&mut self) {
        self.widgets.set_slider_text(0);
        self.widgets.set_duration(-1);
        self.widgets.move_slider(0.0);
    }
}
