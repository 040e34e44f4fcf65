// SPDX-License-Identifier: MPL-2.0
//! Renderer adapter for the embedded playback control.
//!
//! This module wraps the native control behind the transport operations the
//! shell's event handlers call, and keeps the shell's timeline widgets
//! consistent with the control's state via a one-shot, self-rearming
//! position poll.

mod adapter;
mod session;
pub mod time_units;
mod volume;

pub use adapter::Renderer;
pub use session::{PlaybackSession, PollPhase};
pub use volume::UiVolume;

use crate::application::port::{MediaControl, PlaybackSink, TimerService, TransportWidgets};
use crate::config::Config;
use crate::i18n::fluent::I18n;

/// Creates a renderer over the given environment ports.
pub fn create_renderer(
    control: Box<dyn MediaControl>,
    widgets: Box<dyn TransportWidgets>,
    sink: Box<dyn PlaybackSink>,
    timer: Box<dyn TimerService>,
    i18n: &I18n,
    config: &Config,
) -> Renderer {
    Renderer::new(control, widgets, sink, timer, i18n, config)
}
