// SPDX-License-Identifier: MPL-2.0
//! `playdeck` is a transport adapter for an embedded video-playback control.
//!
//! The crate does not decode or render anything itself. It drives an externally
//! owned playback control (transport, volume, timeline, fullscreen) and mirrors
//! that control's state into the hosting shell's transport widgets, sampling
//! playback position on a one-shot, self-rearming timer. Hosts supply the
//! control, the widget tree, the completion sink, and the timer service as
//! trait objects; a small component registry covers hosts that resolve
//! components by contract-id strings and need calls marshalled onto a single
//! execution context.

pub mod application;
pub mod components;
pub mod config;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod renderer;

#[cfg(test)]
pub mod test_utils;
