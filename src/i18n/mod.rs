// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the adapter.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! The renderer uses it for the transport button labels the shell displays
//! (play/pause menu text) and for playback fault messages.

pub mod fluent;
