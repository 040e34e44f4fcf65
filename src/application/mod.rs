// SPDX-License-Identifier: MPL-2.0
//! Application layer: the port traits the renderer is built against.
//!
//! Hosts implement these ports over their real environment (the embedded
//! playback control, the shell's widget tree, the shell's timer primitive)
//! and inject them into the renderer's constructor.

pub mod port;
