// SPDX-License-Identifier: MPL-2.0
//! One-shot timer port definition.
//!
//! The renderer never owns a timer; it asks the host's [`TimerService`] to
//! fire once after a delay, and the host routes the expiry back into the
//! matching renderer entry point ([`crate::renderer::Renderer::poll_tick`] or
//! [`crate::renderer::Renderer::seek_retry_tick`]) together with the
//! [`ArmToken`] captured at arm time.
//!
//! There is no cancel call. A transport operation that invalidates pending
//! timers bumps the session generation, so a stale expiry presents a token
//! that no longer matches and the entry point is a no-op. At most one poll
//! tick is ever outstanding: the timer is one-shot and only the tick itself
//! re-arms it.

use std::time::Duration;

/// Which renderer timer a request or expiry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// The 500 ms position-poll tick.
    PositionPoll,
    /// The 10 ms single retry of a rejected seek.
    SeekRetry,
}

/// Cancellation token captured when a timer is armed.
///
/// Compared against the session's current generation before a timer callback
/// has any effect; a mismatch means the session moved on and the expiry is
/// stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmToken(u64);

impl ArmToken {
    #[must_use]
    pub(crate) fn new(generation: u64) -> Self {
        Self(generation)
    }
}

/// Port for the host's one-shot timer primitive.
pub trait TimerService: Send {
    /// Requests a single expiry of `kind` after `delay`, tagged with `token`.
    fn arm(&mut self, kind: TimerKind, delay: Duration, token: ArmToken);
}
