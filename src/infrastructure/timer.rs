// SPDX-License-Identifier: MPL-2.0
//! Tokio-backed implementation of the one-shot timer port.
//!
//! Each [`TimerService::arm`] call spawns a single sleep; on expiry a
//! [`TimerEvent`] is emitted on the channel handed out at construction. The
//! host's event loop drains that channel and routes each event to the
//! matching renderer entry point. Expired-but-stale events are expected and
//! harmless — the renderer's token check makes them no-ops.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::application::port::{ArmToken, TimerKind, TimerService};

/// One timer expiry, as delivered to the host's event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    pub kind: TimerKind,
    pub token: ArmToken,
}

/// [`TimerService`] implementation over a tokio runtime.
pub struct TokioTimers {
    handle: Handle,
    tx: mpsc::UnboundedSender<TimerEvent>,
}

impl TokioTimers {
    /// Creates the service and the expiry channel the host must drain.
    pub fn new(handle: Handle) -> (Self, mpsc::UnboundedReceiver<TimerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { handle, tx }, rx)
    }
}

impl TimerService for TokioTimers {
    fn arm(&mut self, kind: TimerKind, delay: Duration, token: ArmToken) {
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(TimerEvent { kind, token });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn armed_timer_delivers_event_with_token() {
        let (mut timers, mut events) = TokioTimers::new(Handle::current());
        let token = ArmToken::new(1);

        timers.arm(TimerKind::PositionPoll, Duration::from_millis(5), token);

        let event = tokio::time::timeout(Duration::from_secs(1), events.recv())
            .await
            .expect("timer should fire")
            .expect("channel should stay open");
        assert_eq!(event, TimerEvent {
            kind: TimerKind::PositionPoll,
            token,
        });
    }

    #[tokio::test]
    async fn shorter_delay_fires_first() {
        let (mut timers, mut events) = TokioTimers::new(Handle::current());

        timers.arm(
            TimerKind::PositionPoll,
            Duration::from_millis(200),
            ArmToken::new(1),
        );
        timers.arm(
            TimerKind::SeekRetry,
            Duration::from_millis(10),
            ArmToken::new(1),
        );

        let first = tokio::time::timeout(Duration::from_secs(1), events.recv())
            .await
            .expect("timer should fire")
            .expect("channel should stay open");
        assert_eq!(first.kind, TimerKind::SeekRetry);
    }
}
