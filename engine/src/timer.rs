//! The cooking clock.
//!
//! A single cancellable task that sends [`SessionEvent::TimerTick`] once per
//! second while a cook is in progress. The `App` starts it exactly on the
//! Idle -> Cooking transition and drops it exactly on leaving Cooking, and
//! the abort-on-drop guard means no tick task can outlive its session, even
//! on abrupt teardown.

use std::time::Duration;

use futures_util::future::{AbortHandle, Abortable};
use tokio::sync::mpsc;

use crate::SessionEvent;

const TICK_PERIOD: Duration = Duration::from_secs(1);

#[derive(Debug)]
pub(crate) struct CookingTimer {
    abort_handle: AbortHandle,
}

impl CookingTimer {
    /// Spawn the tick task. The first tick arrives one full period after
    /// start; there is no immediate tick at zero.
    pub(crate) fn start(events: mpsc::UnboundedSender<SessionEvent>) -> Self {
        let (abort_handle, registration) = AbortHandle::new_pair();
        let ticker = Abortable::new(
            async move {
                let mut interval = tokio::time::interval(TICK_PERIOD);
                interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
                // interval yields immediately on its first tick; swallow it
                // so the clock starts at zero.
                interval.tick().await;
                loop {
                    interval.tick().await;
                    if events.send(SessionEvent::TimerTick).is_err() {
                        break;
                    }
                }
            },
            registration,
        );
        tokio::spawn(async move {
            let _ = ticker.await;
        });
        Self { abort_handle }
    }
}

impl Drop for CookingTimer {
    fn drop(&mut self) {
        self.abort_handle.abort();
    }
}
