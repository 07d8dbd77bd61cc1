//! Recurring refresh timer
//!
//! The timer is a scoped resource: it is acquired when a view activates and
//! cancelled when the [`RefreshTimer`] is dropped, whichever way the view exits.
//! Cancelling stops future ticks only; refreshes already started keep running.

use crate::controller::DashboardController;
use crate::events::Origin;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

pub struct RefreshTimer {
    cancel_token: CancellationToken,
}

impl RefreshTimer {
    /// Refresh `controller` now and then every `period`.
    ///
    /// Each tick spawns its own refresh, so a slow backend never delays the
    /// next tick and overlapping refreshes are possible.
    pub fn start(controller: DashboardController, period: Duration) -> Self {
        Self::start_with(period, move || {
            controller.spawn_refresh(Origin::Timer);
        })
    }

    fn start_with<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let cancel_token = CancellationToken::new();
        let cancelled = cancel_token.clone();

        // First tick fires before returning.
        on_tick();

        tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    biased;
                    _ = cancelled.cancelled() => break,
                    _ = interval.tick() => on_tick(),
                }
            }
            log::debug!("Refresh timer stopped");
        });

        Self { cancel_token }
    }

    /// Stop issuing refreshes. Idempotent.
    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }
}

impl Drop for RefreshTimer {
    fn drop(&mut self) {
        self.cancel_token.cancel();
    }
}
