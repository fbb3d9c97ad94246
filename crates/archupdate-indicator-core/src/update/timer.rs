use std::time::Duration;

use tokio::time::{Instant, sleep_until};

/// Recurring deadline for automatic update checks.
///
/// The first deadline is one full period after [`CheckTimer::start`]; each
/// [`CheckTimer::rearm`] measures the next period from the moment it is
/// called, so time spent handling a tick pushes later ticks back.
#[derive(Debug, Clone, Copy)]
pub struct CheckTimer {
    period: Duration,
    deadline: Instant,
}

impl CheckTimer {
    /// Arm a timer whose first tick is `period` from now.
    pub fn start(period: Duration) -> Self {
        Self {
            period,
            deadline: Instant::now() + period,
        }
    }

    /// Interval between ticks.
    pub(crate) fn period(&self) -> Duration {
        self.period
    }

    /// When the next tick is due.
    pub(crate) fn deadline(&self) -> Instant {
        self.deadline
    }

    /// Schedule the next tick one period from now.
    pub fn rearm(&mut self) {
        self.deadline = Instant::now() + self.period;
    }

    /// Sleep until the current deadline.
    ///
    /// Cancel-safe: dropping the future leaves the deadline untouched.
    pub async fn wait(&self) {
        sleep_until(self.deadline).await;
    }
}
