//! Cancellable one-second countdown for a single question.
//!
//! The countdown is a value owned by the presenting scope: dropping it stops
//! the ticking, so every exit path (answer, timeout, abandon) cancels the
//! timer without bookkeeping.

use std::time::Duration;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

pub struct Countdown {
    interval: Interval,
    remaining: u32,
    total: u32,
}

impl Countdown {
    /// Start a countdown of `total_seconds`. The first tick completes one
    /// second from now.
    pub fn new(total_seconds: u32) -> Self {
        let mut interval = time::interval_at(
            Instant::now() + Duration::from_secs(1),
            Duration::from_secs(1),
        );
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        Self {
            interval,
            remaining: total_seconds,
            total: total_seconds,
        }
    }

    /// Wait for the next whole second and return the seconds left after it.
    /// Returns 0 on the final tick; callers treat that as expiry.
    pub async fn tick(&mut self) -> u32 {
        self.interval.tick().await;
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn expired(&self) -> bool {
        self.remaining == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn counts_down_to_zero() {
        let mut countdown = Countdown::new(3);
        assert_eq!(countdown.remaining(), 3);
        assert_eq!(countdown.tick().await, 2);
        assert_eq!(countdown.tick().await, 1);
        assert_eq!(countdown.tick().await, 0);
        assert!(countdown.expired());
    }

    #[tokio::test(start_paused = true)]
    async fn saturates_at_zero() {
        let mut countdown = Countdown::new(1);
        assert_eq!(countdown.tick().await, 0);
        assert_eq!(countdown.tick().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_arrive_once_per_second() {
        let start = Instant::now();
        let mut countdown = Countdown::new(2);
        countdown.tick().await;
        countdown.tick().await;
        assert_eq!(Instant::now().duration_since(start), Duration::from_secs(2));
    }
}
