#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::Notify;

use gridiron_daily::models::question::QuestionKind;
use gridiron_daily::models::session::GameResultBreakdown;
use gridiron_daily::services::gameplay::Collaborators;
use gridiron_daily::services::games::{AnswerTally, GameRecorder, PlayGate, QuestionStats};
use gridiron_daily::Config;

/// Config with the production timings; tests run under a paused tokio
/// clock, so the real 30s/3s budgets cost nothing.
pub fn test_config() -> Config {
    Config {
        question_time_limit_seconds: 30,
        feedback_delay_seconds: 3,
        daily_limit_enabled: true,
    }
}

/// Wire one stub backend into all three collaborator slots.
pub fn collaborators(backend: &Arc<StubBackend>) -> Collaborators {
    Collaborators {
        recorder: backend.clone(),
        stats: backend.clone(),
        gate: backend.clone(),
    }
}

/// In-memory stand-in for the backend collaborators, with switches for the
/// failure modes the engine must survive.
#[derive(Default)]
pub struct StubBackend {
    pub played_today: AtomicBool,
    pub fail_stats: AtomicBool,
    pub tally: Mutex<AnswerTally>,
    recorded: Mutex<Vec<GameResultBreakdown>>,
    recorded_notify: Notify,
}

impl StubBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_tally(&self, tally: AnswerTally) {
        *self.tally.lock().unwrap() = tally;
    }

    pub fn recorded_games(&self) -> Vec<GameResultBreakdown> {
        self.recorded.lock().unwrap().clone()
    }

    /// Block until the fire-and-forget recording lands.
    pub async fn wait_for_recorded(&self) -> GameResultBreakdown {
        loop {
            let notified = self.recorded_notify.notified();
            if let Some(breakdown) = self.recorded.lock().unwrap().first().cloned() {
                return breakdown;
            }
            notified.await;
        }
    }
}

#[async_trait]
impl GameRecorder for StubBackend {
    async fn record_completed_game(&self, breakdown: &GameResultBreakdown) -> Result<()> {
        self.recorded.lock().unwrap().push(breakdown.clone());
        self.recorded_notify.notify_waiters();
        Ok(())
    }
}

#[async_trait]
impl QuestionStats for StubBackend {
    async fn correct_pct_today(&self, _kind: QuestionKind) -> Result<AnswerTally> {
        if self.fail_stats.load(Ordering::SeqCst) {
            return Err(anyhow!("stats backend is down"));
        }
        Ok(*self.tally.lock().unwrap())
    }
}

#[async_trait]
impl PlayGate for StubBackend {
    async fn has_played_today(&self) -> Result<bool> {
        Ok(self.played_today.load(Ordering::SeqCst))
    }
}
