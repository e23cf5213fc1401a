//! Interfaces to the backend collaborators.
//!
//! Persistence, aggregate stats and the one-play-a-day gate live outside
//! this crate. The gameplay engine only sees these traits; a backend outage
//! must degrade the experience (missing percentages, unrecorded game), never
//! stall it.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::question::QuestionKind;
use crate::models::session::GameResultBreakdown;

/// How today's players did on one question: total answers and correct ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerTally {
    pub total: u64,
    pub correct: u64,
}

/// Fold the current player's just-scored answer into a tally and return the
/// display percentage. The player's own game is not persisted until the
/// session finishes, so without this the shown number would be stale by one.
pub fn include_current_player(tally: AnswerTally, current_correct: bool) -> u8 {
    let total = tally.total + 1;
    let correct = tally.correct + u64::from(current_correct);
    ((100.0 * correct as f64 / total as f64).round()) as u8
}

/// Records a finished game. Called exactly once per completed session,
/// fire-and-forget.
#[async_trait]
pub trait GameRecorder: Send + Sync {
    async fn record_completed_game(&self, breakdown: &GameResultBreakdown) -> Result<()>;
}

/// Aggregate answer stats for today's version of each question.
#[async_trait]
pub trait QuestionStats: Send + Sync {
    async fn correct_pct_today(&self, kind: QuestionKind) -> Result<AnswerTally>;
}

/// Source of truth for "has this user already played today".
#[async_trait]
pub trait PlayGate: Send + Sync {
    async fn has_played_today(&self) -> Result<bool>;
}

/// Stand-in backend for local runs and previews: never blocks play, reports
/// empty tallies, drops recorded games.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBackend;

#[async_trait]
impl GameRecorder for NullBackend {
    async fn record_completed_game(&self, breakdown: &GameResultBreakdown) -> Result<()> {
        tracing::debug!(
            score = breakdown.score,
            total = breakdown.total_questions,
            "discarding completed game (null backend)"
        );
        Ok(())
    }
}

#[async_trait]
impl QuestionStats for NullBackend {
    async fn correct_pct_today(&self, _kind: QuestionKind) -> Result<AnswerTally> {
        Ok(AnswerTally::default())
    }
}

#[async_trait]
impl PlayGate for NullBackend {
    async fn has_played_today(&self) -> Result<bool> {
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pct_includes_the_current_player() {
        // Nobody else has answered yet: the player alone decides the number.
        assert_eq!(include_current_player(AnswerTally::default(), true), 100);
        assert_eq!(include_current_player(AnswerTally::default(), false), 0);
        // 1 of 2 correct so far, player gets it right: 2/3 rounds to 67.
        assert_eq!(
            include_current_player(
                AnswerTally {
                    total: 2,
                    correct: 1
                },
                true
            ),
            67
        );
        assert_eq!(
            include_current_player(
                AnswerTally {
                    total: 9,
                    correct: 3
                },
                false
            ),
            30
        );
    }

    #[tokio::test]
    async fn null_backend_never_blocks() {
        let backend = NullBackend;
        assert!(!backend.has_played_today().await.unwrap());
        assert_eq!(
            backend
                .correct_pct_today(QuestionKind::Draft)
                .await
                .unwrap(),
            AnswerTally::default()
        );
    }
}
