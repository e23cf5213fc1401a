use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use super::question::QuestionKind;

/// Mutable state for one sitting of the daily game. Client-local and
/// ephemeral: it lives inside the gameplay task and is discarded once
/// collapsed into a [`GameResultBreakdown`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaySession {
    pub id: Uuid,
    pub date_key: String,
    pub started_at: DateTime<Utc>,
    /// Index of the question currently presented (0-based).
    pub current_index: usize,
    pub score: u32,
    pub correct_count: u32,
    /// Latches true once the current question has been scored; any further
    /// submission or timer expiry for that question is a no-op.
    pub answered: bool,
    /// Display countdown for the current question, in whole seconds.
    pub time_remaining: u32,
    pub correct_by_category: BTreeMap<QuestionKind, bool>,
    pub answers_by_category: BTreeMap<QuestionKind, String>,
    total_questions: usize,
}

impl PlaySession {
    pub fn new(date_key: impl Into<String>, total_questions: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            date_key: date_key.into(),
            started_at: Utc::now(),
            current_index: 0,
            score: 0,
            correct_count: 0,
            answered: false,
            time_remaining: 0,
            correct_by_category: BTreeMap::new(),
            answers_by_category: BTreeMap::new(),
            total_questions,
        }
    }

    pub fn total_questions(&self) -> usize {
        self.total_questions
    }

    /// Score the current question. Returns false (and changes nothing) if it
    /// was already scored — the guard against a timer tick racing a click.
    pub fn record_answer(&mut self, kind: QuestionKind, submitted: &str, correct: bool) -> bool {
        if self.answered {
            return false;
        }
        self.answered = true;
        if correct {
            self.score += 1;
            self.correct_count += 1;
        }
        self.correct_by_category.insert(kind, correct);
        self.answers_by_category
            .insert(kind, submitted.to_string());
        true
    }

    /// Move to the next question, clearing the answered latch.
    pub fn advance(&mut self) {
        self.current_index += 1;
        self.answered = false;
    }

    /// Collapse into the immutable final snapshot. Consumes the session;
    /// there is no way to keep scoring afterwards.
    pub fn finalize(self) -> GameResultBreakdown {
        GameResultBreakdown {
            score: self.score,
            correct_count: self.correct_count,
            total_questions: self.total_questions as u32,
            correct_by_category: self.correct_by_category,
            answers_by_category: self.answers_by_category,
        }
    }
}

/// Immutable summary of a completed game, handed to the persistence
/// collaborator exactly once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResultBreakdown {
    pub score: u32,
    pub correct_count: u32,
    pub total_questions: u32,
    pub correct_by_category: BTreeMap<QuestionKind, bool>,
    pub answers_by_category: BTreeMap<QuestionKind, String>,
}

impl GameResultBreakdown {
    pub fn correct_for(&self, kind: QuestionKind) -> bool {
        self.correct_by_category.get(&kind).copied().unwrap_or(false)
    }

    pub fn answer_for(&self, kind: QuestionKind) -> Option<&str> {
        self.answers_by_category.get(&kind).map(String::as_str)
    }
}
