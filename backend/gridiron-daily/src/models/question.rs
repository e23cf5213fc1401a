use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Questions in a daily set. Historically 3, now 4.
pub const QUESTIONS_PER_GAME: usize = 4;

/// Options shown for a closed-form question.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// The question families a daily set can contain. Drives per-category
/// scoring flags, stored answers and the stats lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionKind {
    Draft,
    College,
    CareerPath,
    SeasonLeader,
    SuperBowl,
}

impl QuestionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionKind::Draft => "draft",
            QuestionKind::College => "college",
            QuestionKind::CareerPath => "careerPath",
            QuestionKind::SeasonLeader => "seasonLeader",
            QuestionKind::SuperBowl => "superBowl",
        }
    }
}

/// Statistical category of a season-leader question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeasonCategory {
    Passing,
    Rushing,
    Receiving,
    PassingTds,
    RushingTds,
    ReceivingTds,
    Sacks,
    Interceptions,
}

impl SeasonCategory {
    /// Unit rendered next to a stat value in option strings.
    pub fn stat_unit(&self) -> &'static str {
        match self {
            SeasonCategory::Sacks => "sacks",
            SeasonCategory::Interceptions => "INTs",
            _ => "TDs",
        }
    }

    /// Human phrasing for prompts ("Who led the NFL in ... in 2021?").
    pub fn display_label(&self) -> &'static str {
        match self {
            SeasonCategory::Passing => "passing yards",
            SeasonCategory::Rushing => "rushing yards",
            SeasonCategory::Receiving => "receiving yards",
            SeasonCategory::PassingTds => "passing touchdowns",
            SeasonCategory::RushingTds => "rushing touchdowns",
            SeasonCategory::ReceivingTds => "receiving touchdowns",
            SeasonCategory::Sacks => "sacks",
            SeasonCategory::Interceptions => "interceptions",
        }
    }
}

/// "Who's missing from this draft class?" One slot in the top-10 list is
/// redacted; the missing name is the answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftQuestion {
    pub year: u16,
    pub missing_slot_index: usize,
    pub correct_answer: String,
    /// Top-10 list with the blanked slot as `None`.
    pub shown_picks: Vec<Option<String>>,
    pub options: [String; OPTIONS_PER_QUESTION],
}

/// "Which college did {name} attend?"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollegeQuestion {
    pub name: String,
    pub college: String,
    pub wrong_options: [String; 3],
    pub options: [String; OPTIONS_PER_QUESTION],
}

/// One NFL stop on a career path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerStint {
    pub team: String,
    pub years: String,
}

/// "Guess the player by career path." Answered free-text; the options
/// array is still built for consistency but never consulted at grading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerPathQuestion {
    pub position: String,
    pub college: String,
    pub college_years: String,
    pub nfl_stints: Vec<CareerStint>,
    pub correct_answer: String,
    pub options: [String; OPTIONS_PER_QUESTION],
}

/// "Who led the NFL in {category} in {year}?" When a stat value is present
/// the correct answer and every option embed it ("Micah Parsons (12 sacks)"),
/// so grading stays exact string comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonLeaderQuestion {
    pub year: u16,
    pub category: SeasonCategory,
    pub correct_answer: String,
    pub stat_value: Option<f64>,
    pub options: [String; OPTIONS_PER_QUESTION],
}

/// A curated themed-day question. The prompt travels with the record since
/// themed content is schedule data, not code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperBowlQuestion {
    /// Stable slug identifying the curated fact (e.g. "bears-nfc").
    pub id: String,
    pub prompt: String,
    pub correct_answer: String,
    /// Fill-in-the-blank questions are graded free-text.
    pub free_text: bool,
    pub options: [String; OPTIONS_PER_QUESTION],
}

/// A single question of the daily set, discriminated by kind. Every
/// consumption site (grading, rendering, verification) matches exhaustively
/// so a new variant cannot be half-wired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameQuestion {
    Draft(DraftQuestion),
    College(CollegeQuestion),
    CareerPath(CareerPathQuestion),
    SeasonLeader(SeasonLeaderQuestion),
    SuperBowl(SuperBowlQuestion),
}

impl GameQuestion {
    pub fn kind(&self) -> QuestionKind {
        match self {
            GameQuestion::Draft(_) => QuestionKind::Draft,
            GameQuestion::College(_) => QuestionKind::College,
            GameQuestion::CareerPath(_) => QuestionKind::CareerPath,
            GameQuestion::SeasonLeader(_) => QuestionKind::SeasonLeader,
            GameQuestion::SuperBowl(_) => QuestionKind::SuperBowl,
        }
    }

    /// The string a submission is graded against. For college questions the
    /// answer is the college, not the player.
    pub fn correct_answer(&self) -> &str {
        match self {
            GameQuestion::Draft(q) => &q.correct_answer,
            GameQuestion::College(q) => &q.college,
            GameQuestion::CareerPath(q) => &q.correct_answer,
            GameQuestion::SeasonLeader(q) => &q.correct_answer,
            GameQuestion::SuperBowl(q) => &q.correct_answer,
        }
    }

    pub fn options(&self) -> &[String; OPTIONS_PER_QUESTION] {
        match self {
            GameQuestion::Draft(q) => &q.options,
            GameQuestion::College(q) => &q.options,
            GameQuestion::CareerPath(q) => &q.options,
            GameQuestion::SeasonLeader(q) => &q.options,
            GameQuestion::SuperBowl(q) => &q.options,
        }
    }

    /// True when the answer is typed rather than chosen, which switches
    /// grading from exact to fuzzy matching.
    pub fn is_free_text(&self) -> bool {
        match self {
            GameQuestion::CareerPath(_) => true,
            GameQuestion::SuperBowl(q) => q.free_text,
            GameQuestion::Draft(_) | GameQuestion::College(_) | GameQuestion::SeasonLeader(_) => {
                false
            }
        }
    }

    /// Prompt line for terminal rendering and verification reports.
    pub fn prompt_text(&self) -> String {
        match self {
            GameQuestion::Draft(q) => format!(
                "{} NFL Draft top 10 — who's missing? ({} is blank)",
                q.year,
                crate::services::draft_question::pick_label(q.missing_slot_index)
            ),
            GameQuestion::College(q) => format!("Which college did {} attend?", q.name),
            GameQuestion::CareerPath(q) => {
                let mut path = format!("{} ({})", q.college, q.college_years);
                for stint in &q.nfl_stints {
                    path.push_str(&format!(" -> {} ({})", stint.team, stint.years));
                }
                format!("Guess the {} by career path: {}", q.position, path)
            }
            GameQuestion::SeasonLeader(q) => format!(
                "Who led the NFL in {} in {}?",
                q.category.display_label(),
                q.year
            ),
            GameQuestion::SuperBowl(q) => q.prompt.clone(),
        }
    }

    /// Check the option invariants: exactly four distinct options with the
    /// correct answer present exactly once.
    pub fn validate(&self) -> Result<(), QuestionIntegrityError> {
        let options = self.options();
        let distinct: HashSet<&str> = options.iter().map(String::as_str).collect();
        if distinct.len() != OPTIONS_PER_QUESTION {
            return Err(QuestionIntegrityError::DuplicateOptions {
                options: options.to_vec(),
            });
        }
        if !distinct.contains(self.correct_answer()) {
            return Err(QuestionIntegrityError::CorrectAnswerMissing {
                correct: self.correct_answer().to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Error)]
pub enum QuestionIntegrityError {
    #[error("question options contain duplicates: {options:?}")]
    DuplicateOptions { options: Vec<String> },
    #[error("correct answer {correct:?} is not among the options")]
    CorrectAnswerMissing { correct: String },
    #[error("daily set has {actual} questions, expected {expected}")]
    WrongQuestionCount { expected: usize, actual: usize },
}

/// The four questions for one calendar day. A pure function of the date key
/// and the datasets: recomputed, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyQuestionSet {
    pub date_key: String,
    pub questions: Vec<GameQuestion>,
}

impl DailyQuestionSet {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Validate the whole set: question count plus per-question invariants.
    pub fn validate(&self) -> Result<(), QuestionIntegrityError> {
        if self.questions.len() != QUESTIONS_PER_GAME {
            return Err(QuestionIntegrityError::WrongQuestionCount {
                expected: QUESTIONS_PER_GAME,
                actual: self.questions.len(),
            });
        }
        for question in &self.questions {
            question.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn college_question(options: [&str; 4]) -> GameQuestion {
        GameQuestion::College(CollegeQuestion {
            name: "Johnny Manziel".to_string(),
            college: "Texas A&M".to_string(),
            wrong_options: [
                "Texas".to_string(),
                "LSU".to_string(),
                "Oklahoma".to_string(),
            ],
            options: options.map(String::from),
        })
    }

    #[test]
    fn validate_accepts_distinct_options_with_answer() {
        let q = college_question(["Texas", "Texas A&M", "LSU", "Oklahoma"]);
        assert!(q.validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_options() {
        let q = college_question(["Texas", "Texas", "Texas A&M", "LSU"]);
        assert!(matches!(
            q.validate(),
            Err(QuestionIntegrityError::DuplicateOptions { .. })
        ));
    }

    #[test]
    fn validate_rejects_missing_answer() {
        let q = college_question(["Texas", "LSU", "Oklahoma", "Michigan"]);
        assert!(matches!(
            q.validate(),
            Err(QuestionIntegrityError::CorrectAnswerMissing { .. })
        ));
    }

    #[test]
    fn college_answer_is_the_college() {
        let q = college_question(["Texas", "Texas A&M", "LSU", "Oklahoma"]);
        assert_eq!(q.correct_answer(), "Texas A&M");
        assert_eq!(q.kind(), QuestionKind::College);
        assert!(!q.is_free_text());
    }

    #[test]
    fn question_serializes_with_type_tag() {
        let q = college_question(["Texas", "Texas A&M", "LSU", "Oklahoma"]);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["type"], "college");
        assert_eq!(json["college"], "Texas A&M");
    }
}
