//! Daily question selection.
//!
//! `daily_game_questions` is the public entry point: given a date key it
//! returns the same four questions for everyone on that calendar day. On a
//! themed date the set comes from the curated schedule; otherwise one entry
//! is drawn from each dataset with the date-hash mechanism and decoy
//! options are shuffled in with per-question salts.

use std::collections::HashSet;

use crate::data::career_paths::CareerPathPlayer;
use crate::data::college_players::PlayerCollege;
use crate::data::draft_classes::DraftClass;
use crate::data::season_leaders::SeasonLeaderRecord;
use crate::data::super_bowl::{ThemedQuestionSpec, ThemedSchedule};
use crate::data::{CAREER_PATH_PLAYERS, COLLEGE_PLAYERS, DRAFT_CLASSES, SEASON_LEADERS};
use crate::matching::format_stat_option;
use crate::models::question::{
    CareerPathQuestion, CareerStint, CollegeQuestion, DailyQuestionSet, GameQuestion,
    SeasonLeaderQuestion, SuperBowlQuestion, QUESTIONS_PER_GAME,
};
use crate::services::draft_question::daily_draft_question;
use crate::utils::daily_clock::{normalize_date_key, pacific_date_key};
use crate::utils::seed::{hash_string, seeded_index, seeded_shuffle, seeded_shuffle_in_place};

/// All content the selector draws from, passed in explicitly so tests and
/// alternative deployments can swap any piece.
#[derive(Debug, Clone)]
pub struct QuestionCatalog {
    pub draft_classes: &'static [DraftClass],
    pub college_players: &'static [PlayerCollege],
    pub career_paths: &'static [CareerPathPlayer],
    pub season_leaders: &'static [SeasonLeaderRecord],
    pub themed: ThemedSchedule,
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self {
            draft_classes: DRAFT_CLASSES,
            college_players: COLLEGE_PLAYERS,
            career_paths: CAREER_PATH_PLAYERS,
            season_leaders: SEASON_LEADERS,
            themed: ThemedSchedule::super_bowl_weekend(),
        }
    }
}

impl QuestionCatalog {
    /// The four questions for `date_key`. Pure: two calls with the same
    /// date and catalog produce identical sets, option order included.
    pub fn daily_questions(&self, date_key: &str) -> DailyQuestionSet {
        let date_key = normalize_date_key(date_key);
        if let Some(specs) = self.themed.get(&date_key) {
            let questions = themed_questions(&date_key, specs);
            return DailyQuestionSet {
                date_key,
                questions,
            };
        }

        let questions = vec![
            GameQuestion::Draft(daily_draft_question(self.draft_classes, &date_key)),
            self.college_question(&date_key),
            self.career_path_question(&date_key),
            self.season_leader_question(&date_key),
        ];
        DailyQuestionSet {
            date_key,
            questions,
        }
    }

    fn college_question(&self, date_key: &str) -> GameQuestion {
        let players = self.college_players;
        let player = &players[seeded_index(
            hash_string(&format!("{date_key}college")),
            players.len(),
        )];

        let mut options = [
            player.college.to_string(),
            player.wrong_options[0].to_string(),
            player.wrong_options[1].to_string(),
            player.wrong_options[2].to_string(),
        ];
        seeded_shuffle_in_place(&format!("{date_key}college-options"), &mut options);

        GameQuestion::College(CollegeQuestion {
            name: player.name.to_string(),
            college: player.college.to_string(),
            wrong_options: player.wrong_options.map(String::from),
            options,
        })
    }

    fn career_path_question(&self, date_key: &str) -> GameQuestion {
        let players = self.career_paths;
        let player = &players[seeded_index(
            hash_string(&format!("{date_key}career")),
            players.len(),
        )];

        let nfl_stints: Vec<CareerStint> = player
            .nfl_teams
            .iter()
            .zip(player.nfl_team_years.iter())
            .map(|(team, years)| CareerStint {
                team: (*team).to_string(),
                years: (*years).to_string(),
            })
            .collect();

        let mut options = [
            player.name.to_string(),
            player.wrong_options[0].to_string(),
            player.wrong_options[1].to_string(),
            player.wrong_options[2].to_string(),
        ];
        seeded_shuffle_in_place(&format!("{date_key}career-options"), &mut options);

        GameQuestion::CareerPath(CareerPathQuestion {
            position: player.position.to_string(),
            college: player.college.to_string(),
            college_years: player.college_years.to_string(),
            nfl_stints,
            correct_answer: player.name.to_string(),
            options,
        })
    }

    fn season_leader_question(&self, date_key: &str) -> GameQuestion {
        let records = self.season_leaders;
        let record = &records[seeded_index(
            hash_string(&format!("{date_key}season")),
            records.len(),
        )];

        // The formatted string is the answer, so comparison stays exact
        // even when the semantic answer is a (name, stat) pair.
        let correct = format_stat_option(record.leader, record.stat_value, Some(record.category));
        let wrong: Vec<String> = record
            .wrong_options
            .iter()
            .map(|(name, stat)| format_stat_option(name, *stat, Some(record.category)))
            .collect();

        let mut options = [
            correct.clone(),
            wrong[0].clone(),
            wrong[1].clone(),
            wrong[2].clone(),
        ];
        seeded_shuffle_in_place(&format!("{date_key}season-options"), &mut options);

        GameQuestion::SeasonLeader(SeasonLeaderQuestion {
            year: record.year,
            category: record.category,
            correct_answer: correct,
            stat_value: record.stat_value,
            options,
        })
    }
}

/// Build the curated set for a themed date. With more than four candidate
/// facts, four are chosen by the date hash; otherwise the authored order
/// stands. Decoys are drawn from each spec's era-appropriate pool.
fn themed_questions(date_key: &str, specs: &[ThemedQuestionSpec]) -> Vec<GameQuestion> {
    let chosen: Vec<&ThemedQuestionSpec> = if specs.len() > QUESTIONS_PER_GAME {
        let refs: Vec<&ThemedQuestionSpec> = specs.iter().collect();
        seeded_shuffle(&format!("{date_key}themed"), &refs)
            .into_iter()
            .take(QUESTIONS_PER_GAME)
            .collect()
    } else {
        specs.iter().collect()
    };

    chosen
        .into_iter()
        .map(|spec| {
            let mut seen: HashSet<&str> = HashSet::new();
            seen.insert(spec.correct_answer);
            let pool: Vec<&str> = spec
                .decoy_pool
                .iter()
                .copied()
                .filter(|candidate| seen.insert(*candidate))
                .collect();
            let decoys = seeded_shuffle(&format!("{date_key}{}-decoys", spec.id), &pool);

            let mut options = [
                spec.correct_answer.to_string(),
                decoys[0].to_string(),
                decoys[1].to_string(),
                decoys[2].to_string(),
            ];
            seeded_shuffle_in_place(&format!("{date_key}{}-options", spec.id), &mut options);

            GameQuestion::SuperBowl(SuperBowlQuestion {
                id: spec.id.to_string(),
                prompt: spec.prompt.to_string(),
                correct_answer: spec.correct_answer.to_string(),
                free_text: spec.free_text,
                options,
            })
        })
        .collect()
}

/// The daily set for `date_key`, defaulting to today on the Pacific civil
/// clock when no date is given.
pub fn daily_game_questions(
    catalog: &QuestionCatalog,
    date_key: Option<&str>,
) -> DailyQuestionSet {
    let date = match date_key {
        Some(d) => normalize_date_key(d),
        None => pacific_date_key(),
    };
    catalog.daily_questions(&date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::QuestionKind;

    #[test]
    fn same_date_gives_identical_sets() {
        let catalog = QuestionCatalog::default();
        let a = catalog.daily_questions("2025-01-15");
        let b = catalog.daily_questions("2025-01-15");
        assert_eq!(a, b);
    }

    #[test]
    fn regular_day_kind_order_is_fixed() {
        let catalog = QuestionCatalog::default();
        let set = catalog.daily_questions("2025-01-15");
        let kinds: Vec<QuestionKind> = set.questions.iter().map(|q| q.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                QuestionKind::Draft,
                QuestionKind::College,
                QuestionKind::CareerPath,
                QuestionKind::SeasonLeader,
            ]
        );
    }

    #[test]
    fn selection_pins_for_a_known_date() {
        let catalog = QuestionCatalog::default();
        let set = catalog.daily_questions("2025-01-15");
        match &set.questions[0] {
            GameQuestion::Draft(q) => {
                assert_eq!(q.year, 2022);
                assert_eq!(q.missing_slot_index, 3);
                assert_eq!(q.correct_answer, "Sauce Gardner");
            }
            other => panic!("expected draft question, got {other:?}"),
        }
        match &set.questions[1] {
            GameQuestion::College(q) => {
                assert_eq!(q.name, "Patrick Mahomes");
                assert_eq!(q.college, "Texas Tech");
            }
            other => panic!("expected college question, got {other:?}"),
        }
        match &set.questions[2] {
            GameQuestion::CareerPath(q) => {
                assert_eq!(q.correct_answer, "Odell Beckham Jr.");
                assert_eq!(q.position, "WR");
            }
            other => panic!("expected career path question, got {other:?}"),
        }
        match &set.questions[3] {
            GameQuestion::SeasonLeader(q) => {
                assert_eq!(q.year, 2006);
                assert_eq!(q.correct_answer, "Peyton Manning (31 TDs)");
            }
            other => panic!("expected season leader question, got {other:?}"),
        }
    }

    #[test]
    fn every_question_holds_the_option_invariant() {
        let catalog = QuestionCatalog::default();
        for day in 1..=28 {
            let set = catalog.daily_questions(&format!("2025-03-{day:02}"));
            set.validate().expect("valid set");
        }
    }

    #[test]
    fn picks_vary_across_consecutive_days() {
        let catalog = QuestionCatalog::default();
        let mut colleges = HashSet::new();
        for day in 10..20 {
            let set = catalog.daily_questions(&format!("2025-01-{day}"));
            match &set.questions[1] {
                GameQuestion::College(q) => {
                    colleges.insert(q.name.clone());
                }
                other => panic!("expected college question, got {other:?}"),
            }
        }
        assert!(colleges.len() > 1, "ten days drew a single college player");
    }

    #[test]
    fn themed_dates_override_the_dataset_picks() {
        let catalog = QuestionCatalog::default();
        for date in ["2026-02-07", "2026-02-08"] {
            let set = catalog.daily_questions(date);
            assert_eq!(set.len(), QUESTIONS_PER_GAME);
            for question in &set.questions {
                assert_eq!(question.kind(), QuestionKind::SuperBowl);
            }
            assert_eq!(set, catalog.daily_questions(date));
            set.validate().expect("themed set is valid");
        }
    }

    #[test]
    fn saturday_and_sunday_revisions_differ() {
        let catalog = QuestionCatalog::default();
        let saturday = catalog.daily_questions("2026-02-07");
        let sunday = catalog.daily_questions("2026-02-08");
        match (&saturday.questions[0], &sunday.questions[0]) {
            (GameQuestion::SuperBowl(sat), GameQuestion::SuperBowl(sun)) => {
                assert_eq!(sat.correct_answer, "Saints");
                assert_eq!(sun.correct_answer, "Packers");
            }
            other => panic!("expected themed questions, got {other:?}"),
        }
    }

    #[test]
    fn unpadded_date_keys_are_normalized() {
        let catalog = QuestionCatalog::default();
        let padded = catalog.daily_questions("2026-02-07");
        let loose = catalog.daily_questions("2026-2-7");
        assert_eq!(padded, loose);
    }

    #[test]
    fn entry_point_accepts_explicit_dates() {
        let catalog = QuestionCatalog::default();
        let set = daily_game_questions(&catalog, Some("2025-01-15"));
        assert_eq!(set.date_key, "2025-01-15");
        assert_eq!(set.len(), QUESTIONS_PER_GAME);
        let today = daily_game_questions(&catalog, None);
        assert_eq!(today.len(), QUESTIONS_PER_GAME);
    }

    #[test]
    fn fill_in_themed_question_is_free_text_with_valid_options() {
        let catalog = QuestionCatalog::default();
        let set = catalog.daily_questions("2026-02-07");
        match &set.questions[3] {
            GameQuestion::SuperBowl(q) => {
                assert_eq!(q.id, "patriots-mvp-count");
                assert!(q.free_text);
                assert!(q.options.contains(&"2".to_string()));
            }
            other => panic!("expected themed fill-in, got {other:?}"),
        }
    }
}
