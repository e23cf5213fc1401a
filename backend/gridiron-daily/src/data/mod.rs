//! Static question datasets.
//!
//! All content is versioned data compiled into the binary. Malformed or
//! empty datasets are configuration errors: they are caught here (by the
//! verification worker and the test suite), never defended against in the
//! runtime selection path.

use std::collections::HashSet;
use thiserror::Error;

pub mod career_paths;
pub mod college_players;
pub mod draft_classes;
pub mod season_leaders;
pub mod super_bowl;

pub use career_paths::{CareerPathPlayer, CAREER_PATH_PLAYERS};
pub use college_players::{PlayerCollege, COLLEGE_PLAYERS};
pub use draft_classes::{DraftClass, DRAFT_CLASSES};
pub use season_leaders::{SeasonLeaderRecord, SEASON_LEADERS};
pub use super_bowl::{
    ThemedQuestionSpec, ThemedSchedule, NFC_TEAMS, SUPER_BOWL_FACTS,
};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset {0} is empty")]
    Empty(&'static str),
    #[error("draft class {year} has duplicate picks")]
    DuplicateDraftPicks { year: u16 },
    #[error("need at least two draft classes to build decoys, found {0}")]
    TooFewDraftClasses(usize),
    #[error("{dataset} record {name:?} has duplicate or self-referencing decoys")]
    BadDecoys {
        dataset: &'static str,
        name: &'static str,
    },
    #[error("career path record {name:?} has mismatched team/year lists")]
    MismatchedStints { name: &'static str },
}

/// Validate every compiled-in dataset. Run by `verify-questions` and the
/// test suite before anything else is trusted.
pub fn validate_datasets() -> Result<(), DatasetError> {
    if DRAFT_CLASSES.is_empty() {
        return Err(DatasetError::Empty("draft_classes"));
    }
    if DRAFT_CLASSES.len() < 2 {
        return Err(DatasetError::TooFewDraftClasses(DRAFT_CLASSES.len()));
    }
    for class in DRAFT_CLASSES {
        let distinct: HashSet<_> = class.picks.iter().collect();
        if distinct.len() != class.picks.len() {
            return Err(DatasetError::DuplicateDraftPicks { year: class.year });
        }
    }

    if COLLEGE_PLAYERS.is_empty() {
        return Err(DatasetError::Empty("college_players"));
    }
    for player in COLLEGE_PLAYERS {
        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(player.college);
        for wrong in player.wrong_options {
            if !seen.insert(wrong) {
                return Err(DatasetError::BadDecoys {
                    dataset: "college_players",
                    name: player.name,
                });
            }
        }
    }

    if CAREER_PATH_PLAYERS.is_empty() {
        return Err(DatasetError::Empty("career_paths"));
    }
    for player in CAREER_PATH_PLAYERS {
        if player.nfl_teams.is_empty() || player.nfl_teams.len() != player.nfl_team_years.len() {
            return Err(DatasetError::MismatchedStints { name: player.name });
        }
        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(player.name);
        for wrong in player.wrong_options {
            if !seen.insert(wrong) {
                return Err(DatasetError::BadDecoys {
                    dataset: "career_paths",
                    name: player.name,
                });
            }
        }
    }

    if SEASON_LEADERS.is_empty() {
        return Err(DatasetError::Empty("season_leaders"));
    }
    for record in SEASON_LEADERS {
        let mut seen: HashSet<&str> = HashSet::new();
        seen.insert(record.leader);
        for (wrong, _) in record.wrong_options {
            if !seen.insert(wrong) {
                return Err(DatasetError::BadDecoys {
                    dataset: "season_leaders",
                    name: record.leader,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_datasets_are_valid() {
        validate_datasets().expect("static datasets must validate");
    }

    #[test]
    fn draft_classes_have_ten_picks() {
        for class in DRAFT_CLASSES {
            assert_eq!(class.picks.len(), 10, "class {}", class.year);
        }
    }

    #[test]
    fn season_stat_values_follow_category_rules() {
        use crate::models::question::SeasonCategory;
        for record in SEASON_LEADERS {
            match record.category {
                SeasonCategory::Passing | SeasonCategory::Rushing | SeasonCategory::Receiving => {
                    assert!(
                        record.stat_value.is_none(),
                        "yardage categories show bare names ({})",
                        record.leader
                    );
                }
                _ => {
                    assert!(
                        record.stat_value.is_some(),
                        "count categories carry a stat ({})",
                        record.leader
                    );
                    for (name, stat) in record.wrong_options {
                        assert!(stat.is_some(), "decoy {name} missing a stat");
                    }
                }
            }
        }
    }
}
