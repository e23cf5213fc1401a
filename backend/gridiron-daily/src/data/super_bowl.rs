//! Super Bowl facts and the themed-weekend question schedule.
//!
//! Source: Pro Football Reference (Super Bowl History). Team names use the
//! short display form ("Chiefs", "49ers"); cities are the host city as
//! commonly cited ("Miami Gardens", "East Rutherford", "Glendale").
//!
//! The themed schedule is configuration, not logic: each designated date
//! maps to a curated list of question specs, and the selector turns specs
//! into questions with date-seeded decoys. Swapping the dates or the facts
//! touches only this file.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuperBowlFact {
    /// Numeral as displayed, e.g. "LVIII" ("50" was branded in digits).
    pub roman: &'static str,
    /// Calendar year the game was played (e.g. 2024 for LVIII).
    pub year: u16,
    pub winner: &'static str,
    pub loser: &'static str,
    pub mvp: &'static str,
    pub city: &'static str,
}

pub const SUPER_BOWL_FACTS: &[SuperBowlFact] = &[
    SuperBowlFact { roman: "LIX", year: 2025, winner: "Eagles", loser: "Chiefs", mvp: "Jalen Hurts", city: "New Orleans" },
    SuperBowlFact { roman: "LVIII", year: 2024, winner: "Chiefs", loser: "49ers", mvp: "Patrick Mahomes", city: "Las Vegas" },
    SuperBowlFact { roman: "LVII", year: 2023, winner: "Chiefs", loser: "Eagles", mvp: "Patrick Mahomes", city: "Glendale" },
    SuperBowlFact { roman: "LVI", year: 2022, winner: "Rams", loser: "Bengals", mvp: "Cooper Kupp", city: "Inglewood" },
    SuperBowlFact { roman: "LV", year: 2021, winner: "Buccaneers", loser: "Chiefs", mvp: "Tom Brady", city: "Tampa" },
    SuperBowlFact { roman: "LIV", year: 2020, winner: "Chiefs", loser: "49ers", mvp: "Patrick Mahomes", city: "Miami Gardens" },
    SuperBowlFact { roman: "LIII", year: 2019, winner: "Patriots", loser: "Rams", mvp: "Julian Edelman", city: "Atlanta" },
    SuperBowlFact { roman: "LII", year: 2018, winner: "Eagles", loser: "Patriots", mvp: "Nick Foles", city: "Minneapolis" },
    SuperBowlFact { roman: "LI", year: 2017, winner: "Patriots", loser: "Falcons", mvp: "Tom Brady", city: "Houston" },
    SuperBowlFact { roman: "50", year: 2016, winner: "Broncos", loser: "Panthers", mvp: "Von Miller", city: "Santa Clara" },
    SuperBowlFact { roman: "XLIX", year: 2015, winner: "Patriots", loser: "Seahawks", mvp: "Tom Brady", city: "Glendale" },
    SuperBowlFact { roman: "XLVIII", year: 2014, winner: "Seahawks", loser: "Broncos", mvp: "Malcolm Smith", city: "East Rutherford" },
    SuperBowlFact { roman: "XLVII", year: 2013, winner: "Ravens", loser: "49ers", mvp: "Joe Flacco", city: "New Orleans" },
    SuperBowlFact { roman: "XLVI", year: 2012, winner: "Giants", loser: "Patriots", mvp: "Eli Manning", city: "Indianapolis" },
    SuperBowlFact { roman: "XLV", year: 2011, winner: "Packers", loser: "Steelers", mvp: "Aaron Rodgers", city: "Arlington" },
    SuperBowlFact { roman: "XLIV", year: 2010, winner: "Saints", loser: "Colts", mvp: "Drew Brees", city: "Miami Gardens" },
    SuperBowlFact { roman: "XLIII", year: 2009, winner: "Steelers", loser: "Cardinals", mvp: "Santonio Holmes", city: "Tampa" },
    SuperBowlFact { roman: "XLII", year: 2008, winner: "Giants", loser: "Patriots", mvp: "Eli Manning", city: "Glendale" },
    SuperBowlFact { roman: "XLI", year: 2007, winner: "Colts", loser: "Bears", mvp: "Peyton Manning", city: "Miami Gardens" },
    SuperBowlFact { roman: "XL", year: 2006, winner: "Steelers", loser: "Seahawks", mvp: "Hines Ward", city: "Detroit" },
    SuperBowlFact { roman: "XXXIX", year: 2005, winner: "Patriots", loser: "Eagles", mvp: "Deion Branch", city: "Jacksonville" },
    SuperBowlFact { roman: "XXXVIII", year: 2004, winner: "Patriots", loser: "Panthers", mvp: "Tom Brady", city: "Houston" },
    SuperBowlFact { roman: "XXXVII", year: 2003, winner: "Buccaneers", loser: "Raiders", mvp: "Dexter Jackson", city: "San Diego" },
    SuperBowlFact { roman: "XXXVI", year: 2002, winner: "Patriots", loser: "Rams", mvp: "Tom Brady", city: "New Orleans" },
    SuperBowlFact { roman: "XXXV", year: 2001, winner: "Ravens", loser: "Giants", mvp: "Ray Lewis", city: "Tampa" },
    SuperBowlFact { roman: "XXXIV", year: 2000, winner: "Rams", loser: "Titans", mvp: "Kurt Warner", city: "Atlanta" },
    SuperBowlFact { roman: "XXXIII", year: 1999, winner: "Broncos", loser: "Falcons", mvp: "John Elway", city: "Miami Gardens" },
];

/// NFC teams in short display form, for conference-scoped decoy pools.
pub const NFC_TEAMS: &[&str] = &[
    "49ers",
    "Bears",
    "Buccaneers",
    "Cardinals",
    "Commanders",
    "Cowboys",
    "Eagles",
    "Falcons",
    "Giants",
    "Lions",
    "Packers",
    "Panthers",
    "Rams",
    "Saints",
    "Seahawks",
    "Vikings",
];

/// Look up a fact by its numeral.
pub fn fact_for_roman(roman: &str) -> Option<&'static SuperBowlFact> {
    SUPER_BOWL_FACTS.iter().find(|f| f.roman == roman)
}

/// Distinct MVP names for games played in `[from_year, to_year]`, in table
/// order. Keeps decoy pools inside the era the question is about.
pub fn mvps_between(from_year: u16, to_year: u16) -> Vec<&'static str> {
    let mut seen = Vec::new();
    for fact in SUPER_BOWL_FACTS {
        if fact.year >= from_year && fact.year <= to_year && !seen.contains(&fact.mvp) {
            seen.push(fact.mvp);
        }
    }
    seen
}

/// Distinct host cities for games played in `[from_year, to_year]`, in
/// table order.
pub fn cities_between(from_year: u16, to_year: u16) -> Vec<&'static str> {
    let mut seen = Vec::new();
    for fact in SUPER_BOWL_FACTS {
        if fact.year >= from_year && fact.year <= to_year && !seen.contains(&fact.city) {
            seen.push(fact.city);
        }
    }
    seen
}

/// A curated themed question before decoy selection. The selector picks
/// three decoys from `decoy_pool` and shuffles options, all seeded by the
/// date key.
#[derive(Debug, Clone, PartialEq)]
pub struct ThemedQuestionSpec {
    /// Stable slug, also used as the shuffle salt for this question.
    pub id: &'static str,
    pub prompt: &'static str,
    pub correct_answer: &'static str,
    pub decoy_pool: Vec<&'static str>,
    /// Fill-in-the-blank: graded free-text, options kept for consistency.
    pub free_text: bool,
}

/// Date key → curated question list. Which dates are themed has been
/// revised more than once, so the mapping is plain data handed to the
/// selector rather than anything baked into it.
#[derive(Debug, Clone, Default)]
pub struct ThemedSchedule {
    entries: BTreeMap<String, Vec<ThemedQuestionSpec>>,
}

impl ThemedSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date_key: impl Into<String>, specs: Vec<ThemedQuestionSpec>) {
        self.entries.insert(date_key.into(), specs);
    }

    pub fn contains(&self, date_key: &str) -> bool {
        self.entries.contains_key(date_key)
    }

    pub fn get(&self, date_key: &str) -> Option<&[ThemedQuestionSpec]> {
        self.entries.get(date_key).map(Vec::as_slice)
    }

    pub fn dates(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// The Super Bowl LX weekend schedule: Saturday 2/7/26 and Sunday
    /// 2/8/26 each get their own fixed four questions.
    pub fn super_bowl_weekend() -> Self {
        let mut schedule = Self::new();
        schedule.insert(
            "2026-02-07",
            vec![
                ThemedQuestionSpec {
                    id: "bears-nfc",
                    prompt:
                        "Who did the Bears beat in the NFC Championship to reach Super Bowl XLI?",
                    correct_answer: "Saints",
                    decoy_pool: NFC_TEAMS.iter().copied().filter(|t| *t != "Saints").collect(),
                    free_text: false,
                },
                ThemedQuestionSpec {
                    id: "wr-mvp-count",
                    prompt: "How many wide receivers have won Super Bowl MVP?",
                    correct_answer: "8",
                    decoy_pool: vec!["5", "6", "7", "9"],
                    free_text: false,
                },
                ThemedQuestionSpec {
                    id: "rushing-record",
                    prompt: "Who holds the single-game Super Bowl rushing record?",
                    correct_answer: "Tim Smith",
                    decoy_pool: vec![
                        "Marcus Allen",
                        "Larry Csonka",
                        "John Riggins",
                        "Terrell Davis",
                        "Emmitt Smith",
                    ],
                    free_text: false,
                },
                ThemedQuestionSpec {
                    id: "patriots-mvp-count",
                    prompt:
                        "How many Patriots players not named Tom Brady have won Super Bowl MVP?",
                    correct_answer: "2",
                    decoy_pool: vec!["0", "1", "3", "4"],
                    free_text: true,
                },
            ],
        );
        schedule.insert(
            "2026-02-08",
            vec![
                ThemedQuestionSpec {
                    id: "first-winner",
                    prompt: "What team won the first ever Super Bowl?",
                    correct_answer: "Packers",
                    // Teams of the first Super Bowl era, not the modern field.
                    decoy_pool: vec!["Chiefs", "Raiders", "Colts", "Cowboys", "Jets"],
                    free_text: false,
                },
                ThemedQuestionSpec {
                    id: "last-defensive-mvp",
                    prompt: "Who is the last defensive player to win Super Bowl MVP?",
                    correct_answer: "Von Miller",
                    decoy_pool: vec!["Ray Lewis", "Malcolm Smith", "Dexter Jackson", "Aaron Donald"],
                    free_text: false,
                },
                ThemedQuestionSpec {
                    id: "losing-team-mvp-count",
                    prompt: "How many players from the losing team have won Super Bowl MVP?",
                    correct_answer: "1",
                    decoy_pool: vec!["0", "2", "3", "4"],
                    free_text: false,
                },
                ThemedQuestionSpec {
                    id: "sb-lii-mvp",
                    prompt: "Who won Super Bowl MVP of Super Bowl LII (Eagles vs Patriots)?",
                    correct_answer: "Nick Foles",
                    // MVPs from the surrounding decade keep the decoys plausible.
                    decoy_pool: mvps_between(2014, 2022)
                        .into_iter()
                        .filter(|m| *m != "Nick Foles")
                        .collect(),
                    free_text: false,
                },
            ],
        );
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facts_cover_the_curated_era() {
        assert_eq!(SUPER_BOWL_FACTS.len(), 27);
        assert_eq!(SUPER_BOWL_FACTS.first().unwrap().roman, "LIX");
        assert_eq!(SUPER_BOWL_FACTS.last().unwrap().year, 1999);
    }

    #[test]
    fn roman_lookup_finds_known_games() {
        let lii = fact_for_roman("LII").unwrap();
        assert_eq!(lii.mvp, "Nick Foles");
        assert_eq!(lii.winner, "Eagles");
        assert!(fact_for_roman("I").is_none());
    }

    #[test]
    fn era_pools_are_distinct_and_bounded() {
        let mvps = mvps_between(2014, 2022);
        assert!(mvps.contains(&"Nick Foles"));
        assert!(mvps.contains(&"Von Miller"));
        assert!(!mvps.contains(&"John Elway"));
        let unique: std::collections::HashSet<_> = mvps.iter().collect();
        assert_eq!(unique.len(), mvps.len());

        let cities = cities_between(1999, 2004);
        assert!(cities.contains(&"Jacksonville"));
        assert!(!cities.contains(&"Las Vegas"));
    }

    #[test]
    fn weekend_schedule_has_both_revisions() {
        let schedule = ThemedSchedule::super_bowl_weekend();
        assert!(schedule.contains("2026-02-07"));
        assert!(schedule.contains("2026-02-08"));
        assert!(!schedule.contains("2026-02-09"));
        assert_eq!(schedule.get("2026-02-07").unwrap().len(), 4);
        assert_eq!(schedule.get("2026-02-08").unwrap().len(), 4);
    }

    #[test]
    fn decoy_pools_never_contain_the_answer() {
        let schedule = ThemedSchedule::super_bowl_weekend();
        for date in ["2026-02-07", "2026-02-08"] {
            for spec in schedule.get(date).unwrap() {
                assert!(
                    !spec.decoy_pool.contains(&spec.correct_answer),
                    "{} pool contains its own answer",
                    spec.id
                );
                assert!(spec.decoy_pool.len() >= 3, "{} pool too small", spec.id);
            }
        }
    }
}
