//! Answer evaluation.
//!
//! Closed-form questions compare the clicked option string exactly.
//! Free-text questions (career path, themed fill-ins) tolerate case,
//! punctuation and small typos but must not accept a different person:
//! a wrong player accepted is worse than a garbled right one rejected,
//! so the similarity threshold leans conservative.

use crate::models::question::SeasonCategory;

/// Minimum normalized Damerau-Levenshtein similarity for a free-text guess.
/// Validated against the fixture pairs in the tests below; "jonny manzeil"
/// passes (two edits on fourteen characters), unrelated names do not.
const FUZZY_ACCEPT_THRESHOLD: f64 = 0.8;

/// Exact string equality, used for every multiple-choice question. Options
/// are rendered and compared verbatim, including embedded stat values.
pub fn is_exact_option(choice: &str, correct: &str) -> bool {
    choice == correct
}

/// Lowercase, strip punctuation and collapse whitespace so that grading
/// only sees the letters the player meant.
fn normalize_name(s: &str) -> String {
    let mapped: String = s
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    mapped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Accept a typed guess when it names the same person as `correct`.
pub fn is_fuzzy_match(guess: &str, correct: &str) -> bool {
    let guess = normalize_name(guess);
    let correct = normalize_name(correct);
    if guess.is_empty() || correct.is_empty() {
        return false;
    }
    if guess == correct {
        return true;
    }
    strsim::normalized_damerau_levenshtein(&guess, &correct) >= FUZZY_ACCEPT_THRESHOLD
}

/// Render an option string for a (name, stat) pair. With no stat the name
/// passes through unchanged; with one, the unit follows the category
/// (sacks keep their decimals: "T.J. Watt (22.5 sacks)").
pub fn format_stat_option(
    name: &str,
    stat_value: Option<f64>,
    category: Option<SeasonCategory>,
) -> String {
    let Some(value) = stat_value else {
        return name.to_string();
    };
    let unit = category.map(|c| c.stat_unit()).unwrap_or("TDs");
    if value.fract() == 0.0 {
        format!("{} ({} {})", name, value as i64, unit)
    } else {
        format!("{} ({} {})", name, value, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_is_case_and_whitespace_sensitive() {
        assert!(is_exact_option("Texas A&M", "Texas A&M"));
        assert!(!is_exact_option("texas a&m", "Texas A&M"));
        assert!(!is_exact_option("Texas A&M ", "Texas A&M"));
    }

    #[test]
    fn fuzzy_accepts_case_differences() {
        assert!(is_fuzzy_match("johnny manziel", "Johnny Manziel"));
        assert!(is_fuzzy_match("  JOHNNY MANZIEL  ", "Johnny Manziel"));
    }

    #[test]
    fn fuzzy_accepts_small_typos() {
        assert!(is_fuzzy_match("jonny manzeil", "Johnny Manziel"));
        assert!(is_fuzzy_match("Patrick Mahome", "Patrick Mahomes"));
    }

    #[test]
    fn fuzzy_tolerates_punctuation() {
        assert!(is_fuzzy_match("TJ Watt", "T.J. Watt"));
        assert!(is_fuzzy_match("JaMarr Chase", "Ja'Marr Chase"));
    }

    #[test]
    fn fuzzy_rejects_other_players() {
        assert!(!is_fuzzy_match("Tom Brady", "Johnny Manziel"));
        assert!(!is_fuzzy_match("Peyton Manning", "Eli Manning"));
    }

    #[test]
    fn fuzzy_rejects_empty_or_blank_guesses() {
        assert!(!is_fuzzy_match("", "Johnny Manziel"));
        assert!(!is_fuzzy_match("   ", "Johnny Manziel"));
        assert!(!is_fuzzy_match("...", "Johnny Manziel"));
    }

    #[test]
    fn stat_option_formats_per_category() {
        assert_eq!(
            format_stat_option("Micah Parsons", Some(12.0), Some(SeasonCategory::Sacks)),
            "Micah Parsons (12 sacks)"
        );
        assert_eq!(
            format_stat_option("T.J. Watt", Some(22.5), Some(SeasonCategory::Sacks)),
            "T.J. Watt (22.5 sacks)"
        );
        assert_eq!(
            format_stat_option(
                "Trevon Diggs",
                Some(11.0),
                Some(SeasonCategory::Interceptions)
            ),
            "Trevon Diggs (11 INTs)"
        );
        assert_eq!(
            format_stat_option(
                "Patrick Mahomes",
                Some(41.0),
                Some(SeasonCategory::PassingTds)
            ),
            "Patrick Mahomes (41 TDs)"
        );
    }

    #[test]
    fn stat_option_without_value_is_the_bare_name() {
        assert_eq!(
            format_stat_option("Derrick Henry", None, Some(SeasonCategory::Rushing)),
            "Derrick Henry"
        );
        assert_eq!(format_stat_option("Tom Brady", None, None), "Tom Brady");
    }
}
