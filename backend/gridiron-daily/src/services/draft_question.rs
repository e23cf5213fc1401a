//! Daily draft question: one top-10 list with a blanked slot.

use std::collections::HashSet;

use crate::data::draft_classes::DraftClass;
use crate::models::question::DraftQuestion;
use crate::utils::seed::{hash_string, seeded_index, seeded_shuffle, seeded_shuffle_in_place};

/// Build the draft question for a date. The class, the blanked slot, the
/// decoys and the option order are all seeded by the date key, so every
/// player gets the same puzzle.
pub fn daily_draft_question(classes: &[DraftClass], date_key: &str) -> DraftQuestion {
    let class = &classes[seeded_index(hash_string(&format!("{date_key}draft")), classes.len())];
    let slot = seeded_index(
        hash_string(&format!("{date_key}draftslot")),
        class.picks.len(),
    );
    let correct = class.picks[slot];

    let shown_picks: Vec<Option<String>> = class
        .picks
        .iter()
        .enumerate()
        .map(|(i, name)| {
            if i == slot {
                None
            } else {
                Some((*name).to_string())
            }
        })
        .collect();

    // Decoys come from other draft classes: same domain, but elimination
    // against the visible list can't reveal the answer.
    let this_class: HashSet<&str> = class.picks.iter().copied().collect();
    let mut pool: Vec<&str> = Vec::new();
    for other in classes {
        if other.year == class.year {
            continue;
        }
        for pick in other.picks {
            if !this_class.contains(pick) && !pool.contains(&pick) {
                pool.push(pick);
            }
        }
    }
    let decoys = seeded_shuffle(&format!("{date_key}draft-decoys"), &pool);

    let mut options = [
        correct.to_string(),
        decoys[0].to_string(),
        decoys[1].to_string(),
        decoys[2].to_string(),
    ];
    seeded_shuffle_in_place(&format!("{date_key}draft-options"), &mut options);

    DraftQuestion {
        year: class.year,
        missing_slot_index: slot,
        correct_answer: correct.to_string(),
        shown_picks,
        options,
    }
}

/// Display label for a draft slot ("Pick #3" for index 2).
pub fn pick_label(slot_index: usize) -> String {
    format!("Pick #{}", slot_index + 1)
}
