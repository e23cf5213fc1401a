use serde::{Deserialize, Serialize};

/// One second elapsed on the current question's countdown. Emitted once per
/// second while a question is open; a tick with zero seconds remaining is
/// immediately followed by the synthesized timeout answer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimerTick {
    pub question_index: usize,
    pub remaining_seconds: u32,
    pub total_seconds: u32,
}

impl TimerTick {
    /// True on the tick that exhausts the budget.
    pub fn is_final(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Elapsed seconds since the question was presented.
    pub fn elapsed_seconds(&self) -> u32 {
        self.total_seconds.saturating_sub(self.remaining_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn final_tick_is_detected() {
        let tick = TimerTick {
            question_index: 0,
            remaining_seconds: 0,
            total_seconds: 30,
        };
        assert!(tick.is_final());
        assert_eq!(tick.elapsed_seconds(), 30);
    }

    #[test]
    fn mid_countdown_tick() {
        let tick = TimerTick {
            question_index: 2,
            remaining_seconds: 25,
            total_seconds: 30,
        };
        assert!(!tick.is_final());
        assert_eq!(tick.elapsed_seconds(), 5);
    }
}
