pub mod question;
pub mod session;
pub mod timer;

pub use question::{
    CareerPathQuestion, CareerStint, CollegeQuestion, DailyQuestionSet, DraftQuestion,
    GameQuestion, QuestionIntegrityError, QuestionKind, SeasonCategory, SeasonLeaderQuestion,
    SuperBowlQuestion, OPTIONS_PER_QUESTION, QUESTIONS_PER_GAME,
};
pub use session::{GameResultBreakdown, PlaySession};
pub use timer::TimerTick;
