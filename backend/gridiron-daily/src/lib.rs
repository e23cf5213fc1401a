#![allow(dead_code)]

pub mod config;
pub mod data;
pub mod matching;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Config;
pub use models::question::{DailyQuestionSet, GameQuestion, QuestionKind};
pub use models::session::GameResultBreakdown;
pub use services::daily_questions::{daily_game_questions, QuestionCatalog};
pub use services::gameplay::{start_session, SessionEvent, SessionHandle};
pub use services::AppState;
