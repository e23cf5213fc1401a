use crate::config::Config;

pub mod daily_questions;
pub mod draft_question;
pub mod gameplay;
pub mod games;

use daily_questions::QuestionCatalog;
use gameplay::Collaborators;

/// Bundled state for the binaries: configuration, the content catalog and
/// the backend collaborators.
pub struct AppState {
    pub config: Config,
    pub catalog: QuestionCatalog,
    pub collaborators: Collaborators,
}

impl AppState {
    pub fn new(config: Config, collaborators: Collaborators) -> Self {
        Self {
            config,
            catalog: QuestionCatalog::default(),
            collaborators,
        }
    }
}
