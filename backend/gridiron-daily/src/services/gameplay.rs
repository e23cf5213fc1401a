//! The per-sitting gameplay state machine.
//!
//! One tokio task drives a session through its four questions:
//! present → countdown → answer (user submit or timeout) → score →
//! feedback pause → advance, finalizing into a [`GameResultBreakdown`]
//! after the last question. Whichever of {user submit, timer expiry}
//! reaches scoring first wins; the loser becomes a no-op through the
//! session's answered latch. Timeout is not an error: it synthesizes a
//! wrong answer and goes down the same scoring path as a click.
//!
//! Commands come in over an mpsc channel, events go out over another.
//! Dropping the [`SessionHandle`] aborts the task: leaving mid-game
//! discards the session and nothing partial is ever recorded.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::config::Config;
use crate::matching::{is_exact_option, is_fuzzy_match};
use crate::models::question::{DailyQuestionSet, GameQuestion, QuestionKind};
use crate::models::session::{GameResultBreakdown, PlaySession};
use crate::models::timer::TimerTick;
use crate::services::games::{
    include_current_player, GameRecorder, PlayGate, QuestionStats,
};
use crate::utils::countdown::Countdown;
use crate::utils::retry::{retry_async_with_config, RetryConfig};

/// Everything the engine calls out to. Trait objects so tests and the CLI
/// can plug in whatever backend they have.
#[derive(Clone)]
pub struct Collaborators {
    pub recorder: Arc<dyn GameRecorder>,
    pub stats: Arc<dyn QuestionStats>,
    pub gate: Arc<dyn PlayGate>,
}

#[derive(Debug, Clone)]
pub enum SessionCommand {
    /// A clicked option or a free-text submission.
    SubmitAnswer(String),
    /// Leave the game; the session is discarded unpersisted.
    Abandon,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    QuestionPresented {
        index: usize,
        total: usize,
        time_limit_seconds: u32,
        question: GameQuestion,
    },
    TimerTick(TimerTick),
    AnswerEvaluated {
        index: usize,
        kind: QuestionKind,
        submitted: String,
        correct: bool,
        correct_answer: String,
        timed_out: bool,
    },
    /// Today's correct percentage for the question just answered, with the
    /// player's own result already folded in. Only emitted while the
    /// session is still showing that question; absent on backend failure.
    CorrectPctReady { index: usize, pct: u8 },
    Finalized(GameResultBreakdown),
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("the daily game was already played today")]
    AlreadyPlayedToday,
    #[error("the game session is no longer running")]
    SessionClosed,
}

/// Cheap cloneable submitter for a running session, for callers that need
/// to send commands while something else is draining events.
#[derive(Clone)]
pub struct SessionClient {
    commands: mpsc::Sender<SessionCommand>,
}

impl SessionClient {
    pub async fn submit_answer(&self, answer: impl Into<String>) -> Result<(), GameError> {
        self.commands
            .send(SessionCommand::SubmitAnswer(answer.into()))
            .await
            .map_err(|_| GameError::SessionClosed)
    }

    pub async fn abandon(&self) -> Result<(), GameError> {
        self.commands
            .send(SessionCommand::Abandon)
            .await
            .map_err(|_| GameError::SessionClosed)
    }
}

/// Client side of a running session.
pub struct SessionHandle {
    id: Uuid,
    commands: mpsc::Sender<SessionCommand>,
    events: mpsc::Receiver<SessionEvent>,
    task: JoinHandle<()>,
}

impl SessionHandle {
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn client(&self) -> SessionClient {
        SessionClient {
            commands: self.commands.clone(),
        }
    }

    pub async fn submit_answer(&self, answer: impl Into<String>) -> Result<(), GameError> {
        self.commands
            .send(SessionCommand::SubmitAnswer(answer.into()))
            .await
            .map_err(|_| GameError::SessionClosed)
    }

    pub async fn abandon(&self) -> Result<(), GameError> {
        self.commands
            .send(SessionCommand::Abandon)
            .await
            .map_err(|_| GameError::SessionClosed)
    }

    /// Next event from the engine; `None` once the session task is done.
    pub async fn next_event(&mut self) -> Option<SessionEvent> {
        self.events.recv().await
    }
}

impl Drop for SessionHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Start one sitting of the daily game. Consults the play gate first when
/// the daily limit is enabled; a gate outage allows play rather than
/// locking everyone out.
pub async fn start_session(
    questions: DailyQuestionSet,
    config: &Config,
    collaborators: Collaborators,
) -> Result<SessionHandle, GameError> {
    if config.daily_limit_enabled {
        match collaborators.gate.has_played_today().await {
            Ok(true) => return Err(GameError::AlreadyPlayedToday),
            Ok(false) => {}
            Err(e) => tracing::warn!("play gate unavailable, allowing play: {e:#}"),
        }
    }

    let session = PlaySession::new(questions.date_key.clone(), questions.len());
    let id = session.id;
    let params = RunParams {
        time_limit: config.question_time_limit_seconds,
        feedback_delay: Duration::from_secs(config.feedback_delay_seconds),
    };
    let (command_tx, command_rx) = mpsc::channel(8);
    let (event_tx, event_rx) = mpsc::channel(64);

    let task = tokio::spawn(run_session(
        questions,
        session,
        params,
        collaborators,
        command_rx,
        event_tx,
    ));

    Ok(SessionHandle {
        id,
        commands: command_tx,
        events: event_rx,
        task,
    })
}

#[derive(Debug, Clone, Copy)]
struct RunParams {
    time_limit: u32,
    feedback_delay: Duration,
}

async fn run_session(
    questions: DailyQuestionSet,
    mut session: PlaySession,
    params: RunParams,
    collaborators: Collaborators,
    mut commands: mpsc::Receiver<SessionCommand>,
    events: mpsc::Sender<SessionEvent>,
) {
    let session_id = session.id;
    let total = questions.len();
    tracing::info!(
        session_id = %session_id,
        date_key = %questions.date_key,
        total,
        "daily game session started"
    );

    for index in 0..total {
        let question = questions.questions[index].clone();
        session.time_remaining = params.time_limit;
        let _ = events
            .send(SessionEvent::QuestionPresented {
                index,
                total,
                time_limit_seconds: params.time_limit,
                question: question.clone(),
            })
            .await;

        let Some((submitted, timed_out)) = wait_for_answer(
            index,
            &question,
            params.time_limit,
            &mut session,
            &mut commands,
            &events,
        )
        .await
        else {
            tracing::info!(session_id = %session_id, index, "session abandoned");
            return;
        };

        let kind = question.kind();
        let correct = evaluate_answer(&question, &submitted);
        session.record_answer(kind, &submitted, correct);
        tracing::info!(
            session_id = %session_id,
            index,
            kind = kind.as_str(),
            correct,
            timed_out,
            "answer scored"
        );
        let _ = events
            .send(SessionEvent::AnswerEvaluated {
                index,
                kind,
                submitted,
                correct,
                correct_answer: question.correct_answer().to_string(),
                timed_out,
            })
            .await;

        let advanced = feedback_pause(
            index,
            kind,
            correct,
            params.feedback_delay,
            &collaborators,
            &mut commands,
            &events,
        )
        .await;
        if advanced.is_none() {
            tracing::info!(session_id = %session_id, index, "session abandoned during feedback");
            return;
        }

        if index + 1 < total {
            session.advance();
        }
    }

    let breakdown = session.finalize();
    tracing::info!(
        session_id = %session_id,
        score = breakdown.score,
        correct = breakdown.correct_count,
        "daily game finished"
    );
    let _ = events
        .send(SessionEvent::Finalized(breakdown.clone()))
        .await;

    // Fire-and-forget: a persistence outage must not hold up the results
    // screen.
    let recorder = collaborators.recorder.clone();
    tokio::spawn(async move {
        let result = retry_async_with_config(RetryConfig::aggressive(), || async {
            recorder.record_completed_game(&breakdown).await
        })
        .await;
        if let Err(e) = result {
            tracing::warn!(session_id = %session_id, "failed to record completed game: {e:#}");
        }
    });
}

/// Run the countdown for one question until the player answers, the timer
/// expires, or the session is abandoned. The countdown lives inside this
/// function, so every way out stops it.
async fn wait_for_answer(
    index: usize,
    question: &GameQuestion,
    time_limit: u32,
    session: &mut PlaySession,
    commands: &mut mpsc::Receiver<SessionCommand>,
    events: &mpsc::Sender<SessionEvent>,
) -> Option<(String, bool)> {
    let mut countdown = Countdown::new(time_limit);
    loop {
        tokio::select! {
            cmd = commands.recv() => match cmd {
                Some(SessionCommand::SubmitAnswer(text)) => {
                    if question.is_free_text() && text.trim().is_empty() {
                        tracing::debug!(index, "ignoring blank free-text submission");
                        continue;
                    }
                    return Some((text, false));
                }
                Some(SessionCommand::Abandon) | None => return None,
            },
            remaining = countdown.tick() => {
                session.time_remaining = remaining;
                let _ = events
                    .send(SessionEvent::TimerTick(TimerTick {
                        question_index: index,
                        remaining_seconds: remaining,
                        total_seconds: time_limit,
                    }))
                    .await;
                if remaining == 0 {
                    return Some((synthesize_timeout_answer(question), true));
                }
            }
        }
    }
}

/// Show feedback for the configured delay while the percent-correct lookup
/// races it. A result that lands in time is folded in and emitted; one that
/// doesn't is dropped with the pinned future when the delay fires, so a
/// slow response can never touch a later question.
async fn feedback_pause(
    index: usize,
    kind: QuestionKind,
    correct: bool,
    feedback_delay: Duration,
    collaborators: &Collaborators,
    commands: &mut mpsc::Receiver<SessionCommand>,
    events: &mpsc::Sender<SessionEvent>,
) -> Option<()> {
    let stats = collaborators.stats.clone();
    let fetch = async move {
        retry_async_with_config(RetryConfig::default(), || async {
            stats.correct_pct_today(kind).await
        })
        .await
    };
    tokio::pin!(fetch);
    let delay = tokio::time::sleep(feedback_delay);
    tokio::pin!(delay);
    let mut fetch_pending = true;

    loop {
        tokio::select! {
            _ = &mut delay => return Some(()),
            result = &mut fetch, if fetch_pending => {
                fetch_pending = false;
                match result {
                    Ok(tally) => {
                        let pct = include_current_player(tally, correct);
                        let _ = events
                            .send(SessionEvent::CorrectPctReady { index, pct })
                            .await;
                    }
                    Err(e) => {
                        tracing::warn!(index, "correct-percentage lookup failed: {e:#}");
                    }
                }
            }
            cmd = commands.recv() => match cmd {
                Some(SessionCommand::SubmitAnswer(_)) => {
                    tracing::debug!(index, "answer already scored, ignoring submission");
                }
                Some(SessionCommand::Abandon) | None => return None,
            }
        }
    }
}

/// Grade a submission against a question: fuzzy matching for free-text
/// entry, exact option equality for everything else.
pub fn evaluate_answer(question: &GameQuestion, submitted: &str) -> bool {
    if question.is_free_text() {
        is_fuzzy_match(submitted, question.correct_answer())
    } else {
        is_exact_option(submitted, question.correct_answer())
    }
}

/// The deterministic wrong answer scored on timeout: the first option that
/// isn't correct for closed-form questions, an empty string for free-text.
pub fn synthesize_timeout_answer(question: &GameQuestion) -> String {
    if question.is_free_text() {
        return String::new();
    }
    question
        .options()
        .iter()
        .find(|option| !is_exact_option(option, question.correct_answer()))
        .cloned()
        .unwrap_or_else(|| question.options()[0].clone())
}
