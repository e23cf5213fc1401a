#![allow(dead_code)]

use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gridiron_daily::models::question::GameQuestion;
use gridiron_daily::services::daily_questions::daily_game_questions;
use gridiron_daily::services::gameplay::{start_session, Collaborators, GameError, SessionEvent};
use gridiron_daily::services::games::NullBackend;
use gridiron_daily::utils::daily_clock::{pacific_date_key, time_until_next_midnight};
use gridiron_daily::{AppState, Config};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gridiron_daily=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().expect("Failed to load configuration");
    let collaborators = Collaborators {
        recorder: Arc::new(NullBackend),
        stats: Arc::new(NullBackend),
        gate: Arc::new(NullBackend),
    };
    let state = AppState::new(config, collaborators);

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_else(|| "play".to_string());
    let date_key = args.next();

    match command.as_str() {
        "preview" => preview(&state, date_key.as_deref()),
        "play" => play(&state, date_key.as_deref()).await,
        other => {
            eprintln!("unknown command {other:?}");
            eprintln!("usage: gridiron-daily [preview|play] [YYYY-MM-DD]");
            std::process::exit(2);
        }
    }
}

/// Print today's (or the given date's) question set without playing.
fn preview(state: &AppState, date_key: Option<&str>) {
    let set = daily_game_questions(&state.catalog, date_key);
    println!("Questions for {}:", set.date_key);
    println!("(next game day in {})", time_until_next_midnight());
    for (i, question) in set.questions.iter().enumerate() {
        println!();
        println!("{}. {}", i + 1, question.prompt_text());
        print_question_detail(question);
        if question.is_free_text() {
            println!("   (free-text entry)");
        } else {
            for (j, option) in question.options().iter().enumerate() {
                println!("   {}) {}", j + 1, option);
            }
        }
    }
}

/// Play today's game in the terminal against a stand-in backend. Answers
/// are typed: the option number for multiple choice, the name itself for
/// free-text questions.
async fn play(state: &AppState, date_key: Option<&str>) {
    println!("Daily trivia for {}", pacific_date_key());
    let set = daily_game_questions(&state.catalog, date_key);

    let mut handle = match start_session(set, &state.config, state.collaborators.clone()).await {
        Ok(handle) => handle,
        Err(GameError::AlreadyPlayedToday) => {
            println!("You already played today. Next game in {}.", time_until_next_midnight());
            return;
        }
        Err(e) => {
            eprintln!("could not start a session: {e}");
            std::process::exit(1);
        }
    };
    let client = handle.client();

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    let mut current: Option<GameQuestion> = None;

    loop {
        tokio::select! {
            event = handle.next_event() => match event {
                Some(SessionEvent::QuestionPresented { index, total, time_limit_seconds, question }) => {
                    println!();
                    println!("Question {} of {} ({}s on the clock)", index + 1, total, time_limit_seconds);
                    println!("{}", question.prompt_text());
                    print_question_detail(&question);
                    if question.is_free_text() {
                        println!("Type your answer:");
                    } else {
                        for (j, option) in question.options().iter().enumerate() {
                            println!("  {}) {}", j + 1, option);
                        }
                        println!("Pick 1-4:");
                    }
                    current = Some(question);
                }
                Some(SessionEvent::TimerTick(tick)) => {
                    if tick.remaining_seconds > 0
                        && (tick.remaining_seconds % 10 == 0 || tick.remaining_seconds <= 5)
                    {
                        println!("  ...{}s", tick.remaining_seconds);
                    }
                }
                Some(SessionEvent::AnswerEvaluated { correct, correct_answer, timed_out, .. }) => {
                    if timed_out {
                        println!("Time's up!");
                    }
                    if correct {
                        println!("Correct!");
                    } else {
                        println!("Wrong. The answer was {correct_answer}.");
                    }
                }
                Some(SessionEvent::CorrectPctReady { pct, .. }) => {
                    println!("{pct}% of players got this question correct.");
                }
                Some(SessionEvent::Finalized(breakdown)) => {
                    println!();
                    println!(
                        "Final score: {}/{} correct.",
                        breakdown.correct_count, breakdown.total_questions
                    );
                    break;
                }
                None => break,
            },
            line = lines.next_line() => match line {
                Ok(Some(text)) => {
                    let answer = resolve_input(current.as_ref(), text.trim());
                    if let Some(answer) = answer {
                        if client.submit_answer(answer).await.is_err() {
                            break;
                        }
                    }
                }
                Ok(None) | Err(_) => {
                    let _ = client.abandon().await;
                    println!("Game abandoned.");
                    break;
                }
            }
        }
    }
}

/// Map terminal input onto an answer: option numbers become option text for
/// multiple choice, anything else is passed through as typed.
fn resolve_input(current: Option<&GameQuestion>, input: &str) -> Option<String> {
    if input.is_empty() {
        return None;
    }
    let question = current?;
    if !question.is_free_text() {
        if let Ok(n) = input.parse::<usize>() {
            if (1..=question.options().len()).contains(&n) {
                return Some(question.options()[n - 1].clone());
            }
        }
    }
    Some(input.to_string())
}

/// Extra prompt lines that don't fit in one sentence.
fn print_question_detail(question: &GameQuestion) {
    if let GameQuestion::Draft(q) = question {
        for (i, pick) in q.shown_picks.iter().enumerate() {
            match pick {
                Some(name) => println!("   {:>2}. {}", i + 1, name),
                None => println!("   {:>2}. ???", i + 1),
            }
        }
    }
}
