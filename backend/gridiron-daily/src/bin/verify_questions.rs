//! Question verification worker.
//!
//! Walks a range of upcoming dates, builds each day's question set and
//! checks the structural invariants (four questions, expected kind order,
//! option integrity) plus the curated themed-day answers against the fact
//! table. Exits non-zero when any date has issues, so it can run in CI
//! before a content change ships.

use anyhow::{bail, Context};
use chrono::NaiveDate;
use tracing_subscriber::fmt::init;

use gridiron_daily::data::super_bowl::fact_for_roman;
use gridiron_daily::data::validate_datasets;
use gridiron_daily::models::question::{GameQuestion, QuestionKind};
use gridiron_daily::services::daily_questions::QuestionCatalog;
use gridiron_daily::utils::daily_clock::{is_date_key, pacific_date_key};

const DEFAULT_DAYS: u32 = 16;

fn main() -> anyhow::Result<()> {
    init();

    let mut args = std::env::args().skip(1);
    let start = args.next().unwrap_or_else(pacific_date_key);
    if !is_date_key(&start) {
        bail!("start date {start:?} is not a YYYY-MM-DD date key");
    }
    let days: u32 = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("day count {raw:?} is not a number"))?,
        None => DEFAULT_DAYS,
    };

    validate_datasets().context("static datasets failed validation")?;
    let catalog = QuestionCatalog::default();
    let start_date =
        NaiveDate::parse_from_str(&start, "%Y-%m-%d").context("unparseable start date")?;

    println!("Verifying questions for {days} days starting {start}");
    let mut days_with_issues = 0u32;

    for offset in 0..days {
        let date = start_date + chrono::Duration::days(i64::from(offset));
        let date_key = date.format("%Y-%m-%d").to_string();
        let themed = catalog.themed.contains(&date_key);
        let issues = verify_date(&catalog, &date_key, themed);

        let label = if themed { "themed" } else { "regular" };
        if issues.is_empty() {
            println!("  {date_key} [{label}] OK");
        } else {
            days_with_issues += 1;
            println!("  {date_key} [{label}] ISSUES:");
            for issue in &issues {
                println!("    - {issue}");
            }
        }
    }

    println!("Checked {days} dates, {days_with_issues} with issues");
    if days_with_issues > 0 {
        std::process::exit(1);
    }
    Ok(())
}

fn verify_date(catalog: &QuestionCatalog, date_key: &str, themed: bool) -> Vec<String> {
    let set = catalog.daily_questions(date_key);
    let mut issues = Vec::new();

    if let Err(e) = set.validate() {
        issues.push(e.to_string());
    }

    // Determinism spot check: the second derivation must be identical.
    if set != catalog.daily_questions(date_key) {
        issues.push("repeated derivation produced a different set".to_string());
    }

    if themed {
        for question in &set.questions {
            match question {
                GameQuestion::SuperBowl(q) => {
                    if q.correct_answer.is_empty() {
                        issues.push(format!("themed question {} has no answer", q.id));
                    }
                    // Cross-check answers that the fact table can confirm.
                    if q.id == "sb-lii-mvp" {
                        match fact_for_roman("LII") {
                            Some(fact) if fact.mvp == q.correct_answer => {}
                            Some(fact) => issues.push(format!(
                                "sb-lii-mvp answer {:?} disagrees with fact table ({:?})",
                                q.correct_answer, fact.mvp
                            )),
                            None => issues.push("fact table is missing LII".to_string()),
                        }
                    }
                }
                other => issues.push(format!(
                    "themed day produced a {:?} question",
                    other.kind()
                )),
            }
        }
    } else {
        let expected = [
            QuestionKind::Draft,
            QuestionKind::College,
            QuestionKind::CareerPath,
            QuestionKind::SeasonLeader,
        ];
        let actual: Vec<QuestionKind> = set.questions.iter().map(|q| q.kind()).collect();
        if actual != expected {
            issues.push(format!("kind order {actual:?}, expected {expected:?}"));
        }
    }

    issues
}
