use crate::infra::{parse_locale, sample_measurements};
use chrono::Local;
use clap::Args;
use std::path::PathBuf;
use swing_score::error::AppError;
use swing_score::scoring::{
    load_measurements, AggregateResult, Feedback, FeedbackEntry, Locale, ScoreEntityData,
    ScoringService, SwingPhase,
};
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Vendor result to score (`.csv` exports are read as phase,item,value rows)
    pub(crate) file: PathBuf,
    /// Language for coaching remarks (ko or en). Defaults to SWING_DEFAULT_LOCALE.
    #[arg(long, value_parser = parse_locale)]
    pub(crate) locale: Option<Locale>,
    /// Print the flat persistence record as JSON instead of a report
    #[arg(long)]
    pub(crate) entity: bool,
    /// Strengths and weaknesses to list (0 lists every item)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

#[derive(Args, Debug)]
pub(crate) struct CommentsArgs {
    /// Swing phase key, e.g. address, backswingTop or follow-through
    pub(crate) phase: String,
    /// Language for coaching remarks (ko or en)
    #[arg(long, value_parser = parse_locale)]
    pub(crate) locale: Option<Locale>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Language for coaching remarks (ko or en)
    #[arg(long, value_parser = parse_locale)]
    pub(crate) locale: Option<Locale>,
}

pub(crate) fn run_score(service: &ScoringService, args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        file,
        locale,
        entity,
        limit,
    } = args;

    let measurements = load_measurements(&file)?;
    info!(path = %file.display(), measured = measurements.len(), "loaded vendor result");

    if entity {
        let record = service.entity(&measurements);
        println!("{}", serde_json::to_string_pretty(&record)?);
        return Ok(());
    }

    let locale = locale.unwrap_or(service.default_locale());
    let result = service.score(&measurements, Some(locale));
    let feedback = service.feedback(&measurements, Some(locale), limit);
    render_swing_report(&result, &feedback, locale);
    Ok(())
}

pub(crate) fn run_comments(service: &ScoringService, args: CommentsArgs) -> Result<(), AppError> {
    let locale = args.locale.unwrap_or(service.default_locale());
    let comments = service.phase_comments(&args.phase, Some(locale));

    if comments.is_empty() {
        println!("No coaching remarks defined for phase '{}'", args.phase);
        return Ok(());
    }

    let title = SwingPhase::parse(&args.phase)
        .map(SwingPhase::label)
        .unwrap_or(args.phase.as_str());
    println!("{title} remarks ({locale})");
    for (item, remarks) in &comments {
        println!("- {item}");
        for (level, remark) in remarks.iter().enumerate() {
            println!("    {}. {}", level + 1, remark);
        }
    }
    Ok(())
}

pub(crate) fn run_demo(service: &ScoringService, args: DemoArgs) -> Result<(), AppError> {
    let locale = args.locale.unwrap_or(service.default_locale());
    let measurements = sample_measurements();

    println!("Swing scoring demo");
    let result = service.score(&measurements, Some(locale));
    let feedback = service.feedback(&measurements, Some(locale), None);
    render_swing_report(&result, &feedback, locale);

    let record = service.entity(&measurements);
    println!(
        "\nStored record: {} columns, total {}",
        record.columns.len(),
        record.total_score
    );

    // Stored records drop comments; they are re-derived in the requested locale.
    let stored = serde_json::to_string(&record)?;
    let restored: ScoreEntityData = serde_json::from_str(&stored)?;
    let other_locale = match locale {
        Locale::Ko => Locale::En,
        Locale::En => Locale::Ko,
    };
    let relocalized = service.feedback_from_entity(&restored, Some(other_locale), None);

    println!("\nFeedback re-derived from the stored record ({other_locale})");
    render_entries("Strengths", &relocalized.strengths);
    render_entries("Weaknesses", &relocalized.weaknesses);

    Ok(())
}

pub(crate) fn render_swing_report(result: &AggregateResult, feedback: &Feedback, locale: Locale) {
    println!(
        "Swing report ({locale}, generated {})",
        Local::now().format("%Y-%m-%d %H:%M")
    );

    if result.per_item_scores.is_empty() {
        println!("No scoreable measurements found; total score 0");
        return;
    }

    println!(
        "Total score: {} across {} items",
        result.total_score,
        result.per_item_scores.len()
    );

    println!("\nPhase breakdown");
    for summary in phase_summaries(result) {
        println!(
            "- {}: {} avg over {} items",
            summary.phase.label(),
            summary.average,
            summary.items
        );
    }

    render_entries("Strengths", &feedback.strengths);
    render_entries("Weaknesses", &feedback.weaknesses);
}

fn render_entries(title: &str, entries: &[FeedbackEntry]) {
    if entries.is_empty() {
        println!("\n{title}: none");
        return;
    }

    println!("\n{title}");
    for entry in entries {
        println!(
            "- [{}] {} / {}: {} ({})",
            entry.score,
            entry.phase.label(),
            entry.item,
            entry.comment,
            entry.tier.label()
        );
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PhaseSummary {
    pub(crate) phase: SwingPhase,
    pub(crate) average: u8,
    pub(crate) items: usize,
}

/// Rounded mean per phase, in swing order, for phases with at least one scored item.
pub(crate) fn phase_summaries(result: &AggregateResult) -> Vec<PhaseSummary> {
    SwingPhase::ordered()
        .into_iter()
        .filter_map(|phase| {
            let scores: Vec<u32> = result
                .ordered()
                .filter(|(field, _)| field.phase == phase)
                .map(|(_, score)| u32::from(score.score))
                .collect();
            if scores.is_empty() {
                return None;
            }
            let average = (f64::from(scores.iter().sum::<u32>()) / scores.len() as f64).round();
            Some(PhaseSummary {
                phase,
                average: average.clamp(0.0, 100.0) as u8,
                items: scores.len(),
            })
        })
        .collect()
}
