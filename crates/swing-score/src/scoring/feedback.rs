use super::aggregate::{AggregateResult, ScoreEntityData, SCORED_FIELDS};
use super::comments::CommentTable;
use super::domain::{Locale, SwingPhase, Tier};
use serde::Serialize;

/// Presentation default for how many strengths and weaknesses a screen shows.
pub const DEFAULT_FEEDBACK_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    pub field: &'static str,
    pub phase: SwingPhase,
    pub item: &'static str,
    pub score: u8,
    pub tier: Tier,
    pub comment: &'static str,
}

/// Scored items split into strengths (tier 1) and weaknesses (tier 2 or 3), each in
/// swing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Feedback {
    pub strengths: Vec<FeedbackEntry>,
    pub weaknesses: Vec<FeedbackEntry>,
}

impl Feedback {
    fn push(&mut self, entry: FeedbackEntry) {
        if entry.tier.is_good() {
            self.strengths.push(entry);
        } else {
            self.weaknesses.push(entry);
        }
    }

    /// Keeps at most `limit` entries in each list.
    pub fn truncated(mut self, limit: usize) -> Self {
        self.strengths.truncate(limit);
        self.weaknesses.truncate(limit);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty() && self.weaknesses.is_empty()
    }
}

/// Partitions freshly computed results.
pub fn classify(result: &AggregateResult) -> Feedback {
    let mut feedback = Feedback::default();
    for (field, score) in result.ordered() {
        feedback.push(FeedbackEntry {
            field: field.field,
            phase: field.phase,
            item: field.item,
            score: score.score,
            tier: score.tier,
            comment: score.comment,
        });
    }
    feedback
}

/// Partitions a stored record, re-deriving each comment from its tier and `locale`.
/// Items missing either column, or carrying an unknown tier, are left out.
pub fn classify_entity(
    record: &ScoreEntityData,
    comments: &CommentTable,
    locale: Locale,
) -> Feedback {
    let mut feedback = Feedback::default();
    for field in SCORED_FIELDS {
        let (Some(score), Some(tier)) = (record.score(field), record.ment(field)) else {
            continue;
        };

        feedback.push(FeedbackEntry {
            field: field.field,
            phase: field.phase,
            item: field.item,
            score,
            tier,
            comment: comments.comment(field.phase, field.item, tier, locale),
        });
    }
    feedback
}
