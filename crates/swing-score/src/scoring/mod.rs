//! Swing measurement scoring and localized coaching feedback.
//!
//! Vendor results flow one way through this module: per-item scoring against the
//! item configuration table, aggregation into a total and a flat persistence record,
//! then classification into strengths and weaknesses. Every stage is a pure function
//! over the immutable tables held by [`ScoringEngine`].

mod aggregate;
mod comments;
mod domain;
mod feedback;
mod import;
mod items;
mod measurements;
pub mod router;
mod scorer;
pub mod service;

#[cfg(test)]
mod tests;

pub use aggregate::{scored_field, AggregateResult, ScoreEntityData, ScoredField, SCORED_FIELDS};
pub use comments::{CommentTable, ItemComments, PhaseComments};
pub use domain::{
    InvalidTier, LocalizedText, Locale, ScoreResult, SwingPhase, Tier, UnknownLocale,
};
pub use feedback::{classify, classify_entity, Feedback, FeedbackEntry, DEFAULT_FEEDBACK_LIMIT};
pub use import::{load_measurements, measurements_from_csv, MeasurementImportError};
pub use items::{ItemConfig, ItemConfigError, ItemConfigTable};
pub use measurements::MeasurementSet;
pub use router::scoring_router;
pub use scorer::{evaluate, GOOD_BAND_FLOOR};
pub use service::ScoringService;

/// Stateless scorer over the item configuration and comment tables.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    items: ItemConfigTable,
    comments: CommentTable,
}

impl ScoringEngine {
    pub fn new(items: ItemConfigTable) -> Self {
        Self {
            items,
            comments: CommentTable::standard(),
        }
    }

    pub fn standard() -> Self {
        Self::new(ItemConfigTable::standard())
    }

    pub fn items(&self) -> &ItemConfigTable {
        &self.items
    }

    pub fn comments(&self) -> &CommentTable {
        &self.comments
    }

    /// Scores a single measurement. `None` when the value is missing or not a finite
    /// number, or when the item has no configuration.
    pub fn score_item(
        &self,
        phase: SwingPhase,
        item: &str,
        value: Option<f64>,
        locale: Locale,
    ) -> Option<ScoreResult> {
        scorer::score_item(&self.items, &self.comments, phase, item, value, locale)
    }

    pub fn score_all(&self, measurements: &MeasurementSet, locale: Locale) -> AggregateResult {
        aggregate::score_all(&self.items, &self.comments, measurements, locale)
    }

    pub fn create_score_entity_data(&self, measurements: &MeasurementSet) -> ScoreEntityData {
        self.score_all(measurements, Locale::default()).entity_data()
    }

    pub fn feedback(&self, measurements: &MeasurementSet, locale: Locale) -> Feedback {
        classify(&self.score_all(measurements, locale))
    }

    pub fn feedback_from_entity(&self, record: &ScoreEntityData, locale: Locale) -> Feedback {
        classify_entity(record, &self.comments, locale)
    }
}
