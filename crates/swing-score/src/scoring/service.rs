use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info};

use super::aggregate::{AggregateResult, ScoreEntityData};
use super::domain::{Locale, Tier};
use super::feedback::{Feedback, DEFAULT_FEEDBACK_LIMIT};
use super::items::{ItemConfigError, ItemConfigTable};
use super::measurements::MeasurementSet;
use super::ScoringEngine;
use crate::config::ScoringConfig;

/// Request-facing wrapper that applies locale and presentation defaults around the
/// engine.
#[derive(Debug, Clone)]
pub struct ScoringService {
    engine: Arc<ScoringEngine>,
    default_locale: Locale,
    feedback_limit: usize,
}

impl ScoringService {
    pub fn new(engine: ScoringEngine) -> Self {
        Self {
            engine: Arc::new(engine),
            default_locale: Locale::default(),
            feedback_limit: DEFAULT_FEEDBACK_LIMIT,
        }
    }

    /// Builds the service from configuration, loading the item table override once.
    pub fn from_config(config: &ScoringConfig) -> Result<Self, ItemConfigError> {
        let items = match &config.item_config_path {
            Some(path) => {
                let table = ItemConfigTable::from_json_path(path)?;
                info!(path = %path.display(), items = table.len(), "loaded item configuration");
                table
            }
            None => ItemConfigTable::standard(),
        };

        Ok(Self::new(ScoringEngine::new(items))
            .with_default_locale(config.default_locale)
            .with_feedback_limit(config.feedback_limit))
    }

    pub fn with_default_locale(mut self, locale: Locale) -> Self {
        self.default_locale = locale;
        self
    }

    pub fn with_feedback_limit(mut self, limit: usize) -> Self {
        self.feedback_limit = limit;
        self
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    pub fn default_locale(&self) -> Locale {
        self.default_locale
    }

    pub fn feedback_limit(&self) -> usize {
        self.feedback_limit
    }

    fn locale(&self, requested: Option<Locale>) -> Locale {
        requested.unwrap_or(self.default_locale)
    }

    /// `None` applies the configured limit; `Some(0)` returns the full lists.
    fn present(&self, feedback: Feedback, limit: Option<usize>) -> Feedback {
        match limit.unwrap_or(self.feedback_limit) {
            0 => feedback,
            limit => feedback.truncated(limit),
        }
    }

    pub fn score(&self, measurements: &MeasurementSet, locale: Option<Locale>) -> AggregateResult {
        let locale = self.locale(locale);
        let result = self.engine.score_all(measurements, locale);
        debug!(
            %locale,
            measured = measurements.len(),
            scored = result.per_item_scores.len(),
            total_score = result.total_score,
            "scored vendor result"
        );
        result
    }

    pub fn entity(&self, measurements: &MeasurementSet) -> ScoreEntityData {
        self.engine.create_score_entity_data(measurements)
    }

    pub fn feedback(
        &self,
        measurements: &MeasurementSet,
        locale: Option<Locale>,
        limit: Option<usize>,
    ) -> Feedback {
        let feedback = self.engine.feedback(measurements, self.locale(locale));
        self.present(feedback, limit)
    }

    pub fn feedback_from_entity(
        &self,
        record: &ScoreEntityData,
        locale: Option<Locale>,
        limit: Option<usize>,
    ) -> Feedback {
        let feedback = self
            .engine
            .feedback_from_entity(record, self.locale(locale));
        self.present(feedback, limit)
    }

    pub fn comment(
        &self,
        phase: &str,
        item: &str,
        tier: Tier,
        locale: Option<Locale>,
    ) -> &'static str {
        self.engine
            .comments()
            .comment_for_key(phase, item, tier, self.locale(locale))
    }

    pub fn phase_comments(
        &self,
        phase: &str,
        locale: Option<Locale>,
    ) -> BTreeMap<&'static str, Vec<&'static str>> {
        self.engine
            .comments()
            .phase_comments_for_key(phase, self.locale(locale))
    }
}
