use super::comments::CommentTable;
use super::domain::{Locale, ScoreResult, SwingPhase, Tier};
use super::items::ItemConfigTable;
use super::measurements::{numeric, MeasurementSet};
use super::scorer::score_item;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// One scored output field and the persistence columns derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredField {
    pub phase: SwingPhase,
    pub item: &'static str,
    pub field: &'static str,
    pub score_column: &'static str,
    pub ment_column: &'static str,
}

macro_rules! scored_field {
    ($phase:ident, $item:literal, $field:literal) => {
        ScoredField {
            phase: SwingPhase::$phase,
            item: $item,
            field: $field,
            score_column: concat!($field, "Score"),
            ment_column: concat!($field, "Ment"),
        }
    };
}

/// Every item that contributes to an aggregate, in swing order.
pub const SCORED_FIELDS: &[ScoredField] = &[
    scored_field!(Address, "shoulderTilt", "addressShoulderTilt"),
    scored_field!(Address, "spineAngle", "addressSpineAngle"),
    scored_field!(Address, "kneeFlex", "addressKneeFlex"),
    scored_field!(Address, "stanceWidth", "addressStanceWidth"),
    scored_field!(Takeback, "shoulderRotation", "takebackShoulderRotation"),
    scored_field!(Takeback, "hipRotation", "takebackHipRotation"),
    scored_field!(Takeback, "armExtension", "takebackArmExtension"),
    scored_field!(Backswing, "shoulderRotation", "backswingShoulderRotation"),
    scored_field!(Backswing, "hipRotation", "backswingHipRotation"),
    scored_field!(Backswing, "leftArmAngle", "backswingLeftArmAngle"),
    scored_field!(BackswingTop, "shoulderRotation", "backswingTopShoulderRotation"),
    scored_field!(BackswingTop, "hipRotation", "backswingTopHipRotation"),
    scored_field!(BackswingTop, "xFactor", "backswingTopXFactor"),
    scored_field!(BackswingTop, "wristCock", "backswingTopWristCock"),
    scored_field!(Downswing, "hipRotation", "downswingHipRotation"),
    scored_field!(Downswing, "shoulderRotation", "downswingShoulderRotation"),
    scored_field!(Downswing, "lagAngle", "downswingLagAngle"),
    scored_field!(Impact, "hipOpen", "impactHipOpen"),
    scored_field!(Impact, "shoulderOpen", "impactShoulderOpen"),
    scored_field!(Impact, "shaftLean", "impactShaftLean"),
    scored_field!(FollowThrough, "armExtension", "followThroughArmExtension"),
    scored_field!(FollowThrough, "shoulderRotation", "followThroughShoulderRotation"),
    scored_field!(FollowThrough, "spineAngle", "followThroughSpineAngle"),
    scored_field!(Finish, "hipRotation", "finishHipRotation"),
    scored_field!(Finish, "balance", "finishBalance"),
    scored_field!(Finish, "spineTilt", "finishSpineTilt"),
];

pub fn scored_field(field: &str) -> Option<&'static ScoredField> {
    SCORED_FIELDS.iter().find(|entry| entry.field == field)
}

/// Per-item results and the rounded mean for one vendor result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateResult {
    pub per_item_scores: BTreeMap<&'static str, ScoreResult>,
    pub total_score: u8,
}

impl AggregateResult {
    pub fn get(&self, field: &str) -> Option<&ScoreResult> {
        self.per_item_scores.get(field)
    }

    /// Results in swing order alongside their field definitions.
    pub fn ordered(&self) -> impl Iterator<Item = (&'static ScoredField, &ScoreResult)> + '_ {
        SCORED_FIELDS.iter().filter_map(|field| {
            self.per_item_scores
                .get(field.field)
                .map(|result| (field, result))
        })
    }

    /// Flat persistence record; comments are dropped and re-derived on read.
    pub fn entity_data(&self) -> ScoreEntityData {
        let mut columns = BTreeMap::new();
        for (field, result) in self.ordered() {
            columns.insert(field.score_column.to_string(), result.score);
            columns.insert(field.ment_column.to_string(), result.tier.level());
        }

        ScoreEntityData {
            total_score: self.total_score,
            columns,
        }
    }
}

pub(crate) fn score_all(
    items: &ItemConfigTable,
    comments: &CommentTable,
    measurements: &MeasurementSet,
    locale: Locale,
) -> AggregateResult {
    let mut per_item_scores = BTreeMap::new();

    for field in SCORED_FIELDS {
        let value = measurements.value(field.phase, field.item);
        if let Some(result) = score_item(items, comments, field.phase, field.item, value, locale) {
            per_item_scores.insert(field.field, result);
        }
    }

    let total_score = mean_score(per_item_scores.values().map(|result| result.score));
    debug!(
        scored = per_item_scores.len(),
        total_score, "aggregated swing measurements"
    );

    AggregateResult {
        per_item_scores,
        total_score,
    }
}

fn mean_score(scores: impl Iterator<Item = u8>) -> u8 {
    let (sum, count) = scores.fold((0u32, 0u32), |(sum, count), score| {
        (sum + u32::from(score), count + 1)
    });

    if count == 0 {
        return 0;
    }

    (f64::from(sum) / f64::from(count)).round().clamp(0.0, 100.0) as u8
}

/// Flat `<field>Score` / `<field>Ment` record plus `totalScore`, as stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreEntityData {
    #[serde(rename = "totalScore")]
    pub total_score: u8,
    #[serde(flatten)]
    pub columns: BTreeMap<String, u8>,
}

impl ScoreEntityData {
    pub fn score(&self, field: &ScoredField) -> Option<u8> {
        self.columns.get(field.score_column).copied()
    }

    pub fn ment(&self, field: &ScoredField) -> Option<Tier> {
        self.columns
            .get(field.ment_column)
            .and_then(|level| Tier::try_from(*level).ok())
    }

    /// Reads a stored record. Unknown columns, nulls and out-of-range numbers are
    /// dropped rather than rejected.
    pub fn from_value(record: &Value) -> Self {
        let Some(members) = record.as_object() else {
            return Self::default();
        };

        let total_score = members
            .get("totalScore")
            .and_then(score_value)
            .unwrap_or(0);

        let mut columns = BTreeMap::new();
        for field in SCORED_FIELDS {
            for column in [field.score_column, field.ment_column] {
                if let Some(value) = members.get(column).and_then(score_value) {
                    columns.insert(column.to_string(), value);
                }
            }
        }

        Self {
            total_score,
            columns,
        }
    }
}

impl<'de> Deserialize<'de> for ScoreEntityData {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = Value::deserialize(deserializer)?;
        if !record.is_object() {
            return Err(serde::de::Error::custom("score record must be a JSON object"));
        }
        Ok(Self::from_value(&record))
    }
}

fn score_value(raw: &Value) -> Option<u8> {
    numeric(raw)
        .filter(|value| (0.0..=100.0).contains(value))
        .map(|value| value.round() as u8)
}
