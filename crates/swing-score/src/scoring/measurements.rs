use super::domain::SwingPhase;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::trace;

/// Raw vendor measurements as `phase -> item -> value`.
///
/// Phase keys are folded onto their canonical spelling on the way in; every stored
/// value is either a finite number or missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MeasurementSet {
    phases: BTreeMap<String, BTreeMap<String, Option<f64>>>,
}

impl MeasurementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a vendor result document verbatim. Members that are not objects are
    /// ignored, as are values that are not numbers or numeric strings.
    pub fn from_value(document: &Value) -> Self {
        let mut set = Self::new();
        let Some(members) = document.as_object() else {
            return set;
        };

        for (phase_key, items) in members {
            let Some(items) = items.as_object() else {
                trace!(key = %phase_key, "ignoring non-phase member of vendor result");
                continue;
            };

            for (item, raw) in items {
                set.insert(phase_key, item.clone(), numeric(raw));
            }
        }

        set
    }

    pub fn insert(&mut self, phase: &str, item: impl Into<String>, value: Option<f64>) {
        let phase_key = canonical_phase_key(phase);
        let value = value.filter(|value| value.is_finite());
        self.phases
            .entry(phase_key)
            .or_default()
            .insert(item.into(), value);
    }

    pub fn with(mut self, phase: SwingPhase, item: &str, value: f64) -> Self {
        self.insert(phase.key(), item, Some(value));
        self
    }

    pub fn value(&self, phase: SwingPhase, item: &str) -> Option<f64> {
        self.phases
            .get(phase.key())
            .and_then(|items| items.get(item))
            .copied()
            .flatten()
    }

    /// Number of items carrying a usable value.
    pub fn len(&self) -> usize {
        self.phases
            .values()
            .flat_map(BTreeMap::values)
            .filter(|value| value.is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'de> Deserialize<'de> for MeasurementSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let document = Value::deserialize(deserializer)?;
        if !document.is_object() {
            return Err(serde::de::Error::custom(
                "vendor result must be a JSON object keyed by swing phase",
            ));
        }
        Ok(Self::from_value(&document))
    }
}

fn canonical_phase_key(raw: &str) -> String {
    SwingPhase::parse(raw)
        .map(|phase| phase.key().to_string())
        .unwrap_or_else(|| raw.trim().to_string())
}

pub(crate) fn numeric(raw: &Value) -> Option<f64> {
    let parsed = match raw {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        Value::Null => return None,
        _ => None,
    };

    match parsed {
        Some(value) if value.is_finite() => Some(value),
        _ => {
            trace!(value = %raw, "discarding non-numeric measurement");
            None
        }
    }
}
