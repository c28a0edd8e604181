use super::domain::SwingPhase;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Tuning parameters describing the ideal value and tolerance bands for one item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemConfig {
    pub optimal: f64,
    pub tolerance: f64,
    pub max_deviation: f64,
    #[serde(default)]
    pub invert_sign: bool,
    #[serde(default)]
    pub has_third_level: bool,
}

impl ItemConfig {
    pub const fn new(optimal: f64, tolerance: f64, max_deviation: f64) -> Self {
        Self {
            optimal,
            tolerance,
            max_deviation,
            invert_sign: false,
            has_third_level: false,
        }
    }

    pub const fn inverted(mut self) -> Self {
        self.invert_sign = true;
        self
    }

    pub const fn with_third_level(mut self) -> Self {
        self.has_third_level = true;
        self
    }

    fn validate(&self, phase: SwingPhase, item: &str) -> Result<(), ItemConfigError> {
        let finite = [self.optimal, self.tolerance, self.max_deviation]
            .iter()
            .all(|value| value.is_finite());
        if !finite {
            return Err(ItemConfigError::NonFinite {
                phase,
                item: item.to_string(),
            });
        }

        if self.tolerance <= 0.0 || self.max_deviation <= self.tolerance {
            return Err(ItemConfigError::InvalidBand {
                phase,
                item: item.to_string(),
                tolerance: self.tolerance,
                max_deviation: self.max_deviation,
            });
        }

        Ok(())
    }
}

/// Immutable lookup of item tuning parameters keyed by (phase, item).
#[derive(Debug, Clone, PartialEq)]
pub struct ItemConfigTable {
    entries: HashMap<SwingPhase, BTreeMap<String, ItemConfig>>,
}

impl Default for ItemConfigTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl ItemConfigTable {
    pub fn standard() -> Self {
        let mut entries: HashMap<SwingPhase, BTreeMap<String, ItemConfig>> = HashMap::new();
        for (phase, item, config) in STANDARD_ITEMS {
            entries
                .entry(*phase)
                .or_default()
                .insert((*item).to_string(), *config);
        }
        Self { entries }
    }

    /// Builds a table from explicit entries, rejecting any band that violates
    /// `0 < tolerance < max_deviation`.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, ItemConfigError>
    where
        I: IntoIterator<Item = (SwingPhase, S, ItemConfig)>,
        S: Into<String>,
    {
        let mut table: HashMap<SwingPhase, BTreeMap<String, ItemConfig>> = HashMap::new();
        for (phase, item, config) in entries {
            let item = item.into();
            config.validate(phase, &item)?;
            table.entry(phase).or_default().insert(item, config);
        }
        Ok(Self { entries: table })
    }

    /// Parses a `phase -> item -> config` JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self, ItemConfigError> {
        let document: BTreeMap<String, BTreeMap<String, ItemConfig>> =
            serde_json::from_str(raw)?;

        let mut entries = Vec::new();
        for (phase_key, items) in document {
            let phase = SwingPhase::parse(&phase_key)
                .ok_or_else(|| ItemConfigError::UnknownPhase(phase_key.clone()))?;
            entries.extend(items.into_iter().map(|(item, config)| (phase, item, config)));
        }

        Self::from_entries(entries)
    }

    pub fn from_json_path(path: impl AsRef<Path>) -> Result<Self, ItemConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ItemConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn get(&self, phase: SwingPhase, item: &str) -> Option<&ItemConfig> {
        self.entries.get(&phase).and_then(|items| items.get(item))
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn items_for_phase(
        &self,
        phase: SwingPhase,
    ) -> impl Iterator<Item = (&str, &ItemConfig)> + '_ {
        self.entries
            .get(&phase)
            .into_iter()
            .flat_map(|items| items.iter().map(|(item, config)| (item.as_str(), config)))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ItemConfigError {
    #[error("unknown swing phase '{0}' in item configuration")]
    UnknownPhase(String),
    #[error("{phase}/{item}: tolerance {tolerance} and max deviation {max_deviation} must satisfy 0 < tolerance < max deviation")]
    InvalidBand {
        phase: SwingPhase,
        item: String,
        tolerance: f64,
        max_deviation: f64,
    },
    #[error("{phase}/{item}: configuration values must be finite")]
    NonFinite { phase: SwingPhase, item: String },
    #[error("failed to read item configuration {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed item configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

// Angles in degrees unless noted; stanceWidth is stance over shoulder width and
// balance is the lead-side share of body weight.
const STANDARD_ITEMS: &[(SwingPhase, &str, ItemConfig)] = &[
    (SwingPhase::Address, "shoulderTilt", ItemConfig::new(8.0, 4.0, 15.0)),
    (
        SwingPhase::Address,
        "spineAngle",
        ItemConfig::new(35.0, 5.0, 20.0).with_third_level(),
    ),
    (
        SwingPhase::Address,
        "kneeFlex",
        ItemConfig::new(25.0, 5.0, 20.0).with_third_level(),
    ),
    (SwingPhase::Address, "stanceWidth", ItemConfig::new(1.1, 0.15, 0.6)),
    (SwingPhase::Takeback, "shoulderRotation", ItemConfig::new(45.0, 10.0, 35.0)),
    (SwingPhase::Takeback, "hipRotation", ItemConfig::new(15.0, 7.0, 25.0)),
    (SwingPhase::Takeback, "armExtension", ItemConfig::new(175.0, 7.0, 35.0)),
    (SwingPhase::Backswing, "shoulderRotation", ItemConfig::new(75.0, 10.0, 40.0)),
    (SwingPhase::Backswing, "hipRotation", ItemConfig::new(35.0, 8.0, 30.0)),
    (SwingPhase::Backswing, "leftArmAngle", ItemConfig::new(172.0, 8.0, 35.0)),
    (
        SwingPhase::BackswingTop,
        "shoulderRotation",
        ItemConfig::new(90.0, 10.0, 40.0).with_third_level(),
    ),
    (SwingPhase::BackswingTop, "hipRotation", ItemConfig::new(45.0, 8.0, 30.0)),
    (
        SwingPhase::BackswingTop,
        "xFactor",
        ItemConfig::new(45.0, 8.0, 30.0).with_third_level(),
    ),
    (SwingPhase::BackswingTop, "wristCock", ItemConfig::new(90.0, 12.0, 45.0)),
    (SwingPhase::Downswing, "hipRotation", ItemConfig::new(30.0, 10.0, 35.0)),
    (SwingPhase::Downswing, "shoulderRotation", ItemConfig::new(10.0, 10.0, 35.0)),
    (
        SwingPhase::Downswing,
        "lagAngle",
        ItemConfig::new(90.0, 10.0, 40.0)
            .inverted()
            .with_third_level(),
    ),
    (
        SwingPhase::Impact,
        "hipOpen",
        ItemConfig::new(40.0, 8.0, 30.0).with_third_level(),
    ),
    (SwingPhase::Impact, "shoulderOpen", ItemConfig::new(15.0, 7.0, 25.0)),
    (
        SwingPhase::Impact,
        "shaftLean",
        ItemConfig::new(8.0, 4.0, 15.0).with_third_level(),
    ),
    (SwingPhase::FollowThrough, "armExtension", ItemConfig::new(170.0, 8.0, 35.0)),
    (SwingPhase::FollowThrough, "shoulderRotation", ItemConfig::new(100.0, 12.0, 45.0)),
    (SwingPhase::FollowThrough, "spineAngle", ItemConfig::new(25.0, 8.0, 30.0)),
    (SwingPhase::Finish, "hipRotation", ItemConfig::new(90.0, 10.0, 40.0)),
    (
        SwingPhase::Finish,
        "balance",
        ItemConfig::new(0.85, 0.08, 0.4)
            .inverted()
            .with_third_level(),
    ),
    (SwingPhase::Finish, "spineTilt", ItemConfig::new(15.0, 7.0, 25.0)),
];
