use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sequential moments of a golf swing at which the vendor reports measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SwingPhase {
    Address,
    Takeback,
    Backswing,
    BackswingTop,
    Downswing,
    Impact,
    FollowThrough,
    Finish,
}

impl SwingPhase {
    pub const fn ordered() -> [Self; 8] {
        [
            Self::Address,
            Self::Takeback,
            Self::Backswing,
            Self::BackswingTop,
            Self::Downswing,
            Self::Impact,
            Self::FollowThrough,
            Self::Finish,
        ]
    }

    /// Canonical payload key used by the vendor result document.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Takeback => "takeback",
            Self::Backswing => "backswing",
            Self::BackswingTop => "backswingTop",
            Self::Downswing => "downswing",
            Self::Impact => "impact",
            Self::FollowThrough => "followThrough",
            Self::Finish => "finish",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Address => "Address",
            Self::Takeback => "Takeback",
            Self::Backswing => "Backswing",
            Self::BackswingTop => "Top of Backswing",
            Self::Downswing => "Downswing",
            Self::Impact => "Impact",
            Self::FollowThrough => "Follow-Through",
            Self::Finish => "Finish",
        }
    }

    /// Resolves a phase from any of the spellings seen in vendor payloads and URLs
    /// (`backswingTop`, `backswing-top`, `backswing_top`, `BACKSWING TOP`).
    pub fn parse(raw: &str) -> Option<Self> {
        let folded = fold_key(raw);
        Self::ordered()
            .into_iter()
            .find(|phase| fold_key(phase.key()) == folded)
    }
}

impl fmt::Display for SwingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

fn fold_key(raw: &str) -> String {
    raw.trim()
        .chars()
        .filter(|ch| !matches!(ch, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Languages the coaching catalog is written in.
///
/// Deserializes through [`FromStr`], so payloads and query strings accept the same
/// spellings as configuration and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Locale {
    #[default]
    Ko,
    En,
}

impl Locale {
    pub const fn code(self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
        }
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "ko" | "ko-kr" | "kr" => Ok(Self::Ko),
            "en" | "en-us" | "en-gb" => Ok(Self::En),
            _ => Err(UnknownLocale(value.to_string())),
        }
    }
}

impl TryFrom<String> for Locale {
    type Error = UnknownLocale;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}' (expected 'ko' or 'en')")]
pub struct UnknownLocale(pub String);

/// Coaching level for a scored item. Persisted as its numeric "ment" value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Tier {
    /// Within the good band.
    Good,
    /// Needs work; deviation on the item's default side.
    Improve,
    /// Needs work; deviation on the opposite side.
    ImproveOpposite,
}

impl Tier {
    pub const fn level(self) -> u8 {
        match self {
            Self::Good => 1,
            Self::Improve => 2,
            Self::ImproveOpposite => 3,
        }
    }

    pub const fn is_good(self) -> bool {
        matches!(self, Self::Good)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Improve => "Needs Improvement",
            Self::ImproveOpposite => "Needs Improvement (opposite)",
        }
    }
}

impl From<Tier> for u8 {
    fn from(value: Tier) -> Self {
        value.level()
    }
}

impl TryFrom<u8> for Tier {
    type Error = InvalidTier;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Good),
            2 => Ok(Self::Improve),
            3 => Ok(Self::ImproveOpposite),
            other => Err(InvalidTier(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("tier must be 1, 2 or 3 (got {0})")]
pub struct InvalidTier(pub u8);

/// A coaching remark in every supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalizedText {
    pub ko: &'static str,
    pub en: &'static str,
}

impl LocalizedText {
    pub const fn new(ko: &'static str, en: &'static str) -> Self {
        Self { ko, en }
    }

    pub const fn text(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::Ko => self.ko,
            Locale::En => self.en,
        }
    }
}

/// Outcome of scoring one measured item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub score: u8,
    pub tier: Tier,
    pub comment: &'static str,
}
