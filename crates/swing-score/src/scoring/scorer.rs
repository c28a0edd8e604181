use super::comments::CommentTable;
use super::domain::{Locale, ScoreResult, SwingPhase, Tier};
use super::items::{ItemConfig, ItemConfigTable};
use tracing::trace;

/// Score at the edge of the good band; only scores strictly above it are tier 1.
pub const GOOD_BAND_FLOOR: f64 = 75.0;

/// Signed deviation from the ideal value after the item's sign convention.
pub(crate) fn signed_deviation(config: &ItemConfig, value: f64) -> f64 {
    let deviation = value - config.optimal;
    if config.invert_sign {
        -deviation
    } else {
        deviation
    }
}

/// Piecewise-linear score in `[0, 100]` for an absolute deviation.
///
/// Inside the tolerance band the score falls from 100 to 75; between the tolerance
/// and the maximum deviation it falls from 75 to 0; past that it stays at 0.
pub(crate) fn deviation_score(config: &ItemConfig, abs_deviation: f64) -> u8 {
    let raw = if abs_deviation <= config.tolerance {
        100.0 - (abs_deviation / config.tolerance) * (100.0 - GOOD_BAND_FLOOR)
    } else if abs_deviation <= config.max_deviation {
        let span = config.max_deviation - config.tolerance;
        GOOD_BAND_FLOOR - ((abs_deviation - config.tolerance) / span) * GOOD_BAND_FLOOR
    } else {
        0.0
    };

    raw.round().clamp(0.0, 100.0) as u8
}

pub(crate) fn resolve_tier(config: &ItemConfig, score: u8, deviation: f64) -> Tier {
    if f64::from(score) > GOOD_BAND_FLOOR {
        Tier::Good
    } else if config.has_third_level && deviation < 0.0 {
        Tier::ImproveOpposite
    } else {
        Tier::Improve
    }
}

/// Scores one measurement against its configuration, returning `(score, tier)`.
pub fn evaluate(config: &ItemConfig, value: f64) -> (u8, Tier) {
    let deviation = signed_deviation(config, value);
    let score = deviation_score(config, deviation.abs());
    (score, resolve_tier(config, score, deviation))
}

pub(crate) fn score_item(
    items: &ItemConfigTable,
    comments: &CommentTable,
    phase: SwingPhase,
    item: &str,
    value: Option<f64>,
    locale: Locale,
) -> Option<ScoreResult> {
    let Some(value) = value.filter(|value| value.is_finite()) else {
        trace!(%phase, item, "no usable measurement");
        return None;
    };

    let Some(config) = items.get(phase, item) else {
        trace!(%phase, item, "item is not configured for scoring");
        return None;
    };

    let (score, tier) = evaluate(config, value);
    let comment = comments.comment(phase, item, tier, locale);

    Some(ScoreResult {
        score,
        tier,
        comment,
    })
}
