use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use swing_score::scoring::{Locale, MeasurementSet, SwingPhase};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_locale(raw: &str) -> Result<Locale, String> {
    raw.parse::<Locale>().map_err(|err| err.to_string())
}

/// A mid-handicap swing: solid setup, short backswing turn and an early release.
pub(crate) fn sample_measurements() -> MeasurementSet {
    use SwingPhase::*;

    MeasurementSet::new()
        .with(Address, "shoulderTilt", 9.0)
        .with(Address, "spineAngle", 33.0)
        .with(Address, "kneeFlex", 27.0)
        .with(Address, "stanceWidth", 1.2)
        .with(Takeback, "shoulderRotation", 42.0)
        .with(Takeback, "hipRotation", 18.0)
        .with(Takeback, "armExtension", 172.0)
        .with(Backswing, "shoulderRotation", 62.0)
        .with(Backswing, "hipRotation", 38.0)
        .with(Backswing, "leftArmAngle", 158.0)
        .with(BackswingTop, "shoulderRotation", 76.0)
        .with(BackswingTop, "hipRotation", 47.0)
        .with(BackswingTop, "xFactor", 29.0)
        .with(BackswingTop, "wristCock", 84.0)
        .with(Downswing, "hipRotation", 34.0)
        .with(Downswing, "shoulderRotation", 14.0)
        .with(Downswing, "lagAngle", 108.0)
        .with(Impact, "hipOpen", 31.0)
        .with(Impact, "shoulderOpen", 18.0)
        .with(Impact, "shaftLean", 2.0)
        .with(FollowThrough, "armExtension", 166.0)
        .with(FollowThrough, "shoulderRotation", 96.0)
        .with(FollowThrough, "spineAngle", 28.0)
        .with(Finish, "hipRotation", 84.0)
        .with(Finish, "balance", 0.81)
        .with(Finish, "spineTilt", 19.0)
}
