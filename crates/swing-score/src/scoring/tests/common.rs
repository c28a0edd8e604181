use axum::response::Response;
use serde_json::{json, Value};

use crate::scoring::{
    ItemConfig, ItemConfigTable, MeasurementSet, ScoringEngine, ScoringService, SwingPhase,
};

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::standard()
}

pub(super) fn service() -> ScoringService {
    ScoringService::new(engine())
}

/// Engine whose only scoreable item is `address/shoulderTilt` on a 0/5/20 band.
pub(super) fn band_engine(config: ItemConfig) -> ScoringEngine {
    let table = ItemConfigTable::from_entries([(SwingPhase::Address, "shoulderTilt", config)])
        .expect("valid band");
    ScoringEngine::new(table)
}

pub(super) fn reference_band() -> ItemConfig {
    ItemConfig::new(0.0, 5.0, 20.0)
}

/// Vendor result covering every scored item except `impact/shaftLean`.
///
/// Expected scores: six weaknesses (addressSpineAngle 60/2, takebackArmExtension 54/2,
/// backswingTopShoulderRotation 50/3, backswingTopXFactor 34/3, downswingLagAngle 38/3,
/// finishBalance 35/2), nineteen strengths, total 84.
pub(super) fn full_swing_payload() -> Value {
    json!({
        "analysisId": "remo-7f3a",
        "address": {
            "shoulderTilt": 8.0,
            "spineAngle": 43.0,
            "kneeFlex": 22.0,
            "stanceWidth": 1.1
        },
        "takeback": {
            "shoulderRotation": 40.0,
            "hipRotation": 15.0,
            "armExtension": 160.0
        },
        "backswing": {
            "shoulderRotation": 70.0,
            "hipRotation": 40.0,
            "leftArmAngle": 170.0
        },
        "backswingTop": {
            "shoulderRotation": 70.0,
            "hipRotation": 45.0,
            "xFactor": 25.0,
            "wristCock": 90.0
        },
        "downswing": {
            "hipRotation": 30.0,
            "shoulderRotation": 10.0,
            "lagAngle": 115.0
        },
        "impact": {
            "hipOpen": 40.0,
            "shoulderOpen": 15.0,
            "shaftLean": null
        },
        "followThrough": {
            "armExtension": 170.0,
            "shoulderRotation": 100.0,
            "spineAngle": 25.0
        },
        "finish": {
            "hipRotation": 90.0,
            "balance": 0.6,
            "spineTilt": 15.0
        }
    })
}

pub(super) fn full_swing() -> MeasurementSet {
    MeasurementSet::from_value(&full_swing_payload())
}

pub(super) fn empty_swing_payload() -> Value {
    let mut document = serde_json::Map::new();
    for field in crate::scoring::SCORED_FIELDS {
        let phase = document
            .entry(field.phase.key())
            .or_insert_with(|| json!({}));
        if let Some(items) = phase.as_object_mut() {
            items.insert(field.item.to_string(), Value::Null);
        }
    }
    Value::Object(document)
}

pub(super) const WEAK_FIELDS: [&str; 6] = [
    "addressSpineAngle",
    "takebackArmExtension",
    "backswingTopShoulderRotation",
    "backswingTopXFactor",
    "downswingLagAngle",
    "finishBalance",
];

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
