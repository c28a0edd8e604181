use std::path::PathBuf;

use swing_score::config::ScoringConfig;
use swing_score::scoring::{
    load_measurements, measurements_from_csv, ItemConfigError, ItemConfigTable, Locale,
    MeasurementSet, ScoreEntityData, ScoringEngine, ScoringService, SwingPhase, Tier,
};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

#[test]
fn csv_and_json_exports_score_identically() {
    let data = include_bytes!("../fixtures/swing_export.csv");
    let from_csv = measurements_from_csv(&data[..]).expect("csv export imports");
    let from_json = load_measurements(fixture("swing_result.json")).expect("json result loads");

    assert_eq!(from_csv, from_json);
    assert_eq!(from_csv.len(), 25);

    let engine = ScoringEngine::standard();
    assert_eq!(
        engine.score_all(&from_csv, Locale::En),
        engine.score_all(&from_json, Locale::En)
    );
}

#[test]
fn stored_record_round_trips_into_the_same_feedback() {
    let measurements = load_measurements(fixture("swing_export.csv")).expect("csv loads");
    let engine = ScoringEngine::standard();

    let result = engine.score_all(&measurements, Locale::Ko);
    assert_eq!(result.total_score, 84);

    let stored = serde_json::to_string(&engine.create_score_entity_data(&measurements))
        .expect("serialize record");
    let record: ScoreEntityData = serde_json::from_str(&stored).expect("record reads back");
    assert_eq!(record.total_score, result.total_score);

    let fresh = engine.feedback(&measurements, Locale::Ko);
    let restored = engine.feedback_from_entity(&record, Locale::Ko);
    assert_eq!(fresh, restored);

    let opposite: Vec<_> = restored
        .weaknesses
        .iter()
        .filter(|entry| entry.tier == Tier::ImproveOpposite)
        .map(|entry| entry.field)
        .collect();
    assert_eq!(
        opposite,
        [
            "backswingTopShoulderRotation",
            "backswingTopXFactor",
            "downswingLagAngle"
        ]
    );
}

#[test]
fn missing_measurement_file_is_reported() {
    match load_measurements(fixture("no_such_swing.json")) {
        Err(err) => assert!(err.to_string().contains("no_such_swing.json")),
        Ok(set) => panic!("expected io error, got {set:?}"),
    }
}

#[test]
fn item_config_override_replaces_standard_table() {
    let path = std::env::temp_dir().join(format!(
        "swing-items-{}-override.json",
        std::process::id()
    ));
    std::fs::write(
        &path,
        r#"{
            "address": {
                "shoulderTilt": { "optimal": 10.0, "tolerance": 2.0, "maxDeviation": 12.0 }
            }
        }"#,
    )
    .expect("write override");

    let config = ScoringConfig {
        default_locale: Locale::En,
        item_config_path: Some(path.clone()),
        feedback_limit: 2,
    };
    let service = ScoringService::from_config(&config).expect("override loads");
    std::fs::remove_file(&path).ok();

    assert_eq!(service.engine().items().len(), 1);
    assert_eq!(service.default_locale(), Locale::En);
    assert_eq!(service.feedback_limit(), 2);

    let measurements = MeasurementSet::new()
        .with(SwingPhase::Address, "shoulderTilt", 8.0)
        .with(SwingPhase::Address, "spineAngle", 35.0);
    let result = service.score(&measurements, None);

    assert_eq!(result.per_item_scores.len(), 1);
    let tilt = result.get("addressShoulderTilt").expect("tilt scored");
    assert_eq!((tilt.score, tilt.tier), (75, Tier::Improve));
    assert_eq!(result.total_score, 75);
}

#[test]
fn malformed_override_is_rejected() {
    let err = ItemConfigTable::from_json_str(
        r#"{ "impact": { "hipOpen": { "optimal": 40.0, "tolerance": 30.0, "maxDeviation": 8.0 } } }"#,
    )
    .expect_err("inverted band rejected");

    match err {
        ItemConfigError::InvalidBand { phase, item, .. } => {
            assert_eq!(phase, SwingPhase::Impact);
            assert_eq!(item, "hipOpen");
        }
        other => panic!("expected invalid band, got {other:?}"),
    }
}
