use super::common::*;
use crate::config::ScoringConfig;
use crate::scoring::{ItemConfigError, Locale, ScoringService, Tier};
use std::path::PathBuf;

#[test]
fn service_applies_configured_feedback_limit() {
    let service = service().with_feedback_limit(3);
    let measurements = full_swing();

    let limited = service.feedback(&measurements, Some(Locale::En), None);
    assert_eq!(limited.weaknesses.len(), 3);
    assert_eq!(limited.strengths.len(), 3);

    let explicit = service.feedback(&measurements, Some(Locale::En), Some(1));
    assert_eq!(explicit.weaknesses.len(), 1);

    let full = service.feedback(&measurements, Some(Locale::En), Some(0));
    assert_eq!(full.weaknesses.len(), WEAK_FIELDS.len());
    assert_eq!(full.strengths.len(), 19);
}

#[test]
fn service_falls_back_to_default_locale() {
    let korean = service();
    let english = service().with_default_locale(Locale::En);

    assert_eq!(
        english.comment("impact", "shaftLean", Tier::ImproveOpposite, None),
        "Shaft leans back at impact (flipping); get the hands ahead of the ball."
    );
    assert_eq!(
        korean.comment("impact", "shaftLean", Tier::ImproveOpposite, Some(Locale::En)),
        english.comment("impact", "shaftLean", Tier::ImproveOpposite, None)
    );
    assert_ne!(
        korean.comment("impact", "shaftLean", Tier::ImproveOpposite, None),
        english.comment("impact", "shaftLean", Tier::ImproveOpposite, None)
    );
}

#[test]
fn service_builds_from_default_config() {
    let service = ScoringService::from_config(&ScoringConfig::default()).expect("service");

    assert_eq!(service.default_locale(), Locale::Ko);
    assert_eq!(service.feedback_limit(), 5);
    assert_eq!(service.engine().items().len(), 26);
}

#[test]
fn service_reports_missing_item_config_file() {
    let config = ScoringConfig {
        item_config_path: Some(PathBuf::from("/nonexistent/swing-items.json")),
        ..ScoringConfig::default()
    };

    match ScoringService::from_config(&config) {
        Err(ItemConfigError::Io { path, .. }) => {
            assert_eq!(path, PathBuf::from("/nonexistent/swing-items.json"))
        }
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn entity_is_locale_independent() {
    let korean = service();
    let english = service().with_default_locale(Locale::En);

    assert_eq!(korean.entity(&full_swing()), english.entity(&full_swing()));
}
