use super::common::*;
use crate::scoring::{classify, classify_entity, CommentTable, Locale, ScoreEntityData, Tier};
use serde_json::json;

#[test]
fn classify_partitions_by_tier_in_swing_order() {
    let result = engine().score_all(&full_swing(), Locale::En);
    let feedback = classify(&result);

    assert_eq!(feedback.strengths.len(), 19);
    assert_eq!(feedback.weaknesses.len(), WEAK_FIELDS.len());
    assert!(feedback.strengths.iter().all(|entry| entry.tier == Tier::Good));
    assert!(feedback.strengths.iter().all(|entry| entry.score > 75));

    let weak: Vec<_> = feedback.weaknesses.iter().map(|entry| entry.field).collect();
    assert_eq!(weak, WEAK_FIELDS);
    assert!(feedback.weaknesses.iter().all(|entry| !entry.tier.is_good()));
}

#[test]
fn classify_of_empty_result_is_empty() {
    let feedback = classify(&Default::default());
    assert!(feedback.is_empty());
}

#[test]
fn truncation_applies_to_each_list() {
    let feedback = engine().feedback(&full_swing(), Locale::En).truncated(5);

    assert_eq!(feedback.strengths.len(), 5);
    assert_eq!(feedback.weaknesses.len(), 5);
    assert_eq!(feedback.weaknesses[4].field, "downswingLagAngle");
}

#[test]
fn stored_record_feedback_is_relocalized() {
    let engine = engine();
    let record = engine.create_score_entity_data(&full_swing());

    let english = engine.feedback_from_entity(&record, Locale::En);
    let korean = engine.feedback_from_entity(&record, Locale::Ko);
    let fresh = engine.feedback(&full_swing(), Locale::En);

    assert_eq!(english, fresh);
    assert_eq!(korean.weaknesses.len(), english.weaknesses.len());
    for (ko, en) in korean.weaknesses.iter().zip(&english.weaknesses) {
        assert_eq!((ko.field, ko.score, ko.tier), (en.field, en.score, en.tier));
        assert_ne!(ko.comment, en.comment);
    }
}

#[test]
fn stored_record_entries_without_valid_tier_are_skipped() {
    let record = ScoreEntityData::from_value(&json!({
        "totalScore": 50,
        "addressShoulderTiltScore": 92,
        "addressShoulderTiltMent": 1,
        "addressSpineAngleScore": 40,
        "addressSpineAngleMent": 4,
        "addressKneeFlexScore": 30,
        "finishBalanceMent": 2
    }));

    let feedback = classify_entity(&record, &CommentTable::standard(), Locale::En);

    assert_eq!(feedback.strengths.len(), 1);
    assert_eq!(feedback.strengths[0].field, "addressShoulderTilt");
    assert!(feedback.weaknesses.is_empty());
}

#[test]
fn feedback_serializes_with_camel_case_entries() {
    let feedback = engine().feedback(&full_swing(), Locale::En).truncated(1);
    let json = serde_json::to_value(&feedback).expect("serialize feedback");

    assert_eq!(json["weaknesses"][0]["field"], "addressSpineAngle");
    assert_eq!(json["weaknesses"][0]["phase"], "address");
    assert_eq!(json["weaknesses"][0]["tier"], 2);
    assert_eq!(json["strengths"][0]["item"], "shoulderTilt");
}
