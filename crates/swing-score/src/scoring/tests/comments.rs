use super::common::*;
use crate::scoring::{CommentTable, Locale, SwingPhase, Tier, SCORED_FIELDS};

#[test]
fn tier_three_matches_tier_two_without_opposite_remark() {
    let table = CommentTable::standard();
    for phase in table.phases() {
        for item in phase.items.iter().filter(|item| item.opposite.is_none()) {
            for locale in [Locale::Ko, Locale::En] {
                assert_eq!(
                    table.comment(phase.phase, item.item, Tier::ImproveOpposite, locale),
                    table.comment(phase.phase, item.item, Tier::Improve, locale),
                    "{}/{}",
                    phase.phase,
                    item.item
                );
            }
        }
    }
}

#[test]
fn unknown_phase_or_item_yields_empty_comment() {
    let table = CommentTable::standard();

    assert_eq!(
        table.comment(SwingPhase::Impact, "gripPressure", Tier::Good, Locale::En),
        ""
    );
    assert_eq!(
        table.comment_for_key("putting", "strokeLength", Tier::Improve, Locale::Ko),
        ""
    );
    assert!(table.phase_comments_for_key("putting", Locale::En).is_empty());
}

#[test]
fn phase_keys_resolve_regardless_of_spelling() {
    let table = CommentTable::standard();
    let canonical = table.comment_for_key("backswingTop", "xFactor", Tier::Good, Locale::En);

    assert!(!canonical.is_empty());
    for spelling in ["backswing_top", "Backswing-Top", "BACKSWINGTOP"] {
        assert_eq!(
            table.comment_for_key(spelling, "xFactor", Tier::Good, Locale::En),
            canonical
        );
    }
}

#[test]
fn phase_comments_list_remarks_in_tier_order() {
    let table = CommentTable::standard();
    let downswing = table.phase_comments(SwingPhase::Downswing, Locale::En);

    assert_eq!(downswing.len(), 3);
    let lag = downswing.get("lagAngle").expect("lag angle listed");
    assert_eq!(
        lag,
        &vec![
            "Lag is held well, storing energy into impact.",
            "You hold the lag too long; let it release naturally just before impact.",
            "Wrists release early (casting); keep the wrist angle a little longer.",
        ]
    );

    let two_level = downswing.get("hipRotation").expect("hip rotation listed");
    assert_eq!(two_level.len(), 2);
}

#[test]
fn opposite_remarks_match_three_level_configuration() {
    let engine = engine();
    for field in SCORED_FIELDS {
        let config = engine
            .items()
            .get(field.phase, field.item)
            .unwrap_or_else(|| panic!("{} has no configuration", field.field));
        assert_eq!(
            engine.comments().has_opposite(field.phase, field.item),
            config.has_third_level,
            "{} tier-3 remark does not match its configuration",
            field.field
        );
    }
}

#[test]
fn unknown_items_have_no_opposite_remark() {
    let table = CommentTable::standard();
    assert!(table.has_opposite(SwingPhase::Impact, "shaftLean"));
    assert!(!table.has_opposite(SwingPhase::Impact, "shoulderOpen"));
    assert!(!table.has_opposite(SwingPhase::Impact, "gripPressure"));
}

#[test]
fn catalog_covers_every_configured_item() {
    let engine = engine();
    for phase in SwingPhase::ordered() {
        for (item, _) in engine.items().items_for_phase(phase) {
            assert!(
                engine.comments().entry(phase, item).is_some(),
                "{phase}/{item} has no remarks"
            );
        }
    }
}
