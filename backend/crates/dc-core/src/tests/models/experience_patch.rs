use crate::tests::experience;
use crate::{CoreError, ExperiencePatch};

use chrono::NaiveDate;

#[test]
fn given_title_only_patch_when_applied_then_other_fields_untouched() {
    let mut entry = experience("Eng");
    let before = entry.clone();
    let patch = ExperiencePatch {
        title: Some("Staff Eng".to_string()),
        ..ExperiencePatch::default()
    };

    patch.apply(&mut entry);

    assert_eq!(entry.title, "Staff Eng");
    assert_eq!(entry.id, before.id);
    assert_eq!(entry.company, before.company);
    assert_eq!(entry.location, before.location);
    assert_eq!(entry.from, before.from);
    assert_eq!(entry.to, before.to);
    assert_eq!(entry.current, before.current);
    assert_eq!(entry.description, before.description);
}

#[test]
fn given_end_date_patch_when_applied_then_entry_is_closed() {
    let mut entry = experience("Eng");
    let patch = ExperiencePatch {
        to: Some(NaiveDate::from_ymd_opt(2022, 1, 1)),
        current: Some(false),
        ..ExperiencePatch::default()
    };

    patch.apply(&mut entry);

    assert_eq!(entry.to, NaiveDate::from_ymd_opt(2022, 1, 1));
    assert!(!entry.current);
}

#[test]
fn given_blank_title_when_validated_then_rejected() {
    let patch = ExperiencePatch {
        title: Some(" ".to_string()),
        ..ExperiencePatch::default()
    };

    assert!(matches!(
        patch.validate(),
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "title"
    ));
}

#[test]
fn given_partial_patch_when_serialized_then_only_present_fields_appear() {
    let patch = ExperiencePatch {
        title: Some("Lead".to_string()),
        current: Some(true),
        ..ExperiencePatch::default()
    };

    let json = serde_json::to_value(&patch).unwrap();

    assert_eq!(json, serde_json::json!({ "title": "Lead", "current": true }));
}

#[test]
fn given_cleared_end_date_when_applied_then_entry_is_open_ended() {
    let mut entry = experience("Eng");
    entry.to = NaiveDate::from_ymd_opt(2021, 1, 1);
    entry.location = Some("Berlin".to_string());
    let patch = ExperiencePatch {
        to: Some(None),
        current: Some(true),
        ..ExperiencePatch::default()
    };

    patch.apply(&mut entry);

    assert_eq!(entry.to, None);
    assert!(entry.current);
    assert_eq!(entry.location.as_deref(), Some("Berlin"));
}

#[test]
fn given_cleared_fields_when_serialized_then_they_appear_as_null() {
    let patch = ExperiencePatch {
        to: Some(None),
        description: Some(None),
        ..ExperiencePatch::default()
    };

    let json = serde_json::to_value(&patch).unwrap();

    assert_eq!(json, serde_json::json!({ "to": null, "description": null }));
}

#[test]
fn given_padded_text_when_normalized_then_trimmed_and_blank_optionals_clear() {
    let patch = ExperiencePatch {
        title: Some("  Lead  ".to_string()),
        company: Some(" Acme".to_string()),
        location: Some(Some("   ".to_string())),
        description: Some(Some(" Shipped things ".to_string())),
        ..ExperiencePatch::default()
    }
    .normalize();

    assert_eq!(patch.title.as_deref(), Some("Lead"));
    assert_eq!(patch.company.as_deref(), Some("Acme"));
    assert_eq!(patch.location, Some(None));
    assert_eq!(patch.description, Some(Some("Shipped things".to_string())));
}
