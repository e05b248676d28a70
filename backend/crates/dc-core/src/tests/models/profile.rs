use crate::tests::{experience, profile_with};

use uuid::Uuid;

#[test]
fn test_profile_new_has_empty_social_and_experience() {
    let user = Uuid::new_v4();
    let profile = profile_with(user, Vec::new());

    assert_eq!(profile.user, user);
    assert_eq!(profile.social, crate::Social::default());
    assert!(profile.experience.is_empty());
    assert_eq!(profile.created_at, profile.updated_at);
}

#[test]
fn test_profile_document_omits_unset_fields_but_keeps_social() {
    let profile = profile_with(Uuid::new_v4(), Vec::new());

    let json = serde_json::to_value(&profile).unwrap();

    assert_eq!(json["social"], serde_json::json!({}));
    assert!(json.get("company").is_none());
    assert!(json.get("githubusername").is_none());
    assert_eq!(json["skills"], serde_json::json!(["rust", "sql"]));
}

#[test]
fn test_profile_document_round_trips_through_json() {
    let profile = profile_with(Uuid::new_v4(), vec![experience("Eng"), experience("Mgr")]);

    let text = serde_json::to_string(&profile).unwrap();
    let parsed: crate::Profile = serde_json::from_str(&text).unwrap();

    assert_eq!(parsed, profile);
}

