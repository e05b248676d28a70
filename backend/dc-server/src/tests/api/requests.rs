use crate::{AddExperienceRequest, CreateProfileRequest, UpdateExperienceRequest};

use dc_core::{CoreError, NewExperience, ProfileFields};

use chrono::NaiveDate;
use googletest::assert_that;
use googletest::prelude::{eq, none};

#[test]
fn given_profile_body_when_converted_then_fields_carry_over() {
    // Given
    let req: CreateProfileRequest = serde_json::from_str(
        r#"{"status":"Developer","skills":"rust, sql","company":"Acme","twitter":"https://x.com/a"}"#,
    )
    .unwrap();

    // When
    let fields = ProfileFields::from(req);

    // Then
    assert_that!(fields.status.as_str(), eq("Developer"));
    assert_eq!(fields.skills(), vec!["rust".to_string(), "sql".to_string()]);
    assert_that!(fields.company.as_deref(), eq(Some("Acme")));
    assert_that!(fields.bio, none());
}

#[test]
fn given_experience_body_without_title_when_converted_then_validation_names_title() {
    // Given
    let req: AddExperienceRequest =
        serde_json::from_str(r#"{"company":"Acme","from":"2020-01-01"}"#).unwrap();

    // When
    let result = NewExperience::from(req).into_experience();

    // Then
    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "title"
    ));
}

#[test]
fn given_update_body_with_dates_when_into_patch_then_dates_parsed() {
    // Given
    let req: UpdateExperienceRequest =
        serde_json::from_str(r#"{"title":"Lead","from":"2019-03","to":"2021"}"#).unwrap();

    // When
    let patch = req.into_patch().unwrap();

    // Then
    assert_that!(patch.title.as_deref(), eq(Some("Lead")));
    assert_eq!(patch.from, NaiveDate::from_ymd_opt(2019, 3, 1));
    assert_eq!(patch.to, Some(NaiveDate::from_ymd_opt(2021, 1, 1)));
    assert_that!(patch.company, none());
}

#[test]
fn given_update_body_with_bad_date_when_into_patch_then_validation_error() {
    let req: UpdateExperienceRequest = serde_json::from_str(r#"{"from":"yesterday"}"#).unwrap();

    let result = req.into_patch();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "from"
    ));
}

#[test]
fn given_update_body_with_nulls_when_into_patch_then_fields_are_cleared() {
    let req: UpdateExperienceRequest =
        serde_json::from_str(r#"{"current":true,"to":null,"description":null}"#).unwrap();

    let patch = req.into_patch().unwrap();

    assert_eq!(patch.to, Some(None));
    assert_eq!(patch.description, Some(None));
    assert_that!(patch.location, none());
    assert_that!(patch.current, eq(Some(true)));
}

#[test]
fn given_update_body_with_blank_to_when_into_patch_then_end_date_is_cleared() {
    let req: UpdateExperienceRequest = serde_json::from_str(r#"{"to":"  "}"#).unwrap();

    let patch = req.into_patch().unwrap();

    assert_eq!(patch.to, Some(None));
}
