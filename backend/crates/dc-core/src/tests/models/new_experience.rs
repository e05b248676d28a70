use crate::{CoreError, NewExperience};

use chrono::NaiveDate;

#[test]
fn given_required_fields_when_converted_then_entry_has_fresh_id() {
    let first = NewExperience::new("VP", "X", "2020").into_experience().unwrap();
    let second = NewExperience::new("VP", "X", "2020").into_experience().unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(first.title, "VP");
    assert_eq!(first.company, "X");
    assert_eq!(first.from, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    assert!(!first.current);
}

#[test]
fn given_empty_title_when_converted_then_validation_error_on_title() {
    let result = NewExperience::new("", "X", "2020").into_experience();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "title"
    ));
}

#[test]
fn given_whitespace_company_when_validated_then_validation_error_on_company() {
    let result = NewExperience::new("Eng", "   ", "2020").validate();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "company"
    ));
}

#[test]
fn given_missing_from_date_when_converted_then_validation_error_on_from() {
    let result = NewExperience::new("Eng", "X", "").into_experience();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "from"
    ));
}

#[test]
fn given_blank_optional_fields_when_converted_then_they_are_omitted() {
    let mut entry = NewExperience::new("  Eng ", "X", "2019-02-03");
    entry.location = Some("  ".to_string());
    entry.to = Some(String::new());
    entry.description = Some("Kept".to_string());

    let experience = entry.into_experience().unwrap();

    assert_eq!(experience.title, "Eng");
    assert_eq!(experience.location, None);
    assert_eq!(experience.to, None);
    assert_eq!(experience.description.as_deref(), Some("Kept"));
}

#[test]
fn given_unparseable_to_date_when_converted_then_validation_error_on_to() {
    let mut entry = NewExperience::new("Eng", "X", "2019");
    entry.to = Some("soon".to_string());

    assert!(matches!(
        entry.into_experience(),
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "to"
    ));
}
