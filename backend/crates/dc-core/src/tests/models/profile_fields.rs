use crate::{CoreError, ProfileFields, parse_skills};

use uuid::Uuid;

fn fields() -> ProfileFields {
    ProfileFields {
        status: "Developer".to_string(),
        skills: "HTML, CSS,JavaScript ,  Rust".to_string(),
        ..ProfileFields::default()
    }
}

#[test]
fn given_comma_separated_skills_when_parsed_then_trimmed_in_order() {
    assert_eq!(
        parse_skills(" HTML, CSS,JavaScript ,  Rust"),
        vec!["HTML", "CSS", "JavaScript", "Rust"]
    );
}

#[test]
fn given_empty_pieces_when_parsed_then_dropped() {
    assert_eq!(parse_skills("rust,, ,go,"), vec!["rust", "go"]);
    assert!(parse_skills("").is_empty());
}

#[test]
fn given_missing_status_when_validated_then_validation_error_on_status() {
    let mut input = fields();
    input.status = "  ".to_string();

    assert!(matches!(
        input.validate(),
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "status"
    ));
}

#[test]
fn given_only_commas_for_skills_when_validated_then_validation_error_on_skills() {
    let mut input = fields();
    input.skills = " , ,".to_string();

    assert!(matches!(
        input.validate(),
        Err(CoreError::Validation { field: Some(ref f), .. }) if f == "skills"
    ));
}

#[test]
fn given_some_social_links_when_converted_then_only_those_are_set() {
    let mut input = fields();
    input.twitter = Some("https://twitter.com/dev".to_string());
    input.youtube = Some(String::new());
    input.company = Some("  Acme  ".to_string());

    let profile = input.into_profile(Uuid::new_v4()).unwrap();

    assert_eq!(profile.social.twitter.as_deref(), Some("https://twitter.com/dev"));
    assert_eq!(profile.social.youtube, None);
    assert_eq!(profile.company.as_deref(), Some("Acme"));
    assert_eq!(profile.skills, vec!["HTML", "CSS", "JavaScript", "Rust"]);
    assert!(profile.experience.is_empty());
}
