use dc_core::{Experience, NewExperience, ProfileFields};

/// Profile submission with sensible defaults
pub fn profile_fields() -> ProfileFields {
    ProfileFields {
        company: Some("Acme".to_string()),
        website: Some("https://acme.test".to_string()),
        location: Some("Berlin".to_string()),
        bio: None,
        status: "Developer".to_string(),
        githubusername: Some("acme-dev".to_string()),
        skills: "rust, sql ,  http".to_string(),
        youtube: None,
        facebook: None,
        twitter: Some("https://twitter.com/acme".to_string()),
        instagram: None,
        linkedin: Some("https://linkedin.com/in/acme".to_string()),
    }
}

/// Validated experience entry with a fresh id
pub fn create_test_experience(title: &str) -> Experience {
    let mut entry = NewExperience::new(title, "Acme", "2019-04-01");
    entry.location = Some("Remote".to_string());
    entry.description = Some(format!("{} work", title));
    entry.into_experience().expect("valid test experience")
}
