mod editor;

pub(crate) use memory_store::MemoryProfileStore;

use crate::{Experience, Profile};

use chrono::NaiveDate;
use uuid::Uuid;

pub(crate) fn experience(title: &str) -> Experience {
    Experience {
        id: Uuid::new_v4(),
        title: title.to_string(),
        company: "Acme".to_string(),
        location: Some("Berlin".to_string()),
        from: NaiveDate::from_ymd_opt(2018, 3, 1).unwrap(),
        to: None,
        current: true,
        description: Some("Built things".to_string()),
    }
}

pub(crate) fn profile_with(user: Uuid, experience: Vec<Experience>) -> Profile {
    let mut profile = Profile::new(
        user,
        "Developer".to_string(),
        vec!["rust".to_string(), "sql".to_string()],
    );
    profile.experience = experience;
    profile
}
