pub mod editor;
pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use editor::experience_editor::ExperienceEditor;
pub use editor::experience_list::ExperienceList;
pub use editor::profile_store::ProfileStore;
pub use error::{CoreError, Result};
pub use models::dates::parse_date;
pub use models::experience::Experience;
pub use models::experience_patch::ExperiencePatch;
pub use models::new_experience::NewExperience;
pub use models::profile::Profile;
pub use models::profile_fields::{ProfileFields, parse_skills};
pub use models::social::Social;
pub use models::user::{User, UserSummary};

pub use error_location::ErrorLocation;
