use crate::models::present;
use crate::{CoreError, Experience, Result as CoreErrorResult, parse_date};

use uuid::Uuid;

/// A submitted experience entry that has not been assigned an identifier yet.
///
/// Text fields are kept exactly as submitted; [`NewExperience::into_experience`]
/// trims and validates them.
#[derive(Debug, Clone, Default)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: String,
    pub to: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

impl NewExperience {
    pub fn new(title: impl Into<String>, company: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            company: company.into(),
            from: from.into(),
            ..Self::default()
        }
    }

    /// Check the required fields: title, company and from-date.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("title", "Title is required"));
        }
        if self.company.trim().is_empty() {
            return Err(CoreError::validation("company", "Company is required"));
        }
        if self.from.trim().is_empty() {
            return Err(CoreError::validation("from", "From date is required"));
        }
        Ok(())
    }

    /// Validate and turn the submission into an entry with a fresh identifier.
    #[track_caller]
    pub fn into_experience(self) -> CoreErrorResult<Experience> {
        self.validate()?;

        let from = parse_date("from", &self.from)?;
        let to = match present(&self.to) {
            Some(value) => Some(parse_date("to", &value)?),
            None => None,
        };

        Ok(Experience {
            id: Uuid::new_v4(),
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: present(&self.location),
            from,
            to,
            current: self.current,
            description: present(&self.description),
        })
    }
}
