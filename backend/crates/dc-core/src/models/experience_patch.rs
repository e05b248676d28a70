use crate::models::present;
use crate::{CoreError, Experience, Result as CoreErrorResult};

use chrono::NaiveDate;
use serde::Serialize;

/// Partial field set for an existing experience entry.
///
/// `None` means "leave unchanged". On the optional fields `Some(None)` clears
/// the value. Serializes to a JSON merge patch that only names the fields
/// being changed, with cleared fields as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExperiencePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
}

impl ExperiencePatch {
    /// Trim text the way new entries are trimmed. Blank optional text clears
    /// the field.
    pub fn normalize(self) -> Self {
        Self {
            title: self.title.map(|t| t.trim().to_string()),
            company: self.company.map(|c| c.trim().to_string()),
            location: self.location.map(|l| present(&l)),
            description: self.description.map(|d| present(&d)),
            ..self
        }
    }

    /// Required fields may be changed but never blanked.
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.title.as_deref().is_some_and(|t| t.trim().is_empty()) {
            return Err(CoreError::validation("title", "Title cannot be empty"));
        }
        if self.company.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(CoreError::validation("company", "Company cannot be empty"));
        }
        Ok(())
    }

    pub fn apply(&self, entry: &mut Experience) {
        if let Some(title) = &self.title {
            entry.title = title.clone();
        }
        if let Some(company) = &self.company {
            entry.company = company.clone();
        }
        if let Some(location) = &self.location {
            entry.location = location.clone();
        }
        if let Some(from) = self.from {
            entry.from = from;
        }
        if let Some(to) = self.to {
            entry.to = to;
        }
        if let Some(current) = self.current {
            entry.current = current;
        }
        if let Some(description) = &self.description {
            entry.description = description.clone();
        }
    }
}
