use dc_core::{ExperiencePatch, Result as CoreErrorResult, parse_date};

use serde::{Deserialize, Deserializer};

/// Body of `POST /api/profile/experience/{exp_id}`.
///
/// Absent fields are kept. `null` on `location`, `to` or `description`
/// clears the stored value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateExperienceRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub location: Option<Option<String>>,
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub to: Option<Option<String>>,
    #[serde(default)]
    pub current: Option<bool>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
}

/// A present key always yields `Some`, so `null` becomes `Some(None)`.
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl UpdateExperienceRequest {
    /// Parses the date fields; other checks happen in the editor.
    pub fn into_patch(self) -> CoreErrorResult<ExperiencePatch> {
        let from = self
            .from
            .map(|value| parse_date("from", &value))
            .transpose()?;
        let to = match self.to {
            Some(Some(value)) if !value.trim().is_empty() => Some(Some(parse_date("to", &value)?)),
            Some(_) => Some(None),
            None => None,
        };

        Ok(ExperiencePatch {
            title: self.title,
            company: self.company,
            location: self.location,
            from,
            to,
            current: self.current,
            description: self.description,
        })
    }
}
