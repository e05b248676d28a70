use dc_core::NewExperience;

use serde::Deserialize;

/// Body of `PUT /api/profile/experience`
///
/// Missing required fields deserialize as empty strings so the domain
/// validation can name the field.
#[derive(Debug, Default, Deserialize)]
pub struct AddExperienceRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<AddExperienceRequest> for NewExperience {
    fn from(req: AddExperienceRequest) -> Self {
        NewExperience {
            title: req.title,
            company: req.company,
            location: req.location,
            from: req.from,
            to: req.to,
            current: req.current,
            description: req.description,
        }
    }
}
