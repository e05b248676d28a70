use dc_core::ProfileFields;

use serde::Deserialize;

/// Body of `POST /api/profile`
#[derive(Debug, Default, Deserialize)]
pub struct CreateProfileRequest {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// Required
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub githubusername: Option<String>,
    /// Required, comma-separated
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub facebook: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
}

impl From<CreateProfileRequest> for ProfileFields {
    fn from(req: CreateProfileRequest) -> Self {
        ProfileFields {
            company: req.company,
            website: req.website,
            location: req.location,
            bio: req.bio,
            status: req.status,
            githubusername: req.githubusername,
            skills: req.skills,
            youtube: req.youtube,
            facebook: req.facebook,
            twitter: req.twitter,
            instagram: req.instagram,
            linkedin: req.linkedin,
        }
    }
}
