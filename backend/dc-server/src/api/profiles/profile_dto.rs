use dc_core::{Experience, Profile, Social, UserSummary};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Owner reference: a bare id after mutations, or the owner's summary on
/// read routes.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProfileOwner {
    Id(Uuid),
    Summary(UserSummary),
}

/// Profile DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ProfileDto {
    pub user: ProfileOwner,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,
    pub skills: Vec<String>,
    pub social: Social,
    pub experience: Vec<Experience>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileDto {
    pub fn with_owner(profile: Profile, owner: UserSummary) -> Self {
        let mut dto = Self::from(profile);
        dto.user = ProfileOwner::Summary(owner);
        dto
    }
}

impl From<Profile> for ProfileDto {
    fn from(p: Profile) -> Self {
        Self {
            user: ProfileOwner::Id(p.user),
            company: p.company,
            website: p.website,
            location: p.location,
            bio: p.bio,
            status: p.status,
            githubusername: p.githubusername,
            skills: p.skills,
            social: p.social,
            experience: p.experience,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

impl From<(Profile, UserSummary)> for ProfileDto {
    fn from((profile, owner): (Profile, UserSummary)) -> Self {
        Self::with_owner(profile, owner)
    }
}
