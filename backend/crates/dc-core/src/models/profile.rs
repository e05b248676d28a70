//! Profile document - the per-user record of career and social metadata.

use crate::{Experience, Social};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One profile per user. Persisted as a single JSON document, so this struct
/// is also the stored shape: optional scalars are omitted when unset and
/// `social` is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Owning user id
    pub user: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub githubusername: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub social: Social,
    /// Newest first
    #[serde(default)]
    pub experience: Vec<Experience>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(user: Uuid, status: String, skills: Vec<String>) -> Self {
        let now = Utc::now();
        Self {
            user,
            company: None,
            website: None,
            location: None,
            bio: None,
            status,
            githubusername: None,
            skills,
            social: Social::default(),
            experience: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
