use crate::models::present;
use crate::{CoreError, Profile, Result as CoreErrorResult, Social};

use uuid::Uuid;

/// Split a comma-separated skills string, trimming each entry and dropping
/// empty ones. Order is preserved.
pub fn parse_skills(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Create-or-update submission for a profile.
///
/// On update, only the scalar fields that are present overwrite the stored
/// ones; `skills` and `social` are always replaced as a whole.
#[derive(Debug, Clone, Default)]
pub struct ProfileFields {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: String,
    pub githubusername: Option<String>,
    /// Comma-separated
    pub skills: String,
    pub youtube: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
}

impl ProfileFields {
    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.status.trim().is_empty() {
            return Err(CoreError::validation("status", "Status is required"));
        }
        if self.skills().is_empty() {
            return Err(CoreError::validation("skills", "Skills is required"));
        }
        Ok(())
    }

    pub fn skills(&self) -> Vec<String> {
        parse_skills(&self.skills)
    }

    pub fn social(&self) -> Social {
        Social {
            youtube: present(&self.youtube),
            facebook: present(&self.facebook),
            twitter: present(&self.twitter),
            instagram: present(&self.instagram),
            linkedin: present(&self.linkedin),
        }
    }

    pub fn company(&self) -> Option<String> {
        present(&self.company)
    }

    pub fn website(&self) -> Option<String> {
        present(&self.website)
    }

    pub fn location(&self) -> Option<String> {
        present(&self.location)
    }

    pub fn bio(&self) -> Option<String> {
        present(&self.bio)
    }

    pub fn githubusername(&self) -> Option<String> {
        present(&self.githubusername)
    }

    /// Build a brand-new profile for `user` with an empty experience list.
    #[track_caller]
    pub fn into_profile(self, user: Uuid) -> CoreErrorResult<Profile> {
        self.validate()?;
        Ok(self.build_profile(user))
    }

    /// Same as [`ProfileFields::into_profile`] without validation. Callers
    /// must have validated already.
    pub fn build_profile(&self, user: Uuid) -> Profile {
        let mut profile = Profile::new(user, self.status.trim().to_string(), self.skills());
        profile.company = self.company();
        profile.website = self.website();
        profile.location = self.location();
        profile.bio = self.bio();
        profile.githubusername = self.githubusername();
        profile.social = self.social();
        profile
    }
}
