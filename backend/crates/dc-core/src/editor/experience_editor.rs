//! Add, remove and patch the experience entries embedded in a profile.

use crate::{
    CoreError, ExperiencePatch, NewExperience, Profile, ProfileStore, Result as CoreErrorResult,
};

use log::debug;
use uuid::Uuid;

/// Edits one profile's experience list through a [`ProfileStore`].
///
/// Each call validates its input and then issues exactly one atomic store
/// update; nothing is read back and rewritten here.
pub struct ExperienceEditor<S> {
    store: S,
}

impl<S: ProfileStore> ExperienceEditor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Prepend a new entry with a fresh id.
    ///
    /// Fails with `Validation` before touching the store when title, company
    /// or from-date is missing, and with `NotFound` when the user has no profile.
    pub async fn insert(&self, user: Uuid, entry: NewExperience) -> CoreErrorResult<Profile> {
        let entry = entry.into_experience()?;
        debug!("Adding experience {} for user {}", entry.id, user);

        self.store
            .push_experience(user, &entry)
            .await?
            .ok_or_else(|| no_profile(user))
    }

    /// Remove an entry by id. Removing an id that is not in the list returns
    /// the profile unchanged, so repeating a removal is harmless.
    pub async fn remove(&self, user: Uuid, experience_id: Uuid) -> CoreErrorResult<Profile> {
        debug!("Removing experience {} for user {}", experience_id, user);

        self.store
            .pull_experience(user, experience_id)
            .await?
            .ok_or_else(|| no_profile(user))
    }

    /// Overwrite the fields present in `patch` on one entry.
    ///
    /// `NotFound` unless a profile owned by `user` contains `experience_id`.
    pub async fn update(
        &self,
        user: Uuid,
        experience_id: Uuid,
        patch: ExperiencePatch,
    ) -> CoreErrorResult<Profile> {
        let patch = patch.normalize();
        patch.validate()?;
        debug!("Updating experience {} for user {}", experience_id, user);

        self.store
            .set_experience(user, experience_id, &patch)
            .await?
            .ok_or_else(|| {
                CoreError::not_found(format!(
                    "Experience {} not found in profile of user {}",
                    experience_id, user
                ))
            })
    }
}

#[track_caller]
fn no_profile(user: Uuid) -> CoreError {
    CoreError::not_found(format!("There is no profile for user {}", user))
}
