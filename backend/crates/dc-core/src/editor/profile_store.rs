use crate::{Experience, ExperiencePatch, Profile, Result as CoreErrorResult};

use async_trait::async_trait;
use uuid::Uuid;

/// Document store operations the experience editor needs.
///
/// Every mutating method must be a single atomic update of one profile
/// document. `Ok(None)` means no profile matched the filter.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn find_profile(&self, user: Uuid) -> CoreErrorResult<Option<Profile>>;

    /// Prepend `entry` to the user's experience list.
    async fn push_experience(
        &self,
        user: Uuid,
        entry: &Experience,
    ) -> CoreErrorResult<Option<Profile>>;

    /// Remove the entry with `experience_id`. A profile without that entry is
    /// returned unchanged.
    async fn pull_experience(
        &self,
        user: Uuid,
        experience_id: Uuid,
    ) -> CoreErrorResult<Option<Profile>>;

    /// Merge `patch` into the entry with `experience_id`. Matches only a
    /// profile owned by `user` that contains that entry.
    async fn set_experience(
        &self,
        user: Uuid,
        experience_id: Uuid,
        patch: &ExperiencePatch,
    ) -> CoreErrorResult<Option<Profile>>;
}
