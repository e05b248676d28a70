use crate::ProfileRepository;

use dc_core::{Experience, ExperiencePatch, Profile, ProfileStore, Result as CoreErrorResult};

use async_trait::async_trait;
use sqlx::SqlitePool;
use uuid::Uuid;

/// [`ProfileStore`] backed by the SQLite document store.
#[derive(Debug, Clone)]
pub struct SqliteProfileStore {
    pool: SqlitePool,
}

impl SqliteProfileStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for SqliteProfileStore {
    async fn find_profile(&self, user: Uuid) -> CoreErrorResult<Option<Profile>> {
        Ok(ProfileRepository::find_by_user(&self.pool, user).await?)
    }

    async fn push_experience(
        &self,
        user: Uuid,
        entry: &Experience,
    ) -> CoreErrorResult<Option<Profile>> {
        Ok(ProfileRepository::push_experience(&self.pool, user, entry).await?)
    }

    async fn pull_experience(
        &self,
        user: Uuid,
        experience_id: Uuid,
    ) -> CoreErrorResult<Option<Profile>> {
        Ok(ProfileRepository::pull_experience(&self.pool, user, experience_id).await?)
    }

    async fn set_experience(
        &self,
        user: Uuid,
        experience_id: Uuid,
        patch: &ExperiencePatch,
    ) -> CoreErrorResult<Option<Profile>> {
        Ok(ProfileRepository::set_experience(&self.pool, user, experience_id, patch).await?)
    }
}
