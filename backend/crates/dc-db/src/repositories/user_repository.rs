use crate::{DbError, ProfileRepository, Result as DbErrorResult};

use dc_core::User;

use log::info;
use sqlx::SqlitePool;
use uuid::Uuid;

pub struct UserRepository;

impl UserRepository {
    /// Insert the user unless a row with the same id exists.
    /// Returns true when a row was created.
    ///
    /// A new id whose email already belongs to another user is a
    /// [`DbError::Conflict`] on `email`.
    pub async fn ensure<'e, E>(executor: E, user: &User) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
              INSERT INTO users (id, name, email, avatar, created_at)
              VALUES (?, ?, ?, ?, ?)
              ON CONFLICT(id) DO NOTHING
              "#,
        )
        .bind(user.id.to_string())
        .bind(&user.name)
        .bind(&user.email)
        .bind(user.avatar.as_deref())
        .bind(user.created_at.timestamp())
        .execute(executor)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                DbError::conflict("email", "Email is already registered to another user")
            }
            other => DbError::from(other),
        })?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete the user's profile and then the user, in one transaction.
    /// Returns true when the user existed.
    pub async fn delete_account(pool: &SqlitePool, id: Uuid) -> DbErrorResult<bool> {
        let mut tx = pool.begin().await?;

        let had_profile = ProfileRepository::delete_by_user(&mut *tx, id).await?;
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!("Deleted user {} (profile removed: {})", id, had_profile);
        }
        Ok(deleted)
    }
}
