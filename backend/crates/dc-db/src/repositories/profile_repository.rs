//! Profile documents.
//!
//! Each profile is one JSON document in `profiles.document`. The experience
//! list is edited with single `UPDATE ... RETURNING` statements built from
//! SQLite's JSON functions, so concurrent requests on the same profile never
//! interleave a read and a write.

use crate::repositories::{parse_uuid, timestamp};
use crate::Result as DbErrorResult;

use dc_core::{Experience, ExperiencePatch, Profile, ProfileFields, UserSummary};

use chrono::Utc;
use serde_json::{Map, Value};
use uuid::Uuid;

pub struct ProfileRepository;

impl ProfileRepository {
    pub async fn find_by_user<'e, E>(executor: E, user: Uuid) -> DbErrorResult<Option<Profile>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT document FROM profiles WHERE user_id = ?")
                .bind(user.to_string())
                .fetch_optional(executor)
                .await?;

        row.map(|(document,)| decode(&document)).transpose()
    }

    /// The profile together with its owner's name and avatar.
    pub async fn find_with_owner<'e, E>(
        executor: E,
        user: Uuid,
    ) -> DbErrorResult<Option<(Profile, UserSummary)>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row: Option<(String, String, String, Option<String>)> = sqlx::query_as(
            r#"
              SELECT p.document, u.id, u.name, u.avatar
              FROM profiles p
              JOIN users u ON u.id = p.user_id
              WHERE p.user_id = ?
              "#,
        )
        .bind(user.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(with_owner).transpose()
    }

    /// Every profile with its owner, oldest first.
    pub async fn find_all_with_owner<'e, E>(
        executor: E,
    ) -> DbErrorResult<Vec<(Profile, UserSummary)>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows: Vec<(String, String, String, Option<String>)> = sqlx::query_as(
            r#"
              SELECT p.document, u.id, u.name, u.avatar
              FROM profiles p
              JOIN users u ON u.id = p.user_id
              ORDER BY p.created_at ASC, p.user_id ASC
              "#,
        )
        .fetch_all(executor)
        .await?;

        rows.into_iter().map(with_owner).collect()
    }

    /// Create the user's profile, or merge `fields` into the existing one.
    ///
    /// On update the present scalar fields overwrite, `skills` and `social`
    /// are replaced whole, and the experience list is kept. `fields` must
    /// already be validated.
    pub async fn upsert<'e, E>(
        executor: E,
        user: Uuid,
        fields: &ProfileFields,
    ) -> DbErrorResult<Profile>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let created = fields.build_profile(user);
        let document = serde_json::to_string(&created)?;
        let social = serde_json::to_string(&created.social)?;

        let mut patch = Map::new();
        let scalars = [
            ("company", &created.company),
            ("website", &created.website),
            ("location", &created.location),
            ("bio", &created.bio),
            ("githubusername", &created.githubusername),
        ];
        for (key, value) in scalars {
            if let Some(value) = value {
                patch.insert(key.to_string(), Value::String(value.clone()));
            }
        }
        patch.insert("status".to_string(), Value::String(created.status.clone()));
        patch.insert("skills".to_string(), serde_json::to_value(&created.skills)?);
        patch.insert(
            "updated_at".to_string(),
            Value::String(timestamp(created.updated_at)),
        );
        let patch = Value::Object(patch).to_string();

        let (document,): (String,) = sqlx::query_as(
            r#"
              INSERT INTO profiles (user_id, document, created_at)
              VALUES (?, ?, ?)
              ON CONFLICT(user_id) DO UPDATE SET
                  document = json_set(
                      json_patch(profiles.document, ?),
                      '$.social', json(?)
                  )
              RETURNING document
              "#,
        )
        .bind(user.to_string())
        .bind(document)
        .bind(created.created_at.timestamp())
        .bind(patch)
        .bind(social)
        .fetch_one(executor)
        .await?;

        decode(&document)
    }

    /// Returns true when a profile was deleted.
    pub async fn delete_by_user<'e, E>(executor: E, user: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM profiles WHERE user_id = ?")
            .bind(user.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Prepend `entry` to the experience list. `None` if the user has no profile.
    pub async fn push_experience<'e, E>(
        executor: E,
        user: Uuid,
        entry: &Experience,
    ) -> DbErrorResult<Option<Profile>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let entry = serde_json::to_string(entry)?;

        // '[' || entry || ',' || <old array without its '['>
        let row: Option<(String,)> = sqlx::query_as(
            r#"
              UPDATE profiles
              SET document = json_set(
                  document,
                  '$.experience', json(
                      CASE
                          WHEN json_array_length(document, '$.experience') > 0
                              THEN '[' || ? || ',' || substr(json_extract(document, '$.experience'), 2)
                          ELSE '[' || ? || ']'
                      END
                  ),
                  '$.updated_at', ?
              )
              WHERE user_id = ?
              RETURNING document
              "#,
        )
        .bind(&entry)
        .bind(&entry)
        .bind(timestamp(Utc::now()))
        .bind(user.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(|(document,)| decode(&document)).transpose()
    }

    /// Remove the entry with `experience_id`.
    ///
    /// `None` only when the user has no profile. An absent id leaves the
    /// document untouched and returns it as stored.
    pub async fn pull_experience<'e, E>(
        executor: E,
        user: Uuid,
        experience_id: Uuid,
    ) -> DbErrorResult<Option<Profile>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let experience_id = experience_id.to_string();

        let row: Option<(String,)> = sqlx::query_as(
            r#"
              UPDATE profiles
              SET document = CASE
                  WHEN EXISTS (
                      SELECT 1 FROM json_each(profiles.document, '$.experience') AS e
                      WHERE json_extract(e.value, '$.id') = ?
                  )
                  THEN (
                      SELECT json_set(
                          json_remove(profiles.document, '$.experience[' || e.key || ']'),
                          '$.updated_at', ?
                      )
                      FROM json_each(profiles.document, '$.experience') AS e
                      WHERE json_extract(e.value, '$.id') = ?
                  )
                  ELSE profiles.document
              END
              WHERE user_id = ?
              RETURNING document
              "#,
        )
        .bind(&experience_id)
        .bind(timestamp(Utc::now()))
        .bind(&experience_id)
        .bind(user.to_string())
        .fetch_optional(executor)
        .await?;

        row.map(|(document,)| decode(&document)).transpose()
    }

    /// Merge `patch` into the entry with `experience_id`.
    ///
    /// `None` unless a profile owned by `user` contains that entry.
    pub async fn set_experience<'e, E>(
        executor: E,
        user: Uuid,
        experience_id: Uuid,
        patch: &ExperiencePatch,
    ) -> DbErrorResult<Option<Profile>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let experience_id = experience_id.to_string();
        let patch = serde_json::to_string(patch)?;

        let row: Option<(String,)> = sqlx::query_as(
            r#"
              UPDATE profiles
              SET document = (
                  SELECT json_set(
                      profiles.document,
                      '$.experience[' || e.key || ']', json_patch(e.value, ?),
                      '$.updated_at', ?
                  )
                  FROM json_each(profiles.document, '$.experience') AS e
                  WHERE json_extract(e.value, '$.id') = ?
              )
              WHERE user_id = ?
                AND EXISTS (
                    SELECT 1 FROM json_each(profiles.document, '$.experience') AS e
                    WHERE json_extract(e.value, '$.id') = ?
                )
              RETURNING document
              "#,
        )
        .bind(patch)
        .bind(timestamp(Utc::now()))
        .bind(&experience_id)
        .bind(user.to_string())
        .bind(&experience_id)
        .fetch_optional(executor)
        .await?;

        row.map(|(document,)| decode(&document)).transpose()
    }
}

fn decode(document: &str) -> DbErrorResult<Profile> {
    Ok(serde_json::from_str(document)?)
}

fn with_owner(
    (document, id, name, avatar): (String, String, String, Option<String>),
) -> DbErrorResult<(Profile, UserSummary)> {
    let profile = decode(&document)?;
    let owner = UserSummary {
        id: parse_uuid("users.id", &id)?,
        name,
        avatar,
    };
    Ok((profile, owner))
}
