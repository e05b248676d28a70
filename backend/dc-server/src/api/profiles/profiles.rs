//! Profile REST API handlers

use crate::{
    ApiError, ApiResult, AppState, AuthUser, CreateProfileRequest, DeleteResponse, ProfileDto,
};

use dc_core::ProfileFields;
use dc_db::{ProfileRepository, UserRepository};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use log::info;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/profile/me
///
/// The caller's profile with owner name and avatar
pub async fn get_my_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<ProfileDto>> {
    let found = ProfileRepository::find_with_owner(state.store.pool(), user.id)
        .await?
        .ok_or_else(|| ApiError::not_found("There is no profile for this user"))?;

    Ok(Json(found.into()))
}

/// POST /api/profile
///
/// Create the caller's profile, or update it in place
pub async fn upsert_profile(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<CreateProfileRequest>, JsonRejection>,
) -> ApiResult<Json<ProfileDto>> {
    let Json(req) = payload?;
    let fields = ProfileFields::from(req);
    fields.validate()?;

    let pool = state.store.pool();
    if UserRepository::ensure(pool, &user.to_user()).await? {
        info!("Registered user {}", user.id);
    }

    let profile = ProfileRepository::upsert(pool, user.id, &fields).await?;
    info!("Saved profile for user {}", user.id);

    Ok(Json(profile.into()))
}

/// GET /api/profile
///
/// Every profile, oldest first
pub async fn list_profiles(State(state): State<AppState>) -> ApiResult<Json<Vec<ProfileDto>>> {
    let profiles = ProfileRepository::find_all_with_owner(state.store.pool()).await?;

    Ok(Json(profiles.into_iter().map(ProfileDto::from).collect()))
}

/// GET /api/profile/user/{user_id}
///
/// A malformed id can never match, so it is reported like a missing profile.
pub async fn get_profile_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<ProfileDto>> {
    let Ok(user_id) = Uuid::parse_str(&user_id) else {
        return Err(ApiError::not_found("Profile not found"));
    };

    let found = ProfileRepository::find_with_owner(state.store.pool(), user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;

    Ok(Json(found.into()))
}

/// DELETE /api/profile
///
/// Remove the caller's profile, then the account itself
pub async fn delete_account(
    State(state): State<AppState>,
    user: AuthUser,
) -> ApiResult<Json<DeleteResponse>> {
    let existed = UserRepository::delete_account(state.store.pool(), user.id).await?;
    if !existed {
        info!("Delete requested for unknown user {}", user.id);
    }

    Ok(Json(DeleteResponse {
        msg: "User deleted".to_string(),
    }))
}
