//! Experience sub-resource handlers
//!
//! Each handler is one [`dc_core::ExperienceEditor`] call; the editor owns
//! validation and the single atomic store update.

use crate::{
    AddExperienceRequest, ApiError, ApiResult, AppState, AuthUser, ProfileDto,
    UpdateExperienceRequest,
};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use error_location::ErrorLocation;
use log::info;
use uuid::Uuid;

/// PUT /api/profile/experience
pub async fn add_experience(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<AddExperienceRequest>, JsonRejection>,
) -> ApiResult<Json<ProfileDto>> {
    let Json(req) = payload?;

    let profile = state.experience_editor().insert(user.id, req.into()).await?;
    if let Some(entry) = profile.experience.first() {
        info!("Added experience {} for user {}", entry.id, user.id);
    }

    Ok(Json(profile.into()))
}

/// DELETE /api/profile/experience/{exp_id}
///
/// Removing an id that is not in the list returns the profile unchanged.
pub async fn delete_experience(
    State(state): State<AppState>,
    user: AuthUser,
    Path(exp_id): Path<String>,
) -> ApiResult<Json<ProfileDto>> {
    let exp_id = parse_experience_id(&exp_id)?;

    let profile = state.experience_editor().remove(user.id, exp_id).await?;
    info!("Removed experience {} for user {}", exp_id, user.id);

    Ok(Json(profile.into()))
}

/// POST /api/profile/experience/{exp_id}
pub async fn update_experience(
    State(state): State<AppState>,
    user: AuthUser,
    Path(exp_id): Path<String>,
    payload: Result<Json<UpdateExperienceRequest>, JsonRejection>,
) -> ApiResult<Json<ProfileDto>> {
    let exp_id = parse_experience_id(&exp_id)?;
    let Json(req) = payload?;
    let patch = req.into_patch()?;

    let profile = state
        .experience_editor()
        .update(user.id, exp_id, patch)
        .await?;
    info!("Updated experience {} for user {}", exp_id, user.id);

    Ok(Json(profile.into()))
}

#[track_caller]
fn parse_experience_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|e| ApiError::Validation {
        message: format!("Invalid experience id: {}", e),
        field: Some("exp_id".to_string()),
        location: ErrorLocation::from(Location::caller()),
    })
}
