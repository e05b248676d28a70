pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_user::AuthUser,
    profiles::{
        add_experience_request::AddExperienceRequest,
        create_profile_request::CreateProfileRequest,
        delete_response::DeleteResponse,
        experience::{add_experience, delete_experience, update_experience},
        profile_dto::{ProfileDto, ProfileOwner},
        profiles::{
            delete_account, get_my_profile, get_profile_by_user, list_profiles, upsert_profile,
        },
        update_experience_request::UpdateExperienceRequest,
    },
};
pub use app_state::AppState;
pub use routes::build_router;
