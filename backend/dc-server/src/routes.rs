use crate::{
    AppState, add_experience, delete_account, delete_experience, get_my_profile,
    get_profile_by_user, health, list_profiles, update_experience, upsert_profile,
};

use axum::{
    Router,
    routing::{delete, get, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::index))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Profiles
        .route(
            "/api/profile",
            get(list_profiles).post(upsert_profile).delete(delete_account),
        )
        .route("/api/profile/me", get(get_my_profile))
        .route("/api/profile/user/{user_id}", get(get_profile_by_user))
        // Experience entries
        .route("/api/profile/experience", put(add_experience))
        .route(
            "/api/profile/experience/{exp_id}",
            delete(delete_experience).post(update_experience),
        )
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
