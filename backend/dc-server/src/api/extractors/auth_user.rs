//! Axum extractor for the authenticated caller

use crate::{ApiError, AppState};

use dc_core::User;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header::AUTHORIZATION, request::Parts},
};
use uuid::Uuid;

pub const USER_ID_HEADER: &str = "X-User-Id";
pub const USER_NAME_HEADER: &str = "X-User-Name";
pub const USER_EMAIL_HEADER: &str = "X-User-Email";

const DEFAULT_USER_NAME: &str = "Developer";

/// The caller, as established by the bearer token.
///
/// With auth disabled the identity comes from the `X-User-Id` header (plus
/// optional `X-User-Name` / `X-User-Email`), which is only meant for local
/// development.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
}

impl AuthUser {
    /// Account row for this caller, filling gaps the token did not carry.
    pub fn to_user(&self) -> User {
        let mut user = User::new(
            self.id,
            self.name
                .clone()
                .unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
            self.email
                .clone()
                .unwrap_or_else(|| format!("{}@users.devconnector.local", self.id)),
        );
        user.avatar = self.avatar.clone();
        user
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let headers = &parts.headers;

            let Some(validator) = &state.jwt_validator else {
                return from_dev_headers(headers);
            };

            let header = headers
                .get(AUTHORIZATION)
                .map(|value| value.to_str())
                .transpose()
                .map_err(|_| ApiError::unauthorized("Authorization header is not valid text"))?;

            let (id, claims) = validator.authenticate(header)?;

            log::debug!("Authenticated user {}", id);

            Ok(AuthUser {
                id,
                name: claims.name,
                email: claims.email,
                avatar: claims.avatar,
            })
        }
    }
}

fn from_dev_headers(headers: &HeaderMap) -> Result<AuthUser, ApiError> {
    let text = |name: &str| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    };

    let raw = text(USER_ID_HEADER)
        .ok_or_else(|| ApiError::unauthorized("No user id, authorization denied"))?;

    let id = Uuid::parse_str(&raw).map_err(|_| {
        log::warn!("Invalid UUID in {} header: {}", USER_ID_HEADER, raw);
        ApiError::unauthorized(format!("{} must be a UUID", USER_ID_HEADER))
    })?;

    log::debug!("Using user ID from {} header: {}", USER_ID_HEADER, id);

    Ok(AuthUser {
        id,
        name: text(USER_NAME_HEADER),
        email: text(USER_EMAIL_HEADER),
        avatar: None,
    })
}
