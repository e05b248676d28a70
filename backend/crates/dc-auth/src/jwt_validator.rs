use crate::{AuthError, Claims, Result as AuthErrorResult, parse_bearer};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::errors::{Error as JwtError, ErrorKind};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use uuid::Uuid;

/// Tolerated clock skew between the token issuer and this server.
const LEEWAY_SECS: u64 = 30;

/// Checks bearer tokens issued for DevConnector users.
///
/// Tokens must carry `sub` (the user's UUID) and `exp`. `nbf` is honoured
/// when present.
pub struct JwtValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtValidator {
    /// Shared-secret tokens
    pub fn with_hs256(secret: &[u8]) -> Self {
        Self::new(DecodingKey::from_secret(secret), Algorithm::HS256)
    }

    /// Tokens signed by an external issuer; `public_key_pem` is its RSA key.
    #[track_caller]
    pub fn with_rs256(public_key_pem: &str) -> AuthErrorResult<Self> {
        let decoding_key = DecodingKey::from_rsa_pem(public_key_pem.as_bytes()).map_err(|e| {
            AuthError::InvalidToken {
                message: format!("Invalid RSA public key: {}", e),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(Self::new(decoding_key, Algorithm::RS256))
    }

    fn new(decoding_key: DecodingKey, algorithm: Algorithm) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.validate_nbf = true;
        validation.leeway = LEEWAY_SECS;

        Self {
            decoding_key,
            validation,
        }
    }

    /// Resolve an `Authorization` header value to the caller's user id and
    /// the profile hints carried in the token.
    #[track_caller]
    pub fn authenticate(&self, authorization: Option<&str>) -> AuthErrorResult<(Uuid, Claims)> {
        let token = parse_bearer(authorization)?;
        let claims = self.validate(token)?;
        let user_id = claims.user_id()?;
        Ok((user_id, claims))
    }

    /// Check signature, expiry and claim shape of a raw token.
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| decode_error(e))?;

        token_data.claims.validate()?;

        Ok(token_data.claims)
    }

    /// Algorithm name, for the startup log
    pub fn algorithm(&self) -> &'static str {
        match self.validation.algorithms.first() {
            Some(Algorithm::HS256) => "HS256",
            Some(Algorithm::RS256) => "RS256",
            _ => "unknown",
        }
    }
}

#[track_caller]
fn decode_error(e: JwtError) -> AuthError {
    let location = ErrorLocation::from(Location::caller());
    match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired { location },
        ErrorKind::ImmatureSignature => AuthError::InvalidToken {
            message: "Token is not valid yet".to_string(),
            location,
        },
        ErrorKind::MissingRequiredClaim(claim) => AuthError::InvalidClaim {
            claim: claim.clone(),
            message: "Claim is required".to_string(),
            location,
        },
        _ => AuthError::JwtDecode {
            source: e,
            location,
        },
    }
}
