use axum::http::{header::AUTHORIZATION, HeaderMap};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

const BEARER_PREFIX: &str = "Bearer ";

/// Claims carried by API bearer tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

pub struct AuthGuard<'a> {
    secret: &'a str,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(secret: &'a str, headers: &'a HeaderMap) -> Self {
        Self { secret, headers }
    }

    /// Validates the request's HS256 bearer token.
    ///
    /// # Returns
    /// - `Ok(Claims)` - The token is signed with the configured secret and not expired
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken)` - Bad signature, malformed or expired token
    pub fn require(&self) -> Result<Claims, AppError> {
        let Some(token) = self
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        else {
            return Err(AuthError::MissingToken.into());
        };

        let data = decode::<Claims>(
            token.trim(),
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(AuthError::InvalidToken)?;

        Ok(data.claims)
    }
}
