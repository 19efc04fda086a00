use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer <token>` header.
    #[error("No authorization token was found")]
    MissingToken,

    /// The bearer token failed signature or claim validation.
    #[error("Invalid authorization token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// Both variants map to 401 Unauthorized. The validation failure reason is logged at
/// debug level but not returned to the client.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let message = match self {
            Self::MissingToken => "No authorization token was found",
            Self::InvalidToken(_) => "Invalid authorization token",
        };

        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
