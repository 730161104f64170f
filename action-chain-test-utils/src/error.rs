use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::fixtures::model::ErrorDto;

/// Errors returned by the fixture controllers' actions.
#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("User {0:?} not found")]
    UserNotFound(i32),
    #[error("User ID is not present in session")]
    NotSignedIn,
    #[error("Profile name must not be empty")]
    EmptyName,
}

impl IntoResponse for FixtureError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::UserNotFound(_) => StatusCode::NOT_FOUND,
            Self::NotSignedIn => StatusCode::UNAUTHORIZED,
            Self::EmptyName => StatusCode::BAD_REQUEST,
        };

        tracing::debug!("{}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
