use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect},
    Json,
};

use crate::{
    constant::{TEST_LOGIN_PATH, TEST_REQUEST_ID_HEADER, TEST_SITE_TITLE},
    error::FixtureError,
    fixtures::model::ProfileDto,
};

/// Controller rendering pages.
#[derive(Debug, Clone)]
pub struct HomeController {
    pub title: String,
}

impl Default for HomeController {
    fn default() -> Self {
        Self {
            title: TEST_SITE_TITLE.to_string(),
        }
    }
}

impl HomeController {
    /// Renders the landing page.
    pub async fn index(&self) -> Html<String> {
        Html(format!("<h1>{}</h1>", self.title))
    }

    /// Old address of the landing page.
    pub async fn legacy_index(&self) -> Redirect {
        Redirect::permanent("/")
    }

    pub async fn health(&self) -> StatusCode {
        StatusCode::NO_CONTENT
    }
}

/// Controller over an in-memory user store with an optional signed-in user.
#[derive(Debug, Clone, Default)]
pub struct AccountController {
    pub users: BTreeMap<i32, String>,
    pub session_user_id: Option<i32>,
}

impl AccountController {
    pub async fn profile(&self, user_id: i32) -> Result<Json<ProfileDto>, FixtureError> {
        let name = self
            .users
            .get(&user_id)
            .ok_or(FixtureError::UserNotFound(user_id))?;

        Ok(Json(ProfileDto {
            id: user_id,
            name: name.clone(),
        }))
    }

    /// Profile of the signed-in user, or a redirect to the login page.
    pub async fn current(&self) -> Result<impl IntoResponse, FixtureError> {
        let Some(user_id) = self.session_user_id else {
            return Ok(Redirect::to(TEST_LOGIN_PATH).into_response());
        };

        Ok(self.profile(user_id).await?.into_response())
    }

    /// Validates a new profile name and echoes the would-be profile.
    pub async fn rename(&self, user_id: i32, name: &str) -> Result<impl IntoResponse, FixtureError> {
        if name.trim().is_empty() {
            return Err(FixtureError::EmptyName);
        }

        if self.session_user_id != Some(user_id) {
            return Err(FixtureError::NotSignedIn);
        }

        Ok((
            StatusCode::ACCEPTED,
            [(TEST_REQUEST_ID_HEADER, format!("rename-{}", user_id))],
            Json(ProfileDto {
                id: user_id,
                name: name.to_string(),
            }),
        ))
    }
}
