//! Declarative builder for fixture controllers.
//!
//! Queues users and session state, then produces controllers configured with them in `build()`.

use crate::fixtures::controller::{AccountController, HomeController};

/// Controllers produced by [`FixtureBuilder::build`].
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub home: HomeController,
    pub account: AccountController,
}

/// Builder for fixture controllers.
#[derive(Debug, Default)]
pub struct FixtureBuilder {
    title: Option<String>,
    users: Vec<(i32, String)>,
    session_user_id: Option<i32>,
}

impl FixtureBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the title rendered by `HomeController::index`.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Adds a user to the account store.
    ///
    /// # Arguments
    /// - `user_id` - ID of the user
    /// - `name` - Display name of the user
    pub fn with_user(mut self, user_id: i32, name: impl Into<String>) -> Self {
        self.users.push((user_id, name.into()));
        self
    }

    /// Marks `user_id` as signed in. The user does not have to exist in the store.
    pub fn signed_in_as(mut self, user_id: i32) -> Self {
        self.session_user_id = Some(user_id);
        self
    }

    pub fn build(self) -> Fixtures {
        let mut home = HomeController::default();
        if let Some(title) = self.title {
            home.title = title;
        }

        let account = AccountController {
            users: self.users.into_iter().collect(),
            session_user_id: self.session_user_id,
        };

        Fixtures { home, account }
    }
}
