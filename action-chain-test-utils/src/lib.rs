pub mod builder;
pub mod constant;
pub mod error;
pub mod fixtures;
pub mod setup;

pub use builder::FixtureBuilder;
pub use error::FixtureError;
pub use setup::init_tracing;

pub mod prelude {
    pub use crate::{
        fixtures::{
            controller::{AccountController, HomeController},
            model::{ErrorDto, ProfileDto},
        },
        init_tracing, FixtureBuilder, FixtureError,
    };
}
