//! Fixture controllers and models shared by the integration tests.

pub mod controller;
pub mod model;
