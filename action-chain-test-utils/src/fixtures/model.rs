use serde::{Deserialize, Serialize};

/// The response when an action fails
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// Public profile of a user
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProfileDto {
    pub id: i32,
    pub name: String,
}
