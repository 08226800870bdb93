use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to register a new user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 18, max = 100))]
    pub age: i32,
    pub gender: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub city: String,
    #[validate(length(min = 1))]
    pub interests: String,
}

/// Partial update for a user
///
/// Only the fields present in the payload are applied; everything else is
/// left untouched.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(range(min = 18, max = 100))]
    pub age: Option<i32>,
    pub gender: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1))]
    pub city: Option<String>,
    #[validate(length(min = 1))]
    pub interests: Option<String>,
}

impl UpdateUserRequest {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.gender.is_none()
            && self.email.is_none()
            && self.city.is_none()
            && self.interests.is_none()
    }
}

/// Pagination for the user listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_list_limit")]
    pub limit: i64,
}

fn default_list_limit() -> i64 {
    100
}

/// Query parameters for the matches endpoint
///
/// Missing values fall back to the configured defaults (min_score 0.3,
/// limit 10).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchQuery {
    pub min_score: Option<f64>,
    pub limit: Option<u16>,
}
