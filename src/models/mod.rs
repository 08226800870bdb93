// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Gender, MatchWeights, ScoredMatch, User};
pub use requests::{CreateUserRequest, ListQuery, MatchQuery, UpdateUserRequest};
pub use responses::{ErrorResponse, FindMatchesResponse, HealthResponse};
