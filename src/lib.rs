//! Matchbook - user registry and compatibility matching service
//!
//! This library provides the compatibility scoring core used by the
//! Matchbook app, plus the surrounding user registry. The core is a pure
//! function suite over user snapshots; storage and transport live in the
//! `services` and `routes` layers.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{
    interests::{interest_set, jaccard_index},
    Matcher,
};
pub use crate::models::{FindMatchesResponse, Gender, MatchWeights, ScoredMatch, User};
