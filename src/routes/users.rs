use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::models::{
    CreateUserRequest, ErrorResponse, FindMatchesResponse, Gender, HealthResponse, ListQuery,
    MatchQuery, UpdateUserRequest,
};
use crate::services::{StoreError, UserStore};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<UserStore>,
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure all user and matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/users", web::post().to(create_user))
        .route("/users", web::get().to(list_users))
        .route("/users/{id}", web::get().to(get_user))
        .route("/users/{id}", web::put().to(update_user))
        .route("/users/{id}", web::delete().to(delete_user))
        .route("/users/{id}/matches", web::get().to(find_matches));
}

/// Map a store failure to its HTTP response
fn store_error_response(err: &StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound(id) => HttpResponse::NotFound().json(ErrorResponse {
            error: "User not found".to_string(),
            message: format!("No user with id {}", id),
            status_code: 404,
        }),
        StoreError::EmailTaken(email) => HttpResponse::BadRequest().json(ErrorResponse {
            error: "Email already registered".to_string(),
            message: format!("The email {} is already in use", email),
            status_code: 400,
        }),
        other => HttpResponse::InternalServerError().json(ErrorResponse {
            error: "Storage error".to_string(),
            message: other.to_string(),
            status_code: 500,
        }),
    }
}

fn validation_error_response(errors: &validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn invalid_gender_response() -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Invalid gender".to_string(),
        message: "Gender must be one of: male, female, other".to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Register a new user
///
/// POST /api/v1/users
async fn create_user(
    state: web::Data<AppState>,
    req: web::Json<CreateUserRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for create_user request: {:?}", errors);
        return validation_error_response(&errors);
    }

    let gender = match req.gender.parse::<Gender>() {
        Ok(gender) => gender,
        Err(_) => return invalid_gender_response(),
    };

    match state.store.create_user(&req, gender).await {
        Ok(user) => {
            tracing::info!("Created user {} ({})", user.id, user.email);
            HttpResponse::Created().json(user)
        }
        Err(e) => {
            tracing::warn!("Failed to create user: {}", e);
            store_error_response(&e)
        }
    }
}

/// List users with pagination
///
/// GET /api/v1/users?skip=0&limit=100
async fn list_users(state: web::Data<AppState>, query: web::Query<ListQuery>) -> impl Responder {
    match state.store.list_users(query.skip, query.limit).await {
        Ok(users) => HttpResponse::Ok().json(users),
        Err(e) => {
            tracing::error!("Failed to list users: {}", e);
            store_error_response(&e)
        }
    }
}

/// Fetch a single user
///
/// GET /api/v1/users/{id}
async fn get_user(state: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    let id = path.into_inner();

    match state.store.get_user(id).await {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(e) => store_error_response(&e),
    }
}

/// Apply a partial update to a user
///
/// PUT /api/v1/users/{id}
///
/// Only the fields present in the payload are changed.
async fn update_user(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    req: web::Json<UpdateUserRequest>,
) -> impl Responder {
    let id = path.into_inner();

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for update_user({}): {:?}", id, errors);
        return validation_error_response(&errors);
    }

    if req.is_empty() {
        tracing::debug!("Empty patch for user {}, returning stored record", id);
    }

    let gender = match &req.gender {
        Some(raw) => match raw.parse::<Gender>() {
            Ok(gender) => Some(gender),
            Err(_) => return invalid_gender_response(),
        },
        None => None,
    };

    match state.store.update_user(id, &req, gender).await {
        Ok(user) => {
            tracing::info!("Updated user {}", user.id);
            HttpResponse::Ok().json(user)
        }
        Err(e) => store_error_response(&e),
    }
}

/// Delete a user
///
/// DELETE /api/v1/users/{id}
async fn delete_user(state: web::Data<AppState>, path: web::Path<i32>) -> impl Responder {
    let id = path.into_inner();

    match state.store.delete_user(id).await {
        Ok(()) => {
            tracing::info!("Deleted user {}", id);
            HttpResponse::NoContent().finish()
        }
        Err(e) => store_error_response(&e),
    }
}

/// Find matches for a user
///
/// GET /api/v1/users/{id}/matches?min_score=0.3&limit=10
///
/// Looks up the subject (404 when the id does not resolve), fetches the
/// opposite-gender candidate snapshot and ranks it with the matcher.
async fn find_matches(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    query: web::Query<MatchQuery>,
) -> impl Responder {
    let id = path.into_inner();

    let min_score = query.min_score.unwrap_or(state.matching.min_score);
    // Cap limit to keep response sizes bounded
    let limit = query
        .limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit) as usize;

    tracing::info!(
        "Finding matches for user {}, min_score: {}, limit: {}",
        id,
        min_score,
        limit
    );

    let subject = match state.store.get_user(id).await {
        Ok(user) => user,
        Err(e) => {
            tracing::info!("Subject lookup failed for {}: {}", id, e);
            return store_error_response(&e);
        }
    };

    let candidates = match state
        .store
        .opposite_gender_candidates(subject.gender.opposite(), subject.id)
        .await
    {
        Ok(candidates) => candidates,
        Err(e) => {
            tracing::error!("Failed to fetch candidates for {}: {}", id, e);
            return store_error_response(&e);
        }
    };

    tracing::debug!("Scoring {} candidates for user {}", candidates.len(), id);

    let result = state
        .matcher
        .find_matches(&subject, candidates, min_score, limit);

    let response = FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    };

    tracing::info!(
        "Returning {} matches for user {} (from {} candidates)",
        response.matches.len(),
        id,
        response.total_candidates
    );

    HttpResponse::Ok().json(response)
}
