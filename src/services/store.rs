use crate::models::{CreateUserRequest, Gender, UpdateUserRequest, User};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with the user store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("User not found: {0}")]
    NotFound(i32),

    #[error("Email already registered: {0}")]
    EmailTaken(String),
}

/// PostgreSQL-backed user registry
///
/// Owns all persistence and record-level concerns; the matching core only
/// ever sees read-only `User` snapshots produced here.
pub struct UserStore {
    pool: PgPool,
}

impl UserStore {
    /// Connect to PostgreSQL and run pending migrations
    pub async fn connect(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Register a new user
    ///
    /// Rejects the request when the email is already taken.
    pub async fn create_user(
        &self,
        req: &CreateUserRequest,
        gender: Gender,
    ) -> Result<User, StoreError> {
        if self.email_exists(&req.email, None).await? {
            return Err(StoreError::EmailTaken(req.email.clone()));
        }

        let query = r#"
            INSERT INTO users (name, age, gender, email, city, interests)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, age, gender, email, city, interests
        "#;

        let row = sqlx::query(query)
            .bind(&req.name)
            .bind(req.age)
            .bind(gender)
            .bind(&req.email)
            .bind(&req.city)
            .bind(&req.interests)
            .fetch_one(&self.pool)
            .await?;

        let user = row_to_user(&row);

        tracing::debug!("Created user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Fetch a user by id
    pub async fn get_user(&self, id: i32) -> Result<User, StoreError> {
        let query = r#"
            SELECT id, name, age, gender, email, city, interests
            FROM users
            WHERE id = $1
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))?;

        Ok(row_to_user(&row))
    }

    /// List users with offset/limit pagination
    pub async fn list_users(&self, skip: i64, limit: i64) -> Result<Vec<User>, StoreError> {
        let query = r#"
            SELECT id, name, age, gender, email, city, interests
            FROM users
            ORDER BY id
            OFFSET $1 LIMIT $2
        "#;

        let rows = sqlx::query(query)
            .bind(skip.max(0))
            .bind(limit.max(0))
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(row_to_user).collect())
    }

    /// Apply a partial update to a user
    ///
    /// Only fields present in the patch are written; the rest keep their
    /// stored values via COALESCE.
    pub async fn update_user(
        &self,
        id: i32,
        patch: &UpdateUserRequest,
        gender: Option<Gender>,
    ) -> Result<User, StoreError> {
        // Duplicate-email check only when an email is supplied
        if let Some(email) = &patch.email {
            if self.email_exists(email, Some(id)).await? {
                return Err(StoreError::EmailTaken(email.clone()));
            }
        }

        let query = r#"
            UPDATE users SET
                name = COALESCE($2, name),
                age = COALESCE($3, age),
                gender = COALESCE($4, gender),
                email = COALESCE($5, email),
                city = COALESCE($6, city),
                interests = COALESCE($7, interests)
            WHERE id = $1
            RETURNING id, name, age, gender, email, city, interests
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .bind(&patch.name)
            .bind(patch.age)
            .bind(gender)
            .bind(&patch.email)
            .bind(&patch.city)
            .bind(&patch.interests)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound(id))?;

        let user = row_to_user(&row);

        tracing::debug!("Updated user {}", user.id);

        Ok(user)
    }

    /// Delete a user by id
    pub async fn delete_user(&self, id: i32) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }

        tracing::debug!("Deleted user {}", id);

        Ok(())
    }

    /// Candidate snapshot for matching: all users of the given gender,
    /// excluding the subject
    ///
    /// The matching core re-applies the same filter; this just keeps the
    /// snapshot small.
    pub async fn opposite_gender_candidates(
        &self,
        gender: Gender,
        exclude_id: i32,
    ) -> Result<Vec<User>, StoreError> {
        let query = r#"
            SELECT id, name, age, gender, email, city, interests
            FROM users
            WHERE gender = $1 AND id != $2
        "#;

        let rows = sqlx::query(query)
            .bind(gender)
            .bind(exclude_id)
            .fetch_all(&self.pool)
            .await?;

        let candidates: Vec<User> = rows.iter().map(row_to_user).collect();

        tracing::debug!(
            "Fetched {} {} candidates (excluding user {})",
            candidates.len(),
            gender,
            exclude_id
        );

        Ok(candidates)
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }

    async fn email_exists(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, StoreError> {
        let query = r#"
            SELECT COUNT(*) AS hits
            FROM users
            WHERE email = $1 AND ($2::int4 IS NULL OR id != $2)
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .bind(exclude_id)
            .fetch_one(&self.pool)
            .await?;

        let hits: i64 = row.get("hits");
        Ok(hits > 0)
    }
}

fn row_to_user(row: &sqlx::postgres::PgRow) -> User {
    User {
        id: row.get("id"),
        name: row.get("name"),
        age: row.get("age"),
        gender: row.get("gender"),
        email: row.get("email"),
        city: row.get("city"),
        interests: row.get("interests"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_messages() {
        assert_eq!(StoreError::NotFound(7).to_string(), "User not found: 7");
        assert_eq!(
            StoreError::EmailTaken("a@b.com".to_string()).to_string(),
            "Email already registered: a@b.com"
        );
    }
}
