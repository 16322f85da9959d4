// User management endpoints

use crate::api::routes::AppState;
use crate::auth::Identity;
use crate::db;
use crate::domain::User;
use crate::errors::{AppError, Result};
use crate::policy;
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// No Debug derive: carries a raw password
#[derive(Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
    pub role: String,
}

/// Public shape of an account. Built from [`User`] so the password hash
/// can never be serialized by accident.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
        }
    }
}

/// POST /users/register
///
/// Create an account (admin only)
pub async fn register(
    State(state): State<AppState>,
    Identity(claims): Identity,
    Json(req): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    policy::require_admin(&claims)?;

    if db::users::exists_by_username(&state.db_pool, &req.username).await? {
        return Err(AppError::Conflict(
            "A user with this username already exists.".to_string(),
        ));
    }

    let user = User::create(&req.username, &req.password, &req.role)?;
    let created = db::users::insert(&state.db_pool, &user).await?;
    tracing::info!(username = %created.username, role = %created.role, "Created user");

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /users
///
/// List every account (admin only)
pub async fn list(
    State(state): State<AppState>,
    Identity(claims): Identity,
) -> Result<Json<Vec<UserResponse>>> {
    policy::require_admin(&claims)?;

    let users = db::users::list(&state.db_pool).await?;
    if users.is_empty() {
        return Err(AppError::NotFound("No users found".to_string()));
    }

    Ok(Json(users.into_iter().map(Into::into).collect()))
}
