use super::DomainError;
use crate::auth::password;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Access role carried in tokens and checked by the policy layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Operational,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Operational => "operational",
            Role::Admin => "admin",
        }
    }

    /// Exact-match parse against the two known roles
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "operational" => Ok(Role::Operational),
            "admin" => Ok(Role::Admin),
            _ => Err(DomainError::InvalidRole),
        }
    }
}

/// Account able to authenticate against the registry. Only the password
/// hash is ever stored; response serialization goes through
/// `api::users::UserResponse` so the hash never leaves this type.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub role: String,
}

impl User {
    /// Build a new account. The password must satisfy the strength policy
    /// and is hashed before the value exists, so a weak password never
    /// produces a storable user.
    pub fn create(username: &str, password: &str, role: &str) -> Result<User, AppError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(DomainError::Empty("Username").into());
        }
        let role = Role::parse(role)?;
        let password_hash = password::hash_password(password)?;

        Ok(User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash,
            role: role.as_str().to_string(),
        })
    }

    pub fn role(&self) -> Result<Role, AppError> {
        Role::parse(&self.role).map_err(|_| {
            AppError::Internal(format!("User {} has an unrecognized role", self.id))
        })
    }
}
