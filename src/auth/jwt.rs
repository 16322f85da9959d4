// Access token issuance and verification

use crate::config::AuthConfig;
use crate::domain::{Role, User};
use crate::errors::{AppError, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claim set embedded in an access token. This is also the identity handed
/// to handlers once the guard has verified a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Account ID as a string
    pub user_id: String,
    pub username: String,
    pub role: Role,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signs and verifies access tokens. Built once at startup from the auth
/// configuration and shared behind the application state.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry: Duration,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Result<Self> {
        if config.jwt_secret.is_empty() {
            return Err(AppError::Configuration(
                "JWT secret must not be empty".to_string(),
            ));
        }
        if config.jwt_expiration_hours <= 0 {
            return Err(AppError::Configuration(
                "JWT expiration must be positive".to_string(),
            ));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            expiry: Duration::hours(config.jwt_expiration_hours),
        })
    }

    /// Issue a signed token for an authenticated user
    pub fn issue(&self, user: &User) -> Result<String> {
        let claims = AccessClaims {
            user_id: user.id.to_string(),
            username: user.username.clone(),
            role: user.role()?,
            exp: (Utc::now() + self.expiry).timestamp(),
        };

        let header = Header::new(Algorithm::HS256);

        encode(&header, &claims, &self.encoding_key)
            .map_err(|e| AppError::TokenGeneration(format!("Failed to encode token: {}", e)))
    }

    /// Verify signature and expiry, returning the embedded claims.
    /// Every failure collapses into the same opaque error so callers cannot
    /// distinguish a tampered token from an expired one.
    pub fn verify(&self, token: &str) -> Result<AccessClaims> {
        let mut validation = Validation::new(Algorithm::HS256);
        // No clock slack: a token is invalid the second it expires
        validation.leeway = 0;

        let token_data = decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| AppError::InvalidToken)?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            jwt_expiration_hours: 1,
            admin_username: "admin".to_string(),
            admin_password: "Admin123!".to_string(),
        }
    }

    fn test_user() -> User {
        User::create("alice", "Str0ng!pass", "admin").unwrap()
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = TokenService::new(&test_config("test-signing-secret")).unwrap();
        let user = test_user();

        let token = service.issue(&user).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.user_id, user.id.to_string());
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.role, Role::Admin);
        assert!(claims.exp > Utc::now().timestamp());
    }

    #[test]
    fn test_claims_wire_shape() {
        let claims = AccessClaims {
            user_id: "42".to_string(),
            username: "alice".to_string(),
            role: Role::Operational,
            exp: 1_900_000_000,
        };
        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "user_id": "42",
                "username": "alice",
                "role": "operational",
                "exp": 1_900_000_000,
            })
        );
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = TokenService::new(&test_config("secret-one")).unwrap();
        let verifier = TokenService::new(&test_config("secret-two")).unwrap();

        let token = issuer.issue(&test_user()).unwrap();
        assert!(matches!(
            verifier.verify(&token).unwrap_err(),
            AppError::InvalidToken
        ));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let service = TokenService::new(&test_config("test-signing-secret")).unwrap();
        assert!(service.verify("not-a-token").is_err());
        assert!(service.verify("").is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = TokenService::new(&test_config("test-signing-secret")).unwrap();
        let user = test_user();

        let claims = AccessClaims {
            user_id: user.id.to_string(),
            username: user.username.clone(),
            role: Role::Admin,
            exp: (Utc::now() - Duration::hours(2)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &service.encoding_key,
        )
        .unwrap();

        assert!(matches!(
            service.verify(&token).unwrap_err(),
            AppError::InvalidToken
        ));
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(TokenService::new(&test_config("")).is_err());
    }
}
