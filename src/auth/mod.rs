// Authentication: token service, password hashing, request guard

pub mod jwt;
pub mod middleware;
pub mod password;

pub use jwt::{AccessClaims, TokenService};
pub use middleware::{require_auth, Identity};
