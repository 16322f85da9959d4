pub mod auth;
pub mod health;
pub mod routes;
pub mod suppliers;
pub mod users;

pub use routes::create_router;
