pub mod pool;
pub mod service_types;
pub mod suppliers;
pub mod users;

pub use pool::{create_pool, health_check, run_migrations};
