//! Owner/Account REST API: CRUD over PostgreSQL with paged, sorted, and
//! field-shaped listings.

pub mod config;
pub mod error;
pub mod handlers;
pub mod links;
pub mod model;
pub mod query;
pub mod repository;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::AppError;
pub use routes::{account_routes, common_routes, owner_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
