//! Shared application state for all routes.

use crate::repository::{AccountRepository, OwnerRepository};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub owners: OwnerRepository,
    pub accounts: AccountRepository,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        AppState {
            owners: OwnerRepository::new(pool.clone()),
            accounts: AccountRepository::new(pool.clone()),
            pool,
        }
    }
}
