//! Route builders for the owner, account, and common endpoints.

mod account;
mod common;
mod owner;

pub use account::account_routes;
pub use common::common_routes;
pub use owner::owner_routes;
