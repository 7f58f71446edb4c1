//! PostgreSQL repositories for owners and accounts.

mod account;
mod owner;

pub use account::AccountRepository;
pub use owner::OwnerRepository;
