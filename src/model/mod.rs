//! Entities and their wire DTOs.

pub mod account;
pub mod owner;

pub use account::{Account, AccountDto, AccountForCreation};
pub use owner::{Owner, OwnerDto, OwnerForCreation, OwnerForUpdate};
