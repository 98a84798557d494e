//! Route handlers organized by resource

pub mod addresses;
pub mod health;
pub mod users;
