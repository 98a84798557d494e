//! Database layer - connection pool, schema sync and repositories
//!
//! # Design Principles
//!
//! - One shared connection pool, handed out explicitly (no global handle)
//! - User reads attach their address with a LEFT JOIN (no N+1)
//! - Soft delete: rows get `deleted_at` set and drop out of every read
//! - No transactions; update is read, write, read back

pub mod error;
pub mod migrations;
pub mod mysql;
pub mod pool;
pub mod repos;
pub mod store;

pub use error::{DbError, Resource};
pub use mysql::MySqlStore;
pub use pool::create_pool;
pub use repos::{AddressRepo, UserRepo};
pub use store::Store;
