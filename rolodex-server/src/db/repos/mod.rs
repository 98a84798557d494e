//! Repository implementations for database access
//!
//! Each repository borrows the pool and follows these patterns:
//! - Every read filters `deleted_at IS NULL`
//! - Writes stamp timestamps on the application side, then read the row back
//!   so callers see exactly what was stored (DATETIME(3) truncates)

pub mod addresses;
pub mod users;

pub use addresses::AddressRepo;
pub use users::UserRepo;
