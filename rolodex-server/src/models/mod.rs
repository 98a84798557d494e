//! Domain records and their write payloads
//!
//! Records serialize with the base fields as `ID`, `CreatedAt`, `UpdatedAt`
//! and `DeletedAt`, and the resource fields in snake_case.
//!
//! Payloads carry only the writable fields, each optional. A missing (or
//! `null`) field leaves the target value untouched, so the same payload type
//! serves both create (overlay onto a blank record) and update (overlay onto
//! the stored record).

pub mod address;
pub mod meta;
pub mod user;

pub use address::{Address, AddressPayload};
pub use meta::RecordMeta;
pub use user::{User, UserPayload};
