//! User record

use serde::{Deserialize, Serialize};

use super::{Address, RecordMeta};

/// A user, optionally pointing at one address.
///
/// `address_id` is 0 when unset. `address` holds the referenced live address,
/// or the zero-valued `Address` (id 0) when there is none; it is never
/// written back by a save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct User {
    #[serde(flatten)]
    pub meta: RecordMeta,
    pub name: String,
    pub email: String,
    pub address_id: u64,
    pub address: Address,
}

impl User {
    pub fn id(&self) -> u64 {
        self.meta.id
    }
}

/// Writable user fields from a request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPayload {
    pub name: Option<String>,
    pub email: Option<String>,
    pub address_id: Option<u64>,
}

impl UserPayload {
    /// Copy the present fields onto `user`.
    pub fn overlay(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(address_id) = self.address_id {
            user.address_id = address_id;
        }
    }

    /// Blank user with the present fields applied
    pub fn into_draft(self) -> User {
        let mut draft = User::default();
        self.overlay(&mut draft);
        draft
    }
}
