//! Address record

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::RecordMeta;

/// Postal address, referenced by users through `address_id`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, FromRow)]
pub struct Address {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub meta: RecordMeta,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Address {
    pub fn id(&self) -> u64 {
        self.meta.id
    }
}

/// Writable address fields from a request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressPayload {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl AddressPayload {
    /// Copy the present fields onto `address`.
    pub fn overlay(self, address: &mut Address) {
        if let Some(street) = self.street {
            address.street = street;
        }
        if let Some(city) = self.city {
            address.city = city;
        }
        if let Some(state) = self.state {
            address.state = state;
        }
        if let Some(zip_code) = self.zip_code {
            address.zip_code = zip_code;
        }
    }

    /// Blank address with the present fields applied
    pub fn into_draft(self) -> Address {
        let mut draft = Address::default();
        self.overlay(&mut draft);
        draft
    }
}
