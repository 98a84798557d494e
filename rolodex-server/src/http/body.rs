//! Path id and request body decoding
//!
//! Handlers take the raw path segment and raw body bytes and decode them
//! here, so a PUT checks existence before it looks at the body.

use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::db::error::Resource;

/// Parse a path id. Anything that is not a non-negative integer cannot name a
/// row, so it is reported as NotFound.
pub fn parse_id(raw: &str, resource: Resource) -> Result<u64, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::NotFound(resource))
}

/// Decode a JSON request body, keeping the parser message on failure.
///
/// A literal `null` body decodes to the empty payload: nothing to apply.
pub fn decode_json<T: DeserializeOwned + Default>(bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice::<Option<T>>(bytes)
        .map(Option::unwrap_or_default)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddressPayload, UserPayload};

    #[test]
    fn numeric_ids_parse() {
        assert_eq!(parse_id("42", Resource::User).unwrap(), 42);
    }

    #[test]
    fn non_numeric_ids_are_not_found() {
        for raw in ["abc", "-1", "", "1.5"] {
            let err = parse_id(raw, Resource::Address).unwrap_err();
            assert!(matches!(err, ApiError::NotFound(Resource::Address)), "{raw}");
        }
    }

    #[test]
    fn malformed_body_keeps_message() {
        let err = decode_json::<UserPayload>(b"not-json").unwrap_err();
        match err {
            ApiError::Decode(message) => assert!(!message.is_empty()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_body_is_a_decode_error() {
        assert!(matches!(
            decode_json::<UserPayload>(b""),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn null_body_is_the_empty_payload() {
        let payload = decode_json::<AddressPayload>(b" null ").unwrap();
        assert!(payload.street.is_none());
        assert!(payload.city.is_none());
    }

    #[test]
    fn non_object_body_is_a_decode_error() {
        assert!(matches!(
            decode_json::<UserPayload>(br#""just text""#),
            Err(ApiError::Decode(_))
        ));
    }
}
