//! Database error type

use std::fmt;

/// Which record kind an operation touched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    User,
    Address,
}

impl Resource {
    /// Capitalised name used in response text
    pub fn title(self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Address => "Address",
        }
    }

    /// Lowercase singular name
    pub fn name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Address => "address",
        }
    }

    /// Lowercase plural name, also the route prefix
    pub fn plural(self) -> &'static str {
        match self {
            Self::User => "users",
            Self::Address => "addresses",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: Resource, id: u64 },
}

impl DbError {
    pub fn not_found(resource: Resource, id: u64) -> Self {
        Self::NotFound { resource, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message() {
        let err = DbError::not_found(Resource::Address, 12);
        assert_eq!(err.to_string(), "not found: address '12'");
    }

    #[test]
    fn resource_names() {
        assert_eq!(Resource::User.title(), "User");
        assert_eq!(Resource::Address.plural(), "addresses");
    }
}
