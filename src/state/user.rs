// User record
// A single entry of the collection plus its presence rules

use serde::{Deserialize, Serialize};

/// Unique identifier for a user
pub type UserId = u64;

/// User structure
/// Represents a stored record; `id` is assigned by the store and never changes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Unique identifier, assigned on creation
    pub id: UserId,
    /// Display name of the user
    pub name: String,
    /// Phone number, stored as given
    pub phone: String,
}

impl User {
    /// Create a new user with the given ID, name, and phone
    pub fn new(id: UserId, name: String, phone: String) -> Self {
        Self { id, name, phone }
    }

    /// Validate the presence of the required fields
    /// Returns Ok(()) if valid, Err with message if invalid
    ///
    /// Only emptiness is checked; whitespace counts as a value.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("User name cannot be empty".to_string());
        }
        if self.phone.is_empty() {
            return Err("User phone cannot be empty".to_string());
        }
        Ok(())
    }

    /// Parse a path segment into a user ID
    /// Returns None for anything that is not a plain base-10 integer
    pub fn parse_id(raw: &str) -> Option<UserId> {
        raw.parse::<UserId>().ok()
    }
}
