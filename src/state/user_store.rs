// User store
// Owns the collection of users and the ID counter

use crate::state::user::{User, UserId};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Store shared between request handlers
///
/// One lock guards both the collection and the counter, so ID uniqueness and
/// monotonicity hold under a multi-threaded runtime.
pub type SharedStore = Arc<RwLock<UserStore>>;

/// In-memory user collection
///
/// Users are kept in insertion order. IDs come from a counter that starts at 1,
/// advances only on a successful create and is never rewound, so an ID is never
/// handed out twice during the lifetime of the store.
#[derive(Debug, Clone)]
pub struct UserStore {
    users: Vec<User>,
    next_id: UserId,
}

impl Default for UserStore {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a new empty store for sharing across handlers
    pub fn shared() -> SharedStore {
        Arc::new(RwLock::new(Self::new()))
    }

    /// Add a user with the next available ID
    /// Returns the stored user, or the validation message if a field is missing.
    /// A rejected user leaves both the collection and the counter untouched.
    pub fn create(&mut self, name: String, phone: String) -> Result<User, String> {
        let user = User::new(self.next_id, name, phone);
        user.validate()?;

        self.next_id += 1;
        self.users.push(user.clone());
        Ok(user)
    }

    /// All users in insertion order
    pub fn list(&self) -> &[User] {
        &self.users
    }

    /// Get a user by ID
    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    /// Overwrite a user's name and phone
    /// No presence check is applied here, unlike `create`.
    /// Returns the updated user if it exists
    pub fn update(&mut self, id: UserId, name: String, phone: String) -> Option<&User> {
        let user = self.users.iter_mut().find(|user| user.id == id)?;
        user.name = name;
        user.phone = phone;
        Some(user)
    }

    /// Remove a user from the store
    /// Returns the removed user if it existed
    pub fn remove(&mut self, id: UserId) -> Option<User> {
        let index = self.users.iter().position(|user| user.id == id)?;
        Some(self.users.remove(index))
    }

    /// Number of users currently stored
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the store holds no users
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// ID the next successful create will receive
    pub fn next_id(&self) -> UserId {
        self.next_id
    }
}
