// State management module
// Holds the user records and the store that owns them

pub mod user;
pub mod user_store;

pub use user::{User, UserId};
pub use user_store::{SharedStore, UserStore};
