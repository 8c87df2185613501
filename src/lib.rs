//! User Store Service Library
//!
//! In-memory CRUD service for user records (name, phone) over HTTP.
//! The binary in `src/main.rs` wires configuration, logging and the server;
//! everything else lives here so it can be exercised from tests.

pub mod api;
pub mod config;
pub mod error;
/// User records and the in-memory store that owns them
pub mod state;
