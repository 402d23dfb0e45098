//! Mock authentication session for the auction dashboard.
//!
//! [`Session`] owns the signed-in user and mirrors it to a [`SessionStore`].
//! The app supplies a browser-backed store; tests use [`MemoryStore`] or
//! [`FileStore`].

pub mod accounts;
pub mod session;
pub mod store;

pub use accounts::{authenticate, mock_users, DEMO_PASSWORD};
pub use session::{Session, INVALID_CREDENTIALS};
pub use store::{FileStore, MemoryStore, SessionStore, StoreError};
