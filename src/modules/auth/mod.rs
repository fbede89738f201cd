pub mod service;
pub mod session;
pub mod store;

// Re-export the main types and functions
pub use service::{hash_password, login, register};
pub use session::Session;
pub use store::{CredentialStore, MemberRecord, StoreError};
