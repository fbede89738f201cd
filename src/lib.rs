// First, declare the modules folder itself
mod modules;

// Re-export everything from modules for easier access
pub use modules::{
    auth,
    portal,
    utils,
};

// Re-export commonly used types
pub use modules::auth::session::Session;
pub use modules::auth::store::{CredentialStore, MemberRecord, StoreError};

// Constants
pub const DATA_FILE: &str = "members.json";
pub const ADMIN_PHONE: &str = "919392540435";
pub const WHATSAPP_BASE_URL: &str = "https://wa.me";
