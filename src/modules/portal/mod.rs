pub mod contacts;
pub mod programs;
pub mod user_interface;
pub mod whatsapp;

// Re-export the main types and functions
pub use programs::{Program, PROGRAMS};
pub use user_interface::{handle_member_session, main_auth_flow};
pub use whatsapp::{attendance_link, complaint_link, contact_link, IssueType};
