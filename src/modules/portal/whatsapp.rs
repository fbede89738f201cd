use itertools::Itertools;
use urlencoding::encode;

use crate::{ADMIN_PHONE, WHATSAPP_BASE_URL};

/// Issue categories offered on the complaint form
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IssueType {
    StreetLight,
    Road,
    Drainage,
    Other,
}

impl IssueType {
    pub const ALL: &'static [IssueType] = &[
        IssueType::StreetLight,
        IssueType::Road,
        IssueType::Drainage,
        IssueType::Other,
    ];

    /// Map a 1-based menu choice to an issue type
    pub fn from_menu_choice(choice: &str) -> Option<IssueType> {
        match choice {
            "1" => Some(IssueType::StreetLight),
            "2" => Some(IssueType::Road),
            "3" => Some(IssueType::Drainage),
            "4" => Some(IssueType::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueType::StreetLight => write!(f, "Street Light"),
            IssueType::Road => write!(f, "Road"),
            IssueType::Drainage => write!(f, "Drainage"),
            IssueType::Other => write!(f, "Other"),
        }
    }
}

/// Build a plain tap-to-chat link for a contact number
pub fn contact_link(number: &str) -> String {
    format!("{}/{}", WHATSAPP_BASE_URL, number)
}

// Lines are joined with a literal %0A so the message renders as separate
// lines in the chat. Labels and the *bold* header stay as-is; only the
// free-text values get percent-encoded by the callers.
fn message_link(number: &str, lines: &[String]) -> String {
    let text = lines.iter().join("%0A");
    format!("{}/{}?text={}", WHATSAPP_BASE_URL, number, text)
}

/// Pre-filled attendance confirmation, addressed to the admin number
pub fn attendance_link(member_name: &str, date: &str) -> String {
    message_link(
        ADMIN_PHONE,
        &[
            "*Attendance*".to_string(),
            format!("Name:{}", encode(member_name)),
            format!("Date:{}", encode(date)),
        ],
    )
}

/// Pre-filled complaint message, addressed to the admin number. The free
/// text is percent-encoded but otherwise passed through untouched.
pub fn complaint_link(member_name: &str, area: &str, issue: IssueType, details: &str) -> String {
    message_link(
        ADMIN_PHONE,
        &[
            "*Complaint*".to_string(),
            format!("Name:{}", encode(member_name)),
            format!("Area:{}", encode(area)),
            format!("Issue:{}", encode(&issue.to_string())),
            format!("Details:{}", encode(details)),
        ],
    )
}
