use chrono::Local;

/// Timestamp string recorded in a member's joined_on field
pub fn current_timestamp_string() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Date string used in attendance messages (dd-mm-YYYY)
pub fn current_date_string() -> String {
    Local::now().format("%d-%m-%Y").to_string()
}
