pub mod io;
pub mod logging;
pub mod time;

pub use io::{read_line, read_required_field};
pub use logging::{initialize_logging, log_auth_event};
pub use time::{current_date_string, current_timestamp_string};
