use env_logger::{Builder, WriteStyle};
use log::{info, warn, LevelFilter};

/// Initialize the logging system with console output
pub fn initialize_logging() -> Result<(), Box<dyn std::error::Error>> {
    Builder::new()
        // Set default log level
        .filter_level(LevelFilter::Info)
        // Enable timestamps
        .format_timestamp_secs()
        // Enable module path in logs
        .format_module_path(true)
        // Set colored output for console
        .write_style(WriteStyle::Auto)
        .try_init()?;

    info!("Logging system initialized");
    Ok(())
}

/// Helper function to mask a phone number before it reaches the log. The
/// phone is unvalidated free text, so the mask works on characters rather
/// than byte offsets.
fn format_sensitive(text: &str) -> String {
    let count = text.chars().count();
    if count <= 4 {
        return "*".repeat(count);
    }
    let head: String = text.chars().take(2).collect();
    let tail: String = text.chars().skip(count - 2).collect();
    format!("{}***{}", head, tail)
}

/// Add structured logging for authentication events
pub fn log_auth_event(event_type: &str, phone: &str, success: bool, details: Option<&str>) {
    let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
    if success {
        info!(
            "Auth event: type={}, phone={}, success=true, timestamp={}, details={:?}",
            event_type,
            format_sensitive(phone),
            timestamp,
            details
        );
    } else {
        warn!(
            "Auth event: type={}, phone={}, success=false, timestamp={}, details={:?}",
            event_type,
            format_sensitive(phone),
            timestamp,
            details
        );
    }
}
