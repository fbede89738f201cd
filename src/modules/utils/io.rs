use std::io::{self, BufRead, Write};

/// Read one trimmed line from any buffered reader. Returns None once the
/// reader is exhausted, so callers can tell a closed stream from an empty
/// submission.
fn read_line_from<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}

/// Helper function to read a line from stdin. None means stdin was closed
/// (piped input exhausted, or Ctrl-D).
pub fn read_line() -> io::Result<Option<String>> {
    read_line_from(&mut io::stdin().lock())
}

/// Helper function to read a password without echoing it
pub fn read_password() -> io::Result<String> {
    rpassword::read_password()
}

/// Check whether a submitted form field should be treated as missing
pub fn is_missing_field(value: &str) -> bool {
    value.trim().is_empty()
}

/// Prompt for a field and read it. Returns None when the input is missing
/// or stdin is closed, so callers can reject the form before touching the
/// auth service.
pub fn read_required_field(prompt: &str) -> io::Result<Option<String>> {
    print!("{}: ", prompt);
    io::stdout().flush()?;

    match read_line()? {
        Some(input) if !is_missing_field(&input) => Ok(Some(input)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_detection() {
        assert!(is_missing_field(""));
        assert!(is_missing_field("   "));
        assert!(is_missing_field("\t\n"));

        assert!(!is_missing_field("Asha"));
        assert!(!is_missing_field(" 9000000001 "));
    }

    #[test]
    fn test_read_line_trims_input() {
        let mut input = "  9000000001  \n".as_bytes();
        assert_eq!(
            read_line_from(&mut input).unwrap(),
            Some("9000000001".to_string())
        );
    }

    #[test]
    fn test_read_line_reports_closed_stream() {
        // An exhausted reader must come back as None, not as an endless
        // stream of empty submissions
        let mut input = "".as_bytes();
        assert_eq!(read_line_from(&mut input).unwrap(), None);

        let mut input = "last\n".as_bytes();
        assert_eq!(read_line_from(&mut input).unwrap(), Some("last".to_string()));
        assert_eq!(read_line_from(&mut input).unwrap(), None);
    }

    #[test]
    fn test_blank_line_is_not_eof() {
        let mut input = "\n".as_bytes();
        assert_eq!(read_line_from(&mut input).unwrap(), Some(String::new()));
    }
}
