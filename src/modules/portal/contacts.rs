/// Emergency contact directory, shown as tap-to-chat links. Order here is
/// display order: public services first, then organization contacts.
pub const EMERGENCY_CONTACTS: &[(&str, &str)] = &[
    ("Police", "100"),
    ("Ambulance", "108"),
    ("Fire", "101"),
    ("Yuva Shakti Leader", "919392540435"),
    ("Local Volunteer", "9381981220"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_entries() {
        assert_eq!(EMERGENCY_CONTACTS.len(), 5);
        for (name, number) in EMERGENCY_CONTACTS {
            assert!(!name.is_empty());
            assert!(number.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_public_services_come_first() {
        assert_eq!(EMERGENCY_CONTACTS[0], ("Police", "100"));
        assert_eq!(EMERGENCY_CONTACTS[1], ("Ambulance", "108"));
        assert_eq!(EMERGENCY_CONTACTS[2], ("Fire", "101"));
    }
}
