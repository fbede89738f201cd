use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::modules::utils::time::current_timestamp_string;

/// Custom error type for credential store operations
#[derive(Debug)]
pub enum StoreError {
    Corrupt(String),
    Read(io::Error),
    Write(io::Error),
}

// Implementation of Display trait for StoreError
impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Corrupt(msg) => write!(f, "Store data is corrupt: {}", msg),
            StoreError::Read(e) => write!(f, "Failed to read store: {}", e),
            StoreError::Write(e) => write!(f, "Failed to write store: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

/// Represents a single registered member keyed by phone number
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MemberRecord {
    pub name: String, // Display name as entered at registration
    #[serde(rename = "password")]
    pub password_hash: String, // Hex SHA-256 digest of the plaintext password
    pub joined_on: String, // Timestamp string, set once at registration
}

impl MemberRecord {
    /// Create a new member record with the join timestamp set to now
    pub fn new(name: String, password_hash: String) -> Self {
        Self {
            name,
            password_hash,
            joined_on: current_timestamp_string(),
        }
    }
}

/// Handle to the durable member file. Holds only the backing path; every
/// operation re-reads the file so durable storage stays the source of truth.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Create a store handle bound to the given backing file
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full phone -> member mapping from the backing file.
    /// A missing file means no one has registered yet and yields an empty map.
    pub fn load(&self) -> Result<HashMap<String, MemberRecord>, StoreError> {
        let mut contents = String::new();
        match File::open(&self.path) {
            Ok(mut file) => {
                file.read_to_string(&mut contents)
                    .map_err(StoreError::Read)?;
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Ok(HashMap::new());
            }
            Err(e) => {
                return Err(StoreError::Read(e));
            }
        }

        serde_json::from_str(&contents).map_err(|e| StoreError::Corrupt(e.to_string()))
    }

    /// Save the full mapping back to the backing file, replacing its previous
    /// contents. The write goes to a temporary file in the same directory and
    /// is renamed into place, so readers never observe a torn file. This does
    /// NOT close the lost-update race between two concurrent load/modify/save
    /// cycles (see DESIGN.md).
    pub fn save(&self, members: &HashMap<String, MemberRecord>) -> Result<(), StoreError> {
        let data = serde_json::to_string_pretty(members)
            .map_err(|e| StoreError::Write(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        // parent() yields an empty path for bare filenames like "members.json"
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir).map_err(StoreError::Write)?;
        temp.write_all(data.as_bytes()).map_err(StoreError::Write)?;
        temp.persist(&self.path)
            .map_err(|e| StoreError::Write(e.error))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup_test_store() -> (CredentialStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = CredentialStore::new(dir.path().join("members.json"));
        (store, dir)
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (store, _dir) = setup_test_store();
        let members = store.load().unwrap();
        assert!(members.is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (store, _dir) = setup_test_store();

        let mut members = HashMap::new();
        members.insert(
            "9000000001".to_string(),
            MemberRecord::new("Asha".to_string(), "abc123".to_string()),
        );
        store.save(&members).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        let record = loaded.get("9000000001").unwrap();
        assert_eq!(record.name, "Asha");
        assert_eq!(record.password_hash, "abc123");
        assert!(!record.joined_on.is_empty());
    }

    #[test]
    fn test_save_load_round_trip_is_stable() {
        let (store, _dir) = setup_test_store();

        let mut members = HashMap::new();
        members.insert(
            "9000000001".to_string(),
            MemberRecord::new("Asha".to_string(), "abc123".to_string()),
        );
        members.insert(
            "9000000002".to_string(),
            MemberRecord::new("Ravi".to_string(), "def456".to_string()),
        );
        store.save(&members).unwrap();

        // save(load()) must not change what a subsequent load observes
        let first = store.load().unwrap();
        store.save(&first).unwrap();
        let second = store.load().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_interleaved_writers_last_write_wins() {
        let (store, _dir) = setup_test_store();

        // Two writers both load the empty store before either saves. There
        // is no locking, so the second save silently discards the first.
        let mut first = store.load().unwrap();
        let mut second = store.load().unwrap();

        first.insert(
            "9000000001".to_string(),
            MemberRecord::new("Asha".to_string(), "aaa".to_string()),
        );
        store.save(&first).unwrap();

        second.insert(
            "9000000002".to_string(),
            MemberRecord::new("Ravi".to_string(), "bbb".to_string()),
        );
        store.save(&second).unwrap();

        let loaded = store.load().unwrap();
        assert!(!loaded.contains_key("9000000001"));
        assert!(loaded.contains_key("9000000002"));
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let (store, _dir) = setup_test_store();
        std::fs::write(store.path(), "not valid json {").unwrap();

        let result = store.load();
        assert!(matches!(result, Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_serialized_format_uses_password_key() {
        let (store, _dir) = setup_test_store();

        let mut members = HashMap::new();
        members.insert(
            "9000000001".to_string(),
            MemberRecord::new("Asha".to_string(), "abc123".to_string()),
        );
        store.save(&members).unwrap();

        // The on-disk format keeps the original field names
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"password\""));
        assert!(raw.contains("\"joined_on\""));
        assert!(!raw.contains("password_hash"));
    }
}
