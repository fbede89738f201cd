use sha2::{Digest, Sha256};

use super::store::{CredentialStore, MemberRecord, StoreError};

/// Function to hash a password for storage and comparison.
/// This is a plain unsalted SHA-256 digest, matching the on-disk format the
/// portal has always used. See DESIGN.md for the security trade-off.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Register a new member. Returns false without mutating the store when the
/// phone number is already registered.
///
/// Field validation (non-empty phone/name/password) is the caller's job; the
/// service stores whatever strings it is given.
pub fn register(
    store: &CredentialStore,
    phone: &str,
    name: &str,
    password: &str,
) -> Result<bool, StoreError> {
    let mut members = store.load()?;

    if members.contains_key(phone) {
        return Ok(false);
    }

    members.insert(
        phone.to_string(),
        MemberRecord::new(name.to_string(), hash_password(password)),
    );
    store.save(&members)?;

    Ok(true)
}

/// Attempt a login. Returns the member's display name on success.
///
/// An unknown phone and a wrong password both come back as None so the caller
/// cannot tell which phones are registered.
pub fn login(
    store: &CredentialStore,
    phone: &str,
    password: &str,
) -> Result<Option<String>, StoreError> {
    let members = store.load()?;

    let result = match members.get(phone) {
        Some(record) if record.password_hash == hash_password(password) => {
            Some(record.name.clone())
        }
        _ => None,
    };

    Ok(result)
}
