use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::entities::credential::UserCredential;
use crate::errors::Error;

pub fn load(path: &Path) -> Result<Vec<UserCredential>, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::ManifestIo {
        path: path.display().to_string(),
        source,
    })?;
    parse(&text)
}

/// Decodes a JSON array of `{user, key}` records and checks it before
/// anything reaches the store: both fields non-empty, user names unique.
pub fn parse(text: &str) -> Result<Vec<UserCredential>, Error> {
    let users: Vec<UserCredential> = serde_json::from_str(text)?;

    let mut seen = HashSet::new();
    for (index, record) in users.iter().enumerate() {
        if record.user.is_empty() {
            return Err(Error::EmptyField {
                index,
                field: "user",
            });
        }
        if record.key.is_empty() {
            return Err(Error::EmptyField { index, field: "key" });
        }
        if !seen.insert(record.user.clone()) {
            return Err(Error::DuplicateUser(record.user.clone()));
        }
    }

    Ok(users)
}
