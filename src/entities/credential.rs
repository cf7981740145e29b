use serde::{Deserialize, Serialize};

/// A username/key pair consumed later by authentication checks.
/// Field order matters: stored JSON is `{"user":...,"key":...}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserCredential {
    pub user: String,
    pub key: String,
}
