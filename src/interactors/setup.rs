use tracing::info;

use crate::entities::credential::UserCredential;
use crate::errors::Error;
use crate::interactors::properties::PropertyStore;

/// Property name downstream authentication code reads.
pub const USER_KEYS: &str = "USER_KEYS";

pub struct Setup {
    users: Vec<UserCredential>,
}

impl Setup {
    pub fn new() -> Self {
        Self { users: vec![] }
    }

    pub fn with_users(users: Vec<UserCredential>) -> Self {
        Self { users }
    }

    pub fn add_user(&mut self, user: &str, key: &str) {
        self.users.push(UserCredential {
            user: user.to_string(),
            key: key.to_string(),
        });
    }

    /// Serializes the user list and writes it under `USER_KEYS`, replacing
    /// whatever was stored before. One write, then one confirmation line.
    pub fn run(&self, properties: &dyn PropertyStore) -> Result<(), Error> {
        let encoded = serde_json::to_string(&self.users)?;
        properties.set(USER_KEYS, &encoded)?;
        info!("user keys configured successfully");
        Ok(())
    }
}
