use std::collections::HashMap;
use std::sync::Mutex;

use crate::errors::Error;
use crate::interactors::properties::PropertyStore;

/// In-memory stand-in for the persistent property store.
#[derive(Debug, Default)]
pub struct Memory {
    properties: Mutex<HashMap<String, String>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PropertyStore for Memory {
    fn get(&self, name: &str) -> Result<Option<String>, Error> {
        Ok(self.properties.lock().unwrap().get(name).cloned())
    }

    fn set(&self, name: &str, value: &str) -> Result<(), Error> {
        self.properties
            .lock()
            .unwrap()
            .insert(name.to_string(), value.to_string());
        Ok(())
    }
}
