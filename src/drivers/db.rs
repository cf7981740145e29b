use std::path::Path;

use crate::errors::Error;
use crate::interactors::properties::PropertyStore;

#[derive(Clone)]
pub struct Db {
    db: sled::Db,
    properties: sled::Tree,
}

impl Db {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let db = sled::open(path)?;
        Ok(Self {
            properties: db.open_tree("properties")?,
            db,
        })
    }

    /// Throwaway store, removed when dropped.
    pub fn temporary() -> Result<Self, Error> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self {
            properties: db.open_tree("properties")?,
            db,
        })
    }
}

impl PropertyStore for Db {
    fn get(&self, name: &str) -> Result<Option<String>, Error> {
        let buf = match self.properties.get(name)? {
            Some(buf) => buf,
            None => return Ok(None),
        };
        let value =
            String::from_utf8(buf.to_vec()).map_err(|_| Error::Corrupt(name.to_string()))?;
        Ok(Some(value))
    }

    // flush: the process may exit immediately after the write
    fn set(&self, name: &str, value: &str) -> Result<(), Error> {
        self.properties.insert(name, value.as_bytes())?;
        self.db.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;

    #[test]
    fn it_returns_none_for_a_missing_property() -> Result<()> {
        let db = Db::temporary()?;

        assert!(db.get("USER_KEYS")?.is_none());

        Ok(())
    }

    #[test]
    fn it_reads_back_what_it_wrote() -> Result<()> {
        let db = Db::temporary()?;

        db.set("USER_KEYS", "[]")?;

        assert_eq!(db.get("USER_KEYS")?.as_deref(), Some("[]"));

        Ok(())
    }

    #[test]
    fn it_overwrites_in_place() -> Result<()> {
        let db = Db::temporary()?;

        db.set("USER_KEYS", r#"[{"user":"a","key":"1"}]"#)?;
        db.set("USER_KEYS", "[]")?;

        assert_eq!(db.get("USER_KEYS")?.as_deref(), Some("[]"));

        Ok(())
    }
}
