use crate::Result;

use super::{StateStore, KEY_PREFIX};

impl StateStore {
    // Reads the persisted search term, falling back to `default` when the
    // key has never been written. The value is the plain term string.
    pub fn get_search_term(&self, key: &str, default: &str) -> Result<String> {
        let res = self.db.get(self.search_term_key(key))?;
        match res {
            Some(v) => Ok(std::str::from_utf8(&v[..])?.to_string()),
            None => Ok(default.to_string()),
        }
    }

    pub fn store_search_term(&self, key: &str, term: &str) -> Result<()> {
        self.db.insert(self.search_term_key(key), term.as_bytes())?;
        Ok(())
    }

    fn search_term_key(&self, key: &str) -> String {
        format!("{}_search_term_{}", KEY_PREFIX, key)
    }
}
