use std::sync::Arc;

mod search_term;

pub struct StateStore {
    db: Arc<sled::Db>,
}

const KEY_PREFIX: &str = "state";

impl StateStore {
    pub fn new(db: Arc<sled::Db>) -> Self {
        Self { db }
    }
}
