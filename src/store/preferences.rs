//! Small user preferences kept in the local store

use std::sync::Arc;

use super::{LocalStore, StoreResult, WELCOME_SEEN_KEY};

#[derive(Clone)]
pub struct Preferences {
    store: Arc<LocalStore>,
}

impl Preferences {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }

    /// Whether the welcome modal should open on this visit
    pub fn should_show_welcome(&self) -> StoreResult<bool> {
        Ok(self.store.get(WELCOME_SEEN_KEY)?.as_deref() != Some("true"))
    }

    pub fn mark_welcome_seen(&self) -> StoreResult<()> {
        self.store.set(WELCOME_SEEN_KEY, "true")
    }

    pub fn reset_welcome(&self) -> StoreResult<()> {
        self.store.remove(WELCOME_SEEN_KEY)?;
        Ok(())
    }
}
