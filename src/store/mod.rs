//! Local application state: the in-memory [`AppData`] aggregate plus
//! the durable cache slot it is persisted to after every mutation.

use uuid::Uuid;

use crate::domain::HasId;
use crate::domain::app_data::AppData;
use crate::store::cache::LocalCache;
use crate::store::errors::{StoreError, StoreResult};

pub mod cache;
pub mod errors;

mod event;
mod gift;
mod guest;
mod suit;
mod task;
mod vendor;

/// Owner of the session aggregate. Every create/update/delete/replace
/// re-persists the full aggregate; there is no per-entity granularity.
pub struct Store {
    data: AppData,
    cache: LocalCache,
}

impl Store {
    /// Opens the store, loading prior state from the cache slot (or the
    /// seed data when none exists).
    pub fn open(cache: LocalCache) -> Self {
        let data = cache.load();
        Self { data, cache }
    }

    /// Builds a store over the given aggregate without touching the cache
    /// slot until the first mutation.
    pub fn with_data(cache: LocalCache, data: AppData) -> Self {
        Self { data, cache }
    }

    pub fn data(&self) -> &AppData {
        &self.data
    }

    /// Replaces the five remotely synced collections from a pulled
    /// aggregate. Local suits are preserved; the tabular store never
    /// carries them.
    pub fn apply_remote(&mut self, remote: AppData) -> StoreResult<()> {
        self.data.guests = remote.guests;
        self.data.events = remote.events;
        self.data.vendors = remote.vendors;
        self.data.tasks = remote.tasks;
        self.data.gifts = remote.gifts;
        self.persist()
    }

    fn persist(&self) -> StoreResult<()> {
        self.cache.save(&self.data).map_err(|e| {
            log::error!("Failed to persist application state: {e}");
            StoreError::Persist(e.to_string())
        })
    }

    fn new_id() -> String {
        Uuid::new_v4().to_string()
    }
}

/// Requires a non-empty display name before a record is created.
fn required_name(name: &str) -> StoreResult<()> {
    if name.trim().is_empty() {
        return Err(StoreError::Validation("name must not be empty".into()));
    }
    Ok(())
}

fn find_mut<'a, T: HasId>(items: &'a mut [T], id: &str) -> StoreResult<&'a mut T> {
    items
        .iter_mut()
        .find(|item| item.id() == id)
        .ok_or(StoreError::NotFound)
}

fn remove_by_id<T: HasId>(items: &mut Vec<T>, id: &str) -> StoreResult<()> {
    let before = items.len();
    items.retain(|item| item.id() != id);
    if items.len() == before {
        return Err(StoreError::NotFound);
    }
    Ok(())
}
