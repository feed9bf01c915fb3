// Wishlist store: the set of favourite record ids, mirrored to key-value storage

use crate::catalog::Catalog;
use crate::error::StorageError;
use crate::models::VehicleRecord;
use crate::storage::KeyValueStore;

// Storage key holding the JSON array of ids, e.g. `[1,4]`
pub const WISHLIST_KEY: &str = "carWishlist";

#[derive(Debug)]
pub struct Wishlist<S: KeyValueStore> {
    store: S,
    // Insertion order is kept so the persisted array reads the way it was built
    ids: Vec<u32>,
}

impl<S: KeyValueStore> Wishlist<S> {
    // Loads the persisted wishlist once. Anything unreadable or malformed
    // yields an empty wishlist rather than an error.
    pub fn load(store: S) -> Self {
        let ids = match read_ids(&store) {
            Ok(Some(ids)) => {
                tracing::info!(count = ids.len(), "Loaded wishlist from storage");
                ids
            }
            Ok(None) => {
                tracing::debug!("No saved wishlist found, starting empty");
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable saved wishlist: {}", e);
                Vec::new()
            }
        };
        Self { store, ids }
    }

    // Flips membership of `id` and persists the full set.
    // Returns true when the id is in the wishlist afterwards.
    pub fn toggle(&mut self, id: u32) -> bool {
        let now_present = match self.ids.iter().position(|&existing| existing == id) {
            Some(index) => {
                self.ids.remove(index);
                false
            }
            None => {
                self.ids.push(id);
                true
            }
        };
        tracing::debug!(id, now_present, "Wishlist toggled");
        self.persist();
        now_present
    }

    // Best effort: a failed write is logged and otherwise ignored
    pub fn persist(&mut self) {
        if let Err(e) = self.try_persist() {
            tracing::warn!("Failed to persist wishlist: {}", e);
        }
    }

    fn try_persist(&mut self) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(&self.ids)?;
        self.store.set_item(WISHLIST_KEY, &serialized)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    // Wishlisted records in wishlist order. Ids with no record in this
    // catalog (left over from an older seed) are skipped but kept.
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Vec<&'a VehicleRecord> {
        self.ids.iter().filter_map(|&id| catalog.get(id)).collect()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn read_ids<S: KeyValueStore>(store: &S) -> Result<Option<Vec<u32>>, StorageError> {
    let Some(raw) = store.get_item(WISHLIST_KEY)? else {
        return Ok(None);
    };
    let parsed: Vec<u32> = serde_json::from_str(&raw)?;
    let mut ids = Vec::with_capacity(parsed.len());
    for id in parsed {
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(Some(ids))
}
