use std::collections::BTreeSet;

use tracing::warn;

use super::kv::KeyValueStore;
use super::FavoritesError;
use crate::catalog::store::BikeCatalog;
use crate::core::bike::Bike;
use crate::core::types::BikeId;

/// Key the favorite set is stored under
pub const FAVORITES_KEY: &str = "FavoriteBikeIDs";

/// The user's favorite bikes, written back to `S` on every change
#[derive(Debug)]
pub struct FavoritesStore<S: KeyValueStore> {
    store: S,
    ids: BTreeSet<BikeId>,
}

impl<S: KeyValueStore> FavoritesStore<S> {
    /// Load favorites from `store`. Missing or undecodable data yields an empty set.
    pub fn load(store: S) -> Self {
        let ids = match store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Discarding unreadable favorites: {e}");
                BTreeSet::new()
            }),
            Ok(None) => BTreeSet::new(),
            Err(e) => {
                warn!("Failed to read favorites: {e}");
                BTreeSet::new()
            }
        };

        Self { store, ids }
    }

    pub fn is_favorite(&self, id: &BikeId) -> bool {
        self.ids.contains(id)
    }

    /// Flip membership of `id`, returning whether it is now a favorite
    pub fn toggle(&mut self, id: &BikeId) -> Result<bool, FavoritesError> {
        let now_favorite = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        };
        self.save()?;
        Ok(now_favorite)
    }

    /// Returns false if `id` was already a favorite
    pub fn add(&mut self, id: &BikeId) -> Result<bool, FavoritesError> {
        let inserted = self.ids.insert(id.clone());
        if inserted {
            self.save()?;
        }
        Ok(inserted)
    }

    /// Returns false if `id` was not a favorite
    pub fn remove(&mut self, id: &BikeId) -> Result<bool, FavoritesError> {
        let removed = self.ids.remove(id);
        if removed {
            self.save()?;
        }
        Ok(removed)
    }

    pub fn all(&self) -> &BTreeSet<BikeId> {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorite bikes in catalog order. Ids missing from the catalog are skipped.
    pub fn favorite_bikes<'c>(&self, catalog: &'c BikeCatalog) -> Vec<&'c Bike> {
        catalog
            .bikes()
            .iter()
            .filter(|bike| self.ids.contains(&bike.id))
            .collect()
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    fn save(&mut self) -> Result<(), FavoritesError> {
        let encoded = serde_json::to_string(&self.ids)?;
        self.store.set(FAVORITES_KEY, encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorites::kv::{JsonFileStore, MemoryStore};
    use tempfile::TempDir;

    fn id(s: &str) -> BikeId {
        BikeId::new(s)
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut favorites = FavoritesStore::load(MemoryStore::new());
        favorites.add(&id("orbea-orca-aero")).unwrap();
        let before = favorites.all().clone();

        assert!(favorites.toggle(&id("canyon-aeroad-cfr")).unwrap());
        assert!(favorites.is_favorite(&id("canyon-aeroad-cfr")));
        assert!(!favorites.toggle(&id("canyon-aeroad-cfr")).unwrap());

        assert_eq!(favorites.all(), &before);
    }

    #[test]
    fn test_toggle_persists_and_reloads() {
        let mut favorites = FavoritesStore::load(MemoryStore::new());
        favorites.toggle(&id("specialized-tarmac-sl8")).unwrap();

        let reloaded = FavoritesStore::load(favorites.into_inner());
        assert!(reloaded.is_favorite(&id("specialized-tarmac-sl8")));
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_persisted_as_json_array_under_fixed_key() {
        let mut favorites = FavoritesStore::load(MemoryStore::new());
        favorites.add(&id("b")).unwrap();
        favorites.add(&id("a")).unwrap();

        let store = favorites.into_inner();
        let raw = store.get(FAVORITES_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"["a","b"]"#);
    }

    #[test]
    fn test_corrupt_value_loads_empty() {
        let mut store = MemoryStore::new();
        store.set(FAVORITES_KEY, "{broken".to_string()).unwrap();

        let favorites = FavoritesStore::load(store);
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_remove_and_add_report_changes() {
        let mut favorites = FavoritesStore::load(MemoryStore::new());
        assert!(!favorites.remove(&id("x")).unwrap());
        assert!(favorites.add(&id("x")).unwrap());
        assert!(!favorites.add(&id("x")).unwrap());
        assert!(favorites.remove(&id("x")).unwrap());
        assert!(favorites.is_empty());
    }

    #[test]
    fn test_favorite_bikes_skips_unknown_ids() {
        let catalog = BikeCatalog::load_embedded().unwrap();
        let mut favorites = FavoritesStore::load(MemoryStore::new());
        favorites.add(&id("specialized-tarmac-sl8")).unwrap();
        favorites.add(&id("retired-model")).unwrap();
        favorites.add(&id("canyon-aeroad-cfr")).unwrap();

        let bikes = favorites.favorite_bikes(&catalog);
        let ids: Vec<&str> = bikes.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["canyon-aeroad-cfr", "specialized-tarmac-sl8"]);
        // The unknown id stays in the set itself
        assert_eq!(favorites.len(), 3);
    }

    #[test]
    fn test_file_backed_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");

        let mut favorites = FavoritesStore::load(JsonFileStore::open(&path));
        favorites.toggle(&id("orbea-orca-aero")).unwrap();

        let reloaded = FavoritesStore::load(JsonFileStore::open(&path));
        assert!(reloaded.is_favorite(&id("orbea-orca-aero")));
    }
}
