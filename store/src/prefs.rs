use crate::StoreError;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

const PREFS_FILE: &str = "preferences.json";

/// Durable key-value preference store backed by a single JSON file.
///
/// The whole map lives in memory; every mutation rewrites the file
/// atomically (tmp file + fsync + rename) before returning, so a value is
/// durable by the time the caller observes the write. One process-wide
/// instance is expected; the interior mutex keeps read-modify-write
/// operations on the same store from interleaving.
pub struct PrefStore {
    inner: Mutex<Inner>,
}

struct Inner {
    path: PathBuf,
    values: BTreeMap<String, Value>,
}

impl PrefStore {
    /// Open the store in `dir`, creating the directory if needed.
    ///
    /// A missing preference file yields an empty store. A corrupt or
    /// unreadable file is logged and also treated as empty — reads never
    /// fail the caller; the next write replaces the bad file.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(PREFS_FILE);

        let values = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!("Discarding corrupt preference file {:?}: {}", path, e);
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                tracing::warn!("Failed to read preference file {:?}: {}", path, e);
                BTreeMap::new()
            }
        };

        Ok(Self {
            inner: Mutex::new(Inner { path, values }),
        })
    }

    /// Read and decode the value under `key`. Absent keys and values that
    /// fail to decode both yield `None`; decode failures are logged.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let inner = self.lock();
        let value = inner.values.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!("Ignoring undecodable value for key {:?}: {}", key, e);
                None
            }
        }
    }

    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get_json(key)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_json(key)
    }

    /// Upsert `value` under `key` and persist before returning.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let mut inner = self.lock();
        inner
            .values
            .insert(key.to_string(), serde_json::to_value(value)?);
        inner.save()
    }

    pub fn set_string(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.set_json(key, &value)
    }

    pub fn set_bool(&self, key: &str, value: bool) -> Result<(), StoreError> {
        self.set_json(key, &value)
    }

    /// Delete `key`. Removing an absent key is a no-op.
    pub fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut inner = self.lock();
        if inner.values.remove(key).is_none() {
            return Ok(());
        }
        inner.save()
    }

    /// Insert `item` at the front of the list stored under `key`, dropping
    /// any existing entry that `same` matches and truncating to `cap`.
    /// Returns the new list. The read-modify-write runs under one lock
    /// acquisition, so concurrent appends to the same store never interleave.
    pub fn append_bounded<T>(
        &self,
        key: &str,
        item: T,
        cap: usize,
        same: impl Fn(&T, &T) -> bool,
    ) -> Result<Vec<T>, StoreError>
    where
        T: Serialize + DeserializeOwned,
    {
        let mut inner = self.lock();
        let mut list: Vec<T> = match inner.values.get(key) {
            Some(value) => match serde_json::from_value(value.clone()) {
                Ok(list) => list,
                Err(e) => {
                    tracing::warn!("Ignoring undecodable list for key {:?}: {}", key, e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        list.retain(|existing| !same(existing, &item));
        list.insert(0, item);
        list.truncate(cap);

        inner
            .values
            .insert(key.to_string(), serde_json::to_value(&list)?);
        inner.save()?;
        Ok(list)
    }

    /// Remove all keys. Safe to call on an already-empty store.
    pub fn clear(&self) -> Result<(), StoreError> {
        let mut inner = self.lock();
        inner.values.clear();
        inner.save()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().values.is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A poisoned lock still holds a usable map; keep serving it.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Inner {
    /// Write the whole map out: tmp file, fsync, atomic rename.
    fn save(&self) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&self.values)?;
        let tmp = self.path.with_extension("json.tmp");

        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        drop(file);

        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde::Deserialize;
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestCity {
        id: String,
        name: String,
    }

    fn city(id: &str, name: &str) -> TestCity {
        TestCity {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_open_on_empty_dir_yields_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::open(dir.path()).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.get_string("token"), None);
    }

    #[test]
    fn test_scalar_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::open(dir.path()).unwrap();

        store.set_string("token", "tok1").unwrap();
        store.set_bool("more_mode", true).unwrap();

        assert_eq!(store.get_string("token").as_deref(), Some("tok1"));
        assert_eq!(store.get_bool("more_mode"), Some(true));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        {
            let store = PrefStore::open(dir.path()).unwrap();
            store.set_json("selected_city", &city("21", "上海市")).unwrap();
        }

        let store = PrefStore::open(dir.path()).unwrap();
        assert_eq!(
            store.get_json::<TestCity>("selected_city"),
            Some(city("21", "上海市"))
        );
    }

    #[test]
    fn test_remove_deletes_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::open(dir.path()).unwrap();

        store.set_string("token", "tok1").unwrap();
        store.remove("token").unwrap();
        assert_eq!(store.get_string("token"), None);

        // Removing an absent key is fine.
        store.remove("token").unwrap();
    }

    #[test]
    fn test_get_with_wrong_type_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::open(dir.path()).unwrap();

        store.set_string("token", "tok1").unwrap();
        assert_eq!(store.get_bool("token"), None);
        // The underlying value is untouched.
        assert_eq!(store.get_string("token").as_deref(), Some("tok1"));
    }

    #[test]
    fn test_corrupt_file_is_treated_as_empty_then_writable() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(PREFS_FILE), "{not json!").unwrap();

        let store = PrefStore::open(dir.path()).unwrap();
        assert!(store.is_empty());

        // The next write replaces the bad file.
        store.set_string("token", "tok1").unwrap();
        drop(store);

        let store = PrefStore::open(dir.path()).unwrap();
        assert_eq!(store.get_string("token").as_deref(), Some("tok1"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::open(dir.path()).unwrap();

        store.set_string("token", "tok1").unwrap();
        store.clear().unwrap();
        assert!(store.is_empty());

        store.clear().unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_bounded_dedups_prepends_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::open(dir.path()).unwrap();
        let same = |a: &String, b: &String| a == b;

        for term in ["a", "b", "c", "b"] {
            store
                .append_bounded("search_history", term.to_string(), 3, same)
                .unwrap();
        }
        // "b" moved to the front instead of duplicating.
        let list: Vec<String> = store.get_json("search_history").unwrap();
        assert_eq!(list, vec!["b", "c", "a"]);

        let list = store
            .append_bounded("search_history", "d".to_string(), 3, same)
            .unwrap();
        assert_eq!(list, vec!["d", "b", "c"]);
    }

    #[test]
    fn test_append_bounded_dedup_by_id_replaces_stale_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::open(dir.path()).unwrap();
        let same_id = |a: &TestCity, b: &TestCity| a.id == b.id;

        store
            .append_bounded("city_history", city("1", "北京市"), 5, same_id)
            .unwrap();
        store
            .append_bounded("city_history", city("21", "上海市"), 5, same_id)
            .unwrap();
        // Same id, renamed: the old entry goes away entirely.
        let list = store
            .append_bounded("city_history", city("1", "北京"), 5, same_id)
            .unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list[0], city("1", "北京"));
        assert_eq!(list[1], city("21", "上海市"));
    }

    #[test]
    fn test_append_bounded_does_not_interleave_across_threads() {
        let dir = tempfile::tempdir().unwrap();
        let store = Arc::new(PrefStore::open(dir.path()).unwrap());

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for i in 0..25 {
                        store
                            .append_bounded(
                                "ids",
                                format!("{}-{}", t, i),
                                200,
                                |a: &String, b: &String| a == b,
                            )
                            .unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        // Every append landed exactly once: a torn read-modify-write would
        // have dropped entries.
        let list: Vec<String> = store.get_json("ids").unwrap();
        assert_eq!(list.len(), 100);
    }

    #[test]
    fn test_save_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = PrefStore::open(dir.path()).unwrap();
        store.set_string("token", "tok1").unwrap();

        assert!(dir.path().join(PREFS_FILE).exists());
        assert!(!dir.path().join("preferences.json.tmp").exists());
    }

    proptest! {
        /// Any insertion sequence keeps the list capped, deduplicated and
        /// most-recent-first — checked against a reference model.
        #[test]
        fn prop_bounded_list_matches_reference_model(
            terms in proptest::collection::vec("[a-z]{1,6}", 1..60),
        ) {
            let dir = tempfile::tempdir().unwrap();
            let store = PrefStore::open(dir.path()).unwrap();

            let mut expected: Vec<String> = Vec::new();
            let mut got: Vec<String> = Vec::new();
            for term in &terms {
                got = store
                    .append_bounded("terms", term.clone(), 20, |a: &String, b: &String| a == b)
                    .unwrap();

                expected.retain(|t| t != term);
                expected.insert(0, term.clone());
                expected.truncate(20);
            }

            prop_assert!(got.len() <= 20);
            prop_assert_eq!(&got[0], terms.last().unwrap());
            prop_assert_eq!(got, expected);
        }
    }
}
