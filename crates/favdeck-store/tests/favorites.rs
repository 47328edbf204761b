mod common;

use common::{contact, id, snapshot};
use favdeck_core::time::now_millis;
use favdeck_store::error::StoreError;
use favdeck_store::favorites::FAVORITES_KEY;
use favdeck_store::{FavoritesStore, KeyValueStore, MemoryKv, Store};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Memory layer whose next `failures` reads error out.
struct FailingReads {
    inner: MemoryKv,
    failures: AtomicUsize,
}

impl FailingReads {
    fn new(inner: MemoryKv) -> Self {
        Self {
            inner,
            failures: AtomicUsize::new(0),
        }
    }

    fn fail_next_read(&self) {
        self.failures.fetch_add(1, Ordering::SeqCst);
    }
}

impl KeyValueStore for FailingReads {
    fn get(&self, key: &str) -> favdeck_store::error::Result<Option<String>> {
        let pending = self.failures.load(Ordering::SeqCst);
        if pending > 0 {
            self.failures.store(pending - 1, Ordering::SeqCst);
            return Err(StoreError::Unavailable(format!("read of {key} failed")));
        }
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> favdeck_store::error::Result<()> {
        self.inner.set(key, value)
    }
}

#[test]
fn add_then_list_contains_single_record() {
    let kv = MemoryKv::new();
    let favorites = FavoritesStore::new(&kv);

    let before = now_millis();
    favorites.add(id("u-1"), snapshot("u-1", "Ada", "Lovelace"));
    let after = now_millis();

    let records = favorites.list();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].user_id, id("u-1"));
    assert!(records[0].timestamp >= before && records[0].timestamp <= after);
    assert_eq!(records[0].contact.display_name(), "Ada Lovelace");
    assert!(favorites.contains(&id("u-1")));
}

#[test]
fn re_adding_replaces_record_and_refreshes_timestamp() {
    let kv = MemoryKv::new();
    let favorites = FavoritesStore::new(&kv);

    favorites.add_at(id("u-1"), snapshot("u-1", "Ada", "Lovelace"), 1_000);
    favorites.add_at(id("u-2"), snapshot("u-2", "Grace", "Hopper"), 2_000);
    favorites.add_at(id("u-1"), snapshot("u-1", "Ada", "Byron"), 3_000);

    let records = favorites.list();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].user_id, id("u-2"));
    assert_eq!(records[1].user_id, id("u-1"));
    assert_eq!(records[1].timestamp, 3_000);
    assert_eq!(records[1].contact.name.last, "Byron");
}

#[test]
fn at_most_one_record_per_user_after_mixed_operations() {
    let kv = MemoryKv::new();
    let favorites = FavoritesStore::new(&kv);

    let ops: &[(&str, bool)] = &[
        ("a", true),
        ("b", true),
        ("a", true),
        ("c", true),
        ("b", false),
        ("a", true),
        ("b", true),
        ("c", false),
        ("c", false),
    ];
    for (step, (user, add)) in ops.iter().enumerate() {
        if *add {
            favorites.add_at(id(user), snapshot(user, "Test", user), step as i64);
        } else {
            favorites.remove(&id(user));
        }
    }

    let records = favorites.list();
    let mut ids: Vec<&str> = records.iter().map(|r| r.user_id.as_str()).collect();
    ids.sort();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn remove_missing_id_is_noop() {
    let kv = MemoryKv::new();
    let favorites = FavoritesStore::new(&kv);
    favorites.add_at(id("u-1"), snapshot("u-1", "Ada", "Lovelace"), 1_000);

    let before = favorites.list();
    favorites
        .try_remove(&id("missing"))
        .expect("remove missing id");
    assert_eq!(favorites.list(), before);
}

#[test]
fn remove_twice_matches_remove_once() {
    let kv = MemoryKv::new();
    let favorites = FavoritesStore::new(&kv);
    favorites.add_at(id("u-1"), snapshot("u-1", "Ada", "Lovelace"), 1_000);
    favorites.add_at(id("u-2"), snapshot("u-2", "Grace", "Hopper"), 2_000);

    favorites.remove(&id("u-1"));
    let once = favorites.list();
    favorites.remove(&id("u-1"));
    assert_eq!(favorites.list(), once);
    assert_eq!(once.len(), 1);
    assert!(!favorites.contains(&id("u-1")));
}

#[test]
fn corrupt_blob_reads_as_empty() {
    let kv = MemoryKv::new();
    kv.set(FAVORITES_KEY, "{not json").expect("seed corrupt blob");
    let favorites = FavoritesStore::new(&kv);

    assert!(favorites.list().is_empty());
    assert!(!favorites.contains(&id("u-1")));
    let err = favorites.try_list().unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));
}

#[test]
fn add_over_corrupt_blob_starts_fresh() {
    let kv = MemoryKv::new();
    kv.set(FAVORITES_KEY, "[{\"userId\": 3}]").expect("seed corrupt blob");
    let favorites = FavoritesStore::new(&kv);

    favorites.add_at(id("u-1"), snapshot("u-1", "Ada", "Lovelace"), 1_000);
    let records = favorites.try_list().expect("list after repair");
    assert_eq!(records.len(), 1);
}

#[test]
fn write_failure_is_swallowed_by_add_and_remove() {
    let kv = MemoryKv::new();
    let favorites = FavoritesStore::new(&kv);
    favorites.add_at(id("u-1"), snapshot("u-1", "Ada", "Lovelace"), 1_000);

    kv.set_fail_writes(true);
    favorites.add_at(id("u-2"), snapshot("u-2", "Grace", "Hopper"), 2_000);
    favorites.remove(&id("u-1"));
    let err = favorites
        .try_add_at(id("u-3"), snapshot("u-3", "Alan", "Turing"), 3_000)
        .unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));

    kv.set_fail_writes(false);
    let records = favorites.list();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].user_id, id("u-1"));
}

#[test]
fn read_failure_degrades_to_empty() {
    let kv = MemoryKv::new();
    let favorites = FavoritesStore::new(&kv);
    favorites.add_at(id("u-1"), snapshot("u-1", "Ada", "Lovelace"), 1_000);

    kv.set_fail_reads(true);
    assert!(favorites.list().is_empty());
    assert!(!favorites.contains(&id("u-1")));
    assert!(favorites.try_list().is_err());
}

#[test]
fn toggle_flips_state() {
    let kv = MemoryKv::new();
    let favorites = FavoritesStore::new(&kv);
    let ada = contact("u-1", "Ada", "Lovelace");

    assert!(favorites.toggle_at(&ada, 5_000));
    assert_eq!(favorites.get(&ada.id).expect("record").timestamp, 5_000);
    assert!(!favorites.toggle_at(&ada, 6_000));
    assert!(favorites.get(&ada.id).is_none());
}

#[test]
fn snapshot_drops_location_and_dob() {
    let kv = MemoryKv::new();
    let favorites = FavoritesStore::new(&kv);
    let ada = contact("u-1", "Ada", "Lovelace");
    favorites.toggle_at(&ada, 1_000);

    assert!(ada.location.is_some() && ada.dob.is_some());
    let blob = kv.get(FAVORITES_KEY).expect("get").expect("blob");
    assert!(!blob.contains("location"));
    assert!(!blob.contains("dob"));
    assert!(!blob.contains("Wolverhampton"));
    assert!(blob.contains("\"userId\":\"u-1\""));
}

#[test]
fn sqlite_store_backs_favorites() {
    let store = Store::open_in_memory().expect("open in memory");
    store.migrate().expect("migrate");

    store
        .favorites()
        .add_at(id("u-1"), snapshot("u-1", "Ada", "Lovelace"), 1_000);
    store
        .favorites()
        .add_at(id("u-2"), snapshot("u-2", "Grace", "Hopper"), 2_000);
    store.favorites().remove(&id("u-1"));

    let records = store.favorites().list();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].user_id, id("u-2"));
}

#[test]
fn unmigrated_sqlite_store_fails_silently() {
    let store = Store::open_in_memory().expect("open in memory");

    store
        .favorites()
        .add_at(id("u-1"), snapshot("u-1", "Ada", "Lovelace"), 1_000);
    assert!(store.favorites().list().is_empty());
    let err = store.favorites().try_list().unwrap_err();
    assert!(matches!(err, StoreError::Sql(_)));
}

#[test]
fn failed_read_aborts_remove_without_touching_stored_favorites() {
    let kv = FailingReads::new(MemoryKv::new());
    let favorites = FavoritesStore::new(&kv);
    favorites.add_at(id("u-1"), snapshot("u-1", "Ada", "Lovelace"), 1_000);
    favorites.add_at(id("u-2"), snapshot("u-2", "Grace", "Hopper"), 2_000);
    let before = favorites.list();
    let blob_before = kv.get(FAVORITES_KEY).expect("get");

    kv.fail_next_read();
    let err = favorites.try_remove(&id("missing")).unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
    assert_eq!(kv.get(FAVORITES_KEY).expect("get"), blob_before);

    kv.fail_next_read();
    favorites.remove(&id("missing"));
    assert_eq!(favorites.list(), before);
}

#[test]
fn failed_read_aborts_add_without_dropping_existing_favorites() {
    let kv = FailingReads::new(MemoryKv::new());
    let favorites = FavoritesStore::new(&kv);
    favorites.add_at(id("u-1"), snapshot("u-1", "Ada", "Lovelace"), 1_000);

    kv.fail_next_read();
    assert!(favorites
        .try_add_at(id("u-2"), snapshot("u-2", "Grace", "Hopper"), 2_000)
        .is_err());
    kv.fail_next_read();
    favorites.add_at(id("u-3"), snapshot("u-3", "Alan", "Turing"), 3_000);

    let records = favorites.list();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].user_id, id("u-1"));
}

#[test]
fn blank_persisted_user_id_counts_as_corrupt() {
    let kv = MemoryKv::new();
    kv.set(
        FAVORITES_KEY,
        r#"[{"userId":"","timestamp":1000,"contact":{"id":"","name":{"first":"A","last":"B"},"email":"","phone":"","picture":{"large":"","medium":"","thumbnail":""}}}]"#,
    )
    .expect("seed blob");
    let favorites = FavoritesStore::new(&kv);

    assert!(matches!(
        favorites.try_list().unwrap_err(),
        StoreError::Corrupt { .. }
    ));
    assert!(favorites.list().is_empty());
}
