//! Store Integration Tests
//!
//! Scenarios driven through `TodoStore` plus property checks over the
//! pure list operations.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use todo_core::{
    add, derive_grouped, derive_sorted, load, persist, toggle, IdPolicy, MemoryStorage,
    SteppingClock, StoreConfig, TodoItem, TodoStore, DEFAULT_STORAGE_KEY,
};

fn at(millis: i64) -> DateTime<Utc> {
    Utc.timestamp_millis_opt(millis).unwrap()
}

fn todo_strategy() -> impl Strategy<Value = TodoItem> {
    (0i64..10_000, "[a-zA-Z ]{0,12}", any::<bool>(), 0i64..4_000_000_000_000).prop_map(
        |(id, text, completed, millis)| TodoItem {
            id,
            text,
            completed,
            timestamp: at(millis),
        },
    )
}

fn list_strategy() -> impl Strategy<Value = Vec<TodoItem>> {
    prop::collection::vec(todo_strategy(), 0..12)
}

#[test]
fn test_buy_milk_scenario() {
    let clock = SteppingClock::new(at(1_709_288_130_123), Duration::seconds(1));
    let mut store = TodoStore::open(MemoryStorage::new(), clock, StoreConfig::default());
    assert!(store.todos().is_empty());

    store.set_draft("Buy milk");
    assert!(store.submit());
    assert_eq!(store.todos().len(), 1);
    assert_eq!(store.todos()[0].text, "Buy milk");
    assert!(!store.todos()[0].completed);

    store.set_draft("   ");
    assert!(!store.submit());
    assert_eq!(store.todos().len(), 1);

    let id = store.todos()[0].id;
    assert!(store.toggle(id));
    assert!(store.todos()[0].completed);

    let grouped = store.grouped();
    assert!(grouped.active.is_empty());
    assert_eq!(grouped.completed.len(), 1);
    assert_eq!(grouped.completed[0].id, id);
}

#[test]
fn test_newer_item_sorts_first() {
    let clock = SteppingClock::new(at(1_000), Duration::milliseconds(250));
    let mut store = TodoStore::open(MemoryStorage::new(), clock, StoreConfig::default());
    store.set_draft("first");
    store.submit();
    store.set_draft("second");
    store.submit();

    let sorted = store.sorted();
    assert_eq!(sorted[0].text, "second");
    assert_eq!(sorted[1].text, "first");
    // insertion order is what gets stored
    assert_eq!(store.todos()[0].text, "first");
}

#[test]
fn test_reopen_restores_state() {
    let clock = SteppingClock::new(at(1_000), Duration::seconds(1));
    let mut store = TodoStore::open(MemoryStorage::new(), &clock, StoreConfig::default());
    store.set_draft("persist me");
    store.submit();
    let id = store.todos()[0].id;
    store.toggle(id);
    let saved = store.todos().to_vec();

    let storage = store.storage().clone();
    let reopened = TodoStore::open(storage, &clock, StoreConfig::default());
    assert_eq!(reopened.todos(), saved.as_slice());
    assert_eq!(reopened.completed_count(), 1);
}

#[test]
fn test_custom_storage_key() {
    let config = StoreConfig::default().with_storage_key("work-todos");
    let clock = SteppingClock::new(at(1_000), Duration::seconds(1));
    let mut store = TodoStore::open(MemoryStorage::new(), clock, config);
    store.set_draft("ship it");
    store.submit();

    assert!(store.storage().raw("work-todos").is_some());
    assert!(store.storage().raw(DEFAULT_STORAGE_KEY).is_none());
}

#[test]
fn test_loads_slot_written_by_browser() {
    let raw = r#"[{"id":1709288130123,"text":"Buy milk","completed":false,"timestamp":"2024-03-01T10:15:30.123Z"},{"id":1709288140000,"text":"Walk dog","completed":true,"timestamp":"2024-03-01T10:15:40.000Z"}]"#;
    let storage = MemoryStorage::with_slot(DEFAULT_STORAGE_KEY, raw);
    let todos = load(&storage, DEFAULT_STORAGE_KEY);
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[1].text, "Walk dog");
    assert_eq!(todos[1].timestamp, at(1_709_288_140_000));
}

proptest! {
    #[test]
    fn prop_blank_draft_never_adds(list in list_strategy(), draft in "[ \t\n]{0,6}") {
        let next = add(&list, &draft, at(5_000), IdPolicy::Unique);
        prop_assert_eq!(next, list);
    }

    #[test]
    fn prop_add_appends_one_active(
        list in list_strategy(),
        draft in "[a-z]{1,8}",
        millis in 0i64..4_000_000_000_000,
    ) {
        let next = add(&list, &draft, at(millis), IdPolicy::Unique);
        prop_assert_eq!(next.len(), list.len() + 1);
        let added = next.last().unwrap();
        prop_assert!(!added.completed);
        prop_assert_eq!(&added.text, &draft);
        prop_assert!(list.iter().all(|todo| todo.id != added.id));
    }

    #[test]
    fn prop_toggle_twice_is_identity(list in list_strategy(), id in 0i64..10_000) {
        prop_assert_eq!(toggle(&toggle(&list, id), id), list);
    }

    #[test]
    fn prop_sorted_active_before_completed(list in list_strategy()) {
        let sorted = derive_sorted(&list);
        prop_assert_eq!(sorted.len(), list.len());
        if let Some(first_done) = sorted.iter().position(|todo| todo.completed) {
            prop_assert!(sorted[first_done..].iter().all(|todo| todo.completed));
        }
    }

    #[test]
    fn prop_sorted_timestamps_descend_within_group(list in list_strategy()) {
        let sorted = derive_sorted(&list);
        for pair in sorted.windows(2) {
            if pair[0].completed == pair[1].completed {
                prop_assert!(pair[0].timestamp >= pair[1].timestamp);
            }
        }
    }

    #[test]
    fn prop_grouped_partitions_sorted(list in list_strategy()) {
        let grouped = derive_grouped(&list);
        prop_assert!(grouped.active.iter().all(|todo| !todo.completed));
        prop_assert!(grouped.completed.iter().all(|todo| todo.completed));
        let rejoined: Vec<_> = grouped
            .active
            .iter()
            .chain(grouped.completed.iter())
            .cloned()
            .collect();
        prop_assert_eq!(rejoined, derive_sorted(&list));
    }

    #[test]
    fn prop_persist_load_round_trip(list in list_strategy()) {
        let mut storage = MemoryStorage::new();
        persist(&mut storage, DEFAULT_STORAGE_KEY, &list).unwrap();
        prop_assert_eq!(load(&storage, DEFAULT_STORAGE_KEY), list);
    }
}
