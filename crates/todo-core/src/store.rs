//! Todo Store
//!
//! Pure list operations (load, add, toggle, sort, group, persist) and
//! `TodoStore`, the owned state object the UI drives through its action
//! handlers. Every successful mutation is written back to the storage
//! slot right after it happens.

use std::collections::HashSet;

use chrono::{DateTime, SubsecRound, Utc};

use crate::clock::Clock;
use crate::config::{IdPolicy, StoreConfig};
use crate::error::{StoreError, StoreResult};
use crate::models::{GroupedTodos, TodoId, TodoItem, TodoList};
use crate::storage::Storage;

// ========================
// List Operations
// ========================

/// Read and decode the slot, reporting why it failed
pub fn try_load<S: Storage + ?Sized>(storage: &S, key: &str) -> StoreResult<TodoList> {
    match storage.get(key)? {
        None => Ok(Vec::new()),
        Some(raw) => Ok(serde_json::from_str(&raw)?),
    }
}

/// Read the slot. Any failure is logged and yields an empty list.
pub fn load<S: Storage + ?Sized>(storage: &S, key: &str) -> TodoList {
    match try_load(storage, key) {
        Ok(todos) => todos,
        Err(e) => {
            log::error!("Failed to load todos: {}", e);
            Vec::new()
        }
    }
}

/// Overwrite the slot with the full list
pub fn persist<S: Storage + ?Sized>(
    storage: &mut S,
    key: &str,
    list: &[TodoItem],
) -> StoreResult<()> {
    let json = serde_json::to_string(list).map_err(StoreError::Encode)?;
    storage.set(key, &json)
}

/// Append a new item built from `draft`.
///
/// A draft that is empty after trimming leaves the list unchanged. The
/// stored text keeps its surrounding whitespace.
pub fn add(list: &[TodoItem], draft: &str, now: DateTime<Utc>, policy: IdPolicy) -> TodoList {
    let mut next = list.to_vec();
    if draft.trim().is_empty() {
        return next;
    }
    // Stored timestamps carry milliseconds; truncate so a reload compares equal.
    let now = now.trunc_subsecs(3);
    let id = next_id(list, now.timestamp_millis(), policy);
    next.push(TodoItem::new(id, draft.to_string(), now));
    next
}

/// Flip `completed` on the item with `id`. Unknown ids are a no-op.
pub fn toggle(list: &[TodoItem], id: TodoId) -> TodoList {
    list.iter()
        .map(|todo| if todo.id == id { todo.toggled() } else { todo.clone() })
        .collect()
}

/// Active items first, then completed; newest first inside each group
pub fn derive_sorted(list: &[TodoItem]) -> Vec<TodoItem> {
    let mut sorted = list.to_vec();
    sorted.sort_by(|a, b| {
        a.completed
            .cmp(&b.completed)
            .then_with(|| b.timestamp.cmp(&a.timestamp))
    });
    sorted
}

/// Sorted list split into active and completed sections
pub fn derive_grouped(list: &[TodoItem]) -> GroupedTodos {
    let (completed, active): (Vec<_>, Vec<_>) = derive_sorted(list)
        .into_iter()
        .partition(|todo| todo.completed);
    GroupedTodos { active, completed }
}

fn next_id(list: &[TodoItem], tick: TodoId, policy: IdPolicy) -> TodoId {
    match policy {
        IdPolicy::ClockTick => tick,
        IdPolicy::Unique => {
            if !list.iter().any(|todo| todo.id == tick) {
                return tick;
            }
            let max = list.iter().map(|todo| todo.id).max().unwrap_or(tick);
            max.checked_add(1).unwrap_or_else(|| smallest_unused_id(list))
        }
    }
}

/// Smallest non-negative id no item holds
fn smallest_unused_id(list: &[TodoItem]) -> TodoId {
    let taken: HashSet<TodoId> = list.iter().map(|todo| todo.id).collect();
    (0..).find(|id| !taken.contains(id)).unwrap_or_default()
}

// ========================
// TodoStore
// ========================

/// Owned todo state plus the draft being typed
#[derive(Debug)]
pub struct TodoStore<S, C> {
    storage: S,
    clock: C,
    config: StoreConfig,
    todos: TodoList,
    draft: String,
}

impl<S: Storage, C: Clock> TodoStore<S, C> {
    /// Load from the configured slot and write the result straight back,
    /// so an unreadable slot is reset to an empty list.
    pub fn open(storage: S, clock: C, config: StoreConfig) -> Self {
        let todos = load(&storage, &config.storage_key);
        log::info!("Loaded {} todos from '{}'", todos.len(), config.storage_key);
        let mut store = Self {
            storage,
            clock,
            config,
            todos,
            draft: String::new(),
        };
        store.save();
        store
    }

    pub fn todos(&self) -> &[TodoItem] {
        &self.todos
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Draft text changed. Not persisted.
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Add the current draft as a new item.
    ///
    /// Returns `false` (draft kept) when the draft is blank.
    pub fn submit(&mut self) -> bool {
        if self.draft.trim().is_empty() {
            return false;
        }
        self.todos = add(&self.todos, &self.draft, self.clock.now(), self.config.id_policy);
        self.draft.clear();
        self.save();
        true
    }

    /// Toggle the item with `id`. Returns whether an item matched.
    pub fn toggle(&mut self, id: TodoId) -> bool {
        if !self.todos.iter().any(|todo| todo.id == id) {
            return false;
        }
        self.todos = toggle(&self.todos, id);
        self.save();
        true
    }

    pub fn sorted(&self) -> Vec<TodoItem> {
        derive_sorted(&self.todos)
    }

    pub fn grouped(&self) -> GroupedTodos {
        derive_grouped(&self.todos)
    }

    pub fn active_count(&self) -> usize {
        self.todos.iter().filter(|todo| !todo.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.todos.iter().filter(|todo| todo.completed).count()
    }

    /// Persist, logging instead of failing; memory stays authoritative
    fn save(&mut self) {
        match persist(&mut self.storage, &self.config.storage_key, &self.todos) {
            Ok(()) => log::debug!("Saved {} todos", self.todos.len()),
            Err(e) => log::warn!("Failed to save todos: {}", e),
        }
    }
}
