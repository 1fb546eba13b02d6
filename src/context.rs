//! Application Context
//!
//! The owned `TodoStore`, shared with components via the Leptos Context API.

use leptos::prelude::*;
use todo_core::{GroupedTodos, SystemClock, TodoId, TodoStore};

use crate::storage::BrowserStorage;

/// Store type used by the browser app
pub type AppStore = TodoStore<BrowserStorage, SystemClock>;

/// Handle to the todo store, provided via context
#[derive(Clone, Copy)]
pub struct TodoContext {
    store: RwSignal<AppStore>,
}

impl TodoContext {
    pub fn new(store: AppStore) -> Self {
        Self {
            store: RwSignal::new(store),
        }
    }

    pub fn draft(&self) -> String {
        self.store.with(|store| store.draft().to_string())
    }

    pub fn grouped(&self) -> GroupedTodos {
        self.store.with(|store| store.grouped())
    }

    /// (active, completed)
    pub fn counts(&self) -> (usize, usize) {
        self.store.with(|store| (store.active_count(), store.completed_count()))
    }

    /// Draft text edited
    pub fn set_draft(&self, text: String) {
        self.store.update(|store| store.set_draft(text));
    }

    /// Form submitted
    pub fn submit(&self) {
        self.store.update(|store| {
            if !store.submit() {
                log::debug!("Ignoring blank todo");
            }
        });
    }

    /// Checkbox changed
    pub fn toggle(&self, id: TodoId) {
        self.store.update(|store| {
            if !store.toggle(id) {
                log::warn!("No todo with id {}", id);
            }
        });
    }
}

/// Get the todo context
pub fn use_todo_context() -> TodoContext {
    expect_context::<TodoContext>()
}
