//! Todo App
//!
//! Root component: entry form, active and completed sections.

use leptos::prelude::*;
use todo_core::{StoreConfig, SystemClock, TodoStore};

use crate::components::{NewTodoForm, TodoSection};
use crate::context::TodoContext;
use crate::storage::BrowserStorage;

#[component]
pub fn App() -> impl IntoView {
    let store = TodoStore::open(BrowserStorage, SystemClock, StoreConfig::default());
    let ctx = TodoContext::new(store);

    // Provide context to all children
    provide_context(ctx);

    // Typing in the draft doesn't touch the lists
    let grouped = Memo::new(move |_| ctx.grouped());
    let active = Signal::derive(move || grouped.get().active);
    let completed = Signal::derive(move || grouped.get().completed);

    view! {
        <div class="app">
            <h1>"Todo App"</h1>

            <NewTodoForm />

            <div class="todo-lists">
                <TodoSection title="Active Tasks" todos=active />
                <TodoSection title="Completed Tasks" todos=completed />
            </div>

            <p class="todo-count">
                {move || {
                    let (active, completed) = ctx.counts();
                    format!("{} active, {} completed", active, completed)
                }}
            </p>
        </div>
    }
}
