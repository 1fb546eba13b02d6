//! Todo Section Component

use leptos::prelude::*;
use todo_core::TodoItem;

use crate::components::TodoRow;

/// Titled list of todos
#[component]
pub fn TodoSection(title: &'static str, todos: Signal<Vec<TodoItem>>) -> impl IntoView {
    view! {
        <div class="todo-section">
            <h2>{title}</h2>
            <ul class="todo-list">
                <For
                    each=move || todos.get()
                    key=|todo| todo.id
                    children=move |todo| view! { <TodoRow todo=todo /> }
                />
            </ul>
        </div>
    }
}
