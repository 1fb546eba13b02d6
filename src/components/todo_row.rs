//! Todo Row Component

use chrono::{DateTime, Utc};
use leptos::prelude::*;
use todo_core::TodoItem;
use wasm_bindgen::JsValue;

use crate::context::use_todo_context;

/// A single todo with its checkbox and creation time
#[component]
pub fn TodoRow(todo: TodoItem) -> impl IntoView {
    let ctx = use_todo_context();

    let id = todo.id;
    let completed = todo.completed;
    let created = locale_timestamp(&todo.timestamp);
    let row_class = if completed { "todo-item completed" } else { "todo-item" };

    view! {
        <li class=row_class>
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| ctx.toggle(id)
            />
            <div class="todo-content">
                <span>{todo.text}</span>
                <span class="timestamp">{created}</span>
            </div>
        </li>
    }
}

/// Render with the browser's locale, like `Date.prototype.toLocaleString()`
fn locale_timestamp(timestamp: &DateTime<Utc>) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(timestamp.timestamp_millis() as f64));
    date.to_locale_string("default", &JsValue::UNDEFINED).into()
}
