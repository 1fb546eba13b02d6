//! New Todo Form Component

use leptos::prelude::*;

use crate::context::use_todo_context;

/// Entry field and submit button
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_todo_context();

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit();
    };

    view! {
        <form class="todo-form" on:submit=add_todo>
            <input
                type="text"
                class="todo-input"
                placeholder="What needs to be done?"
                prop:value=move || ctx.draft()
                on:input=move |ev| ctx.set_draft(event_target_value(&ev))
            />
            <button type="submit" class="add-button">"Add Todo"</button>
        </form>
    }
}
