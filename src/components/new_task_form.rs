//! New Task Form Component
//!
//! Form for creating new tasks.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::use_app_context;

/// Form with a single text input; submit appends a task
#[component]
pub fn NewTaskForm() -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());

    let create_task = move |ev: web_sys::SubmitEvent| {
        // Suppress navigation before any precondition check
        ev.prevent_default();
        let text = title.get();
        if text.is_empty() {
            return;
        }
        if ctx.create(&text) {
            set_title.set(String::new());
        }
    };

    view! {
        <form class="new-task-form" on:submit=create_task>
            <input
                type="text"
                placeholder="Add a task..."
                prop:value=move || title.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_title.set(input.value());
                }
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
