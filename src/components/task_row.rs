//! Task Row Component
//!
//! A single rendered task with its toggle control.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Task;

/// One list row: a checkbox reflecting `completed` and the title text.
///
/// The change handler captures the task id and resolves it against the
/// store at mutation time, so it stays correct if reordering or deletion
/// is ever added.
#[component]
pub fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_app_context();

    let id = task.id.clone();

    view! {
        <li class="task-row">
            <label>
                <input
                    type="checkbox"
                    checked=task.completed
                    on:change=move |_| ctx.toggle(&id)
                />
                <span class="task-title">{task.title}</span>
            </label>
        </li>
    }
}
