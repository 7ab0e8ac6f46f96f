//! Task List Component
//!
//! Renders the collection in creation order.

use leptos::prelude::*;

use crate::components::TaskRow;
use crate::context::{use_app_context, ViewStateStoreFields};

/// List of task rows, one per task, keyed by id so each row renders once
#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();

    let tasks = move || ctx.view.tasks().get();

    view! {
        <ul class="task-list">
            <For
                each=tasks
                key=|task| task.id.clone()
                children=move |task| view! { <TaskRow task=task /> }
            />
        </ul>
    }
}
