//! Ticklist Frontend App
//!
//! Main application component: loads the persisted collection once at
//! startup, then wires the form and list to the shared context.

use leptos::prelude::*;

use crate::components::{NewTaskForm, TaskList};
use crate::context::{AppContext, ViewStateStoreFields};
use crate::storage::BrowserStorage;
use crate::store::TaskStore;

#[component]
pub fn App() -> impl IntoView {
    // A corrupt stored collection is unrecoverable: fail fast instead of
    // starting empty over data we could not read.
    let mut store = TaskStore::new(BrowserStorage::new());
    store.load().expect("stored task collection is unreadable");
    web_sys::console::log_1(&format!("[APP] Loaded {} tasks", store.tasks().len()).into());

    let ctx = AppContext::new(store);
    provide_context(ctx);

    view! {
        <main class="app">
            <h1>"Ticklist"</h1>

            <NewTaskForm />

            <TaskList />

            <p class="task-count">
                {move || format!("{} tasks", ctx.view.tasks().get().len())}
            </p>
        </main>
    }
}
