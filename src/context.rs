//! Application Context
//!
//! Shared handle provided via Leptos Context API. Owns the task store and
//! the reactive projection the components render from.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Task;
use crate::storage::BrowserStorage;
use crate::store::TaskStore;

/// Reactive render state with field-level reactivity.
///
/// A one-way projection of the store's collection; components only read
/// it, mutations always go through [`AppContext`] into the store first.
#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// All tasks, in creation order
    pub tasks: Vec<Task>,
}

/// App-wide handle provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    store: StoredValue<TaskStore<BrowserStorage>>,
    /// Render projection of the task collection
    pub view: Store<ViewState>,
}

impl AppContext {
    pub fn new(store: TaskStore<BrowserStorage>) -> Self {
        let view = Store::new(ViewState {
            tasks: store.tasks().to_vec(),
        });
        Self {
            store: StoredValue::new(store),
            view,
        }
    }

    /// Creates a task from the submitted title and persists.
    ///
    /// Returns whether a task was created, so the form only clears its
    /// input on success.
    pub fn create(&self, title: &str) -> bool {
        let created = self
            .store
            .try_update_value(|store| store.create(title))
            .expect("task store disposed")
            .expect("persisting tasks failed");
        match created {
            Some(task) => {
                self.view.tasks().write().push(task);
                true
            }
            None => false,
        }
    }

    /// Flips the completed flag of the task with the given id and persists.
    pub fn toggle(&self, id: &str) {
        let toggled = self
            .store
            .try_update_value(|store| store.toggle(id))
            .expect("task store disposed")
            .expect("persisting tasks failed");
        if let Some(completed) = toggled {
            if let Some(task) = self.view.tasks().write().iter_mut().find(|t| t.id == id) {
                task.completed = completed;
            }
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
