//! Task Store
//!
//! Owns the in-memory task collection, the single source of truth for
//! rendering, and persists the whole collection after every mutation.

use crate::error::StoreError;
use crate::models::Task;
use crate::storage::StorageBackend;

/// The task collection plus its storage slot.
///
/// Every mutation (`create`, `toggle`) is followed by a synchronous full
/// persist; there is no batching and no partial write.
pub struct TaskStore<S: StorageBackend> {
    tasks: Vec<Task>,
    storage: S,
}

impl<S: StorageBackend> TaskStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            tasks: Vec::new(),
            storage,
        }
    }

    /// Replaces the collection with whatever the slot holds.
    ///
    /// An absent slot yields an empty collection. Malformed content is an
    /// error; callers fail fast rather than falling back to empty.
    pub fn load(&mut self) -> Result<(), StoreError> {
        self.tasks = match self.storage.read() {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        Ok(())
    }

    /// Appends a new task with the given title and persists.
    ///
    /// An empty title is rejected without side effects and yields `None`.
    pub fn create(&mut self, title: &str) -> Result<Option<Task>, StoreError> {
        if title.is_empty() {
            return Ok(None);
        }
        let task = Task::new(title);
        self.tasks.push(task.clone());
        self.persist()?;
        Ok(Some(task))
    }

    /// Flips the completed flag of the task with the given id and
    /// persists, yielding the new flag. Unknown ids are a no-op.
    pub fn toggle(&mut self, id: &str) -> Result<Option<bool>, StoreError> {
        let completed = match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                task.completed
            }
            None => return Ok(None),
        };
        self.persist()?;
        Ok(Some(completed))
    }

    /// Current collection, in creation order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn persist(&self) -> Result<(), StoreError> {
        let payload = serde_json::to_string(&self.tasks)?;
        self.storage.write(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStore;
    use crate::storage::{MemoryStorage, StorageBackend};

    fn store_with_shared_slot() -> (TaskStore<MemoryStorage>, MemoryStorage) {
        let storage = MemoryStorage::new();
        (TaskStore::new(storage.clone()), storage)
    }

    #[test]
    fn load_from_empty_storage_yields_no_tasks() {
        let (mut store, storage) = store_with_shared_slot();

        store.load().expect("empty slot should load cleanly");

        assert!(store.tasks().is_empty());
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn create_appends_incomplete_task_with_fresh_id() {
        let (mut store, storage) = store_with_shared_slot();

        let task = store
            .create("Buy milk")
            .expect("persist should succeed")
            .expect("non-empty title should create a task");

        assert_eq!(store.tasks().len(), 1);
        assert_eq!(task.title, "Buy milk");
        assert!(!task.completed);
        assert!(!task.id.is_empty());
        assert_eq!(storage.write_count(), 1);
    }

    #[test]
    fn created_ids_are_unique() {
        let (mut store, _storage) = store_with_shared_slot();

        let first = store.create("One").unwrap().unwrap();
        let second = store.create("Two").unwrap().unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn empty_title_is_rejected_without_persist() {
        let (mut store, storage) = store_with_shared_slot();

        let created = store.create("").expect("rejection is not an error");

        assert!(created.is_none());
        assert!(store.tasks().is_empty());
        assert_eq!(storage.write_count(), 0);
    }

    #[test]
    fn save_then_load_round_trips_collection() {
        let (mut store, storage) = store_with_shared_slot();
        store.create("First").unwrap();
        store.create("Second").unwrap();
        let second_id = store.tasks()[1].id.clone();
        store.toggle(&second_id).unwrap();

        let mut reloaded = TaskStore::new(storage);
        reloaded.load().expect("persisted payload should parse");

        assert_eq!(reloaded.tasks().len(), 2);
        for (original, loaded) in store.tasks().iter().zip(reloaded.tasks()) {
            assert_eq!(original.id, loaded.id);
            assert_eq!(original.title, loaded.title);
            assert_eq!(original.completed, loaded.completed);
        }
    }

    #[test]
    fn toggle_flips_flag_and_persists() {
        let (mut store, storage) = store_with_shared_slot();
        let task = store.create("Water plants").unwrap().unwrap();

        let flipped = store.toggle(&task.id).expect("persist should succeed");
        assert_eq!(flipped, Some(true));
        assert!(store.tasks()[0].completed);

        let mut reloaded = TaskStore::new(storage);
        reloaded.load().unwrap();
        let loaded = reloaded
            .tasks()
            .iter()
            .find(|t| t.id == task.id)
            .expect("toggled task should survive reload");
        assert!(loaded.completed);
    }

    #[test]
    fn toggle_twice_returns_to_incomplete() {
        let (mut store, _storage) = store_with_shared_slot();
        let task = store.create("Flip me").unwrap().unwrap();

        store.toggle(&task.id).unwrap();
        let flipped_back = store.toggle(&task.id).unwrap();

        assert_eq!(flipped_back, Some(false));
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn toggle_unknown_id_is_a_no_op() {
        let (mut store, storage) = store_with_shared_slot();
        store.create("Only task").unwrap();
        let writes_before = storage.write_count();

        let result = store.toggle("no-such-id").expect("no-op is not an error");

        assert!(result.is_none());
        assert!(!store.tasks()[0].completed);
        assert_eq!(storage.write_count(), writes_before);
    }

    #[test]
    fn creation_order_survives_reload() {
        let (mut store, storage) = store_with_shared_slot();
        store.create("A").unwrap();
        store.create("B").unwrap();
        store.create("C").unwrap();

        let mut reloaded = TaskStore::new(storage);
        reloaded.load().unwrap();

        let titles: Vec<&str> = reloaded.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn malformed_payload_fails_load() {
        let (mut store, storage) = store_with_shared_slot();
        storage.seed("not json at all");

        assert!(store.load().is_err());
    }

    #[test]
    fn historical_browser_payload_parses_with_reconstructed_timestamp() {
        // Payload shape older sessions may have persisted: camelCase keys,
        // ISO-8601 text with milliseconds under createdAt.
        let payload = r#"[{"id":"abc-123","title":"Old task","completed":true,"createdAt":"2024-05-01T10:30:00.000Z"}]"#;
        let (mut store, storage) = store_with_shared_slot();
        storage.seed(payload);

        store.load().expect("historical payload should parse");

        let task = &store.tasks()[0];
        assert_eq!(task.id, "abc-123");
        assert!(task.completed);
        assert_eq!(task.created_at.to_rfc3339(), "2024-05-01T10:30:00+00:00");
    }

    #[test]
    fn persisted_payload_uses_camel_case_keys() {
        let (mut store, storage) = store_with_shared_slot();
        store.create("Check the wire format").unwrap();

        let payload = storage.read().expect("create should have persisted");
        assert!(payload.contains("\"createdAt\""));
        assert!(payload.contains("\"completed\":false"));
    }
}
