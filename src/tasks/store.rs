//! The task store: ordered list of task records over key-value persistence.

use crate::error::{Error, Result};
use crate::storage::keys;
use crate::tasks::codec;
use crate::tasks::models::{Task, Urgency};
use crate::traits::KeyValueStore;
use chrono::{NaiveDate, NaiveTime};
use serde_json::Value;
use std::cell::RefCell;
use std::sync::mpsc;

/// A change to the task list, broadcast to subscribers after the mutation
/// has been persisted.
///
/// Events are signals to re-read the list, not payload carriers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskEvent {
    /// A task was appended to the list.
    Added,
    /// A task was newly marked complete.
    Completed,
    /// A task was removed from the list.
    Deleted,
    /// The whole list was cleared.
    Cleared,
}

/// One entry of the task list.
///
/// Every entry keeps the persisted line exactly as stored; entries that
/// match the record shape additionally carry the decoded task. An entry
/// that decodes to `None` is displayed as-is and never treated as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    /// The persisted line, exactly as stored.
    pub raw: String,
    /// Structured fields, when the line matches the encoded record shape.
    pub task: Option<Task>,
}

impl TaskEntry {
    fn from_raw(raw: String) -> Self {
        let task = codec::decode(&raw);
        Self { raw, task }
    }

    /// Whether this entry is marked complete.
    #[must_use]
    pub fn completed(&self) -> bool {
        codec::is_marked_complete(&self.raw)
    }
}

impl std::fmt::Display for TaskEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// Store for the ordered task list.
///
/// All operations are synchronous read-modify-writes against the single
/// persisted list under the `tasks` key. The store assumes a single writer;
/// subscriber bookkeeping uses interior mutability and is not `Sync`, so a
/// multi-threaded embedding must serialize whole operations externally.
#[derive(Debug)]
pub struct TaskStore<S> {
    store: S,
    subscribers: RefCell<Vec<mpsc::Sender<TaskEvent>>>,
}

impl<S: KeyValueStore> TaskStore<S> {
    /// Create a task store over the given key-value store.
    pub const fn new(store: S) -> Self {
        Self { store, subscribers: RefCell::new(Vec::new()) }
    }

    /// Access the underlying key-value store.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.store
    }

    /// Subscribe to task list changes.
    ///
    /// Every mutating operation sends one event to each live subscriber;
    /// observers should re-read the list on receipt. Dropped receivers are
    /// pruned on the next broadcast.
    pub fn subscribe(&self) -> mpsc::Receiver<TaskEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.borrow_mut().push(tx);
        rx
    }

    fn broadcast(&self, event: TaskEvent) {
        self.subscribers.borrow_mut().retain(|tx| tx.send(event).is_ok());
    }

    /// Load the persisted list of encoded records.
    fn load(&self) -> Result<Vec<String>> {
        Ok(match self.store.get(keys::TASKS)? {
            // A value of an unexpected shape yields an empty list rather
            // than an error.
            Some(value) => serde_json::from_value(value).unwrap_or_default(),
            None => Vec::new(),
        })
    }

    /// Persist the full list of encoded records.
    fn save(&self, records: &[String]) -> Result<()> {
        self.store.set(keys::TASKS, Value::from(records.to_vec()))
    }

    /// List all tasks in stored order.
    ///
    /// Returns an empty list when nothing is persisted.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    pub fn tasks(&self) -> Result<Vec<TaskEntry>> {
        Ok(self.load()?.into_iter().map(TaskEntry::from_raw).collect())
    }

    /// List only the entries marked complete, in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    pub fn completed_tasks(&self) -> Result<Vec<TaskEntry>> {
        Ok(self.tasks()?.into_iter().filter(TaskEntry::completed).collect())
    }

    /// List only the entries not yet marked complete, in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    pub fn pending_tasks(&self) -> Result<Vec<TaskEntry>> {
        Ok(self.tasks()?.into_iter().filter(|entry| !entry.completed()).collect())
    }

    /// Number of tasks in the list. Consistent with [`Self::tasks`] after
    /// every mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    pub fn count(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    /// Create a new task and append it to the end of the list.
    ///
    /// The title is stored as given but must not be empty or whitespace-only.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTitle`] for an empty or whitespace-only title,
    /// or an error if the underlying store fails. On error the list is left
    /// unchanged.
    pub fn add_task(
        &self,
        title: &str,
        urgency: Urgency,
        due_date: NaiveDate,
        due_time: NaiveTime,
    ) -> Result<Task> {
        if title.trim().is_empty() {
            return Err(Error::EmptyTitle);
        }

        let task =
            Task { title: title.to_string(), urgency, due_date, due_time, completed: false };

        let mut records = self.load()?;
        records.push(codec::encode(&task));
        self.save(&records)?;

        self.broadcast(TaskEvent::Added);
        Ok(task)
    }

    /// Mark the task at `index` complete.
    ///
    /// Idempotent: an already-complete task is left untouched, nothing is
    /// written, and no event fires. Returns whether the task was newly
    /// marked.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` does not refer to an
    /// existing entry, or an error if the underlying store fails.
    pub fn complete_task(&self, index: usize) -> Result<bool> {
        let mut records = self.load()?;
        let len = records.len();
        let record = records.get_mut(index).ok_or(Error::IndexOutOfRange { index, len })?;

        if codec::is_marked_complete(record) {
            return Ok(false);
        }

        *record = codec::mark_complete(record);
        self.save(&records)?;

        self.broadcast(TaskEvent::Completed);
        Ok(true)
    }

    /// Remove the task at `index`, returning the removed record.
    ///
    /// Entries after `index` shift down by one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` does not refer to an
    /// existing entry, or an error if the underlying store fails.
    pub fn delete_task(&self, index: usize) -> Result<String> {
        let mut records = self.load()?;
        let len = records.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        let removed = records.remove(index);
        self.save(&records)?;

        self.broadcast(TaskEvent::Deleted);
        Ok(removed)
    }

    /// Remove every task.
    ///
    /// The backing key is removed entirely rather than set to an empty list.
    /// Confirmation for this destructive action is a boundary concern; the
    /// store itself does not prompt.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store fails.
    pub fn clear_all(&self) -> Result<()> {
        self.store.remove(keys::TASKS)?;
        self.broadcast(TaskEvent::Cleared);
        Ok(())
    }
}
