//! The task list.
//!
//! Tasks carry a title, an urgency level, and a due date and time. The list
//! is an ordered sequence persisted as one encoded line per task under a
//! single storage key; insertion order is display order is storage order,
//! and mutations address entries by their current index.
//!
//! # Example
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use taskdeck::tasks::{TaskStore, Urgency};
//! use taskdeck::testing::MemoryKvStore;
//!
//! let store = TaskStore::new(MemoryKvStore::new());
//! let refresh = store.subscribe();
//!
//! store
//!     .add_task(
//!         "Buy milk",
//!         Urgency::Low,
//!         NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
//!         NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
//!     )
//!     .unwrap();
//!
//! // Observers re-read the list when an event arrives.
//! assert!(refresh.try_recv().is_ok());
//! assert_eq!(store.count().unwrap(), 1);
//!
//! store.complete_task(0).unwrap();
//! let tasks = store.tasks().unwrap();
//! assert_eq!(tasks[0].to_string(), "✅ Buy milk - [Low] - Due: May 1, 2024 at 09:00 AM");
//! ```

pub mod codec;
pub mod models;
pub mod store;

pub use models::{InvalidUrgency, Task, Urgency};
pub use store::{TaskEntry, TaskEvent, TaskStore};
