//! Task status tracking for background conversions.
//!
//! A mutex-guarded map keyed by task id, with explicit insert, update,
//! and read operations. Handlers never touch the map directly.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use serde::{Deserialize, Serialize};

/// The externally visible state of one conversion task.
///
/// Serializes with a `status` tag, matching the poll endpoint contract:
///
/// ```json
/// {"status": "processing", "step": "resolving glosses to poses"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaskStatus {
    /// The task is running; `step` is a human-readable progress label.
    Processing {
        /// What the pipeline is currently doing.
        step: String,
    },
    /// The task finished; `result` locates the produced artifact.
    Completed {
        /// Path of the pose file or rendered video.
        result: String,
    },
    /// The task failed.
    Error {
        /// User-facing failure message.
        message: String,
    },
    /// No task with the polled id exists.
    NotFound,
}

/// Concurrency-safe store of task statuses.
///
/// # Example
///
/// ```
/// use signpose_server::tasks::{TaskStatus, TaskStore};
///
/// let store = TaskStore::new();
/// store.insert("abc", "queued");
/// store.set_step("abc", "rendering video");
/// assert!(matches!(store.status("abc"), TaskStatus::Processing { .. }));
/// assert_eq!(store.status("missing"), TaskStatus::NotFound);
/// ```
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Mutex<HashMap<String, TaskStatus>>,
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new task in the processing state.
    pub fn insert(&self, task_id: &str, step: &str) {
        self.set(task_id, TaskStatus::Processing {
            step: step.to_string(),
        });
    }

    /// Updates a running task's progress label.
    pub fn set_step(&self, task_id: &str, step: &str) {
        self.set(task_id, TaskStatus::Processing {
            step: step.to_string(),
        });
    }

    /// Marks a task completed with its result location.
    pub fn complete(&self, task_id: &str, result: String) {
        self.set(task_id, TaskStatus::Completed { result });
    }

    /// Marks a task failed.
    pub fn fail(&self, task_id: &str, message: String) {
        self.set(task_id, TaskStatus::Error { message });
    }

    /// Reads a task's status. Unknown ids yield [`TaskStatus::NotFound`].
    pub fn status(&self, task_id: &str) -> TaskStatus {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(task_id)
            .cloned()
            .unwrap_or(TaskStatus::NotFound)
    }

    fn set(&self, task_id: &str, status: TaskStatus) {
        self.tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(task_id.to_string(), status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_processing_to_completed() {
        let store = TaskStore::new();
        store.insert("t1", "queued");
        assert_eq!(
            store.status("t1"),
            TaskStatus::Processing {
                step: "queued".to_string()
            }
        );

        store.set_step("t1", "rendering video");
        assert_eq!(
            store.status("t1"),
            TaskStatus::Processing {
                step: "rendering video".to_string()
            }
        );

        store.complete("t1", "static/poses/t1.pose.json".to_string());
        assert!(matches!(store.status("t1"), TaskStatus::Completed { .. }));
    }

    #[test]
    fn unknown_task_is_not_found() {
        let store = TaskStore::new();
        assert_eq!(store.status("nope"), TaskStatus::NotFound);
    }

    #[test]
    fn failure_keeps_the_message() {
        let store = TaskStore::new();
        store.insert("t2", "queued");
        store.fail("t2", "no sign found for \"ghost\"".to_string());
        assert_eq!(
            store.status("t2"),
            TaskStatus::Error {
                message: "no sign found for \"ghost\"".to_string()
            }
        );
    }

    #[test]
    fn status_tag_serialization() {
        let json = serde_json::to_string(&TaskStatus::NotFound).unwrap();
        assert_eq!(json, r#"{"status":"not_found"}"#);

        let json = serde_json::to_string(&TaskStatus::Processing {
            step: "queued".to_string(),
        })
        .unwrap();
        assert!(json.contains(r#""status":"processing""#), "json: {json}");
    }
}
