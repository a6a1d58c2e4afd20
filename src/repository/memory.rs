use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;

use crate::errors::StoreError;
use crate::models::task::{NewTask, Task};
use crate::repository::{TaskStore, UpdateOutcome};

/// In-memory store with the same observable semantics as `PgTaskStore`.
/// Backs the test suite; also handy for running the service without a
/// database.
#[derive(Debug)]
pub struct MemoryTaskStore {
    tasks: Mutex<Vec<Task>>,
    next_id: AtomicI32,
}

impl Default for MemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        MemoryTaskStore {
            tasks: Mutex::new(Vec::new()),
            next_id: AtomicI32::new(1),
        }
    }

    fn rows(&self) -> Result<MutexGuard<'_, Vec<Task>>, StoreError> {
        self.tasks.lock().map_err(|_| StoreError::Poisoned)
    }
}

impl TaskStore for MemoryTaskStore {
    fn list_active(&self) -> Result<Vec<Task>, StoreError> {
        let rows = self.rows()?;
        Ok(rows.iter().filter(|task| task.is_active()).cloned().collect())
    }

    fn find_by_id(&self, task_id: i32) -> Result<Option<Task>, StoreError> {
        let rows = self.rows()?;
        Ok(rows.iter().find(|task| task.id == task_id).cloned())
    }

    fn create(&self, new_task: NewTask) -> Result<Task, StoreError> {
        let task = Task {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            description: new_task.description,
            created_at: Utc::now().naive_utc(),
            due_at: new_task.due_at,
            completed_at: None,
            deleted_at: None,
        };
        self.rows()?.push(task.clone());
        Ok(task)
    }

    fn set_completed(&self, task_id: i32, done: bool) -> Result<UpdateOutcome, StoreError> {
        let mut rows = self.rows()?;
        match rows.iter_mut().find(|task| task.id == task_id) {
            Some(task) => {
                task.completed_at = done.then(|| Utc::now().naive_utc());
                Ok(UpdateOutcome::Updated)
            }
            None => Ok(UpdateOutcome::NotFound),
        }
    }

    fn soft_delete(&self, task_id: i32) -> Result<UpdateOutcome, StoreError> {
        let mut rows = self.rows()?;
        match rows.iter_mut().find(|task| task.id == task_id) {
            Some(task) => {
                task.deleted_at.get_or_insert_with(|| Utc::now().naive_utc());
                Ok(UpdateOutcome::Updated)
            }
            None => Ok(UpdateOutcome::NotFound),
        }
    }
}
