pub mod database;
pub mod memory;
pub mod schema;

use crate::errors::StoreError;
use crate::models::task::{NewTask, Task};

/// Outcome of an update targeting a single row by id. The store resolves
/// zero-rows-affected into `NotFound` itself, so callers never reason about
/// row counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated,
    NotFound,
}

/// Persistence seam for tasks. The HTTP layer only sees this trait; the
/// Postgres store backs the running service and the in-memory store backs
/// the tests.
pub trait TaskStore: Send + Sync {
    /// All rows whose `deleted_at` is null, in store-native order.
    fn list_active(&self) -> Result<Vec<Task>, StoreError>;

    /// Any row by id, soft-deleted ones included.
    fn find_by_id(&self, task_id: i32) -> Result<Option<Task>, StoreError>;

    fn create(&self, new_task: NewTask) -> Result<Task, StoreError>;

    /// Stamps `completed_at` with the current time (`done`) or clears it,
    /// regardless of the row's current completion or deletion state.
    fn set_completed(&self, task_id: i32, done: bool) -> Result<UpdateOutcome, StoreError>;

    /// Stamps `deleted_at` if it is still null. An already-deleted row keeps
    /// its original stamp and still counts as `Updated`: not-found strictly
    /// means the row does not exist in the table.
    fn soft_delete(&self, task_id: i32) -> Result<UpdateOutcome, StoreError>;
}
