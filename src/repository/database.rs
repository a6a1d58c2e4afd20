use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel::sql_types::{Nullable, Timestamp};

use crate::errors::StoreError;
use crate::models::task::{NewTask, Task};
use crate::repository::schema::tasks::dsl::*;
use crate::repository::{TaskStore, UpdateOutcome};

type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;
type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

diesel::define_sql_function! {
    fn coalesce(x: Nullable<Timestamp>, y: Timestamp) -> Nullable<Timestamp>;
}

/// Diesel-backed store. Every operation is a single statement; soft-delete
/// uses COALESCE so re-deleting keeps the original stamp without a second
/// round trip.
#[derive(Debug, Clone)]
pub struct PgTaskStore {
    pool: DbPool,
}

impl PgTaskStore {
    pub fn new(database_url: &str) -> Result<Self, StoreError> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = r2d2::Pool::builder().build(manager)?;
        Ok(PgTaskStore { pool })
    }

    fn conn(&self) -> Result<DbConnection, StoreError> {
        Ok(self.pool.get()?)
    }
}

impl TaskStore for PgTaskStore {
    fn list_active(&self) -> Result<Vec<Task>, StoreError> {
        let rows = tasks
            .filter(deleted_at.is_null())
            .load::<Task>(&mut self.conn()?)?;
        Ok(rows)
    }

    fn find_by_id(&self, task_id: i32) -> Result<Option<Task>, StoreError> {
        let row = tasks
            .find(task_id)
            .get_result::<Task>(&mut self.conn()?)
            .optional()?;
        Ok(row)
    }

    fn create(&self, new_task: NewTask) -> Result<Task, StoreError> {
        let row = diesel::insert_into(tasks)
            .values(&new_task)
            .get_result::<Task>(&mut self.conn()?)?;
        Ok(row)
    }

    fn set_completed(&self, task_id: i32, done: bool) -> Result<UpdateOutcome, StoreError> {
        let stamp = done.then(|| Utc::now().naive_utc());
        let affected = diesel::update(tasks.find(task_id))
            .set(completed_at.eq(stamp))
            .execute(&mut self.conn()?)?;
        Ok(outcome(affected))
    }

    fn soft_delete(&self, task_id: i32) -> Result<UpdateOutcome, StoreError> {
        let affected = diesel::update(tasks.find(task_id))
            .set(deleted_at.eq(coalesce(deleted_at, Utc::now().naive_utc())))
            .execute(&mut self.conn()?)?;
        Ok(outcome(affected))
    }
}

fn outcome(affected: usize) -> UpdateOutcome {
    if affected == 0 {
        UpdateOutcome::NotFound
    } else {
        UpdateOutcome::Updated
    }
}
