use chrono::NaiveDateTime;
use diesel::{Identifiable, Insertable, Queryable};
use serde::{Deserialize, Serialize};

use crate::errors::ApiError;

pub const MAX_DESCRIPTION_LEN: usize = 255;

/// A persisted task row. `deleted_at` is the soft-delete marker: rows with a
/// non-null value never appear in listings but stay addressable by id.
#[derive(Serialize, Deserialize, Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = crate::repository::schema::tasks)]
pub struct Task {
    pub id: i32,
    pub description: String,
    pub created_at: NaiveDateTime,
    pub due_at: Option<NaiveDateTime>,
    pub completed_at: Option<NaiveDateTime>,
    pub deleted_at: Option<NaiveDateTime>,
}

impl Task {
    pub fn is_active(&self) -> bool {
        self.deleted_at.is_none()
    }
}

/// Validated insert payload. `created_at` is left to the column default,
/// `completed_at`/`deleted_at` start null.
#[derive(Serialize, Deserialize, Debug, Clone, Insertable)]
#[diesel(table_name = crate::repository::schema::tasks)]
pub struct NewTask {
    pub description: String,
    pub due_at: Option<NaiveDateTime>,
}

/// Raw POST /tasks body, before validation. `description` is an `Option` so
/// a missing field reports the same way as an empty one.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CreateTaskRequest {
    pub description: Option<String>,
    #[serde(default)]
    pub due_at: Option<NaiveDateTime>,
}

impl CreateTaskRequest {
    pub fn validate(self) -> Result<NewTask, ApiError> {
        let description = self.description.unwrap_or_default();
        let description = description.trim();
        if description.is_empty() {
            return Err(ApiError::Validation("description is required".to_string()));
        }
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            return Err(ApiError::Validation(format!(
                "description must be at most {} characters",
                MAX_DESCRIPTION_LEN
            )));
        }
        Ok(NewTask {
            description: description.to_string(),
            due_at: self.due_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(description: Option<&str>) -> CreateTaskRequest {
        CreateTaskRequest {
            description: description.map(str::to_string),
            due_at: None,
        }
    }

    #[test]
    fn accepts_trimmed_description() {
        let new_task = request(Some("  Buy milk  ")).validate().unwrap();
        assert_eq!(new_task.description, "Buy milk");
        assert!(new_task.due_at.is_none());
    }

    #[test]
    fn rejects_missing_description() {
        assert!(matches!(
            request(None).validate(),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn rejects_blank_description() {
        assert!(matches!(
            request(Some("   ")).validate(),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn rejects_overlong_description() {
        let long = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        assert!(matches!(
            request(Some(&long)).validate(),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn keeps_description_at_limit() {
        let exact = "x".repeat(MAX_DESCRIPTION_LEN);
        assert!(request(Some(&exact)).validate().is_ok());
    }
}
