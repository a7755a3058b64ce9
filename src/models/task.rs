use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// A task entity as stored in the database and returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Unique identifier for the task (UUID v4).
    pub id: Uuid,
    /// The title of the task.
    pub title: String,
    /// A description of the task.
    pub description: String,
    /// The date the task is due.
    pub due_date: NaiveDate,
    /// Timestamp of when the task was created. Set server-side, once.
    pub created_at: DateTime<Utc>,
    /// Identifier of the user who created the task. Immutable after creation.
    pub created_by: Uuid,
}

/// Input structure for creating a task.
/// Contains validation rules for its fields.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    /// The title of the task.
    /// Must be between 1 and 200 characters.
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// A description for the task.
    /// Maximum length of 1000 characters.
    #[validate(length(max = 1000))]
    pub description: String,

    /// The due date for the task.
    pub due_date: NaiveDate,
}

/// Input structure for updating a task. Carries the full task shape including
/// its id; `created_by` is accepted so that an ownership transfer attempt can
/// be rejected explicitly rather than silently ignored.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskUpdate {
    pub id: Uuid,

    #[validate(length(min = 1, max = 200))]
    pub title: String,

    #[validate(length(max = 1000))]
    pub description: String,

    pub due_date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
}

/// The enumerated set of fields a task owner may change. Identity and
/// ownership columns are deliberately not representable here.
#[derive(Debug, Clone)]
pub struct TaskFields {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
}

impl From<&TaskUpdate> for TaskFields {
    fn from(update: &TaskUpdate) -> Self {
        Self {
            title: update.title.clone(),
            description: update.description.clone(),
            due_date: update.due_date,
        }
    }
}
