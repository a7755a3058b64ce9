//!
//! # Persistence Contracts
//!
//! The core never talks to a database directly; it goes through the two store
//! traits defined here. `pg` provides the Postgres-backed implementations used
//! in production, `memory` a `Mutex`-guarded in-memory implementation used by
//! the test suite.
//!
//! Email uniqueness and atomic read-modify-write of a task are the store's
//! responsibility; the core performs no locking of its own.

pub mod memory;
pub mod pg;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, TaskFields, User};

pub use memory::{MemoryIdentityStore, MemoryTaskStore};
pub use pg::{PgIdentityStore, PgTaskStore};

/// Persistence-backed lookup and creation of user records.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    /// Creates a user. The email must be unique across the store.
    async fn create(&self, name: &str, email: &str, password_hash: &str)
        -> Result<User, AppError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError>;
}

/// Persistence-backed CRUD of task records.
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn create(
        &self,
        owner: Uuid,
        title: &str,
        description: &str,
        due_date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Result<Task, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, AppError>;

    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Task>, AppError>;

    /// Applies the enumerated updatable fields to the task with the given id.
    /// Returns `None` if no such task exists.
    async fn update(&self, id: Uuid, fields: TaskFields) -> Result<Option<Task>, AppError>;

    /// Deletes the task with the given id, returning the number of rows removed.
    async fn delete(&self, id: Uuid) -> Result<u64, AppError>;
}
