use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, TaskFields, User};
use crate::store::{IdentityStore, TaskStore};

/// Postgres-backed user store. Schema lives in `schema.sql`.
#[derive(Clone)]
pub struct PgIdentityStore {
    pool: PgPool,
}

impl PgIdentityStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityStore for PgIdentityStore {
    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AppError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, email, password_hash)
             VALUES ($1, $2, $3, $4)
             RETURNING id, name, email, password_hash",
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

/// Postgres-backed task store.
#[derive(Clone)]
pub struct PgTaskStore {
    pool: PgPool,
}

impl PgTaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskStore for PgTaskStore {
    async fn create(
        &self,
        owner: Uuid,
        title: &str,
        description: &str,
        due_date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (id, title, description, due_date, created_at, created_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id, title, description, due_date, created_at, created_by",
        )
        .bind(Uuid::new_v4())
        .bind(title)
        .bind(description)
        .bind(due_date)
        .bind(created_at)
        .bind(owner)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, AppError> {
        let task = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, due_date, created_at, created_by
             FROM tasks WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, title, description, due_date, created_at, created_by
             FROM tasks WHERE created_by = $1
             ORDER BY created_at DESC",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    async fn update(&self, id: Uuid, fields: TaskFields) -> Result<Option<Task>, AppError> {
        // id and created_by are never part of the SET list
        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks
             SET title = $1, description = $2, due_date = $3
             WHERE id = $4
             RETURNING id, title, description, due_date, created_at, created_by",
        )
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.due_date)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(task)
    }

    async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
