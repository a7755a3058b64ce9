use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Mutex;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, TaskFields, User};
use crate::store::{IdentityStore, TaskStore};

/// In-memory user store backed by a `Mutex<Vec<_>>`.
///
/// Mirrors the Postgres store's behaviour, including the unique-email
/// constraint. Used by the test suite and handy for running the server
/// without a database.
#[derive(Default)]
pub struct MemoryIdentityStore {
    users: Mutex<Vec<User>>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl IdentityStore for MemoryIdentityStore {
    async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        // Same constraint the users table enforces with UNIQUE (email)
        if users.iter().any(|u| u.email == email) {
            return Err(AppError::Database(format!(
                "duplicate key value violates unique constraint on email: {}",
                email
            )));
        }

        let user = User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}

/// In-memory task store, insertion-ordered.
#[derive(Default)]
pub struct MemoryTaskStore {
    tasks: Mutex<Vec<Task>>,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskStore for MemoryTaskStore {
    async fn create(
        &self,
        owner: Uuid,
        title: &str,
        description: &str,
        due_date: NaiveDate,
        created_at: DateTime<Utc>,
    ) -> Result<Task, AppError> {
        let task = Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: description.to_string(),
            due_date,
            created_at,
            created_by: owner,
        };
        self.tasks.lock().unwrap().push(task.clone());
        Ok(task)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, AppError> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn find_by_owner(&self, owner: Uuid) -> Result<Vec<Task>, AppError> {
        let tasks = self.tasks.lock().unwrap();
        Ok(tasks
            .iter()
            .filter(|t| t.created_by == owner)
            .cloned()
            .collect())
    }

    async fn update(&self, id: Uuid, fields: TaskFields) -> Result<Option<Task>, AppError> {
        let mut tasks = self.tasks.lock().unwrap();
        match tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.title = fields.title;
                task.description = fields.description;
                task.due_date = fields.due_date;
                Ok(Some(task.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<u64, AppError> {
        let mut tasks = self.tasks.lock().unwrap();
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        Ok((before - tasks.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn due_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[actix_rt::test]
    async fn test_identity_store_crud() {
        let store = MemoryIdentityStore::new();

        let user = store
            .create("Alice", "a@x.com", "hash")
            .await
            .expect("create should succeed");
        assert_eq!(user.name, "Alice");

        let found = store.find_by_email("a@x.com").await.unwrap();
        assert_eq!(found.unwrap().id, user.id);

        let found = store.find_by_id(user.id).await.unwrap();
        assert_eq!(found.unwrap().email, "a@x.com");

        assert!(store.find_by_email("b@x.com").await.unwrap().is_none());
    }

    #[actix_rt::test]
    async fn test_identity_store_rejects_duplicate_email() {
        let store = MemoryIdentityStore::new();
        store.create("Alice", "a@x.com", "hash").await.unwrap();

        let result = store.create("Alice Again", "a@x.com", "hash2").await;
        assert!(result.is_err());
    }

    #[actix_rt::test]
    async fn test_task_store_crud() {
        let store = MemoryTaskStore::new();
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let task = store
            .create(owner, "T", "D", due_date(), Utc::now())
            .await
            .expect("create should succeed");
        assert_eq!(task.created_by, owner);

        assert_eq!(store.find_by_owner(owner).await.unwrap().len(), 1);
        assert!(store.find_by_owner(stranger).await.unwrap().is_empty());

        let updated = store
            .update(
                task.id,
                TaskFields {
                    title: "T2".to_string(),
                    description: "D2".to_string(),
                    due_date: due_date(),
                },
            )
            .await
            .unwrap()
            .expect("task should exist");
        assert_eq!(updated.title, "T2");
        assert_eq!(updated.created_by, owner);

        let missing = store
            .update(
                Uuid::new_v4(),
                TaskFields {
                    title: "x".to_string(),
                    description: "y".to_string(),
                    due_date: due_date(),
                },
            )
            .await
            .unwrap();
        assert!(missing.is_none());

        assert_eq!(store.delete(task.id).await.unwrap(), 1);
        assert_eq!(store.delete(task.id).await.unwrap(), 0);
        assert!(store.find_by_id(task.id).await.unwrap().is_none());
    }
}
