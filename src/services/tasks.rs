//!
//! # Ownership-Checked Task Operations
//!
//! Every operation takes the already-resolved current user as its
//! authorization context. Reads and mutations by id check ownership before
//! touching the store; `list_mine` is scoped by construction since the query
//! itself filters by owner.

use chrono::Utc;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{Task, TaskFields, TaskInput, TaskUpdate, User};
use crate::state::AppState;
use crate::store::TaskStore;

/// Creates a task owned by the current user, with a server-side creation
/// timestamp.
pub async fn create(
    state: &AppState,
    current_user: &User,
    input: TaskInput,
) -> Result<Task, AppError> {
    state
        .tasks
        .create(
            current_user.id,
            &input.title,
            &input.description,
            input.due_date,
            Utc::now(),
        )
        .await
}

/// Returns every task owned by the current user, in store-native order.
pub async fn list_mine(state: &AppState, current_user: &User) -> Result<Vec<Task>, AppError> {
    state.tasks.find_by_owner(current_user.id).await
}

/// Updates a task owned by the current user.
///
/// Fails with `NotFound` if the task doesn't exist, `Forbidden` if it belongs
/// to someone else, and `Validation` if the payload tries to move the task to
/// another owner. Only title, description, and due date are ever written.
pub async fn update(
    state: &AppState,
    current_user: &User,
    update: TaskUpdate,
) -> Result<Task, AppError> {
    let task = state
        .tasks
        .find_by_id(update.id)
        .await?
        .ok_or_else(|| AppError::NotFound("The task you're trying to update doesn't exist".into()))?;

    if task.created_by != current_user.id {
        return Err(AppError::Forbidden(
            "The task you're trying to update doesn't belong to you".into(),
        ));
    }

    if let Some(new_owner) = update.created_by {
        if new_owner != task.created_by {
            return Err(AppError::Validation(
                "You can't transfer this task to another user".into(),
            ));
        }
    }

    state
        .tasks
        .update(update.id, TaskFields::from(&update))
        .await?
        .ok_or_else(|| AppError::NotFound("The task you're trying to update doesn't exist".into()))
}

/// Deletes a task owned by the current user.
pub async fn delete(state: &AppState, current_user: &User, task_id: Uuid) -> Result<(), AppError> {
    let task = state
        .tasks
        .find_by_id(task_id)
        .await?
        .ok_or_else(|| AppError::NotFound("The task you're trying to delete doesn't exist".into()))?;

    if task.created_by != current_user.id {
        return Err(AppError::Forbidden(
            "You can't delete this task because it doesn't belong to you".into(),
        ));
    }

    let deleted = state.tasks.delete(task_id).await?;
    if deleted == 0 {
        return Err(AppError::NotFound(
            "The task you're trying to delete doesn't exist".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenService;
    use crate::store::{IdentityStore, MemoryIdentityStore, MemoryTaskStore};
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState::new(
            Arc::new(MemoryIdentityStore::new()),
            Arc::new(MemoryTaskStore::new()),
            TokenService::new("test-secret", 30),
        )
    }

    async fn make_user(state: &AppState, email: &str) -> User {
        state
            .users
            .create("Test User", email, "hash")
            .await
            .unwrap()
    }

    fn task_input(title: &str) -> TaskInput {
        TaskInput {
            title: title.to_string(),
            description: "D".to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        }
    }

    fn task_update(task: &Task, title: &str, created_by: Option<Uuid>) -> TaskUpdate {
        TaskUpdate {
            id: task.id,
            title: title.to_string(),
            description: task.description.clone(),
            due_date: task.due_date,
            created_by,
        }
    }

    #[actix_rt::test]
    async fn test_create_and_list_are_owner_scoped() {
        let state = test_state();
        let alice = make_user(&state, "a@x.com").await;
        let bob = make_user(&state, "b@x.com").await;

        let task = create(&state, &alice, task_input("Alice task")).await.unwrap();
        assert_eq!(task.created_by, alice.id);

        create(&state, &bob, task_input("Bob task")).await.unwrap();

        let mine = list_mine(&state, &alice).await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].title, "Alice task");
    }

    #[actix_rt::test]
    async fn test_update_own_task() {
        let state = test_state();
        let alice = make_user(&state, "a@x.com").await;
        let task = create(&state, &alice, task_input("T")).await.unwrap();

        let updated = update(&state, &alice, task_update(&task, "T2", None))
            .await
            .unwrap();
        assert_eq!(updated.title, "T2");
        assert_eq!(updated.created_by, alice.id);
        assert_eq!(updated.created_at, task.created_at);
    }

    #[actix_rt::test]
    async fn test_update_missing_task_is_not_found() {
        let state = test_state();
        let alice = make_user(&state, "a@x.com").await;

        let ghost = TaskUpdate {
            id: Uuid::new_v4(),
            title: "T".to_string(),
            description: "D".to_string(),
            due_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            created_by: None,
        };
        let result = update(&state, &alice, ghost).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_rt::test]
    async fn test_update_foreign_task_is_forbidden_and_unchanged() {
        let state = test_state();
        let alice = make_user(&state, "a@x.com").await;
        let bob = make_user(&state, "b@x.com").await;
        let task = create(&state, &alice, task_input("T")).await.unwrap();

        let result = update(&state, &bob, task_update(&task, "Hijacked", None)).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));

        let stored = state.tasks.find_by_id(task.id).await.unwrap().unwrap();
        assert_eq!(stored.title, "T");
    }

    #[actix_rt::test]
    async fn test_ownership_transfer_rejected() {
        let state = test_state();
        let alice = make_user(&state, "a@x.com").await;
        let bob = make_user(&state, "b@x.com").await;
        let task = create(&state, &alice, task_input("T")).await.unwrap();

        let result = update(&state, &alice, task_update(&task, "T", Some(bob.id))).await;
        assert!(matches!(result, Err(AppError::Validation(_))));

        let stored = state.tasks.find_by_id(task.id).await.unwrap().unwrap();
        assert_eq!(stored.created_by, alice.id);
    }

    #[actix_rt::test]
    async fn test_update_with_own_id_as_created_by_is_allowed() {
        let state = test_state();
        let alice = make_user(&state, "a@x.com").await;
        let task = create(&state, &alice, task_input("T")).await.unwrap();

        // Echoing the current owner back is not a transfer
        let updated = update(&state, &alice, task_update(&task, "T2", Some(alice.id)))
            .await
            .unwrap();
        assert_eq!(updated.title, "T2");
    }

    #[actix_rt::test]
    async fn test_delete_own_and_foreign_tasks() {
        let state = test_state();
        let alice = make_user(&state, "a@x.com").await;
        let bob = make_user(&state, "b@x.com").await;
        let task = create(&state, &alice, task_input("T")).await.unwrap();

        let result = delete(&state, &bob, task.id).await;
        assert!(matches!(result, Err(AppError::Forbidden(_))));
        assert!(state.tasks.find_by_id(task.id).await.unwrap().is_some());

        delete(&state, &alice, task.id).await.unwrap();
        assert!(state.tasks.find_by_id(task.id).await.unwrap().is_none());

        let result = delete(&state, &alice, task.id).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
