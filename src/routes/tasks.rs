use crate::{
    auth::CurrentSubject,
    error::AppError,
    models::{TaskInput, TaskUpdate},
    services,
    state::AppState,
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

/// Retrieves every task owned by the authenticated user.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `Task` objects.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `500 Internal Server Error`: For database errors or other unexpected issues.
#[get("/")]
pub async fn get_tasks(
    state: web::Data<AppState>,
    subject: CurrentSubject,
) -> Result<impl Responder, AppError> {
    let current_user = services::users::resolve_current_user(&state, &subject.0).await?;
    let tasks = services::tasks::list_mine(&state, &current_user).await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Creates a new task for the authenticated user.
///
/// The task's owner and creation timestamp are set server-side; the client
/// supplies only title, description, and due date.
///
/// ## Responses:
/// - `201 Created`: Returns the newly created `Task` object as JSON.
/// - `400 Bad Request`: If input validation on `TaskInput` fails.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `500 Internal Server Error`: For database errors or other unexpected issues.
#[post("/")]
pub async fn create_task(
    state: web::Data<AppState>,
    subject: CurrentSubject,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let current_user = services::users::resolve_current_user(&state, &subject.0).await?;
    let task = services::tasks::create(&state, &current_user, task_data.into_inner()).await?;

    Ok(HttpResponse::Created().json(task))
}

/// Updates an existing task owned by the authenticated user.
///
/// Expects the full task shape including its id. Attempting to hand the task
/// to another user via `created_by` is rejected.
///
/// ## Responses:
/// - `200 OK`: Returns the updated `Task` object as JSON.
/// - `400 Bad Request`: If validation fails or the payload attempts an ownership transfer.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `403 Forbidden`: If the task belongs to another user.
/// - `404 Not Found`: If no task with the given id exists.
#[put("/")]
pub async fn update_task(
    state: web::Data<AppState>,
    subject: CurrentSubject,
    task_data: web::Json<TaskUpdate>,
) -> Result<impl Responder, AppError> {
    task_data.validate()?;

    let current_user = services::users::resolve_current_user(&state, &subject.0).await?;
    let task = services::tasks::update(&state, &current_user, task_data.into_inner()).await?;

    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task owned by the authenticated user.
///
/// ## Responses:
/// - `200 OK`: Confirmation message on successful deletion.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `403 Forbidden`: If the task belongs to another user.
/// - `404 Not Found`: If no task with the given id exists.
#[delete("/{task_id}")]
pub async fn delete_task(
    state: web::Data<AppState>,
    subject: CurrentSubject,
    task_id: web::Path<Uuid>,
) -> Result<impl Responder, AppError> {
    let current_user = services::users::resolve_current_user(&state, &subject.0).await?;
    services::tasks::delete(&state, &current_user, task_id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Task deleted successfully"
    })))
}
