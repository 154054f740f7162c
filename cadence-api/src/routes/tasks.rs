/// Task endpoints
///
/// # Endpoints
///
/// - `GET    /api/tasks?goal_id=` - List tasks of an owned goal
/// - `POST   /api/tasks`          - Create a task (body carries `goal_id`)
/// - `PUT    /api/tasks/:id`      - Full-replace update
/// - `DELETE /api/tasks/:id`      - Delete
///
/// Ownership runs through the whole chain (task -> goal -> track -> user);
/// a task that exists under someone else's track is reported as 404.

use crate::{
    app::{AppState, CurrentUser},
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use cadence_shared::models::task::{CreateTask, Task, UpdateTask};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

/// Query parameters for listing tasks
#[derive(Debug, Deserialize)]
pub struct ListTasksQuery {
    /// Parent goal
    pub goal_id: Uuid,
}

/// Creation payload for a task
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTaskPayload {
    /// Parent goal
    pub goal_id: Uuid,

    /// Task title (required)
    #[validate(length(min = 1, max = 255, message = "Task title is required"))]
    pub title: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

/// Update payload for a task (full replace)
///
/// An omitted `completed` resets the task to not completed.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskPayload {
    /// Task title (required)
    #[validate(length(min = 1, max = 255, message = "Task title is required"))]
    pub title: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Completion flag
    #[serde(default)]
    pub completed: bool,
}

/// Lists the tasks of a goal the caller transitively owns, in creation order
pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<ListTasksQuery>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = Task::list_for_goal(&state.db, query.goal_id, user.id).await?;
    Ok(Json(tasks))
}

/// Creates a task under a goal the caller transitively owns
pub async fn create_task(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreateTaskPayload>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    payload.validate().map_err(ApiError::from_validation)?;

    let task = Task::create(
        &state.db,
        payload.goal_id,
        user.id,
        CreateTask {
            title: payload.title,
            description: payload.description,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(task)))
}

/// Full-replace update of a task the caller transitively owns
pub async fn update_task(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(task_id): Path<Uuid>,
    Json(payload): Json<UpdateTaskPayload>,
) -> ApiResult<Json<Task>> {
    payload.validate().map_err(ApiError::from_validation)?;

    let task = Task::update(
        &state.db,
        task_id,
        user.id,
        UpdateTask {
            title: payload.title,
            description: payload.description,
            completed: payload.completed,
        },
    )
    .await?;

    Ok(Json(task))
}

/// Deletes a task the caller transitively owns
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(task_id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    Task::delete(&state.db, task_id, user.id).await?;

    Ok(Json(json!({ "message": "Task deleted successfully" })))
}
