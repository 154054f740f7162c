/// Goal endpoints
///
/// # Endpoints
///
/// - `GET    /api/goals?track_id=` - List goals of an owned track
/// - `POST   /api/goals`           - Create a goal (body carries `track_id`)
/// - `PUT    /api/goals/:id`       - Full-replace update
/// - `DELETE /api/goals/:id`       - Delete (cascades to tasks)
///
/// A track that is absent *or owned by another user* is reported as 404 in
/// both cases; the API never discloses that a foreign track exists.

use crate::{
    app::{AppState, CurrentUser},
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use cadence_shared::models::goal::{CreateGoal, Goal, UpdateGoal, DEFAULT_UNIT};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

fn default_target_value() -> i32 {
    1
}

fn default_unit() -> String {
    DEFAULT_UNIT.to_string()
}

/// Query parameters for listing goals
#[derive(Debug, Deserialize)]
pub struct ListGoalsQuery {
    /// Parent track
    pub track_id: Uuid,
}

/// Creation payload for a goal
#[derive(Debug, Deserialize, Validate)]
pub struct CreateGoalPayload {
    /// Parent track
    pub track_id: Uuid,

    /// Goal title (required)
    #[validate(length(min = 1, max = 255, message = "Goal title is required"))]
    pub title: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Target progress value, at least 1
    #[serde(default = "default_target_value")]
    #[validate(range(min = 1, message = "target_value must be at least 1"))]
    pub target_value: i32,

    /// Measurement unit
    #[serde(default = "default_unit")]
    pub unit: String,
}

/// Update payload for a goal (full replace, including progress)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGoalPayload {
    /// Goal title (required)
    #[validate(length(min = 1, max = 255, message = "Goal title is required"))]
    pub title: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Target progress value, at least 1
    #[serde(default = "default_target_value")]
    #[validate(range(min = 1, message = "target_value must be at least 1"))]
    pub target_value: i32,

    /// Current progress value
    #[serde(default)]
    #[validate(range(min = 0, message = "current_value must not be negative"))]
    pub current_value: i32,

    /// Measurement unit
    #[serde(default = "default_unit")]
    pub unit: String,
}

/// Lists the goals of a track the caller owns, in creation order
pub async fn list_goals(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<ListGoalsQuery>,
) -> ApiResult<Json<Vec<Goal>>> {
    let goals = Goal::list_for_track(&state.db, query.track_id, user.id).await?;
    Ok(Json(goals))
}

/// Creates a goal under a track the caller owns
pub async fn create_goal(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreateGoalPayload>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    payload.validate().map_err(ApiError::from_validation)?;

    let goal = Goal::create(
        &state.db,
        payload.track_id,
        user.id,
        CreateGoal {
            title: payload.title,
            description: payload.description,
            target_value: payload.target_value,
            unit: payload.unit,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(goal)))
}

/// Full-replace update of a goal the caller transitively owns
pub async fn update_goal(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(goal_id): Path<Uuid>,
    Json(payload): Json<UpdateGoalPayload>,
) -> ApiResult<Json<Goal>> {
    payload.validate().map_err(ApiError::from_validation)?;

    let goal = Goal::update(
        &state.db,
        goal_id,
        user.id,
        UpdateGoal {
            title: payload.title,
            description: payload.description,
            target_value: payload.target_value,
            current_value: payload.current_value,
            unit: payload.unit,
        },
    )
    .await?;

    Ok(Json(goal))
}

/// Deletes a goal the caller transitively owns, with its tasks
pub async fn delete_goal(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(goal_id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    Goal::delete(&state.db, goal_id, user.id).await?;

    Ok(Json(json!({ "message": "Goal deleted successfully" })))
}
