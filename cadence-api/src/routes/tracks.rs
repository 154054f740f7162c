/// Track endpoints
///
/// # Endpoints
///
/// - `GET    /api/tracks`     - List the caller's tracks
/// - `POST   /api/tracks`     - Create a track
/// - `PUT    /api/tracks/:id` - Full-replace update
/// - `DELETE /api/tracks/:id` - Delete (cascades to goals and tasks)
///
/// Updates replace every mutable field: an omitted optional field reverts
/// to its default instead of keeping its stored value. An invalid color is
/// silently replaced with the default rather than rejected.

use crate::{
    app::{AppState, CurrentUser},
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use cadence_shared::models::track::{CreateTrack, Track, UpdateTrack};
use serde::Deserialize;
use serde_json::{json, Value};
use uuid::Uuid;
use validator::Validate;

/// Create/update payload for a track
///
/// `description` and `color` default when omitted (full-replace semantics).
#[derive(Debug, Deserialize, Validate)]
pub struct TrackPayload {
    /// Track name (required)
    #[validate(length(min = 1, max = 255, message = "Track name is required"))]
    pub name: String,

    /// Optional description
    #[serde(default)]
    pub description: Option<String>,

    /// Optional hex color; invalid values fall back to the default
    #[serde(default)]
    pub color: Option<String>,
}

/// Lists the caller's tracks in creation order
pub async fn list_tracks(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<Track>>> {
    let tracks = Track::list_for_user(&state.db, user.id).await?;
    Ok(Json(tracks))
}

/// Creates a track owned by the caller
pub async fn create_track(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<TrackPayload>,
) -> ApiResult<(StatusCode, Json<Track>)> {
    payload.validate().map_err(ApiError::from_validation)?;

    let track = Track::create(
        &state.db,
        user.id,
        CreateTrack {
            name: payload.name,
            description: payload.description,
            color: payload.color,
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(track)))
}

/// Full-replace update of one of the caller's tracks
pub async fn update_track(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(track_id): Path<Uuid>,
    Json(payload): Json<TrackPayload>,
) -> ApiResult<Json<Track>> {
    payload.validate().map_err(ApiError::from_validation)?;

    let track = Track::update(
        &state.db,
        track_id,
        user.id,
        UpdateTrack {
            name: payload.name,
            description: payload.description,
            color: payload.color,
        },
    )
    .await?;

    Ok(Json(track))
}

/// Deletes one of the caller's tracks with all its goals and tasks
pub async fn delete_track(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(track_id): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    Track::delete(&state.db, track_id, user.id).await?;

    Ok(Json(json!({ "message": "Track deleted successfully" })))
}
