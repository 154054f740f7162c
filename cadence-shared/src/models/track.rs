/// Track model and scoped CRUD
///
/// Tracks are the top level of the hierarchy: each belongs to exactly one
/// user and groups zero or more goals. Deleting a track cascades to its
/// goals and their tasks (FK `ON DELETE CASCADE`), so the whole subtree
/// disappears inside the delete statement's transaction.
///
/// # Quirk (preserved)
///
/// An invalid `color` value is silently replaced with [`DEFAULT_COLOR`]
/// instead of being rejected, on both create and update.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::ownership;

/// Default track color, also substituted for invalid values
pub const DEFAULT_COLOR: &str = "#3B82F6";

/// Checks a color against the `#RRGGBB` hex format
pub fn is_valid_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Resolves a requested color to a stored one
///
/// Missing or malformed values fall back to [`DEFAULT_COLOR`].
pub fn normalize_color(color: Option<&str>) -> String {
    match color {
        Some(c) if is_valid_color(c) => c.to_string(),
        _ => DEFAULT_COLOR.to_string(),
    }
}

/// Track model: a user-owned category grouping goals
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Track {
    /// Unique track ID (UUID v4)
    pub id: Uuid,

    /// Owning user
    pub user_id: Uuid,

    /// Track name (required)
    pub name: String,

    /// Optional free-text description
    pub description: Option<String>,

    /// Hex RGB color, e.g. `#3B82F6`
    pub color: String,

    /// When the track was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a track
#[derive(Debug, Clone, Default)]
pub struct CreateTrack {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

/// Input for updating a track
///
/// Updates are a full replace: every mutable column is overwritten, so an
/// unspecified optional field reverts to its default rather than staying
/// unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateTrack {
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl Track {
    /// Lists the user's tracks in creation order
    pub async fn list_for_user(pool: &PgPool, user_id: Uuid) -> StoreResult<Vec<Self>> {
        let tracks = sqlx::query_as::<_, Track>(
            r#"
            SELECT id, user_id, name, description, color, created_at
            FROM tracks
            WHERE user_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(tracks)
    }

    /// Creates a track owned by the user
    ///
    /// # Errors
    ///
    /// `StoreError::Validation` when the name is missing or blank.
    pub async fn create(pool: &PgPool, user_id: Uuid, data: CreateTrack) -> StoreResult<Self> {
        if data.name.trim().is_empty() {
            return Err(StoreError::Validation("Track name is required".to_string()));
        }

        let color = normalize_color(data.color.as_deref());

        let track = sqlx::query_as::<_, Track>(
            r#"
            INSERT INTO tracks (user_id, name, description, color)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, name, description, color, created_at
            "#,
        )
        .bind(user_id)
        .bind(data.name)
        .bind(data.description)
        .bind(color)
        .fetch_one(pool)
        .await?;

        Ok(track)
    }

    /// Full-replace update of a track the user owns
    ///
    /// # Errors
    ///
    /// - `StoreError::Validation` when the name is missing or blank
    /// - `StoreError::NotFound` when the track is absent or owned by someone
    ///   else
    pub async fn update(
        pool: &PgPool,
        track_id: Uuid,
        user_id: Uuid,
        data: UpdateTrack,
    ) -> StoreResult<Self> {
        if data.name.trim().is_empty() {
            return Err(StoreError::Validation("Track name is required".to_string()));
        }

        if !ownership::track_owned_by(pool, track_id, user_id).await? {
            return Err(StoreError::NotFound);
        }

        let color = normalize_color(data.color.as_deref());

        let track = sqlx::query_as::<_, Track>(
            r#"
            UPDATE tracks
            SET name = $2, description = $3, color = $4
            WHERE id = $1
            RETURNING id, user_id, name, description, color, created_at
            "#,
        )
        .bind(track_id)
        .bind(data.name)
        .bind(data.description)
        .bind(color)
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::NotFound)?;

        Ok(track)
    }

    /// Deletes a track the user owns, cascading to goals and tasks
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` when the track is absent or owned by someone
    /// else.
    pub async fn delete(pool: &PgPool, track_id: Uuid, user_id: Uuid) -> StoreResult<()> {
        if !ownership::track_owned_by(pool, track_id, user_id).await? {
            return Err(StoreError::NotFound);
        }

        let result = sqlx::query("DELETE FROM tracks WHERE id = $1 AND user_id = $2")
            .bind(track_id)
            .bind(user_id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
