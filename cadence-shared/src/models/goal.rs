/// Goal model and scoped CRUD
///
/// Goals sit under a track and carry progress counters
/// (`current_value` / `target_value`, measured in `unit`). Ownership is
/// transitive: a goal belongs to whoever owns its track, so every operation
/// here goes through [`crate::ownership::goal_owned_by`] (or the track
/// predicate, for parent-scoped list/create).
///
/// Deleting a goal cascades to its tasks.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::ownership;

/// Default measurement unit for new goals
pub const DEFAULT_UNIT: &str = "times";

/// Goal model: a measurable target within a track
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Goal {
    /// Unique goal ID (UUID v4)
    pub id: Uuid,

    /// Owning track
    pub track_id: Uuid,

    /// Goal title (required)
    pub title: String,

    /// Optional free-text description
    pub description: Option<String>,

    /// Target progress value (≥ 1)
    pub target_value: i32,

    /// Current progress value (≥ 0)
    pub current_value: i32,

    /// Measurement unit, e.g. "times", "km"
    pub unit: String,

    /// When the goal was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a goal (progress starts at the column default 0)
#[derive(Debug, Clone)]
pub struct CreateGoal {
    pub title: String,
    pub description: Option<String>,
    pub target_value: i32,
    pub unit: String,
}

/// Input for updating a goal
///
/// Full replace: all mutable columns including `current_value` are
/// overwritten; unspecified fields arrive here already reset to their
/// defaults by the request layer.
#[derive(Debug, Clone)]
pub struct UpdateGoal {
    pub title: String,
    pub description: Option<String>,
    pub target_value: i32,
    pub current_value: i32,
    pub unit: String,
}

impl Goal {
    /// Lists the goals of a track the user owns, in creation order
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` when the track is absent or owned by someone
    /// else.
    pub async fn list_for_track(
        pool: &PgPool,
        track_id: Uuid,
        user_id: Uuid,
    ) -> StoreResult<Vec<Self>> {
        if !ownership::track_owned_by(pool, track_id, user_id).await? {
            return Err(StoreError::NotFound);
        }

        let goals = sqlx::query_as::<_, Goal>(
            r#"
            SELECT id, track_id, title, description, target_value, current_value, unit, created_at
            FROM goals
            WHERE track_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(track_id)
        .fetch_all(pool)
        .await?;

        Ok(goals)
    }

    /// Creates a goal under a track the user owns
    ///
    /// # Errors
    ///
    /// - `StoreError::Validation` when the title is missing or blank
    /// - `StoreError::NotFound` when the track is absent or not owned
    pub async fn create(
        pool: &PgPool,
        track_id: Uuid,
        user_id: Uuid,
        data: CreateGoal,
    ) -> StoreResult<Self> {
        if data.title.trim().is_empty() {
            return Err(StoreError::Validation("Goal title is required".to_string()));
        }

        if !ownership::track_owned_by(pool, track_id, user_id).await? {
            return Err(StoreError::NotFound);
        }

        let goal = sqlx::query_as::<_, Goal>(
            r#"
            INSERT INTO goals (track_id, title, description, target_value, unit)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, track_id, title, description, target_value, current_value, unit, created_at
            "#,
        )
        .bind(track_id)
        .bind(data.title)
        .bind(data.description)
        .bind(data.target_value)
        .bind(data.unit)
        .fetch_one(pool)
        .await?;

        Ok(goal)
    }

    /// Full-replace update of a goal the user transitively owns
    pub async fn update(
        pool: &PgPool,
        goal_id: Uuid,
        user_id: Uuid,
        data: UpdateGoal,
    ) -> StoreResult<Self> {
        if data.title.trim().is_empty() {
            return Err(StoreError::Validation("Goal title is required".to_string()));
        }

        if !ownership::goal_owned_by(pool, goal_id, user_id).await? {
            return Err(StoreError::NotFound);
        }

        let goal = sqlx::query_as::<_, Goal>(
            r#"
            UPDATE goals
            SET title = $2, description = $3, target_value = $4, current_value = $5, unit = $6
            WHERE id = $1
            RETURNING id, track_id, title, description, target_value, current_value, unit, created_at
            "#,
        )
        .bind(goal_id)
        .bind(data.title)
        .bind(data.description)
        .bind(data.target_value)
        .bind(data.current_value)
        .bind(data.unit)
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::NotFound)?;

        Ok(goal)
    }

    /// Deletes a goal the user transitively owns, cascading to its tasks
    pub async fn delete(pool: &PgPool, goal_id: Uuid, user_id: Uuid) -> StoreResult<()> {
        if !ownership::goal_owned_by(pool, goal_id, user_id).await? {
            return Err(StoreError::NotFound);
        }

        let result = sqlx::query("DELETE FROM goals WHERE id = $1")
            .bind(goal_id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
