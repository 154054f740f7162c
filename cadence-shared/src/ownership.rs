/// Ownership resolver
///
/// Transitive ownership predicates for the fixed parent chain
/// Task → Goal → Track → User. Every scoped CRUD operation in
/// [`crate::models`] consults the predicate matching its entity depth before
/// touching data.
///
/// All three are read-only, side-effect-free `SELECT EXISTS` queries. A
/// failed check must surface to callers as *not found*, never *forbidden*:
/// the system does not distinguish "exists but not yours" from "does not
/// exist", so entity ids cannot be probed across accounts.

use sqlx::PgPool;
use uuid::Uuid;

/// True when the track exists and belongs to the user (direct FK match)
pub async fn track_owned_by(
    pool: &PgPool,
    track_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let owned: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM tracks
            WHERE id = $1 AND user_id = $2
        )
        "#,
    )
    .bind(track_id)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(owned)
}

/// True when the goal's track belongs to the user (one join)
pub async fn goal_owned_by(
    pool: &PgPool,
    goal_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let owned: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS (
            SELECT 1
            FROM goals g
            JOIN tracks t ON g.track_id = t.id
            WHERE g.id = $1 AND t.user_id = $2
        )
        "#,
    )
    .bind(goal_id)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(owned)
}

/// True when the task's goal's track belongs to the user (two joins)
pub async fn task_owned_by(
    pool: &PgPool,
    task_id: Uuid,
    user_id: Uuid,
) -> Result<bool, sqlx::Error> {
    let owned: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS (
            SELECT 1
            FROM tasks ta
            JOIN goals g ON ta.goal_id = g.id
            JOIN tracks t ON g.track_id = t.id
            WHERE ta.id = $1 AND t.user_id = $2
        )
        "#,
    )
    .bind(task_id)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(owned)
}

// Predicate behavior against live data is covered by the ignored
// integration suite in cadence-api/tests/api_flow.rs.
