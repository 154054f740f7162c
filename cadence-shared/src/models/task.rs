/// Task model and scoped CRUD
///
/// Tasks are the leaves of the hierarchy: actionable checklist items under a
/// goal, with a completion flag. Ownership runs through two joins
/// (task → goal → track → user); see [`crate::ownership::task_owned_by`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::ownership;

/// Task model: a checklist item under a goal
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task ID (UUID v4)
    pub id: Uuid,

    /// Owning goal
    pub goal_id: Uuid,

    /// Task title (required)
    pub title: String,

    /// Optional free-text description
    pub description: Option<String>,

    /// Completion flag
    pub completed: bool,

    /// When the task was created
    pub created_at: DateTime<Utc>,
}

/// Input for creating a task (`completed` starts false)
#[derive(Debug, Clone, Default)]
pub struct CreateTask {
    pub title: String,
    pub description: Option<String>,
}

/// Input for updating a task (full replace)
#[derive(Debug, Clone, Default)]
pub struct UpdateTask {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

impl Task {
    /// Lists the tasks of a goal the user transitively owns, in creation order
    ///
    /// # Errors
    ///
    /// `StoreError::NotFound` when the goal is absent or not owned.
    pub async fn list_for_goal(
        pool: &PgPool,
        goal_id: Uuid,
        user_id: Uuid,
    ) -> StoreResult<Vec<Self>> {
        if !ownership::goal_owned_by(pool, goal_id, user_id).await? {
            return Err(StoreError::NotFound);
        }

        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT id, goal_id, title, description, completed, created_at
            FROM tasks
            WHERE goal_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(goal_id)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Creates a task under a goal the user transitively owns
    pub async fn create(
        pool: &PgPool,
        goal_id: Uuid,
        user_id: Uuid,
        data: CreateTask,
    ) -> StoreResult<Self> {
        if data.title.trim().is_empty() {
            return Err(StoreError::Validation("Task title is required".to_string()));
        }

        if !ownership::goal_owned_by(pool, goal_id, user_id).await? {
            return Err(StoreError::NotFound);
        }

        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (goal_id, title, description)
            VALUES ($1, $2, $3)
            RETURNING id, goal_id, title, description, completed, created_at
            "#,
        )
        .bind(goal_id)
        .bind(data.title)
        .bind(data.description)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Full-replace update of a task the user transitively owns
    pub async fn update(
        pool: &PgPool,
        task_id: Uuid,
        user_id: Uuid,
        data: UpdateTask,
    ) -> StoreResult<Self> {
        if data.title.trim().is_empty() {
            return Err(StoreError::Validation("Task title is required".to_string()));
        }

        if !ownership::task_owned_by(pool, task_id, user_id).await? {
            return Err(StoreError::NotFound);
        }

        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET title = $2, description = $3, completed = $4
            WHERE id = $1
            RETURNING id, goal_id, title, description, completed, created_at
            "#,
        )
        .bind(task_id)
        .bind(data.title)
        .bind(data.description)
        .bind(data.completed)
        .fetch_optional(pool)
        .await?
        .ok_or(StoreError::NotFound)?;

        Ok(task)
    }

    /// Deletes a task the user transitively owns
    pub async fn delete(pool: &PgPool, task_id: Uuid, user_id: Uuid) -> StoreResult<()> {
        if !ownership::task_owned_by(pool, task_id, user_id).await? {
            return Err(StoreError::NotFound);
        }

        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(task_id)
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_task_default() {
        let update = UpdateTask::default();
        assert!(update.title.is_empty());
        assert!(update.description.is_none());
        assert!(!update.completed);
    }
}
