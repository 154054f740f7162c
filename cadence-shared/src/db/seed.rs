/// Idempotent fixture data seeding
///
/// On startup the server seeds one demo user and a sample hierarchy so a
/// fresh database is immediately usable. Seeding keys off the fixture
/// user's email: if the user already exists, nothing is touched — in
/// particular the password is never reset.

use sqlx::PgPool;
use tracing::{debug, info};

use crate::auth::credentials::bootstrap_user;
use crate::models::goal::{CreateGoal, Goal};
use crate::models::task::{CreateTask, Task};
use crate::models::track::{CreateTrack, Track};
use crate::models::user::User;

/// Fixture user email
pub const FIXTURE_EMAIL: &str = "rob.vandijk@example.com";

/// Fixture user password (demo data, not a production credential)
pub const FIXTURE_PASSWORD: &str = "password123";

/// Fixture user display name
pub const FIXTURE_NAME: &str = "Rob van Dijk";

/// Sample tracks created for the fixture user: (name, description, color)
const SAMPLE_TRACKS: &[(&str, &str, &str)] = &[
    ("Morning Routine", "Daily morning activities", "#10B981"),
    ("Exercise & Health", "Physical fitness and wellness", "#EF4444"),
    ("Work Productivity", "Professional tasks and goals", "#3B82F6"),
    ("Learning & Growth", "Personal development", "#8B5CF6"),
    ("Social Connections", "Relationships and networking", "#F59E0B"),
    ("Creative Projects", "Artistic and creative pursuits", "#EC4899"),
    ("Evening Wind-down", "End of day routines", "#6366F1"),
];

/// Sample tasks under the "Wake up early" goal: (title, description)
const SAMPLE_TASKS: &[(&str, &str)] = &[
    ("Set alarm for 6 AM", "Use consistent alarm time"),
    ("Get out of bed immediately", "No snoozing allowed"),
    ("Drink water first thing", "Hydrate upon waking"),
];

/// Seeds the fixture user and sample hierarchy if absent
///
/// Safe to call on every startup; re-running against a seeded database is a
/// no-op.
pub async fn seed_fixture_data(pool: &PgPool) -> anyhow::Result<()> {
    if User::find_by_email(pool, FIXTURE_EMAIL).await?.is_some() {
        debug!("Fixture user already present, skipping seed");
        return Ok(());
    }

    let user = bootstrap_user(pool, FIXTURE_EMAIL, FIXTURE_PASSWORD, FIXTURE_NAME).await?;

    for (name, description, color) in SAMPLE_TRACKS {
        let track = Track::create(
            pool,
            user.id,
            CreateTrack {
                name: name.to_string(),
                description: Some(description.to_string()),
                color: Some(color.to_string()),
            },
        )
        .await?;

        // Only the first track gets a populated goal with tasks
        if *name == "Morning Routine" {
            let goal = Goal::create(
                pool,
                track.id,
                user.id,
                CreateGoal {
                    title: "Wake up early".to_string(),
                    description: Some("Consistent 6 AM wake-up time".to_string()),
                    target_value: 7,
                    unit: "days per week".to_string(),
                },
            )
            .await?;

            for (title, description) in SAMPLE_TASKS {
                Task::create(
                    pool,
                    goal.id,
                    user.id,
                    CreateTask {
                        title: title.to_string(),
                        description: Some(description.to_string()),
                    },
                )
                .await?;
            }
        }
    }

    info!(user_id = %user.id, "Seeded fixture user and sample hierarchy");
    Ok(())
}
