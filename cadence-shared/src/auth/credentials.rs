/// Credential store: email/password verification and fixture bootstrap
///
/// Login failure is a single `InvalidCredentials` error whether the email is
/// unknown or the password is wrong; the two cases must stay
/// indistinguishable to the caller.
///
/// # Example
///
/// ```no_run
/// use cadence_shared::auth::credentials::{bootstrap_user, verify_credentials};
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> anyhow::Result<()> {
/// let user = bootstrap_user(&pool, "user@example.com", "password123", "User").await?;
/// let verified = verify_credentials(&pool, "user@example.com", "password123").await?;
/// assert_eq!(user.id, verified.id);
/// # Ok(())
/// # }
/// ```

use sqlx::PgPool;
use tracing::{debug, info};

use super::password::{hash_password, verify_password, PasswordError};
use crate::models::user::{CreateUser, User};

/// Error type for credential store operations
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
    /// Unknown email or wrong password (deliberately indistinguishable)
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Password hashing or hash parsing failed
    #[error("Password operation failed: {0}")]
    Password(#[from] PasswordError),

    /// Underlying persistence failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Verifies an email/password pair against the store
///
/// Looks up the user by exact email match and verifies the password against
/// the stored Argon2id hash. Never compares plaintext.
///
/// # Errors
///
/// - `CredentialError::InvalidCredentials` if no user matches the email or
///   the password does not verify
/// - `CredentialError::Database` on persistence failure
pub async fn verify_credentials(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<User, CredentialError> {
    let user = User::find_by_email(pool, email)
        .await?
        .ok_or(CredentialError::InvalidCredentials)?;

    if verify_password(password, &user.password_hash)? {
        Ok(user)
    } else {
        Err(CredentialError::InvalidCredentials)
    }
}

/// Idempotent seed operation: creates the user only if absent
///
/// If a user with the email already exists it is returned unchanged — an
/// existing password is never reset. Used for initial fixture data.
pub async fn bootstrap_user(
    pool: &PgPool,
    email: &str,
    password: &str,
    name: &str,
) -> Result<User, CredentialError> {
    if let Some(existing) = User::find_by_email(pool, email).await? {
        debug!(email, "Bootstrap skipped, user already exists");
        return Ok(existing);
    }

    let password_hash = hash_password(password)?;

    let user = User::create(
        pool,
        CreateUser {
            email: email.to_string(),
            password_hash,
            name: name.to_string(),
        },
    )
    .await?;

    info!(user_id = %user.id, email, "Bootstrapped user");
    Ok(user)
}
