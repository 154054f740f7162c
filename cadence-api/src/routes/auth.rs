/// Authentication endpoint
///
/// # Endpoints
///
/// - `POST /api/auth/login` - Login and receive a session token
///
/// There is no registration or token refresh: accounts come from the
/// bootstrap fixture, and an expired token means logging in again.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, Json};
use cadence_shared::auth::{credentials, jwt};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Login request
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email address
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    /// Password
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// User summary returned alongside the token (no password hash)
#[derive(Debug, Serialize)]
pub struct UserSummary {
    /// User ID
    pub id: Uuid,

    /// Email address
    pub email: String,

    /// Display name
    pub name: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Session token (7 days)
    pub token: String,

    /// Authenticated user
    pub user: UserSummary,
}

/// Login endpoint
///
/// Verifies the email/password pair and issues a signed session token.
///
/// # Endpoint
///
/// ```text
/// POST /api/auth/login
/// Content-Type: application/json
///
/// {
///   "email": "rob.vandijk@example.com",
///   "password": "password123"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Malformed email or missing password
/// - `401 Unauthorized`: Invalid credentials (which half failed is not
///   disclosed)
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    req.validate().map_err(ApiError::from_validation)?;

    let user = credentials::verify_credentials(&state.db, &req.email, &req.password).await?;

    let claims = jwt::Claims::new(user.id, &user.email);
    let token = jwt::create_token(&claims, state.jwt_secret())?;

    Ok(Json(LoginResponse {
        token,
        user: UserSummary {
            id: user.id,
            email: user.email,
            name: user.name,
        },
    }))
}
