/// Application state and router builder
///
/// Defines the shared application state, the bearer-token authentication
/// middleware, and the function that assembles the Axum router.
///
/// # Example
///
/// ```no_run
/// use cadence_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = cadence_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::error::ApiError;
use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
    routing::{get, post, put},
    Router,
};
use cadence_shared::auth::jwt;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use uuid::Uuid;

use crate::config::Config;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. Uses Arc
/// internally for cheap cloning; the config (including the signing key) is
/// read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            db,
            config: Arc::new(config),
        }
    }

    /// Gets the JWT secret for token operations
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Authenticated caller, injected into request extensions by
/// [`bearer_auth_layer`]
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// Authenticated user id
    pub id: Uuid,

    /// Email from the token claims
    pub email: String,
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                  # Health check (public)
/// └── /api/
///     ├── /auth/login          # POST, public
///     ├── /tracks              # GET, POST        (authenticated)
///     ├── /tracks/:id          # PUT, DELETE
///     ├── /goals               # GET ?track_id=, POST
///     ├── /goals/:id           # PUT, DELETE
///     ├── /tasks               # GET ?goal_id=, POST
///     └── /tasks/:id           # PUT, DELETE
/// ```
///
/// Every route below `/api` except login runs behind [`bearer_auth_layer`].
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Health check (public, no auth)
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // Auth routes (public)
    let auth_routes = Router::new().route("/login", post(routes::auth::login));

    // Hierarchy routes (require a valid bearer token)
    let track_routes = Router::new()
        .route(
            "/",
            get(routes::tracks::list_tracks).post(routes::tracks::create_track),
        )
        .route(
            "/:id",
            put(routes::tracks::update_track).delete(routes::tracks::delete_track),
        );

    let goal_routes = Router::new()
        .route(
            "/",
            get(routes::goals::list_goals).post(routes::goals::create_goal),
        )
        .route(
            "/:id",
            put(routes::goals::update_goal).delete(routes::goals::delete_goal),
        );

    let task_routes = Router::new()
        .route(
            "/",
            get(routes::tasks::list_tasks).post(routes::tasks::create_task),
        )
        .route(
            "/:id",
            put(routes::tasks::update_task).delete(routes::tasks::delete_task),
        );

    let protected_routes = Router::new()
        .nest("/tracks", track_routes)
        .nest("/goals", goal_routes)
        .nest("/tasks", task_routes)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            bearer_auth_layer,
        ));

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .merge(protected_routes);

    Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bearer-token authentication middleware
///
/// Extracts the Authorization header, validates the token, and injects
/// [`CurrentUser`] into request extensions. A missing header and an invalid
/// token are both 401, with distinct messages.
async fn bearer_auth_layer(
    state: axum::extract::State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = req
        .headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ApiError::Unauthorized("Token is missing".to_string()))?;

    // A raw token without the Bearer prefix is accepted as well
    let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

    let claims = jwt::validate_token(token, state.jwt_secret())?;

    req.extensions_mut().insert(CurrentUser {
        id: claims.sub,
        email: claims.email,
    });

    Ok(next.run(req).await)
}
