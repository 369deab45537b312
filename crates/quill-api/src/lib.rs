pub mod auth;
pub mod blogs;
pub mod error;
pub mod middleware;
pub mod stats;
pub mod users;

use axum::{
    Router,
    middleware::from_fn,
    routing::{get, post, put},
};

use auth::AppState;
use middleware::require_auth;

/// Full route table. Cross-cutting layers (CORS, request tracing) are the
/// binary's concern; tests drive this router directly.
pub fn router(state: AppState) -> Router {
    let public = Router::new()
        .route("/api/blogs", get(blogs::list_blogs))
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route("/api/login", post(auth::login))
        .route("/api/stats", get(stats::overview))
        .with_state(state.clone());

    let protected = Router::new()
        .route("/api/blogs", post(blogs::create_blog))
        .route(
            "/api/blogs/{id}",
            put(blogs::update_blog).delete(blogs::delete_blog),
        )
        .route_layer(from_fn(require_auth))
        .with_state(state);

    public.merge(protected)
}
