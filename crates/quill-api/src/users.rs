use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use tracing::warn;
use uuid::Uuid;

use quill_db::Store;
use quill_types::api::{CreateUserRequest, UserResponse};

use crate::auth::AppState;
use crate::error::ApiError;

pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let username = req.username.unwrap_or_default();
    let name = req.name.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    // Validate input
    if username.len() < 3 {
        return Err(ApiError::BadRequest(
            "`username` must be at least 3 characters long".into(),
        ));
    }
    if name.is_empty() {
        return Err(ApiError::BadRequest("`name` is required".into()));
    }
    if password.len() < 3 {
        return Err(ApiError::BadRequest(
            "password must be at least 3 characters long".into(),
        ));
    }

    // Check if username is taken
    if state.store.find_user_by_username(&username)?.is_some() {
        return Err(ApiError::BadRequest(
            "expected `username` to be unique".into(),
        ));
    }

    // Hash password with Argon2id
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("password hashing failed: {}", e))?
        .to_string();

    let user_id = Uuid::new_v4();

    state
        .store
        .create_user(&user_id.to_string(), &username, &name, &password_hash)?;

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            id: user_id,
            username,
            name,
        }),
    ))
}

/// The password hash never leaves the DB row; responses carry id,
/// username and display name only.
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let store = state.store.clone();
    let rows = tokio::task::spawn_blocking(move || store.list_users())
        .await
        .map_err(|e| anyhow::anyhow!("blocking task failed: {}", e))??;

    let users = rows
        .into_iter()
        .map(|row| UserResponse {
            id: row.id.parse().unwrap_or_else(|e| {
                warn!("Corrupt user id '{}': {}", row.id, e);
                Uuid::default()
            }),
            username: row.username,
            name: row.name,
        })
        .collect();

    Ok(Json(users))
}
