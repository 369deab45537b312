use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use tracing::warn;
use uuid::Uuid;

use quill_db::Store;
use quill_db::models::BlogRow;
use quill_types::api::{BlogResponse, Claims, CreateBlogRequest, UpdateBlogRequest};
use quill_types::models::Blog;

use crate::auth::AppState;
use crate::error::ApiError;

pub async fn list_blogs(
    State(state): State<AppState>,
) -> Result<Json<Vec<BlogResponse>>, ApiError> {
    // Run blocking DB reads off the async runtime
    let store = state.store.clone();
    let rows = tokio::task::spawn_blocking(move || store.list_blogs())
        .await
        .map_err(|e| anyhow::anyhow!("blocking task failed: {}", e))??;

    Ok(Json(rows.into_iter().map(to_response).collect()))
}

pub async fn create_blog(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<CreateBlogRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let title = req
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("`title` is required".into()))?;
    let url = req
        .url
        .filter(|u| !u.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("`url` is required".into()))?;

    let blog_id = Uuid::new_v4();

    // Run the blocking DB insert off the async runtime
    let store = state.store.clone();
    let id = blog_id.to_string();
    let owner = claims.sub.to_string();
    let author = req.author.clone();
    let likes = req.likes;
    let stored_title = title.clone();
    let stored_url = url.clone();
    tokio::task::spawn_blocking(move || {
        store.insert_blog(
            &id,
            &stored_title,
            author.as_deref(),
            &stored_url,
            likes,
            Some(&owner),
        )
    })
    .await
    .map_err(|e| anyhow::anyhow!("blocking task failed: {}", e))??;

    let now = chrono::Utc::now();

    Ok((
        StatusCode::CREATED,
        Json(BlogResponse {
            id: blog_id,
            title,
            author: req.author,
            url,
            likes: req.likes,
            owner_id: Some(claims.sub),
            owner_username: Some(claims.username),
            created_at: now,
        }),
    ))
}

/// Likes are the only field the update call touches.
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(_claims): Extension<Claims>,
    Json(req): Json<UpdateBlogRequest>,
) -> Result<Json<BlogResponse>, ApiError> {
    let store = state.store.clone();
    let blog_id = id.to_string();
    let likes = req.likes;

    let row = tokio::task::spawn_blocking(move || -> anyhow::Result<Option<BlogRow>> {
        if !store.update_blog_likes(&blog_id, likes)? {
            return Ok(None);
        }
        store.find_blog(&blog_id)
    })
    .await
    .map_err(|e| anyhow::anyhow!("blocking task failed: {}", e))??
    .ok_or_else(|| ApiError::NotFound(format!("no blog with id {}", id)))?;

    Ok(Json(to_response(row)))
}

pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let store = state.store.clone();
    let blog_id = id.to_string();
    let caller = claims.sub.to_string();

    tokio::task::spawn_blocking(move || {
        let row = store
            .find_blog(&blog_id)
            .map_err(ApiError::from)?
            .ok_or_else(|| ApiError::NotFound(format!("no blog with id {}", blog_id)))?;

        // Rows carrying an owner may only be deleted by that owner.
        if let Some(owner_id) = &row.owner_id {
            if *owner_id != caller {
                return Err(ApiError::Forbidden("only the owner may delete a blog"));
            }
        }

        store.delete_blog(&blog_id).map_err(ApiError::from)?;
        Ok::<_, ApiError>(())
    })
    .await
    .map_err(|e| anyhow::anyhow!("blocking task failed: {}", e))??;

    Ok(StatusCode::NO_CONTENT)
}

pub(crate) fn to_response(row: BlogRow) -> BlogResponse {
    let created_at = parse_created_at(&row.created_at, &row.id);
    BlogResponse {
        id: row.id.parse().unwrap_or_else(|e| {
            warn!("Corrupt blog id '{}': {}", row.id, e);
            Uuid::default()
        }),
        title: row.title,
        author: row.author,
        url: row.url,
        likes: row.likes,
        owner_id: parse_owner(row.owner_id.as_deref(), &row.id),
        owner_username: row.owner_username,
        created_at,
    }
}

pub(crate) fn row_to_blog(row: BlogRow) -> Blog {
    let created_at = parse_created_at(&row.created_at, &row.id);
    Blog {
        id: row.id.parse().unwrap_or_else(|e| {
            warn!("Corrupt blog id '{}': {}", row.id, e);
            Uuid::default()
        }),
        title: row.title,
        author: row.author,
        url: row.url,
        likes: row.likes,
        owner: parse_owner(row.owner_id.as_deref(), &row.id),
        created_at,
    }
}

fn parse_owner(owner_id: Option<&str>, blog_id: &str) -> Option<Uuid> {
    owner_id.and_then(|raw| {
        raw.parse()
            .map_err(|e| warn!("Corrupt owner_id '{}' on blog '{}': {}", raw, blog_id, e))
            .ok()
    })
}

fn parse_created_at(raw: &str, blog_id: &str) -> DateTime<Utc> {
    raw.parse::<DateTime<Utc>>()
        .or_else(|_| {
            // SQLite stores timestamps as "YYYY-MM-DD HH:MM:SS" without timezone.
            // Parse as naive UTC and convert.
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .unwrap_or_else(|e| {
            warn!("Corrupt created_at '{}' on blog '{}': {}", raw, blog_id, e);
            DateTime::default()
        })
}
