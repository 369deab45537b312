//! Aggregate statistics over the stored blog listing.

use axum::{Json, extract::State};
use serde::Serialize;

use quill_db::Store;
use quill_stats::{AuthorBlogs, AuthorLikes};
use quill_types::models::Blog;

use crate::auth::AppState;
use crate::blogs::row_to_blog;
use crate::error::ApiError;

/// `GET /api/stats`
///
/// Summary computed in one pass over all stored blogs. The three
/// record-valued fields are null when nothing is stored yet; an empty
/// listing is "no content", not an error.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_likes: u64,
    pub favorite: Option<Blog>,
    pub most_blogs: Option<AuthorBlogs>,
    pub most_likes: Option<AuthorLikes>,
}

pub async fn overview(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
    let store = state.store.clone();
    let rows = tokio::task::spawn_blocking(move || store.list_blogs())
        .await
        .map_err(|e| anyhow::anyhow!("blocking task failed: {}", e))??;

    let blogs: Vec<Blog> = rows.into_iter().map(row_to_blog).collect();

    Ok(Json(StatsResponse {
        total_likes: quill_stats::total_likes(&blogs),
        favorite: quill_stats::favorite_blog(&blogs).cloned(),
        most_blogs: quill_stats::most_blogs(&blogs),
        most_likes: quill_stats::most_likes(&blogs),
    }))
}
