//! Content provider routes: section lists, single blog posts, search.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use eexplo_content::{BlogPost, ContentQuery, SearchResults, clamp_latest_limit};
use serde::Deserialize;

use crate::services::content::{self, ContentError, ContentItems};
use crate::state::AppState;

pub(crate) fn content_error_to_status(err: &ContentError) -> StatusCode {
    match err {
        ContentError::UnknownKind(_) | ContentError::NotFound => StatusCode::NOT_FOUND,
        ContentError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn reject(err: ContentError) -> StatusCode {
    let status = content_error_to_status(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "content query failed");
    }
    status
}

async fn respond(state: &AppState, query: ContentQuery) -> Result<Json<ContentItems>, StatusCode> {
    let items = content::list(&state.pool, query).await.map_err(reject)?;
    tracing::debug!(kind = %query.kind, count = items.len(), "content served");
    Ok(Json(items))
}

/// `GET /api/content/{kind}`
pub async fn list_all(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<ContentItems>, StatusCode> {
    let kind = content::parse_kind(&kind).map_err(reject)?;
    respond(&state, ContentQuery::all(kind)).await
}

/// `GET /api/content/{kind}/featured`
pub async fn list_featured(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<ContentItems>, StatusCode> {
    let kind = content::parse_kind(&kind).map_err(reject)?;
    respond(&state, ContentQuery::featured(kind)).await
}

#[derive(Debug, Deserialize)]
pub struct LatestParams {
    pub limit: Option<u32>,
}

/// `GET /api/content/{kind}/latest?limit=N`
pub async fn list_latest(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<LatestParams>,
) -> Result<Json<ContentItems>, StatusCode> {
    let kind = content::parse_kind(&kind).map_err(reject)?;
    respond(&state, ContentQuery::latest(kind, clamp_latest_limit(params.limit))).await
}

/// `GET /api/blog-posts/{slug}`
pub async fn blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, StatusCode> {
    content::blog_post_by_slug(&state.pool, &slug)
        .await
        .map(Json)
        .map_err(reject)
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

/// `GET /api/search?q=`
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResults>, StatusCode> {
    content::search(&state.pool, &params.q)
        .await
        .map(Json)
        .map_err(reject)
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
