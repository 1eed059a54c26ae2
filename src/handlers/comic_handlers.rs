use crate::error::Result;
use crate::models::{ByIdsRequest, ItemKind, ListQuery};
use crate::services::fanout::{aggregate, BatchResult};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::Value;

/// GET /comics -- list passthrough with optional limit/skip/title filters.
pub async fn list_comics(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>> {
    let payload = state.catalog.fetch_list(ItemKind::Comic, &query).await?;
    Ok(Json(payload))
}

/// GET /comics/{characterId} -- comics featuring a specific character.
pub async fn comics_by_character(
    State(state): State<AppState>,
    Path(character_id): Path<String>,
) -> Result<Json<Value>> {
    let payload = state
        .catalog
        .fetch_comics_by_character(&character_id)
        .await?;
    Ok(Json(payload))
}

/// GET /comics/comic/{comicId} -- single passthrough.
pub async fn get_comic(
    State(state): State<AppState>,
    Path(comic_id): Path<String>,
) -> Result<Json<Value>> {
    let payload = state.catalog.fetch_by_id(ItemKind::Comic, &comic_id).await?;
    Ok(Json(payload))
}

/// POST /comics/byIds -- batch lookup, best-effort per item.
pub async fn comics_by_ids(
    State(state): State<AppState>,
    Json(request): Json<ByIdsRequest>,
) -> Result<Json<BatchResult>> {
    let ids = request.id_list();
    let batch = aggregate(ids.as_deref(), |id| {
        state.catalog.fetch_by_id(ItemKind::Comic, id)
    })
    .await?;
    Ok(Json(batch))
}
