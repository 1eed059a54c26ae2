use crate::error::Result;
use crate::models::{ByIdsRequest, ItemKind, ListQuery};
use crate::services::fanout::{aggregate, BatchResult};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::Value;

/// GET /characters -- list passthrough with optional limit/skip/name filters.
pub async fn list_characters(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Value>> {
    let payload = state.catalog.fetch_list(ItemKind::Character, &query).await?;
    Ok(Json(payload))
}

/// GET /characters/{characterId} -- single passthrough.
pub async fn get_character(
    State(state): State<AppState>,
    Path(character_id): Path<String>,
) -> Result<Json<Value>> {
    let payload = state
        .catalog
        .fetch_by_id(ItemKind::Character, &character_id)
        .await?;
    Ok(Json(payload))
}

/// POST /characters/byIds -- batch lookup, best-effort per item.
pub async fn characters_by_ids(
    State(state): State<AppState>,
    Json(request): Json<ByIdsRequest>,
) -> Result<Json<BatchResult>> {
    let ids = request.id_list();
    let batch = aggregate(ids.as_deref(), |id| {
        state.catalog.fetch_by_id(ItemKind::Character, id)
    })
    .await?;
    Ok(Json(batch))
}
