use crate::error::{AppError, Result};
use crate::middleware::CurrentUser;
use crate::models::{AuthResponse, Favorites, ItemKind, ToggleAction, UserProfile};
use crate::services::fanout::{aggregate, first_result, BatchResult};
use crate::services::SignupRequest;
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    Extension,
};
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ToggleFavoriteRequest {
    /// "character" or "comic". Optional so a missing field gets the same 400
    /// as an unrecognized one.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// POST /user/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<Credentials>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let user = state
        .user_service
        .signup(SignupRequest {
            email: body.email,
            password: body.password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            id: user.id,
            token: user.token,
            favorites: Favorites::default(),
        }),
    ))
}

/// POST /user/login
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<Credentials>,
) -> Result<Json<AuthResponse>> {
    let user = state.auth_service.login(&body.email, &body.password).await?;
    let favorites = state.user_service.favorites(user.id).await?;

    Ok(Json(AuthResponse {
        id: user.id,
        token: user.token,
        favorites,
    }))
}

/// GET /user/profile (bearer) -- current user minus secrets.
pub async fn profile(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<UserProfile>> {
    let profile = state.user_service.profile(user.id).await?;
    Ok(Json(profile))
}

/// GET /user/{id} -- any user by id, minus secrets. Unauthenticated; a known
/// information-exposure weakness.
pub async fn user_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserProfile>> {
    // The segment is parsed by hand so a non-numeric id gets the same JSON
    // 404 as an unknown one, not the extractor's plain-text 400.
    let id: i64 = id
        .parse()
        .map_err(|_| AppError::NotFound("User not found".to_string()))?;
    let profile = state.user_service.profile(id).await?;
    Ok(Json(profile))
}

/// POST /user/favorites/{id} (bearer) -- toggle membership of one item.
pub async fn toggle_favorite(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(item_id): Path<String>,
    Json(body): Json<ToggleFavoriteRequest>,
) -> Result<Json<Value>> {
    let kind_raw = body.kind.as_deref().unwrap_or("");
    let toggle = state
        .user_service
        .toggle_favorite(user.id, kind_raw, &item_id)
        .await?;

    let message = match toggle.action {
        ToggleAction::Added => format!("{kind_raw} added to favorites"),
        ToggleAction::Removed => format!("{kind_raw} removed from favorites"),
    };

    Ok(Json(json!({
        "message": message,
        "favorites": toggle.favorites,
    })))
}

/// GET /user/favorites (bearer) -- favorites resolved to full upstream
/// objects. Characters and comics are aggregated concurrently; items that
/// fail to resolve are dropped and only counted by their absence.
pub async fn favorites(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> Result<Json<Value>> {
    let saved = state.user_service.favorites(user.id).await?;
    let catalog = &state.catalog;

    let characters = async {
        if saved.characters.is_empty() {
            return Ok::<_, AppError>(BatchResult::default());
        }
        let batch = aggregate(Some(&saved.characters), |id| async move {
            let payload = catalog.fetch_by_id(ItemKind::Character, id).await?;
            Ok::<_, AppError>(first_result(payload))
        })
        .await?;
        Ok(batch)
    };

    let comics = async {
        if saved.comics.is_empty() {
            return Ok::<_, AppError>(BatchResult::default());
        }
        let batch = aggregate(Some(&saved.comics), |id| async move {
            let payload = catalog.fetch_by_id(ItemKind::Comic, id).await?;
            Ok::<_, AppError>(first_result(payload))
        })
        .await?;
        Ok(batch)
    };

    let (characters, comics) = tokio::try_join!(characters, comics)?;

    Ok(Json(json!({
        "favorites": {
            "characters": characters.results,
            "comics": comics.results,
        },
        "counts": {
            "characters": characters.count,
            "comics": comics.count,
        },
    })))
}
