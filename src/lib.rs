pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod services;

// Make test_utils available for both unit tests and integration tests
pub mod test_utils;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<services::UserService>,
    pub auth_service: Arc<services::AuthService>,
    pub catalog: Arc<dyn services::CatalogClient>,
}

/// Builds the full route tree. CORS and tracing layers are applied by the
/// caller so tests can drive the bare router.
pub fn router(state: AppState) -> Router {
    let character_routes = Router::new()
        .route("/", get(handlers::list_characters))
        .route("/byIds", post(handlers::characters_by_ids))
        .route("/{character_id}", get(handlers::get_character));

    let comic_routes = Router::new()
        .route("/", get(handlers::list_comics))
        .route("/byIds", post(handlers::comics_by_ids))
        .route("/comic/{comic_id}", get(handlers::get_comic))
        .route("/{character_id}", get(handlers::comics_by_character));

    let protected_user_routes = Router::new()
        .route("/profile", get(handlers::profile))
        .route("/favorites", get(handlers::favorites))
        .route("/favorites/{id}", post(handlers::toggle_favorite))
        .route_layer(from_fn_with_state(
            state.clone(),
            middleware::require_auth,
        ));

    let user_routes = Router::new()
        .route("/signup", post(handlers::signup))
        .route("/login", post(handlers::login))
        .merge(protected_user_routes)
        // Static segments above win over the capture; /user/{id} needs no auth.
        .route("/{id}", get(handlers::user_by_id));

    Router::new()
        .route("/", get(handlers::welcome))
        .nest("/characters", character_routes)
        .nest("/comics", comic_routes)
        .nest("/user", user_routes)
        .fallback(handlers::not_found)
        .with_state(state)
}
