pub mod character_handlers;
pub mod comic_handlers;
pub mod user_handlers;

pub use character_handlers::{characters_by_ids, get_character, list_characters};
pub use comic_handlers::{comics_by_character, comics_by_ids, get_comic, list_comics};
pub use user_handlers::{favorites, login, profile, signup, toggle_favorite, user_by_id};

use axum::{http::StatusCode, response::Json};
use serde_json::{json, Value};

/// GET /
pub async fn welcome() -> Json<Value> {
    Json(json!("Welcome to the comics gateway"))
}

/// Catch-all for unmatched routes.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "Not found" })))
}
