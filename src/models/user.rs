use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full user row, secrets included. Never serialized to a client as-is;
/// responses go through [`UserProfile`] or [`AuthResponse`].
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    /// Base64 SHA-256 digest of password + salt.
    pub hash: String,
    /// Random per-user hex secret mixed into the password digest.
    pub salt: String,
    /// Opaque bearer credential, assigned at signup, never rotated.
    pub token: String,
    pub created_at: Option<String>,
}

/// A user's saved items, split by kind, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorites {
    pub characters: Vec<String>,
    pub comics: Vec<String>,
}

impl Favorites {
    /// Builds a favorites projection from `(kind, item_id)` rows ordered by
    /// insertion. Rows with an unrecognized kind are dropped.
    pub fn from_rows(rows: Vec<(String, String)>) -> Self {
        let mut favorites = Favorites::default();
        for (kind, item_id) in rows {
            match kind.as_str() {
                "character" => favorites.characters.push(item_id),
                "comic" => favorites.comics.push(item_id),
                _ => {}
            }
        }
        favorites
    }
}

/// Public projection of a user: everything except `hash`, `salt`, `token`.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: i64,
    pub email: String,
    pub favorites: Favorites,
}

/// Body returned by signup and login.
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    #[serde(rename = "_id")]
    pub id: i64,
    pub token: String,
    pub favorites: Favorites,
}

/// Whether a toggle added or removed the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Added,
    Removed,
}

/// Outcome of a favorites toggle: what happened plus the updated lists.
#[derive(Debug, Clone)]
pub struct FavoriteToggle {
    pub action: ToggleAction,
    pub favorites: Favorites,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorites_from_rows_preserves_insertion_order() {
        let favorites = Favorites::from_rows(vec![
            ("character".to_string(), "1009368".to_string()),
            ("comic".to_string(), "428".to_string()),
            ("character".to_string(), "1009220".to_string()),
        ]);

        assert_eq!(favorites.characters, vec!["1009368", "1009220"]);
        assert_eq!(favorites.comics, vec!["428"]);
    }

    #[test]
    fn profile_serializes_id_as_mongo_style_underscore_id() {
        let profile = UserProfile {
            id: 7,
            email: "a@b.com".to_string(),
            favorites: Favorites::default(),
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(value["_id"], 7);
        assert!(value.get("hash").is_none());
    }
}
