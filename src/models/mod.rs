pub mod catalog;
pub mod user;

pub use catalog::{ByIdsRequest, ItemKind, ListQuery};
pub use user::{AuthResponse, FavoriteToggle, Favorites, ToggleAction, User, UserProfile};
