pub mod auth_service;
pub mod catalog;
pub mod fanout;
pub mod user_service;

pub use auth_service::AuthService;
pub use catalog::{CatalogClient, CatalogError, HttpCatalogClient};
pub use fanout::{aggregate, first_result, BatchResult, FanoutError};
pub use user_service::{SignupRequest, UserService};
