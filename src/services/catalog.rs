//! Upstream catalog client.
//!
//! One outbound request per call, built from the configured base URI and API
//! key plus caller-supplied filters. Each call is a single best-effort
//! attempt: no retries, no timeout policy, no caching. Callers decide whether
//! a failure is surfaced (single lookups) or absorbed (batch paths).

use crate::config::AppConfig;
use crate::models::{ItemKind, ListQuery};
use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("upstream request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("upstream request failed with status {0}")]
    Status(reqwest::StatusCode),
}

#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait CatalogClient: Send + Sync {
    /// GET `{base}/characters` or `{base}/comics`, forwarding `limit`,
    /// `skip`, and the kind's text filter only when present.
    async fn fetch_list(&self, kind: ItemKind, query: &ListQuery) -> Result<Value, CatalogError>;

    /// GET `{base}/character/{id}` or `{base}/comic/{id}`.
    async fn fetch_by_id(&self, kind: ItemKind, id: &str) -> Result<Value, CatalogError>;

    /// GET `{base}/comics/{characterId}` -- comics featuring a character.
    async fn fetch_comics_by_character(&self, character_id: &str) -> Result<Value, CatalogError>;
}

pub struct HttpCatalogClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HttpCatalogClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            // Default client: no request timeout, matching the single
            // best-effort-attempt contract.
            client: reqwest::Client::new(),
            base_url: config.catalog_base_url.trim_end_matches('/').to_string(),
            api_key: config.catalog_api_key.clone(),
        }
    }

    async fn get_json(
        &self,
        url: String,
        params: Vec<(&'static str, String)>,
    ) -> Result<Value, CatalogError> {
        let response = self.client.get(&url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl CatalogClient for HttpCatalogClient {
    async fn fetch_list(&self, kind: ItemKind, query: &ListQuery) -> Result<Value, CatalogError> {
        let mut params = vec![("apiKey", self.api_key.clone())];
        if let Some(limit) = &query.limit {
            params.push(("limit", limit.clone()));
        }
        if let Some(skip) = &query.skip {
            params.push(("skip", skip.clone()));
        }
        let filter = match kind {
            ItemKind::Character => &query.name,
            ItemKind::Comic => &query.title,
        };
        if let Some(filter) = filter {
            params.push((kind.filter_param(), filter.clone()));
        }

        self.get_json(format!("{}/{}", self.base_url, kind.collection()), params)
            .await
    }

    async fn fetch_by_id(&self, kind: ItemKind, id: &str) -> Result<Value, CatalogError> {
        self.get_json(
            format!("{}/{}/{}", self.base_url, kind.singular(), id),
            vec![("apiKey", self.api_key.clone())],
        )
        .await
    }

    async fn fetch_comics_by_character(&self, character_id: &str) -> Result<Value, CatalogError> {
        self.get_json(
            format!("{}/comics/{}", self.base_url, character_id),
            vec![("apiKey", self.api_key.clone())],
        )
        .await
    }
}
