use serde::Deserialize;
use serde_json::Value;

/// The two resource kinds the upstream catalog serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Character,
    Comic,
}

impl ItemKind {
    /// Parses the `type` value of a favorites-toggle request.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "character" => Some(ItemKind::Character),
            "comic" => Some(ItemKind::Comic),
            _ => None,
        }
    }

    /// Plural path segment used for list requests (`/characters`, `/comics`).
    pub fn collection(self) -> &'static str {
        match self {
            ItemKind::Character => "characters",
            ItemKind::Comic => "comics",
        }
    }

    /// Singular path segment used for by-id requests (`/character/{id}`,
    /// `/comic/{id}`) -- the upstream API drops the plural here.
    pub fn singular(self) -> &'static str {
        match self {
            ItemKind::Character => "character",
            ItemKind::Comic => "comic",
        }
    }

    /// Name of the text filter the upstream accepts for this kind.
    pub fn filter_param(self) -> &'static str {
        match self {
            ItemKind::Character => "name",
            ItemKind::Comic => "title",
        }
    }
}

/// Caller-supplied list filters, forwarded verbatim when present. No type or
/// range validation is applied; the upstream is the authority on their shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<String>,
    pub skip: Option<String>,
    pub name: Option<String>,
    pub title: Option<String>,
}

/// Body of the batch-lookup endpoints. `ids` stays raw JSON so that a
/// missing or non-array value reaches the aggregator's own 400 instead of a
/// serde-layer reject.
#[derive(Debug, Deserialize)]
pub struct ByIdsRequest {
    #[serde(default)]
    pub ids: Option<Value>,
}

impl ByIdsRequest {
    /// The ids as strings, `None` unless `ids` is actually a JSON array.
    /// Non-string elements are stringified and forwarded as-is; the upstream
    /// decides whether they resolve.
    pub fn id_list(&self) -> Option<Vec<String>> {
        let items = self.ids.as_ref()?.as_array()?;
        Some(
            items
                .iter()
                .map(|item| match item.as_str() {
                    Some(id) => id.to_string(),
                    None => item.to_string(),
                })
                .collect(),
        )
    }
}
