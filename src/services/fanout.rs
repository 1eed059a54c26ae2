//! Best-effort batch fetch.
//!
//! Turns a "fetch one" function into "fetch many": every per-id fetch is
//! launched before any is awaited, all of them settle before anything is
//! reported, and a failed or null item is dropped rather than aborting the
//! batch. Partial failure is normal here and silent to the caller beyond the
//! reduced count. Repeated ids are fetched repeatedly; there is no dedup and
//! no concurrency cap.

use futures::future::join_all;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::future::Future;

use crate::error::AppError;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FanoutError {
    #[error("IDs array is required")]
    InvalidInput,
}

impl From<FanoutError> for AppError {
    fn from(err: FanoutError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Retained payloads plus their count. `count` never includes dropped items.
#[derive(Debug, Default, Serialize)]
pub struct BatchResult {
    pub count: usize,
    pub results: Vec<Value>,
}

/// Fetches every id concurrently and collects the successes.
///
/// Fails with [`FanoutError::InvalidInput`] when `ids` is absent or empty.
/// Per-item failures are logged and dropped, as are JSON-null payloads; if
/// every fetch fails the result is an empty batch, not an error.
///
/// `results` currently comes back in launch order because `join_all`
/// preserves it, but callers must not rely on that: ordering is an explicit
/// non-guarantee of this aggregation.
pub async fn aggregate<'a, F, Fut, E>(
    ids: Option<&'a [String]>,
    fetch_one: F,
) -> Result<BatchResult, FanoutError>
where
    F: Fn(&'a str) -> Fut,
    Fut: Future<Output = Result<Value, E>>,
    E: fmt::Display,
{
    let ids = match ids {
        Some(ids) if !ids.is_empty() => ids,
        _ => return Err(FanoutError::InvalidInput),
    };

    let fetches = ids.iter().map(|id| fetch_one(id.as_str()));
    let settled = join_all(fetches).await;

    let results: Vec<Value> = settled
        .into_iter()
        .zip(ids)
        .filter_map(|(outcome, id)| match outcome {
            Ok(Value::Null) => None,
            Ok(payload) => Some(payload),
            Err(err) => {
                tracing::warn!(%id, error = %err, "dropping failed batch item");
                None
            }
        })
        .collect();

    Ok(BatchResult {
        count: results.len(),
        results,
    })
}

/// Pulls `results[0]` out of an upstream payload, the shape the catalog uses
/// for by-id lookups on the favorites path. Anything else becomes null and is
/// filtered by the aggregation.
pub fn first_result(mut payload: Value) -> Value {
    match payload.get_mut("results").and_then(Value::as_array_mut) {
        Some(items) if !items.is_empty() => items[0].take(),
        _ => Value::Null,
    }
}
