//! List window extractor
//!
//! Extracts offset/limit windowing parameters from query strings for the
//! bounded list endpoints (subscriptions). Default window 100, hard cap
//! 1000 per call.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use member_core::traits::{DEFAULT_LIST_WINDOW, MAX_LIST_WINDOW};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw windowing query parameters
#[derive(Debug, Deserialize)]
pub struct ListWindowParams {
    /// Rows to skip
    #[serde(default)]
    pub offset: Option<i64>,
    /// Maximum number of rows to return
    #[serde(default)]
    pub limit: Option<i64>,
}

/// Validated offset/limit window
#[derive(Debug, Clone)]
pub struct ListWindow {
    pub offset: i64,
    pub limit: i64,
}

impl Default for ListWindow {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIST_WINDOW,
        }
    }
}

impl TryFrom<ListWindowParams> for ListWindow {
    type Error = ApiError;

    fn try_from(params: ListWindowParams) -> Result<Self, Self::Error> {
        let offset = params.offset.unwrap_or(0);
        if offset < 0 {
            return Err(ApiError::invalid_query("'offset' must not be negative"));
        }

        let limit = params.limit.unwrap_or(DEFAULT_LIST_WINDOW);
        if limit < 1 {
            return Err(ApiError::invalid_query("'limit' must be at least 1"));
        }

        Ok(ListWindow {
            offset,
            limit: limit.min(MAX_LIST_WINDOW),
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ListWindow
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ListWindowParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        ListWindow::try_from(params)
    }
}
