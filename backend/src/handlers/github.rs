//! HTTP handlers for the GitHub forwarding endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use shared::{require_parameter, UpstreamResource};

use super::{first_value, QueryPairs};
use crate::error::AppResult;
use crate::AppState;

/// Public profile for a user
pub async fn get_github_user(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> AppResult<Json<Value>> {
    let username = require_parameter(
        UpstreamResource::UserProfile,
        first_value(&query, "username"),
    )?;
    let data = state.github.get_user(username).await?;
    Ok(Json(data))
}

/// Recently updated repositories for a user
pub async fn get_github_repos(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> AppResult<Json<Value>> {
    let username = require_parameter(
        UpstreamResource::Repositories,
        first_value(&query, "username"),
    )?;
    let data = state.github.get_repositories(username).await?;

    tracing::debug!(
        username,
        count = data.as_array().map(Vec::len).unwrap_or_default(),
        "Fetched repositories"
    );
    Ok(Json(data))
}
