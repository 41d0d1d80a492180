//! GitHub REST client for public profiles and repositories
//!
//! Requests are unauthenticated and subject to GitHub's anonymous rate limit.

use reqwest::{header, Client, Url};
use serde_json::Value;
use shared::UpstreamResource;

use super::{endpoint_url, forward_json, parse_base_url};
use crate::config::GitHubConfig;
use crate::error::{AppError, AppResult};

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// GitHub API client
#[derive(Clone)]
pub struct GitHubClient {
    client: Client,
    base_url: Url,
    per_page: u32,
}

impl GitHubClient {
    pub fn new(client: Client, config: &GitHubConfig) -> AppResult<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url("github.base_url", &config.base_url)?,
            per_page: config.per_page,
        })
    }

    /// Fetch a public user profile
    pub async fn get_user(&self, username: &str) -> AppResult<Value> {
        let resource = UpstreamResource::UserProfile;
        tracing::info!(%resource, username, "Fetching GitHub data");

        let url = endpoint_url(&self.base_url, &["users", username])?;
        let request = self
            .client
            .get(url)
            .header(header::ACCEPT, GITHUB_ACCEPT)
            .build()
            .map_err(|e| AppError::transport(resource, e))?;

        forward_json(&self.client, request, resource, None).await
    }

    /// Fetch one page of a user's repositories, most recently updated first
    pub async fn get_repositories(&self, username: &str) -> AppResult<Value> {
        let resource = UpstreamResource::Repositories;
        tracing::info!(%resource, username, "Fetching GitHub data");

        let url = endpoint_url(&self.base_url, &["users", username, "repos"])?;
        let per_page = self.per_page.to_string();
        let request = self
            .client
            .get(url)
            .header(header::ACCEPT, GITHUB_ACCEPT)
            .query(&[("sort", "updated"), ("per_page", per_page.as_str())])
            .build()
            .map_err(|e| AppError::transport(resource, e))?;

        forward_json(&self.client, request, resource, None).await
    }
}
