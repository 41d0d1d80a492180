//! External API integrations
//!
//! Both providers go through [`forward_json`]: one request out, the decoded
//! body back, or a classified [`AppError`].

pub mod github;
pub mod weather;

pub use github::GitHubClient;
pub use weather::WeatherClient;

use reqwest::{Client, Request, Url};
use serde_json::Value;
use shared::UpstreamResource;

use crate::error::{AppError, AppResult};

/// Written over credentials before a URL is logged
pub const REDACTED_KEY: &str = "***API_KEY***";

/// Longest upstream error body kept in the logs
const MAX_LOGGED_BODY: usize = 200;

/// Replace every occurrence of `secret` in `url`
pub fn redact(url: &str, secret: &str) -> String {
    if secret.is_empty() {
        return url.to_string();
    }
    url.replace(secret, REDACTED_KEY)
}

/// Append path segments to a provider base URL, escaping each one
pub(crate) fn endpoint_url(base: &Url, segments: &[&str]) -> AppResult<Url> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| AppError::Configuration(format!("{} cannot be used as a base URL", base)))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

pub(crate) fn parse_base_url(setting: &str, value: &str) -> AppResult<Url> {
    Url::parse(value).map_err(|e| AppError::Configuration(format!("invalid {setting} {value}: {e}")))
}

/// Send one request upstream and return its decoded JSON body untouched
pub(crate) async fn forward_json(
    client: &Client,
    request: Request,
    resource: UpstreamResource,
    secret: Option<&str>,
) -> AppResult<Value> {
    let url = redact(request.url().as_str(), secret.unwrap_or_default());
    tracing::debug!(%resource, %url, "Forwarding request upstream");

    let response = client
        .execute(request)
        .await
        .map_err(|e| AppError::transport(resource, e))?;

    let status = response.status();
    tracing::debug!(%resource, status = status.as_u16(), "Upstream responded");

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(
            %resource,
            status = status.as_u16(),
            body = %shared::truncate_label(&redact(&body, secret.unwrap_or_default()), MAX_LOGGED_BODY),
            "Upstream error response"
        );
        return Err(AppError::upstream(resource, status.as_u16()));
    }

    response
        .json::<Value>()
        .await
        .map_err(|e| AppError::transport(resource, e))
}
