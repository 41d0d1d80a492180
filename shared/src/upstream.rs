//! Upstream resources and the user-facing wording of their failures

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A resource fetched from one of the upstream providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpstreamResource {
    CurrentWeather,
    Forecast,
    UserProfile,
    Repositories,
}

impl UpstreamResource {
    /// Name of the query parameter identifying the resource, capitalized
    /// for use at the start of a message
    pub fn parameter(&self) -> &'static str {
        match self {
            UpstreamResource::CurrentWeather | UpstreamResource::Forecast => "City",
            UpstreamResource::UserProfile | UpstreamResource::Repositories => "Username",
        }
    }

    pub fn provider(&self) -> &'static str {
        match self {
            UpstreamResource::CurrentWeather | UpstreamResource::Forecast => "weather",
            UpstreamResource::UserProfile | UpstreamResource::Repositories => "github",
        }
    }

    /// Message for a non-success upstream status
    pub fn status_message(&self, status: u16) -> String {
        match (self, status) {
            (UpstreamResource::CurrentWeather, 404) => {
                "City not found. Please check the spelling and try again.".to_string()
            }
            (UpstreamResource::Forecast, 404) => "City not found for forecast data".to_string(),
            (UpstreamResource::UserProfile, 404) => "User not found".to_string(),
            (UpstreamResource::Repositories, 404) => {
                "Repositories not found for this user".to_string()
            }
            (UpstreamResource::CurrentWeather, 401) => {
                "Weather service authentication failed. Please try again later.".to_string()
            }
            (UpstreamResource::Forecast, 401) => {
                "Weather service authentication failed".to_string()
            }
            (UpstreamResource::UserProfile | UpstreamResource::Repositories, 401) => {
                "GitHub authentication failed. Please try again later.".to_string()
            }
            (_, 429) => "Too many requests. Please wait a moment and try again.".to_string(),
            (resource, code) => format!("{} not available (status: {})", resource.noun(), code),
        }
    }

    /// Message when the upstream could not be reached or its body was unreadable
    pub fn fetch_failure_message(&self) -> String {
        format!("Failed to fetch {}", self.fetch_noun())
    }

    fn noun(&self) -> &'static str {
        match self {
            UpstreamResource::CurrentWeather => "Weather data",
            UpstreamResource::Forecast => "Forecast data",
            UpstreamResource::UserProfile => "User data",
            UpstreamResource::Repositories => "Repositories",
        }
    }

    fn fetch_noun(&self) -> &'static str {
        match self {
            UpstreamResource::CurrentWeather => "weather data",
            UpstreamResource::Forecast => "forecast data",
            UpstreamResource::UserProfile => "user data",
            UpstreamResource::Repositories => "repositories",
        }
    }
}

impl std::fmt::Display for UpstreamResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            UpstreamResource::CurrentWeather => "current_weather",
            UpstreamResource::Forecast => "forecast",
            UpstreamResource::UserProfile => "user_profile",
            UpstreamResource::Repositories => "repositories",
        };
        f.write_str(name)
    }
}

/// Rejection of an identifying parameter before any upstream call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("{0} parameter is required")]
    Missing(&'static str),
}

/// Check that the identifying parameter for a resource is present and
/// non-empty; the value is forwarded exactly as given
pub fn require_parameter(
    resource: UpstreamResource,
    value: Option<&str>,
) -> Result<&str, ParameterError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ParameterError::Missing(resource.parameter())),
    }
}
