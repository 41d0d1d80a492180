//! Chart-ready types handed to the presentation layer

use serde::{Deserialize, Serialize};

/// A labelled value for bar and pie charts
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartPoint {
    pub label: String,
    pub value: u64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Stars and forks side by side for a single repository
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StarsForksPoint {
    pub label: String,
    pub stars: u64,
    pub forks: u64,
}

/// One forecast sample on the temperature/humidity area chart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemperaturePoint {
    pub time: String,
    pub temperature: i64,
    pub humidity: u32,
}

/// Tunables for the chart builders
///
/// The two label limits are kept apart: axis charts have room for longer
/// names than the grouped stars/forks comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChartConfig {
    /// Number of repositories in the ranked and comparison charts
    pub top_n: usize,
    /// Label limit for the stars and size rankings
    pub axis_label_max: usize,
    /// Label limit for the stars vs forks comparison
    pub comparison_label_max: usize,
    /// Leading forecast samples charted (8 x 3h = next 24 hours)
    pub forecast_window: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            axis_label_max: 15,
            comparison_label_max: 10,
            forecast_window: 8,
        }
    }
}

/// Every chart on the repository page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepositoryCharts {
    pub top_by_stars: Vec<ChartPoint>,
    pub top_by_size: Vec<ChartPoint>,
    pub stars_vs_forks: Vec<StarsForksPoint>,
    pub languages: Vec<ChartPoint>,
}

/// Every chart on the forecast panel
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForecastCharts {
    pub temperature: Vec<TemperaturePoint>,
    pub conditions: Vec<ChartPoint>,
}

/// Display values for the current weather card
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSummary {
    pub location: String,
    pub country: Option<String>,
    pub temperature: i64,
    pub feels_like: i64,
    pub humidity: u32,
    pub pressure: u32,
    pub wind_speed: f64,
    /// Kilometers with one decimal, `None` when the provider omitted it
    pub visibility_km: Option<String>,
    pub condition: Option<String>,
    pub description: Option<String>,
}

/// Display values for the profile header
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProfileSummary {
    pub login: String,
    pub display_name: String,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    pub total_stars: u64,
    pub total_forks: u64,
}
