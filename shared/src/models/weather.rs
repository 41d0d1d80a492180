//! Weather data models
//!
//! Shapes of the OpenWeatherMap 2.5 payloads that the dashboard reads. The
//! forwarding endpoints pass these bodies through untouched, so only the
//! fields the charts and cards consume are modelled here.

use serde::{Deserialize, Serialize};

use super::null_as_empty;

/// Current conditions for a city
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherSnapshot {
    pub name: String,
    #[serde(default)]
    pub sys: SnapshotSys,
    pub main: WeatherMain,
    #[serde(default)]
    pub wind: Wind,
    /// Visibility in meters
    pub visibility: Option<f64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub weather: Vec<WeatherCondition>,
}

impl WeatherSnapshot {
    /// First condition reported by the provider, if any
    pub fn primary_condition(&self) -> Option<&WeatherCondition> {
        self.weather.first()
    }

    pub fn country(&self) -> Option<&str> {
        self.sys.country.as_deref()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SnapshotSys {
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherMain {
    pub temp: f64,
    pub feels_like: f64,
    pub humidity: u32,
    pub pressure: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Wind {
    /// Meters per second with metric units
    #[serde(default)]
    pub speed: f64,
}

/// Condition label ("Rain", "Clear") plus free text description
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherCondition {
    pub main: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

/// Multi-day forecast sampled every three hours
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ForecastResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub list: Vec<ForecastSample>,
    pub city: Option<ForecastCity>,
}

impl ForecastResponse {
    /// Shift from UTC in seconds for the forecast location, zero when unknown
    pub fn utc_offset_seconds(&self) -> i32 {
        self.city.as_ref().and_then(|c| c.timezone).unwrap_or(0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastCity {
    pub name: String,
    pub country: Option<String>,
    pub timezone: Option<i32>,
}

/// One forecast entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastSample {
    /// Epoch seconds
    pub dt: i64,
    pub main: ForecastMain,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub weather: Vec<WeatherCondition>,
    pub dt_txt: Option<String>,
}

impl ForecastSample {
    pub fn primary_condition(&self) -> Option<&str> {
        self.weather.first().map(|w| w.main.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ForecastMain {
    pub temp: f64,
    pub humidity: u32,
}
