//! WebAssembly module for the DataViz Platform dashboard
//!
//! Turns the JSON bodies returned by the backend into chart-ready JSON:
//! - Repository rankings, comparison and language distribution
//! - Forecast temperature series and condition distribution
//! - Weather card and profile header summaries
//!
//! A `null` or blank repository list or forecast body charts as empty.

use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    // Set up panic hook for better error messages in browser console
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Build every chart on the repository page from a `/api/github/repos` body
#[wasm_bindgen]
pub fn repository_charts(repos_json: &str) -> Result<String, JsValue> {
    build_repository_charts(repos_json).map_err(to_js_error)
}

/// Build the forecast charts from a `/api/weather/forecast` body
#[wasm_bindgen]
pub fn forecast_charts(forecast_json: &str) -> Result<String, JsValue> {
    build_forecast_charts(forecast_json).map_err(to_js_error)
}

/// Summarize a `/api/weather` body for the current weather card
#[wasm_bindgen]
pub fn weather_summary(weather_json: &str) -> Result<String, JsValue> {
    build_weather_summary(weather_json).map_err(to_js_error)
}

/// Summarize a profile together with its repositories
#[wasm_bindgen]
pub fn profile_summary(profile_json: &str, repos_json: &str) -> Result<String, JsValue> {
    build_profile_summary(profile_json, repos_json).map_err(to_js_error)
}

#[wasm_bindgen]
pub fn truncate_label(label: &str, max_len: usize) -> String {
    shared::truncate_label(label, max_len)
}

/// Repository size in whole megabytes
#[wasm_bindgen]
pub fn kb_to_mb(kilobytes: f64) -> f64 {
    if !kilobytes.is_finite() || kilobytes <= 0.0 {
        return 0.0;
    }
    shared::kb_to_mb(kilobytes.round() as u64) as f64
}

/// Visibility in kilometers with one decimal
#[wasm_bindgen]
pub fn visibility_km(meters: f64) -> String {
    shared::meters_to_km(meters)
}

/// Forecast sample time as `hh:mm AM/PM` in the city's local time
#[wasm_bindgen]
pub fn format_forecast_time(epoch_seconds: f64, utc_offset_seconds: i32) -> String {
    shared::format_hour_minute(epoch_seconds as i64, utc_offset_seconds)
}

fn build_repository_charts(repos_json: &str) -> Result<String, String> {
    let repos: Vec<Repository> = parse_or_default(repos_json, "repositories")?;
    to_json(&shared::repository_charts(&repos, &ChartConfig::default()))
}

fn build_forecast_charts(forecast_json: &str) -> Result<String, String> {
    let forecast: ForecastResponse = parse_or_default(forecast_json, "forecast")?;
    to_json(&shared::forecast_charts(&forecast, &ChartConfig::default()))
}

fn build_weather_summary(weather_json: &str) -> Result<String, String> {
    let snapshot: WeatherSnapshot = parse(weather_json, "weather")?;
    to_json(&shared::weather_summary(&snapshot))
}

fn build_profile_summary(profile_json: &str, repos_json: &str) -> Result<String, String> {
    let profile: UserProfile = parse(profile_json, "profile")?;
    let repos: Vec<Repository> = parse_or_default(repos_json, "repositories")?;
    to_json(&shared::profile_summary(&profile, &repos))
}

fn parse<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} JSON: {}", what, e))
}

/// Missing collections chart as empty rather than failing
fn parse_or_default<T: DeserializeOwned + Default>(json: &str, what: &str) -> Result<T, String> {
    let trimmed = json.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(T::default());
    }
    parse(trimmed, what)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Failed to encode chart data: {}", e))
}

fn to_js_error(message: String) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(&message));
    JsValue::from_str(&message)
}
