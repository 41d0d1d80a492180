//! Chart builders for the weather and GitHub pages
//!
//! Each builder turns a decoded upstream payload into the arrays one chart
//! consumes. Forecast builders expect the caller to have applied the
//! forecast window already; [`forecast_charts`] does that for a full
//! response.

use crate::aggregate::{
    capitalize_first, count_by_category, format_hour_minute, kb_to_mb, leading_window,
    meters_to_km, top_n_by, truncate_label,
};
use crate::models::{ForecastResponse, ForecastSample, Repository, UserProfile, WeatherSnapshot};
use crate::types::{
    ChartConfig, ChartPoint, ForecastCharts, ProfileSummary, RepositoryCharts, StarsForksPoint,
    TemperaturePoint, WeatherSummary,
};

// ============================================================================
// Repositories
// ============================================================================

/// Most starred repositories, star count as value
pub fn top_repositories_by_stars(repos: &[Repository], config: &ChartConfig) -> Vec<ChartPoint> {
    top_n_by(repos, config.top_n, |r| r.stargazers_count)
        .into_iter()
        .map(|r| ChartPoint::new(truncate_label(&r.name, config.axis_label_max), r.stargazers_count))
        .collect()
}

/// Largest repositories, size in megabytes as value
pub fn top_repositories_by_size(repos: &[Repository], config: &ChartConfig) -> Vec<ChartPoint> {
    top_n_by(repos, config.top_n, |r| r.size)
        .into_iter()
        .map(|r| ChartPoint::new(truncate_label(&r.name, config.axis_label_max), kb_to_mb(r.size)))
        .collect()
}

/// Stars against forks for the leading repositories, in upstream order
/// (most recently updated first)
pub fn stars_vs_forks(repos: &[Repository], config: &ChartConfig) -> Vec<StarsForksPoint> {
    leading_window(repos, config.top_n)
        .iter()
        .map(|r| StarsForksPoint {
            label: truncate_label(&r.name, config.comparison_label_max),
            stars: r.stargazers_count,
            forks: r.forks_count,
        })
        .collect()
}

/// Repository count per primary language; repositories without one are left out
pub fn language_distribution(repos: &[Repository]) -> Vec<ChartPoint> {
    count_by_category(repos, |r| r.language.as_deref())
        .into_iter()
        .map(|(language, count)| ChartPoint::new(language, count))
        .collect()
}

pub fn repository_charts(repos: &[Repository], config: &ChartConfig) -> RepositoryCharts {
    RepositoryCharts {
        top_by_stars: top_repositories_by_stars(repos, config),
        top_by_size: top_repositories_by_size(repos, config),
        stars_vs_forks: stars_vs_forks(repos, config),
        languages: language_distribution(repos),
    }
}

pub fn profile_summary(profile: &UserProfile, repos: &[Repository]) -> ProfileSummary {
    ProfileSummary {
        login: profile.login.clone(),
        display_name: profile.display_name().to_string(),
        public_repos: profile.public_repos,
        followers: profile.followers,
        following: profile.following,
        total_stars: repos.iter().map(|r| r.stargazers_count).sum(),
        total_forks: repos.iter().map(|r| r.forks_count).sum(),
    }
}

// ============================================================================
// Weather
// ============================================================================

/// Temperature and humidity per sample
pub fn temperature_series(
    samples: &[ForecastSample],
    utc_offset_seconds: i32,
) -> Vec<TemperaturePoint> {
    samples
        .iter()
        .map(|s| TemperaturePoint {
            time: format_hour_minute(s.dt, utc_offset_seconds),
            temperature: s.main.temp.round() as i64,
            humidity: s.main.humidity,
        })
        .collect()
}

/// Sample count per primary condition
pub fn condition_distribution(samples: &[ForecastSample]) -> Vec<ChartPoint> {
    count_by_category(samples, |s| s.primary_condition())
        .into_iter()
        .map(|(condition, count)| ChartPoint::new(condition, count))
        .collect()
}

/// Both forecast charts over the leading window of the response
pub fn forecast_charts(forecast: &ForecastResponse, config: &ChartConfig) -> ForecastCharts {
    let window = leading_window(&forecast.list, config.forecast_window);

    ForecastCharts {
        temperature: temperature_series(window, forecast.utc_offset_seconds()),
        conditions: condition_distribution(window),
    }
}

pub fn weather_summary(snapshot: &WeatherSnapshot) -> WeatherSummary {
    let condition = snapshot.primary_condition();

    WeatherSummary {
        location: snapshot.name.clone(),
        country: snapshot.country().map(str::to_string),
        temperature: snapshot.main.temp.round() as i64,
        feels_like: snapshot.main.feels_like.round() as i64,
        humidity: snapshot.main.humidity,
        pressure: snapshot.main.pressure,
        wind_speed: snapshot.wind.speed,
        visibility_km: snapshot.visibility.map(meters_to_km),
        condition: condition.map(|c| c.main.clone()),
        description: condition.map(|c| capitalize_first(&c.description)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn repo(name: &str, stars: u64, forks: u64, size: u64, language: Option<&str>) -> Repository {
        serde_json::from_value(json!({
            "id": stars * 1000 + forks,
            "name": name,
            "description": null,
            "stargazers_count": stars,
            "forks_count": forks,
            "watchers_count": stars,
            "size": size,
            "language": language,
            "created_at": "2020-01-01T00:00:00Z",
            "updated_at": "2024-06-01T12:00:00Z"
        }))
        .unwrap()
    }

    fn sample(dt: i64, temp: f64, humidity: u32, condition: Option<&str>) -> ForecastSample {
        let weather = match condition {
            Some(c) => json!([{ "main": c, "description": c.to_lowercase(), "icon": "01d" }]),
            None => json!([]),
        };
        serde_json::from_value(json!({
            "dt": dt,
            "main": { "temp": temp, "humidity": humidity },
            "weather": weather
        }))
        .unwrap()
    }

    #[test]
    fn test_top_by_stars_truncates_at_axis_limit() {
        let repos = vec![
            repo("small", 5, 0, 10, None),
            repo("symfony-standard-edition", 50, 0, 10, None),
            repo("tiny", 1, 0, 10, None),
        ];
        let config = ChartConfig {
            top_n: 2,
            ..ChartConfig::default()
        };

        let points = top_repositories_by_stars(&repos, &config);
        assert_eq!(
            points,
            vec![
                ChartPoint::new("symfony-stan...", 50),
                ChartPoint::new("small", 5),
            ]
        );
    }

    #[test]
    fn test_top_by_size_in_megabytes() {
        let repos = vec![
            repo("docs", 0, 0, 2048, None),
            repo("monorepo", 0, 0, 512_000, None),
            repo("cli", 0, 0, 100, None),
        ];

        let points = top_repositories_by_size(&repos, &ChartConfig::default());
        assert_eq!(
            points,
            vec![
                ChartPoint::new("monorepo", 500),
                ChartPoint::new("docs", 2),
                ChartPoint::new("cli", 0),
            ]
        );
    }

    #[test]
    fn test_stars_vs_forks_keeps_upstream_order() {
        let repos: Vec<Repository> = (0..12)
            .map(|i| repo(&format!("repository-{i}"), i, i * 2, 0, None))
            .collect();

        let points = stars_vs_forks(&repos, &ChartConfig::default());
        assert_eq!(points.len(), 10);
        assert_eq!(points[0].label, "reposit...");
        assert_eq!(points[0].stars, 0);
        assert_eq!(points[9].forks, 18);
    }

    #[test]
    fn test_language_distribution() {
        let repos = vec![
            repo("a", 0, 0, 0, Some("Go")),
            repo("b", 0, 0, 0, None),
            repo("c", 0, 0, 0, Some("Go")),
            repo("d", 0, 0, 0, Some("Rust")),
        ];

        assert_eq!(
            language_distribution(&repos),
            vec![ChartPoint::new("Go", 2), ChartPoint::new("Rust", 1)]
        );
    }

    #[test]
    fn test_repository_charts_empty() {
        let charts = repository_charts(&[], &ChartConfig::default());
        assert_eq!(charts, RepositoryCharts::default());
    }

    #[test]
    fn test_forecast_charts_use_first_eight_samples() {
        let mut list: Vec<ForecastSample> = (0..8)
            .map(|i| sample(1_704_067_200 + i * 10_800, 20.4, 60, Some("Clear")))
            .collect();
        list.extend((8..16).map(|i| sample(1_704_067_200 + i * 10_800, 5.0, 90, Some("Snow"))));
        let forecast = ForecastResponse { list, city: None };

        let charts = forecast_charts(&forecast, &ChartConfig::default());
        assert_eq!(charts.temperature.len(), 8);
        assert_eq!(charts.temperature[0].time, "12:00 AM");
        assert_eq!(charts.temperature[1].time, "03:00 AM");
        assert_eq!(charts.temperature[0].temperature, 20);
        assert_eq!(charts.conditions, vec![ChartPoint::new("Clear", 8)]);
    }

    #[test]
    fn test_condition_distribution_skips_samples_without_condition() {
        let samples = vec![
            sample(0, 1.0, 1, Some("Rain")),
            sample(0, 1.0, 1, None),
            sample(0, 1.0, 1, Some("Clouds")),
            sample(0, 1.0, 1, Some("Rain")),
        ];

        assert_eq!(
            condition_distribution(&samples),
            vec![ChartPoint::new("Rain", 2), ChartPoint::new("Clouds", 1)]
        );
    }

    #[test]
    fn test_forecast_charts_empty() {
        let charts = forecast_charts(&ForecastResponse::default(), &ChartConfig::default());
        assert!(charts.temperature.is_empty());
        assert!(charts.conditions.is_empty());
    }

    #[test]
    fn test_weather_summary() {
        let snapshot: WeatherSnapshot = serde_json::from_value(json!({
            "name": "London",
            "sys": { "country": "GB" },
            "main": { "temp": 14.6, "feels_like": 13.2, "humidity": 77, "pressure": 1012 },
            "wind": { "speed": 4.1 },
            "visibility": 10000,
            "weather": [{ "main": "Clouds", "description": "broken clouds", "icon": "04d" }]
        }))
        .unwrap();

        let summary = weather_summary(&snapshot);
        assert_eq!(summary.location, "London");
        assert_eq!(summary.country.as_deref(), Some("GB"));
        assert_eq!(summary.temperature, 15);
        assert_eq!(summary.feels_like, 13);
        assert_eq!(summary.visibility_km.as_deref(), Some("10.0"));
        assert_eq!(summary.condition.as_deref(), Some("Clouds"));
        assert_eq!(summary.description.as_deref(), Some("Broken clouds"));
    }

    #[test]
    fn test_profile_summary_totals() {
        let profile: UserProfile = serde_json::from_value(json!({
            "login": "fabpot",
            "name": null,
            "avatar_url": "https://avatars.githubusercontent.com/u/47313",
            "bio": null,
            "location": "Lille, France",
            "blog": "",
            "public_repos": 2,
            "followers": 100,
            "following": 0,
            "created_at": "2009-01-19T14:44:55Z"
        }))
        .unwrap();
        let repos = vec![repo("a", 3, 1, 0, None), repo("b", 4, 2, 0, None)];

        let summary = profile_summary(&profile, &repos);
        assert_eq!(summary.display_name, "fabpot");
        assert_eq!(summary.total_stars, 7);
        assert_eq!(summary.total_forks, 3);
    }
}
