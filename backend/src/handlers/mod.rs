//! HTTP handlers

pub mod github;
pub mod health;
pub mod weather;

pub use github::*;
pub use health::*;
pub use weather::*;

/// Query string pairs in request order, repeated keys included
pub type QueryPairs = Vec<(String, String)>;

/// First value given for `name`, the way a browser's `URLSearchParams::get` reads it
pub(crate) fn first_value<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> QueryPairs {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_first_value_takes_earliest() {
        let query = pairs(&[("units", "metric"), ("city", "London"), ("city", "Paris")]);
        assert_eq!(first_value(&query, "city"), Some("London"));
        assert_eq!(first_value(&query, "username"), None);
    }

    #[test]
    fn test_first_value_keeps_empty() {
        let query = pairs(&[("city", ""), ("city", "Paris")]);
        assert_eq!(first_value(&query, "city"), Some(""));
    }
}
