//! Upstream data models consumed by the dashboard

mod github;
mod weather;

pub use github::*;
pub use weather::*;

use serde::{Deserialize, Deserializer};

/// Lists the provider sends as `null` read as empty
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
