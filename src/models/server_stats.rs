use crate::common::de::{null_as_default, string_or_number_map};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerStats {
    #[serde(deserialize_with = "null_as_default")]
    pub online_users: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_mapsets: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_scores: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_users: u64,
}

/// Player count per country code, kept in the service's textual form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct CountryStats(pub BTreeMap<String, String>);

impl CountryStats {
    pub fn get(&self, country: &str) -> Option<&str> {
        self.0.get(country).map(String::as_str)
    }

    /// Parsed player count for `country`, if present and numeric.
    pub fn players(&self, country: &str) -> Option<u64> {
        self.get(country)?.parse().ok()
    }
}

impl<'de> Deserialize<'de> for CountryStats {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        string_or_number_map(deserializer).map(CountryStats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_counts() {
        let stats: CountryStats =
            serde_json::from_str(r#"{"US": 15000, "DE": "4200", "total": 19200}"#).unwrap();
        assert_eq!(stats.players("US"), Some(15000));
        assert_eq!(stats.get("DE"), Some("4200"));
        assert_eq!(stats.players("FR"), None);
        assert_eq!(stats.0.len(), 3);
    }
}
