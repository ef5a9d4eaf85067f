use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// Decodes a JSON `null` as the type's zero value instead of failing.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

impl From<StringOrNumber> for String {
    fn from(value: StringOrNumber) -> Self {
        match value {
            StringOrNumber::String(s) => s,
            StringOrNumber::Unsigned(n) => n.to_string(),
            StringOrNumber::Signed(n) => n.to_string(),
            StringOrNumber::Float(n) => n.to_string(),
        }
    }
}

/// Accepts JSON strings or numbers as map values, keeping their textual
/// form; `null` decodes as an empty map.
pub fn string_or_number_map<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<BTreeMap<String, StringOrNumber>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|(key, value)| (key, value.into()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize, Default)]
    #[serde(default)]
    struct Sample {
        #[serde(deserialize_with = "null_as_default")]
        count: i64,
        #[serde(deserialize_with = "string_or_number_map")]
        countries: BTreeMap<String, String>,
    }

    #[test]
    fn null_becomes_zero() {
        let sample: Sample = serde_json::from_str(r#"{"count": null}"#).unwrap();
        assert_eq!(sample.count, 0);
    }

    #[test]
    fn mixed_map_values() {
        let sample: Sample =
            serde_json::from_str(r#"{"countries": {"US": 1200, "JP": "830", "XX": -1}}"#).unwrap();
        assert_eq!(sample.countries["US"], "1200");
        assert_eq!(sample.countries["JP"], "830");
        assert_eq!(sample.countries["XX"], "-1");
    }

    #[test]
    fn missing_fields_use_defaults() {
        let sample: Sample = serde_json::from_str("{}").unwrap();
        assert_eq!(sample.count, 0);
        assert!(sample.countries.is_empty());
    }
}
