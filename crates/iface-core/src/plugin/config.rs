//! Host-supplied plugin configuration.
//!
//! The host passes a flat string-keyed map to catalog and collection calls.
//! The interface collector does not consume any key today; the type exists so
//! the host contract is complete and values travel with requested metrics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single configuration value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

/// Plugin configuration as delivered by the host.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Config {
    values: BTreeMap<String, ConfigValue>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object such as `{"interval": 10, "tag": "edge"}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: ConfigValue) {
        self.values.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        match self.values.get(key) {
            Some(ConfigValue::Str(s)) => Some(s),
            _ => None,
        }
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        match self.values.get(key) {
            Some(ConfigValue::Int(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.values.get(key) {
            Some(ConfigValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let config =
            Config::from_json(r#"{"debug": true, "interval": 10, "ratio": 0.5, "tag": "edge"}"#)
                .unwrap();

        assert_eq!(config.len(), 4);
        assert_eq!(config.get_bool("debug"), Some(true));
        assert_eq!(config.get_int("interval"), Some(10));
        assert_eq!(config.get("ratio"), Some(&ConfigValue::Float(0.5)));
        assert_eq!(config.get_str("tag"), Some("edge"));
        assert_eq!(config.get_str("interval"), None);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(Config::from_json("[1, 2]").is_err());
        assert!(Config::from_json(r#"{"nested": {"a": 1}}"#).is_err());
    }

    #[test]
    fn test_insert() {
        let mut config = Config::new();
        assert!(config.is_empty());
        config.insert("tag", ConfigValue::Str("core".to_string()));
        assert_eq!(config.get_str("tag"), Some("core"));
    }
}
