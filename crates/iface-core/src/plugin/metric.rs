//! Metric descriptors exchanged with the host.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::config::Config;
use super::namespace::Namespace;

/// A metric as requested by, or returned to, the host.
///
/// Catalog entries carry a wildcard namespace and no value or timestamp.
/// Collected metrics carry a concrete namespace, the counter value and the
/// time the snapshot was read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metric {
    pub namespace: Namespace,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<i64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub unit: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Config::is_empty")]
    pub config: Config,
}

impl Metric {
    /// Creates a bare collection request for `namespace`.
    pub fn request(namespace: Namespace) -> Self {
        Self {
            namespace,
            data: None,
            unit: String::new(),
            description: String::new(),
            timestamp: None,
            config: Config::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_namespace_only() {
        let ns: Namespace = "/intel/procfs/iface/lo/bytes_recv".parse().unwrap();
        let json = serde_json::to_value(Metric::request(ns)).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert!(obj.contains_key("namespace"));
    }

    #[test]
    fn test_timestamp_is_rfc3339() {
        let ns: Namespace = "/intel/procfs/iface/lo/bytes_recv".parse().unwrap();
        let mut metric = Metric::request(ns);
        metric.data = Some(42);
        metric.timestamp = DateTime::from_timestamp(1_700_000_000, 0);

        let json = serde_json::to_value(&metric).unwrap();
        assert_eq!(json["data"], 42);
        assert_eq!(json["timestamp"], "2023-11-14T22:13:20Z");

        let back: Metric = serde_json::from_value(json).unwrap();
        assert_eq!(back, metric);
    }
}
