//! Host-facing plugin surface.
//!
//! The host runtime drives a collector through three entry points: list the
//! metrics it can produce, collect a set of requested metrics, and describe
//! itself. [`CollectorPlugin`] captures that contract; [`IfaceCollector`]
//! implements it for `/proc/net/dev`.

pub mod config;
pub mod iface;
pub mod meta;
pub mod metric;
pub mod namespace;

pub use config::{Config, ConfigValue};
pub use iface::{CollectorConfig, IfaceCollector, catalog_namespace, metric_namespace};
pub use meta::{PluginMeta, PluginType};
pub use metric::Metric;
pub use namespace::{Namespace, NamespaceElement, NamespaceError, WILDCARD};

use crate::collector::CollectError;

/// Contract between a collector and the host runtime.
pub trait CollectorPlugin {
    /// Lists every metric this collector can produce, in catalog form.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source cannot be read or parsed.
    fn get_metric_types(&self, config: &Config) -> Result<Vec<Metric>, CollectError>;

    /// Collects current values for the requested metrics.
    ///
    /// # Errors
    ///
    /// Fails the whole batch if the source cannot be read or any requested
    /// metric is unknown.
    fn collect_metrics(&self, metrics: &[Metric]) -> Result<Vec<Metric>, CollectError>;

    fn meta(&self) -> PluginMeta;
}
