//! The network interface collector plugin.
//!
//! Every call re-reads the statistics table; nothing is cached between calls
//! because the counters are live kernel state.

use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;

use super::config::Config;
use super::meta::{PluginMeta, PluginType};
use super::metric::Metric;
use super::namespace::Namespace;
use super::CollectorPlugin;
use crate::collector::{CollectError, DEFAULT_NET_DEV_PATH, FileSystem, StatsReader};
use crate::model::{Counter, InterfaceCounters, StatsSnapshot};

/// First namespace element.
pub const VENDOR: &str = "intel";
/// Second namespace element.
pub const SOURCE: &str = "procfs";
/// Plugin name, also the third namespace element.
pub const PLUGIN_NAME: &str = "iface";
pub const PLUGIN_VERSION: u32 = 1;

const DEFAULT_CONCURRENCY: usize = 5;

/// Position of the interface element in a metric namespace.
const INTERFACE_INDEX: usize = 3;
/// Position of the counter element in a metric namespace.
const COUNTER_INDEX: usize = 4;
const NAMESPACE_LEN: usize = 5;

/// Collector settings fixed at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Statistics table to read. Defaults to `/proc/net/dev`.
    pub source: PathBuf,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_NET_DEV_PATH),
        }
    }
}

/// Builds the namespace of `counter` with the wildcard interface element.
pub fn catalog_namespace(counter: Counter) -> Namespace {
    Namespace::new(&[VENDOR, SOURCE, PLUGIN_NAME])
        .add_dynamic_element("interface", "name of the network interface")
        .add_static_element(counter.name())
}

/// Builds the namespace of `counter` on a concrete interface.
pub fn metric_namespace(interface: &str, counter: Counter) -> Namespace {
    catalog_namespace(counter).with_value(INTERFACE_INDEX, interface)
}

/// Interface part of a collection request.
enum InterfaceSelector<'a> {
    All,
    Named(&'a str),
}

/// Collects per-interface counters from `/proc/net/dev`.
pub struct IfaceCollector<F: FileSystem> {
    reader: StatsReader<F>,
}

impl<F: FileSystem> IfaceCollector<F> {
    /// Creates a new collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `config` - Collector settings, see [`CollectorConfig::default`]
    pub fn new(fs: F, config: CollectorConfig) -> Self {
        Self {
            reader: StatsReader::new(fs, config.source),
        }
    }

    pub fn source(&self) -> &Path {
        self.reader.path()
    }

    /// Returns whether the statistics table is present.
    pub fn source_exists(&self) -> bool {
        self.reader.source_exists()
    }

    /// Reads a fresh snapshot of every interface.
    pub fn snapshot(&self) -> Result<StatsSnapshot, CollectError> {
        self.reader.read()
    }
}

/// Splits a requested namespace into its interface and counter parts.
fn parse_request(
    namespace: &Namespace,
) -> Result<(InterfaceSelector<'_>, Counter), CollectError> {
    let values = namespace.values();
    let prefix = [VENDOR, SOURCE, PLUGIN_NAME];
    if values.len() != NAMESPACE_LEN || values[..INTERFACE_INDEX] != prefix {
        return Err(CollectError::Lookup(format!(
            "'{}' is not an interface metric",
            namespace
        )));
    }

    let counter = values[COUNTER_INDEX]
        .parse::<Counter>()
        .map_err(|e| CollectError::Lookup(format!("{} in '{}'", e, namespace)))?;

    let element = &namespace.elements()[INTERFACE_INDEX];
    let selector = if element.is_wildcard() {
        InterfaceSelector::All
    } else {
        InterfaceSelector::Named(&element.value)
    };
    Ok((selector, counter))
}

fn collected(
    request: &Metric,
    interface: &str,
    counters: &InterfaceCounters,
    counter: Counter,
    timestamp: chrono::DateTime<Utc>,
) -> Metric {
    Metric {
        namespace: metric_namespace(interface, counter),
        data: Some(counters.get(counter)),
        unit: counter.unit().to_string(),
        description: counter.description().to_string(),
        timestamp: Some(timestamp),
        config: request.config.clone(),
    }
}

impl<F: FileSystem> CollectorPlugin for IfaceCollector<F> {
    /// Returns one wildcard metric per counter.
    ///
    /// The snapshot is still read so that an unreadable or malformed source
    /// fails the call. Every parsed row has all 16 columns, so the distinct
    /// counters observed are always [`Counter::ALL`].
    fn get_metric_types(&self, config: &Config) -> Result<Vec<Metric>, CollectError> {
        let snapshot = self.snapshot()?;
        debug!(
            interfaces = snapshot.len(),
            config_keys = config.len(),
            "building metric catalog"
        );

        Ok(Counter::ALL
            .into_iter()
            .map(|counter| Metric {
                namespace: catalog_namespace(counter),
                data: None,
                unit: counter.unit().to_string(),
                description: counter.description().to_string(),
                timestamp: None,
                config: Config::default(),
            })
            .collect())
    }

    /// Looks up every requested metric in one fresh snapshot.
    ///
    /// A wildcard interface element expands to every interface, in name order.
    /// Any unknown interface or counter fails the whole call.
    fn collect_metrics(&self, metrics: &[Metric]) -> Result<Vec<Metric>, CollectError> {
        let snapshot = self.snapshot()?;
        let timestamp = Utc::now();

        let mut results = Vec::with_capacity(metrics.len());
        for request in metrics {
            let (selector, counter) = parse_request(&request.namespace)?;
            match selector {
                InterfaceSelector::All => {
                    for (interface, counters) in snapshot.iter() {
                        results.push(collected(request, interface, counters, counter, timestamp));
                    }
                }
                InterfaceSelector::Named(interface) => {
                    let counters = snapshot.interface(interface).ok_or_else(|| {
                        CollectError::Lookup(format!(
                            "interface '{}' not found in {}",
                            interface,
                            self.source().display()
                        ))
                    })?;
                    results.push(collected(request, interface, counters, counter, timestamp));
                }
            }
        }

        debug!(
            requested = metrics.len(),
            collected = results.len(),
            "collected interface metrics"
        );
        Ok(results)
    }

    fn meta(&self) -> PluginMeta {
        PluginMeta {
            name: PLUGIN_NAME,
            version: PLUGIN_VERSION,
            plugin_type: PluginType::Collector,
            concurrency_count: DEFAULT_CONCURRENCY,
            exclusive: false,
        }
    }
}
