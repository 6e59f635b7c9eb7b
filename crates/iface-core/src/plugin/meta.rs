//! Plugin metadata reported to the host.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PluginType {
    Collector,
}

/// Describes the plugin to the host runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluginMeta {
    pub name: &'static str,
    pub version: u32,
    #[serde(rename = "type")]
    pub plugin_type: PluginType,
    /// Maximum number of concurrent calls the host may issue.
    pub concurrency_count: usize,
    /// Whether the host must run this plugin as its only instance.
    pub exclusive: bool,
}
