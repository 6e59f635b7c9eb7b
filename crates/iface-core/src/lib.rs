//! iface-core — network interface counter collector.
//!
//! Provides:
//! - `collector` — filesystem abstraction and the `/proc/net/dev` reader
//! - `model` — counter taxonomy and per-interface snapshot
//! - `plugin` — metric namespaces, host contract and the `iface` collector

pub mod collector;
pub mod model;
pub mod plugin;
