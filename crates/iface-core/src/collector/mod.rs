//! Network interface statistics reader for Linux.
//!
//! Reads the kernel's `/proc/net/dev` table, with support for mocking for
//! testing on macOS.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │               StatsReader               │
//! │  - /proc/net/dev  (configurable path)   │
//! │  - parse_net_dev  (pure, strict)        │
//! └────────────────────┬────────────────────┘
//!                      │
//!               ┌──────▼──────┐
//!               │  FileSystem │ (trait)
//!               └──────┬──────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        │             │             │
//! ┌──────▼──────┐ ┌────▼────────┐ ┌──▼──────────┐
//! │   RealFs    │ │   MockFs    │ │  Scenarios  │
//! │ (Linux)     │ │ (Testing)   │ │ (Fixtures)  │
//! └─────────────┘ └─────────────┘ └─────────────┘
//! ```
//!
//! # Usage
//!
//! ## Production (Linux)
//!
//! ```ignore
//! use iface_core::collector::{RealFs, StatsReader};
//!
//! let reader = StatsReader::new(RealFs::new(), "/proc/net/dev");
//! let snapshot = reader.read().unwrap();
//! ```
//!
//! ## Testing (with MockFs)
//!
//! ```
//! use iface_core::collector::{MockFs, StatsReader};
//!
//! let reader = StatsReader::new(MockFs::typical_system(), "/proc/net/dev");
//! let snapshot = reader.read().unwrap();
//! assert_eq!(snapshot.len(), 2);
//! ```

pub mod mock;
pub mod procfs;
pub mod traits;

pub use mock::MockFs;
pub use procfs::{CollectError, DEFAULT_NET_DEV_PATH, ParseError, StatsReader};
pub use traits::{FileSystem, RealFs};
