//! Readers for the Linux `/proc` filesystem.
//!
//! Only the network device table is read: `parser` turns its text into a
//! snapshot, `reader` fetches it through a [`FileSystem`](crate::collector::FileSystem).

pub mod parser;
pub mod reader;

pub use parser::{ParseError, parse_net_dev};
pub use reader::{CollectError, DEFAULT_NET_DEV_PATH, StatsReader};
