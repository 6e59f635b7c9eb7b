//! Mock filesystem and `/proc/net/dev` fixtures.

mod filesystem;
mod scenarios;

pub use filesystem::MockFs;
pub use scenarios::NET_DEV_HEADER;
