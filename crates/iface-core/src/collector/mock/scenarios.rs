//! Pre-built mock filesystem scenarios for testing.
//!
//! These scenarios provide realistic `/proc/net/dev` states for testing the
//! reader and the plugin without a Linux host.

use super::filesystem::MockFs;
use crate::collector::procfs::DEFAULT_NET_DEV_PATH;

/// Header lines as printed by the kernel.
pub const NET_DEV_HEADER: &str = "\
Inter-|   Receive                                                |  Transmit
 face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
";

impl MockFs {
    /// Creates a host with a loopback device and one physical NIC (`p3p1`).
    ///
    /// `lo` reports all zeros; `p3p1` carries non-zero receive and transmit
    /// counters.
    pub fn typical_system() -> Self {
        Self::with_net_dev(format!(
            "{NET_DEV_HEADER}\
    lo:       0       0    0    0    0     0          0         0        0       0    0    0    0     0       0          0
  p3p1: 1412848320 12238775    3   27    0     1          0     40612 3015284922 17015516    0    0    0     2       0          0
"
        ))
    }

    /// Creates a busier host with loopback, bonded NICs and a container bridge.
    pub fn multi_interface_system() -> Self {
        Self::with_net_dev(format!(
            "{NET_DEV_HEADER}\
    lo: 88123456   612345    0    0    0     0          0         0 88123456   612345    0    0    0     0       0          0
  eth0: 9876543210 7654321   12   40    0     0          0     12345 1234567890 2345678    1    3    0     0       0          0
  eth1: 5432109876 4321098    7   11    0     2          0      6789  987654321 1987654    0    1    0     0       0          0
 bond0: 15308653086 11975419   19   51    0     2          0     19134 2222222211 4333332    1    4    0     0       0          0
docker0:   123456     1234    0    0    0     0          0         0   654321     4321    0    0    0     0       0          0
"
        ))
    }

    /// Creates a host whose `/proc/net/dev` has only the header lines.
    pub fn no_interfaces() -> Self {
        Self::with_net_dev(NET_DEV_HEADER)
    }

    /// Creates a host whose `/proc/net/dev` contains a truncated row.
    pub fn malformed_net_dev() -> Self {
        Self::with_net_dev(format!(
            "{NET_DEV_HEADER}\
    lo:       0       0    0    0    0     0          0         0        0       0    0    0    0     0       0          0
  eth0: 1234 56 0 0
"
        ))
    }

    /// Creates a filesystem with the given content at `/proc/net/dev`.
    pub fn with_net_dev(content: impl Into<String>) -> Self {
        Self::with_net_dev_at(DEFAULT_NET_DEV_PATH, content)
    }

    /// Creates a filesystem with the given content at an arbitrary path.
    pub fn with_net_dev_at(path: &str, content: impl Into<String>) -> Self {
        let mut fs = Self::new();
        fs.add_file(path, content);
        fs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::procfs::parse_net_dev;
    use crate::collector::traits::FileSystem;
    use std::path::Path;

    fn parse(fs: &MockFs) -> Result<usize, String> {
        let content = fs
            .read_to_string(Path::new(DEFAULT_NET_DEV_PATH))
            .map_err(|e| e.to_string())?;
        parse_net_dev(&content)
            .map(|s| s.len())
            .map_err(|e| e.to_string())
    }

    #[test]
    fn test_scenarios_parse() {
        assert_eq!(parse(&MockFs::typical_system()), Ok(2));
        assert_eq!(parse(&MockFs::multi_interface_system()), Ok(5));
        assert_eq!(parse(&MockFs::no_interfaces()), Ok(0));
        assert!(parse(&MockFs::malformed_net_dev()).is_err());
    }
}
