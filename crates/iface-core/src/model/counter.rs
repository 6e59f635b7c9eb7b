//! The fixed taxonomy of per-interface counters.
//!
//! `/proc/net/dev` carries 16 numeric columns per interface: eight for the
//! receive direction followed by eight for the transmit direction. Both halves
//! are named with the same eight stems, suffixed `_recv` and `_sent`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of counters tracked per interface.
pub const COUNTER_COUNT: usize = 16;

/// Traffic direction of a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Receive,
    Transmit,
}

/// One of the 16 counters reported for each interface.
///
/// Variants are declared in `/proc/net/dev` column order, so the
/// discriminant is the column index after the interface name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Counter {
    BytesRecv,
    PacketsRecv,
    ErrsRecv,
    DropRecv,
    FifoRecv,
    FrameRecv,
    CompressedRecv,
    MulticastRecv,
    BytesSent,
    PacketsSent,
    ErrsSent,
    DropSent,
    FifoSent,
    FrameSent,
    CompressedSent,
    MulticastSent,
}

impl Counter {
    /// All counters in column order.
    pub const ALL: [Counter; COUNTER_COUNT] = [
        Counter::BytesRecv,
        Counter::PacketsRecv,
        Counter::ErrsRecv,
        Counter::DropRecv,
        Counter::FifoRecv,
        Counter::FrameRecv,
        Counter::CompressedRecv,
        Counter::MulticastRecv,
        Counter::BytesSent,
        Counter::PacketsSent,
        Counter::ErrsSent,
        Counter::DropSent,
        Counter::FifoSent,
        Counter::FrameSent,
        Counter::CompressedSent,
        Counter::MulticastSent,
    ];

    /// Zero-based column index of this counter in a `/proc/net/dev` row.
    pub fn column(self) -> usize {
        self as usize
    }

    /// Metric name used as the last namespace segment.
    pub fn name(self) -> &'static str {
        match self {
            Counter::BytesRecv => "bytes_recv",
            Counter::PacketsRecv => "packets_recv",
            Counter::ErrsRecv => "errs_recv",
            Counter::DropRecv => "drop_recv",
            Counter::FifoRecv => "fifo_recv",
            Counter::FrameRecv => "frame_recv",
            Counter::CompressedRecv => "compressed_recv",
            Counter::MulticastRecv => "multicast_recv",
            Counter::BytesSent => "bytes_sent",
            Counter::PacketsSent => "packets_sent",
            Counter::ErrsSent => "errs_sent",
            Counter::DropSent => "drop_sent",
            Counter::FifoSent => "fifo_sent",
            Counter::FrameSent => "frame_sent",
            Counter::CompressedSent => "compressed_sent",
            Counter::MulticastSent => "multicast_sent",
        }
    }

    pub fn direction(self) -> Direction {
        if self.column() < COUNTER_COUNT / 2 {
            Direction::Receive
        } else {
            Direction::Transmit
        }
    }

    /// Unit reported alongside the metric value.
    pub fn unit(self) -> &'static str {
        match self {
            Counter::BytesRecv | Counter::BytesSent => "B",
            Counter::ErrsRecv
            | Counter::ErrsSent
            | Counter::FifoRecv
            | Counter::FifoSent
            | Counter::FrameRecv
            | Counter::FrameSent
            | Counter::CompressedSent => "errors",
            _ => "packets",
        }
    }

    /// Human-readable description for the metric catalog.
    pub fn description(self) -> &'static str {
        match self {
            Counter::BytesRecv => "The total number of bytes of data received by the interface",
            Counter::PacketsRecv => "The total number of packets of data received by the interface",
            Counter::ErrsRecv => {
                "The total number of receive errors detected by the device driver"
            }
            Counter::DropRecv => {
                "The total number of received packets dropped by the device driver"
            }
            Counter::FifoRecv => "The number of receive FIFO buffer errors",
            Counter::FrameRecv => "The number of packet framing errors on receive",
            Counter::CompressedRecv => {
                "The number of compressed packets received by the device driver"
            }
            Counter::MulticastRecv => {
                "The number of multicast frames received by the device driver"
            }
            Counter::BytesSent => "The total number of bytes of data transmitted by the interface",
            Counter::PacketsSent => {
                "The total number of packets of data transmitted by the interface"
            }
            Counter::ErrsSent => {
                "The total number of transmit errors detected by the device driver"
            }
            Counter::DropSent => {
                "The total number of transmitted packets dropped by the device driver"
            }
            Counter::FifoSent => "The number of transmit FIFO buffer errors",
            Counter::FrameSent => "The number of collisions detected on the interface",
            Counter::CompressedSent => {
                "The number of carrier losses detected by the device driver"
            }
            Counter::MulticastSent => {
                "The number of compressed packets transmitted by the device driver"
            }
        }
    }
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a string does not name one of the 16 counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCounter(pub String);

impl fmt::Display for UnknownCounter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown counter '{}'", self.0)
    }
}

impl std::error::Error for UnknownCounter {}

impl FromStr for Counter {
    type Err = UnknownCounter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Counter::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| UnknownCounter(s.to_string()))
    }
}
