//! Parser for `/proc/net/dev`.
//!
//! A pure function over the file content, so it can be tested with string
//! inputs. Unlike a best-effort reader it rejects anything it does not
//! understand: a single bad row fails the whole parse.

use crate::model::{COUNTER_COUNT, InterfaceCounters, StatsSnapshot};

/// Number of header lines preceding the per-interface rows.
pub const HEADER_LINES: usize = 2;

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    /// 1-based line number in the source, 0 when the error is not tied to a line.
    pub line: usize,
    pub message: String,
}

impl ParseError {
    pub fn new(line: usize, msg: impl Into<String>) -> Self {
        Self {
            line,
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.line == 0 {
            write!(f, "Parse error: {}", self.message)
        } else {
            write!(f, "Parse error at line {}: {}", self.line, self.message)
        }
    }
}

impl std::error::Error for ParseError {}

/// Parses `/proc/net/dev` content into a [`StatsSnapshot`].
///
/// Format:
/// Inter-|   Receive                                                |  Transmit
///  face |bytes    packets errs drop fifo frame compressed multicast|bytes    packets errs drop fifo colls carrier compressed
///    lo: 1234567     1234    0    0    0     0          0         0  1234567     1234    0    0    0     0       0          0
///
/// The first two lines are skipped unconditionally. Every other non-blank line
/// must be `<name>: <16 integers>`. Rows are mapped positionally onto
/// [`Counter::ALL`](crate::model::Counter::ALL).
pub fn parse_net_dev(content: &str) -> Result<StatsSnapshot, ParseError> {
    let mut lines = content.lines().enumerate();

    for _ in 0..HEADER_LINES {
        if lines.next().is_none() {
            return Err(ParseError::new(0, "missing header lines"));
        }
    }

    let mut snapshot = StatsSnapshot::new();
    for (idx, line) in lines {
        let lineno = idx + 1;
        if line.trim().is_empty() {
            continue;
        }

        let (name, counters) =
            parse_net_dev_line(line).map_err(|msg| ParseError::new(lineno, msg))?;
        if snapshot.insert(name, counters).is_some() {
            return Err(ParseError::new(
                lineno,
                format!("duplicate interface '{}'", name),
            ));
        }
    }

    Ok(snapshot)
}

/// Parses a single interface row.
fn parse_net_dev_line(line: &str) -> Result<(&str, InterfaceCounters), String> {
    // Names can be glued to the first value when it is wide ("eth0:123456"),
    // so split on the separator rather than on whitespace.
    let (name, rest) = line
        .split_once(':')
        .ok_or_else(|| "missing ':' after interface name".to_string())?;

    let name = name.trim();
    if name.is_empty() {
        return Err("empty interface name".to_string());
    }

    let fields: Vec<&str> = rest.split_whitespace().collect();
    if fields.len() != COUNTER_COUNT {
        return Err(format!(
            "interface '{}': expected {} fields, got {}",
            name,
            COUNTER_COUNT,
            fields.len()
        ));
    }

    let mut values = [0i64; COUNTER_COUNT];
    for (slot, field) in values.iter_mut().zip(&fields) {
        *slot = field
            .parse()
            .map_err(|_| format!("interface '{}': invalid value '{}'", name, field))?;
    }

    Ok((name, InterfaceCounters::new(values)))
}
