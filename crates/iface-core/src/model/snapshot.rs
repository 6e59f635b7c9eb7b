//! Point-in-time view of every interface's counters.

use std::collections::BTreeMap;
use std::ops::Index;

use serde::Serialize;

use super::counter::{COUNTER_COUNT, Counter};

/// The 16 counters of one interface, indexed by [`Counter`].
///
/// Source: one data row of `/proc/net/dev`. Values are kept as `i64` so that
/// whatever the kernel reports passes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterfaceCounters {
    values: [i64; COUNTER_COUNT],
}

impl InterfaceCounters {
    pub fn new(values: [i64; COUNTER_COUNT]) -> Self {
        Self { values }
    }

    pub fn get(&self, counter: Counter) -> i64 {
        self.values[counter.column()]
    }

    /// Iterates `(counter, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (Counter, i64)> + '_ {
        Counter::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

impl Index<Counter> for InterfaceCounters {
    type Output = i64;

    fn index(&self, counter: Counter) -> &i64 {
        &self.values[counter.column()]
    }
}

impl Serialize for InterfaceCounters {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(COUNTER_COUNT))?;
        for (counter, value) in self.iter() {
            map.serialize_entry(counter.name(), &value)?;
        }
        map.end()
    }
}

/// Counters of every interface found in one read of the source file.
///
/// Rebuilt on every collection call and owned by that call only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StatsSnapshot {
    interfaces: BTreeMap<String, InterfaceCounters>,
}

impl StatsSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts counters for `name`, returning the previous entry if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        counters: InterfaceCounters,
    ) -> Option<InterfaceCounters> {
        self.interfaces.insert(name.into(), counters)
    }

    pub fn interface(&self, name: &str) -> Option<&InterfaceCounters> {
        self.interfaces.get(name)
    }

    /// Looks up a single counter of a single interface.
    pub fn value(&self, interface: &str, counter: Counter) -> Option<i64> {
        self.interface(interface).map(|c| c.get(counter))
    }

    /// Interface names in sorted order.
    pub fn interface_names(&self) -> impl Iterator<Item = &str> {
        self.interfaces.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InterfaceCounters)> {
        self.interfaces.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.interfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interfaces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequential() -> InterfaceCounters {
        let mut values = [0i64; COUNTER_COUNT];
        for (i, v) in values.iter_mut().enumerate() {
            *v = i as i64 * 10;
        }
        InterfaceCounters::new(values)
    }

    #[test]
    fn test_counters_indexed_by_column() {
        let counters = sequential();
        assert_eq!(counters.get(Counter::BytesRecv), 0);
        assert_eq!(counters.get(Counter::MulticastRecv), 70);
        assert_eq!(counters[Counter::BytesSent], 80);
        assert_eq!(counters[Counter::MulticastSent], 150);
        assert_eq!(counters.iter().count(), COUNTER_COUNT);
    }

    #[test]
    fn test_snapshot_lookup() {
        let mut snapshot = StatsSnapshot::new();
        assert!(snapshot.insert("eth0", sequential()).is_none());
        snapshot.insert("lo", InterfaceCounters::default());

        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.value("eth0", Counter::PacketsRecv), Some(10));
        assert_eq!(snapshot.value("lo", Counter::PacketsRecv), Some(0));
        assert_eq!(snapshot.value("wlan0", Counter::PacketsRecv), None);

        let names: Vec<&str> = snapshot.interface_names().collect();
        assert_eq!(names, vec!["eth0", "lo"]);
    }

    #[test]
    fn test_snapshot_serializes_as_nested_map() {
        let mut snapshot = StatsSnapshot::new();
        snapshot.insert("lo", sequential());

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["lo"]["bytes_recv"], 0);
        assert_eq!(json["lo"]["packets_sent"], 90);
        assert_eq!(json["lo"].as_object().unwrap().len(), COUNTER_COUNT);
    }
}
