//! End-to-end checks of the collector against a captured `/proc/net/dev`.

use std::path::{Path, PathBuf};

use iface_core::collector::{CollectError, MockFs, RealFs};
use iface_core::model::Counter;
use iface_core::plugin::{
    CollectorConfig, CollectorPlugin, Config, IfaceCollector, Metric, Namespace,
    metric_namespace,
};

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/proc.net.dev")
}

fn real_collector(source: PathBuf) -> IfaceCollector<RealFs> {
    IfaceCollector::new(RealFs::new(), CollectorConfig { source })
}

#[test]
fn snapshot_from_fixture_file() {
    let plugin = real_collector(fixture());
    assert!(plugin.source_exists());

    let snapshot = plugin.snapshot().unwrap();
    assert_eq!(snapshot.len(), 2);

    let p3p1 = snapshot.interface("p3p1").unwrap();
    assert_eq!(p3p1.iter().count(), 16);
    assert_eq!(p3p1[Counter::BytesRecv], 1412848320);
    assert_eq!(p3p1[Counter::PacketsRecv], 12238775);
    assert_eq!(p3p1[Counter::PacketsSent], 17015516);

    let lo = snapshot.interface("lo").unwrap();
    assert!(lo.iter().all(|(_, v)| v == 0));
}

#[test]
fn catalog_and_collection_round_trip() {
    let plugin = real_collector(fixture());

    let catalog = plugin.get_metric_types(&Config::new()).unwrap();
    assert_eq!(catalog.len(), 16);
    assert!(
        catalog
            .iter()
            .all(|m| m.namespace.to_string().starts_with("/intel/procfs/iface/*/"))
    );

    // Turn every catalog entry into a concrete request for p3p1.
    let requests: Vec<Metric> = catalog
        .iter()
        .map(|m| Metric::request(m.namespace.clone().with_value(3, "p3p1")))
        .collect();
    let collected = plugin.collect_metrics(&requests).unwrap();
    assert_eq!(collected.len(), 16);

    let snapshot = plugin.snapshot().unwrap();
    for (metric, counter) in collected.iter().zip(Counter::ALL) {
        assert_eq!(metric.namespace, metric_namespace("p3p1", counter));
        assert_eq!(metric.data, snapshot.value("p3p1", counter));
    }
}

#[test]
fn mock_loaded_from_fixture_matches_real_fs() {
    let mock = MockFs::from_file(&fixture(), "/proc/net/dev").unwrap();
    let mocked = IfaceCollector::new(mock, CollectorConfig::default());
    let real = real_collector(fixture());

    assert_eq!(mocked.snapshot().unwrap(), real.snapshot().unwrap());
}

#[test]
fn missing_source_fails_every_entry_point() {
    let dir = tempfile::tempdir().unwrap();
    let plugin = real_collector(dir.path().join("absent"));
    let ns: Namespace = "/intel/procfs/iface/lo/bytes_recv".parse().unwrap();

    assert!(matches!(
        plugin.get_metric_types(&Config::new()),
        Err(CollectError::Io(_))
    ));
    assert!(matches!(
        plugin.collect_metrics(&[Metric::request(ns)]),
        Err(CollectError::Io(_))
    ));
    assert_eq!(plugin.meta().name, "iface");
}

#[test]
fn collected_metrics_serialize_for_host() {
    let plugin = real_collector(fixture());
    let ns: Namespace = "/intel/procfs/iface/p3p1/bytes_recv".parse().unwrap();
    let collected = plugin.collect_metrics(&[Metric::request(ns)]).unwrap();

    let json = serde_json::to_value(&collected).unwrap();
    assert_eq!(json[0]["data"], 1412848320_i64);
    assert_eq!(json[0]["unit"], "B");
    assert_eq!(json[0]["namespace"][3]["value"], "p3p1");
    assert_eq!(json[0]["namespace"][3]["name"], "interface");
    assert!(json[0]["timestamp"].is_string());
}
