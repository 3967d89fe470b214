use super::*;

#[test]
fn worker_kind_round_trips_wire_spelling() {
    for kind in ["classifier_mac", "merge", "forward", "mirror"] {
        assert_eq!(kind.parse::<WorkerKind>().unwrap().to_string(), kind);
    }
    assert!("forwarder".parse::<WorkerKind>().is_err());
}

#[yare::parameterized(
    forward = { WorkerKind::Forward, Some(1), Some(1) },
    mirror = { WorkerKind::Mirror, None, None },
    merge = { WorkerKind::Merge, None, Some(1) },
    classifier_mac = { WorkerKind::ClassifierMac, Some(1), None },
)]
fn fan_caps_match_kind(kind: WorkerKind, expected_rx_cap: Option<usize>, expected_tx_cap: Option<usize>) {
    assert_eq!(kind.rx_cap(), expected_rx_cap);
    assert_eq!(kind.tx_cap(), expected_tx_cap);
}
