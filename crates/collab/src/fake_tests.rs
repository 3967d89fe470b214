use super::*;

fn snapshot(id: ComponentId) -> ComponentSnapshot {
    ComponentSnapshot {
        id,
        name: "c".into(),
        lcore_id: CoreId::new(0).unwrap(),
        rx_ports: Vec::new(),
        tx_ports: Vec::new(),
    }
}

#[test]
fn records_update_calls() {
    let collab = FakeCollaborator::new();
    let id = ComponentId::new(1).unwrap();
    collab.update_classifier(&snapshot(id)).unwrap();
    assert_eq!(collab.calls(), vec![CollabCall::UpdateClassifier(id)]);
}

#[test]
fn fail_update_for_makes_update_return_error() {
    let collab = FakeCollaborator::new();
    let id = ComponentId::new(2).unwrap();
    collab.fail_update_for(id);
    assert!(collab.update_forwarder(&snapshot(id)).is_err());
}

#[test]
fn fake_driver_hands_out_increasing_ids() {
    let driver = FakeDriver::new();
    let a = driver.add_ring_pmd(0).unwrap();
    let b = driver.add_vhost_pmd(0, true).unwrap();
    assert_ne!(a, b);
}
