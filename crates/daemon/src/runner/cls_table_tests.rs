use super::*;
use psw_core::{CoreId, PortKind, StateError};
use psw_wire::ClsKind;

use crate::runner::worker;
use crate::test_support::fresh_state;

fn phy0() -> PortRef {
    PortRef::new(PortKind::Phy, 0)
}

#[test]
fn add_twice_on_same_port_is_rejected() {
    let mut state = fresh_state();
    let mac = MacAddr::parse("aa:bb:cc:dd:ee:00").unwrap();
    add(&mut state, ClsKind::Mac, ETH_VLAN_ID_MAX, mac, phy0(), false).unwrap();
    let err = add(&mut state, ClsKind::Mac, ETH_VLAN_ID_MAX, mac, phy0(), false).unwrap_err();
    assert_eq!(err, StateError::PortAlreadyUsed(phy0()));
}

#[test]
fn del_with_mismatched_mac_is_rejected_and_state_unchanged() {
    let mut state = fresh_state();
    let registered = MacAddr::parse("aa:bb:cc:dd:ee:00").unwrap();
    add(&mut state, ClsKind::Mac, ETH_VLAN_ID_MAX, registered, phy0(), false).unwrap();

    let other = MacAddr::parse("aa:bb:cc:dd:ee:99").unwrap();
    let err = del(&mut state, ClsKind::Mac, ETH_VLAN_ID_MAX, other, phy0(), false).unwrap_err();
    assert_eq!(err, StateError::ClassifierMismatch(phy0()));
    assert_eq!(state.port(phy0()).unwrap().classifier.mac, registered);
}

#[test]
fn default_route_requires_an_existing_classifier_owner() {
    let mut state = fresh_state();
    let mac = MacAddr::parse("aa:bb:cc:dd:ee:00").unwrap();
    let err = add(&mut state, ClsKind::Mac, ETH_VLAN_ID_MAX, mac, phy0(), true).unwrap_err();
    assert_eq!(err, StateError::NoClassifierOwner(phy0()));
}

#[test]
fn default_route_is_written_to_the_owning_classifier() {
    let mut state = fresh_state();
    worker::start(
        &mut state,
        psw_core::ComponentName::new("cls1").unwrap(),
        CoreId::new(2).unwrap(),
        psw_core::WorkerKind::ClassifierMac,
    )
    .unwrap();
    let id = state.find_component_by_name("cls1").unwrap().id;
    state.component_mut(id).unwrap().tx_ports.push(phy0());

    add(&mut state, ClsKind::Mac, ETH_VLAN_ID_MAX, MacAddr::ZERO, phy0(), true).unwrap();
    assert_eq!(state.component(id).unwrap().default_target, Some(phy0()));
}
