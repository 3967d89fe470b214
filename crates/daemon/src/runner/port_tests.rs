use super::*;
use psw_core::{AbilityDirection, AbilityOp, ComponentName, CoreId, PortDirection, PortKind, StateError, WorkerKind};

use crate::runner::worker;
use crate::test_support::fresh_state;

fn start_forward(state: &mut ProcessState, name: &str) {
    worker::start(state, ComponentName::new(name).unwrap(), CoreId::new(2).unwrap(), WorkerKind::Forward).unwrap();
}

#[test]
fn second_rx_port_on_a_forward_component_exceeds_fan_limit() {
    let mut state = fresh_state();
    start_forward(&mut state, "fwd1");
    let name = || ComponentName::new("fwd1").unwrap();

    add(&mut state, PortRef::new(PortKind::Ring, 0), PortDirection::Rx, name(), None).unwrap();
    let err = add(&mut state, PortRef::new(PortKind::Ring, 1), PortDirection::Rx, name(), None).unwrap_err();
    assert_eq!(
        err,
        StateError::FanLimitExceeded { direction: PortDirection::Rx, name: name() }
    );
}

#[test]
fn re_adding_same_port_layers_an_ability_instead_of_erroring() {
    let mut state = fresh_state();
    start_forward(&mut state, "fwd1");
    let name = || ComponentName::new("fwd1").unwrap();
    let target = PortRef::new(PortKind::Ring, 0);

    add(&mut state, target, PortDirection::Rx, name(), None).unwrap();
    let ability = AbilityRequest { op: AbilityOp::AddVlanTag, direction: AbilityDirection::Rx, vid: 42, pcp: 0, tci: 0 };
    add(&mut state, target, PortDirection::Rx, name(), Some(ability)).unwrap();

    let port = state.port(target).unwrap();
    assert_eq!(port.abilities.iter().count(), 1);

    let component = state.find_component_by_name("fwd1").unwrap();
    assert_eq!(component.rx_ports, vec![target]);
}

#[test]
fn re_adding_same_port_with_no_new_ability_is_rejected() {
    let mut state = fresh_state();
    start_forward(&mut state, "fwd1");
    let name = || ComponentName::new("fwd1").unwrap();
    let target = PortRef::new(PortKind::Ring, 0);

    add(&mut state, target, PortDirection::Rx, name(), None).unwrap();
    let err = add(&mut state, target, PortDirection::Rx, name(), None).unwrap_err();
    assert_eq!(
        err,
        StateError::DuplicatePortRef { port: target, direction: PortDirection::Rx, name: name() }
    );
}

#[test]
fn del_removes_port_and_its_abilities() {
    let mut state = fresh_state();
    start_forward(&mut state, "fwd1");
    let name = || ComponentName::new("fwd1").unwrap();
    let target = PortRef::new(PortKind::Ring, 0);
    let ability = AbilityRequest { op: AbilityOp::AddVlanTag, direction: AbilityDirection::Rx, vid: 42, pcp: 0, tci: 0 };
    add(&mut state, target, PortDirection::Rx, name(), Some(ability)).unwrap();

    del(&mut state, target, PortDirection::Rx, name()).unwrap();

    let component = state.find_component_by_name("fwd1").unwrap();
    assert!(component.rx_ports.is_empty());
    assert!(state.port(target).unwrap().abilities.is_empty());
}

#[test]
fn del_for_unknown_component_name_is_rejected() {
    let mut state = fresh_state();
    let err = del(
        &mut state,
        PortRef::new(PortKind::Ring, 0),
        PortDirection::Rx,
        ComponentName::new("ghost").unwrap(),
    )
    .unwrap_err();
    assert_eq!(err, StateError::UnknownComponentName(ComponentName::new("ghost").unwrap()));
}
