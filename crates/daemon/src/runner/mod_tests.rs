use super::*;
use psw_collab::fake::FakeCollaborator;
use psw_core::{ComponentName, CoreId, MacAddr, PortKind, WorkerKind};
use psw_wire::{ClsAction, ClsKind, WorkerAction};

use crate::test_support::fresh_state;

#[test]
fn labels_match_wire_verbs() {
    let worker_cmd = Command::Worker {
        action: WorkerAction::Start,
        name: ComponentName::new("c1").unwrap(),
        lcore_id: CoreId::new(2).unwrap(),
        kind: WorkerKind::Forward,
    };
    assert_eq!(command_label(&worker_cmd), "component");
    assert_eq!(command_label(&Command::Status), "status");
    assert_eq!(command_label(&Command::Exit), "exit");
}

#[test]
fn execute_dispatches_worker_start_as_mutated() {
    let mut state = fresh_state();
    let collaborator = FakeCollaborator::default();
    let command = Command::Worker {
        action: WorkerAction::Start,
        name: ComponentName::new("fwd1").unwrap(),
        lcore_id: CoreId::new(2).unwrap(),
        kind: WorkerKind::Forward,
    };
    let outcome = execute(&mut state, &collaborator, command).unwrap();
    assert!(matches!(outcome, Outcome::Mutated));
    assert!(state.find_component_by_name("fwd1").is_some());
}

#[test]
fn execute_dispatches_status_with_elements() {
    let mut state = fresh_state();
    let collaborator = FakeCollaborator::default();
    let outcome = execute(&mut state, &collaborator, Command::Status).unwrap();
    match outcome {
        Outcome::Status(elements) => assert!(!elements.is_empty()),
        _ => panic!("expected Status outcome"),
    }
}

#[test]
fn execute_dispatches_exit() {
    let mut state = fresh_state();
    let collaborator = FakeCollaborator::default();
    let outcome = execute(&mut state, &collaborator, Command::Exit).unwrap();
    assert!(matches!(outcome, Outcome::Exit));
}

#[test]
fn execute_propagates_runner_errors() {
    let mut state = fresh_state();
    let collaborator = FakeCollaborator::default();
    let command = Command::ClsTable {
        action: ClsAction::Add,
        kind: ClsKind::Mac,
        vid: 0,
        mac: MacAddr::ZERO,
        target: psw_core::PortRef::new(PortKind::Phy, 9),
        is_default: false,
    };
    let err = execute(&mut state, &collaborator, command).unwrap_err();
    assert_eq!(err, psw_core::StateError::UnknownPort(psw_core::PortRef::new(PortKind::Phy, 9)));
}
