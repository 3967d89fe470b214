use super::*;
use crate::component::WorkerKind;
use crate::ids::ComponentName;
use crate::port::PortKind;

fn startup() -> StartupParams {
    StartupParams {
        client_id: 1,
        controller_ip: "127.0.0.1".into(),
        controller_port: 5555,
        vhost_client: false,
        secondary_type: "vf".into(),
    }
}

fn fresh_state() -> ProcessState {
    let ports = vec![
        Port::new(PortRef::new(PortKind::Ring, 0), 100),
        Port::new(PortRef::new(PortKind::Ring, 1), 101),
    ];
    let lcores = [CoreId::new(2).unwrap(), CoreId::new(3).unwrap()];
    ProcessState::new(startup(), ports, &lcores)
}

#[test]
fn assigned_lcores_start_idle_others_unused() {
    let state = fresh_state();
    assert_eq!(state.core(CoreId::new(2).unwrap()).status(), CoreStatus::Idle);
    assert_eq!(state.core(CoreId::new(0).unwrap()).status(), CoreStatus::Unused);
}

#[test]
fn allocate_component_id_finds_lowest_free_slot() {
    let mut state = fresh_state();
    let core_id = CoreId::new(2).unwrap();
    let id0 = state.allocate_component_id().unwrap();
    assert_eq!(id0.get(), 0);
    state.insert_component(Component::new(
        id0,
        ComponentName::new("c0").unwrap(),
        WorkerKind::Forward,
        core_id,
    ));
    let id1 = state.allocate_component_id().unwrap();
    assert_eq!(id1.get(), 1);
}

#[test]
fn name_lookup_tracks_insert_and_remove() {
    let mut state = fresh_state();
    let core_id = CoreId::new(2).unwrap();
    let id = state.allocate_component_id().unwrap();
    state.insert_component(Component::new(
        id,
        ComponentName::new("cls1").unwrap(),
        WorkerKind::ClassifierMac,
        core_id,
    ));
    assert!(state.find_component_by_name("cls1").is_some());
    state.remove_component(id);
    assert!(state.find_component_by_name("cls1").is_none());
}

#[test]
fn backup_restore_round_trips_component_table() {
    let mut state = fresh_state();
    let core_id = CoreId::new(2).unwrap();
    state.snapshot_backup();
    let id = state.allocate_component_id().unwrap();
    state.insert_component(Component::new(
        id,
        ComponentName::new("temp").unwrap(),
        WorkerKind::Mirror,
        core_id,
    ));
    assert!(state.component(id).is_some());
    state.restore_from_backup();
    assert!(state.component(id).is_none());
}

#[test]
fn empty_state_satisfies_invariants() {
    let state = fresh_state();
    assert!(state.check_invariants().is_ok());
}

#[test]
fn dirty_bitmaps_clear_after_flush() {
    let mut state = fresh_state();
    state.mark_core_dirty(CoreId::new(2).unwrap());
    state.mark_component_dirty(ComponentId::new(0).unwrap());
    assert_eq!(state.changed_cores().count(), 1);
    state.clear_dirty();
    assert_eq!(state.changed_cores().count(), 0);
    assert_eq!(state.changed_components().count(), 0);
}
