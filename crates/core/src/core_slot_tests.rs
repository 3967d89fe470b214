use super::*;

#[test]
fn new_core_is_unused_and_empty() {
    let core = CoreSlot::new();
    assert_eq!(core.status(), CoreStatus::Unused);
    assert!(core.live_components().is_empty());
}

#[test]
fn shadow_edits_are_invisible_until_flip() {
    let core = CoreSlot::new();
    core.with_shadow_mut(|shadow| shadow.push(ComponentId::new(3).unwrap()));
    assert!(core.live_components().is_empty());
    core.flip();
    assert_eq!(core.live_components(), vec![ComponentId::new(3).unwrap()]);
}

#[test]
fn sync_shadow_from_live_carries_forward_prior_commits() {
    let core = CoreSlot::new();
    core.with_shadow_mut(|shadow| shadow.push(ComponentId::new(1).unwrap()));
    core.flip();
    core.sync_shadow_from_live();
    core.with_shadow_mut(|shadow| shadow.push(ComponentId::new(2).unwrap()));
    core.flip();
    let live = core.live_components();
    assert_eq!(live, vec![ComponentId::new(1).unwrap(), ComponentId::new(2).unwrap()]);
}

#[test]
fn status_transitions_are_visible_immediately() {
    let core = CoreSlot::new();
    core.set_status(CoreStatus::Forwarding);
    assert_eq!(core.status(), CoreStatus::Forwarding);
    core.set_status(CoreStatus::StopRequested);
    assert_eq!(core.status(), CoreStatus::StopRequested);
}
